//! Admin Review Workflow
//!
//! Point-in-time listing of both collections and the status transition
//! operation. The admin surface may set any status from any other status
//! (no transition graph is enforced), and a status update that targets a
//! missing record ID is a silent no-op — both behaviors are deliberate
//! and covered by tests.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use shared::models::{Booking, PreOrder, Status};

use crate::store::{self, RecordStore};
use crate::utils::AppResult;

/// Which collection a status update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Booking,
    #[serde(rename = "preorder")]
    PreOrder,
}

impl RecordKind {
    pub fn collection(&self) -> &'static str {
        match self {
            RecordKind::Booking => store::BOOKINGS,
            RecordKind::PreOrder => store::PREORDERS,
        }
    }
}

/// Per-status record counts for the dashboard header
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    fn tally(statuses: impl Iterator<Item = Status>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            match status {
                Status::Pending => counts.pending += 1,
                Status::Confirmed => counts.confirmed += 1,
                Status::Completed => counts.completed += 1,
                Status::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }
}

/// Point-in-time view of both collections
///
/// Loaded at call time; a caller must re-invoke [`list_all`] to observe
/// writes made elsewhere.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub bookings: Vec<Booking>,
    pub preorders: Vec<PreOrder>,
    pub booking_counts: StatusCounts,
    pub preorder_counts: StatusCounts,
}

/// Load both collections and tally their statuses
pub fn list_all(store: &RecordStore) -> AppResult<Overview> {
    let bookings: Vec<Booking> = store.load_all(store::BOOKINGS)?;
    let preorders: Vec<PreOrder> = store.load_all(store::PREORDERS)?;

    let booking_counts = StatusCounts::tally(bookings.iter().map(|b| b.status));
    let preorder_counts = StatusCounts::tally(preorders.iter().map(|o| o.status));

    Ok(Overview {
        bookings,
        preorders,
        booking_counts,
        preorder_counts,
    })
}

/// Records whose status the admin surface can replace
trait StatusRecord {
    fn id(&self) -> i64;
    fn set_status(&mut self, status: Status);
}

impl StatusRecord for Booking {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl StatusRecord for PreOrder {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

/// Replace the status of the record with the given ID
///
/// Persists the whole collection on a hit. Returns whether a record was
/// updated; an unknown ID leaves the store untouched and raises nothing.
pub fn set_status(
    store: &RecordStore,
    kind: RecordKind,
    id: i64,
    status: Status,
) -> AppResult<bool> {
    match kind {
        RecordKind::Booking => update_collection::<Booking>(store, kind.collection(), id, status),
        RecordKind::PreOrder => update_collection::<PreOrder>(store, kind.collection(), id, status),
    }
}

fn update_collection<T>(
    store: &RecordStore,
    collection: &str,
    id: i64,
    status: Status,
) -> AppResult<bool>
where
    T: StatusRecord + Serialize + DeserializeOwned,
{
    let mut records: Vec<T> = store.load_all(collection)?;

    let mut updated = false;
    for record in &mut records {
        if record.id() == id {
            record.set_status(status);
            updated = true;
        }
    }

    if updated {
        store.save_all(collection, &records)?;
        tracing::info!(collection, id, status = %status, "Record status updated");
    } else {
        tracing::debug!(collection, id, "Status update targeted a missing record, no-op");
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::{booking, preorder};
    use shared::models::{BookingCreate, PreOrderCreate};
    use std::collections::BTreeMap;

    fn stored_booking(store: &RecordStore) -> Booking {
        booking::submit(
            store,
            BookingCreate {
                name: "Jane".to_string(),
                email: "j@x.com".to_string(),
                phone: "555".to_string(),
                date: "2030-01-01".to_string(),
                time: "19:00".to_string(),
                guests: "2".to_string(),
                area: "family".to_string(),
            },
        )
        .unwrap()
    }

    fn stored_preorder(store: &RecordStore) -> PreOrder {
        preorder::submit(
            store,
            PreOrderCreate {
                name: "Sam".to_string(),
                email: "s@x.com".to_string(),
                phone: "556".to_string(),
                pickup_time: "2030-01-01T18:00".to_string(),
                items: BTreeMap::from([("1".to_string(), 1)]),
            },
        )
        .unwrap()
    }

    #[test]
    fn confirms_a_pending_booking() {
        let store = RecordStore::open_in_memory().unwrap();
        let created = stored_booking(&store);

        let updated = set_status(&store, RecordKind::Booking, created.id, Status::Confirmed).unwrap();
        assert!(updated);

        let stored: Vec<Booking> = store.load_all(store::BOOKINGS).unwrap();
        assert_eq!(stored[0].status, Status::Confirmed);
    }

    #[test]
    fn set_status_is_idempotent() {
        let store = RecordStore::open_in_memory().unwrap();
        let created = stored_booking(&store);

        set_status(&store, RecordKind::Booking, created.id, Status::Confirmed).unwrap();
        let first: Vec<Booking> = store.load_all(store::BOOKINGS).unwrap();

        set_status(&store, RecordKind::Booking, created.id, Status::Confirmed).unwrap();
        let second: Vec<Booking> = store.load_all(store::BOOKINGS).unwrap();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn unknown_id_is_a_silent_noop() {
        let store = RecordStore::open_in_memory().unwrap();
        stored_preorder(&store);

        let before: Vec<PreOrder> = store.load_all(store::PREORDERS).unwrap();
        let updated = set_status(&store, RecordKind::PreOrder, 999_999, Status::Completed).unwrap();
        let after: Vec<PreOrder> = store.load_all(store::PREORDERS).unwrap();

        assert!(!updated);
        assert_eq!(
            serde_json::to_value(&before).unwrap(),
            serde_json::to_value(&after).unwrap()
        );
    }

    #[test]
    fn any_status_may_follow_any_other() {
        let store = RecordStore::open_in_memory().unwrap();
        let created = stored_booking(&store);

        set_status(&store, RecordKind::Booking, created.id, Status::Completed).unwrap();
        // Backwards transition is permitted by design
        set_status(&store, RecordKind::Booking, created.id, Status::Pending).unwrap();

        let stored: Vec<Booking> = store.load_all(store::BOOKINGS).unwrap();
        assert_eq!(stored[0].status, Status::Pending);
    }

    #[test]
    fn kinds_address_separate_collections() {
        let store = RecordStore::open_in_memory().unwrap();
        let booking = stored_booking(&store);
        let order = stored_preorder(&store);

        // A booking ID aimed at the preorder collection touches nothing
        let updated = set_status(&store, RecordKind::PreOrder, booking.id, Status::Cancelled).unwrap();
        assert!(!updated);

        let orders: Vec<PreOrder> = store.load_all(store::PREORDERS).unwrap();
        assert_eq!(orders[0].id, order.id);
        assert_eq!(orders[0].status, Status::Pending);
    }

    #[test]
    fn list_all_reflects_the_point_in_time_state() {
        let store = RecordStore::open_in_memory().unwrap();
        let booking = stored_booking(&store);
        stored_preorder(&store);

        let overview = list_all(&store).unwrap();
        assert_eq!(overview.bookings.len(), 1);
        assert_eq!(overview.preorders.len(), 1);
        assert_eq!(overview.booking_counts.pending, 1);
        assert_eq!(overview.preorder_counts.pending, 1);

        // A later write is only visible on re-invocation
        set_status(&store, RecordKind::Booking, booking.id, Status::Confirmed).unwrap();
        assert_eq!(overview.booking_counts.confirmed, 0);

        let fresh = list_all(&store).unwrap();
        assert_eq!(fresh.booking_counts.confirmed, 1);
        assert_eq!(fresh.booking_counts.pending, 0);
    }
}
