//! Pre-Order Workflow
//!
//! Quantity-map adjustment, total computation against the static
//! pre-order catalog, and order submission into the `preorders`
//! collection.
//!
//! Totals use `Decimal` internally and `f64` at the storage boundary.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use shared::models::{PreOrder, PreOrderCreate, Status};
use shared::util::record_id;

use crate::catalog::{CatalogItem, PRE_ORDER_CATALOG};
use crate::store::{self, RecordStore};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult, time};

/// Apply a quantity delta to an in-memory selection
///
/// Clamps so a quantity never goes negative; an entry that would reach
/// zero or below is removed outright, so the map never stores a zero.
pub fn adjust_quantity(items: &mut BTreeMap<String, u32>, item_id: &str, delta: i32) {
    let current = items.get(item_id).copied().unwrap_or(0) as i64;
    let next = (current + delta as i64).min(u32::MAX as i64);
    if next <= 0 {
        items.remove(item_id);
    } else {
        items.insert(item_id.to_string(), next as u32);
    }
}

/// Sum of unit price × quantity over the selection
///
/// An item ID absent from the catalog contributes zero; a stale selection
/// prices low rather than failing the submission.
pub fn compute_total(items: &BTreeMap<String, u32>, catalog: &[CatalogItem]) -> f64 {
    let mut total = Decimal::ZERO;
    for (item_id, quantity) in items {
        let Some(entry) = catalog.iter().find(|c| c.id == item_id.as_str()) else {
            continue;
        };
        let price = Decimal::from_f64(entry.price).unwrap_or(Decimal::ZERO);
        total += price * Decimal::from(*quantity);
    }
    total.round_dp(2).to_f64().unwrap_or(0.0)
}

/// Validated pre-order fields, ready to become a stored record
#[derive(Debug, Clone)]
pub struct PreOrderFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup_time: NaiveDateTime,
    pub items: BTreeMap<String, u32>,
}

impl PreOrderFields {
    /// Assign a fresh ID, the computed total and the initial status
    fn into_record(self) -> PreOrder {
        let total = compute_total(&self.items, &PRE_ORDER_CATALOG);
        PreOrder {
            id: record_id(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            pickup_time: self.pickup_time,
            items: self.items,
            total,
            status: Status::Pending,
        }
    }
}

/// Validate the raw pre-order form
///
/// Customer fields must be non-empty, the pickup time must parse and not
/// lie in the past, and the selection must hold at least one positive
/// quantity after non-positive entries are dropped.
pub fn validate(form: &PreOrderCreate) -> AppResult<PreOrderFields> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&form.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&form.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&form.pickup_time, "pickupTime", MAX_SHORT_TEXT_LEN)?;

    let pickup_time = time::parse_datetime_local(form.pickup_time.trim())?;
    time::validate_not_past_datetime(pickup_time)?;

    let items: BTreeMap<String, u32> = form
        .items
        .iter()
        .filter(|(_, qty)| **qty >= 1)
        .map(|(id, qty)| (id.clone(), *qty as u32))
        .collect();
    if items.is_empty() {
        return Err(AppError::validation(
            "at least one item must be selected".to_string(),
        ));
    }

    Ok(PreOrderFields {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        pickup_time,
        items,
    })
}

/// Submit a pre-order: validate, price, append, persist
pub fn submit(store: &RecordStore, form: PreOrderCreate) -> AppResult<PreOrder> {
    let order = validate(&form)?.into_record();

    let mut orders: Vec<PreOrder> = store.load_all(store::PREORDERS)?;
    orders.push(order.clone());
    store.save_all(store::PREORDERS, &orders)?;

    tracing::info!(
        id = order.id,
        total = order.total,
        items = order.items.len(),
        "Pre-order stored"
    );
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PreOrderCreate {
        PreOrderCreate {
            name: "Jane".to_string(),
            email: "j@x.com".to_string(),
            phone: "555".to_string(),
            pickup_time: "2030-01-01T18:00".to_string(),
            items: BTreeMap::from([("1".to_string(), 1), ("3".to_string(), 2)]),
        }
    }

    #[test]
    fn adjust_quantity_never_stores_zero_or_negative() {
        let mut items = BTreeMap::new();

        adjust_quantity(&mut items, "3", 2);
        assert_eq!(items.get("3"), Some(&2));

        adjust_quantity(&mut items, "3", -2);
        assert!(!items.contains_key("3"));

        // Decrementing an absent entry stays absent
        adjust_quantity(&mut items, "3", -1);
        assert!(!items.contains_key("3"));

        // An over-large decrement removes rather than going negative
        adjust_quantity(&mut items, "5", 3);
        adjust_quantity(&mut items, "5", -10);
        assert!(!items.contains_key("5"));

        for (_, qty) in &items {
            assert!(*qty > 0);
        }
    }

    #[test]
    fn compute_total_sums_price_times_quantity() {
        let catalog = [
            CatalogItem {
                id: "A",
                name: "A",
                price: 10.0,
                category: "test",
            },
            CatalogItem {
                id: "B",
                name: "B",
                price: 5.0,
                category: "test",
            },
        ];
        let items = BTreeMap::from([("A".to_string(), 2), ("B".to_string(), 1)]);
        assert_eq!(compute_total(&items, &catalog), 25.0);
    }

    #[test]
    fn unknown_catalog_id_contributes_zero() {
        let items = BTreeMap::from([("1".to_string(), 1), ("no-such-item".to_string(), 4)]);
        assert_eq!(compute_total(&items, &PRE_ORDER_CATALOG), 18.0);

        let empty = BTreeMap::new();
        assert_eq!(compute_total(&empty, &PRE_ORDER_CATALOG), 0.0);
    }

    #[test]
    fn submission_prices_against_the_static_catalog() {
        let store = RecordStore::open_in_memory().unwrap();

        // {"1": 1, "3": 2} → 18*1 + 15*2
        let order = submit(&store, valid_form()).unwrap();
        assert_eq!(order.total, 48.0);
        assert_eq!(order.status, Status::Pending);

        let stored: Vec<PreOrder> = store.load_all(store::PREORDERS).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, order.id);
        assert_eq!(stored[0].total, 48.0);
    }

    #[test]
    fn empty_selection_rejects_without_write() {
        let store = RecordStore::open_in_memory().unwrap();

        let mut form = valid_form();
        form.items.clear();
        assert!(matches!(
            submit(&store, form).unwrap_err(),
            AppError::Validation(_)
        ));

        // Only non-positive quantities is the same as empty
        let mut form = valid_form();
        form.items = BTreeMap::from([("1".to_string(), 0), ("3".to_string(), -2)]);
        assert!(matches!(
            submit(&store, form).unwrap_err(),
            AppError::Validation(_)
        ));

        assert_eq!(store.count(store::PREORDERS).unwrap(), 0);
    }

    #[test]
    fn non_positive_quantities_are_dropped_from_a_valid_selection() {
        let mut form = valid_form();
        form.items.insert("2".to_string(), 0);

        let fields = validate(&form).unwrap();
        assert!(!fields.items.contains_key("2"));
        assert_eq!(fields.items.len(), 2);
    }

    #[test]
    fn missing_customer_fields_reject_without_write() {
        let store = RecordStore::open_in_memory().unwrap();

        let blank_each: [fn(&mut PreOrderCreate); 4] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.phone.clear(),
            |f| f.pickup_time.clear(),
        ];

        for blank in blank_each {
            let mut form = valid_form();
            blank(&mut form);
            assert!(matches!(
                submit(&store, form).unwrap_err(),
                AppError::Validation(_)
            ));
        }

        assert_eq!(store.count(store::PREORDERS).unwrap(), 0);
    }

    #[test]
    fn past_pickup_time_is_rejected() {
        let mut form = valid_form();
        form.pickup_time = "2020-01-01T12:00".to_string();
        assert!(validate(&form).is_err());
    }
}
