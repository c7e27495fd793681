//! Booking Workflow
//!
//! Builds a [`Booking`] from the reservation form, validates every field,
//! and appends it to the `bookings` collection. A submission that fails
//! validation performs no write.

use chrono::NaiveDate;

use shared::models::{
    Booking, BookingCreate, DiningArea, MAX_GUESTS, MIN_GUESTS, Status, TIME_SLOTS,
};
use shared::util::record_id;

use crate::store::{self, RecordStore};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult, time};

/// Validated booking fields, ready to become a stored record
#[derive(Debug, Clone)]
pub struct BookingFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub guests: u8,
    pub area: DiningArea,
}

impl BookingFields {
    /// Assign a fresh ID and the initial status
    fn into_record(self) -> Booking {
        Booking {
            id: record_id(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests: self.guests,
            area: self.area,
            status: Status::Pending,
        }
    }
}

/// Validate the raw reservation form
///
/// Pure function: checks that all seven fields are present, parses the
/// typed ones, and enforces ranges. Returns the first failure.
pub fn validate(form: &BookingCreate) -> AppResult<BookingFields> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&form.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&form.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&form.date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&form.time, "time", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&form.guests, "guests", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&form.area, "area", MAX_SHORT_TEXT_LEN)?;

    let date = time::parse_date(form.date.trim())?;
    time::validate_not_past_date(date)?;

    let slot = form.time.trim();
    if !TIME_SLOTS.contains(&slot) {
        return Err(AppError::validation(format!(
            "time {:?} is not a bookable slot",
            slot
        )));
    }

    let guests: u8 = form
        .guests
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("guests must be a number, got {:?}", form.guests)))?;
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(AppError::validation(format!(
            "guests must be between {MIN_GUESTS} and {MAX_GUESTS}"
        )));
    }

    let area: DiningArea = form
        .area
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Unknown dining area: {}", form.area)))?;

    Ok(BookingFields {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        date,
        time: slot.to_string(),
        guests,
        area,
    })
}

/// Submit a booking: validate, construct, append, persist
///
/// Returns the stored record for confirmation feedback. Two submissions
/// with identical fields produce two distinct records; there is no
/// duplicate detection.
pub fn submit(store: &RecordStore, form: BookingCreate) -> AppResult<Booking> {
    let booking = validate(&form)?.into_record();

    let mut bookings: Vec<Booking> = store.load_all(store::BOOKINGS)?;
    bookings.push(booking.clone());
    store.save_all(store::BOOKINGS, &bookings)?;

    tracing::info!(id = booking.id, date = %booking.date, time = %booking.time, "Booking stored");
    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookingCreate {
        BookingCreate {
            name: "Jane".to_string(),
            email: "j@x.com".to_string(),
            phone: "555".to_string(),
            date: "2030-01-01".to_string(),
            time: "19:00".to_string(),
            guests: "2".to_string(),
            area: "family".to_string(),
        }
    }

    #[test]
    fn valid_submission_appends_one_pending_record() {
        let store = RecordStore::open_in_memory().unwrap();

        let booking = submit(&store, valid_form()).unwrap();
        assert_eq!(booking.status, Status::Pending);
        assert_eq!(booking.guests, 2);
        assert_eq!(booking.area, DiningArea::Family);

        let stored: Vec<Booking> = store.load_all(store::BOOKINGS).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, booking.id);
        assert_eq!(stored[0].status, Status::Pending);
    }

    #[test]
    fn identical_submissions_produce_distinct_records() {
        let store = RecordStore::open_in_memory().unwrap();

        let first = submit(&store, valid_form()).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = submit(&store, valid_form()).unwrap();

        assert_ne!(first.id, second.id);
        let stored: Vec<Booking> = store.load_all(store::BOOKINGS).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn missing_any_field_rejects_without_write() {
        let store = RecordStore::open_in_memory().unwrap();

        let blank_each: [fn(&mut BookingCreate); 7] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.phone.clear(),
            |f| f.date.clear(),
            |f| f.time.clear(),
            |f| f.guests.clear(),
            |f| f.area.clear(),
        ];

        for blank in blank_each {
            let mut form = valid_form();
            blank(&mut form);
            let err = submit(&store, form).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        assert_eq!(store.count(store::BOOKINGS).unwrap(), 0);
    }

    #[test]
    fn past_date_is_rejected() {
        let store = RecordStore::open_in_memory().unwrap();
        let mut form = valid_form();
        form.date = "2020-06-15".to_string();

        assert!(matches!(
            submit(&store, form).unwrap_err(),
            AppError::Validation(_)
        ));
        assert_eq!(store.count(store::BOOKINGS).unwrap(), 0);
    }

    #[test]
    fn unknown_time_slot_is_rejected() {
        let mut form = valid_form();
        form.time = "03:30".to_string();
        assert!(validate(&form).is_err());
    }

    #[test]
    fn guests_outside_range_are_rejected() {
        for guests in ["0", "9", "abc", "-1"] {
            let mut form = valid_form();
            form.guests = guests.to_string();
            assert!(validate(&form).is_err(), "guests={guests} should fail");
        }
        for guests in ["1", "8"] {
            let mut form = valid_form();
            form.guests = guests.to_string();
            assert!(validate(&form).is_ok(), "guests={guests} should pass");
        }
    }

    #[test]
    fn unknown_area_is_rejected() {
        let mut form = valid_form();
        form.area = "rooftop".to_string();
        assert!(validate(&form).is_err());
    }
}
