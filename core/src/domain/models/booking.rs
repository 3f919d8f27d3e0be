use std::fmt;

use chrono::NaiveDate;

use crate::domain::models::ids::{BookingId, CustomerId, RoomId};
use crate::error::{BookingError, BookingResult};

/// A reservation of one room by one customer for a stay of at least one night.
///
/// [`Booking::new`] is the only checked path: it refuses a stay whose start
/// date is not strictly before its end date. The `set_*` methods are plain
/// field writes and do not re-check anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Booking {
    booking_id: BookingId,
    room_id: RoomId,
    customer_id: CustomerId,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Booking {
    pub fn new(
        booking_id: BookingId,
        room_id: RoomId,
        customer_id: CustomerId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BookingResult<Self> {
        if start_date >= end_date {
            return Err(BookingError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            booking_id,
            room_id,
            customer_id,
            start_date,
            end_date,
        })
    }

    pub fn booking_id(&self) -> BookingId {
        self.booking_id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of nights between check-in and check-out.
    ///
    /// Zero or negative only if the dates were moved through the setters.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn set_booking_id(&mut self, booking_id: BookingId) {
        self.booking_id = booking_id;
    }

    pub fn set_room_id(&mut self, room_id: RoomId) {
        self.room_id = room_id;
    }

    pub fn set_customer_id(&mut self, customer_id: CustomerId) {
        self.customer_id = customer_id;
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        self.end_date = end_date;
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking(booking_id={}, room_id={}, customer_id={}, start_date={}, end_date={})",
            self.booking_id, self.room_id, self.customer_id, self.start_date, self.end_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKING_ID: BookingId = BookingId(1);
    const ROOM_ID: RoomId = RoomId(101);
    const CUSTOMER_ID: CustomerId = CustomerId(500);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Booking {
        Booking::new(BOOKING_ID, ROOM_ID, CUSTOMER_ID, date(2023, 10, 20), date(2023, 10, 25))
            .unwrap()
    }

    #[test]
    fn test_new_sets_all_fields() {
        let booking = sample();
        assert_eq!(booking.booking_id(), BOOKING_ID);
        assert_eq!(booking.room_id(), ROOM_ID);
        assert_eq!(booking.customer_id(), CUSTOMER_ID);
        assert_eq!(booking.start_date(), date(2023, 10, 20));
        assert_eq!(booking.end_date(), date(2023, 10, 25));
        assert_eq!(booking.nights(), 5);
    }

    #[test]
    fn test_new_rejects_inverted_dates() {
        let result = Booking::new(BOOKING_ID, ROOM_ID, CUSTOMER_ID, date(2023, 10, 20), date(2023, 10, 10));
        assert_eq!(
            result.unwrap_err(),
            BookingError::InvalidDateRange {
                start: date(2023, 10, 20),
                end: date(2023, 10, 10),
            }
        );
    }

    #[test]
    fn test_new_rejects_same_day() {
        let day = date(2024, 1, 1);
        assert!(Booking::new(BOOKING_ID, ROOM_ID, CUSTOMER_ID, day, day).is_err());
    }

    #[test]
    fn test_setters_overwrite_without_validation() {
        let mut booking = sample();

        booking.set_booking_id(BookingId(2));
        booking.set_room_id(RoomId(102));
        booking.set_customer_id(CustomerId(501));
        booking.set_start_date(date(2024, 1, 5));
        booking.set_end_date(date(2024, 1, 1));

        assert_eq!(booking.booking_id(), BookingId(2));
        assert_eq!(booking.room_id(), RoomId(102));
        assert_eq!(booking.customer_id(), CustomerId(501));
        assert_eq!(booking.start_date(), date(2024, 1, 5));
        assert_eq!(booking.end_date(), date(2024, 1, 1));
        assert_eq!(booking.nights(), -4);
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(sample(), sample());

        let mut other = sample();
        other.set_booking_id(BookingId(2));
        assert_ne!(sample(), other);
    }

    #[test]
    fn test_equal_bookings_hash_alike() {
        use std::collections::HashSet;

        let set: HashSet<Booking> = [sample(), sample()].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_contains_all_fields() {
        let s = sample().to_string();
        assert!(s.contains("booking_id=1"));
        assert!(s.contains("room_id=101"));
        assert!(s.contains("customer_id=500"));
        assert!(s.contains("start_date=2023-10-20"));
        assert!(s.contains("end_date=2023-10-25"));
    }
}
