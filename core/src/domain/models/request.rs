//! # Booking Request
//!
//! The input of [`crate::application::services::booking::BookingLedger::create_booking`].
//!
//! Requests are assembled from loosely-typed sources (terminal input, forms)
//! where any field may be missing, so every field is optional here and the
//! ledger decides whether the request is complete.

use chrono::NaiveDate;

use crate::domain::models::ids::{BookingId, CustomerId, RoomId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBooking {
    pub booking_id: Option<BookingId>,
    pub room_id: Option<RoomId>,
    pub customer_id: Option<CustomerId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A request with every field present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteBooking {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub customer_id: CustomerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewBooking {
    pub fn new(
        booking_id: BookingId,
        room_id: RoomId,
        customer_id: CustomerId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            booking_id: Some(booking_id),
            room_id: Some(room_id),
            customer_id: Some(customer_id),
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    pub fn booking_id(mut self, booking_id: BookingId) -> Self {
        self.booking_id = Some(booking_id);
        self
    }

    pub fn room_id(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    pub fn customer_id(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Returns `None` as soon as one field is missing.
    pub fn complete(&self) -> Option<CompleteBooking> {
        Some(CompleteBooking {
            booking_id: self.booking_id?,
            room_id: self.room_id?,
            customer_id: self.customer_id?,
            start_date: self.start_date?,
            end_date: self.end_date?,
        })
    }
}
