use chrono::NaiveDate;
use lodgr_common::locale::Locale;
use thiserror::Error;

use crate::domain::models::ids::{BookingId, RoomId};

/// Rejections raised by the booking ledger.
///
/// All variants are invalid operations: they are returned before the ledger
/// or its collaborators change any state, and retrying only helps once the
/// caller corrects the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid booking parameters")]
    InvalidParameters,

    #[error("Booking start date must be before end date")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Room {0} is unavailable")]
    RoomUnavailable(RoomId),

    #[error("Booking with ID {0} not found.")]
    BookingNotFound(BookingId),

    #[error("Booking with ID {0} already exists.")]
    DuplicateBooking(BookingId),
}

impl BookingError {
    /// Renders the error for an operator reading in `locale`.
    ///
    /// For [`Locale::En`] this is identical to the `Display` output.
    pub fn localized(&self, locale: Locale) -> String {
        match self {
            BookingError::InvalidParameters => locale.invalid_parameters(),
            BookingError::InvalidDateRange { .. } => locale.invalid_date_range(),
            BookingError::RoomUnavailable(room_id) => locale.room_unavailable(room_id),
            BookingError::BookingNotFound(booking_id) => locale.booking_not_found(booking_id),
            BookingError::DuplicateBooking(booking_id) => locale.booking_exists(booking_id),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
