use std::collections::BTreeMap;
use std::sync::Arc;

use lodgr_common::locale::Locale;
use tracing::{debug, info, warn};

use crate::domain::models::booking::Booking;
use crate::domain::models::ids::{BookingId, CustomerId};
use crate::domain::models::request::NewBooking;
use crate::error::{BookingError, BookingResult};
use crate::ports::outbound::notification_sender::NotificationSender;
use crate::ports::outbound::room_directory::RoomDirectory;

/// Authoritative set of active bookings.
///
/// Every stored booking points at a room the ledger found available and then
/// marked occupied. Cancelling hands the room back. Mutating operations take
/// `&mut self`; share a ledger across threads by putting it behind a `Mutex`.
pub struct BookingLedger {
    rooms: Arc<dyn RoomDirectory>,
    notifier: Arc<dyn NotificationSender>,
    locale: Locale,
    bookings: BTreeMap<BookingId, Booking>,
}

impl BookingLedger {
    pub fn new(
        rooms: Arc<dyn RoomDirectory>,
        notifier: Arc<dyn NotificationSender>,
        locale: Locale,
    ) -> Self {
        Self {
            rooms,
            notifier,
            locale,
            bookings: BTreeMap::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Books a room and tells the customer.
    ///
    /// Nothing is touched unless the request is complete, the dates are in
    /// order, the id is free and the room is available.
    pub fn create_booking(&mut self, request: NewBooking) -> BookingResult<Booking> {
        // 1. Validate the request on its own
        let Some(req) = request.complete() else {
            debug!(?request, "booking request is missing fields");
            return Err(BookingError::InvalidParameters);
        };

        let booking = Booking::new(
            req.booking_id,
            req.room_id,
            req.customer_id,
            req.start_date,
            req.end_date,
        )
        .inspect_err(|err| debug!(booking_id = %req.booking_id, "{err}"))?;

        if self.bookings.contains_key(&req.booking_id) {
            debug!(booking_id = %req.booking_id, "booking id already in use");
            return Err(BookingError::DuplicateBooking(req.booking_id));
        }

        // 2. Check the room
        match self.rooms.find_by_id(req.room_id) {
            Some(room) if room.is_available() => {}
            Some(_) => {
                debug!(room_id = %req.room_id, "room is occupied");
                return Err(BookingError::RoomUnavailable(req.room_id));
            }
            None => {
                debug!(room_id = %req.room_id, "room does not exist");
                return Err(BookingError::RoomUnavailable(req.room_id));
            }
        }

        // 3. Commit
        self.bookings.insert(req.booking_id, booking.clone());
        self.rooms.update_availability(req.room_id, false);

        info!(
            booking_id = %req.booking_id,
            room_id = %req.room_id,
            customer_id = %req.customer_id,
            nights = booking.nights(),
            "booking created"
        );

        // 4. Tell the customer
        let message = self.locale.confirmation(
            booking.booking_id(),
            booking.room_id(),
            booking.start_date(),
            booking.end_date(),
        );
        self.notify(booking.customer_id(), &message);

        Ok(booking)
    }

    /// Removes a booking, frees its room and tells the customer.
    pub fn cancel_booking(&mut self, booking_id: BookingId) -> BookingResult<()> {
        let Some(booking) = self.bookings.remove(&booking_id) else {
            debug!(%booking_id, "nothing to cancel");
            return Err(BookingError::BookingNotFound(booking_id));
        };

        self.rooms.update_availability(booking.room_id(), true);

        info!(
            %booking_id,
            room_id = %booking.room_id(),
            customer_id = %booking.customer_id(),
            "booking cancelled"
        );

        let message = self.locale.cancellation(booking.booking_id(), booking.room_id());
        self.notify(booking.customer_id(), &message);

        Ok(())
    }

    /// Snapshot of the active bookings, ordered by booking id.
    ///
    /// The returned vector is detached from the ledger.
    pub fn all_bookings(&self) -> Vec<Booking> {
        self.bookings.values().cloned().collect()
    }

    pub fn find_booking(&self, booking_id: BookingId) -> Option<&Booking> {
        self.bookings.get(&booking_id)
    }

    pub fn bookings_for_customer(&self, customer_id: CustomerId) -> Vec<Booking> {
        self.bookings
            .values()
            .filter(|b| b.customer_id() == customer_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    // The booking change has already happened when this runs.
    fn notify(&self, customer_id: CustomerId, message: &str) {
        if let Err(err) = self.notifier.send(customer_id, message) {
            warn!(%customer_id, "failed to notify customer: {err:#}");
        }
    }
}
