#![cfg(test)]
use lodgr_common::locale::Locale;
use lodgr_core::ports::outbound::room_directory::RoomDirectory;
use lodgr_core::{Booking, BookingError, BookingId, CustomerId, NewBooking, RoomId};

use crate::support::{Hotel, date, stay};

#[test]
fn booking_occupies_room_and_notifies_guest() {
    let mut hotel = Hotel::open(Locale::En);

    let booking = hotel.ledger.create_booking(stay(1, 10, 100)).unwrap();

    assert!(!hotel.rooms.find_by_id(RoomId(10)).unwrap().available);
    assert_eq!(hotel.ledger.all_bookings(), vec![booking.clone()]);

    let sent = hotel.notifier.sent_to(CustomerId(100));
    assert_eq!(sent.len(), 1, "expected exactly one confirmation");
    assert!(sent[0].contains("confirmed"), "unexpected message: {}", sent[0]);
    assert!(sent[0].contains(&booking.booking_id().to_string()));
}

#[test]
fn rejected_requests_leave_no_trace() {
    let mut hotel = Hotel::open(Locale::En);
    let rooms_before = hotel.rooms.list_all();

    let rejected = vec![
        (NewBooking::default(), "Invalid booking parameters".to_string()),
        (
            NewBooking::new(BookingId(2), RoomId(1), CustomerId(3), date(2023, 10, 20), date(2023, 10, 10)),
            "Booking start date must be before end date".to_string(),
        ),
        (stay(3, 5, 20), "Room 5 is unavailable".to_string()),
        (stay(4, 404, 20), "Room 404 is unavailable".to_string()),
    ];

    for (request, message) in rejected {
        let err = hotel.ledger.create_booking(request).unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    assert!(hotel.ledger.is_empty());
    assert!(hotel.notifier.is_empty());
    assert_eq!(hotel.rooms.list_all(), rooms_before);
}

#[test]
fn cancel_unknown_booking() {
    let mut hotel = Hotel::open(Locale::En);

    let err = hotel.ledger.cancel_booking(BookingId(999)).unwrap_err();

    assert_eq!(err, BookingError::BookingNotFound(BookingId(999)));
    assert_eq!(err.to_string(), "Booking with ID 999 not found.");
    assert!(hotel.notifier.is_empty());
}

#[test]
fn create_cancel_round_trip_restores_state() {
    let mut hotel = Hotel::open(Locale::En);
    let rooms_before = hotel.rooms.list_all();

    hotel.ledger.create_booking(stay(1, 20, 7)).unwrap();
    hotel.ledger.cancel_booking(BookingId(1)).unwrap();

    assert!(hotel.ledger.all_bookings().is_empty());
    assert_eq!(hotel.rooms.list_all(), rooms_before);

    let sent = hotel.notifier.sent_to(CustomerId(7));
    assert_eq!(sent.len(), 2);
    assert!(sent[1].contains("cancelled"));

    // The freed room can be booked again with identical parameters.
    let again = hotel.ledger.create_booking(stay(1, 20, 7)).unwrap();
    assert_eq!(hotel.ledger.all_bookings(), vec![again]);
    assert!(!hotel.rooms.find_by_id(RoomId(20)).unwrap().available);
}

#[test]
fn listing_is_a_detached_snapshot() {
    let mut hotel = Hotel::open(Locale::En);
    hotel.ledger.create_booking(stay(10, 1, 2)).unwrap();

    let mut snapshot: Vec<Booking> = hotel.ledger.all_bookings();
    snapshot.clear();

    assert_eq!(hotel.ledger.len(), 1);
    assert!(hotel.ledger.find_booking(BookingId(10)).is_some());
}

#[test]
fn several_guests_share_the_hotel() {
    let mut hotel = Hotel::open(Locale::En);

    hotel.ledger.create_booking(stay(1, 1, 100)).unwrap();
    hotel.ledger.create_booking(stay(2, 10, 200)).unwrap();
    hotel.ledger.create_booking(stay(3, 20, 100)).unwrap();

    assert_eq!(
        hotel.ledger.create_booking(stay(4, 10, 300)),
        Err(BookingError::RoomUnavailable(RoomId(10)))
    );

    assert_eq!(hotel.ledger.bookings_for_customer(CustomerId(100)).len(), 2);
    assert!(hotel.rooms.available_rooms(|_| true).is_empty());

    hotel.ledger.cancel_booking(BookingId(2)).unwrap();
    let free: Vec<RoomId> = hotel.rooms.available_rooms(|_| true).iter().map(|r| r.id).collect();
    assert_eq!(free, vec![RoomId(10)]);

    hotel.ledger.create_booking(stay(4, 10, 300)).unwrap();
    assert_eq!(hotel.ledger.len(), 3);
    assert_eq!(hotel.notifier.len(), 5);
}
