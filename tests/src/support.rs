use std::sync::Arc;

use chrono::NaiveDate;
use lodgr_common::locale::Locale;
use lodgr_core::adapters::outbound::in_memory_rooms::InMemoryRoomDirectory;
use lodgr_core::adapters::outbound::recording_notifier::RecordingNotifier;
use lodgr_core::{BookingId, BookingLedger, CustomerId, NewBooking, Room, RoomId};

pub struct Hotel {
    pub rooms: Arc<InMemoryRoomDirectory>,
    pub notifier: Arc<RecordingNotifier>,
    pub ledger: BookingLedger,
}

impl Hotel {
    pub fn open(locale: Locale) -> Self {
        let rooms = Arc::new(InMemoryRoomDirectory::with_rooms([
            Room::new(RoomId(1), "Standard", 110.0, true),
            Room::new(RoomId(5), "Standard", 100.0, false),
            Room::new(RoomId(10), "Deluxe", 150.0, true),
            Room::new(RoomId(20), "Suite", 300.0, true),
        ]));
        let notifier = Arc::new(RecordingNotifier::new());
        let ledger = BookingLedger::new(rooms.clone(), notifier.clone(), locale);
        Self { rooms, notifier, ledger }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn stay(booking: u64, room: u64, customer: u64) -> NewBooking {
    NewBooking::new(
        BookingId(booking),
        RoomId(room),
        CustomerId(customer),
        date(2023, 11, 1),
        date(2023, 11, 5),
    )
}
