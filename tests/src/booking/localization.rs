#![cfg(test)]
use lodgr_common::locale::Locale;
use lodgr_core::{BookingId, CustomerId, NewBooking};

use crate::support::{Hotel, stay};

#[test]
fn russian_deployment_speaks_russian() {
    let mut hotel = Hotel::open(Locale::Ru);

    hotel.ledger.create_booking(stay(1, 10, 100)).unwrap();
    hotel.ledger.cancel_booking(BookingId(1)).unwrap();

    let sent = hotel.notifier.sent_to(CustomerId(100));
    assert!(sent[0].contains("подтверждено"), "unexpected message: {}", sent[0]);
    assert!(sent[1].contains("отменено"), "unexpected message: {}", sent[1]);
}

#[test]
fn russian_error_wording() {
    let mut hotel = Hotel::open(Locale::Ru);
    let locale = hotel.ledger.locale();

    let err = hotel.ledger.create_booking(NewBooking::default()).unwrap_err();
    assert_eq!(err.localized(locale), "Недопустимые параметры бронирования");

    let err = hotel.ledger.create_booking(stay(2, 5, 20)).unwrap_err();
    assert!(err.localized(locale).contains("недоступен"));

    let err = hotel.ledger.cancel_booking(BookingId(999)).unwrap_err();
    assert_eq!(err.localized(locale), "Бронирование с ID 999 не найдено.");
}
