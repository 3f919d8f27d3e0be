use std::sync::Arc;

use chrono::NaiveDate;
use colored::*;
use lodgr_common::config::Config;
use lodgr_core::adapters::outbound::recording_notifier::RecordingNotifier;
use lodgr_core::ports::outbound::room_directory::RoomDirectory;
use lodgr_core::{BookingId, BookingLedger, CustomerId, NewBooking, RoomId};

use crate::commands::shell::print_bookings;
use crate::commands::{rooms, seeded_rooms};
use crate::terminal::print;

enum Step {
    Book(&'static str, NewBooking),
    Cancel(&'static str, BookingId),
    List,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DemoReport {
    pub accepted: usize,
    pub rejected: usize,
}

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let rooms = seeded_rooms();
    let notifier = Arc::new(RecordingNotifier::new());
    let mut ledger = BookingLedger::new(rooms.clone(), notifier.clone(), cfg.locale);

    rooms::rooms(rooms.as_ref(), cfg)?;

    print::header("booking session", cfg.quiet);
    let report = run_script(&mut ledger, cfg)?;

    print::header("notifications", cfg.quiet);
    for sent in notifier.take() {
        print::print_status(format!("customer {}: {}", sent.customer_id, sent.message));
    }

    print::header("rooms afterwards", cfg.quiet);
    rooms::print_rooms(&rooms.list_all(), cfg);

    if cfg.quiet == 0 {
        print::fat_separator();
        let accepted = format!("{} accepted", report.accepted).bold().green();
        let rejected = format!("{} rejected", report.rejected).bold().yellow();
        print::centerln(&format!("Session complete: {accepted}, {rejected}"));
        print::end_of_program();
    }
    Ok(())
}

fn script() -> anyhow::Result<Vec<Step>> {
    let day = |m: u32, d: u32| {
        NaiveDate::from_ymd_opt(2025, m, d)
            .ok_or_else(|| anyhow::anyhow!("invalid demo date 2025-{m:02}-{d:02}"))
    };

    Ok(vec![
        Step::Book(
            "Guest 500 books room 101",
            NewBooking::new(BookingId(1), RoomId(101), CustomerId(500), day(10, 20)?, day(10, 25)?),
        ),
        Step::Book(
            "Guest 501 wants the same room",
            NewBooking::new(BookingId(2), RoomId(101), CustomerId(501), day(10, 21)?, day(10, 23)?),
        ),
        Step::Book(
            "A request without a check-out date",
            NewBooking::default()
                .booking_id(BookingId(3))
                .room_id(RoomId(201))
                .customer_id(CustomerId(502))
                .start_date(day(11, 1)?),
        ),
        Step::Book(
            "Check-out before check-in",
            NewBooking::new(BookingId(4), RoomId(201), CustomerId(502), day(11, 5)?, day(11, 1)?),
        ),
        Step::Book(
            "Guest 502 books the suite",
            NewBooking::new(BookingId(5), RoomId(301), CustomerId(502), day(12, 24)?, day(12, 27)?),
        ),
        Step::List,
        Step::Cancel("Guest 500 cancels", BookingId(1)),
        Step::Cancel("Cancelling an unknown booking", BookingId(999)),
        Step::Book(
            "Guest 500 books room 101 again",
            NewBooking::new(BookingId(1), RoomId(101), CustomerId(500), day(10, 20)?, day(10, 25)?),
        ),
        Step::List,
    ])
}

pub fn run_script(ledger: &mut BookingLedger, cfg: &Config) -> anyhow::Result<DemoReport> {
    let mut report = DemoReport::default();

    for step in script()? {
        match step {
            Step::Book(title, request) => {
                print::print_status(title);
                match ledger.create_booking(request) {
                    Ok(booking) => {
                        report.accepted += 1;
                        print::success(format!("Booking {} stored", booking.booking_id()));
                    }
                    Err(err) => {
                        report.rejected += 1;
                        print::failure(err.localized(cfg.locale));
                    }
                }
            }
            Step::Cancel(title, booking_id) => {
                print::print_status(title);
                match ledger.cancel_booking(booking_id) {
                    Ok(()) => {
                        report.accepted += 1;
                        print::success(format!("Booking {booking_id} cancelled"));
                    }
                    Err(err) => {
                        report.rejected += 1;
                        print::failure(err.localized(cfg.locale));
                    }
                }
            }
            Step::List => print_bookings(&ledger.all_bookings(), cfg),
        }
    }

    Ok(report)
}
