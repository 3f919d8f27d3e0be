use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use chrono::NaiveDate;
use lodgr_common::config::Config;
use lodgr_core::adapters::outbound::tracing_notifier::TracingNotifier;
use lodgr_core::ports::outbound::room_directory::RoomDirectory;
use lodgr_core::{Booking, BookingId, BookingLedger, CustomerId, NewBooking, RoomId};

use crate::commands::{rooms, seeded_rooms};
use crate::terminal::{format, print};

const HELP: &[(&str, &str)] = &[
    ("book <booking> <room> <customer> <start> <end>", "reserve a room, dates as YYYY-MM-DD"),
    ("cancel <booking>", "cancel a booking"),
    ("list", "show active bookings"),
    ("rooms", "show the room catalog"),
    ("help", "show this help"),
    ("quit", "leave the shell"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Book(NewBooking),
    Cancel(BookingId),
    List,
    Rooms,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    /// Missing `book` arguments are left empty for the ledger to reject.
    /// Arguments that are present must parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(verb) = parts.next() else {
            anyhow::bail!("empty command");
        };
        let args: Vec<&str> = parts.collect();

        match verb.to_ascii_lowercase().as_str() {
            "book" | "b" => {
                if args.len() > 5 {
                    anyhow::bail!("too many arguments for 'book'");
                }
                let arg = |idx: usize| args.get(idx).copied();
                Ok(ShellCommand::Book(NewBooking {
                    booking_id: parse_opt::<BookingId>(arg(0), "booking id")?,
                    room_id: parse_opt::<RoomId>(arg(1), "room id")?,
                    customer_id: parse_opt::<CustomerId>(arg(2), "customer id")?,
                    start_date: parse_opt::<NaiveDate>(arg(3), "start date")?,
                    end_date: parse_opt::<NaiveDate>(arg(4), "end date")?,
                }))
            }
            "cancel" | "c" => match args.as_slice() {
                [id] => Ok(ShellCommand::Cancel(
                    id.parse().with_context(|| format!("invalid booking id: {id}"))?,
                )),
                _ => anyhow::bail!("usage: cancel <booking>"),
            },
            "list" | "ls" => Ok(ShellCommand::List),
            "rooms" => Ok(ShellCommand::Rooms),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => anyhow::bail!("unknown command: {other} (try 'help')"),
        }
    }
}

fn parse_opt<T>(raw: Option<&str>, what: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(|s| s.parse::<T>().with_context(|| format!("invalid {what}: {s}")))
        .transpose()
}

pub fn shell(cfg: &Config) -> anyhow::Result<()> {
    let rooms = seeded_rooms();
    let mut ledger = BookingLedger::new(rooms.clone(), std::sync::Arc::new(TracingNotifier), cfg.locale);

    print::header("booking shell", cfg.quiet);
    if cfg.quiet == 0 {
        print::print_status(format!(
            "Messages are written in '{}'. Type 'help' for the list of commands.",
            cfg.locale
        ));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if cfg.quiet == 0 {
            print!("lodgr> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(command) => {
                if execute(command, &mut ledger, rooms.as_ref(), cfg) == Flow::Exit {
                    break;
                }
            }
            Err(err) => print::failure(format!("{err:#}")),
        }
    }

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}

/// Runs one command. Ledger rejections are printed, never returned.
pub fn execute(
    command: ShellCommand,
    ledger: &mut BookingLedger,
    rooms: &dyn RoomDirectory,
    cfg: &Config,
) -> Flow {
    match command {
        ShellCommand::Book(request) => match ledger.create_booking(request) {
            Ok(booking) => print::success(format!(
                "Booking {} stored: room {}, {} to {}",
                booking.booking_id(),
                booking.room_id(),
                booking.start_date(),
                booking.end_date()
            )),
            Err(err) => print::failure(err.localized(cfg.locale)),
        },
        ShellCommand::Cancel(booking_id) => match ledger.cancel_booking(booking_id) {
            Ok(()) => print::success(format!("Booking {booking_id} cancelled")),
            Err(err) => print::failure(err.localized(cfg.locale)),
        },
        ShellCommand::List => print_bookings(&ledger.all_bookings(), cfg),
        ShellCommand::Rooms => {
            if let Err(err) = rooms::rooms(rooms, cfg) {
                print::failure(format!("{err:#}"));
            }
        }
        ShellCommand::Help => {
            for (usage, what) in HELP {
                print::print_status(format!("{usage:<48} {what}"));
            }
        }
        ShellCommand::Quit => return Flow::Exit,
    }
    Flow::Continue
}

pub fn print_bookings(bookings: &[Booking], cfg: &Config) {
    if bookings.is_empty() {
        print::print_status("No active bookings.");
        return;
    }

    print::header("active bookings", cfg.quiet);
    for (idx, booking) in bookings.iter().enumerate() {
        if cfg.quiet >= 2 {
            print::print(&booking.to_string());
            continue;
        }

        print::tree_head(&booking.booking_id().to_string(), "Booking");
        print::as_tree_one_level(format::booking_to_details(booking));
        if idx + 1 != bookings.len() {
            print::print("");
        }
    }
}
