use colored::*;
use lodgr_core::{Booking, Room};

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn booking_to_details(booking: &Booking) -> Vec<Detail> {
    vec![
        ("Room".to_string(), booking.room_id().to_string().color(colors::ACCENT)),
        ("Guest".to_string(), booking.customer_id().to_string().normal()),
        ("From".to_string(), booking.start_date().to_string().color(colors::DATE)),
        ("To".to_string(), booking.end_date().to_string().color(colors::DATE)),
        ("Nights".to_string(), booking.nights().to_string().normal()),
    ]
}

pub fn room_to_details(room: &Room) -> Vec<Detail> {
    let status: ColoredString = if room.is_available() {
        "available".color(colors::AVAILABLE)
    } else {
        "occupied".color(colors::OCCUPIED)
    };

    vec![
        ("Type".to_string(), room.kind.as_str().normal()),
        ("Price".to_string(), format!("{:.2}", room.price).normal()),
        ("Status".to_string(), status),
    ]
}
