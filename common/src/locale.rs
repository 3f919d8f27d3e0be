//! # Message Catalog
//!
//! Every sentence a customer or an operator reads comes from here, so the
//! wording of a deployment can be switched with a single [`Locale`] value.
//!
//! English is the default. Russian mirrors the wording the hotel staff
//! already uses in their existing tooling.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locale: {0} (expected 'en' or 'ru')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Ru => f.write_str("ru"),
        }
    }
}

impl Locale {
    pub fn invalid_parameters(self) -> String {
        match self {
            Locale::En => "Invalid booking parameters".to_string(),
            Locale::Ru => "Недопустимые параметры бронирования".to_string(),
        }
    }

    pub fn invalid_date_range(self) -> String {
        match self {
            Locale::En => "Booking start date must be before end date".to_string(),
            Locale::Ru => "Дата начала бронирования должна быть раньше даты окончания".to_string(),
        }
    }

    pub fn room_unavailable(self, room_id: impl Display) -> String {
        match self {
            Locale::En => format!("Room {room_id} is unavailable"),
            Locale::Ru => format!("Номер {room_id} недоступен"),
        }
    }

    pub fn booking_not_found(self, booking_id: impl Display) -> String {
        match self {
            Locale::En => format!("Booking with ID {booking_id} not found."),
            Locale::Ru => format!("Бронирование с ID {booking_id} не найдено."),
        }
    }

    pub fn booking_exists(self, booking_id: impl Display) -> String {
        match self {
            Locale::En => format!("Booking with ID {booking_id} already exists."),
            Locale::Ru => format!("Бронирование с ID {booking_id} уже существует."),
        }
    }

    /// Notification text sent to the customer once a booking is stored.
    pub fn confirmation(
        self,
        booking_id: impl Display,
        room_id: impl Display,
        start: NaiveDate,
        end: NaiveDate,
    ) -> String {
        match self {
            Locale::En => format!(
                "Your booking #{booking_id} for room {room_id} from {start} to {end} is confirmed."
            ),
            Locale::Ru => format!(
                "Ваше бронирование #{booking_id} номера {room_id} с {start} по {end} подтверждено."
            ),
        }
    }

    /// Notification text sent to the customer once a booking is removed.
    pub fn cancellation(self, booking_id: impl Display, room_id: impl Display) -> String {
        match self {
            Locale::En => format!("Your booking #{booking_id} for room {room_id} has been cancelled."),
            Locale::Ru => format!("Ваше бронирование #{booking_id} номера {room_id} отменено."),
        }
    }
}
