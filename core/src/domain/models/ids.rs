//! # Identifiers
//!
//! Bookings, rooms and customers are all numbered, and mixing them up is the
//! easiest mistake to make when wiring the ledger. Each gets its own newtype.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self)
            }
        }
    };
}

numeric_id!(
    /// Caller-supplied identifier of a booking.
    BookingId
);
numeric_id!(
    /// Identifier of a room record held by the room directory.
    RoomId
);
numeric_id!(
    /// Identifier of the customer who receives notifications.
    CustomerId
);
