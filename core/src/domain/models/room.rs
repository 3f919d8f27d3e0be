use std::fmt;

use crate::domain::models::ids::RoomId;

/// A bookable room as the room directory describes it.
///
/// The ledger only reads `available` and asks the directory to flip it.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub kind: String,
    pub price: f64,
    pub available: bool,
}

impl Room {
    pub fn new(id: RoomId, kind: impl Into<String>, price: f64, available: bool) -> Self {
        Self {
            id,
            kind: kind.into(),
            price,
            available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available { "available" } else { "occupied" };
        write!(f, "Room {} ({}, {:.2}/night, {})", self.id, self.kind, self.price, status)
    }
}
