//! # Domain Models
//!
//! The data structures the booking ledger reasons about.
//!
//! ## Core Entities
//! * [`booking::Booking`]: an active reservation held by the ledger.
//! * [`room::Room`]: a room record owned by the room directory.
//!
//! ## Value Objects
//! * [`ids`]: `BookingId`, `RoomId`, `CustomerId` newtypes.
//! * [`request::NewBooking`]: a possibly incomplete creation request.

pub mod booking;
pub mod ids;
pub mod request;
pub mod room;
