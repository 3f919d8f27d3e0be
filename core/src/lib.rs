//! # lodgr core
//!
//! Hotel booking ledger laid out as a **Hexagonal Architecture**.
//!
//! * **[`domain`]**: bookings, rooms, identifiers. No IO.
//! * **[`application`]**: the [`BookingLedger`] use cases.
//! * **[`ports`]**: traits the ledger needs from the outside world.
//! * **[`adapters`]**: in-memory and logging implementations of those ports.
//! * **[`error`]**: [`BookingError`], the rejection type of every ledger operation.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod error;
pub mod ports;

pub use application::services::booking::BookingLedger;
pub use domain::models::booking::Booking;
pub use domain::models::ids::{BookingId, CustomerId, RoomId};
pub use domain::models::request::NewBooking;
pub use domain::models::room::Room;
pub use error::{BookingError, BookingResult};
