//! # Application Services
//!
//! Each service method corresponds to one user intent ("book a room",
//! "cancel a booking") and coordinates the Domain with the Ports. Services
//! never know *how* rooms are stored or customers reached, only *that* the
//! ports do it.
//!
//! ## Available Services
//! * [`booking::BookingLedger`]: creates, cancels and lists bookings.

pub mod booking;
