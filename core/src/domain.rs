//! # Domain Layer (Core)
//!
//! Bookings, rooms and the identifiers that tie them together.
//!
//! ## Characteristics
//! * **Pure Rust**: no IO, no knowledge of how rooms are stored or how customers are reached.
//! * **Independence**: does not know about Ports, Adapters, or the Application layer.
//!
//! ## Contents
//! * **[`models`]**: The entities and value objects of the system.

pub mod models;
