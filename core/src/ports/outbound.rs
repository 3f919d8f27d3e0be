//! # Outbound Ports (Driven Actors)
//!
//! Contracts for interactions *initiated by the ledger* towards the outside.
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed.
//! 3. Using `domain` models in method signatures is allowed and encouraged.
//! 4. These traits are implemented in `adapters/outbound`.

pub mod notification_sender;
pub mod room_directory;
