//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`crate::ports`].
//!
//! * **[`outbound`]** (Driven): the in-memory room catalog and the notification
//!   senders the ledger is wired with.
//!
//! Driving adapters (the terminal front-end) live in the `lodgr-cli` crate and
//! call the application services directly.
//!
//! ## Rules
//! * Adapters **MUST** depend on `ports` and `domain`.
//! * Adapters **MUST NOT** depend on `application` logic.

pub mod outbound;
