//! # Ports Layer (Boundaries)
//!
//! Defines the interfaces (traits) that isolate the booking ledger from the
//! infrastructure it talks to.
//!
//! ## Dependency Rule
//! * The Application depends on these Ports.
//! * The Adapters implement these Ports.
//! * Tests swap in their own implementations to observe every call.

pub mod outbound;
