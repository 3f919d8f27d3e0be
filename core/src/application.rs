//! # Application Layer (Service Layer)
//!
//! Orchestrates the booking use cases.
//!
//! ## Purpose
//! 1. Receives a command from a driving adapter (the CLI, a test).
//! 2. Validates inputs.
//! 3. Calls the Domain and the Outbound Ports in a fixed order.
//! 4. Returns results to the caller.
//!
//! ## Contents
//! * **[`services`]**: Grouped by feature.

pub mod services;
