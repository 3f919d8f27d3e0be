//! End-to-end scenarios for the booking ledger, wired with the real
//! in-memory adapters.

#[cfg(test)]
mod booking;
#[cfg(test)]
mod support;
