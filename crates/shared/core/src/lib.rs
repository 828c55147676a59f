//! Dipwatch Core Domain
//!
//! Pure domain types for the dipwatch trading trigger.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{OrderAck, OrderRequest, OrderType, Side, SpotPair, TimeInForce};
pub use values::{Price, Quantity, RunId, Timestamp};
