//! Dipwatch Strategy Engine
//!
//! The decision-and-execution core: price acquisition → threshold
//! comparison → balance verification → order submission → outcome
//! reporting.
//!
//! ## Sequence
//!
//! ```text
//! run()
//!   │
//!   ├─ current_price() ── absent ──► Failed(PriceUnavailable)
//!   │
//!   ├─ price ≥ threshold ─────────► Waiting (successful, no order)
//!   │
//!   └─ price < threshold
//!        │
//!        └─ place_buy_order(price)
//!             ├─ balance < required ──► Failed(InsufficientFunds)
//!             ├─ ack {0, id}       ──► Ordered
//!             ├─ other ack         ──► Failed(OrderRejected)
//!             └─ gateway error     ──► Failed(OrderError)
//! ```
//!
//! No error escapes `run()`; every path terminates in a `RunOutcome`.
//! Gateway-call failures are recorded through the injected `AuditLog`;
//! business-rule failures (insufficient funds, exchange rejection) are
//! log-reported only.

pub mod engine;
pub mod outcome;

// Re-export main types
pub use engine::{TriggerConfig, TriggerEngine};
pub use outcome::{FailureReason, RunOutcome};
