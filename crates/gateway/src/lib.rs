//! Dipwatch Gateway
//!
//! Exchange boundary for the dipwatch trading trigger. Provides:
//! - The `ExchangeGateway` trait the strategy engine is written against
//! - Wire message types for the exchange's REST responses
//! - A signed REST adapter (`RestGateway`)
//!
//! ## Architecture
//!
//! ```text
//! Strategy Engine
//!       │ ExchangeGateway trait
//!  ┌────▼─────┐
//!  │ Gateway  │  price lookup / balance lookup / order submission
//!  └────┬─────┘
//!       │ signed HTTPS
//!  ┌────▼─────┐
//!  │ Exchange │
//!  └──────────┘
//! ```
//!
//! The adapter owns authentication and protocol details; nothing above it
//! sees an HTTP status code or a signature.

pub mod adapters;
pub mod error;
pub mod gateway;
pub mod messages;

// Re-export commonly used types
pub use adapters::rest::{RestConfig, RestGateway};
pub use error::GatewayError;
pub use gateway::ExchangeGateway;
pub use messages::{BalanceData, BalanceEnvelope, OrderData, OrderEnvelope, TickerResponse};
