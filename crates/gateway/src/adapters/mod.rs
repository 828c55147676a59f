//! Exchange adapters
//!
//! Adapters implement `ExchangeGateway` against a concrete venue. Only the
//! signed REST adapter exists today; the trait seam is where a websocket or
//! simulator adapter would plug in.

pub mod rest;

pub use rest::{RestConfig, RestGateway};
