//! Wire message types for the exchange's REST responses
//!
//! The exchange wraps private-endpoint responses in a `{code, data}`
//! envelope; the public ticker endpoint returns a bare object. Decimal
//! fields arrive as JSON strings or numbers; rust_decimal's serde
//! support accepts both.

use dipwatch_core::OrderAck;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Public ticker response, e.g. `{"symbol":"BTCUSDT","price":"85000.0"}`.
///
/// A missing price field is absent data, not a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Envelope for the balance endpoint:
/// `{"code":0,"data":{"available":"100.0","frozen":"0"}}`
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceEnvelope {
    pub code: i64,
    #[serde(default)]
    pub data: Option<BalanceData>,
}

/// Balance payload for one asset
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceData {
    pub available: Decimal,
    #[serde(default)]
    pub frozen: Option<Decimal>,
}

/// Envelope for the order endpoint:
/// `{"code":0,"data":{"orderId":"8123..."}}`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderEnvelope {
    pub code: i64,
    #[serde(default)]
    pub data: Option<OrderData>,
}

/// Order payload on acceptance
#[derive(Debug, Clone, Deserialize)]
pub struct OrderData {
    #[serde(rename = "orderId")]
    pub order_id: String,
}

impl From<OrderEnvelope> for OrderAck {
    fn from(envelope: OrderEnvelope) -> Self {
        OrderAck {
            code: envelope.code,
            order_id: envelope.data.map(|d| d.order_id),
        }
    }
}
