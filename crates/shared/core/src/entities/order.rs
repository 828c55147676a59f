use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderType, Side, SpotPair, TimeInForce};
use crate::values::Quantity;

/// Order submission request, built fresh per invocation.
/// Never persisted and never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Pair being traded
    pub pair: SpotPair,
    /// Buy or sell
    pub side: Side,
    /// Market or limit
    pub order_type: OrderType,
    /// Base-asset quantity to trade
    pub quantity: Quantity,
    /// Price (required for limit orders)
    pub price: Option<Decimal>,
    /// Time in force
    pub time_in_force: TimeInForce,
}

impl OrderRequest {
    /// Create a market buy for a fixed base-asset quantity
    pub fn market_buy(pair: SpotPair, quantity: Quantity) -> Self {
        Self {
            pair,
            side: Side::Buy,
            order_type: OrderType::Market,
            quantity,
            price: None,
            time_in_force: TimeInForce::Gtc,
        }
    }

    /// Validate the order based on order type requirements
    pub fn validate(&self) -> bool {
        match self.order_type {
            OrderType::Market => true,
            OrderType::Limit => self.price.is_some(),
        }
    }
}

/// Gateway acknowledgement of an order submission.
///
/// The exchange reports a numeric status code and, on acceptance, the
/// exchange-assigned order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Exchange status code; zero means accepted
    pub code: i64,
    /// Exchange-assigned order id, present on acceptance
    pub order_id: Option<String>,
}

impl OrderAck {
    /// Accepted iff the status code is zero AND an order id came back
    pub fn is_accepted(&self) -> bool {
        self.code == 0 && self.order_id.is_some()
    }
}
