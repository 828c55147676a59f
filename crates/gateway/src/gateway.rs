//! The gateway trait the strategy engine is written against

use async_trait::async_trait;
use dipwatch_core::{OrderAck, OrderRequest, Price, Quantity, SpotPair};

use crate::error::GatewayError;

/// Capability set the strategy consumes: price lookup, balance lookup,
/// order placement.
///
/// `ticker_price` and `available_balance` are read-only and may be called
/// any number of times; `submit_order` is irreversible once the exchange
/// acknowledges it.
#[async_trait]
pub trait ExchangeGateway: Send + Sync {
    /// Exchange name used in diagnostics and audit entries
    fn exchange_name(&self) -> &str;

    /// Current spot price for the pair. `Ok(None)` when the exchange has
    /// no price for the symbol (absent data, not an error).
    async fn ticker_price(&self, pair: &SpotPair) -> Result<Option<Price>, GatewayError>;

    /// Available (not total) funds for one asset. `Ok(None)` when the
    /// account has no record for the asset.
    async fn available_balance(&self, asset: &str) -> Result<Option<Quantity>, GatewayError>;

    /// Submit an order. At most one attempt; the caller owns any retry
    /// policy (the trigger has none).
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderAck, GatewayError>;
}
