//! The trigger engine
//!
//! One engine instance drives one run: fetch the price, compare it to the
//! threshold, verify balance, and conditionally submit a single market buy.
//! The gateway and the audit log are injected at construction so tests can
//! drive the sequence with scripted collaborators.

use log::{info, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use dipwatch_audit::{AuditEntry, AuditLog};
use dipwatch_core::{OrderAck, OrderRequest, Price, Quantity, RunId, SpotPair};
use dipwatch_gateway::ExchangeGateway;

use crate::outcome::{FailureReason, RunOutcome};

/// Invariant strategy parameters, set at construction and immutable for
/// the engine's lifetime.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Pair to watch and trade
    pub pair: SpotPair,
    /// Buy when price drops strictly below this
    pub threshold: Price,
    /// Fixed base-asset quantity per buy
    pub buy_quantity: Quantity,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            pair: SpotPair::btc_usdt(),
            threshold: dec!(90000),
            buy_quantity: dec!(0.001),
        }
    }
}

/// The strategy engine. One synchronous pass per `run()` call; gateway
/// calls are awaited strictly in sequence with no overlap.
pub struct TriggerEngine<G, A> {
    config: TriggerConfig,
    run_id: RunId,
    gateway: G,
    audit: A,
}

impl<G: ExchangeGateway, A: AuditLog> TriggerEngine<G, A> {
    /// Build an engine around an already-constructed gateway. Gateway
    /// construction failures happen before this point and propagate to the
    /// caller; there is no partially-constructed engine.
    pub fn new(config: TriggerConfig, gateway: G, audit: A) -> Self {
        Self {
            config,
            run_id: Uuid::new_v4(),
            gateway,
            audit,
        }
    }

    /// Run correlation token for this engine instance
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Record a gateway-call failure against this run
    fn record_failure(&self, call_site: &'static str, message: String) {
        self.audit.record(AuditEntry::new(
            self.run_id,
            self.config.pair.symbol(),
            call_site,
            self.gateway.exchange_name(),
            module_path!(),
            message,
        ));
    }

    /// Current spot price for the configured pair.
    ///
    /// Degrades to `None` on absent data or any gateway error; the
    /// underlying error is audit-recorded, never propagated.
    pub async fn current_price(&self) -> Option<Price> {
        match self.gateway.ticker_price(&self.config.pair).await {
            Ok(Some(price)) => {
                info!("[{}] current price: {}", self.config.pair, price);
                Some(price)
            }
            Ok(None) => {
                self.record_failure(
                    "current_price",
                    "exchange returned no price data".to_string(),
                );
                None
            }
            Err(e) => {
                self.record_failure("current_price", format!("price lookup failed: {}", e));
                None
            }
        }
    }

    /// Available quote-asset balance.
    ///
    /// A missing record, malformed response, or gateway error all degrade
    /// to zero: the conservative default that blocks trading. Failures go
    /// through the audit path like every other gateway failure.
    pub async fn account_balance(&self) -> Quantity {
        let asset = self.config.pair.quote_asset();
        match self.gateway.available_balance(asset).await {
            Ok(Some(balance)) => {
                info!("[{}] available {} balance: {}", self.config.pair, asset, balance);
                balance
            }
            Ok(None) => {
                self.record_failure(
                    "account_balance",
                    format!("no balance record for {}, treating as zero", asset),
                );
                Decimal::ZERO
            }
            Err(e) => {
                self.record_failure(
                    "account_balance",
                    format!("balance lookup failed, treating as zero: {}", e),
                );
                Decimal::ZERO
            }
        }
    }

    /// Verify funds and submit a single market buy.
    ///
    /// Trusts the caller that `current_price` is below the threshold; the
    /// comparison is not re-checked here. At most one submission attempt,
    /// no retry, no cancellation path.
    pub async fn place_buy_order(&self, current_price: Price) -> RunOutcome {
        let balance = self.account_balance().await;
        let required = self.config.buy_quantity * current_price;

        if balance < required {
            // Expected, recoverable: reported but not audited
            warn!(
                "[{}] insufficient funds: available {} < required {}",
                self.config.pair, balance, required
            );
            return RunOutcome::Failed(FailureReason::InsufficientFunds {
                available: balance,
                required,
            });
        }

        let request = OrderRequest::market_buy(self.config.pair.clone(), self.config.buy_quantity);
        match self.gateway.submit_order(&request).await {
            Ok(OrderAck {
                code: 0,
                order_id: Some(order_id),
            }) => {
                info!(
                    "[{}] bought {} at estimated cost {} (order id {})",
                    self.config.pair, self.config.buy_quantity, required, order_id
                );
                RunOutcome::Ordered {
                    order_id,
                    quantity: self.config.buy_quantity,
                    cost: required,
                }
            }
            Ok(ack) => {
                warn!(
                    "[{}] order not accepted: code={} order_id={:?}",
                    self.config.pair, ack.code, ack.order_id
                );
                RunOutcome::Failed(FailureReason::OrderRejected { code: ack.code })
            }
            Err(e) => {
                self.record_failure("place_buy_order", format!("order submission failed: {}", e));
                RunOutcome::Failed(FailureReason::OrderError)
            }
        }
    }

    /// One full decision pass. Every path terminates in a `RunOutcome`;
    /// nothing propagates past this boundary.
    pub async fn run(&self) -> RunOutcome {
        info!(
            "[{}] run {} started (threshold {}, quantity {})",
            self.config.pair, self.run_id, self.config.threshold, self.config.buy_quantity
        );

        let Some(price) = self.current_price().await else {
            warn!("[{}] cannot proceed without price data", self.config.pair);
            return RunOutcome::Failed(FailureReason::PriceUnavailable);
        };

        // Strict less-than gates trading
        if price < self.config.threshold {
            info!(
                "[{}] price {} below threshold {}, attempting buy",
                self.config.pair, price, self.config.threshold
            );
            self.place_buy_order(price).await
        } else {
            info!(
                "[{}] price {} at or above threshold {}, waiting",
                self.config.pair, price, self.config.threshold
            );
            RunOutcome::Waiting { price }
        }
    }
}
