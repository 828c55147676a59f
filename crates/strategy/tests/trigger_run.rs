//! Integration tests: trigger engine against a scripted gateway
//!
//! Drives the full decision sequence with a fake exchange gateway and the
//! in-memory audit collector, asserting on outcomes, gateway call counts,
//! and recorded audit entries.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal_macros::dec;

use dipwatch_audit::MemoryAudit;
use dipwatch_core::{OrderAck, OrderRequest, Price, Quantity, SpotPair};
use dipwatch_gateway::{ExchangeGateway, GatewayError};
use dipwatch_strategy::{FailureReason, RunOutcome, TriggerConfig, TriggerEngine};

/// Scripted gateway double. Counters are shared handles so tests can keep
/// one while the engine owns the gateway.
struct FakeGateway {
    price: Option<Price>,
    price_fails: bool,
    balance: Option<Quantity>,
    balance_fails: bool,
    ack: OrderAck,
    order_fails: bool,
    price_calls: Arc<AtomicUsize>,
    balance_calls: Arc<AtomicUsize>,
    order_calls: Arc<AtomicUsize>,
}

impl FakeGateway {
    fn new() -> Self {
        Self {
            price: None,
            price_fails: false,
            balance: None,
            balance_fails: false,
            ack: OrderAck {
                code: 0,
                order_id: Some("8123456789".to_string()),
            },
            order_fails: false,
            price_calls: Arc::new(AtomicUsize::new(0)),
            balance_calls: Arc::new(AtomicUsize::new(0)),
            order_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    fn with_balance(mut self, balance: Quantity) -> Self {
        self.balance = Some(balance);
        self
    }

    fn with_ack(mut self, ack: OrderAck) -> Self {
        self.ack = ack;
        self
    }

    fn failing_price(mut self) -> Self {
        self.price_fails = true;
        self
    }

    fn failing_balance(mut self) -> Self {
        self.balance_fails = true;
        self
    }

    fn failing_orders(mut self) -> Self {
        self.order_fails = true;
        self
    }

    fn counters(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (
            self.price_calls.clone(),
            self.balance_calls.clone(),
            self.order_calls.clone(),
        )
    }
}

fn transport_error() -> GatewayError {
    GatewayError::Status {
        status: 503,
        body: "upstream unavailable".to_string(),
    }
}

#[async_trait]
impl ExchangeGateway for FakeGateway {
    fn exchange_name(&self) -> &str {
        "fakex"
    }

    async fn ticker_price(&self, _pair: &SpotPair) -> Result<Option<Price>, GatewayError> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        if self.price_fails {
            return Err(transport_error());
        }
        Ok(self.price)
    }

    async fn available_balance(&self, _asset: &str) -> Result<Option<Quantity>, GatewayError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        if self.balance_fails {
            return Err(transport_error());
        }
        Ok(self.balance)
    }

    async fn submit_order(&self, _request: &OrderRequest) -> Result<OrderAck, GatewayError> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        if self.order_fails {
            return Err(transport_error());
        }
        Ok(self.ack.clone())
    }
}

fn config() -> TriggerConfig {
    TriggerConfig {
        pair: SpotPair::btc_usdt(),
        threshold: dec!(90000),
        buy_quantity: dec!(0.001),
    }
}

fn engine(gateway: FakeGateway, audit: MemoryAudit) -> TriggerEngine<FakeGateway, MemoryAudit> {
    TriggerEngine::new(config(), gateway, audit)
}

/// Price at or above threshold: successful run, no order placed
#[tokio::test]
async fn test_waiting_when_price_at_or_above_threshold() {
    let _ = env_logger::try_init();

    let gateway = FakeGateway::new().with_price(dec!(95000));
    let (_, _, order_calls) = gateway.counters();
    let audit = MemoryAudit::new();

    let outcome = engine(gateway, audit.clone()).run().await;

    assert_eq!(outcome, RunOutcome::Waiting { price: dec!(95000) });
    assert!(outcome.is_success());
    assert_eq!(order_calls.load(Ordering::SeqCst), 0);
    assert!(audit.is_empty());
}

/// Exactly-at-threshold uses the same waiting path (strict less-than gate)
#[tokio::test]
async fn test_waiting_at_exact_threshold() {
    let gateway = FakeGateway::new().with_price(dec!(90000));
    let (_, _, order_calls) = gateway.counters();

    let outcome = engine(gateway, MemoryAudit::new()).run().await;

    assert_eq!(outcome, RunOutcome::Waiting { price: dec!(90000) });
    assert_eq!(order_calls.load(Ordering::SeqCst), 0);
}

/// Price below threshold with sufficient balance: order placed
#[tokio::test]
async fn test_ordered_when_funds_sufficient() {
    let _ = env_logger::try_init();

    let gateway = FakeGateway::new()
        .with_price(dec!(85000))
        .with_balance(dec!(100));
    let (_, _, order_calls) = gateway.counters();
    let audit = MemoryAudit::new();

    let outcome = engine(gateway, audit.clone()).run().await;

    assert_eq!(
        outcome,
        RunOutcome::Ordered {
            order_id: "8123456789".to_string(),
            quantity: dec!(0.001),
            cost: dec!(85.000),
        }
    );
    assert!(outcome.is_success());
    assert!(outcome.to_string().contains("$85.00"));
    assert_eq!(order_calls.load(Ordering::SeqCst), 1);
    assert!(audit.is_empty());
}

/// Price below threshold but balance short: no submission attempted
#[tokio::test]
async fn test_insufficient_funds_blocks_submission() {
    let gateway = FakeGateway::new()
        .with_price(dec!(85000))
        .with_balance(dec!(50));
    let (_, _, order_calls) = gateway.counters();
    let audit = MemoryAudit::new();

    let outcome = engine(gateway, audit.clone()).run().await;

    assert_eq!(
        outcome,
        RunOutcome::Failed(FailureReason::InsufficientFunds {
            available: dec!(50),
            required: dec!(85.000),
        })
    );
    assert_eq!(order_calls.load(Ordering::SeqCst), 0);
    // Business-rule failure: reported, not audited
    assert!(audit.is_empty());
}

/// Absent price data: exactly one audit entry, run fails
#[tokio::test]
async fn test_price_absence_audited_once() {
    let gateway = FakeGateway::new(); // no price scripted
    let (price_calls, _, order_calls) = gateway.counters();
    let audit = MemoryAudit::new();

    let outcome = engine(gateway, audit.clone()).run().await;

    assert_eq!(outcome, RunOutcome::Failed(FailureReason::PriceUnavailable));
    assert_eq!(price_calls.load(Ordering::SeqCst), 1);
    assert_eq!(order_calls.load(Ordering::SeqCst), 0);

    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].call_site, "current_price");
    assert_eq!(entries[0].symbol, "BTCUSDT");
    assert_eq!(entries[0].exchange, "fakex");
}

/// Transport error during price fetch degrades identically to absence
#[tokio::test]
async fn test_price_transport_error_degrades_to_absence() {
    let gateway = FakeGateway::new().failing_price();
    let audit = MemoryAudit::new();

    let eng = engine(gateway, audit.clone());
    assert!(eng.current_price().await.is_none());

    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].message.contains("price lookup failed"));
}

/// Balance lookup failure is treated as zero and audit-recorded
#[tokio::test]
async fn test_balance_failure_treated_as_zero() {
    let gateway = FakeGateway::new().failing_balance();
    let audit = MemoryAudit::new();

    let eng = engine(gateway, audit.clone());
    assert_eq!(eng.account_balance().await, dec!(0));

    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].call_site, "account_balance");
}

/// No balance record behaves like zero balance
#[tokio::test]
async fn test_missing_balance_record_blocks_trading() {
    let gateway = FakeGateway::new().with_price(dec!(85000)); // no balance record
    let (_, _, order_calls) = gateway.counters();

    let outcome = engine(gateway, MemoryAudit::new()).run().await;

    assert!(matches!(
        outcome,
        RunOutcome::Failed(FailureReason::InsufficientFunds { .. })
    ));
    assert_eq!(order_calls.load(Ordering::SeqCst), 0);
}

/// Exchange acknowledges but rejects: failure, no audit entry
#[tokio::test]
async fn test_order_rejection_reported_not_audited() {
    let gateway = FakeGateway::new()
        .with_price(dec!(85000))
        .with_balance(dec!(100))
        .with_ack(OrderAck {
            code: 1002,
            order_id: None,
        });
    let audit = MemoryAudit::new();

    let outcome = engine(gateway, audit.clone()).run().await;

    assert_eq!(
        outcome,
        RunOutcome::Failed(FailureReason::OrderRejected { code: 1002 })
    );
    assert!(audit.is_empty());
}

/// Acceptance requires an order id, not just a zero code
#[tokio::test]
async fn test_ack_without_order_id_is_rejection() {
    let gateway = FakeGateway::new()
        .with_price(dec!(85000))
        .with_balance(dec!(100))
        .with_ack(OrderAck {
            code: 0,
            order_id: None,
        });

    let outcome = engine(gateway, MemoryAudit::new()).run().await;

    assert_eq!(
        outcome,
        RunOutcome::Failed(FailureReason::OrderRejected { code: 0 })
    );
}

/// Transport error during submission: failure plus one audit entry
#[tokio::test]
async fn test_order_transport_error_audited() {
    let gateway = FakeGateway::new()
        .with_price(dec!(85000))
        .with_balance(dec!(100))
        .failing_orders();
    let (_, _, order_calls) = gateway.counters();
    let audit = MemoryAudit::new();

    let outcome = engine(gateway, audit.clone()).run().await;

    assert_eq!(outcome, RunOutcome::Failed(FailureReason::OrderError));
    assert_eq!(order_calls.load(Ordering::SeqCst), 1);

    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].call_site, "place_buy_order");
}

/// Read-only calls are idempotent against a consistent gateway
#[tokio::test]
async fn test_read_only_calls_are_idempotent() {
    let gateway = FakeGateway::new()
        .with_price(dec!(87000))
        .with_balance(dec!(42));
    let (price_calls, balance_calls, order_calls) = gateway.counters();
    let audit = MemoryAudit::new();

    let eng = engine(gateway, audit.clone());
    for _ in 0..3 {
        assert_eq!(eng.current_price().await, Some(dec!(87000)));
        assert_eq!(eng.account_balance().await, dec!(42));
    }

    assert_eq!(price_calls.load(Ordering::SeqCst), 3);
    assert_eq!(balance_calls.load(Ordering::SeqCst), 3);
    assert_eq!(order_calls.load(Ordering::SeqCst), 0);
    assert!(audit.is_empty());
}
