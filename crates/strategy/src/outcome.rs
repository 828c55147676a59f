//! Terminal run outcomes
//!
//! Three-way outcome instead of a bare boolean: "waiting for a better
//! price" and "order placed" are distinct successful terminal states, and
//! monitoring should be able to tell them apart.

use dipwatch_core::{Price, Quantity};

/// Terminal state of one strategy pass
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Price at or above threshold; no order placed. A valid, successful
    /// run outcome, not a failure.
    Waiting { price: Price },
    /// Order submitted and acknowledged by the exchange
    Ordered {
        order_id: String,
        quantity: Quantity,
        /// Estimated cost in the quote asset (quantity × price)
        cost: Price,
    },
    /// Run terminated without trading
    Failed(FailureReason),
}

impl RunOutcome {
    /// Boolean mapping of the terminal state: Waiting and Ordered are both
    /// successful runs.
    pub fn is_success(&self) -> bool {
        !matches!(self, RunOutcome::Failed(_))
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::Waiting { price } => {
                write!(f, "waiting for better price (current {})", price)
            }
            RunOutcome::Ordered {
                order_id,
                quantity,
                cost,
            } => write!(
                f,
                "bought {} at estimated cost ${} (order id {})",
                quantity,
                cost.round_dp(2),
                order_id
            ),
            RunOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Why a run terminated without an accepted order
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// Price fetch returned no usable data; cannot proceed
    PriceUnavailable,
    /// Available quote balance below quantity × price
    InsufficientFunds {
        available: Quantity,
        required: Quantity,
    },
    /// Exchange acknowledged the request but did not accept the order
    OrderRejected { code: i64 },
    /// Transport or decode error during submission
    OrderError,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::PriceUnavailable => {
                write!(f, "cannot proceed without price data")
            }
            FailureReason::InsufficientFunds {
                available,
                required,
            } => write!(
                f,
                "insufficient funds: available {} < required {}",
                available, required
            ),
            FailureReason::OrderRejected { code } => {
                write!(f, "order rejected by exchange (code {})", code)
            }
            FailureReason::OrderError => write!(f, "order submission error"),
        }
    }
}
