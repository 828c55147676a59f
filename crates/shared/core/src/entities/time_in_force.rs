use serde::{Deserialize, Serialize};

/// Time-in-force instruction for order validity.
///
/// The trigger only ever submits normal (good-till-canceled) orders, so
/// that is the only instruction modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good Till Canceled: order remains active until explicitly canceled
    Gtc,
}

impl TimeInForce {
    /// Wire representation expected by the exchange
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
        }
    }
}
