use chrono::Utc;
use dipwatch_core::{RunId, Timestamp};
use serde::{Deserialize, Serialize};

/// One audit record: which run, which symbol, where in the code, against
/// which exchange, and what went wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Run correlation token
    pub run_id: RunId,
    /// Exchange symbol the run was trading, e.g. "BTCUSDT"
    pub symbol: String,
    /// Call-site marker, e.g. "current_price"
    pub call_site: String,
    /// Exchange name reported by the gateway
    pub exchange: String,
    /// Source module tag
    pub source: String,
    /// Human-readable diagnostic
    pub message: String,
    /// When the entry was recorded
    pub at: Timestamp,
}

impl AuditEntry {
    /// Build an entry timestamped now
    pub fn new(
        run_id: RunId,
        symbol: impl Into<String>,
        call_site: impl Into<String>,
        exchange: impl Into<String>,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            run_id,
            symbol: symbol.into(),
            call_site: call_site.into(),
            exchange: exchange.into(),
            source: source.into(),
            message: message.into(),
            at: Utc::now(),
        }
    }
}

impl std::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {}::{} ({}): {}",
            self.run_id, self.symbol, self.source, self.call_site, self.exchange, self.message
        )
    }
}
