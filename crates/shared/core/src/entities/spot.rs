use serde::{Deserialize, Serialize};

/// A spot trading pair (e.g., BTC/USDT, ETH/BTC)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotPair {
    /// Base currency (the one being bought/sold)
    pub base: String,
    /// Quote currency (the one used to price the base)
    pub quote: String,
}

impl SpotPair {
    /// Create a new spot pair
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Concatenated exchange symbol, e.g. "BTCUSDT"
    pub fn symbol(&self) -> String {
        format!("{}{}", self.base.to_uppercase(), self.quote.to_uppercase())
    }

    /// The asset a buy order spends (the quote currency)
    pub fn quote_asset(&self) -> &str {
        &self.quote
    }

    /// Common pair used as the default trigger target
    pub fn btc_usdt() -> Self {
        Self::new("BTC", "USDT")
    }
}

impl std::fmt::Display for SpotPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
