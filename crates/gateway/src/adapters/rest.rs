//! Signed REST adapter
//!
//! Talks to the exchange's spot REST API. Private endpoints (balance,
//! order) are authenticated with an API-key header plus an HMAC-SHA256
//! signature over the query string, hex-encoded, with a millisecond
//! timestamp parameter.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use log::debug;
use sha2::Sha256;

use dipwatch_core::{OrderAck, OrderRequest, Price, Quantity, SpotPair};

use crate::error::GatewayError;
use crate::gateway::ExchangeGateway;
use crate::messages::{BalanceEnvelope, OrderEnvelope, TickerResponse};

type HmacSha256 = Hmac<Sha256>;

const API_KEY_HEADER: &str = "X-DW-APIKEY";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the REST adapter
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Exchange name used in diagnostics, e.g. "restex"
    pub exchange_name: String,
    /// REST base URL, no trailing slash
    pub base_url: String,
    /// API key (opaque string, sourcing is the entry point's concern)
    pub api_key: String,
    /// API secret used for request signing
    pub api_secret: String,
}

/// REST implementation of `ExchangeGateway`
#[derive(Debug)]
pub struct RestGateway {
    config: RestConfig,
    http: reqwest::Client,
}

impl RestGateway {
    /// Build the adapter. Fails on empty credentials or if the HTTP client
    /// cannot be constructed; a failed build means no gateway exists at
    /// all, never a degraded one.
    pub fn new(config: RestConfig) -> Result<Self, GatewayError> {
        if config.api_key.trim().is_empty() || config.api_secret.trim().is_empty() {
            return Err(GatewayError::InvalidCredentials(
                "api key and secret must be non-empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { config, http })
    }

    /// Hex-encoded HMAC-SHA256 of the query string
    fn sign(&self, query: &str) -> Result<String, GatewayError> {
        let mut mac = HmacSha256::new_from_slice(self.config.api_secret.as_bytes())
            .map_err(|e| GatewayError::Signing(e.to_string()))?;
        mac.update(query.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Append timestamp and signature to a private-endpoint query
    fn signed_query(&self, params: &[String]) -> Result<String, GatewayError> {
        let mut params = params.to_vec();
        params.push(format!("timestamp={}", Utc::now().timestamp_millis()));
        let query = params.join("&");
        let signature = self.sign(&query)?;
        Ok(format!("{}&signature={}", query, signature))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        signed: bool,
    ) -> Result<T, GatewayError> {
        let mut request = self.http.get(&url);
        if signed {
            request = request.header(API_KEY_HEADER, &self.config.api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ExchangeGateway for RestGateway {
    fn exchange_name(&self) -> &str {
        &self.config.exchange_name
    }

    async fn ticker_price(&self, pair: &SpotPair) -> Result<Option<Price>, GatewayError> {
        let url = format!(
            "{}/api/v1/market/price?symbol={}",
            self.config.base_url,
            pair.symbol()
        );
        debug!("GET {}", url);

        let ticker: TickerResponse = self.get_json(url, false).await?;
        Ok(ticker.price)
    }

    async fn available_balance(&self, asset: &str) -> Result<Option<Quantity>, GatewayError> {
        let params = vec![format!("asset={}", asset.to_uppercase())];
        let query = self.signed_query(&params)?;
        let url = format!("{}/api/v1/account/balance?{}", self.config.base_url, query);
        debug!("GET {}/api/v1/account/balance", self.config.base_url);

        let envelope: BalanceEnvelope = self.get_json(url, true).await?;
        Ok(envelope.data.map(|d| d.available))
    }

    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderAck, GatewayError> {
        if !request.validate() {
            return Err(GatewayError::InvalidRequest(format!(
                "{:?} order missing required price",
                request.order_type
            )));
        }

        let mut params = vec![
            format!("symbol={}", request.pair.symbol()),
            format!("side={}", request.side.as_str()),
            format!("type={}", request.order_type.as_str()),
            format!("quantity={}", request.quantity),
            format!("timeInForce={}", request.time_in_force.as_str()),
        ];
        if let Some(price) = request.price {
            params.push(format!("price={}", price));
        }

        let query = self.signed_query(&params)?;
        let url = format!("{}/api/v1/order?{}", self.config.base_url, query);
        debug!(
            "POST {}/api/v1/order {} {} {}",
            self.config.base_url,
            request.side.as_str(),
            request.quantity,
            request.pair.symbol()
        );

        let envelope: OrderEnvelope = self.post_json(url).await?;
        Ok(envelope.into())
    }
}
