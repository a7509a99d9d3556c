// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP implementation of [`NodeApi`] and [`TransferHistory`]

use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn, Instrument};
use url::Url;

use super::config::NodeConfig;
use super::types::{BroadcastResponse, TriggerCallRequest, TriggerCallResponse};
use super::NodeApi;
use crate::errors::{ConfigurationError, RpcError};
use crate::history::{HistoryPage, TransferHistory, TransferRecord};
use crate::spans;
use crate::types::address::TronAddress;
use crate::types::transaction::SignedTransaction;

// `TRON-PRO-API-KEY`; header names are case-insensitive
const API_KEY_HEADER: &str = "tron-pro-api-key";

const TRIGGER_CONSTANT_CONTRACT: &str = "wallet/triggerconstantcontract";
const TRIGGER_SMART_CONTRACT: &str = "wallet/triggersmartcontract";
const BROADCAST_TRANSACTION: &str = "wallet/broadcasttransaction";
const ACCOUNT_TRC20_TRANSACTIONS: &str = "v1/accounts/{address}/transactions/trc20";

/// Node client over the TRON HTTP API
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use tron_trc20::{HttpNodeClient, NodeConfig};
///
/// # fn main() -> Result<(), tron_trc20::ConfigurationError> {
/// let node = HttpNodeClient::new(NodeConfig::shasta())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpNodeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpNodeClient {
    /// Build a client, validating the URL and API key
    pub fn new(config: NodeConfig) -> Result<Self, ConfigurationError> {
        let base_url = parse_base_url(&config.url)?;

        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let value =
                HeaderValue::from_str(api_key).map_err(|_| ConfigurationError::InvalidApiKey)?;
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ConfigurationError::HttpClient)?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, RpcError> {
        self.base_url
            .join(path)
            .map_err(|e| RpcError::request_failed(path, e))
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, RpcError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        self.execute(endpoint, self.http.post(url).json(body))
            .instrument(spans::node_request("POST", endpoint))
            .await
    }

    async fn get<R: DeserializeOwned>(&self, endpoint: &str, url: Url) -> Result<R, RpcError> {
        self.execute(endpoint, self.http.get(url))
            .instrument(spans::node_request("GET", endpoint))
            .await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<R, RpcError> {
        let start = Instant::now();
        debug!("Node request: {endpoint}");

        let response = request.send().await.map_err(|e| {
            warn!(
                error = %e,
                duration_ms = %start.elapsed().as_millis(),
                "Node request failed: {endpoint}"
            );
            RpcError::request_failed(endpoint, e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RpcError::request_failed(endpoint, e))?;

        debug!(
            status = status.as_u16(),
            duration_ms = %start.elapsed().as_millis(),
            "Node response: {endpoint}"
        );

        if !status.is_success() {
            return Err(RpcError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| RpcError::invalid_response(endpoint, e))
    }
}

#[async_trait]
impl NodeApi for HttpNodeClient {
    async fn trigger_constant_contract(
        &self,
        request: &TriggerCallRequest,
    ) -> Result<TriggerCallResponse, RpcError> {
        self.post(TRIGGER_CONSTANT_CONTRACT, request).await
    }

    async fn trigger_smart_contract(
        &self,
        request: &TriggerCallRequest,
    ) -> Result<TriggerCallResponse, RpcError> {
        self.post(TRIGGER_SMART_CONTRACT, request).await
    }

    async fn broadcast_transaction(
        &self,
        transaction: &SignedTransaction,
    ) -> Result<BroadcastResponse, RpcError> {
        self.post(BROADCAST_TRANSACTION, transaction).await
    }
}

#[async_trait]
impl TransferHistory for HttpNodeClient {
    async fn transfers(
        &self,
        contract: &TronAddress,
        account: &TronAddress,
        limit: Option<u32>,
    ) -> Result<Vec<TransferRecord>, RpcError> {
        let path = ACCOUNT_TRC20_TRANSACTIONS.replace("{address}", &account.to_base58());
        let mut url = self.endpoint_url(&path)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("contract_address", &contract.to_base58());
            if let Some(limit) = limit {
                query.append_pair("limit", &limit.to_string());
            }
        }

        let page: HistoryPage = self.get(ACCOUNT_TRC20_TRANSACTIONS, url).await?;
        if !page.success {
            let message = page
                .error
                .unwrap_or_else(|| "request was not successful".to_string());
            return Err(RpcError::service(ACCOUNT_TRC20_TRANSACTIONS, message));
        }
        Ok(page.data)
    }
}

/// Parse the node URL, normalised so relative endpoint paths append to it
fn parse_base_url(raw: &str) -> Result<Url, ConfigurationError> {
    let invalid = |source: url::ParseError| ConfigurationError::InvalidNodeUrl {
        url: raw.to_string(),
        source,
    };

    let mut url = Url::parse(raw.trim()).map_err(invalid)?;
    if url.cannot_be_a_base() {
        return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("https://api.trongrid.io").unwrap();
        assert_eq!(
            url.join(TRIGGER_CONSTANT_CONTRACT).unwrap().as_str(),
            "https://api.trongrid.io/wallet/triggerconstantcontract"
        );
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let url = parse_base_url("https://gateway.example/tron").unwrap();
        assert_eq!(
            url.join(BROADCAST_TRANSACTION).unwrap().as_str(),
            "https://gateway.example/tron/wallet/broadcasttransaction"
        );
    }

    #[test]
    fn test_invalid_urls_rejected() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ConfigurationError::InvalidNodeUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("mailto:node@example.com"),
            Err(ConfigurationError::InvalidNodeUrl { .. })
        ));
    }

    #[test]
    fn test_new_rejects_bad_api_key() {
        let config = NodeConfig::mainnet().with_api_key("bad\nkey");
        assert!(matches!(
            HttpNodeClient::new(config),
            Err(ConfigurationError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_new_with_presets() {
        let client = HttpNodeClient::new(
            NodeConfig::nile()
                .with_api_key("key")
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();
        assert_eq!(client.base_url().as_str(), "https://nile.trongrid.io/");
    }
}
