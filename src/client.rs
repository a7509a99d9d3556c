// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! TRC20 token client
//!
//! [`TokenClient`] binds a token (contract + decimals) to a node and a history
//! source and exposes the three token operations: balance, transfer and
//! transfer history.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::str::FromStr;
//! use bigdecimal::BigDecimal;
//! use tron_trc20::{
//!     HttpNodeClient, LocalSigner, NodeConfig, TokenClient, TokenConfig, TronAddress,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let node = HttpNodeClient::new(NodeConfig::mainnet().with_api_key("my-key"))?;
//! let client = TokenClient::from_config(node.clone(), node, &TokenConfig::usdt())?;
//!
//! let holder: TronAddress = "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL".parse()?;
//! let balance = client.balance(&holder).await?;
//! println!("balance: {balance}");
//!
//! let signer = LocalSigner::from_hex_key("<private key hex>")?;
//! let tx = client
//!     .transfer(&signer, &holder, &BigDecimal::from_str("1.5")?)
//!     .await?;
//! println!("submitted {} ({})", tx.tx_id, tx.status);
//! # Ok(())
//! # }
//! ```

use bigdecimal::BigDecimal;
use tracing::{debug, info, warn, Instrument, Span};

use crate::abi;
use crate::amount;
use crate::config::constants::DEFAULT_FEE_LIMIT;
use crate::config::TokenConfig;
use crate::errors::{ConfigurationError, NodeError, TransactionError};
use crate::history::{TransferHistory, TransferRecord};
use crate::node::{BroadcastOutcome, NodeApi, TriggerCallRequest};
use crate::signer::TransactionSigner;
use crate::spans;
use crate::types::address::TronAddress;
use crate::types::tokens::TokenDescriptor;
use crate::types::transaction::Transaction;

/// Client for one TRC20 token
///
/// Holds no mutable state. The signing identity is passed to each
/// [`transfer`](Self::transfer), so one client can serve many accounts
/// concurrently.
#[derive(Debug, Clone)]
pub struct TokenClient<N, H> {
    node: N,
    history: H,
    token: TokenDescriptor,
    fee_limit: u64,
}

impl<N, H> TokenClient<N, H>
where
    N: NodeApi,
    H: TransferHistory,
{
    /// Create a client for `token`
    pub fn new(node: N, history: H, token: TokenDescriptor) -> Self {
        Self {
            node,
            history,
            token,
            fee_limit: DEFAULT_FEE_LIMIT,
        }
    }

    /// Create a client from an unvalidated token configuration
    pub fn from_config(
        node: N,
        history: H,
        config: &TokenConfig,
    ) -> Result<Self, ConfigurationError> {
        let token = TokenDescriptor::try_from(config)?;
        Ok(Self::new(node, history, token))
    }

    /// Set the fee limit, in sun, for transfers
    #[must_use]
    pub fn with_fee_limit(mut self, fee_limit: u64) -> Self {
        self.fee_limit = fee_limit;
        self
    }

    /// The token this client operates on
    pub fn token(&self) -> &TokenDescriptor {
        &self.token
    }

    /// Fee limit, in sun, for transfers
    pub fn fee_limit(&self) -> u64 {
        self.fee_limit
    }

    /// The underlying node
    pub fn node(&self) -> &N {
        &self.node
    }

    /// The transfer history source
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Token balance of `address`, in display units
    ///
    /// Runs `balanceOf(address)` as a constant call with `address` as the
    /// caller. Read-only and safe to retry.
    pub async fn balance(&self, address: &TronAddress) -> Result<BigDecimal, NodeError> {
        async move {
            let request = TriggerCallRequest::balance_of(
                self.token.contract().to_hex(),
                address.to_hex(),
                abi::to_address_parameter(address),
            );
            let response = self.node.trigger_constant_contract(&request).await?;

            if let Some((code, message)) = response.failure() {
                warn!(%code, %message, "Balance query rejected by node");
                return Err(NodeError::rejected(code, message));
            }

            let word = response
                .constant_result
                .first()
                .ok_or_else(|| NodeError::invalid_result("constant_result is empty"))?;
            let min_units = abi::decode_uint256_word(word).map_err(|e| {
                NodeError::conversion_failed("balanceOf result is not a uint256", e)
            })?;

            let balance = amount::to_display_amount(&min_units, self.token.decimals());
            debug!(%min_units, %balance, "Balance retrieved");
            Ok(balance)
        }
        .instrument(spans::balance(self.token.contract(), address))
        .await
    }

    /// Transfer `amount` display units of the token from the signer to `to`
    ///
    /// The node builds the transaction, `signer` signs it, and the signed
    /// transaction is broadcast. Amounts with more fractional digits than the
    /// token supports are truncated toward zero.
    ///
    /// Never retried. An error after the broadcast request was sent
    /// ([`TransactionError::Rpc`] at that stage, or
    /// [`TransactionError::BroadcastRejected`]) does not prove the transfer
    /// was not applied; check the chain before resubmitting.
    pub async fn transfer<S>(
        &self,
        signer: &S,
        to: &TronAddress,
        amount: &BigDecimal,
    ) -> Result<Transaction, TransactionError>
    where
        S: TransactionSigner + ?Sized,
    {
        let from = signer.address();
        async move {
            let min_units = amount::to_min_unit_by_decimals(amount, self.token.decimals())
                .map_err(TransactionError::InvalidAmount)?;
            let parameter = abi::encode_transfer_parameters(to, &min_units)
                .map_err(TransactionError::InvalidAmount)?;

            let request = TriggerCallRequest::transfer(
                self.token.contract().to_hex(),
                from.to_hex(),
                parameter,
                self.fee_limit,
            );
            let response = self.node.trigger_smart_contract(&request).await?;

            if let Some((code, message)) = response.failure() {
                warn!(%code, %message, "Transfer build rejected by node");
                return Err(TransactionError::build_rejected(code, message));
            }
            let unsigned = response
                .transaction
                .ok_or(TransactionError::MissingTransaction)?;
            Span::current().record("tx_id", unsigned.tx_id.as_str());

            let signed = signer.sign(&unsigned)?;

            match self.node.broadcast_transaction(&signed).await?.into_outcome() {
                BroadcastOutcome::Success { .. } => {
                    info!(tx_id = %unsigned.tx_id, %min_units, "Transfer broadcast");
                    Ok(Transaction::packing(unsigned))
                }
                BroadcastOutcome::Failure { code, message } => {
                    warn!(code = ?code, %message, "Broadcast rejected by node");
                    Err(TransactionError::BroadcastRejected { code, message })
                }
            }
        }
        .instrument(spans::transfer(self.token.contract(), &from, to, amount))
        .await
    }

    /// Recent transfers of this token sent or received by `address`
    ///
    /// Returns an empty vector when the account has none.
    pub async fn wallet_transactions(
        &self,
        address: &TronAddress,
        limit: Option<u32>,
    ) -> Result<Vec<TransferRecord>, NodeError> {
        async move {
            let records = self
                .history
                .transfers(self.token.contract(), address, limit)
                .await
                .map_err(|e| {
                    warn!(error = %e, "Transfer history lookup failed");
                    NodeError::History(e)
                })?;
            debug!(count = records.len(), "Transfer history retrieved");
            Ok(records)
        }
        .instrument(spans::wallet_transactions(self.token.contract(), address, limit))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RpcError;
    use crate::node::{BroadcastResponse, TriggerCallResponse};
    use crate::types::tokens::TokenDecimals;
    use crate::types::transaction::SignedTransaction;
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl NodeApi for Unreachable {
        async fn trigger_constant_contract(
            &self,
            _request: &TriggerCallRequest,
        ) -> Result<TriggerCallResponse, RpcError> {
            Err(RpcError::service("test", "unreachable"))
        }

        async fn trigger_smart_contract(
            &self,
            _request: &TriggerCallRequest,
        ) -> Result<TriggerCallResponse, RpcError> {
            Err(RpcError::service("test", "unreachable"))
        }

        async fn broadcast_transaction(
            &self,
            _transaction: &SignedTransaction,
        ) -> Result<BroadcastResponse, RpcError> {
            Err(RpcError::service("test", "unreachable"))
        }
    }

    #[async_trait]
    impl TransferHistory for Unreachable {
        async fn transfers(
            &self,
            _contract: &TronAddress,
            _account: &TronAddress,
            _limit: Option<u32>,
        ) -> Result<Vec<TransferRecord>, RpcError> {
            Err(RpcError::service("test", "unreachable"))
        }
    }

    fn usdt() -> TokenDescriptor {
        TokenDescriptor::try_from(&TokenConfig::usdt()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let client = TokenClient::new(Unreachable, Unreachable, usdt());
        assert_eq!(client.fee_limit(), 100_000_000);
        assert_eq!(client.token().decimals(), TokenDecimals::new(6));
    }

    #[test]
    fn test_with_fee_limit() {
        let client = TokenClient::new(Unreachable, Unreachable, usdt()).with_fee_limit(5_000_000);
        assert_eq!(client.fee_limit(), 5_000_000);
    }

    #[test]
    fn test_from_config_validates() {
        let missing = TokenConfig {
            contract_address: None,
            decimals: Some(6),
        };
        assert!(matches!(
            TokenClient::from_config(Unreachable, Unreachable, &missing),
            Err(ConfigurationError::MissingContractAddress)
        ));

        let no_decimals = TokenConfig {
            contract_address: Some("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".to_string()),
            decimals: None,
        };
        assert!(matches!(
            TokenClient::from_config(Unreachable, Unreachable, &no_decimals),
            Err(ConfigurationError::MissingDecimals)
        ));
    }
}
