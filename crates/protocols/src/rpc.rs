//! Thin wrapper over the nonblocking Solana RPC client.

use crate::error::ExtractError;
use serde_json::json;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_client::rpc_request::RpcRequest;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use solana_transaction_status::{EncodedConfirmedTransactionWithStatusMeta, UiTransactionEncoding};

/// RPC access at confirmed commitment.
pub struct RpcProvider {
    client: RpcClient,
}

impl RpcProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
        }
    }

    /// Wraps an already-built client. Tests use this to substitute a
    /// mock transport.
    pub fn new_with_client(client: RpcClient) -> Self {
        Self { client }
    }

    /// Fetches one confirmed transaction and decodes it.
    ///
    /// Returns `Ok(None)` when the node does not know the signature.
    /// Transactions up to message version 0 are accepted.
    ///
    /// # Errors
    /// Returns an error if the request fails or the payload cannot be
    /// decoded from its binary encoding.
    pub async fn fetch_transaction(
        &self,
        signature: &Signature,
    ) -> Result<Option<VersionedTransaction>, ExtractError> {
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Base64),
            commitment: Some(CommitmentConfig::confirmed()),
            max_supported_transaction_version: Some(0),
        };
        // getTransaction answers JSON null for an unknown signature; issuing
        // the request through `send` keeps that case an Option instead of a
        // deserialization error inside the client.
        let response: Option<EncodedConfirmedTransactionWithStatusMeta> = self
            .client
            .send(
                RpcRequest::GetTransaction,
                json!([signature.to_string(), config]),
            )
            .await?;
        let Some(confirmed) = response else {
            return Ok(None);
        };
        let transaction = confirmed
            .transaction
            .transaction
            .decode()
            .ok_or(ExtractError::InvalidEncoding)?;
        Ok(Some(transaction))
    }
}
