use thiserror::Error;

/// Failures while fetching or extracting a transaction.
///
/// "Signature unknown to the node" and "no matching instruction" are not
/// errors; both surface as `Ok(None)` from the extractor so callers can
/// tell an empty result from a failed one.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("RPC request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
    #[error("transaction is not in a decodable binary encoding")]
    InvalidEncoding,
    #[error("instruction account position {position} is out of range")]
    AccountOutOfRange { position: usize },
}
