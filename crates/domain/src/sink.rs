//! Port through which extracted records reach storage.

use crate::entities::LpPoolRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Destination for extracted pool records.
///
/// Implemented by the MongoDB repository in `raydium-lp-data`; tests
/// substitute in-memory implementations.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persists one record.
    async fn save(&self, record: &LpPoolRecord) -> Result<()>;
}
