//! Repository for extracted pool-creation records.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, doc};
use mongodb::options::FindOptions;
use raydium_lp_domain::{LpPoolRecord, RecordSink};
use tracing::info;

/// Collection holding one document per extracted pool creation.
pub const COLLECTION_NAME: &str = "raydium_lp_transactions";

/// Repository over the pool-creation collection.
#[derive(Clone)]
pub struct LpTransactionRepository {
    collection: Collection<LpPoolRecord>,
}

impl LpTransactionRepository {
    /// Creates a new LpTransactionRepository.
    #[must_use]
    pub fn new(collection: Collection<LpPoolRecord>) -> Self {
        Self { collection }
    }

    /// Inserts one record and returns the store-assigned identifier.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert(&self, record: &LpPoolRecord) -> Result<Bson, mongodb::error::Error> {
        let result = self.collection.insert_one(record, None).await?;
        info!(id = %result.inserted_id, amm_id = %record.amm_id, "pool record stored");
        Ok(result.inserted_id)
    }

    /// Finds a record by its AMM pool address.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_by_amm_id(
        &self,
        amm_id: &str,
    ) -> Result<Option<LpPoolRecord>, mongodb::error::Error> {
        self.collection.find_one(doc! { "ammId": amm_id }, None).await
    }

    /// Returns the most recently stored records, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<LpPoolRecord>, mongodb::error::Error> {
        let options = FindOptions::builder()
            .sort(doc! { "_id": -1 })
            .limit(limit)
            .build();
        let cursor = self.collection.find(None, options).await?;
        cursor.try_collect().await
    }
}

#[async_trait]
impl RecordSink for LpTransactionRepository {
    async fn save(&self, record: &LpPoolRecord) -> anyhow::Result<()> {
        self.insert(record).await?;
        Ok(())
    }
}
