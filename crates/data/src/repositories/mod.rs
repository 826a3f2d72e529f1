//! Repository implementations for MongoDB persistence.
//!
//! One collection, one document per extracted pool creation. The
//! connection is a value owned by the caller and handed to whichever
//! component needs it, there is no process-wide handle.

mod lp_transactions;

pub use lp_transactions::{COLLECTION_NAME, LpTransactionRepository};

use mongodb::Client;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;

/// Name of the database holding extractor output.
pub const DATABASE_NAME: &str = "bot";

/// Database connection wrapper for repositories.
#[derive(Clone)]
pub struct Database {
    database: mongodb::Database,
}

impl Database {
    /// Connects to MongoDB and verifies the server is reachable.
    ///
    /// # Arguments
    /// * `uri` - MongoDB connection string
    ///
    /// # Errors
    /// Returns an error if the URI does not parse or the server does not
    /// answer a ping.
    pub async fn connect(uri: &str) -> Result<Self, mongodb::error::Error> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;
        let database = client.database(DATABASE_NAME);
        // Client construction is lazy; the ping forces a round trip so an
        // unreachable server fails here instead of at the first insert.
        database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(Self { database })
    }

    /// Creates an LpTransactionRepository instance.
    #[must_use]
    pub fn lp_transactions(&self) -> LpTransactionRepository {
        LpTransactionRepository::new(self.database.collection(COLLECTION_NAME))
    }
}
