//! MongoDB persistence for extracted pool records.

pub mod repositories;

pub use repositories::{DATABASE_NAME, Database, LpTransactionRepository};
