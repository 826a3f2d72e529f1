//! Domain types for the Raydium LP extractor.
//!
//! Holds the pool record produced by transaction extraction and the
//! sink port through which records reach persistent storage. This crate
//! knows nothing about Solana RPC or MongoDB.

pub mod entities;
pub mod sink;

pub use entities::LpPoolRecord;
pub use sink::RecordSink;
