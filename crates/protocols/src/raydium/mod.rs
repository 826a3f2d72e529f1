//! Raydium AMM v4 pool-creation extraction.

pub mod extractor;
pub mod layout;

pub use extractor::{LpTransactionExtractor, find_lp_record};

/// Raydium AMM v4 program ID (mainnet).
pub const RAYDIUM_AMM_V4_PROGRAM_ID: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";
