//! Solana-facing side of the Raydium LP extractor.
//!
//! Wraps the nonblocking RPC client, knows the account layout of the
//! Raydium AMM v4 pool-creation instruction, and turns a confirmed
//! transaction into an [`raydium_lp_domain::LpPoolRecord`].

pub mod error;
pub mod raydium;
pub mod rpc;

pub use error::ExtractError;
pub use raydium::LpTransactionExtractor;
pub use rpc::RpcProvider;
