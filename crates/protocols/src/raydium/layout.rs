//! Account positions within the Raydium AMM v4 pool-creation instruction.
//!
//! These are the historical `initialize2` positions. The instruction
//! payload is never inspected and no version byte exists to check, so
//! variants with a different account ordering are out of scope.

pub const PROGRAM: usize = 0;
pub const AMM_ID: usize = 4;
pub const AMM_AUTHORITY: usize = 5;
pub const AMM_OPEN_ORDERS: usize = 6;
pub const LP_MINT: usize = 7;
pub const COIN_MINT: usize = 8;
pub const PC_MINT: usize = 9;
pub const COIN_VAULT: usize = 10;
pub const PC_VAULT: usize = 11;
pub const AMM_TARGET_ORDERS: usize = 13;
pub const SERUM_PROGRAM: usize = 15;
pub const SERUM_MARKET: usize = 16;
pub const DEPLOYER: usize = 17;
