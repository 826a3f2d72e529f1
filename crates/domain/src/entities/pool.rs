use serde::{Deserialize, Serialize};

/// Accounts of a newly created Raydium AMM v4 liquidity pool.
///
/// Every field is the base58 form of an address read from a fixed
/// position in the pool-creation instruction's account list. Field names
/// serialize in camelCase to keep the stored document shape stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LpPoolRecord {
    /// Program referenced at position 0 of the instruction account list.
    pub program_id: String,
    /// AMM pool account.
    pub amm_id: String,
    /// Pool authority PDA.
    pub amm_authority: String,
    /// Open-orders account on the paired market.
    pub amm_open_orders: String,
    /// LP token mint.
    pub lp_mint: String,
    /// Base token mint.
    pub coin_mint: String,
    /// Quote token mint.
    pub pc_mint: String,
    /// Base token vault.
    pub coin_vault: String,
    /// Quote token vault.
    pub pc_vault: String,
    /// Target-orders account.
    pub amm_target_orders: String,
    /// Serum market program.
    pub serum_program: String,
    /// Serum market the pool trades against.
    pub serum_market: String,
    /// Wallet that deployed the pool.
    pub deployer: String,
}
