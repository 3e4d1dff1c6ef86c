use std::fmt;

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::contract_bindings::position_manager::INonfungiblePositionManager::positionsReturn;

/// Snapshot of a position NFT held by the position manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityPosition {
    pub token_id:     U256,
    pub token0:       Address,
    pub token1:       Address,
    pub fee:          u32,
    pub tick_lower:   i32,
    pub tick_upper:   i32,
    pub liquidity:    u128,
    pub tokens_owed0: u128,
    pub tokens_owed1: u128
}

impl From<(U256, positionsReturn)> for LiquidityPosition {
    fn from((token_id, value): (U256, positionsReturn)) -> Self {
        Self {
            token_id,
            token0: value.token0,
            token1: value.token1,
            fee: value.fee.to(),
            tick_lower: value.tickLower.as_i32(),
            tick_upper: value.tickUpper.as_i32(),
            liquidity: value.liquidity,
            tokens_owed0: value.tokensOwed0,
            tokens_owed1: value.tokensOwed1
        }
    }
}

impl fmt::Display for LiquidityPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}/{} fee={} ticks=[{}, {}] liquidity={}",
            self.token_id,
            self.token0,
            self.token1,
            self.fee,
            self.tick_lower,
            self.tick_upper,
            self.liquidity
        )
    }
}
