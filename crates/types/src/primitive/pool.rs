use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use super::Token;

/// A v3 pool as seen from the factory. Both the tick spacing and the token
/// decimals are fixed for the lifetime of the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolInfo {
    pub address:      Address,
    pub token0:       Token,
    pub token1:       Token,
    /// fee tier in hundredths of a bip
    pub fee:          u32,
    pub tick_spacing: i32
}
