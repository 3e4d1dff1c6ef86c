use std::fmt;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use super::ETH_ADDRESS;

/// ERC-20 metadata as reported by the token contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub address:  Address,
    pub symbol:   String,
    pub decimals: u8
}

impl Token {
    pub fn new(address: Address, symbol: impl Into<String>, decimals: u8) -> Self {
        Self { address, symbol: symbol.into(), decimals }
    }

    pub fn eth() -> Self {
        Self::new(ETH_ADDRESS, "ETH", 18)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.address)
    }
}
