//! Chain access for the liquidity toolkit: quotes, pool lookups and the
//! position manager, plus the two workflows built on top of them.

pub mod client;
pub mod error;
pub mod impact;
pub mod liquidity;
pub mod path;

#[cfg(test)]
pub(crate) mod test_utils;

pub use client::{MintReceipt, Uniswap, UniswapApi};
pub use error::UniswapError;
