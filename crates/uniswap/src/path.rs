//! Swap paths as the v2 router and the v3 quoter expect them.

use alloy::primitives::{Address, Bytes};
use lp_types::primitive::ContractAddresses;

use crate::UniswapError;

/// Fee tier used when the caller does not pick one.
pub const DEFAULT_FEE: u32 = 3000;

/// Builds the v2 router path. An explicit route wins; otherwise pairs that
/// touch ether trade directly and everything else hops through WETH.
pub fn v2_path(
    addresses: &ContractAddresses,
    token_in: Address,
    token_out: Address,
    route: Option<&[Address]>
) -> Result<Vec<Address>, UniswapError> {
    let path = match route {
        Some(route) => route.iter().map(|token| addresses.erc20(*token)).collect(),
        None if addresses.is_weth_or_eth(&token_in) || addresses.is_weth_or_eth(&token_out) => {
            vec![addresses.erc20(token_in), addresses.erc20(token_out)]
        }
        None => vec![token_in, addresses.weth, token_out]
    };

    if path.len() < 2 {
        return Err(UniswapError::InvalidPath(path.len()));
    }
    Ok(path)
}

/// Packs `token0 ‖ fee ‖ token1 ‖ fee ‖ … ‖ tokenN` for the v3 quoter, using
/// the same fee tier on every hop.
pub fn v3_path(
    addresses: &ContractAddresses,
    route: &[Address],
    fee: u32
) -> Result<Bytes, UniswapError> {
    if route.len() < 2 {
        return Err(UniswapError::InvalidPath(route.len()));
    }

    let fee_bytes = &fee.to_be_bytes()[1..];
    let mut packed = Vec::with_capacity(route.len() * 20 + (route.len() - 1) * 3);
    for (i, token) in route.iter().enumerate() {
        if i > 0 {
            packed.extend_from_slice(fee_bytes);
        }
        packed.extend_from_slice(addresses.erc20(*token).as_slice());
    }

    Ok(packed.into())
}
