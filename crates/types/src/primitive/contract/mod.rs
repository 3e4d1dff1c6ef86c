use alloy::primitives::{Address, address};
use serde::{Deserialize, Serialize};

/// The zero address stands in for native ether wherever a token is expected.
pub const ETH_ADDRESS: Address = Address::ZERO;

pub const WETH_ADDRESS: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
pub const USDT_ADDRESS: Address = address!("dac17f958d2ee523a2206206994597c13d831ec7");
pub const VXV_ADDRESS: Address = address!("7d29a64504629172a429e64183d6673b9dacbfce");
pub const UNI_ADDRESS: Address = address!("1f9840a85d5af5bf1d1762f925bdaddc4201f984");

/// WETH as deployed on Goerli, the network the liquidity walkthrough targets.
pub const GOERLI_WETH_ADDRESS: Address = address!("b4fbf271143f4fbf7b91a5ded31805e42b2208d6");

pub const UNISWAP_V2_ROUTER_ADDRESS: Address =
    address!("7a250d5630b4cf539739df2c5dacb4c659f2488d");
pub const UNISWAP_V3_FACTORY_ADDRESS: Address =
    address!("1f98431c8ad98523631ae4a59f267346ea31f984");
pub const UNISWAP_V3_QUOTER_ADDRESS: Address =
    address!("b27308f9f90d607463bb33ea1bebb41c27ce5ab6");
pub const UNISWAP_V3_POSITION_MANAGER_ADDRESS: Address =
    address!("c36442b4a4522e871399cd717abdd847ab11fe88");

/// Locations of the periphery contracts a client needs. The v3 contracts
/// share the same addresses on mainnet and the public testnets, so the
/// defaults work for both unless a config file says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractAddresses {
    pub weth:             Address,
    pub v2_router:        Address,
    pub v3_factory:       Address,
    pub v3_quoter:        Address,
    pub position_manager: Address
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            weth:             WETH_ADDRESS,
            v2_router:        UNISWAP_V2_ROUTER_ADDRESS,
            v3_factory:       UNISWAP_V3_FACTORY_ADDRESS,
            v3_quoter:        UNISWAP_V3_QUOTER_ADDRESS,
            position_manager: UNISWAP_V3_POSITION_MANAGER_ADDRESS
        }
    }
}

impl ContractAddresses {
    pub fn is_weth_or_eth(&self, token: &Address) -> bool {
        *token == ETH_ADDRESS || *token == self.weth
    }

    /// Contracts only deal in ERC-20s, so ether is swapped for WETH.
    pub fn erc20(&self, token: Address) -> Address {
        if token == ETH_ADDRESS { self.weth } else { token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let json = r#"{ "weth": "0xb4fbf271143f4fbf7b91a5ded31805e42b2208d6" }"#;
        let addresses: ContractAddresses = serde_json::from_str(json).unwrap();

        assert_eq!(addresses.weth, GOERLI_WETH_ADDRESS);
        assert_eq!(addresses.position_manager, UNISWAP_V3_POSITION_MANAGER_ADDRESS);
        assert_eq!(addresses.v2_router, UNISWAP_V2_ROUTER_ADDRESS);
    }

    #[test]
    fn eth_maps_to_weth() {
        let addresses = ContractAddresses::default();
        assert_eq!(addresses.erc20(ETH_ADDRESS), WETH_ADDRESS);
        assert_eq!(addresses.erc20(VXV_ADDRESS), VXV_ADDRESS);
        assert!(addresses.is_weth_or_eth(&ETH_ADDRESS));
        assert!(addresses.is_weth_or_eth(&WETH_ADDRESS));
        assert!(!addresses.is_weth_or_eth(&USDT_ADDRESS));
    }
}
