use alloy::primitives::U256;
use lp_types::{
    display::format_percent,
    primitive::{ContractAddresses, ETH_ADDRESS, USDT_ADDRESS, VXV_ADDRESS, Version}
};
use uniswap_client::{Uniswap, UniswapApi, impact::estimate_price_impact};
use url::Url;

/// Fee tier of the v3 ETH/VXV pool.
const VXV_V3_FEE: u32 = 10_000;

pub async fn run_impact(rpc_url: &Url, contracts: ContractAddresses) -> eyre::Result<()> {
    usdt_to_vxv_v2(rpc_url, contracts).await?;
    eth_to_vxv_v3(rpc_url, contracts).await
}

/// A thin v2 pool routed through WETH, where even small buys move the price
/// a lot.
async fn usdt_to_vxv_v2(rpc_url: &Url, contracts: ContractAddresses) -> eyre::Result<()> {
    let uniswap = Uniswap::connect(rpc_url, None, Version::V2, contracts).await?;
    let route = [USDT_ADDRESS, contracts.weth, VXV_ADDRESS];

    for usdt in [10u64, 13_900] {
        let qty = U256::from(usdt) * U256::from(10u64.pow(8));
        let impact =
            estimate_price_impact(&uniswap, USDT_ADDRESS, VXV_ADDRESS, qty, None, Some(&route))
                .await?;
        println!("{}", impact_line(uniswap.version(), usdt as f64, "USDT", impact));
    }

    Ok(())
}

async fn eth_to_vxv_v3(rpc_url: &Url, contracts: ContractAddresses) -> eyre::Result<()> {
    let uniswap = Uniswap::connect(rpc_url, None, Version::V3, contracts).await?;

    for eth in [1u64, 100] {
        let qty = U256::from(eth) * U256::from(10u64.pow(18));
        let impact =
            estimate_price_impact(&uniswap, ETH_ADDRESS, VXV_ADDRESS, qty, Some(VXV_V3_FEE), None)
                .await?;
        println!("{}", impact_line(uniswap.version(), eth as f64, "ETH", impact));
    }

    Ok(())
}

fn impact_line(version: Version, amount: f64, symbol: &str, impact: f64) -> String {
    format!(
        "Impact for buying VXV on {version} with {amount:.1} {symbol}:  {}",
        format_percent(impact)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_line_layout() {
        assert_eq!(
            impact_line(Version::V2, 13_900.0, "USDT", 0.27),
            "Impact for buying VXV on v2 with 13900.0 USDT:  27.0%"
        );
        assert_eq!(
            impact_line(Version::V3, 1.0, "ETH", 0.0123456),
            "Impact for buying VXV on v3 with 1.0 ETH:  1.235%"
        );
    }
}
