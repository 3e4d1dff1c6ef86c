use std::str::FromStr;

use alloy::{primitives::U256, signers::local::PrivateKeySigner};
use eyre::Context;
use lp_types::primitive::{ContractAddresses, Version};
use uniswap_client::{
    Uniswap, UniswapApi,
    liquidity::{LifecycleReport, LiquidityParams, run_liquidity_lifecycle}
};
use url::Url;

/// Environment variable holding the hex encoded key of the liquidity owner.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

pub async fn run_liquidity(
    rpc_url: &Url,
    contracts: ContractAddresses,
    params: LiquidityParams
) -> eyre::Result<()> {
    let signer = signer_from_env()?;
    let uniswap = Uniswap::connect(rpc_url, Some(signer), Version::V3, contracts).await?;
    tracing::info!(owner = ?uniswap.address(), version = %uniswap.version(), "loaded liquidity owner");

    let report = run_liquidity_lifecycle(&uniswap, &params).await?;

    for line in report_lines(&report) {
        println!("{line}");
    }

    Ok(())
}

fn signer_from_env() -> eyre::Result<PrivateKeySigner> {
    let key = std::env::var(PRIVATE_KEY_ENV)
        .wrap_err_with(|| format!("{PRIVATE_KEY_ENV} must be set for the liquidity command"))?;
    parse_signer(&key)
}

fn parse_signer(key: &str) -> eyre::Result<PrivateKeySigner> {
    PrivateKeySigner::from_str(key.trim())
        .wrap_err_with(|| format!("{PRIVATE_KEY_ENV} is not a valid private key"))
}

fn report_lines(report: &LifecycleReport) -> Vec<String> {
    let mut lines = vec![
        format!(
            "add liquidity params: {} {} {} {} {} {} (range {} {})",
            report.lower_price,
            report.upper_price,
            report.amount0,
            report.amount1,
            report.tick_lower,
            report.tick_upper,
            report.range_lower,
            report.range_upper
        ),
        format!("add liquidity result: {}", report.mint.tx_hash),
        format!("list of liquidity positions: [{}]", join(&report.positions))
    ];
    if let Some((_, tx)) = report.closed {
        lines.push(format!("result of close position: {tx}"));
    }
    lines
}

fn join(ids: &[U256]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
