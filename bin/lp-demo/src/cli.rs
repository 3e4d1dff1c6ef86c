use std::path::PathBuf;

use alloy::primitives::{Address, U256};
use clap::{ArgAction, Args, Parser, Subcommand};
use lp_types::primitive::{GOERLI_WETH_ADDRESS, UNI_ADDRESS};
use tracing::Level;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};
use uniswap_client::liquidity::LiquidityParams;
use url::Url;

use crate::{config::DemoConfig, impact::run_impact, liquidity::run_liquidity};

#[derive(Parser)]
#[command(name = "lp-demo", about = "Uniswap price impact and liquidity walkthrough")]
pub struct LpDemoCli {
    #[clap(subcommand)]
    pub command:   DemoSubcommand,
    /// json-rpc endpoint of the node to talk to
    #[clap(long, env = "PROVIDER", global = true)]
    pub rpc_url:   Option<Url>,
    /// optional toml file overriding the rpc url and contract addresses
    #[clap(long, global = true)]
    pub config:    Option<PathBuf>,
    /// Set the minimum log level.
    ///
    /// -v      Errors
    /// -vv     Warnings
    /// -vvv    Info
    /// -vvvv   Debug
    /// -vvvvv  Traces
    #[clap(short = 'v', long, action = ArgAction::Count, default_value_t = 3, help_heading = "Display", global = true)]
    pub verbosity: u8
}

impl LpDemoCli {
    pub async fn run_command(self) -> eyre::Result<()> {
        let config = DemoConfig::load(self.config.as_deref())?;
        let rpc_url = config.resolve_rpc_url(self.rpc_url)?;

        match self.command {
            DemoSubcommand::Impact => run_impact(&rpc_url, config.contracts).await,
            DemoSubcommand::Liquidity(args) => {
                run_liquidity(&rpc_url, config.contracts, args.into()).await
            }
        }
    }

    pub fn init_tracing(&self) {
        init_tracing(self.verbosity);
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum DemoSubcommand {
    /// quote the price impact of a few fixed VXV purchases on v2 and v3
    #[command(name = "impact")]
    Impact,
    /// mint a v3 position around the current price, list positions and
    /// close the newest one
    #[command(name = "liquidity")]
    Liquidity(LiquidityArgs)
}

#[derive(Debug, Clone, Args)]
pub struct LiquidityArgs {
    #[clap(long, default_value_t = UNI_ADDRESS)]
    pub token0:  Address,
    #[clap(long, default_value_t = GOERLI_WETH_ADDRESS)]
    pub token1:  Address,
    /// pool fee tier in hundredths of a bip
    #[clap(long, default_value_t = 3000)]
    pub fee:     u32,
    /// raw units of token0 to deposit
    #[clap(long, default_value_t = U256::from(1_000))]
    pub amount0: U256,
    /// raw units of token1 to deposit
    #[clap(long, default_value_t = U256::from(1_000))]
    pub amount1: U256,
    /// relative half-width of the price range
    #[clap(long, default_value_t = 0.01)]
    pub band:    f64
}

impl From<LiquidityArgs> for LiquidityParams {
    fn from(args: LiquidityArgs) -> Self {
        Self {
            token0:  args.token0,
            token1:  args.token1,
            fee:     args.fee,
            amount0: args.amount0,
            amount1: args.amount1,
            band:    args.band
        }
    }
}

pub fn init_tracing(verbosity: u8) {
    let level = match verbosity.saturating_sub(1) {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE
    };

    let envfilter = filter::EnvFilter::builder().try_from_env().ok();
    let format = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    if let Some(f) = envfilter {
        let _ = tracing_subscriber::registry()
            .with(format)
            .with(f)
            .try_init();
    } else {
        let filter = filter::Targets::new()
            .with_target("lp_demo", level)
            .with_target("uniswap_client", level)
            .with_target("lp_types", level);
        let _ = tracing_subscriber::registry()
            .with(format)
            .with(filter)
            .try_init();
    }
}
