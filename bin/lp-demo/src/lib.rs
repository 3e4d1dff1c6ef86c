//! Command line walkthrough of Uniswap price impact and the v3 liquidity
//! lifecycle.

use clap::Parser;

use crate::cli::LpDemoCli;

pub mod cli;
pub mod config;
pub mod impact;
pub mod liquidity;

/// Parses the command line, sets up logging and runs the chosen command to
/// completion on a single thread.
pub fn run() -> eyre::Result<()> {
    let cli = LpDemoCli::parse();
    cli.init_tracing();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(cli.run_command())
}
