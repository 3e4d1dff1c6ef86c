//! Open a position around the current price, then unwind the newest one.
//!
//! Each step runs only after the previous one returned. There is no rollback:
//! if a later step fails the chain keeps whatever the earlier steps did.

use alloy::primitives::{Address, TxHash, U256};
use lp_types::{
    primitive::{GOERLI_WETH_ADDRESS, PoolInfo, UNI_ADDRESS},
    ticks::{TickRounding, adj_price_for_decimals, price_to_tick, tick_to_price}
};

use crate::{MintReceipt, UniswapApi, UniswapError, impact::ratio};

/// Input size of the quote used as the spot price estimate.
pub const REFERENCE_QTY: u64 = 1_000;

#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityParams {
    pub token0:  Address,
    pub token1:  Address,
    pub fee:     u32,
    /// raw units of `token0`
    pub amount0: U256,
    /// raw units of `token1`
    pub amount1: U256,
    /// relative half-width of the price range, 0.01 is ±1%
    pub band:    f64
}

impl Default for LiquidityParams {
    fn default() -> Self {
        Self {
            token0:  UNI_ADDRESS,
            token1:  GOERLI_WETH_ADDRESS,
            fee:     3000,
            amount0: U256::from(1_000),
            amount1: U256::from(1_000),
            band:    0.01
        }
    }
}

/// Everything the lifecycle observed, with prices and amounts in pool order
/// (token1 per token0).
#[derive(Debug, Clone)]
pub struct LifecycleReport {
    pub pool:        PoolInfo,
    pub price:       f64,
    pub lower_price: f64,
    pub upper_price: f64,
    pub tick_lower:  i32,
    pub tick_upper:  i32,
    /// price at `tick_lower`, the range actually minted
    pub range_lower: f64,
    /// price at `tick_upper`
    pub range_upper: f64,
    pub amount0:     U256,
    pub amount1:     U256,
    pub mint:        MintReceipt,
    pub positions:   Vec<U256>,
    pub closed:      Option<(U256, TxHash)>
}

pub async fn run_liquidity_lifecycle<C: UniswapApi>(
    client: &C,
    params: &LiquidityParams
) -> Result<LifecycleReport, UniswapError> {
    let reference = U256::from(REFERENCE_QTY);
    let amount_out = client
        .get_price_input(params.token0, params.token1, reference, Some(params.fee), None)
        .await?;
    let raw_price = ratio(amount_out, reference);
    tracing::info!(%amount_out, raw_price, "fetched reference price");

    let pool = client
        .get_pool(params.token0, params.token1, params.fee)
        .await?;
    let reversed =
        pool.token0.address == params.token1 || pool.token1.address == params.token0;

    let (quoted0, quoted1) = if reversed { (&pool.token1, &pool.token0) } else { (&pool.token0, &pool.token1) };
    let quoted_price = raw_price / adj_price_for_decimals(1.0, quoted0.decimals, quoted1.decimals);
    let (price, amount0, amount1) = if reversed {
        (1.0 / quoted_price, params.amount1, params.amount0)
    } else {
        (quoted_price, params.amount0, params.amount1)
    };
    tracing::info!(pool = %pool.address, token0 = %pool.token0, token1 = %pool.token1, tick_spacing = pool.tick_spacing, reversed, price, "resolved pool");

    let lower_price = (1.0 - params.band) * price;
    let upper_price = (1.0 + params.band) * price;
    let tick_lower = price_to_tick(
        lower_price,
        pool.tick_spacing,
        pool.token0.decimals,
        pool.token1.decimals,
        TickRounding::Down
    )?;
    let tick_upper = price_to_tick(
        upper_price,
        pool.tick_spacing,
        pool.token0.decimals,
        pool.token1.decimals,
        TickRounding::Up
    )?;
    let range_lower = tick_to_price(tick_lower, pool.token0.decimals, pool.token1.decimals);
    let range_upper = tick_to_price(tick_upper, pool.token0.decimals, pool.token1.decimals);
    tracing::info!(lower_price, upper_price, %amount0, %amount1, tick_lower, tick_upper, range_lower, range_upper, "adding liquidity");

    let mint = client
        .mint_liquidity(&pool, amount0, amount1, tick_lower, tick_upper)
        .await?;
    tracing::info!(tx = %mint.tx_hash, token_id = ?mint.token_id, "minted position");

    let positions = client.get_liquidity_positions().await?;
    tracing::info!(?positions, "listed liquidity positions");

    let closed = match positions.last() {
        Some(token_id) => {
            let tx = client.close_position(*token_id).await?;
            tracing::info!(%token_id, %tx, "closed position");
            Some((*token_id, tx))
        }
        None => None
    };

    Ok(LifecycleReport {
        pool,
        price,
        lower_price,
        upper_price,
        tick_lower,
        tick_upper,
        range_lower,
        range_upper,
        amount0,
        amount1,
        mint,
        positions,
        closed
    })
}
