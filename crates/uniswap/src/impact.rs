use alloy::primitives::{Address, U256};
use malachite::{Natural, Rational, num::conversion::traits::RoundingInto};

use crate::{UniswapApi, UniswapError};

/// The marginal price is sampled with a trade this many times smaller than
/// the one being estimated.
pub const REFERENCE_DIVISOR: u64 = 10_000;

/// Fraction of value lost to price movement when swapping `amount_in` raw
/// units of `token_in`, relative to a tiny reference trade on the same path.
/// `0.01` means the execution price is 1% worse than the marginal price.
///
/// Both quotes come from the client; the only arithmetic here is the ratio of
/// the two effective prices, done exactly before rounding to a float.
pub async fn estimate_price_impact<C: UniswapApi>(
    client: &C,
    token_in: Address,
    token_out: Address,
    amount_in: U256,
    fee: Option<u32>,
    route: Option<&[Address]>
) -> Result<f64, UniswapError> {
    if amount_in.is_zero() {
        return Ok(0.0);
    }

    let reference_in = (amount_in / U256::from(REFERENCE_DIVISOR)).max(U256::from(1));
    let reference_out = client
        .get_price_input(token_in, token_out, reference_in, fee, route)
        .await?;
    if reference_out.is_zero() {
        return Err(UniswapError::ZeroReferencePrice(token_in));
    }

    let amount_out = client
        .get_price_input(token_in, token_out, amount_in, fee, route)
        .await?;

    // 1 - (amount_out / amount_in) / (reference_out / reference_in)
    let execution = Rational::from_naturals(
        natural(amount_out) * natural(reference_in),
        natural(amount_in) * natural(reference_out)
    );
    let impact = Rational::from(1u32) - execution;
    tracing::debug!(%token_in, %token_out, %amount_in, %amount_out, %reference_in, %reference_out, "estimated impact");

    Ok(to_f64(impact))
}

/// `numerator / denominator` rounded to the nearest float. Zero when the
/// denominator is zero.
pub fn ratio(numerator: U256, denominator: U256) -> f64 {
    if denominator.is_zero() {
        return 0.0;
    }
    to_f64(Rational::from_naturals(natural(numerator), natural(denominator)))
}

fn natural(value: U256) -> Natural {
    Natural::from_limbs_asc(value.as_limbs())
}

fn to_f64(value: Rational) -> f64 {
    let (res, _) = value.rounding_into(malachite::rounding_modes::RoundingMode::Nearest);
    res
}
