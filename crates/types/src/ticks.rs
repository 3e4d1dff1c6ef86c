//! Conversion between human scale prices and discretised pool ticks.
//!
//! On chain a tick `t` stands for the raw price `1.0001^t`, measured in the
//! smallest units of each token. Human prices (token1 per token0, in whole
//! tokens) therefore need a decimal adjustment before taking the logarithm.
//!
//! Liquidity ranges are built with directional rounding: the lower bound is
//! floored onto the spacing grid so it never overstates the price, the upper
//! bound is lifted to the next grid point so it never understates it.

use alloy::primitives::aliases::I24;
use thiserror::Error;
use uniswap_v3_math::tick_math::{MAX_TICK, MIN_TICK};

const MIN_I24: i32 = -8_388_608_i32;
const MAX_I24: i32 = 8_388_607_i32;

/// Base of the tick price curve.
pub const TICK_BASE: f64 = 1.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickRounding {
    /// floor onto the spacing grid
    Down,
    /// next grid point unless already on one
    Up
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TickError {
    #[error("price must be strictly positive and finite, got {0}")]
    NonPositivePrice(f64),
    #[error("tick spacing must be positive, got {0}")]
    InvalidTickSpacing(i32),
    #[error("tick {0} is outside of the usable tick range")]
    OutOfRange(i32)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("overflow from i32 to i24 {0:?}")]
    OverflowErrorI24(i32)
}

/// Scales a human price into the raw unit ratio the pool works in.
pub fn adj_price_for_decimals(price: f64, decimals0: u8, decimals1: u8) -> f64 {
    price * 10f64.powi(decimals1 as i32 - decimals0 as i32)
}

/// Maps `price` (token1 per token0, whole tokens) onto a valid tick for a pool
/// with the given spacing.
pub fn price_to_tick(
    price: f64,
    tick_spacing: i32,
    decimals0: u8,
    decimals1: u8,
    rounding: TickRounding
) -> Result<i32, TickError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(TickError::NonPositivePrice(price));
    }
    if tick_spacing <= 0 {
        return Err(TickError::InvalidTickSpacing(tick_spacing));
    }

    let adjusted = adj_price_for_decimals(price, decimals0, decimals1);
    let raw = adjusted.ln() / TICK_BASE.ln() / tick_spacing as f64;
    let floored = raw.floor();

    let mut tick = floored as i64 * tick_spacing as i64;
    if rounding == TickRounding::Up && raw != floored {
        tick += tick_spacing as i64;
    }

    if tick < MIN_TICK as i64 || tick > MAX_TICK as i64 {
        return Err(TickError::OutOfRange(tick.clamp(i32::MIN as i64, i32::MAX as i64) as i32));
    }

    Ok(tick as i32)
}

/// Human price (token1 per token0, whole tokens) at `tick`.
pub fn tick_to_price(tick: i32, decimals0: u8, decimals1: u8) -> f64 {
    TICK_BASE.powf(tick as f64) / 10f64.powi(decimals1 as i32 - decimals0 as i32)
}

pub fn i32_to_i24(val: i32) -> Result<I24, ConversionError> {
    if !(MIN_I24..=MAX_I24).contains(&val) {
        return Err(ConversionError::OverflowErrorI24(val));
    }
    if val == MIN_I24 {
        return Ok(I24::MIN);
    }

    let mut bytes = [0u8; 3];
    bytes[..].copy_from_slice(&val.unsigned_abs().to_be_bytes()[1..]);

    let magnitude = I24::from_be_bytes(bytes);
    Ok(if val < 0 { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use alloy::primitives::aliases::I24;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn unit_price_same_decimals_is_tick_zero() {
        assert_eq!(adj_price_for_decimals(1.0, 18, 18), 1.0);
        assert_eq!(price_to_tick(1.0, 60, 18, 18, TickRounding::Down), Ok(0));
        assert_eq!(price_to_tick(1.0, 60, 18, 18, TickRounding::Up), Ok(0));
    }

    #[test]
    fn usdc_weth_style_decimals_shift_far_below_zero() {
        let adjusted = adj_price_for_decimals(2000.0, 18, 6);
        assert!((adjusted - 2000.0e-12).abs() < 1e-20);

        let down = price_to_tick(2000.0, 60, 18, 6, TickRounding::Down).unwrap();
        let up = price_to_tick(2000.0, 60, 18, 6, TickRounding::Up).unwrap();

        // ln(2e-9) / ln(1.0001) ~= -200_311
        assert!(down < -200_000 && down > -201_000, "{down}");
        assert_eq!(down % 60, 0);
        assert_eq!(up % 60, 0);
        assert_eq!(up - down, 60);
    }

    #[test]
    fn round_up_only_moves_off_grid_ticks() {
        // 1.0001^600 lands on the grid for spacing 60 up to float noise, so
        // pick a price clearly between grid points instead
        let price = TICK_BASE.powf(630.0);
        assert_eq!(price_to_tick(price, 60, 0, 0, TickRounding::Down), Ok(600));
        assert_eq!(price_to_tick(price, 60, 0, 0, TickRounding::Up), Ok(660));

        let below_one = TICK_BASE.powf(-30.0);
        assert_eq!(price_to_tick(below_one, 60, 0, 0, TickRounding::Down), Ok(-60));
        assert_eq!(price_to_tick(below_one, 60, 0, 0, TickRounding::Up), Ok(0));
    }

    #[test]
    fn rejects_non_positive_prices() {
        assert_eq!(
            price_to_tick(0.0, 60, 18, 18, TickRounding::Down),
            Err(TickError::NonPositivePrice(0.0))
        );
        assert_eq!(
            price_to_tick(-3.5, 60, 18, 18, TickRounding::Up),
            Err(TickError::NonPositivePrice(-3.5))
        );
        assert!(matches!(
            price_to_tick(f64::NAN, 60, 18, 18, TickRounding::Up),
            Err(TickError::NonPositivePrice(_))
        ));
        assert!(price_to_tick(f64::INFINITY, 60, 18, 18, TickRounding::Up).is_err());
    }

    #[test]
    fn rejects_bad_spacing_and_out_of_range() {
        assert_eq!(
            price_to_tick(1.0, 0, 18, 18, TickRounding::Down),
            Err(TickError::InvalidTickSpacing(0))
        );
        assert!(matches!(
            price_to_tick(1e60, 60, 0, 0, TickRounding::Down),
            Err(TickError::OutOfRange(_))
        ));
    }

    #[test]
    fn decimal_swap_inverts_the_exponent() {
        let a = adj_price_for_decimals(5.0, 6, 18);
        let b = adj_price_for_decimals(5.0, 18, 6);
        assert!((a / 5.0 - 1e12).abs() / 1e12 < 1e-12);
        assert!((b / 5.0 - 1e-12).abs() / 1e-12 < 1e-12);
    }

    #[test]
    fn tick_to_price_inverts_price_to_tick_on_grid() {
        let price = tick_to_price(-200_340, 18, 6);
        let tick = price_to_tick(price * 1.000_000_1, 60, 18, 6, TickRounding::Down).unwrap();
        assert_eq!(tick, -200_340);
        assert!((tick_to_price(0, 18, 18) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tick_to_price_is_stable_at_wide_ticks() {
        for tick in [-200_340, -887_220, 200_340, 887_220] {
            let expected = (tick as f64 * TICK_BASE.ln()).exp();
            let price = tick_to_price(tick, 0, 0);
            assert!(((price - expected) / expected).abs() < 1e-12, "{tick}: {price} vs {expected}");
        }
    }

    #[test]
    fn test_i32_to_i24() {
        let test_values = [
            (I24::MIN).as_i32() + 1,
            -887_272_i32,
            -1025_i32,
            0_i32,
            1024_i32,
            887_272_i32,
            I24::MAX.as_i32() - 1
        ];
        for &original in test_values.iter() {
            let converted = i32_to_i24(original).unwrap();
            assert_eq!(converted.as_i32(), original, "i32 to I24 conversion failed");
        }
        assert_eq!(I24::MIN.to_string(), MIN_I24.to_string());
        assert_eq!(I24::MAX.to_string(), MAX_I24.to_string());
        assert_eq!(i32_to_i24(MAX_I24 + 1), Err(ConversionError::OverflowErrorI24(MAX_I24 + 1)));
    }

    fn decimals() -> impl Strategy<Value = u8> {
        0u8..=18
    }

    proptest! {
        #[test]
        fn down_never_exceeds_up(
            price in 1e-6f64..1e6,
            spacing in prop::sample::select(vec![1, 10, 60, 200]),
            d0 in decimals(),
            d1 in decimals()
        ) {
            let down = price_to_tick(price, spacing, d0, d1, TickRounding::Down).unwrap();
            let up = price_to_tick(price, spacing, d0, d1, TickRounding::Up).unwrap();

            prop_assert!(down <= up);
            prop_assert_eq!(down % spacing, 0);
            prop_assert_eq!(up % spacing, 0);

            let raw = adj_price_for_decimals(price, d0, d1).ln() / TICK_BASE.ln() / spacing as f64;
            if raw == raw.floor() {
                prop_assert_eq!(down, up);
            } else {
                prop_assert_eq!(up - down, spacing);
            }
        }

        #[test]
        fn monotone_in_price(
            a in 1e-6f64..1e6,
            b in 1e-6f64..1e6,
            spacing in prop::sample::select(vec![1, 10, 60, 200]),
            d0 in decimals(),
            d1 in decimals()
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for rounding in [TickRounding::Down, TickRounding::Up] {
                let lo_tick = price_to_tick(lo, spacing, d0, d1, rounding).unwrap();
                let hi_tick = price_to_tick(hi, spacing, d0, d1, rounding).unwrap();
                prop_assert!(lo_tick <= hi_tick);
            }
        }
    }
}
