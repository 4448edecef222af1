use crate::math::full_math::{div_rounding_up, mul_div, mul_div_rounding_up, mul_div_with};
use crate::math::rounding::Rounding;
use crate::RESOLUTION;
use crate::{
    error::{Error, MathError, StateError},
    Q96, U160_MAX,
};
use alloy_primitives::{I256, U256};

#[inline]
fn check_u160(sqrt_price_x96: U256) -> Result<U256, MathError> {
    if sqrt_price_x96 > U160_MAX {
        return Err(MathError::Overflow);
    }
    Ok(sqrt_price_x96)
}

#[inline]
fn to_i256(value: U256) -> Result<I256, MathError> {
    if value > I256::MAX.into_raw() {
        return Err(MathError::Overflow);
    }
    Ok(I256::from_raw(value))
}

/// Computes the next sqrt price after swapping token0, rounding the
/// resulting price up, given current price, liquidity, amount, and
/// whether the amount is added or removed.
///
/// Always rounding up keeps the price high enough that the token1 paid out
/// for the move is never overstated.
pub fn get_next_sqrt_price_from_amount_0_rounding_up(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    if amount.is_zero() {
        return Ok(sqrt_p_x96);
    }

    let numerator1: U256 = U256::from(liquidity) << RESOLUTION;

    if add {
        if let Some(product) = amount.checked_mul(sqrt_p_x96) {
            if let Some(denominator) = numerator1.checked_add(product) {
                return Ok(mul_div_rounding_up(numerator1, sqrt_p_x96, denominator)?);
            }
        }
        // L * sqrtP / (L + amount * sqrtP) == L / (L / sqrtP + amount)
        let denominator = (numerator1 / sqrt_p_x96)
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        Ok(div_rounding_up(numerator1, denominator)?)
    } else {
        let product = amount
            .checked_mul(sqrt_p_x96)
            .filter(|product| numerator1 > *product)
            .ok_or(StateError::InsufficientReserves)?;
        let next = mul_div_rounding_up(numerator1, sqrt_p_x96, numerator1 - product)?;
        Ok(check_u160(next)?)
    }
}

/// Computes the next sqrt price after swapping token1, rounding the
/// resulting price down, given current price, liquidity, amount, and
/// direction (add/remove).
pub fn get_next_sqrt_price_from_amount_1_rounding_down(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    if liquidity == 0 {
        return Err(MathError::DivisionByZero.into());
    }
    let liquidity = U256::from(liquidity);

    if add {
        let quotient: U256 = if amount <= U160_MAX {
            (amount << RESOLUTION) / liquidity
        } else {
            mul_div(amount, Q96, liquidity)?
        };

        let next = sqrt_p_x96
            .checked_add(quotient)
            .ok_or(MathError::Overflow)?;
        Ok(check_u160(next)?)
    } else {
        let quotient: U256 = if amount <= U160_MAX {
            div_rounding_up(amount << RESOLUTION, liquidity)?
        } else {
            mul_div_rounding_up(amount, Q96, liquidity)?
        };

        if sqrt_p_x96 <= quotient {
            return Err(StateError::InsufficientReserves.into());
        }
        Ok(sqrt_p_x96 - quotient)
    }
}

/// Amount of token0 between two sqrt prices for a given liquidity:
/// `L * 2^96 * (sqrt_b - sqrt_a) / (sqrt_a * sqrt_b)`.
///
/// The bounds may be passed in either order. Use [`Rounding::Up`] for
/// amounts owed to the pool and [`Rounding::Down`] for amounts paid out.
pub fn get_amount_0_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
    rounding: Rounding,
) -> Result<U256, Error> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    if sqrt_ratio_a_x96.is_zero() {
        return Err(StateError::SqrtRatioIsZero.into());
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    match rounding {
        Rounding::Up => Ok(div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_ratio_b_x96)?,
            sqrt_ratio_a_x96,
        )?),
        Rounding::Down => {
            Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96)? / sqrt_ratio_a_x96)
        }
    }
}

/// Amount of token1 between two sqrt prices for a given liquidity:
/// `L * (sqrt_b - sqrt_a) / 2^96`.
pub fn get_amount_1_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
    rounding: Rounding,
) -> Result<U256, Error> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    Ok(mul_div_with(
        U256::from(liquidity),
        sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
        Q96,
        rounding,
    )?)
}

/// Signed token0 delta for a signed liquidity change.
///
/// Added liquidity (non‑negative) is owed to the pool and rounds up;
/// removed liquidity is paid out, rounds down and comes back negated.
pub fn get_amount_0_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: i128,
) -> Result<I256, Error> {
    if liquidity < 0 {
        let amount = get_amount_0_delta(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.unsigned_abs(),
            Rounding::Down,
        )?;
        Ok(-to_i256(amount)?)
    } else {
        let amount = get_amount_0_delta(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.unsigned_abs(),
            Rounding::Up,
        )?;
        Ok(to_i256(amount)?)
    }
}

/// Signed token1 delta for a signed liquidity change.
pub fn get_amount_1_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: i128,
) -> Result<I256, Error> {
    if liquidity < 0 {
        let amount = get_amount_1_delta(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.unsigned_abs(),
            Rounding::Down,
        )?;
        Ok(-to_i256(amount)?)
    } else {
        let amount = get_amount_1_delta(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.unsigned_abs(),
            Rounding::Up,
        )?;
        Ok(to_i256(amount)?)
    }
}

/// Computes the next sqrt price when swapping *into* the pool
/// (`amount_in`), choosing the correct branch for token0/token1
/// depending on `zero_for_one`.
///
/// The price is rounded so that it never passes the point the input
/// actually pays for: up when it falls, down when it rises.
pub fn get_next_sqrt_price_from_input(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if sqrt_p_x96.is_zero() {
        return Err(StateError::SqrtPriceIsZero.into());
    }
    if liquidity == 0 {
        return Err(StateError::LiquidityIsZero.into());
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x96, liquidity, amount_in, true)
    }
}

/// Computes the next sqrt price when swapping *out of* the pool
/// (`amount_out`), choosing the correct branch for token0/token1
/// depending on `zero_for_one`.
///
/// The price is rounded so that it moves at least as far as the
/// requested output requires.
pub fn get_next_sqrt_price_from_output(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if sqrt_p_x96.is_zero() {
        return Err(StateError::SqrtPriceIsZero.into());
    }
    if liquidity == 0 {
        return Err(StateError::LiquidityIsZero.into());
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x96, liquidity, amount_out, false)
    }
}
