use crate::error::MathError;
use crate::math::rounding::Rounding;
use alloy_primitives::U256;

const U256_TWO: U256 = U256::from_limbs([2, 0, 0, 0]);
const U256_THREE: U256 = U256::from_limbs([3, 0, 0, 0]);

/// Full 512‑bit product of `a` and `b`, returned as `(low, high)` words.
///
/// The high word is recovered from `a * b mod (2^256 - 1)` via the
/// Chinese Remainder Theorem, so no wider integer type is needed.
#[inline]
fn full_mul(a: U256, b: U256) -> (U256, U256) {
    let low = a.wrapping_mul(b);
    let mm = a.mul_mod(b, U256::MAX);

    let (high, borrow) = mm.overflowing_sub(low);
    if borrow {
        (low, high.wrapping_sub(U256::ONE))
    } else {
        (low, high)
    }
}

/// Inverse of an odd `denominator` modulo `2^256`.
///
/// The seed `(3 * d) ^ 2` is correct to four bits and every Newton–Raphson
/// round doubles that, so six rounds reach 256 bits.
#[inline]
fn inverse_mod_2_256(denominator: U256) -> U256 {
    let mut inv = U256_THREE.wrapping_mul(denominator) ^ U256_TWO;
    for _ in 0..6 {
        inv = inv.wrapping_mul(U256_TWO.wrapping_sub(denominator.wrapping_mul(inv)));
    }
    inv
}

/// Divides the 512‑bit value `high:low` by `denominator`.
///
/// Requires `remainder == (high:low) mod denominator` and
/// `denominator > high`, so that the quotient fits in 256 bits.
fn div_512_exact(mut low: U256, mut high: U256, remainder: U256, denominator: U256) -> U256 {
    let (exact_low, borrow) = low.overflowing_sub(remainder);
    low = exact_low;
    if borrow {
        high = high.wrapping_sub(U256::ONE);
    }

    // largest power of two dividing the denominator
    let twos = denominator & denominator.wrapping_neg();
    let odd_denominator = denominator.wrapping_div(twos);
    low = low.wrapping_div(twos);

    // shift the high word into the low one: 2^256 / twos
    let flip = twos
        .wrapping_neg()
        .wrapping_div(twos)
        .wrapping_add(U256::ONE);
    low |= high.wrapping_mul(flip);

    // the division is exact, so multiplying by the inverse is the quotient
    low.wrapping_mul(inverse_mod_2_256(odd_denominator))
}

/// Computes `floor(a * b / denominator)` with full 512‑bit intermediate
/// precision, returning a `MathError` on overflow or division by zero.
///
/// This mirrors the Solidity `FullMath.mulDiv` behavior bit for bit and
/// underpins every price and amount calculation in the crate.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let (low, high) = full_mul(a, b);

    if high.is_zero() {
        return Ok(low.wrapping_div(denominator));
    }

    if denominator <= high {
        return Err(MathError::Overflow);
    }

    Ok(div_512_exact(
        low,
        high,
        a.mul_mod(b, denominator),
        denominator,
    ))
}

/// Like [`mul_div`], but rounds the result up when there is a
/// non‑zero remainder, returning an overflow error if the result
/// would exceed `U256::MAX`.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    let result = mul_div(a, b, denominator)?;

    if a.mul_mod(b, denominator).is_zero() {
        return Ok(result);
    }
    result.checked_add(U256::ONE).ok_or(MathError::Overflow)
}

/// [`mul_div`] or [`mul_div_rounding_up`], selected by `rounding`.
#[inline]
pub fn mul_div_with(
    a: U256,
    b: U256,
    denominator: U256,
    rounding: Rounding,
) -> Result<U256, MathError> {
    match rounding {
        Rounding::Up => mul_div_rounding_up(a, b, denominator),
        Rounding::Down => mul_div(a, b, denominator),
    }
}

/// Divides `a` by `b`, rounding the result up to the next integer
/// when there is a non‑zero remainder.
pub fn div_rounding_up(a: U256, b: U256) -> Result<U256, MathError> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = a.div_rem(b);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        // quotient < U256::MAX whenever b > 1 and there is a remainder
        Ok(quotient.wrapping_add(U256::ONE))
    }
}
