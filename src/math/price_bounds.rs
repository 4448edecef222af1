//! Protocol-wide sqrt-price bounds.
//!
//! The step math itself accepts any positive 160-bit sqrt price; the pool
//! that drives it is expected to keep prices inside these bounds.

use crate::error::StateError;
use alloy_primitives::U256;

/// Sqrt price at tick `-887272`, the smallest usable price.
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
/// Sqrt price at tick `887272`; valid prices are strictly below it.
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// Returns `StateError::SqrtPriceOutOfBounds` unless
/// `MIN_SQRT_RATIO <= sqrt_price_x96 < MAX_SQRT_RATIO`.
pub fn check_sqrt_price(sqrt_price_x96: U256) -> Result<(), StateError> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(StateError::SqrtPriceOutOfBounds);
    }
    Ok(())
}
