//! Uniswap V3–style single swap step math in pure Rust.
//!
//! This crate exposes:
//! - Full‑precision `mul_div` primitives (`math::full_math`) that keep a
//!   512‑bit intermediate product.
//! - Q64.96 sqrt‑price math (`math::sqrt_price_math`) converting between
//!   token amounts and price movement, with explicit [`Rounding`].
//! - `compute_swap_step` (`math::swap_math`), the computation an outer pool
//!   loop calls once per tick range.
//!
//! Everything is a pure function of its arguments; there is no pool state,
//! no tick search and no I/O in here.
//!
//! # Examples
//!
//! ## Pure math
//! ```
//! use clmm_step_math::{math::full_math::mul_div, Q96, RESOLUTION, U256};
//!
//! let half = mul_div(Q96, U256::from(1u8), U256::from(2u8)).unwrap();
//! assert_eq!(half, U256::ONE << 95usize);
//! assert_eq!(RESOLUTION, 96);
//! ```
//!
//! ## Computing one swap step
//! ```
//! use clmm_step_math::{compute_swap_step, AmountRemaining, FeePips, Q96, U256};
//!
//! // Price 1.0 moving up towards price 4.0, selling 1000 units of token1.
//! let step = compute_swap_step(
//!     Q96,
//!     Q96 << 1usize,
//!     1_000_000_000_000_000_000u128,
//!     AmountRemaining::ExactInput(U256::from(1000u16)),
//!     FeePips::MEDIUM,
//! )
//! .unwrap();
//!
//! assert!(step.sqrt_ratio_next_x96 > Q96);
//! assert_eq!(step.amount_in + step.fee_amount, U256::from(1000u16));
//! ```

pub use alloy_primitives::{I256, U256};

pub mod error;
pub mod math;

pub use error::{Error, MathError, StateError};
pub use math::rounding::Rounding;
pub use math::swap_math::{
    compute_swap_step, compute_swap_step_signed, AmountRemaining, FeePips, SwapStep,
};

/// `2^160 - 1`, the largest value a sqrt price may take.
pub const U160_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, 4294967295, 0]);

pub const RESOLUTION: usize = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
