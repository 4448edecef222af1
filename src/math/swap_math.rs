use crate::error::{Error, MathError, StateError};
use crate::math::full_math::{mul_div, mul_div_rounding_up};
use crate::math::rounding::Rounding;
use crate::math::sqrt_price_math::{
    get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use alloy_primitives::{I256, U256};
use tracing::{debug, trace};

/// Fee denominator: fees are expressed in millionths (pips).
pub const FEE_DENOMINATOR: u32 = 1_000_000;

/// Swap fee in hundredths of a basis point, always below [`FEE_DENOMINATOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct FeePips(u32);

impl FeePips {
    /// 0.01%
    pub const LOWEST: Self = Self(100);
    /// 0.05%
    pub const LOW: Self = Self(500);
    /// 0.3%
    pub const MEDIUM: Self = Self(3000);
    /// 1%
    pub const HIGH: Self = Self(10000);

    /// Validates a raw fee rate, rejecting anything that would leave
    /// `1e6 - fee` at zero or below.
    pub const fn new(pips: u32) -> Result<Self, StateError> {
        if pips >= FEE_DENOMINATOR {
            return Err(StateError::InvalidFee(pips));
        }
        Ok(Self(pips))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// `1e6 - fee`, never zero.
    #[inline]
    pub const fn complement(self) -> u32 {
        FEE_DENOMINATOR - self.0
    }
}

impl TryFrom<u32> for FeePips {
    type Error = StateError;

    fn try_from(pips: u32) -> Result<Self, Self::Error> {
        Self::new(pips)
    }
}

impl From<FeePips> for u32 {
    fn from(fee: FeePips) -> Self {
        fee.0
    }
}

/// What is left of a swap: either input still to spend or output still
/// owed to the trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmountRemaining {
    /// Exact input: the amount (fees included) the trader still pays in.
    ExactInput(U256),
    /// Exact output: the amount the trader still expects to receive.
    ExactOutput(U256),
}

impl AmountRemaining {
    /// Decodes the Solidity convention where a non‑negative amount is exact
    /// input and a negative one is exact output.
    pub fn from_signed(amount_remaining: I256) -> Self {
        if amount_remaining.is_negative() {
            Self::ExactOutput(amount_remaining.unsigned_abs())
        } else {
            Self::ExactInput(amount_remaining.into_raw())
        }
    }

    /// Inverse of [`from_signed`](Self::from_signed). `ExactOutput(0)`
    /// encodes as `0`, which decodes back as `ExactInput(0)`.
    pub fn to_signed(self) -> Result<I256, MathError> {
        match self {
            Self::ExactInput(amount) => {
                if amount > I256::MAX.into_raw() {
                    return Err(MathError::Overflow);
                }
                Ok(I256::from_raw(amount))
            }
            Self::ExactOutput(amount) => {
                if amount > I256::MIN.unsigned_abs() {
                    return Err(MathError::Overflow);
                }
                Ok(I256::from_raw(amount.wrapping_neg()))
            }
        }
    }

    #[inline]
    pub const fn is_exact_input(&self) -> bool {
        matches!(self, Self::ExactInput(_))
    }

    /// Magnitude regardless of mode.
    #[inline]
    pub const fn amount(&self) -> U256 {
        match self {
            Self::ExactInput(amount) | Self::ExactOutput(amount) => *amount,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount().is_zero()
    }

    /// What remains once `step` has been applied, the same way a pool loop
    /// decrements its `amountSpecifiedRemaining`.
    pub fn after_step(self, step: &SwapStep) -> Result<Self, Error> {
        match self {
            Self::ExactInput(amount) => {
                let consumed = step.amount_in_with_fee()?;
                let left = amount.checked_sub(consumed).ok_or(MathError::Underflow)?;
                Ok(Self::ExactInput(left))
            }
            Self::ExactOutput(amount) => {
                let left = amount
                    .checked_sub(step.amount_out)
                    .ok_or(MathError::Underflow)?;
                Ok(Self::ExactOutput(left))
            }
        }
    }
}

/// Outcome of a single swap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapStep {
    /// The price after swapping the amount in/out, not to exceed the target.
    pub sqrt_ratio_next_x96: U256,
    /// Amount of the input token paid in, fee excluded.
    pub amount_in: U256,
    /// Amount of the output token paid out.
    pub amount_out: U256,
    /// Fee paid in the input token.
    pub fee_amount: U256,
}

impl SwapStep {
    /// Total input charged to the trader, `amount_in + fee_amount`.
    pub fn amount_in_with_fee(&self) -> Result<U256, MathError> {
        self.amount_in
            .checked_add(self.fee_amount)
            .ok_or(MathError::Overflow)
    }

    /// Whether the step ran the whole range up to `sqrt_ratio_target_x96`.
    #[inline]
    pub fn reached_target(&self, sqrt_ratio_target_x96: U256) -> bool {
        self.sqrt_ratio_next_x96 == sqrt_ratio_target_x96
    }
}

// Input owed for moving between two prices: token0 when the price falls.
#[inline]
fn amount_in_between(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if zero_for_one {
        get_amount_0_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, liquidity, Rounding::Up)
    } else {
        get_amount_1_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, liquidity, Rounding::Up)
    }
}

// Output paid for moving between two prices: token1 when the price falls.
#[inline]
fn amount_out_between(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if zero_for_one {
        get_amount_1_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, liquidity, Rounding::Down)
    } else {
        get_amount_0_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, liquidity, Rounding::Down)
    }
}

/// Computes the result of swapping some amount in, or out, given the
/// parameters of the swap.
///
/// The price moves from `sqrt_ratio_current_x96` towards
/// `sqrt_ratio_target_x96` and never past it; the direction is implied by
/// the two prices (`current >= target` means token0 in, price down).
///
/// For exact input the fee is taken first. If what is left is not enough
/// to reach the target the whole amount is consumed and whatever the
/// recomputed `amount_in` leaves over becomes the fee. Otherwise, and for
/// exact output, the fee is `ceil(amount_in * fee / (1e6 - fee))`.
///
/// Inputs are always rounded up and outputs down, so the pool never pays
/// out more than it is paid.
pub fn compute_swap_step(
    sqrt_ratio_current_x96: U256,
    sqrt_ratio_target_x96: U256,
    liquidity: u128,
    amount_remaining: AmountRemaining,
    fee_pips: FeePips,
) -> Result<SwapStep, Error> {
    let zero_for_one = sqrt_ratio_current_x96 >= sqrt_ratio_target_x96;
    let exact_input = amount_remaining.is_exact_input();
    let fee_denominator = U256::from(FEE_DENOMINATOR);
    let fee_complement = U256::from(fee_pips.complement());

    // amount needed to reach the target (exact in) or available up to it (exact out)
    let (sqrt_ratio_next_x96, amount_to_target) = match amount_remaining {
        AmountRemaining::ExactInput(amount) => {
            let amount_remaining_less_fee = mul_div(amount, fee_complement, fee_denominator)?;
            let amount_in = amount_in_between(
                sqrt_ratio_target_x96,
                sqrt_ratio_current_x96,
                liquidity,
                zero_for_one,
            )?;
            let next = if amount_remaining_less_fee >= amount_in {
                sqrt_ratio_target_x96
            } else {
                get_next_sqrt_price_from_input(
                    sqrt_ratio_current_x96,
                    liquidity,
                    amount_remaining_less_fee,
                    zero_for_one,
                )?
            };
            (next, amount_in)
        }
        AmountRemaining::ExactOutput(amount) => {
            let amount_out = amount_out_between(
                sqrt_ratio_target_x96,
                sqrt_ratio_current_x96,
                liquidity,
                zero_for_one,
            )?;
            let next = if amount >= amount_out {
                sqrt_ratio_target_x96
            } else {
                get_next_sqrt_price_from_output(
                    sqrt_ratio_current_x96,
                    liquidity,
                    amount,
                    zero_for_one,
                )?
            };
            (next, amount_out)
        }
    };

    let max = sqrt_ratio_target_x96 == sqrt_ratio_next_x96;

    let amount_in = if max && exact_input {
        amount_to_target
    } else {
        amount_in_between(
            sqrt_ratio_next_x96,
            sqrt_ratio_current_x96,
            liquidity,
            zero_for_one,
        )?
    };
    let mut amount_out = if max && !exact_input {
        amount_to_target
    } else {
        amount_out_between(
            sqrt_ratio_next_x96,
            sqrt_ratio_current_x96,
            liquidity,
            zero_for_one,
        )?
    };

    // cap the output amount to not exceed the remaining output amount
    if let AmountRemaining::ExactOutput(requested) = amount_remaining {
        if amount_out > requested {
            debug!(?amount_out, ?requested, "clamping exact output step");
            amount_out = requested;
        }
    }

    let fee_amount = match amount_remaining {
        AmountRemaining::ExactInput(amount) if !max => amount
            .checked_sub(amount_in)
            .ok_or(MathError::Underflow)?,
        _ => mul_div_rounding_up(amount_in, U256::from(fee_pips.get()), fee_complement)?,
    };

    let step = SwapStep {
        sqrt_ratio_next_x96,
        amount_in,
        amount_out,
        fee_amount,
    };
    trace!(
        ?sqrt_ratio_current_x96,
        ?sqrt_ratio_target_x96,
        ?liquidity,
        ?amount_remaining,
        fee_pips = fee_pips.get(),
        ?step,
        "swap step"
    );
    Ok(step)
}

/// [`compute_swap_step`] with the Solidity calling convention: a signed
/// `amount_remaining` (negative for exact output) and a raw `fee_pips`.
pub fn compute_swap_step_signed(
    sqrt_ratio_current_x96: U256,
    sqrt_ratio_target_x96: U256,
    liquidity: u128,
    amount_remaining: I256,
    fee_pips: u32,
) -> Result<SwapStep, Error> {
    compute_swap_step(
        sqrt_ratio_current_x96,
        sqrt_ratio_target_x96,
        liquidity,
        AmountRemaining::from_signed(amount_remaining),
        FeePips::new(fee_pips)?,
    )
}
