/// Rounding direction for every division in the price and amount math.
///
/// Amounts paid out by the pool are computed with [`Rounding::Down`],
/// amounts owed to the pool with [`Rounding::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}
