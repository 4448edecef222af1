pub mod full_math;
pub mod price_bounds;
pub mod rounding;
pub mod sqrt_price_math;
pub mod swap_math;
