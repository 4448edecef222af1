#![allow(dead_code)]

use clmm_step_math::math::full_math::{mul_div, mul_div_rounding_up};
use clmm_step_math::math::sqrt_price_math::{
    get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use clmm_step_math::{compute_swap_step, AmountRemaining, FeePips, Rounding, Q96, U256};
use criterion::{black_box, Criterion};
use std::str::FromStr;

const E17: u128 = 100_000_000_000_000_000;
const E18: u128 = 1_000_000_000_000_000_000;

fn price_1_21() -> U256 {
    U256::from_str("87150978765690771352898345369").unwrap()
}

pub fn bench_full_math(c: &mut Criterion) {
    let q128 = U256::from_limbs([0, 0, 1, 0]);
    let wide_b = U256::from(35u8) * q128;
    let wide_d = U256::from(8u8) * q128;

    c.bench_function("mul_div/narrow", |b| {
        b.iter(|| mul_div(black_box(Q96), black_box(U256::from(E18)), black_box(U256::from(E17))))
    });
    c.bench_function("mul_div/phantom_overflow", |b| {
        b.iter(|| mul_div(black_box(q128), black_box(wide_b), black_box(wide_d)))
    });
    c.bench_function("mul_div_rounding_up/phantom_overflow", |b| {
        b.iter(|| mul_div_rounding_up(black_box(q128), black_box(wide_b), black_box(wide_d)))
    });
}

pub fn bench_sqrt_price_math(c: &mut Criterion) {
    let upper = price_1_21();

    c.bench_function("get_amount_0_delta", |b| {
        b.iter(|| get_amount_0_delta(black_box(Q96), black_box(upper), black_box(E18), Rounding::Up))
    });
    c.bench_function("get_amount_1_delta", |b| {
        b.iter(|| get_amount_1_delta(black_box(Q96), black_box(upper), black_box(E18), Rounding::Down))
    });
    c.bench_function("get_next_sqrt_price_from_input", |b| {
        b.iter(|| {
            get_next_sqrt_price_from_input(black_box(Q96), black_box(E18), black_box(U256::from(E17)), true)
        })
    });
    c.bench_function("get_next_sqrt_price_from_output", |b| {
        b.iter(|| {
            get_next_sqrt_price_from_output(black_box(Q96), black_box(E18), black_box(U256::from(E17)), false)
        })
    });
}

pub fn bench_swap_math(c: &mut Criterion) {
    let target = price_1_21();

    c.bench_function("compute_swap_step/exact_input", |b| {
        b.iter(|| {
            compute_swap_step(
                black_box(Q96),
                black_box(target),
                black_box(2 * E18),
                AmountRemaining::ExactInput(U256::from(E17)),
                FeePips::MEDIUM,
            )
        })
    });
    c.bench_function("compute_swap_step/exact_output", |b| {
        b.iter(|| {
            compute_swap_step(
                black_box(Q96),
                black_box(target),
                black_box(2 * E18),
                AmountRemaining::ExactOutput(U256::from(E17)),
                FeePips::MEDIUM,
            )
        })
    });
}
