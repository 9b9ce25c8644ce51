//! Factorials n! in three tiers plus Stirling's approximation.
//!
//! Domains (see `cfg`)
//! - `factorial`: exact for n ≤ 12, wraps beyond.
//! - `factorial64`: exact for n ≤ 20, wraps beyond.
//! - `dfactorial`: finite for n ≤ 170, `+inf` beyond.
//! - `stirling`: finite for n ≤ 143.
//!
//! Stirling error
//! - n!/stirling(n) = exp(1/(12n) − 1/(360n³) + …), so for 1 ≤ n ≤ 143
//!   `0 < (n! − stirling(n)) / n! < 1/(12n)`: under 1% from n = 10, shrinking with n.

use std::f64::consts::TAU;

/// n! in `u32`, wrapping past 12!.
pub fn factorial(n: u8) -> u32 {
    (2..=u32::from(n)).fold(1u32, |f, i| f.wrapping_mul(i))
}

/// n! in `u64`, wrapping past 20!.
pub fn factorial64(n: u8) -> u64 {
    (2..=u64::from(n)).fold(1u64, |f, i| f.wrapping_mul(i))
}

/// n! in `f64`; `+inf` past 170!.
pub fn dfactorial(n: u8) -> f64 {
    (2..=n).fold(1.0f64, |f, i| f * f64::from(i))
}

/// Stirling's approximation exp(−n)·nⁿ·√(2πn). Always slightly below n! for n ≥ 1;
/// `stirling(0) == 0`.
pub fn stirling(n: u8) -> f64 {
    let x = f64::from(n);
    (-x).exp() * x.powi(i32::from(n)) * (TAU * x).sqrt()
}

/// Relative error of `stirling(n)` against `dfactorial(n)`.
pub fn stirling_rel_error(n: u8) -> f64 {
    let exact = dfactorial(n);
    (exact - stirling(n)) / exact
}
