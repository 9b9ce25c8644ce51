//! Permutation counts P(n,k) = n·(n−1)·…·(n−k+1).
//!
//! All tiers multiply the falling factorial from n downwards, k terms.
//! No symmetry shortcut exists: P(n,k) ≠ P(n,n−k) in general.
//!
//! Domains
//! - `permutations`: result must fit in `u32`, otherwise it wraps.
//! - `permutations64`: result must fit in `u64`, otherwise it wraps.
//! - `dpermutations`: any arguments; large results approach or reach `+inf`.

/// Factors of P(n,k) from n down to n−k+1. Requires k ≤ n.
#[inline]
fn falling(n: u8, k: u8) -> impl Iterator<Item = u32> {
    (u32::from(n - k) + 1..=u32::from(n)).rev()
}

/// P(n,k) in `u32`, wrapping on overflow. Returns 0 when k > n.
pub fn permutations(n: u8, k: u8) -> u32 {
    if k > n {
        return 0;
    }
    falling(n, k).fold(1u32, |rv, i| rv.wrapping_mul(i))
}

/// P(n,k) in `u64`, wrapping on overflow. Returns 0 when k > n.
pub fn permutations64(n: u8, k: u8) -> u64 {
    if k > n {
        return 0;
    }
    falling(n, k).fold(1u64, |rv, i| rv.wrapping_mul(u64::from(i)))
}

/// P(n,k) in `f64`. Returns 0.0 when k > n.
pub fn dpermutations(n: u8, k: u8) -> f64 {
    if k > n {
        return 0.0;
    }
    falling(n, k).fold(1.0f64, |rv, i| rv * f64::from(i))
}
