//! Binomial coefficients C(n,k).
//!
//! Variants
//! - Iterative (`combinations`, `combinations64`, `dcombinations`): after the
//!   symmetry reduction k ← max(k, n−k), start from rv = n and for i = n−1 down to
//!   k+1 do `rv = rv·i / p` with p = 2, 3, …. The step dividing by p leaves
//!   rv = C(n, p), so the integer division is exact and the largest intermediate
//!   is p·C(n, p). Computing the numerator first would overflow long before.
//! - Ratio-recursive (`rcombinations`, `rcombinations64`): C(n,k) = n·C(n−1,k−1)/k
//!   with k ← min(k, n−k). Depth is min(k, n−k); mind the stack on small targets.
//! - Pascal (`comb_pascal`): C(n,k) = C(n−1,k−1) + C(n−1,k) without memoization.
//!   Exponential time; a reference oracle for tests, not a production path.
//!
//! Domains (see `cfg`)
//! - `u32` variants: exact for n ≤ 30 and every k.
//! - `u64` variants: exact for n ≤ 61 and every k.
//! - `dcombinations`: finite for n ≤ 1020, relative error ~1e-14 on exact inputs.
//!
//! Every variant returns 0 for k > n.

/// C(n,k) in `u32`, wrapping past its domain.
pub fn combinations(n: u16, k: u16) -> u32 {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }
    let k = k.max(n - k);
    let mut rv = u32::from(n);
    let mut p = 2u32;
    for i in (u32::from(k) + 1..u32::from(n)).rev() {
        rv = rv.wrapping_mul(i) / p;
        p += 1;
    }
    rv
}

/// C(n,k) in `u64`, wrapping past its domain.
pub fn combinations64(n: u16, k: u16) -> u64 {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }
    let k = k.max(n - k);
    let mut rv = u64::from(n);
    let mut p = 2u64;
    for i in (u64::from(k) + 1..u64::from(n)).rev() {
        rv = rv.wrapping_mul(i) / p;
        p += 1;
    }
    rv
}

/// C(n,k) in `f64`. Approximate once the value exceeds 2^53; `+inf` past n ≈ 1020.
pub fn dcombinations(n: u16, k: u16) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }
    let k = k.max(n - k);
    let mut rv = f64::from(n);
    let mut p = 2.0f64;
    for i in (k + 1..n).rev() {
        rv = (rv * f64::from(i)) / p;
        p += 1.0;
    }
    rv
}

/// C(n,k) in `u32` via C(n,k) = n·C(n−1,k−1)/k. Recursion depth min(k, n−k).
pub fn rcombinations(n: u16, k: u16) -> u32 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    if k == 0 {
        return 1;
    }
    u32::from(n).wrapping_mul(rcombinations(n - 1, k - 1)) / u32::from(k)
}

/// C(n,k) in `u64` via C(n,k) = n·C(n−1,k−1)/k. Recursion depth min(k, n−k).
pub fn rcombinations64(n: u16, k: u16) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    if k == 0 {
        return 1;
    }
    u64::from(n).wrapping_mul(rcombinations64(n - 1, k - 1)) / u64::from(k)
}

/// C(n,k) in `u32` by summing Pascal's triangle. Makes on the order of C(n,k) calls;
/// keep it to cross-checks.
pub fn comb_pascal(n: u16, k: u16) -> u32 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    if k == 0 || n < 2 {
        return 1;
    }
    comb_pascal(n - 1, k - 1).wrapping_add(comb_pascal(n - 1, k))
}

#[cfg(test)]
mod tests;
