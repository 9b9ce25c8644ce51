//! Overflow-checked counting in `u64`.
//!
//! Same algorithms as the unchecked tiers, but arguments are `u64`, k > n is an
//! error, and any result that would not fit is reported instead of wrapped.

use crate::cfg::FACTORIAL_MAX_N_F64;
use crate::error::CombinError;
use crate::factorial::dfactorial;

/// `InvalidArgument` unless k ≤ n.
pub fn ensure_k_le_n(n: u64, k: u64) -> Result<(), CombinError> {
    if k > n {
        return Err(CombinError::invalid(n, k));
    }
    Ok(())
}

/// P(n,k) in `u64`, or an error if k > n or the product overflows.
pub fn try_permutations64(n: u64, k: u64) -> Result<u64, CombinError> {
    ensure_k_le_n(n, k)?;
    (n - k..n)
        .rev()
        .try_fold(1u64, |rv, i| rv.checked_mul(i + 1))
        .ok_or_else(|| CombinError::overflow("permutations", n, k))
}

/// n! in `u64`, or `Overflow` for n > 20.
pub fn try_factorial64(n: u64) -> Result<u64, CombinError> {
    (2..=n)
        .try_fold(1u64, |f, i| f.checked_mul(i))
        .ok_or_else(|| CombinError::overflow("factorial", n, n))
}

/// n! in `f64`, or `OutOfDomain` for n > 170.
pub fn try_dfactorial(n: u64) -> Result<f64, CombinError> {
    let max = u64::from(FACTORIAL_MAX_N_F64);
    match u8::try_from(n) {
        Ok(small) if n <= max => Ok(dfactorial(small)),
        _ => Err(CombinError::OutOfDomain {
            op: "dfactorial",
            n,
            max,
        }),
    }
}

/// C(n,k) in `u64`, or an error if k > n or the coefficient exceeds `u64::MAX`.
///
/// Runs the interleaved multiply/divide in `u128`. The running value C(n,p) only
/// grows, so it is checked against `u64::MAX` after every step; while it fits, the
/// next product p·C(n,p) cannot overflow `u128`.
pub fn try_combinations64(n: u64, k: u64) -> Result<u64, CombinError> {
    ensure_k_le_n(n, k)?;
    if k == 0 || k == n {
        return Ok(1);
    }
    let hi = k.max(n - k);
    let overflow = || CombinError::overflow("combinations", n, k);
    let mut rv = u128::from(n);
    let mut p = 2u128;
    for i in (hi + 1..n).rev() {
        rv = rv * u128::from(i) / p;
        if rv > u128::from(u64::MAX) {
            return Err(overflow());
        }
        p += 1;
    }
    u64::try_from(rv).map_err(|_| overflow())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{combinations64, factorial64, permutations64};

    #[test]
    fn rejects_k_above_n() {
        assert_eq!(try_permutations64(3, 4), Err(CombinError::invalid(3, 4)));
        assert_eq!(try_combinations64(0, 1), Err(CombinError::invalid(0, 1)));
        assert_eq!(ensure_k_le_n(4, 4), Ok(()));
    }

    #[test]
    fn agrees_with_unchecked_inside_domain() {
        for n in 0..=20u8 {
            assert_eq!(try_factorial64(u64::from(n)), Ok(factorial64(n)));
            for k in 0..=n {
                assert_eq!(
                    try_permutations64(u64::from(n), u64::from(k)),
                    Ok(permutations64(n, k))
                );
            }
        }
        for n in 0..=61u16 {
            for k in 0..=n {
                assert_eq!(
                    try_combinations64(u64::from(n), u64::from(k)),
                    Ok(combinations64(n, k))
                );
            }
        }
    }

    #[test]
    fn reaches_past_the_unchecked_domain() {
        // C(67,33) is the largest central coefficient that fits in u64.
        assert_eq!(try_combinations64(67, 33), Ok(14_226_520_737_620_288_370));
        assert_eq!(try_combinations64(1000, 2), Ok(499_500));
        assert_eq!(try_permutations64(1_000_000, 2), Ok(999_999_000_000));
    }

    #[test]
    fn reports_overflow() {
        assert!(matches!(
            try_factorial64(21),
            Err(CombinError::Overflow { op: "factorial", .. })
        ));
        assert!(matches!(
            try_permutations64(30, 20),
            Err(CombinError::Overflow { .. })
        ));
        assert!(matches!(
            try_combinations64(68, 34),
            Err(CombinError::Overflow { .. })
        ));
    }

    #[test]
    fn float_factorial_domain() {
        assert!(try_dfactorial(170).unwrap().is_finite());
        assert_eq!(
            try_dfactorial(171),
            Err(CombinError::OutOfDomain {
                op: "dfactorial",
                n: 171,
                max: 170
            })
        );
        assert!(try_dfactorial(1 << 40).is_err());
    }
}
