//! Counting helpers for constrained targets.
//!
//! Purpose
//! - Permutation counts P(n,k), factorials n!, and binomial coefficients C(n,k),
//!   each in fixed numeric tiers: exact `u32`, exact `u64`, approximate `f64`.
//! - An in-place lexicographic `next_permutation` over any `&mut [T]` with `T: Ord`.
//!
//! Tiers
//! - The unchecked functions never fail: integer tiers wrap past their documented
//!   domain, float tiers lose precision and eventually reach `+inf`.
//! - Callers that need to know an answer is exact use `checked::*`.
//! - Documented domains live in `cfg`; `Tier` dispatches one operation across widths.
//!
//! k > n
//! - Unchecked P(n,k) and C(n,k) return 0 (no arrangements exist); `checked::*`
//!   returns `CombinError::InvalidArgument`.

pub mod cfg;
pub mod checked;
pub mod combinations;
mod error;
pub mod factorial;
pub mod next_perm;
pub mod permutations;
pub mod tier;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use combinations::{
    comb_pascal, combinations, combinations64, dcombinations, rcombinations, rcombinations64,
};
pub use error::CombinError;
pub use factorial::{dfactorial, factorial, factorial64, stirling};
pub use next_perm::{next_permutation, LexPermutations};
pub use permutations::{dpermutations, permutations, permutations64};
pub use tier::{Count, Tier};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::checked::{
        ensure_k_le_n, try_combinations64, try_dfactorial, try_factorial64, try_permutations64,
    };
    pub use crate::{
        comb_pascal, combinations, combinations64, dcombinations, dfactorial, dpermutations,
        factorial, factorial64, next_permutation, permutations, permutations64, rcombinations,
        rcombinations64, stirling, CombinError, Count, LexPermutations, Tier,
    };
}

#[cfg(test)]
mod tests_props;
