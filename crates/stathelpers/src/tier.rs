//! One operation, three widths.
//!
//! `Tier` picks the numeric width; `Count` carries the result. Dispatch goes
//! straight to the tiered functions, so wrap/saturate behavior is unchanged.

use std::fmt;

use crate::cfg::{
    COMBINATIONS_MAX_N_F64, COMBINATIONS_MAX_N_U32, COMBINATIONS_MAX_N_U64, FACTORIAL_MAX_N_F64,
    FACTORIAL_MAX_N_U32, FACTORIAL_MAX_N_U64,
};
use crate::{
    combinations, combinations64, dcombinations, dfactorial, dpermutations, factorial,
    factorial64, permutations, permutations64,
};

/// Numeric width/precision class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Exact `u32`.
    Narrow,
    /// Exact `u64`.
    Wide,
    /// Approximate `f64`.
    Approx,
}

/// A tiered result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Count {
    U32(u32),
    U64(u64),
    F64(f64),
}

impl Count {
    pub fn tier(self) -> Tier {
        match self {
            Count::U32(_) => Tier::Narrow,
            Count::U64(_) => Tier::Wide,
            Count::F64(_) => Tier::Approx,
        }
    }

    /// Lossy for `U64` above 2^53.
    pub fn as_f64(self) -> f64 {
        match self {
            Count::U32(v) => f64::from(v),
            Count::U64(v) => v as f64,
            Count::F64(v) => v,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::U32(v) => write!(f, "{v}"),
            Count::U64(v) => write!(f, "{v}"),
            Count::F64(v) => write!(f, "{v:e}"),
        }
    }
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Narrow, Tier::Wide, Tier::Approx];

    pub fn factorial(self, n: u8) -> Count {
        match self {
            Tier::Narrow => Count::U32(factorial(n)),
            Tier::Wide => Count::U64(factorial64(n)),
            Tier::Approx => Count::F64(dfactorial(n)),
        }
    }

    pub fn permutations(self, n: u8, k: u8) -> Count {
        match self {
            Tier::Narrow => Count::U32(permutations(n, k)),
            Tier::Wide => Count::U64(permutations64(n, k)),
            Tier::Approx => Count::F64(dpermutations(n, k)),
        }
    }

    /// Iterative C(n,k) in this tier.
    pub fn combinations(self, n: u16, k: u16) -> Count {
        match self {
            Tier::Narrow => Count::U32(combinations(n, k)),
            Tier::Wide => Count::U64(combinations64(n, k)),
            Tier::Approx => Count::F64(dcombinations(n, k)),
        }
    }

    /// Largest n with n! exact (integer tiers) or finite (float tier).
    pub fn factorial_limit(self) -> u8 {
        match self {
            Tier::Narrow => FACTORIAL_MAX_N_U32,
            Tier::Wide => FACTORIAL_MAX_N_U64,
            Tier::Approx => FACTORIAL_MAX_N_F64,
        }
    }

    /// Largest n with C(n,k) exact/finite for every k.
    pub fn combinations_limit(self) -> u16 {
        match self {
            Tier::Narrow => COMBINATIONS_MAX_N_U32,
            Tier::Wide => COMBINATIONS_MAX_N_U64,
            Tier::Approx => COMBINATIONS_MAX_N_F64,
        }
    }

    pub fn within_domain_factorial(self, n: u8) -> bool {
        n <= self.factorial_limit()
    }

    /// P(n,k) ≤ n!, so the factorial limit is sufficient; beyond it the exact
    /// result is compared against the tier's maximum.
    pub fn within_domain_permutations(self, n: u8, k: u8) -> bool {
        if k > n {
            return false;
        }
        if n <= self.factorial_limit() {
            return true;
        }
        match self {
            Tier::Narrow => crate::checked::try_permutations64(n.into(), k.into())
                .is_ok_and(|v| v <= u64::from(u32::MAX)),
            Tier::Wide => crate::checked::try_permutations64(n.into(), k.into()).is_ok(),
            Tier::Approx => dpermutations(n, k).is_finite(),
        }
    }

    pub fn within_domain_combinations(self, n: u16, k: u16) -> bool {
        k <= n && n <= self.combinations_limit()
    }
}
