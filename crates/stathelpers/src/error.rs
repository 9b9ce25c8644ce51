use std::fmt;

/// Error type shared by the checked counting functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombinError {
    /// `k > n`: no way to pick more items than exist.
    InvalidArgument { n: u64, k: u64 },
    /// Exact result does not fit the requested width.
    Overflow { op: &'static str, n: u64, k: u64 },
    /// Float result would be non-finite; `max` is the largest usable n.
    OutOfDomain { op: &'static str, n: u64, max: u64 },
}

impl CombinError {
    pub(crate) fn invalid(n: u64, k: u64) -> Self {
        Self::InvalidArgument { n, k }
    }

    pub(crate) fn overflow(op: &'static str, n: u64, k: u64) -> Self {
        Self::Overflow { op, n, k }
    }
}

impl fmt::Display for CombinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { n, k } => {
                write!(f, "invalid argument: k={k} exceeds n={n}")
            }
            Self::Overflow { op, n, k } => write!(f, "{op}({n}, {k}) overflows u64"),
            Self::OutOfDomain { op, n, max } => {
                write!(f, "{op}({n}) is outside the finite domain n <= {max}")
            }
        }
    }
}

impl std::error::Error for CombinError {}
