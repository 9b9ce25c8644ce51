//! Documented domains and tolerances.
//!
//! Policy
//! - Limits are the largest argument for which a tier returns the true value
//!   (exact tiers) or a finite approximation (float tiers).
//! - Past a limit the unchecked functions still return something; see the tier docs.

/// Largest n with n! exact in `u32`.
pub const FACTORIAL_MAX_N_U32: u8 = 12;
/// Largest n with n! exact in `u64`.
pub const FACTORIAL_MAX_N_U64: u8 = 20;
/// Largest n with n! finite in `f64`.
pub const FACTORIAL_MAX_N_F64: u8 = 170;
/// Largest n with `stirling(n)` finite in `f64` (n^n overflows first).
pub const STIRLING_MAX_N_F64: u8 = 143;
/// Same bound for a single-precision port; kept for reference.
pub const STIRLING_MAX_N_F32: u8 = 26;

/// Largest n for which the `u32` combinations are exact for every k.
pub const COMBINATIONS_MAX_N_U32: u16 = 30;
/// Largest n for which the `u64` combinations are exact for every k.
pub const COMBINATIONS_MAX_N_U64: u16 = 61;
/// Largest n for which `dcombinations` stays finite for every k.
pub const COMBINATIONS_MAX_N_F64: u16 = 1020;
/// Same bound for a single-precision port; kept for reference.
pub const COMBINATIONS_MAX_N_F32: u16 = 125;

/// Relative tolerance between `dcombinations` and the exact `u64` tier.
pub const DCOMBINATIONS_REL_EPS: f64 = 1e-9;
