//! Algebraic properties across variants (proptest).
//!
//! Strategies draw (n, k) with k ≤ n inside each tier's exact domain, so every
//! assertion here is an identity, not a tolerance.

use proptest::prelude::*;

use crate::cfg::{COMBINATIONS_MAX_N_U32, COMBINATIONS_MAX_N_U64, FACTORIAL_MAX_N_U32};
use crate::{
    combinations, combinations64, dcombinations, factorial, next_permutation, permutations,
    rcombinations, rcombinations64,
};

fn n_k(max_n: u16) -> impl Strategy<Value = (u16, u16)> {
    (0..=max_n).prop_flat_map(|n| (Just(n), 0..=n))
}

proptest! {
    #[test]
    fn symmetry((n, k) in n_k(COMBINATIONS_MAX_N_U64)) {
        prop_assert_eq!(combinations64(n, k), combinations64(n, n - k));
        prop_assert_eq!(rcombinations64(n, k), rcombinations64(n, n - k));
        prop_assert_eq!(dcombinations(n, k), dcombinations(n, n - k));
    }

    #[test]
    fn pascal_identity((n, k) in n_k(COMBINATIONS_MAX_N_U64)) {
        prop_assume!(k >= 1 && k < n);
        prop_assert_eq!(
            combinations64(n, k),
            combinations64(n - 1, k - 1) + combinations64(n - 1, k)
        );
    }

    #[test]
    fn narrow_matches_wide((n, k) in n_k(COMBINATIONS_MAX_N_U32)) {
        prop_assert_eq!(u64::from(combinations(n, k)), combinations64(n, k));
        prop_assert_eq!(u64::from(rcombinations(n, k)), combinations64(n, k));
    }

    #[test]
    fn choose_times_arrange_is_permute((n, k) in n_k(u16::from(FACTORIAL_MAX_N_U32))) {
        // P(n,k) = C(n,k)·k!
        let (n8, k8) = (n as u8, k as u8);
        prop_assert_eq!(permutations(n8, k8), combinations(n, k) * factorial(k8));
    }

    #[test]
    fn next_permutation_is_strictly_increasing(mut v in proptest::collection::vec(0u8..4, 0..7)) {
        let before = v.clone();
        if next_permutation(&mut v) {
            prop_assert!(before < v);
            let mut a = before.clone();
            let mut b = v.clone();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
        } else {
            prop_assert_eq!(&before, &v);
            prop_assert!(before.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
