use super::*;
use crate::cfg::{COMBINATIONS_MAX_N_F64, COMBINATIONS_MAX_N_U32, COMBINATIONS_MAX_N_U64, DCOMBINATIONS_REL_EPS};

/// Row-by-row Pascal table in u64, exact through n = 67.
fn pascal_rows(max_n: usize) -> Vec<Vec<u64>> {
    let mut rows: Vec<Vec<u64>> = vec![vec![1]];
    for n in 1..=max_n {
        let prev = &rows[n - 1];
        let mut row = vec![1u64; n + 1];
        for k in 1..n {
            row[k] = prev[k - 1] + prev[k];
        }
        rows.push(row);
    }
    rows
}

#[test]
fn known_values() {
    assert_eq!(combinations(10, 3), 120);
    assert_eq!(combinations(30, 15), 155_117_520);
    assert_eq!(combinations(52, 5), 2_598_960);
    assert_eq!(combinations64(40, 20), 137_846_528_820);
    assert_eq!(combinations64(61, 30), 232_714_176_627_630_544);
    assert_eq!(rcombinations64(61, 30), 232_714_176_627_630_544);
    assert_eq!(dcombinations(1000, 2), 499_500.0);
}

#[test]
fn base_cases() {
    for n in 0..=COMBINATIONS_MAX_N_U64 {
        assert_eq!(combinations64(n, 0), 1);
        assert_eq!(combinations64(n, n), 1);
        assert_eq!(rcombinations64(n, 0), 1);
        assert_eq!(rcombinations64(n, n), 1);
        assert_eq!(dcombinations(n, 0), 1.0);
        assert_eq!(dcombinations(n, n), 1.0);
    }
    assert_eq!(combinations(0, 0), 1);
    assert_eq!(rcombinations(0, 0), 1);
    assert_eq!(comb_pascal(0, 0), 1);
    assert_eq!(comb_pascal(1, 1), 1);
}

#[test]
fn narrow_variants_agree_with_table() {
    let rows = pascal_rows(usize::from(COMBINATIONS_MAX_N_U32));
    for n in 0..=COMBINATIONS_MAX_N_U32 {
        for k in 0..=n {
            let want = rows[usize::from(n)][usize::from(k)];
            assert_eq!(u64::from(combinations(n, k)), want, "C({n},{k})");
            assert_eq!(u64::from(rcombinations(n, k)), want, "rC({n},{k})");
        }
    }
}

#[test]
fn wide_variants_agree_with_table() {
    let rows = pascal_rows(usize::from(COMBINATIONS_MAX_N_U64));
    for n in 0..=COMBINATIONS_MAX_N_U64 {
        for k in 0..=n {
            let want = rows[usize::from(n)][usize::from(k)];
            assert_eq!(combinations64(n, k), want, "C64({n},{k})");
            assert_eq!(rcombinations64(n, k), want, "rC64({n},{k})");
        }
    }
}

#[test]
fn pascal_oracle_agrees_up_to_twenty() {
    for n in 0..=20u16 {
        for k in 0..=n {
            assert_eq!(comb_pascal(n, k), combinations(n, k), "pascal({n},{k})");
        }
    }
}

#[test]
fn pascal_oracle_spot_checks_at_thirty() {
    // Cheap corners only; the middle of row 30 costs ~1.5e8 calls.
    for k in [0u16, 1, 2, 3, 4, 26, 27, 28, 29, 30] {
        assert_eq!(comb_pascal(30, k), combinations(30, k), "pascal(30,{k})");
    }
    assert_eq!(comb_pascal(30, 3), 4060);
}

#[test]
#[ignore = "exponential reference oracle; run with --ignored"]
fn pascal_oracle_agrees_up_to_thirty() {
    for n in 21..=COMBINATIONS_MAX_N_U32 {
        for k in 0..=n {
            assert_eq!(comb_pascal(n, k), combinations(n, k), "pascal({n},{k})");
        }
    }
}

#[test]
fn float_tier_tracks_wide_tier() {
    for n in 0..=COMBINATIONS_MAX_N_U64 {
        for k in 0..=n {
            let exact = combinations64(n, k) as f64;
            let approx = dcombinations(n, k);
            let rel = ((approx - exact) / exact).abs();
            assert!(rel <= DCOMBINATIONS_REL_EPS, "dC({n},{k}) rel={rel}");
        }
    }
}

#[test]
fn float_tier_domain_edge() {
    let n = COMBINATIONS_MAX_N_F64;
    for k in 0..=n {
        assert!(dcombinations(n, k).is_finite(), "dC({n},{k})");
    }
    assert!(dcombinations(n + 1, (n + 1) / 2).is_infinite());
}

#[test]
fn narrow_tier_wraps_past_thirty() {
    // 16·C(31,15) exceeds u32 before the final division.
    assert_ne!(u64::from(combinations(31, 15)), combinations64(31, 15));
    assert_eq!(u64::from(combinations(31, 3)), combinations64(31, 3));
}

#[test]
fn k_greater_than_n_is_zero() {
    assert_eq!(combinations(3, 4), 0);
    assert_eq!(combinations64(0, 1), 0);
    assert_eq!(dcombinations(10, 11), 0.0);
    assert_eq!(rcombinations(5, 9), 0);
    assert_eq!(rcombinations64(5, 9), 0);
    assert_eq!(comb_pascal(2, 3), 0);
}
