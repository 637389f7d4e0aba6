// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combinatorics helpers.

/// Returns the binomial coefficient for n choose k, 0 if k > n.
///
/// The coefficient is built one factor at a time, C(n, i + 1) = C(n, i) *
/// (n - i) / (i + 1), so that every intermediate value is itself a binomial
/// coefficient and the division is exact.
pub const fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }

    let k = if k > n - k { n - k } else { k };
    let mut coeff = 1;
    let mut i = 0;
    while i < k {
        coeff = coeff * (n - i) / (i + 1);
        i += 1;
    }

    coeff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial() {
        // For n < k = 0
        assert_eq!(binomial(2, 3), 0);
        assert_eq!(binomial(0, 1), 0);
        assert_eq!(binomial(0, 0), 1);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(52, k as u64), v));

        [1, 51, 1275, 20825, 249900, 2349060, 18009460, 115775100]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(51, k as u64), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(5, k as u64), v));

        // Street totals.
        assert_eq!(binomial(50, 3), 19_600);
        assert_eq!(binomial(47, 1), 47);
        assert_eq!(binomial(46, 1), 46);
        assert_eq!(binomial(45, 0), 1);
    }

    #[test]
    fn binomial_symmetry() {
        for n in 0..=52 {
            for k in 0..=n {
                assert_eq!(binomial(n, k), binomial(n, n - k), "n={n} k={k}");
            }
        }

        // Largest coefficient for a deck does not overflow.
        assert_eq!(binomial(52, 26), 495_918_532_948_104);
    }
}
