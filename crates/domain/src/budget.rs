// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Apportionment of the study budget across courses.
//!
//! The total budget is split in whole half-hour units using a highest-averages
//! (Sainte-Laguë) method. When there is at least one unit per course, every
//! course is guaranteed one unit before the remainder is distributed.
//!
//! ## Invariants
//!
//! - The returned units always sum to `total_units`
//! - Raising one course's weight never lowers its share
//! - The result depends only on the inputs (ties break by weight, then index)

use std::cmp::Ordering;

/// Splits `total_units` half hours across courses in proportion to `weights`.
///
/// # Arguments
///
/// * `weights` - Course weights in registry order
/// * `total_units` - Half hours to distribute
///
/// # Returns
///
/// One unit count per weight, in the same order. Empty when `weights` is
/// empty.
#[must_use]
pub fn apportion_half_hours(weights: &[u64], total_units: u32) -> Vec<u32> {
    let mut shares: Vec<u32> = vec![0; weights.len()];
    if weights.is_empty() {
        return shares;
    }

    let mut remaining: u32 = total_units;

    // Minimum exposure: one unit each when the budget allows it
    let count: u32 = u32::try_from(weights.len()).unwrap_or(u32::MAX);
    if total_units >= count {
        shares.fill(1);
        remaining -= count;
    }

    while remaining > 0 {
        let mut best: usize = 0;
        for candidate in 1..weights.len() {
            if priority_cmp(weights, &shares, candidate, best) == Ordering::Greater {
                best = candidate;
            }
        }
        shares[best] += 1;
        remaining -= 1;
    }

    shares
}

/// Compares the claim of course `a` on the next unit against course `b`.
///
/// The claim is `w / (2s + 1)`, compared by cross-multiplication so no
/// precision is lost.
fn priority_cmp(weights: &[u64], shares: &[u32], a: usize, b: usize) -> Ordering {
    let divisor_a: u128 = 2 * u128::from(shares[a]) + 1;
    let divisor_b: u128 = 2 * u128::from(shares[b]) + 1;
    let claim_a: u128 = u128::from(weights[a]) * divisor_b;
    let claim_b: u128 = u128::from(weights[b]) * divisor_a;

    claim_a
        .cmp(&claim_b)
        .then_with(|| weights[a].cmp(&weights[b]))
        .then_with(|| b.cmp(&a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_weights() {
        assert!(apportion_half_hours(&[], 10).is_empty());
    }

    #[test]
    fn test_shares_sum_to_total() {
        let cases: [(&[u64], u32); 5] = [
            (&[400, 200], 84),
            (&[300, 300, 300], 7),
            (&[100, 900, 50, 250], 361),
            (&[1], 0),
            (&[700, 100, 100, 100, 100], 3),
        ];
        for (weights, total) in cases {
            let shares: Vec<u32> = apportion_half_hours(weights, total);
            assert_eq!(shares.iter().sum::<u32>(), total);
        }
    }

    #[test]
    fn test_exact_proportions() {
        // 42 hours split 2:1
        assert_eq!(apportion_half_hours(&[400, 200], 84), vec![56, 28]);
    }

    #[test]
    fn test_minimum_exposure() {
        let shares: Vec<u32> = apportion_half_hours(&[10_000, 1, 1], 12);
        assert!(shares.iter().all(|&s| s >= 1));
    }

    #[test]
    fn test_fewer_units_than_courses() {
        let shares: Vec<u32> = apportion_half_hours(&[100, 300, 200], 2);
        assert_eq!(shares, vec![0, 1, 1]);
    }

    #[test]
    fn test_equal_weights_prefer_lower_index() {
        assert_eq!(apportion_half_hours(&[300, 300], 3), vec![2, 1]);
    }

    #[test]
    fn test_raising_weight_never_lowers_share() {
        let base: Vec<u64> = vec![300, 200, 100, 450];
        for total in [4_u32, 9, 30, 57, 120] {
            for index in 0..base.len() {
                let before: u32 = apportion_half_hours(&base, total)[index];
                let mut raised: Vec<u64> = base.clone();
                raised[index] += 150;
                let after: u32 = apportion_half_hours(&raised, total)[index];
                assert!(after >= before, "total {total}, course {index}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let weights: Vec<u64> = vec![123, 456, 789];
        assert_eq!(
            apportion_half_hours(&weights, 77),
            apportion_half_hours(&weights, 77)
        );
    }
}
