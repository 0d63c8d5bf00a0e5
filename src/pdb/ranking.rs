//! Lexicographic rank/unrank for k-permutations of `{0..15}` (contract C3).
//!
//! An abstract state is the vector of cell indices held by an ordered
//! pattern `P = <p0 < p1 < ... < p(k-1)>`. `rank` maps that vector to a dense
//! index in `[0, 16*15*...*(16-k+1))`; `unrank` is its inverse.

const DOMAIN: u64 = 16;

/// `M_i = (16-i-1)! / (16-k)!`, the number of ways to place the remaining
/// `k-i-1` coordinates once the first `i+1` are fixed.
fn multipliers(k: usize) -> Vec<u64> {
    let mut m = vec![1u64; k];
    for i in (0..k.saturating_sub(1)).rev() {
        m[i] = m[i + 1] * (DOMAIN - i as u64 - 1);
    }
    m
}

/// Size of the dense rank space for a pattern of size `k`: `16*15*...*(17-k)`.
#[must_use]
pub fn domain_size(k: usize) -> u64 {
    (0..k as u64).map(|i| DOMAIN - i).product()
}

/// Ranks an abstract state (distinct cell indices, one per pattern tile in
/// ascending tile-value order) into `[0, domain_size(a.len()))`.
///
/// # Panics
/// Panics if `abstract_state` contains a value `>= 16` or a duplicate.
#[must_use]
pub fn rank(abstract_state: &[u8]) -> u64 {
    let k = abstract_state.len();
    let m = multipliers(k);

    let mut used_mask: u16 = 0;
    let mut total = 0u64;
    for (i, &cell) in abstract_state.iter().enumerate() {
        assert!(cell < 16, "cell index out of range");
        let lower_bits = (1u16 << cell) - 1;
        let used_below = (used_mask & lower_bits).count_ones() as u64;
        let digit = u64::from(cell) - used_below;
        total += digit * m[i];
        used_mask |= 1 << cell;
    }
    total
}

/// Inverse of [`rank`]: reconstructs the `k`-length abstract state whose rank
/// is `r`, given the pattern size `k`.
///
/// # Panics
/// Panics if `r >= domain_size(k)`.
#[must_use]
pub fn unrank(mut r: u64, k: usize) -> Vec<u8> {
    assert!(r < domain_size(k), "rank out of range for pattern size");
    let m = multipliers(k);

    let mut used_mask: u16 = 0;
    let mut result = Vec::with_capacity(k);
    for &multiplier in &m {
        let digit = r / multiplier;
        r %= multiplier;

        let mut remaining = digit;
        let mut slot = 0u8;
        loop {
            if used_mask & (1 << slot) == 0 {
                if remaining == 0 {
                    break;
                }
                remaining -= 1;
            }
            slot += 1;
        }
        result.push(slot);
        used_mask |= 1 << slot;
    }
    result
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;

    #[test]
    fn rank_unrank_round_trips() {
        for k in 1..=3 {
            for perm in (0u8..16).permutations(k) {
                assert_eq!(unrank(rank(&perm), k), perm);
            }
        }
    }

    #[test]
    fn rank_is_a_bijection_onto_the_dense_range() {
        for k in 1..=3 {
            let mut seen = HashSet::new();
            for perm in (0u8..16).permutations(k) {
                let r = rank(&perm);
                assert!(r < domain_size(k));
                assert!(seen.insert(r), "rank {r} produced twice for k={k}");
            }
            assert_eq!(seen.len() as u64, domain_size(k));
        }
    }

    #[test]
    fn domain_size_matches_falling_factorial() {
        assert_eq!(domain_size(1), 16);
        assert_eq!(domain_size(2), 16 * 15);
        assert_eq!(domain_size(7), 16 * 15 * 14 * 13 * 12 * 11 * 10);
    }
}
