//! Tour permutations and the swap move.

use rand::Rng;

/// A visiting order: a permutation of city indices `0..n`.
///
/// Length is fixed for the lifetime of a run; moves mutate in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The identity order `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Tour((0..n).collect())
    }

    /// A uniformly random permutation built by rejection sampling:
    /// draw an index, discard it if already taken, repeat until full.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut taken = vec![false; n];
        let mut order = Vec::with_capacity(n);
        while order.len() < n {
            let i = rng.random_range(0..n);
            if !taken[i] {
                taken[i] = true;
                order.push(i);
            }
        }
        Tour(order)
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// City indices in visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the tour, returning its city indices.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Overwrites this tour with `other` without reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn copy_from(&mut self, other: &Tour) {
        self.0.copy_from_slice(&other.0);
    }

    /// Swaps two distinct, uniformly chosen positions and returns them.
    ///
    /// The second position is redrawn until it differs from the first.
    ///
    /// # Panics
    ///
    /// Panics if the tour has fewer than two entries.
    pub(crate) fn swap_random<R: Rng>(&mut self, rng: &mut R) -> (usize, usize) {
        let n = self.0.len();
        assert!(n >= 2, "swap needs at least two positions, tour has {n}");
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }
        self.0.swap(i, j);
        (i, j)
    }

    /// Returns `true` if every index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &i in &self.0 {
            if i >= seen.len() || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use u_numflow::random::create_rng;

    #[test]
    fn test_identity() {
        let tour = Tour::identity(4);
        assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
        assert!(tour.is_permutation());
    }

    #[test]
    fn test_not_permutation() {
        assert!(!Tour(vec![0, 0, 2]).is_permutation());
        assert!(!Tour(vec![0, 3, 1]).is_permutation());
        assert!(Tour(vec![]).is_permutation());
    }

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let mut rng = create_rng(42);
        let mut tour = Tour::identity(10);
        for _ in 0..100 {
            let before = tour.clone();
            let (i, j) = tour.swap_random(&mut rng);
            assert_ne!(i, j);
            let changed: Vec<usize> = (0..10)
                .filter(|&k| before.as_slice()[k] != tour.as_slice()[k])
                .collect();
            assert_eq!(changed.len(), 2);
            assert!(tour.is_permutation());
        }
    }

    #[test]
    fn test_swap_two_element_tour() {
        let mut rng = create_rng(1);
        let mut tour = Tour::identity(2);
        tour.swap_random(&mut rng);
        assert_eq!(tour.as_slice(), &[1, 0]);
    }

    #[test]
    #[should_panic]
    fn test_swap_single_element_panics() {
        let mut rng = create_rng(1);
        Tour::identity(1).swap_random(&mut rng);
    }

    #[test]
    fn test_copy_from() {
        let mut rng = create_rng(3);
        let src = Tour::random(8, &mut rng);
        let mut dst = Tour::identity(8);
        dst.copy_from(&src);
        assert_eq!(dst, src);
    }

    proptest! {
        #[test]
        fn prop_random_is_permutation(n in 0usize..200, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let tour = Tour::random(n, &mut rng);
            prop_assert_eq!(tour.len(), n);
            prop_assert!(tour.is_permutation());
        }

        #[test]
        fn prop_swaps_preserve_permutation(n in 2usize..50, swaps in 1usize..100, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let mut tour = Tour::random(n, &mut rng);
            for _ in 0..swaps {
                tour.swap_random(&mut rng);
            }
            prop_assert!(tour.is_permutation());
        }
    }
}
