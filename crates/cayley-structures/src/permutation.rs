//! The symmetric group on {0, .., n-1}.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::{AlgebraError, Result};
use crate::traits::{Group, Magma, Monoid, SemiGroup};

/// The group of permutations of `0..n` under composition.
///
/// A permutation is a vector `x` where `x[i]` is the image of `i`.
/// Composition is `(x ∘ y)[i] = y[x[i]]`.
#[derive(Clone, Copy, Debug)]
pub struct PermutationGroup {
    n: usize,
}

impl PermutationGroup {
    /// Creates the symmetric group on `n` points.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// The number of points acted on.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.n
    }
}

impl Magma for PermutationGroup {
    type Elem = Vec<usize>;

    fn op(&self, x: &Vec<usize>, y: &Vec<usize>) -> Vec<usize> {
        x.iter().map(|&i| y[i]).collect()
    }

    fn contains(&self, x: &Vec<usize>) -> bool {
        if x.len() != self.n {
            return false;
        }
        let mut seen = vec![false; self.n];
        for &i in x {
            if i >= self.n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    fn eq(&self, a: &Vec<usize>, b: &Vec<usize>) -> bool {
        a == b
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec<usize> {
        let mut p: Vec<usize> = (0..self.n).collect();
        p.shuffle(rng);
        p
    }
}

impl SemiGroup for PermutationGroup {}

impl Monoid for PermutationGroup {
    fn identity(&self) -> Vec<usize> {
        (0..self.n).collect()
    }
}

impl Group for PermutationGroup {
    fn inverse(&self, x: &Vec<usize>) -> Result<Vec<usize>> {
        if !self.contains(x) {
            return Err(AlgebraError::NotInvertible);
        }
        let mut inv = vec![0; self.n];
        for (i, &xi) in x.iter().enumerate() {
            inv[xi] = i;
        }
        Ok(inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn composition_applies_right_after_left() {
        let s3 = PermutationGroup::new(3);
        let x = vec![1, 2, 0];
        let y = vec![1, 0, 2];
        // (x ∘ y)[i] = y[x[i]]
        assert_eq!(s3.op(&x, &y), vec![0, 2, 1]);
    }

    #[test]
    fn inverse_undoes_composition() {
        let s5 = PermutationGroup::new(5);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let x = s5.sample(&mut rng);
        let xi = s5.inverse(&x).unwrap();
        assert_eq!(s5.op(&x, &xi), s5.identity());
        assert_eq!(s5.op(&xi, &x), s5.identity());
    }

    #[test]
    fn membership_rejects_non_permutations() {
        let s3 = PermutationGroup::new(3);
        assert!(s3.contains(&vec![2, 0, 1]));
        assert!(!s3.contains(&vec![0, 0, 1]));
        assert!(!s3.contains(&vec![0, 1]));
        assert!(!s3.contains(&vec![0, 1, 3]));
    }

    #[test]
    fn coset_of_transposition_subgroup() {
        let s3 = PermutationGroup::new(3);
        let h = vec![vec![0, 1, 2], vec![1, 0, 2]];
        let g = vec![1, 2, 0];
        let left = s3.left_coset(&g, &h);
        assert_eq!(left.len(), 2);
        assert!(left.iter().any(|p| p == &vec![1, 2, 0]));
        assert!(left.iter().any(|p| p == &vec![0, 2, 1]));
        // Both cosets are formed by composing g with every element of H.
        assert_eq!(s3.right_coset(&h, &g), left);
    }
}
