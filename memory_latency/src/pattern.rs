//! Chunk visiting order for one timing round.
//!
//! A uniformly shuffled order of the chunks leaves no stride for the
//! prefetcher to latch on to. The read chain walks it cyclically.

use crate::seed::SeedSource;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPermutation {
    order: Vec<usize>,
}

impl ChunkPermutation {
    pub fn generate(chunk_count: usize, seeds: &mut impl SeedSource) -> Self {
        let mut permutation = ChunkPermutation {
            order: (0..chunk_count).collect(),
        };
        permutation.shuffle(seeds);
        permutation
    }

    /// Reshuffles in place with a freshly seeded generator, starting from the
    /// previous order. The result is still uniform.
    pub fn shuffle(&mut self, seeds: &mut impl SeedSource) {
        self.order.shuffle(&mut seeds.rng());
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Every index of `0..len()` appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.order.len()];
        for &index in &self.order {
            match seen.get_mut(index) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }
}
