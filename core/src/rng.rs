//! Deterministic RNG for map generation and spin resolution.
//!
//! Every piece of game logic takes its random source as an argument; nothing
//! reaches for a hidden global generator. Same seed in, same layout out.

use serde::{Deserialize, Serialize};

/// Trait for random number generation in runs
pub trait GameRng {
    /// Generate a random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a random number in range [0, max)
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }

    /// Shuffle a slice using Fisher-Yates algorithm
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_range(i + 1);
            slice.swap(i, j);
        }
    }

    /// Uniform pick of a single element; the source slice is left untouched
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.gen_range(items.len())])
        }
    }

    /// Pick `min(k, items.len())` distinct elements in randomized relative order.
    ///
    /// Requests larger than the slice return all elements shuffled; never
    /// errors, never pads with duplicates.
    fn pick_many<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        self.shuffle(&mut indices);
        indices.truncate(k.min(items.len()));
        indices.into_iter().map(|i| items[i].clone()).collect()
    }

    /// Weighted draw over a weight table; `None` when the total weight is 0
    fn weighted_index(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }
        let mut target = self.gen_range(total as usize) as u32;
        for (i, &weight) in weights.iter().enumerate() {
            if weight == 0 {
                continue;
            }
            if target < weight {
                return Some(i);
            }
            target -= weight;
        }
        None
    }
}

/// XorShift32 RNG - simple, fast, deterministic
///
/// Suitable for game logic where cryptographic security is not needed.
/// The same seed will always produce the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG from a u64 seed
    ///
    /// The seed is combined into a u32, ensuring state is never 0.
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }

    /// Create a new RNG from a u32 seed
    pub fn seed_from_u32(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }
}

impl GameRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
