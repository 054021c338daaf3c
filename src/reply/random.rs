//! Randomness used to pick among candidate replies.

use rand::prelude::IndexedRandom;

/// Picks one candidate out of a non-empty list.
pub trait RandomSource: Send + Sync {
    fn choose<'a>(&self, candidates: &[&'a str]) -> Option<&'a str>;
}

/// Uniform choice from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn choose<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates.choose(&mut rand::rng()).copied()
    }
}

/// Always picks the candidate at a fixed index, wrapping around.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChoice(pub usize);

impl RandomSource for FixedChoice {
    fn choose<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        if candidates.is_empty() {
            return None;
        }
        candidates.get(self.0 % candidates.len()).copied()
    }
}
