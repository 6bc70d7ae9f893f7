//! The one place the piece asks for chance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
  /// A uniform draw from `0..bound`. `bound` is never zero.
  fn below(&mut self, bound: usize) -> usize;

  /// A uniform pick from a non-empty slice.
  fn pick<T: Copy>(&mut self, choices: &[T]) -> T
  where Self: Sized
  { choices[self.below(choices.len())] }
}

impl<R: Rng> RandomSource for R {
  fn below(&mut self, bound: usize) -> usize {
    self.gen_range(0..bound) }}

/// Seeded when a seed is given, from OS entropy otherwise.
pub fn source(seed: Option<u64>) -> StdRng {
  match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(), }}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn draws_stay_below_the_bound() {
    let mut rng: StdRng = source(Some(7));
    for bound in 1..20 {
      for _ in 0..50 {
        assert!(rng.below(bound) < bound); }}}

  #[test]
  fn same_seed_same_draws() {
    let mut a: StdRng = source(Some(2024));
    let mut b: StdRng = source(Some(2024));
    let first: Vec<usize> = (0..32).map(|_| a.below(12)).collect();
    let second: Vec<usize> = (0..32).map(|_| b.below(12)).collect();
    assert_eq!(first, second); }

  #[test]
  fn single_choice_is_always_picked() {
    let mut rng: StdRng = source(None);
    for _ in 0..10 {
      assert_eq!(rng.pick(&['x']), 'x'); }}
}
