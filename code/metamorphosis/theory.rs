//! Diatonic chords of a minor key, and the measures a progression moves through.
//!
//! Offsets are semitones above the tonic, already reduced mod 12,
//! listed root, third, fifth.

use crate::error::{Error, Result};

/// Scale position of a chord's root, 1 (i) through 7 (VII).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Degree(u8);

impl Degree {
  pub const TONIC: Degree = Degree(1);

  pub fn new(degree: u8) -> Result<Self> {
    if (1..=7).contains(&degree) {
      Ok(Degree(degree))
    } else {
      Err(Error::InvalidDegree(degree)) }}

  pub fn get(self) -> u8 { self.0 }

  /// Roman numeral, lower case for minor and diminished chords.
  pub fn numeral(self) -> &'static str {
    ["i", "ii°", "III", "iv", "v", "VI", "VII"][(self.0 - 1) as usize] }
}

impl std::fmt::Display for Degree {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({})", self.0, self.numeral()) }}

/// Key of the piece, in semitones above A: 0 is A minor, 11 is G# minor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tonality(u8);

impl Tonality {
  pub const COUNT: usize = 12;

  pub fn new(tonality: u8) -> Result<Self> {
    if (tonality as usize) < Self::COUNT {
      Ok(Tonality(tonality))
    } else {
      Err(Error::InvalidTonality(tonality)) }}

  pub fn get(self) -> u8 { self.0 }
}

impl std::fmt::Display for Tonality {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.0, key_name(*self)) }}

const CHORDS_IN_KEY: [[u8; 3]; 7] = [
  [0, 3, 7],   // i    minor
  [2, 5, 8],   // ii°  diminished
  [3, 7, 10],  // III  major
  [5, 8, 0],   // iv   minor
  [7, 10, 2],  // v    minor
  [8, 0, 3],   // VI   major
  [10, 2, 5],  // VII  major
];

pub fn chord_intervals(degree: Degree) -> [u8; 3] {
  CHORDS_IN_KEY[(degree.0 - 1) as usize] }

const PROGRESSION: [&[u8]; 5] = [&[1], &[3, 6], &[3, 6], &[5, 7], &[1]];

/// One entry per measure: the degrees that measure may land on.
pub fn progression_measures() -> Vec<Vec<Degree>> {
  PROGRESSION
    .iter()
    .map(|measure| measure.iter().map(|&d| Degree(d)).collect())
    .collect() }

const KEY_NAMES: [&str; 12] =
  ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"];

pub fn key_name(tonality: Tonality) -> String {
  format!("{} minor", KEY_NAMES[tonality.0 as usize]) }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn degrees_outside_the_scale_are_rejected() {
    assert!(matches!(Degree::new(0), Err(Error::InvalidDegree(0))));
    assert!(matches!(Degree::new(8), Err(Error::InvalidDegree(8))));
    for d in 1..=7 {
      assert_eq!(Degree::new(d).unwrap().get(), d); }}

  #[test]
  fn chord_qualities_follow_the_aeolian_mode() {
    for d in 1..=7u8 {
      let [root, third, fifth] = chord_intervals(Degree::new(d).unwrap());
      let third_size: u8 = (third + 12 - root) % 12;
      let fifth_size: u8 = (fifth + 12 - root) % 12;
      let (want_third, want_fifth): (u8, u8) = match d {
        1 | 4 | 5 => (3, 7),
        2 => (3, 6),
        _ => (4, 7), };
      assert_eq!((third_size, fifth_size), (want_third, want_fifth), "degree {}", d); }}

  #[test]
  fn progression_starts_and_ends_on_the_tonic() {
    let measures: Vec<Vec<Degree>> = progression_measures();
    assert_eq!(measures.len(), 5);
    assert_eq!(measures[0], vec![Degree::TONIC]);
    assert_eq!(measures[4], vec![Degree::TONIC]);
    let as_numbers: Vec<Vec<u8>> = measures
      .iter()
      .map(|m| m.iter().map(|d| d.get()).collect())
      .collect();
    assert_eq!(as_numbers, vec![vec![1], vec![3, 6], vec![3, 6], vec![5, 7], vec![1]]); }

  #[test]
  fn key_names_count_up_from_a() {
    assert_eq!(key_name(Tonality::new(0).unwrap()), "A minor");
    assert_eq!(key_name(Tonality::new(3).unwrap()), "C minor");
    assert_eq!(key_name(Tonality::new(11).unwrap()), "G# minor");
    assert_eq!(Tonality::new(7).unwrap().to_string(), "7: E minor"); }

  #[test]
  fn tonalities_past_g_sharp_are_rejected() {
    assert!(matches!(Tonality::new(12), Err(Error::InvalidTonality(12))));
    assert!(matches!(Tonality::new(240), Err(Error::InvalidTonality(240))));
    for t in 0..12 {
      assert_eq!(Tonality::new(t).unwrap().get(), t); }}
}
