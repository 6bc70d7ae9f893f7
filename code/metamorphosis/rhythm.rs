//! Rhythmic patterns of the three parts and the bridge.
//!
//! A slot holds the pitches that start together. Slots carry no length:
//! the player waits the same delay after every slot of a passage, so a
//! quarter note is simply a pitch that is not struck again on the
//! following slot.

use crate::error::{Error, Result};
use crate::realize::{RealizedChord, SortedChord};

pub const EIGHTHS_PER_MEASURE: usize = 8;
pub const TRIPLETS_PER_MEASURE: usize = 24;

/// Part two's right hand strikes its chord on these eighths.
const CHORD_STRIKES: [usize; 5] = [0, 1, 3, 5, 7];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot(Vec<u8>);

impl Slot {
  pub fn new(pitches: Vec<u8>) -> Self { Slot(pitches) }

  pub fn pitches(&self) -> &[u8] { &self.0 }

  fn with(mut self, more: &[u8]) -> Self {
    self.0.extend_from_slice(more);
    self }
}

/// An ordered run of slots. Built once, then only read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline(Vec<Slot>);

impl Timeline {
  pub fn slots(&self) -> &[Slot] { &self.0 }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// The timelines one after another.
  pub fn concat<'a, I>(parts: I) -> Timeline
  where I: IntoIterator<Item = &'a Timeline>
  { Timeline(parts
               .into_iter()
               .flat_map(|t| t.0.iter().cloned())
               .collect()) }
}

impl FromIterator<Slot> for Timeline {
  fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
    Timeline(iter.into_iter().collect()) }}

impl std::fmt::Display for Timeline {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for slot in &self.0 {
      let line: Vec<String> = slot.0.iter().map(|p| p.to_string()).collect();
      writeln!(f, "{}", line.join(", "))?; }
    Ok(()) }}

/// The left hand's ostinato for one eighth: bass and low eighth together
/// on even slots, high eighth alone on odd ones.
fn left_hand(left: &SortedChord, i: usize) -> Slot {
  let [bass, low, high] = left.pitches();
  if i % 2 == 0 {
    Slot(vec![bass, low])
  } else {
    Slot(vec![high]) }}

/// One measure of the left hand alone.
pub fn pattern_a(left: &SortedChord) -> Timeline {
  (0..EIGHTHS_PER_MEASURE).map(|i| left_hand(left, i)).collect() }

/// The bridge: pattern A with the long low note and its octave struck
/// on the first slot.
pub fn pattern_b(left: &SortedChord, long_note: u8) -> Timeline {
  (0..EIGHTHS_PER_MEASURE)
    .map(|i| {
      let slot: Slot = left_hand(left, i);
      if i == 0 {
        slot.with(&[long_note, long_note + 12])
      } else { slot }})
    .collect() }

/// A, A, B, A.
pub fn part_one(left: &SortedChord, long_note: u8) -> Timeline {
  let a: Timeline = pattern_a(left);
  let b: Timeline = pattern_b(left, long_note);
  Timeline::concat([&a, &a, &b, &a]) }

/// One measure of part two: the ostinato under the right hand's full
/// chord, struck off the beat. `right` is used in realization order.
pub fn part_two_measure(left: &SortedChord, right: &RealizedChord) -> Timeline {
  (0..EIGHTHS_PER_MEASURE)
    .map(|i| {
      let slot: Slot = left_hand(left, i);
      if CHORD_STRIKES.contains(&i) {
        slot.with(&right.pitches())
      } else { slot }})
    .collect() }

/// Up through the triad to the octave, then back down:
/// two triplets per eighth of the left hand.
pub fn triplet_cycle(right: &SortedChord) -> Result<[u8; 6]> {
  let [r0, r1, r2] = right.pitches();
  let octave: u8 = r0
    .checked_add(12)
    .filter(|p| *p <= 127)
    .ok_or(Error::PitchOutOfRange(r0 as i16 + 12))?;
  Ok([r0, r1, r2, octave, r2, r1]) }

/// One measure of part three.
pub fn part_three_measure(left: &SortedChord, right: &SortedChord) -> Result<Timeline> {
  let [bass, low, high] = left.pitches();
  let cycle: [u8; 6] = triplet_cycle(right)?;
  Ok((0..TRIPLETS_PER_MEASURE)
       .map(|i| match i % 6 {
         0 => Slot(vec![bass, low, cycle[0]]),
         3 => Slot(vec![high, cycle[3]]),
         k => Slot(vec![cycle[k]]), })
       .collect()) }
