//! Composing a whole piece: the random choices, the sections built from
//! them, and the order they are played in.
//!
//! Everything is decided and built here before a single note sounds.

use std::time::Duration;

use log::{debug, info};

use crate::config::{self, Settings};
use crate::error::Result;
use crate::random::RandomSource;
use crate::realize::{realize, RealizedChord, SortedChord};
use crate::rhythm::{self, Timeline};
use crate::theory::{progression_measures, Degree, Tonality};

/// How loud each note of a passage is struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Velocity {
  /// First slot of the passage.
  pub accent: u8,
  /// Every later slot.
  pub base: u8,
  /// If set, every pitch from the third one of a slot onwards.
  pub layer: Option<u8>,
}

impl Velocity {
  pub const fn flat(velocity: u8) -> Self {
    Velocity { accent: velocity, base: velocity, layer: None } }

  pub const fn layered(self, layer: u8) -> Self {
    Velocity { layer: Some(layer), ..self } }

  pub fn for_note(&self, slot_index: usize, position: usize) -> u8 {
    match self.layer {
      Some(layer) if position >= 2 => layer,
      _ if slot_index == 0 => self.accent,
      _ => self.base, }}
}

/// A timeline together with how it is played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passage {
  pub name: &'static str,
  pub timeline: Timeline,
  pub slot_delay: Duration,
  pub velocity: Velocity,
}

/// The degree a measure landed on, and the chords realized from it.
/// Part two voices its right hand as realized, part three sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measure<R> {
  pub degree: Degree,
  pub left: SortedChord,
  pub right: R,
}

#[derive(Clone, Debug)]
pub struct Piece {
  pub tonality: Tonality,
  pub long_note: u8,
  pub pattern_a: Timeline,
  pub pattern_b: Timeline,
  pub part_one: Timeline,
  pub part_two: Vec<Measure<RealizedChord>>,
  pub part_three: Vec<Measure<SortedChord>>,
  pub passages: Vec<Passage>,
}

impl Piece {
  pub fn degrees_two(&self) -> Vec<Degree> {
    self.part_two.iter().map(|m| m.degree).collect() }

  pub fn degrees_three(&self) -> Vec<Degree> {
    self.part_three.iter().map(|m| m.degree).collect() }

  pub fn slot_count(&self) -> usize {
    self.passages.iter().map(|p| p.timeline.len()).sum() }
}

/// One degree per measure, each drawn from that measure's choices.
pub fn draw_progression<R: RandomSource>(rng: &mut R) -> Vec<Degree> {
  progression_measures()
    .iter()
    .map(|choices| rng.pick(choices.as_slice()))
    .collect() }

fn left_chord(degree: Degree, tonality: Tonality) -> Result<SortedChord> {
  Ok(realize(degree, tonality, config::LEFT_HAND)?.sorted()) }

fn part_two_measures(degrees: &[Degree],
                     tonality: Tonality
) -> Result<Vec<Measure<RealizedChord>>> {
  degrees
    .iter()
    .map(|&degree| Ok(Measure {
      degree,
      left: left_chord(degree, tonality)?,
      right: realize(degree, tonality, config::RIGHT_HAND_CHORDS)?, }))
    .collect() }

fn part_three_measures(degrees: &[Degree],
                       tonality: Tonality
) -> Result<Vec<Measure<SortedChord>>> {
  degrees
    .iter()
    .map(|&degree| Ok(Measure {
      degree,
      left: left_chord(degree, tonality)?,
      right: realize(degree, tonality, config::RIGHT_HAND_TRIPLETS)?.sorted(), }))
    .collect() }

/// Draws the key and both progressions, then builds the piece.
/// Draw order: tonality, part two's measures, part three's measures.
pub fn compose<R: RandomSource>(rng: &mut R, settings: &Settings) -> Result<Piece> {
  let tonality: Tonality = Tonality::new(rng.below(Tonality::COUNT) as u8)?;
  let two: Vec<Degree> = draw_progression(rng);
  let three: Vec<Degree> = draw_progression(rng);
  build(tonality, &two, &three, settings) }

/// Builds the piece from choices already made.
pub fn build(tonality: Tonality,
             degrees_two: &[Degree],
             degrees_three: &[Degree],
             settings: &Settings
) -> Result<Piece> {
  info!("Tonality {}", tonality);

  let tonic: SortedChord = left_chord(Degree::TONIC, tonality)?;
  let long_note: u8 = config::LOWEST_A + tonality.get();
  let pattern_a: Timeline = rhythm::pattern_a(&tonic);
  let pattern_b: Timeline = rhythm::pattern_b(&tonic, long_note);
  let part_one: Timeline = rhythm::part_one(&tonic, long_note);
  debug!("Part one:\n{}", part_one);

  let part_two: Vec<Measure<RealizedChord>> = part_two_measures(degrees_two, tonality)?;
  let part_three: Vec<Measure<SortedChord>> = part_three_measures(degrees_three, tonality)?;

  let two_timeline: Timeline = measures_timeline(
    &part_two, |m| Ok(rhythm::part_two_measure(&m.left, &m.right)), "two")?;
  let three_timeline: Timeline = measures_timeline(
    &part_three, |m| rhythm::part_three_measure(&m.left, &m.right), "three")?;

  let eighth: Duration = settings.eighth_note;
  let triplet: Duration = settings.triplet();
  let plain: Velocity = Velocity::flat(config::BASE_VELOCITY);
  let bridge: Velocity = plain.layered(config::LAYER_VELOCITY);
  let opening: Velocity = Velocity {
    accent: config::OPENING_ACCENT,
    base: config::BASE_VELOCITY,
    layer: Some(config::LAYER_VELOCITY), };
  let ending: Velocity = Velocity {
    accent: config::ENDING_ACCENT,
    base: config::ENDING_VELOCITY,
    layer: Some(config::LAYER_VELOCITY), };

  let passage = |name: &'static str, timeline: &Timeline, slot_delay: Duration, velocity: Velocity| Passage {
    name,
    timeline: timeline.clone(),
    slot_delay,
    velocity, };

  let mut passages: Vec<Passage> = Vec::new();
  for _ in 0..2 {
    passages.push(passage("part one", &part_one, eighth, opening)); }
  for _ in 0..2 {
    passages.push(passage("part two", &two_timeline, eighth, plain));
    passages.push(passage("bridge", &pattern_b, eighth, bridge)); }
  for _ in 0..2 {
    passages.push(passage("part three", &three_timeline, triplet, plain));
    passages.push(passage("bridge", &pattern_b, eighth, bridge));
    passages.push(passage("bridge close", &pattern_a, eighth, plain)); }
  for _ in 0..2 {
    passages.push(passage("ending", &part_one, eighth, ending)); }

  Ok(Piece {
    tonality,
    long_note,
    pattern_a,
    pattern_b,
    part_one,
    part_two,
    part_three,
    passages, }) }

fn measures_timeline<R, F>(measures: &[Measure<R>],
                           pattern: F,
                           part: &str
) -> Result<Timeline>
where F: Fn(&Measure<R>) -> Result<Timeline>
{ let built: Vec<Timeline> = measures
    .iter()
    .map(|m| {
      let t: Timeline = pattern(m)?;
      info!("Part {} degree: {}", part, m.degree);
      debug!("\n{}", t);
      Ok(t) })
    .collect::<Result<Vec<Timeline>>>()?;
  Ok(Timeline::concat(&built)) }
