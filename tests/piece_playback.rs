//! Composes whole pieces and plays them into a recorder.

use std::collections::BTreeSet;
use std::time::Duration;

use metamorphosis::config::Settings;
use metamorphosis::piece::{compose, Piece};
use metamorphosis::player::{play, Performance};
use metamorphosis::random;
use metamorphosis::theory::progression_measures;
use metamorphosis::transport::{Pacer, Transport};
use metamorphosis::Result;

#[derive(Default)]
struct Recorder(Vec<[u8; 3]>);

impl Transport for Recorder {
  fn send(&mut self, message: &[u8]) -> Result<()> {
    self.0.push([message[0], message[1], message[2]]);
    Ok(()) }}

#[derive(Default)]
struct Clock(Vec<Duration>);

impl Pacer for Clock {
  fn wait(&mut self, duration: Duration) { self.0.push(duration); }}

fn perform(seed: u64, release: bool) -> (Piece, Recorder, Clock, Performance) {
  let piece: Piece = compose(&mut random::source(Some(seed)), &Settings::default()).unwrap();
  let mut recorder: Recorder = Recorder::default();
  let mut clock: Clock = Clock::default();
  let performance: Performance = play(&piece, &mut recorder, &mut clock, release).unwrap();
  (piece, recorder, clock, performance) }

#[test]
fn every_piece_has_the_same_shape() {
  for seed in [1, 2, 3, 17, 404] {
    let (piece, recorder, clock, performance) = perform(seed, false);
    // messages: 2 x 50 + 2 x (135 + 14) + 2 x (180 + 14 + 12) + 2 x 50
    assert_eq!(recorder.0.len(), 910, "seed {}", seed);
    assert_eq!(performance.messages, 910);
    // slots: 2 x 32 + 2 x (40 + 8) + 2 x (120 + 8 + 8) + 2 x 32
    assert_eq!(clock.0.len(), 496);
    assert_eq!(piece.slot_count(), 496);
    let triplets: usize = clock.0.iter().filter(|d| **d == Duration::from_millis(83)).count();
    assert_eq!(triplets, 240);
    assert_eq!(performance.waited, Duration::from_millis(240 * 83 + 256 * 249)); }}

#[test]
fn only_note_ons_on_channel_one_without_release() {
  let (_, recorder, _, _) = perform(8, false);
  assert!(recorder.0.iter().all(|m| m[0] == 144));
  assert!(recorder.0.iter().all(|m| m[1] <= 127 && m[2] <= 127)); }

#[test]
fn opening_and_ending_are_accented_differently() {
  let (_, recorder, _, _) = perform(5, false);
  let sent: &[[u8; 3]] = &recorder.0;
  assert_eq!(sent[0][2], 100);
  assert_eq!(sent[1][2], 100);
  assert_eq!(sent[2][2], 80);
  // second run of part one starts accented again
  assert_eq!(sent[50][2], 100);
  // the ending is the last hundred messages
  let ending: &[[u8; 3]] = &sent[sent.len() - 100..];
  assert_eq!(ending[0][2], 90);
  assert_eq!(ending[2][2], 70);
  assert_eq!(ending[50][2], 90); }

#[test]
fn the_long_note_is_always_layered() {
  let (piece, recorder, _, _) = perform(12, false);
  let long: BTreeSet<u8> = BTreeSet::from([piece.long_note, piece.long_note + 12]);
  let velocities: BTreeSet<u8> = recorder
    .0
    .iter()
    .filter(|m| long.contains(&m[1]))
    .map(|m| m[2])
    .collect();
  assert_eq!(velocities, BTreeSet::from([115])); }

#[test]
fn progressions_are_legal() {
  let legal = progression_measures();
  for seed in 0..50 {
    let (piece, _, _, _) = perform(seed, false);
    assert!(piece.tonality.get() < 12);
    for degrees in [piece.degrees_two(), piece.degrees_three()] {
      assert_eq!(degrees.len(), 5);
      for (m, d) in degrees.iter().enumerate() {
        assert!(legal[m].contains(d)); }}}}

#[test]
fn release_silences_everything_that_sounded() {
  let (_, recorder, _, performance) = perform(21, true);
  let struck: BTreeSet<u8> = recorder.0.iter().filter(|m| m[0] == 144).map(|m| m[1]).collect();
  let released: Vec<u8> = recorder.0.iter().filter(|m| m[0] == 128).map(|m| m[1]).collect();
  assert_eq!(released.len(), struck.len());
  assert_eq!(released.into_iter().collect::<BTreeSet<u8>>(), struck);
  assert_eq!(performance.messages, 910 + struck.len());
  assert!(recorder.0[..910].iter().all(|m| m[0] == 144)); }

#[test]
fn same_seed_same_performance() {
  let (_, a, _, _) = perform(77, false);
  let (_, b, _, _) = perform(77, false);
  assert_eq!(a.0, b.0); }
