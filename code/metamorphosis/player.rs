//! Playing a composed piece in real time.

use std::time::Duration;

use log::{debug, info};

use crate::config::CHANNEL;
use crate::error::Result;
use crate::midi::{note_on, SoundingNotes};
use crate::piece::{Passage, Piece};
use crate::transport::{Pacer, Transport};

/// What a performance did, for the closing log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Performance {
  pub messages: usize,
  pub slots: usize,
  pub waited: Duration,
}

/// Sends a note-on for every pitch of each slot, then waits the passage's
/// slot delay. Notes are never released mid-piece: each one rings until
/// struck again. A failed send ends the performance.
pub fn play_passage<T: Transport, P: Pacer>(
  passage: &Passage,
  transport: &mut T,
  pacer: &mut P,
  sounding: &mut SoundingNotes,
  performance: &mut Performance,
) -> Result<()> {
  debug!("Playing {} ({} slots)", passage.name, passage.timeline.len());
  for (i, slot) in passage.timeline.slots().iter().enumerate() {
    for (position, &pitch) in slot.pitches().iter().enumerate() {
      let message: [u8; 3] = note_on(CHANNEL, pitch, passage.velocity.for_note(i, position));
      transport.send(&message)?;
      sounding.track(&message);
      performance.messages += 1; }
    pacer.wait(passage.slot_delay);
    performance.waited += passage.slot_delay;
    performance.slots += 1; }
  Ok(()) }

/// Plays every passage of the piece in order. With `release_at_end`, a
/// note-off follows for each note still ringing once the piece is over.
pub fn play<T: Transport, P: Pacer>(
  piece: &Piece,
  transport: &mut T,
  pacer: &mut P,
  release_at_end: bool,
) -> Result<Performance> {
  let mut performance: Performance = Performance::default();
  let mut sounding: SoundingNotes = SoundingNotes::default();
  let mut current: &str = "";
  for passage in &piece.passages {
    if passage.name != current {
      info!("Now playing: {}", passage.name);
      current = passage.name; }
    play_passage(passage, transport, pacer, &mut sounding, &mut performance)?; }
  if release_at_end {
    debug!("Releasing {} sounding notes", sounding.len());
    for message in sounding.releases() {
      transport.send(&message)?;
      performance.messages += 1; }}
  info!(
    "Finished: {} messages over {} slots in {:?}",
    performance.messages, performance.slots, performance.waited);
  Ok(performance) }
