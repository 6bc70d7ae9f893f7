//! Musical constants of the piece, and the runtime settings the CLI can change.

use std::time::Duration;

use crate::realize::RegisterWindow;

pub const LOWEST_A          : u8  = 21;  // A0, base of the right hand's long note
pub const EIGHTH_NOTE_MS    : u64 = 249; // slot delay for eighth-note passages
pub const TRIPLET_DIVISION  : u64 = 3;   // part three plays three slots per eighth
pub const CHANNEL           : u8  = 0;

pub const OPENING_ACCENT    : u8  = 100; // first slot of part one
pub const ENDING_ACCENT     : u8  = 90;  // first slot of the ending
pub const BASE_VELOCITY     : u8  = 80;
pub const ENDING_VELOCITY   : u8  = 70;
pub const LAYER_VELOCITY    : u8  = 115; // low right-hand notes stacked on a slot

/// A2 baseline, folded into C3..B3.
pub const LEFT_HAND: RegisterWindow =
  RegisterWindow { baseline: 45, lower: 48, upper: 59 };
/// A4 baseline, folded into C4..D5. Part two's full-chord voicing.
pub const RIGHT_HAND_CHORDS: RegisterWindow =
  RegisterWindow { baseline: 69, lower: 60, upper: 74 };
/// A4 baseline, folded into F4..E5. Part three's triplets.
pub const RIGHT_HAND_TRIPLETS: RegisterWindow =
  RegisterWindow { baseline: 69, lower: 65, upper: 76 };

/// Runtime knobs that do not change what is composed, only how it is played.
#[derive(Clone, Debug)]
pub struct Settings {
  pub eighth_note: Duration,
  pub release_at_end: bool,
}

impl Settings {
  pub fn triplet(&self) -> Duration {
    // truncated to whole milliseconds
    Duration::from_millis(self.eighth_note.as_millis() as u64 / TRIPLET_DIVISION) }
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      eighth_note: Duration::from_millis(EIGHTH_NOTE_MS),
      release_at_end: false, }}
}
