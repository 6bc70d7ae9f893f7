//! Turning an abstract chord into concrete pitches inside a register.

use crate::error::{Error, Result};
use crate::theory::{chord_intervals, Degree, Tonality};

/// Where a hand plays. Pitches start from `baseline` and are folded by
/// octaves into `lower..=upper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterWindow {
  pub baseline: u8,
  pub lower: u8,
  pub upper: u8,
}

/// Three pitches in the order root, third, fifth. Only [`realize`]
/// makes these, so every pitch is a valid MIDI note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RealizedChord([u8; 3]);

/// The same three pitches, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortedChord([u8; 3]);

impl RealizedChord {
  #[cfg(test)]
  pub(crate) fn from_pitches(pitches: [u8; 3]) -> Self {
    assert!(pitches.iter().all(|p| *p <= 127));
    RealizedChord(pitches) }

  pub fn pitches(&self) -> [u8; 3] { self.0 }

  pub fn sorted(self) -> SortedChord {
    let mut pitches: [u8; 3] = self.0;
    pitches.sort_unstable();
    SortedChord(pitches) }
}

impl SortedChord {
  pub fn pitches(&self) -> [u8; 3] { self.0 }
}

/// Realizes `degree` in the key `tonality` semitones above A.
///
/// Each pitch is folded down while above the window, then up while below
/// it. For the left hand at most one fold is ever needed. In the right
/// hand's windows the highest tones of the sharpest keys (III and VII
/// in G and G#, for instance) need a second fold down; a single fold
/// would leave them above the window, so those notes sound an octave
/// lower than a one-fold realization would put them.
pub fn realize(degree: Degree,
               tonality: Tonality,
               window: RegisterWindow
) -> Result<RealizedChord> {
  let mut pitches: [u8; 3] = [0; 3];
  for (slot, interval) in pitches.iter_mut().zip(chord_intervals(degree)) {
    let mut note: i16 = interval as i16
                        + tonality.get() as i16
                        + window.baseline as i16;
    while note > window.upper as i16 { note -= 12; }
    while note < window.lower as i16 { note += 12; }
    *slot = u8::try_from(note)
      .ok()
      .filter(|n| *n <= 127)
      .ok_or(Error::PitchOutOfRange(note))?; }
  Ok(RealizedChord(pitches)) }
