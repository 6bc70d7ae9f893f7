//! Error type shared by every stage, from opening the port to playback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("could not initialise MIDI output: {0}")]
  TransportInit(#[from] midir::InitError),

  #[error("no MIDI output ports available")]
  NoPortsAvailable,

  #[error("output port #{index} does not exist ({count} available)")]
  NoSuchPort { index: usize, count: usize },

  #[error("could not open MIDI output port: {0}")]
  PortOpen(String),

  #[error("could not read MIDI port name: {0}")]
  PortInfo(#[from] midir::PortInfoError),

  #[error("failed to send MIDI message: {0}")]
  TransportSend(#[from] midir::SendError),

  #[error("chord degree {0} is outside 1..=7")]
  InvalidDegree(u8),

  #[error("tonality {0} is outside 0..=11")]
  InvalidTonality(u8),

  #[error("pitch {0} is outside the MIDI range 0..=127")]
  PitchOutOfRange(i16),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
