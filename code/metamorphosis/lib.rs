//! Metamorphosis - a generative piano piece streamed as MIDI
//!
//! Picks a minor key and a chord progression at random and plays a piece
//! in the manner of Philip Glass's *Metamorphosis*: a left-hand ostinato
//! of a quarter note against two eighths, under three right-hand parts
//! (a low long note, off-beat chords, then triplets).
//!
//! The whole piece is composed up front ([`piece::compose`]) and then
//! played ([`player::play`]) through any [`transport::Transport`].

pub mod config;
pub mod error;
pub mod midi;
pub mod piece;
pub mod player;
pub mod random;
pub mod realize;
pub mod rhythm;
pub mod theory;
pub mod transport;

pub use error::{Error, Result};
