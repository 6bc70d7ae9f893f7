//! Channel-voice messages, and keeping track of which notes are sounding.

use std::collections::BTreeSet;

pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;

/// `note` and `velocity` are data bytes and must already be 0..=127.
pub fn note_on(channel: u8, note: u8, velocity: u8) -> [u8; 3] {
  debug_assert!(note <= 127 && velocity <= 127, "data byte out of range: {} {}", note, velocity);
  [NOTE_ON | (channel & 0x0F), note, velocity] }

pub fn note_off(channel: u8, note: u8) -> [u8; 3] {
  debug_assert!(note <= 127, "data byte out of range: {}", note);
  [NOTE_OFF | (channel & 0x0F), note, 0] }

pub fn get_note(data: &[u8]) -> Option<u8> {
  if data.len() >= 2 && is_note_event(data) {
    Some(data[1])
  } else {
    None } }

pub fn get_channel(data: &[u8]) -> Option<u8> {
  data.first().map(|status| status & 0x0F) }

pub fn is_note_on(data: &[u8]) -> bool {
  data.len() >= 3 && data[0] & 0xF0 == NOTE_ON && data[2] > 0 }

pub fn is_note_off(data: &[u8]) -> bool {
  if data.len() >= 3 {
    let status: u8 = data[0] & 0xF0;
    // Note off, or note on with velocity 0
    status == NOTE_OFF || (status == NOTE_ON && data[2] == 0)
  } else {
    false } }

pub fn is_note_event(data: &[u8]) -> bool {
  match data.first() {
    Some(status) => matches!(status & 0xF0, NOTE_OFF | NOTE_ON),
    None => false, } }

/// (channel, note) pairs struck and not yet released.
#[derive(Clone, Debug, Default)]
pub struct SoundingNotes(BTreeSet<(u8, u8)>);

impl SoundingNotes {
  pub fn track(&mut self, data: &[u8]) {
    if let (Some(note), Some(channel)) = (get_note(data), get_channel(data)) {
      if is_note_on(data) {
        self.0.insert((channel, note));
      } else if is_note_off(data) {
        self.0.remove(&(channel, note)); }}}

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// A note-off for every sounding note, lowest channel and note first.
  pub fn releases(&self) -> Vec<[u8; 3]> {
    self.0.iter().map(|&(channel, note)| note_off(channel, note)).collect() }
}
