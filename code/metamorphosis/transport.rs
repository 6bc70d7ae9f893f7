//! Where the notes go, and how the player waits between slots.
//!
//! # Finding the port
//! With `--virtual` a virtual output port named 'metamorphosis:out' is
//! created (ALSA/JACK). Look for it with `aconnect -l` and connect it to
//! a synth, e.g. `aconnect 128:0 129:0`. Otherwise an existing output
//! port is opened, by index or by asking on the console.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use log::{info, trace};
use midir::{MidiOutput, MidiOutputConnection, MidiOutputPort};

use crate::error::{Error, Result};

pub const CLIENT_NAME: &str = "metamorphosis";
pub const PORT_NAME: &str = "out";

pub trait Transport {
  fn send(&mut self, message: &[u8]) -> Result<()>;
}

impl Transport for MidiOutputConnection {
  fn send(&mut self, message: &[u8]) -> Result<()> {
    trace!("send {:?}", message);
    MidiOutputConnection::send(self, message)?;
    Ok(()) }}

/// Logs every message instead of sending it.
#[derive(Debug, Default)]
pub struct DryRun {
  pub sent: usize,
}

impl Transport for DryRun {
  fn send(&mut self, message: &[u8]) -> Result<()> {
    self.sent += 1;
    info!("[dry run] {:?}", message);
    Ok(()) }}

pub trait Pacer {
  fn wait(&mut self, duration: Duration);
}

/// Sleeps the calling thread. Resolution is whatever the OS gives.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
  fn wait(&mut self, duration: Duration) {
    thread::sleep(duration); }}

/// Does not wait at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
  fn wait(&mut self, _duration: Duration) {}}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortChoice {
  Virtual,
  Index(usize),
}

/// Index and name of every output port currently available.
pub fn list_ports(midi_out: &MidiOutput) -> Result<Vec<(usize, String)>> {
  midi_out
    .ports()
    .iter()
    .enumerate()
    .map(|(i, port)| -> Result<(usize, String)> {
      Ok((i, midi_out.port_name(port)?)) })
    .collect() }

/// Asks whether to open a virtual port and, if not, which existing one.
/// A single port is opened without asking; an index out of range is
/// asked for again.
pub fn prompt_for_port<R: BufRead, W: Write>(
  names: &[String],
  input: &mut R,
  out: &mut W,
) -> Result<PortChoice> {
  write!(out, "\nWould you like to open a virtual output port? [y/N] ")?;
  out.flush()?;
  let answer: String = read_line(input)?;
  if answer.trim() == "y" {
    return Ok(PortChoice::Virtual); }

  match names.len() {
    0 => Err(Error::NoPortsAvailable),
    1 => {
      writeln!(out, "\nOpening {}", names[0])?;
      Ok(PortChoice::Index(0)) }
    count => {
      for (i, name) in names.iter().enumerate() {
        writeln!(out, "  Output port #{}: {}", i, name)?; }
      loop {
        write!(out, "\nChoose a port number: ")?;
        out.flush()?;
        if let Ok(i) = read_line(input)?.trim().parse::<usize>() {
          if i < count {
            return Ok(PortChoice::Index(i)); }}}}}}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
  let mut line: String = String::new();
  if input.read_line(&mut line)? == 0 {
    return Err(std::io::Error::new(
      std::io::ErrorKind::UnexpectedEof,
      "console closed while choosing a port").into()); }
  Ok(line) }

/// The port at `index`, telling apart "there are none" from "not that one".
pub fn port_at<T>(ports: &[T], index: usize) -> Result<&T> {
  if ports.is_empty() {
    return Err(Error::NoPortsAvailable); }
  ports.get(index).ok_or(Error::NoSuchPort { index, count: ports.len() }) }

/// Opens the chosen port on a fresh MIDI client.
pub fn open(choice: PortChoice) -> Result<MidiOutputConnection> {
  let midi_out: MidiOutput = MidiOutput::new(CLIENT_NAME)?;
  match choice {
    PortChoice::Virtual => open_virtual(midi_out),
    PortChoice::Index(index) => {
      let ports: Vec<MidiOutputPort> = midi_out.ports();
      let port: &MidiOutputPort = port_at(&ports, index)?;
      let name: String = midi_out.port_name(port)?;
      let conn: MidiOutputConnection = midi_out
        .connect(port, PORT_NAME)
        .map_err(|e| Error::PortOpen(e.to_string()))?;
      info!("Opened output port #{}: {}", index, name);
      Ok(conn) }}}

#[cfg(unix)]
fn open_virtual(midi_out: MidiOutput) -> Result<MidiOutputConnection> {
  use midir::os::unix::VirtualOutput;
  let conn: MidiOutputConnection = midi_out
    .create_virtual(PORT_NAME)
    .map_err(|e| Error::PortOpen(e.to_string()))?;
  info!("Created virtual MIDI port '{}:{}'", CLIENT_NAME, PORT_NAME);
  Ok(conn) }

#[cfg(not(unix))]
fn open_virtual(_midi_out: MidiOutput) -> Result<MidiOutputConnection> {
  Err(Error::PortOpen("virtual ports are only available on unix".to_string())) }
