//! Metamorphosis - plays a freshly composed piece on a MIDI output
//!
//! # USAGE
//! ```sh
//! cargo run --bin metamorphosis -- --virtual
//! cargo run --bin metamorphosis -- --port 1 --seed 42
//! cargo run --bin metamorphosis -- --dry-run -v
//! ```
//! Without `--virtual`, `--port` or `--dry-run` it asks on the console
//! which port to use. `--list` shows the output ports and exits.

use std::io;
use std::time::Duration;

use clap::Parser;
use log::{error, info};
use midir::{MidiOutput, MidiOutputConnection};

use metamorphosis::config::{Settings, EIGHTH_NOTE_MS};
use metamorphosis::piece::{compose, Piece};
use metamorphosis::player::{play, Performance};
use metamorphosis::random;
use metamorphosis::transport::{
  self, DryRun, NoPacer, PortChoice, ThreadPacer, CLIENT_NAME};
use metamorphosis::Error;

#[derive(Debug, Parser)]
#[command(name = "metamorphosis", version,
          about = "Composes a minimalist piano piece and plays it over MIDI")]
struct Cli {
  /// Open a virtual output port instead of an existing one
  #[arg(long = "virtual", conflicts_with = "port")]
  virtual_port: bool,

  /// Index of the output port to open (see --list)
  #[arg(short, long)]
  port: Option<usize>,

  /// List the available output ports and exit
  #[arg(short, long)]
  list: bool,

  /// Seed for the random choices (same seed => same piece)
  #[arg(long)]
  seed: Option<u64>,

  /// Length of an eighth-note slot in milliseconds
  #[arg(long, default_value_t = EIGHTH_NOTE_MS)]
  eighth_ms: u64,

  /// Log the messages instead of sending them, without waiting
  #[arg(long)]
  dry_run: bool,

  /// Send note-offs for every note still ringing when the piece ends
  #[arg(long)]
  release: bool,

  /// More output per occurrence (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let cli: Cli = Cli::parse();
  let level: log::Level = match cli.verbose {
    0 => log::Level::Info,
    1 => log::Level::Debug,
    _ => log::Level::Trace, };
  simple_logger::init_with_level(level)?;

  if cli.list {
    return list_ports(); }

  let settings: Settings = Settings {
    eighth_note: Duration::from_millis(cli.eighth_ms),
    release_at_end: cli.release, };

  if cli.dry_run {
    let piece: Piece = compose(&mut random::source(cli.seed), &settings)?;
    let mut dry: DryRun = DryRun::default();
    play(&piece, &mut dry, &mut NoPacer, settings.release_at_end)?;
    return Ok(()); }

  // No ports is reported either while choosing or while opening.
  let mut conn: MidiOutputConnection = match choose_port(&cli).and_then(transport::open) {
    Ok(conn) => conn,
    Err(Error::NoPortsAvailable) => {
      error!("No output ports available!");
      return Ok(()); }
    Err(e) => return Err(e.into()), };

  let piece: Piece = compose(&mut random::source(cli.seed), &settings)?;
  let performance: Performance =
    play(&piece, &mut conn, &mut ThreadPacer, settings.release_at_end)?;
  info!("Sent {} messages", performance.messages);
  conn.close();
  Ok(()) }

fn choose_port(cli: &Cli) -> metamorphosis::Result<PortChoice> {
  if cli.virtual_port {
    return Ok(PortChoice::Virtual); }
  if let Some(index) = cli.port {
    return Ok(PortChoice::Index(index)); }
  let midi_out: MidiOutput = MidiOutput::new(CLIENT_NAME)?;
  let names: Vec<String> = transport::list_ports(&midi_out)?
    .into_iter()
    .map(|(_, name)| name)
    .collect();
  let stdin: io::Stdin = io::stdin();
  transport::prompt_for_port(&names, &mut stdin.lock(), &mut io::stdout()) }

fn list_ports() -> Result<(), Box<dyn std::error::Error>> {
  let midi_out: MidiOutput = MidiOutput::new(CLIENT_NAME)?;
  let ports: Vec<(usize, String)> = transport::list_ports(&midi_out)?;
  if ports.is_empty() {
    println!("No output ports available!"); }
  for (i, name) in ports {
    println!("  Output port #{}: {}", i, name); }
  Ok(()) }
