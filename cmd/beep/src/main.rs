//! beep - play tones and RTTTL melodies on the Linux beeper.

use clap::{Parser, Subcommand};

mod beeper;
mod catalog;
mod commands;

use commands::{ListCommand, PlayCommand, ToneCommand};

/// Beeper CLI.
///
/// Sends sound events to a beeper behind a Linux input event device
/// (`/dev/input/eventN`), either as a single tone or as an RTTTL
/// ringtone melody.
#[derive(Parser)]
#[command(name = "beep")]
#[command(about = "Play tones and RTTTL melodies on the beeper")]
#[command(version)]
pub struct Cli {
    /// Input event number of the beeper device (/dev/input/eventN)
    #[arg(short = 'e', long, global = true, default_value_t = 0)]
    pub event: u32,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Make a single beep
    Tone(ToneCommand),
    /// Play an RTTTL melody
    Play(PlayCommand),
    /// List built-in ringtones
    List(ListCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; skipped-note warnings show by default
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match &cli.command {
        Commands::Tone(cmd) => cmd.run(&cli),
        Commands::Play(cmd) => cmd.run(&cli),
        Commands::List(cmd) => cmd.run(),
    }
}
