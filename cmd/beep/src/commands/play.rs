//! `beep play` - RTTTL melody playback.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::Cli;
use crate::beeper::Beeper;
use crate::catalog;

/// Play an RTTTL melody on the beeper.
#[derive(Args, Debug)]
pub struct PlayCommand {
    /// RTTTL melody string
    pub melody: Option<String>,

    /// Read the melody from a file
    #[arg(short = 'f', long, conflicts_with = "melody")]
    pub file: Option<PathBuf>,

    /// Play a built-in ringtone by id (see `beep list`)
    #[arg(long, conflicts_with_all = ["melody", "file"])]
    pub id: Option<String>,

    /// Decode and print the tone events instead of playing them
    #[arg(long)]
    pub dry_run: bool,
}

impl PlayCommand {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let melody = self.melody()?;

        if self.dry_run {
            for event in beeper_rtttl::decode(&melody)? {
                if event.is_rest() {
                    println!("  rest    {:>9} us", event.duration.as_micros());
                } else {
                    println!("{:>5} Hz  {:>9} us", event.freq_hz, event.duration.as_micros());
                }
            }
            return Ok(());
        }

        let mut beeper = Beeper::open(cli.event)
            .with_context(|| format!("failed to open /dev/input/event{}", cli.event))?;
        beeper_rtttl::play(&mut beeper, &melody)?;
        Ok(())
    }

    fn melody(&self) -> Result<String> {
        if let Some(melody) = &self.melody {
            return Ok(melody.clone());
        }
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            return Ok(text.trim().to_string());
        }
        if let Some(id) = &self.id {
            return match catalog::by_id(id) {
                Some(tone) => Ok(tone.rtttl.to_string()),
                None => bail!("unknown ringtone {id:?}, try `beep list`"),
            };
        }
        bail!("no melody given: pass an RTTTL string, --file or --id")
    }
}
