//! `beep tone` - a single beep.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use beeper_rtttl::ToneSink;

use crate::Cli;
use crate::beeper::Beeper;

/// Make a single beep of the given tone and duration.
#[derive(Args, Debug)]
pub struct ToneCommand {
    /// Beep frequency in Hz (the fixed bell sound when omitted)
    #[arg(short, long)]
    pub freq: Option<u32>,

    /// Duration in milliseconds
    #[arg(short, long, default_value_t = 200)]
    pub duration: u64,
}

impl ToneCommand {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let mut beeper = Beeper::open(cli.event)
            .with_context(|| format!("failed to open /dev/input/event{}", cli.event))?;
        let duration = Duration::from_millis(self.duration);

        match self.freq {
            Some(freq) => beeper.emit(freq, duration)?,
            None => beeper.bell(duration)?,
        }
        Ok(())
    }
}
