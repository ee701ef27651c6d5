//! `beep list` - built-in ringtone listing.

use anyhow::Result;
use clap::Args;

use crate::catalog;

/// List the built-in ringtones.
#[derive(Args, Debug)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        for tone in catalog::RINGTONES {
            println!("{}", tone.id);
        }
        Ok(())
    }
}
