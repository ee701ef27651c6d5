//! Sequential melody playback over an abstract tone sink.
//!
//! Playback is single-threaded and paced in real time: the sink holds
//! each tone for its full duration before the next token is even
//! looked at, and a quarter of the note's duration separates notes.

use std::io;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::note::{ToneEvent, decode_note};

/// Longest accepted note token. A longer token aborts the melody.
pub const MAX_TOKEN_LEN: usize = 31;

/// Output capability for tone events.
///
/// The sink owns the timing: `emit` holds the tone for the full
/// duration before returning, then silences the output.
pub trait ToneSink {
    /// Holds `freq_hz` on the output for `duration`, then silences it.
    /// A frequency of zero produces no sound for the duration.
    fn emit(&mut self, freq_hz: u32, duration: Duration) -> io::Result<()>;

    /// Stays silent between notes. The default implementation blocks
    /// the calling thread.
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Splits a melody string into name, defaults section and note list.
/// The name may be empty, but both colons must be present.
fn split_melody(melody: &str) -> Result<(&str, &str, &str)> {
    let mut parts = melody.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(header), Some(notes)) => Ok((name.trim(), header, notes)),
        _ => Err(Error::MissingDefaults),
    }
}

/// Walks the note list left to right, one token at a time. Tokens that
/// fail to decode are logged and dropped; an oversized token surfaces
/// as a fatal error.
fn events<'a>(
    notes: &'a str,
    defaults: &'a Defaults,
) -> impl Iterator<Item = Result<ToneEvent>> + 'a {
    notes
        .split(',')
        .map(str::trim)
        .enumerate()
        .filter_map(move |(i, token)| {
            if token.len() > MAX_TOKEN_LEN {
                return Some(Err(Error::TokenTooLong {
                    index: i + 1,
                    len: token.len(),
                    limit: MAX_TOKEN_LEN,
                }));
            }
            match decode_note(token, defaults) {
                Ok(event) => Some(Ok(event)),
                Err(e) => {
                    warn!("skipping note {}: {e}", i + 1);
                    None
                }
            }
        })
}

/// Plays a full RTTTL melody on the given sink.
///
/// The header is parsed once; notes are then decoded and emitted one
/// at a time, each followed by an inter-note gap of a quarter of its
/// duration. A note that fails to decode is skipped with a warning;
/// only header, token-length and sink errors abort the melody.
pub fn play<S: ToneSink>(sink: &mut S, melody: &str) -> Result<()> {
    let (name, header, notes) = split_melody(melody)?;
    let defaults = Defaults::parse(header)?;
    debug!(
        "playing {name:?}: o={} d={} b={}",
        defaults.octave, defaults.duration, defaults.tempo
    );

    for event in events(notes, &defaults) {
        let event = event?;
        sink.emit(event.freq_hz, event.duration)?;
        sink.pause(event.duration / 4);
    }
    Ok(())
}

/// Decodes a melody into its full event sequence without playing it.
///
/// Emission order and the skip-on-bad-note policy match [`play`];
/// useful for inspecting a melody or driving a sink separately.
pub fn decode(melody: &str) -> Result<Vec<ToneEvent>> {
    let (_, header, notes) = split_melody(melody)?;
    let defaults = Defaults::parse(header)?;
    events(notes, &defaults).collect()
}
