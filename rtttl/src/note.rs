//! Decoding of a single RTTTL note token.
//!
//! A token reads `[duration]letter[#][.][octave]`, for example `8f#6`
//! or `2p.`. Each segment is optional except the letter; missing
//! segments fall back to the melody defaults.

use std::iter::Peekable;
use std::str::Chars;
use std::time::Duration;

use crate::defaults::Defaults;
use crate::error::NoteError;
use crate::pitch;

/// One playable tone. A frequency of zero is a rest: silence held for
/// the full duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneEvent {
    /// Frequency in Hz, zero for a rest.
    pub freq_hz: u32,
    /// How long the tone (or silence) is held.
    pub duration: Duration,
}

impl ToneEvent {
    /// Returns true if this event is a rest.
    pub fn is_rest(&self) -> bool {
        self.freq_hz == 0
    }
}

/// Decodes one note token against the melody defaults.
///
/// Pure function: the same token and defaults always yield the same
/// event. Structural violations come back as [`NoteError`]; callers
/// are expected to skip the token and carry on with the next one.
pub fn decode_note(token: &str, defaults: &Defaults) -> Result<ToneEvent, NoteError> {
    let mut cursor = token.chars().peekable();

    let code = match parse_duration_code(&mut cursor)? {
        Some(code) => code,
        None => u64::from(defaults.duration),
    };
    let whole_ms = defaults.whole_note().as_millis() as u64;
    let mut duration_us = whole_ms * 1000 / code;

    let letter = match cursor.next() {
        Some(c) => c.to_ascii_lowercase(),
        None => return Err(NoteError::Empty),
    };

    let sharp = cursor.peek() == Some(&'#');
    if sharp {
        cursor.next();
    }

    // Sharps land certain letters in a different absolute column, not
    // a uniform +1: B# and E# stay on B and E (enharmonic with C and F).
    let column = match (letter, sharp) {
        ('p', _) => None,
        ('c', false) => Some(0),
        ('c', true) => Some(1),
        ('d', false) => Some(2),
        ('d', true) => Some(3),
        ('e', _) => Some(4),
        ('f', false) => Some(5),
        ('f', true) => Some(6),
        ('g', false) => Some(7),
        ('g', true) => Some(8),
        ('a', false) => Some(9),
        ('a', true) => Some(10),
        ('b', _) => Some(11),
        (other, _) => return Err(NoteError::InvalidLetter(other)),
    };

    if cursor.peek() == Some(&'.') {
        cursor.next();
        duration_us += duration_us / 2;
    }

    let octave = match cursor.next() {
        None => defaults.octave,
        Some(c @ '4'..='7') => {
            if cursor.next().is_some() {
                return Err(NoteError::InvalidOctave);
            }
            c as u8 - b'0'
        }
        Some(_) => return Err(NoteError::InvalidOctave),
    };

    let freq_hz = match column {
        Some(column) => u32::from(pitch::lookup(octave, column)),
        None => 0,
    };

    Ok(ToneEvent {
        freq_hz,
        duration: Duration::from_micros(duration_us),
    })
}

/// Reads an optional leading duration code. `1` may continue into `16`;
/// `3` must continue into `32`; any other leading digit is invalid.
fn parse_duration_code(cursor: &mut Peekable<Chars<'_>>) -> Result<Option<u64>, NoteError> {
    let first = match cursor.peek() {
        Some(c) if c.is_ascii_digit() => *c,
        _ => return Ok(None),
    };
    cursor.next();

    match first {
        '1' => {
            if cursor.peek() == Some(&'6') {
                cursor.next();
                Ok(Some(16))
            } else {
                Ok(Some(1))
            }
        }
        '3' => {
            if cursor.peek() == Some(&'2') {
                cursor.next();
                Ok(Some(32))
            } else {
                Err(NoteError::InvalidDuration)
            }
        }
        '2' => Ok(Some(2)),
        '4' => Ok(Some(4)),
        '8' => Ok(Some(8)),
        _ => Err(NoteError::InvalidDuration),
    }
}
