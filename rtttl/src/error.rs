//! Error types for RTTTL decoding and playback.

use thiserror::Error;

/// Result type for melody-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal melody errors. Any of these aborts the whole melody.
#[derive(Error, Debug)]
pub enum Error {
    /// The melody string has no defaults section (no second `:`).
    #[error("missing defaults section")]
    MissingDefaults,

    /// A defaults key is not a single letter.
    #[error("invalid defaults key {0:?}")]
    InvalidKey(char),

    /// A required defaults key (`o`, `d` or `b`) is absent.
    #[error("missing required defaults key {0:?}")]
    MissingKey(char),

    /// Default octave outside 4..=7.
    #[error("octave {0} out of range (4-7)")]
    InvalidOctave(u32),

    /// Default duration not one of 1, 2, 4, 8, 16, 32.
    #[error("duration {0} is not a valid note value")]
    InvalidDuration(u32),

    /// Tempo outside 40..=200 beats per minute.
    #[error("tempo {0} out of range (40-200)")]
    InvalidTempo(u32),

    /// A note token exceeds the working-buffer limit.
    #[error("note {index} is {len} characters long (limit {limit})")]
    TokenTooLong {
        index: usize,
        len: usize,
        limit: usize,
    },

    /// The sink failed to accept a tone event.
    #[error("sink error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors local to a single note token. A note that fails to decode is
/// skipped with a warning; playback continues with the next token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteError {
    /// The token is empty or ends before the note letter.
    #[error("empty or truncated note")]
    Empty,

    /// The duration prefix does not form one of 1, 2, 4, 8, 16, 32.
    #[error("invalid duration prefix")]
    InvalidDuration,

    /// The note letter is outside `a`-`g` and `p`.
    #[error("unknown note letter {0:?}")]
    InvalidLetter(char),

    /// The octave suffix is not a single digit in 4..=7.
    #[error("invalid octave suffix")]
    InvalidOctave,
}
