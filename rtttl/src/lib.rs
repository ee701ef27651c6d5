//! RTTTL (RingTone Text Transfer Language) decoding and playback.
//!
//! This crate turns a compact ringtone string such as
//! `"scale:d=8,o=5,b=120:c,d,e,f,g,a,b,c6"` into a sequence of
//! (frequency, duration) tone events and feeds them to a [`ToneSink`]:
//!
//! - `defaults`: the `key=value` header carrying the melody-wide
//!   octave, duration code and tempo
//! - `note`: decoding of a single note token into a [`ToneEvent`]
//! - `pitch`: the fixed octave/semitone frequency table
//! - `player`: sequential playback over an abstract sink
//!
//! # Example
//!
//! ```rust
//! use beeper_rtttl::decode;
//!
//! let events = decode("demo:d=4,o=5,b=120:c,8p,8e").unwrap();
//! assert_eq!(events.len(), 3);
//! assert_eq!(events[0].freq_hz, 523);
//! assert!(events[1].is_rest());
//! ```

pub mod defaults;
pub mod error;
pub mod note;
pub mod pitch;
pub mod player;

pub use defaults::Defaults;
pub use error::{Error, NoteError, Result};
pub use note::{ToneEvent, decode_note};
pub use player::{MAX_TOKEN_LEN, ToneSink, decode, play};
