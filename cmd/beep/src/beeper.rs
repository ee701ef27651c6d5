//! Linux input-event beeper device.
//!
//! The PC-speaker driver exposes the beeper as an input event device.
//! A tone starts with an `EV_SND`/`SND_TONE` event carrying the
//! frequency as its value and stops with a zero value; `SND_BELL`
//! toggles the fixed bell sound instead.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use beeper_rtttl::ToneSink;
use tracing::debug;

const EV_SND: u16 = 0x12;
const SND_BELL: u16 = 0x01;
const SND_TONE: u16 = 0x02;

/// Size of `struct input_event` on 64-bit Linux.
const EVENT_SIZE: usize = 24;

/// A beeper behind `/dev/input/eventN`.
pub struct Beeper {
    dev: File,
}

impl Beeper {
    /// Opens input event device `N` for writing.
    pub fn open(event_num: u32) -> io::Result<Self> {
        let path = format!("/dev/input/event{event_num}");
        debug!("opening beeper device {path}");
        let dev = OpenOptions::new().write(true).open(&path)?;
        Ok(Self { dev })
    }

    fn send(&mut self, code: u16, value: i32) -> io::Result<()> {
        self.dev.write_all(&encode_event(EV_SND, code, value))
    }

    /// Rings the fixed bell sound for the duration.
    pub fn bell(&mut self, duration: Duration) -> io::Result<()> {
        self.send(SND_BELL, 1)?;
        thread::sleep(duration);
        self.send(SND_BELL, 0)
    }
}

impl ToneSink for Beeper {
    fn emit(&mut self, freq_hz: u32, duration: Duration) -> io::Result<()> {
        self.send(SND_TONE, freq_hz as i32)?;
        thread::sleep(duration);
        self.send(SND_TONE, 0)
    }
}

/// Encodes a `struct input_event` (64-bit layout: 16 bytes of
/// timestamp the kernel fills in, then type, code and value).
fn encode_event(kind: u16, code: u16, value: i32) -> [u8; EVENT_SIZE] {
    let mut buf = [0u8; EVENT_SIZE];
    buf[16..18].copy_from_slice(&kind.to_ne_bytes());
    buf[18..20].copy_from_slice(&code.to_ne_bytes());
    buf[20..24].copy_from_slice(&value.to_ne_bytes());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_event_layout() {
        let buf = encode_event(EV_SND, SND_TONE, 440);
        assert_eq!(buf.len(), EVENT_SIZE);
        assert_eq!(&buf[..16], &[0u8; 16]);
        assert_eq!(u16::from_ne_bytes([buf[16], buf[17]]), EV_SND);
        assert_eq!(u16::from_ne_bytes([buf[18], buf[19]]), SND_TONE);
        assert_eq!(
            i32::from_ne_bytes([buf[20], buf[21], buf[22], buf[23]]),
            440
        );
    }

    #[test]
    fn test_silence_event_is_zero_valued() {
        let buf = encode_event(EV_SND, SND_TONE, 0);
        assert_eq!(&buf[20..24], &[0u8; 4]);
    }
}
