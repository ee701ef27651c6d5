//! The melody-wide defaults header.
//!
//! An RTTTL string opens with `name:key=value,key=value:`; the middle
//! section carries the default octave (`o`), the default duration code
//! (`d`) and the tempo in beats per minute (`b`), in any order.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Longest run of value digits read from a defaults pair. Further
/// digits are dropped, capping values at 999.
const MAX_VALUE_DIGITS: usize = 3;

/// Validated melody-wide defaults. Computed once per melody and
/// read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// Default octave, 4..=7.
    pub octave: u8,
    /// Default duration code: 1, 2, 4, 8, 16 or 32.
    pub duration: u8,
    /// Tempo in beats per minute, 40..=200.
    pub tempo: u32,
}

impl Defaults {
    /// Parses the defaults section (the text between the first and
    /// second `:` of a melody string).
    ///
    /// Unknown single-letter keys are accepted and ignored; a repeated
    /// key keeps its first value. All three of `o`, `d` and `b` must be
    /// present and in range.
    pub fn parse(section: &str) -> Result<Self> {
        let mut octave = None;
        let mut duration = None;
        let mut tempo = None;

        for pair in section.split(',') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (key, value) = parse_pair(pair)?;
            let slot = match key {
                'o' => &mut octave,
                'd' => &mut duration,
                'b' => &mut tempo,
                _ => {
                    debug!("ignoring unknown defaults key {key:?}");
                    continue;
                }
            };
            if slot.is_some() {
                warn!("defaults key {key:?} given twice, keeping the first value");
            } else {
                *slot = Some(value);
            }
        }

        let octave = octave.ok_or(Error::MissingKey('o'))?;
        let duration = duration.ok_or(Error::MissingKey('d'))?;
        let tempo = tempo.ok_or(Error::MissingKey('b'))?;

        if !(4..=7).contains(&octave) {
            return Err(Error::InvalidOctave(octave));
        }
        if !matches!(duration, 1 | 2 | 4 | 8 | 16 | 32) {
            return Err(Error::InvalidDuration(duration));
        }
        if !(40..=200).contains(&tempo) {
            return Err(Error::InvalidTempo(tempo));
        }

        Ok(Self {
            octave: octave as u8,
            duration: duration as u8,
            tempo,
        })
    }

    /// Duration of a whole note at this tempo: four quarter notes, one
    /// quarter note per beat.
    pub fn whole_note(&self) -> Duration {
        Duration::from_millis(u64::from(240_000 / self.tempo))
    }
}

/// Splits one `key=value` pair. The key is a single letter (folded to
/// lowercase); the value keeps at most its first [`MAX_VALUE_DIGITS`]
/// digits, anything after them is dropped.
fn parse_pair(pair: &str) -> Result<(char, u32)> {
    let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
    let key = key.trim();
    let value = value.trim();

    let mut key_chars = key.chars();
    let key = match key_chars.next() {
        Some(c) if c.is_ascii_alphabetic() && key_chars.next().is_none() => c.to_ascii_lowercase(),
        Some(c) => return Err(Error::InvalidKey(c)),
        None => return Err(Error::InvalidKey('=')),
    };

    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    if digits.len() > MAX_VALUE_DIGITS {
        debug!("defaults value for {key:?} longer than {MAX_VALUE_DIGITS} digits, truncating");
    }
    let digits = &digits[..digits.len().min(MAX_VALUE_DIGITS)];
    let value = digits.parse().unwrap_or(0);

    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let defaults = Defaults::parse("d=4,o=5,b=120").unwrap();
        assert_eq!(
            defaults,
            Defaults {
                octave: 5,
                duration: 4,
                tempo: 120
            }
        );
    }

    #[test]
    fn test_parse_any_order_and_whitespace() {
        let defaults = Defaults::parse(" b = 63 , d = 8 , o = 4 ").unwrap();
        assert_eq!(defaults.octave, 4);
        assert_eq!(defaults.duration, 8);
        assert_eq!(defaults.tempo, 63);
    }

    #[test]
    fn test_parse_uppercase_keys() {
        let defaults = Defaults::parse("D=4,O=6,B=90").unwrap();
        assert_eq!(defaults.octave, 6);
        assert_eq!(defaults.tempo, 90);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let defaults = Defaults::parse("d=4,o=5,x=9,b=100,z=1").unwrap();
        assert_eq!(defaults.tempo, 100);
    }

    #[test]
    fn test_repeated_key_first_wins() {
        let defaults = Defaults::parse("d=4,d=8,o=5,b=100").unwrap();
        assert_eq!(defaults.duration, 4);
    }

    #[test]
    fn test_missing_keys() {
        assert!(matches!(
            Defaults::parse("d=4,b=100"),
            Err(Error::MissingKey('o'))
        ));
        assert!(matches!(
            Defaults::parse("o=5,b=100"),
            Err(Error::MissingKey('d'))
        ));
        assert!(matches!(
            Defaults::parse("o=5,d=4"),
            Err(Error::MissingKey('b'))
        ));
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(matches!(
            Defaults::parse("o=8,d=4,b=100"),
            Err(Error::InvalidOctave(8))
        ));
        assert!(matches!(
            Defaults::parse("o=5,d=3,b=100"),
            Err(Error::InvalidDuration(3))
        ));
        assert!(matches!(
            Defaults::parse("o=5,d=4,b=39"),
            Err(Error::InvalidTempo(39))
        ));
        assert!(matches!(
            Defaults::parse("o=5,d=4,b=201"),
            Err(Error::InvalidTempo(201))
        ));
    }

    #[test]
    fn test_non_letter_key_is_fatal() {
        assert!(matches!(
            Defaults::parse("4=4,o=5,b=100"),
            Err(Error::InvalidKey('4'))
        ));
        assert!(matches!(
            Defaults::parse("o=5,d=4,!=1,b=100"),
            Err(Error::InvalidKey('!'))
        ));
    }

    #[test]
    fn test_value_truncates_after_three_digits() {
        // b=1200 reads as 120, which is in range
        let defaults = Defaults::parse("o=5,d=4,b=1200").unwrap();
        assert_eq!(defaults.tempo, 120);
    }

    #[test]
    fn test_empty_value_is_out_of_range() {
        assert!(matches!(
            Defaults::parse("o=,d=4,b=100"),
            Err(Error::InvalidOctave(0))
        ));
    }

    #[test]
    fn test_whole_note_follows_tempo_exactly() {
        for tempo in 40u32..=200 {
            let defaults = Defaults::parse(&format!("o=5,d=4,b={tempo}")).unwrap();
            assert_eq!(
                defaults.whole_note(),
                Duration::from_millis(u64::from(240_000 / tempo))
            );
        }
    }

    #[test]
    fn test_whole_note_at_120_bpm() {
        let defaults = Defaults::parse("o=5,d=4,b=120").unwrap();
        assert_eq!(defaults.whole_note(), Duration::from_millis(2000));
    }
}
