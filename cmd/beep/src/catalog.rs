//! Built-in ringtones.

/// A named RTTTL string.
pub struct Ringtone {
    /// Lookup id, as shown by `beep list`.
    pub id: &'static str,
    pub rtttl: &'static str,
}

/// All built-in ringtones.
pub static RINGTONES: &[Ringtone] = &[
    Ringtone {
        id: "tetris",
        rtttl: "tetris:d=4,o=5,b=160:e6,8b,8c6,d6,8c6,8b,a,8a,8c6,e6,8d6,8c6,b,8b,8c6,d6,e6,c6,a,2a,8p,d6,8f6,a6,8g6,8f6,e6,8e6,8c6,e6,8d6,8c6,b,8b,8c6,d6,e6,c6,a,a",
    },
    Ringtone {
        id: "nokia",
        rtttl: "nokia:d=4,o=5,b=180:8e6,8d6,f#,g#,8c#6,8b,d,e,8b,8a,c#,e,2a",
    },
    Ringtone {
        id: "scale",
        rtttl: "scale:d=8,o=5,b=120:c,d,e,f,g,a,b,c6",
    },
];

/// Returns a ringtone by its id.
pub fn by_id(id: &str) -> Option<&'static Ringtone> {
    RINGTONES.iter().find(|r| r.id == id)
}
