#![doc = r#"
Symbolic pitch handling.

Builder helpers accept anything convertible to a [`Pitch`]: a raw data byte,
an existing `Pitch`, or a note name such as `"c4"`, `"f#2"`, or `"bb1"`.
Note names follow `[a-g](#+|b+)?[0-9]+` (case-insensitive letter, optional
run of sharps or flats, required octave number); middle C is `"c4"` = 60.
"#]

use crate::PitchError;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Base pitches for the seven note letters, octave zero.
const LETTER_PITCHES: [u8; 7] = [21, 23, 12, 14, 16, 17, 19];

/// Sharp-spelled names within one octave, starting at C.
const SHARP_NAMES: [&str; 12] = [
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b",
];

#[doc = r#"
A numeric MIDI pitch.

Pitches are interpreted as a 7-bit number: `0` is `C(-1)` and `127` is `G9`.
Construction checks for a leading zero bit.

# Example
```rust
# use midgen::prelude::*;
let pitch = Pitch::from_name("c#3")?;
assert_eq!(pitch.byte(), 49);
assert_eq!(pitch.name()?, "c#3");
# Ok::<(), midgen::PitchError>(())
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pitch(u8);

impl Pitch {
    /// Middle C, `"c4"`.
    pub const MIDDLE_C: Self = Self(60);

    /// Create a new pitch.
    ///
    /// # Errors
    /// if `byte` is greater than 127.
    pub const fn new(byte: u8) -> Result<Self, PitchError> {
        if byte > 127 {
            return Err(PitchError::OutOfRange(byte as i64));
        }
        Ok(Self(byte))
    }

    /// Creates a new pitch without checking the leading bit.
    pub const fn new_unchecked(byte: u8) -> Self {
        Self(byte)
    }

    /// Resolve a note name such as `"c4"`, `"A#0"` or `"ebb2"`.
    ///
    /// The letter contributes a base pitch (`a` = 21, `b` = 23, `c` = 12,
    /// `d` = 14, `e` = 16, `f` = 17, `g` = 19), each octave adds 12, and
    /// every sharp raises or flat lowers the result by one.
    ///
    /// # Errors
    /// if the input does not match `[a-g](#+|b+)?[0-9]+`, or the result
    /// falls outside `0..=127`.
    pub fn from_name(name: &str) -> Result<Self, PitchError> {
        let invalid = || PitchError::InvalidNoteName(name.to_string());
        let bytes = name.as_bytes();

        let (&letter, rest) = bytes.split_first().ok_or_else(invalid)?;
        let base = match letter.to_ascii_lowercase() {
            l @ b'a'..=b'g' => LETTER_PITCHES[(l - b'a') as usize],
            _ => return Err(invalid()),
        };

        let marker = rest.first().map(u8::to_ascii_lowercase);
        let (offset, digits) = match marker {
            Some(m @ (b'#' | b'b')) => {
                let run = rest
                    .iter()
                    .take_while(|b| b.to_ascii_lowercase() == m)
                    .count();
                let sign = if m == b'#' { 1 } else { -1 };
                (sign * run as i64, &rest[run..])
            }
            _ => (0, rest),
        };

        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let octave: i64 = core::str::from_utf8(digits)
            .map_err(|_| invalid())?
            .parse()
            .map_err(|_| invalid())?;

        let pitch = 12 * octave + i64::from(base) + offset;
        if !(0..=127).contains(&pitch) {
            return Err(PitchError::OutOfRange(pitch));
        }
        Ok(Self(pitch as u8))
    }

    /// The underlying data byte.
    pub const fn byte(&self) -> u8 {
        self.0
    }

    /// The sharp-spelled note name, e.g. `"a#1"` for 34.
    ///
    /// # Errors
    /// for pitches below 12, which have no symbolic spelling.
    pub fn name(&self) -> Result<String, PitchError> {
        if self.0 < 12 {
            return Err(PitchError::Unnamed(self.0));
        }
        let octave = self.0 / 12 - 1;
        let mut name = String::from(SHARP_NAMES[(self.0 % 12) as usize]);
        name.push(char::from(b'0' + octave));
        Ok(name)
    }

    /// The flat-spelled note name, e.g. `"bb1"` for 34.
    ///
    /// Natural notes keep their plain spelling.
    ///
    /// # Errors
    /// for pitches below 12, which have no symbolic spelling.
    pub fn flat_name(&self) -> Result<String, PitchError> {
        let sharp = self.name()?;
        let flat = match &sharp[..sharp.len() - 1] {
            "a#" => "bb",
            "c#" => "db",
            "d#" => "eb",
            "f#" => "gb",
            "g#" => "ab",
            other => other,
        };
        let mut name = String::from(flat);
        name.push_str(&sharp[sharp.len() - 1..]);
        Ok(name)
    }
}

impl TryFrom<u8> for Pitch {
    type Error = PitchError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::new(byte)
    }
}

impl TryFrom<&str> for Pitch {
    type Error = PitchError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name)
    }
}

impl FromStr for Pitch {
    type Err = PitchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Ok(name) => f.write_str(&name),
            Err(_) => self.0.fmt(f),
        }
    }
}

#[test]
fn natural_notes() {
    use pretty_assertions::assert_eq;
    for (name, pitch) in [
        ("a1", 33),
        ("b2", 47),
        ("c3", 48),
        ("c4", 60),
        ("d4", 62),
        ("e5", 76),
        ("f6", 89),
        ("g7", 103),
    ] {
        assert_eq!(Pitch::from_name(name).unwrap().byte(), pitch);
    }
}

#[test]
fn accidentals() {
    use pretty_assertions::assert_eq;
    assert_eq!(Pitch::from_name("c#3").unwrap().byte(), 49);
    assert_eq!(Pitch::from_name("f#6").unwrap().byte(), 90);
    assert_eq!(Pitch::from_name("bb1").unwrap().byte(), 34);
    assert_eq!(Pitch::from_name("eb4").unwrap().byte(), 63);
    // unconventional but well-formed spellings
    assert_eq!(Pitch::from_name("fb4").unwrap().byte(), 64);
    assert_eq!(Pitch::from_name("e#4").unwrap().byte(), 65);
    // spellings that cross an octave boundary
    assert_eq!(Pitch::from_name("b#2").unwrap().byte(), 48);
    assert_eq!(Pitch::from_name("cb3").unwrap().byte(), 47);
    // double accidentals
    assert_eq!(Pitch::from_name("c##4").unwrap().byte(), 62);
    assert_eq!(Pitch::from_name("ebb4").unwrap().byte(), 62);
}

#[test]
fn case_insensitive() {
    use pretty_assertions::assert_eq;
    assert_eq!(Pitch::from_name("C4").unwrap(), Pitch::MIDDLE_C);
    assert_eq!(Pitch::from_name("A4").unwrap().byte(), 69);
}

#[test]
fn rejects_malformed_names() {
    assert!(Pitch::from_name("xyz").is_err());
    assert!(Pitch::from_name("").is_err());
    assert!(Pitch::from_name("c").is_err());
    assert!(Pitch::from_name("c#").is_err());
    assert!(Pitch::from_name("c#b4").is_err());
    assert!(Pitch::from_name("h4").is_err());
    assert!(Pitch::from_name("c4x").is_err());
}

#[test]
fn rejects_out_of_range_names() {
    use pretty_assertions::assert_eq;
    // "cb0" lands on 11: in range, merely unnamed
    assert_eq!(Pitch::from_name("cb0").unwrap().byte(), 11);
    assert_eq!(
        Pitch::from_name("c20").unwrap_err(),
        PitchError::OutOfRange(252)
    );
    assert_eq!(
        Pitch::from_name("cbbbbbbbbbbbbb0").unwrap_err(),
        PitchError::OutOfRange(-1)
    );
    assert_eq!(
        Pitch::from_name("g99999999999999999999").unwrap_err(),
        PitchError::InvalidNoteName("g99999999999999999999".into())
    );
}

#[test]
fn names_from_pitches() {
    use pretty_assertions::assert_eq;
    for (pitch, name) in [
        (33u8, "a1"),
        (47, "b2"),
        (48, "c3"),
        (49, "c#3"),
        (62, "d4"),
        (76, "e5"),
        (90, "f#6"),
        (104, "g#7"),
        (12, "c0"),
        (21, "a0"),
    ] {
        assert_eq!(Pitch::new(pitch).unwrap().name().unwrap(), name);
    }
}

#[test]
fn flat_names() {
    use pretty_assertions::assert_eq;
    assert_eq!(Pitch::new(34).unwrap().name().unwrap(), "a#1");
    assert_eq!(Pitch::new(34).unwrap().flat_name().unwrap(), "bb1");
    assert_eq!(Pitch::new(63).unwrap().flat_name().unwrap(), "eb4");
    assert_eq!(Pitch::new(60).unwrap().flat_name().unwrap(), "c4");
}

#[test]
fn unnamed_below_first_octave() {
    assert_eq!(Pitch::new(11).unwrap().name().unwrap_err(), PitchError::Unnamed(11));
}

#[test]
fn leading_bit_checked() {
    assert!(Pitch::new(127).is_ok());
    assert_eq!(Pitch::new(128).unwrap_err(), PitchError::OutOfRange(128));
}
