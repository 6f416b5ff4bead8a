#![doc = r#"
Variable-length quantity encoding for delta times.

Delta times in a track chunk are stored as a sequence of 7-bit groups, most
significant group first. Every byte except the last carries the continuation
bit (`0x80`); the MIDI specification caps the sequence at four bytes, so the
largest representable value is `0x0FFF_FFFF`.
"#]

use crate::EventError;
use alloc::vec::Vec;
use thiserror::Error;

/// Largest value representable in four variable-length bytes.
pub const MAX: u32 = (1 << 28) - 1;

/// Append the variable-length encoding of `value` to `out`.
///
/// Zero encodes as a single zero byte; no superfluous continuation groups
/// are produced.
///
/// # Example
/// ```rust
/// # use midgen::vlq;
/// let mut out = Vec::new();
/// vlq::encode_into(128, &mut out);
/// assert_eq!(out, [0x81, 0x00]);
/// ```
pub fn encode_into(value: u32, out: &mut Vec<u8>) {
    debug_assert!(value <= MAX);
    let mut started = false;
    for shift in [21u32, 14, 7] {
        let group = ((value >> shift) & 0x7F) as u8;
        if started || group != 0 {
            out.push(group | 0x80);
            started = true;
        }
    }
    out.push((value & 0x7F) as u8);
}

/// A malformed variable-length quantity.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VlqError {
    /// The input ended while the continuation bit was still set.
    #[error("Unterminated variable-length quantity")]
    Unterminated,
    /// More than four bytes carried the continuation bit.
    #[error("Variable-length quantity exceeds four bytes")]
    TooLong,
}

/// Decode a variable-length quantity from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode(bytes: &[u8]) -> Result<(u32, usize), VlqError> {
    let mut value = 0u32;
    for (i, &byte) in bytes.iter().enumerate() {
        if i == 4 {
            return Err(VlqError::TooLong);
        }
        value = (value << 7) | u32::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(VlqError::Unterminated)
}

#[doc = r#"
Ticks elapsed since the previous event in the same track.

The tick count is validated against the four-byte ceiling at construction,
so writing the encoding out later cannot fail.

# Example
```rust
# use midgen::prelude::*;
let delta = DeltaTime::new(96)?;
assert_eq!(delta.ticks(), 96);

assert!(DeltaTime::new(1 << 28).is_err());
# Ok::<(), midgen::EventError>(())
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaTime(u32);

impl DeltaTime {
    /// No ticks elapsed.
    pub const ZERO: Self = Self(0);

    /// Create a delta time from a tick count.
    ///
    /// # Errors
    /// if `ticks` does not fit in four variable-length bytes.
    pub const fn new(ticks: u32) -> Result<Self, EventError> {
        if ticks > MAX {
            return Err(EventError::DeltaTimeOverflow(ticks));
        }
        Ok(Self(ticks))
    }

    /// The tick count.
    pub const fn ticks(&self) -> u32 {
        self.0
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        encode_into(self.0, out);
    }
}

impl TryFrom<u32> for DeltaTime {
    type Error = EventError;

    fn try_from(ticks: u32) -> Result<Self, Self::Error> {
        Self::new(ticks)
    }
}

#[test]
fn encode_small_values() {
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    encode_into(0, &mut out);
    assert_eq!(out, [0x00]);

    out.clear();
    encode_into(16, &mut out);
    assert_eq!(out, [16]);

    out.clear();
    encode_into(127, &mut out);
    assert_eq!(out, [0x7F]);
}

#[test]
fn encode_multi_byte_values() {
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    encode_into(128, &mut out);
    assert_eq!(out, [0x81, 0x00]);

    out.clear();
    encode_into(512, &mut out);
    assert_eq!(out, [0x84, 0x00]);

    out.clear();
    encode_into(MAX, &mut out);
    assert_eq!(out, [0xFF, 0xFF, 0xFF, 0x7F]);
}

#[test]
fn round_trip() {
    use pretty_assertions::assert_eq;
    for value in [
        0u32,
        1,
        127,
        128,
        129,
        0x3FFF,
        0x4000,
        0x1F_FFFF,
        0x20_0000,
        MAX - 1,
        MAX,
    ] {
        let mut out = Vec::new();
        encode_into(value, &mut out);
        assert!(out.len() <= 4);
        let (decoded, used) = decode(&out).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(used, out.len());
    }
}

#[test]
fn decode_stops_at_terminator() {
    use pretty_assertions::assert_eq;
    let bytes = [0x81, 0x00, 0x90, 0x3C];
    assert_eq!(decode(&bytes).unwrap(), (128, 2));
}

#[test]
fn decode_rejects_malformed_input() {
    assert_eq!(decode(&[0x81, 0x80]).unwrap_err(), VlqError::Unterminated);
    assert_eq!(decode(&[]).unwrap_err(), VlqError::Unterminated);
    assert_eq!(
        decode(&[0x81, 0x82, 0x83, 0x84, 0x05]).unwrap_err(),
        VlqError::TooLong
    );
}

#[test]
fn delta_time_bounds() {
    assert_eq!(DeltaTime::new(MAX).unwrap().ticks(), MAX);
    assert_eq!(
        DeltaTime::new(MAX + 1).unwrap_err(),
        EventError::DeltaTimeOverflow(MAX + 1)
    );
}
