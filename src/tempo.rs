#![doc = r#"
Tempo conversions.

SMF tempo events store microseconds per quarter note; humans think in beats
per minute. [`Bpm`] and [`MicrosPerQuarter`] convert both ways.
"#]

/// Beats per minute.
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bpm(f64);

impl Bpm {
    /// Creates a new tempo in beats per minute.
    pub const fn new(bpm: f64) -> Self {
        Self(bpm)
    }

    /// Returns the tempo as an f64.
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Bpm {
    fn from(bpm: f64) -> Self {
        Self(bpm)
    }
}

impl From<u32> for Bpm {
    fn from(bpm: u32) -> Self {
        Self(bpm as f64)
    }
}

#[doc = r#"
Microseconds per quarter note, the tempo unit of the Set Tempo meta event.

The wire field is three bytes wide, so values clamp to `0xFF_FFFF`.

# Example
```rust
# use midgen::prelude::*;
let mpqn = MicrosPerQuarter::from(Bpm::new(120.0));
assert_eq!(mpqn.to_bytes(), [7, 161, 32]);
```
"#]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MicrosPerQuarter(u32);

impl MicrosPerQuarter {
    /// Largest value the three-byte tempo field can hold.
    pub const MAX: Self = Self(0xFF_FFFF);

    /// 120 beats per minute.
    pub const DEFAULT: Self = Self(500_000);

    /// Creates a new tempo, clamping to the three-byte ceiling.
    pub const fn new(micros: u32) -> Self {
        if micros > Self::MAX.0 {
            return Self::MAX;
        }
        Self(micros)
    }

    /// Returns the microseconds per quarter note as a u32.
    pub const fn us(&self) -> u32 {
        self.0
    }

    /// The big-endian payload of a Set Tempo meta event.
    pub const fn to_bytes(&self) -> [u8; 3] {
        [
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
        ]
    }

    /// Rebuild a tempo from a Set Tempo payload.
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }
}

impl Default for MicrosPerQuarter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Bpm> for MicrosPerQuarter {
    fn from(bpm: Bpm) -> Self {
        Self::new((60_000_000.0 / bpm.value()) as u32)
    }
}

impl From<MicrosPerQuarter> for Bpm {
    fn from(mpqn: MicrosPerQuarter) -> Self {
        Self((60_000_000.0 / mpqn.0 as f64) as u64 as f64)
    }
}

#[test]
fn bpm_to_micros() {
    use pretty_assertions::assert_eq;
    assert_eq!(MicrosPerQuarter::from(Bpm::new(120.0)).us(), 500_000);
    assert_eq!(MicrosPerQuarter::from(Bpm::new(60.0)).us(), 1_000_000);
    assert_eq!(MicrosPerQuarter::from(Bpm::from(140u32)).us(), 428_571);
}

#[test]
fn tempo_bytes() {
    use pretty_assertions::assert_eq;
    assert_eq!(MicrosPerQuarter::new(500_000).to_bytes(), [7, 161, 32]);
    assert_eq!(
        MicrosPerQuarter::from_bytes([7, 161, 32]),
        MicrosPerQuarter::new(500_000)
    );
    assert_eq!(MicrosPerQuarter::new(1_000_000).to_bytes(), [0x0F, 0x42, 0x40]);
}

#[test]
fn round_trips() {
    use pretty_assertions::assert_eq;
    for bpm in [60u32, 120, 200] {
        let mpqn = MicrosPerQuarter::from(Bpm::from(bpm));
        assert_eq!(Bpm::from(mpqn).value(), bpm as f64);
        assert_eq!(MicrosPerQuarter::from_bytes(mpqn.to_bytes()), mpqn);
    }
}

#[test]
fn clamps_to_three_bytes() {
    use pretty_assertions::assert_eq;
    assert_eq!(MicrosPerQuarter::new(0x100_0000), MicrosPerQuarter::MAX);
    assert_eq!(MicrosPerQuarter::from(Bpm::new(1.0)), MicrosPerQuarter::MAX);
}
