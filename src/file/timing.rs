use crate::FileError;

#[doc = r#"
The tick resolution of a file.

Defines what a "quarter note" means for every delta time in the file.
Stored as the two big-endian header bytes; the leading bit is reserved for
SMPTE timing, so valid resolutions are 1-32767.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicksPerQuarterNote {
    inner: [u8; 2],
}

impl TicksPerQuarterNote {
    /// Create a resolution.
    ///
    /// # Errors
    /// if `tpqn` is zero or has its leading bit set.
    pub const fn new(tpqn: u16) -> Result<Self, FileError> {
        if tpqn == 0 || tpqn >= 0x8000 {
            return Err(FileError::TicksOutOfRange(tpqn));
        }
        Ok(Self {
            inner: tpqn.to_be_bytes(),
        })
    }

    /// Returns the ticks per quarter note for the file.
    pub const fn value(&self) -> u16 {
        u16::from_be_bytes(self.inner)
    }

    /// The two big-endian bytes of the header field.
    pub const fn to_bytes(&self) -> [u8; 2] {
        self.inner
    }
}

impl Default for TicksPerQuarterNote {
    /// 128 ticks per quarter note.
    fn default() -> Self {
        Self {
            inner: 128u16.to_be_bytes(),
        }
    }
}

impl TryFrom<u16> for TicksPerQuarterNote {
    type Error = FileError;

    fn try_from(tpqn: u16) -> Result<Self, Self::Error> {
        Self::new(tpqn)
    }
}

#[test]
fn resolution_bounds() {
    use pretty_assertions::assert_eq;
    assert_eq!(TicksPerQuarterNote::new(1).unwrap().value(), 1);
    assert_eq!(TicksPerQuarterNote::new(32767).unwrap().value(), 32767);
    assert_eq!(
        TicksPerQuarterNote::new(0).unwrap_err(),
        FileError::TicksOutOfRange(0)
    );
    assert_eq!(
        TicksPerQuarterNote::new(32768).unwrap_err(),
        FileError::TicksOutOfRange(32768)
    );
    assert_eq!(
        TicksPerQuarterNote::new(0xFFFF).unwrap_err(),
        FileError::TicksOutOfRange(0xFFFF)
    );
}

#[test]
fn header_bytes() {
    use pretty_assertions::assert_eq;
    assert_eq!(TicksPerQuarterNote::default().to_bytes(), [0x00, 0x80]);
    assert_eq!(TicksPerQuarterNote::new(960).unwrap().to_bytes(), [0x03, 0xC0]);
}
