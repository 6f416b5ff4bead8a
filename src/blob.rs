#![doc = r#"
Output packaging.

Serialization produces raw bytes; [`Blob`] pairs them with a MIME type for
callers handing the result to a download, upload, or HTTP response layer.
"#]

use alloc::vec::Vec;
use core::fmt;

/// MIME type attached to an exported [`Blob`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MimeType {
    /// `audio/x-midi`, the default
    #[default]
    Midi,
    /// `application/octet-stream`, for consumers that reject audio types
    OctetStream,
}

impl MimeType {
    /// The MIME string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Midi => "audio/x-midi",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished byte stream plus its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blob {
    bytes: Vec<u8>,
    mime: MimeType,
}

impl Blob {
    /// Wrap serialized bytes.
    pub const fn new(bytes: Vec<u8>, mime: MimeType) -> Self {
        Self { bytes, mime }
    }

    /// The raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Unwrap into the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The MIME type.
    pub const fn mime(&self) -> MimeType {
        self.mime
    }

    /// The byte count.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when no bytes were produced.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[test]
fn mime_strings() {
    use pretty_assertions::assert_eq;
    assert_eq!(MimeType::Midi.as_str(), "audio/x-midi");
    assert_eq!(MimeType::OctetStream.as_str(), "application/octet-stream");
    assert_eq!(MimeType::default(), MimeType::Midi);
}
