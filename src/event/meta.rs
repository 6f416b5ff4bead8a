use crate::{EventError, vlq::DeltaTime};
use alloc::string::String;
use alloc::vec::Vec;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
Meta event type codes.

Only files carry these; they never appear on a wire to an instrument.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaKind {
    /// Sequence number; a real, serializable kind, distinct from a
    /// [`MetaEvent`] whose kind was never set.
    SequenceNumber = 0x00,
    /// Free text
    Text = 0x01,
    /// Copyright notice
    Copyright = 0x02,
    /// Sequence or track name
    TrackName = 0x03,
    /// Instrument name
    InstrumentName = 0x04,
    /// Lyric syllable
    Lyric = 0x05,
    /// Section marker
    Marker = 0x06,
    /// Cue point
    CuePoint = 0x07,
    /// MIDI channel prefix for following events
    ChannelPrefix = 0x20,
    /// End of track sentinel
    EndOfTrack = 0x2F,
    /// Set tempo, microseconds per quarter note
    Tempo = 0x51,
    /// SMPTE offset
    SmpteOffset = 0x54,
    /// Time signature
    TimeSignature = 0x58,
    /// Key signature
    KeySignature = 0x59,
    /// Sequencer-specific payload
    SequencerSpecific = 0x7F,
}

impl MetaKind {
    /// Resolve a raw meta type byte.
    ///
    /// # Errors
    /// if `byte` is not a recognized meta type.
    pub fn from_byte(byte: u8) -> Result<Self, EventError> {
        Self::try_from(byte).map_err(|_| EventError::UnknownStatus(byte))
    }

    /// The type byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

#[doc = r#"
The data carried by a meta event.

The wire length byte is derived from the payload, never supplied by the
caller.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaPayload {
    /// An ordered byte sequence, written verbatim.
    Bytes(Vec<u8>),
    /// A single byte, written with length 1.
    Byte(u8),
    /// Text, written as its UTF-8 bytes.
    Text(String),
    /// No payload; length 0.
    #[default]
    Empty,
}

impl MetaPayload {
    /// The wire length byte for this payload.
    ///
    /// Lengths are written as a single byte; payloads longer than 255
    /// bytes wrap.
    pub fn length_byte(&self) -> u8 {
        match self {
            Self::Bytes(bytes) => bytes.len() as u8,
            Self::Byte(_) => 1,
            Self::Text(text) => text.len() as u8,
            Self::Empty => 0,
        }
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        match self {
            Self::Bytes(bytes) => out.extend_from_slice(bytes),
            Self::Byte(byte) => out.push(*byte),
            Self::Text(text) => out.extend_from_slice(text.as_bytes()),
            Self::Empty => {}
        }
    }
}

impl From<Vec<u8>> for MetaPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for MetaPayload {
    fn from(bytes: [u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<u8> for MetaPayload {
    fn from(byte: u8) -> Self {
        Self::Byte(byte)
    }
}

impl From<&str> for MetaPayload {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for MetaPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[doc = r#"
A meta event with its delta time.

Wire form: `[delta time VLQ..., 0xFF, kind, length, payload...]`.

The kind may be set after construction, so the "kind present" check runs
at serialization time rather than up front. An event built with
[`MetaEvent::new`] always has one; [`MetaEvent::default`] starts without.

# Example
```rust
# use midgen::prelude::*;
let tempo = MetaEvent::new(MetaKind::Tempo, 0)?.with_payload([7, 161, 32]);
assert_eq!(tempo.to_bytes()?, [0x00, 0xFF, 0x51, 3, 7, 161, 32]);

let mut pending = MetaEvent::default();
assert!(pending.to_bytes().is_err());
pending.set_kind(MetaKind::EndOfTrack);
assert_eq!(pending.to_bytes()?, [0x00, 0xFF, 0x2F, 0]);
# Ok::<(), midgen::EventError>(())
```
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaEvent {
    delta: DeltaTime,
    kind: Option<MetaKind>,
    payload: MetaPayload,
}

impl MetaEvent {
    /// Build an event of the given kind with no payload.
    ///
    /// # Errors
    /// if `delta` overflows four variable-length bytes.
    pub const fn new(kind: MetaKind, delta: u32) -> Result<Self, EventError> {
        let delta = match DeltaTime::new(delta) {
            Ok(d) => d,
            Err(e) => return Err(e),
        };
        Ok(Self {
            delta,
            kind: Some(kind),
            payload: MetaPayload::Empty,
        })
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: impl Into<MetaPayload>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Set the kind after the fact.
    pub fn set_kind(&mut self, kind: MetaKind) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    /// Replace the payload.
    pub fn set_payload(&mut self, payload: impl Into<MetaPayload>) -> &mut Self {
        self.payload = payload.into();
        self
    }

    /// Replace the delta time.
    ///
    /// # Errors
    /// if `ticks` overflows four variable-length bytes.
    pub fn set_delta(&mut self, ticks: u32) -> Result<&mut Self, EventError> {
        self.delta = DeltaTime::new(ticks)?;
        Ok(self)
    }

    /// The kind, if one has been set.
    pub const fn kind(&self) -> Option<MetaKind> {
        self.kind
    }

    /// The payload.
    pub const fn payload(&self) -> &MetaPayload {
        &self.payload
    }

    /// Ticks since the previous event in the track.
    pub const fn delta(&self) -> DeltaTime {
        self.delta
    }

    /// Serialize to wire form. Pure; the event is not consumed.
    ///
    /// # Errors
    /// if no kind has been set.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EventError> {
        let mut out = Vec::new();
        self.write_into(&mut out)?;
        Ok(out)
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) -> Result<(), EventError> {
        let Some(kind) = self.kind else {
            return Err(EventError::MetaKindUnset);
        };
        self.delta.write_into(out);
        out.push(0xFF);
        out.push(kind.byte());
        out.push(self.payload.length_byte());
        self.payload.write_into(out);
        Ok(())
    }
}

#[test]
fn byte_sequence_payload() {
    use pretty_assertions::assert_eq;
    let event = MetaEvent::new(MetaKind::Tempo, 0)
        .unwrap()
        .with_payload(vec![7, 161, 32]);
    assert_eq!(event.to_bytes().unwrap(), [0x00, 0xFF, 0x51, 3, 7, 161, 32]);
}

#[test]
fn single_byte_payload() {
    use pretty_assertions::assert_eq;
    let event = MetaEvent::new(MetaKind::ChannelPrefix, 0)
        .unwrap()
        .with_payload(9u8);
    assert_eq!(event.to_bytes().unwrap(), [0x00, 0xFF, 0x20, 1, 9]);
}

#[test]
fn text_payload() {
    use pretty_assertions::assert_eq;
    let event = MetaEvent::new(MetaKind::TrackName, 0)
        .unwrap()
        .with_payload("lead");
    assert_eq!(
        event.to_bytes().unwrap(),
        [0x00, 0xFF, 0x03, 4, b'l', b'e', b'a', b'd']
    );
}

#[test]
fn absent_payload() {
    use pretty_assertions::assert_eq;
    let event = MetaEvent::new(MetaKind::EndOfTrack, 0).unwrap();
    assert_eq!(event.to_bytes().unwrap(), [0x00, 0xFF, 0x2F, 0]);
}

#[test]
fn unset_kind_fails_lazily() {
    use pretty_assertions::assert_eq;
    let mut event = MetaEvent::default();
    assert_eq!(event.to_bytes().unwrap_err(), EventError::MetaKindUnset);

    // setting a kind afterwards makes the same event serializable
    event.set_kind(MetaKind::Marker);
    assert!(event.to_bytes().is_ok());
}

#[test]
fn sequence_number_is_distinct_from_unset() {
    use pretty_assertions::assert_eq;
    let event = MetaEvent::new(MetaKind::SequenceNumber, 0)
        .unwrap()
        .with_payload(vec![0x00, 0x01]);
    assert_eq!(event.to_bytes().unwrap(), [0x00, 0xFF, 0x00, 2, 0x00, 0x01]);
}

#[test]
fn meta_kind_bytes() {
    use pretty_assertions::assert_eq;
    assert_eq!(MetaKind::from_byte(0x51).unwrap(), MetaKind::Tempo);
    assert_eq!(MetaKind::from_byte(0x2F).unwrap(), MetaKind::EndOfTrack);
    assert_eq!(
        MetaKind::from_byte(0x10).unwrap_err(),
        EventError::UnknownStatus(0x10)
    );
}
