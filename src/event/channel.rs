use crate::{EventError, vlq::DeltaTime};
use alloc::vec::Vec;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The seven channel voice status codes, aligned to the high nibble.

The low nibble of the wire status byte carries the channel; see
[`ChannelVoiceEvent::status`].
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChannelVoiceKind {
    /// Key released
    NoteOff = 0x80,
    /// Key pressed
    NoteOn = 0x90,
    /// Per-key pressure change while held
    PolyAftertouch = 0xA0,
    /// Controller value change
    Controller = 0xB0,
    /// Program (instrument patch) selection; one data byte
    ProgramChange = 0xC0,
    /// Channel-wide pressure change; one data byte
    ChannelAftertouch = 0xD0,
    /// Pitch bend wheel position
    PitchBend = 0xE0,
}

impl ChannelVoiceKind {
    /// Resolve a raw status code.
    ///
    /// # Errors
    /// if `byte` is not exactly one of the seven codes.
    pub fn from_byte(byte: u8) -> Result<Self, EventError> {
        Self::try_from(byte).map_err(|_| EventError::UnknownStatus(byte))
    }

    /// The status code with a zero channel nibble.
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

/// One of the sixteen MIDI channels, 0-15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel(u8);

impl Channel {
    /// Create a new channel.
    ///
    /// # Errors
    /// if `channel` is greater than 15.
    pub const fn new(channel: u8) -> Result<Self, EventError> {
        if channel > 15 {
            return Err(EventError::ChannelOutOfBounds(channel));
        }
        Ok(Self(channel))
    }

    /// The channel number, 0-15.
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Channel {
    type Error = EventError;

    fn try_from(channel: u8) -> Result<Self, Self::Error> {
        Self::new(channel)
    }
}

#[doc = r#"
A channel voice message with its delta time.

Wire form: `[delta time VLQ..., status, param1, param2?]`. The second data
byte is emitted only when one was supplied; by convention Program Change and
Channel Aftertouch carry a single data byte, but the serializer emits
whatever was set.

Data bytes are written as given; values above `0x7F` are not rejected here.
Use [`Pitch`](crate::Pitch) for the checked path.

# Example
```rust
# use midgen::prelude::*;
let event = ChannelVoiceEvent::new(ChannelVoiceKind::NoteOn, 9, 0, 36)?
    .with_param2(100);
assert_eq!(event.to_bytes(), [0x00, 0x99, 36, 100]);
# Ok::<(), midgen::EventError>(())
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelVoiceEvent {
    delta: DeltaTime,
    kind: ChannelVoiceKind,
    channel: Channel,
    param1: u8,
    param2: Option<u8>,
}

impl ChannelVoiceEvent {
    /// Build an event with one data byte.
    ///
    /// # Errors
    /// if `channel` is out of bounds or `delta` overflows four
    /// variable-length bytes.
    pub const fn new(
        kind: ChannelVoiceKind,
        channel: u8,
        delta: u32,
        param1: u8,
    ) -> Result<Self, EventError> {
        let channel = match Channel::new(channel) {
            Ok(c) => c,
            Err(e) => return Err(e),
        };
        let delta = match DeltaTime::new(delta) {
            Ok(d) => d,
            Err(e) => return Err(e),
        };
        Ok(Self {
            delta,
            kind,
            channel,
            param1,
            param2: None,
        })
    }

    /// Attach the second data byte.
    pub const fn with_param2(mut self, param2: u8) -> Self {
        self.param2 = Some(param2);
        self
    }

    /// The status code.
    pub const fn kind(&self) -> ChannelVoiceKind {
        self.kind
    }

    /// The channel.
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The first data byte.
    pub const fn param1(&self) -> u8 {
        self.param1
    }

    /// The second data byte, if one was set.
    pub const fn param2(&self) -> Option<u8> {
        self.param2
    }

    /// Ticks since the previous event in the track.
    pub const fn delta(&self) -> DeltaTime {
        self.delta
    }

    /// The wire status byte: status code high nibble, channel low nibble.
    pub const fn status(&self) -> u8 {
        self.kind.byte() | (self.channel.value() & 0x0F)
    }

    /// Serialize to wire form. Pure; the event is not consumed.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_into(&mut out);
        out
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        self.delta.write_into(out);
        out.push(self.status());
        out.push(self.param1);
        if let Some(param2) = self.param2 {
            out.push(param2);
        }
    }
}

#[test]
fn note_on_layout() {
    use pretty_assertions::assert_eq;
    let event = ChannelVoiceEvent::new(ChannelVoiceKind::NoteOn, 9, 0, 36)
        .unwrap()
        .with_param2(100);
    assert_eq!(event.status(), 0x99);
    assert_eq!(event.to_bytes(), [0x00, 0x99, 36, 100]);
}

#[test]
fn program_change_omits_param2() {
    use pretty_assertions::assert_eq;
    let event = ChannelVoiceEvent::new(ChannelVoiceKind::ProgramChange, 0, 0, 19).unwrap();
    assert_eq!(event.to_bytes(), [0x00, 0xC0, 19]);
}

#[test]
fn delta_time_precedes_status() {
    use pretty_assertions::assert_eq;
    let event = ChannelVoiceEvent::new(ChannelVoiceKind::NoteOff, 0, 128, 60)
        .unwrap()
        .with_param2(64);
    assert_eq!(event.to_bytes(), [0x81, 0x00, 0x80, 60, 64]);
}

#[test]
fn channel_bounds() {
    assert!(Channel::new(15).is_ok());
    assert_eq!(
        Channel::new(16).unwrap_err(),
        EventError::ChannelOutOfBounds(16)
    );
    assert_eq!(
        ChannelVoiceEvent::new(ChannelVoiceKind::NoteOn, 16, 0, 60).unwrap_err(),
        EventError::ChannelOutOfBounds(16)
    );
}

#[test]
fn unknown_status_codes() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        ChannelVoiceKind::from_byte(0x90).unwrap(),
        ChannelVoiceKind::NoteOn
    );
    for byte in [0x00, 0x7F, 0x85, 0xF0, 0xFF] {
        assert_eq!(
            ChannelVoiceKind::from_byte(byte).unwrap_err(),
            EventError::UnknownStatus(byte)
        );
    }
}
