#![doc = r#"
The track chunk assembler.

A [`Track`] is an ordered event list plus the framing that makes it an
`MTrk` chunk: the four-byte ASCII identifier, a big-endian length, the
serialized events in insertion order, and the end-of-track marker. The
length covers the event bytes and the marker, and is always computed.

No ordering is imposed beyond insertion order; callers are responsible for
emitting sensible delta times.
"#]

use crate::{
    Bpm, Error, EventError, MicrosPerQuarter, Pitch, PitchError, TrackError,
    event::{ChannelVoiceEvent, ChannelVoiceKind, MetaEvent, MetaKind, TrackEvent},
};
use alloc::vec::Vec;

/// Note-on velocity used when the builder helpers are given none.
pub const DEFAULT_VELOCITY: u8 = 90;

#[doc = r#"
An ordered sequence of events, serializable as an `MTrk` chunk.

The builder helpers append events and return the track again, so calls
chain; fallible helpers chain with `?`.

# Example
```rust
# use midgen::prelude::*;
let mut track = Track::new();
track
    .tempo(120.0, 0)?
    .time_signature(4, 4, 0)?
    .instrument(0, 0x13, 0)?
    .note(0, "c4", 64, 0, None)?
    .chord(0, &["c4", "e4", "g4"], 128, None)?;

let bytes = track.to_bytes()?;
assert_eq!(&bytes[..4], b"MTrk");
# Ok::<(), midgen::Error>(())
```
"#]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    events: Vec<TrackEvent>,
}

impl Track {
    /// Track chunk identifier, ASCII `"MTrk"`.
    pub const CHUNK_ID: [u8; 4] = *b"MTrk";

    /// Delta time zero, end-of-track meta event, zero length.
    pub const END_OF_TRACK: [u8; 4] = [0x00, 0xFF, 0x2F, 0x00];

    /// Create an empty track.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Create a track holding the given events.
    pub fn with_events(events: Vec<TrackEvent>) -> Self {
        Self { events }
    }

    /// The events in insertion order.
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Append an already-built event.
    pub fn add_event(&mut self, event: impl Into<TrackEvent>) -> &mut Self {
        self.events.push(event.into());
        self
    }

    /// Append a note-on.
    ///
    /// `velocity` defaults to [`DEFAULT_VELOCITY`].
    pub fn note_on<P>(
        &mut self,
        channel: u8,
        pitch: P,
        time: u32,
        velocity: Option<u8>,
    ) -> Result<&mut Self, Error>
    where
        P: TryInto<Pitch>,
        P::Error: Into<PitchError>,
    {
        self.push_key_event(ChannelVoiceKind::NoteOn, channel, pitch, time, velocity)
    }

    /// Append a note-off.
    ///
    /// `velocity` defaults to [`DEFAULT_VELOCITY`].
    pub fn note_off<P>(
        &mut self,
        channel: u8,
        pitch: P,
        time: u32,
        velocity: Option<u8>,
    ) -> Result<&mut Self, Error>
    where
        P: TryInto<Pitch>,
        P::Error: Into<PitchError>,
    {
        self.push_key_event(ChannelVoiceKind::NoteOff, channel, pitch, time, velocity)
    }

    /// Append a note-on and, when `duration` is nonzero, the matching
    /// note-off `duration` ticks later.
    pub fn note<P>(
        &mut self,
        channel: u8,
        pitch: P,
        duration: u32,
        time: u32,
        velocity: Option<u8>,
    ) -> Result<&mut Self, Error>
    where
        P: TryInto<Pitch> + Copy,
        P::Error: Into<PitchError>,
    {
        self.note_on(channel, pitch, time, velocity)?;
        if duration > 0 {
            self.note_off(channel, pitch, duration, velocity)?;
        }
        Ok(self)
    }

    /// Append a chord: a note-on per pitch, then a note-off per pitch,
    /// with only the first note-off carrying `duration`.
    ///
    /// The note-offs release at default velocity.
    ///
    /// # Errors
    /// if `pitches` is empty.
    pub fn chord<P>(
        &mut self,
        channel: u8,
        pitches: &[P],
        duration: u32,
        velocity: Option<u8>,
    ) -> Result<&mut Self, Error>
    where
        P: TryInto<Pitch> + Copy,
        P::Error: Into<PitchError>,
    {
        if pitches.is_empty() {
            return Err(TrackError::EmptyChord.into());
        }
        for &pitch in pitches {
            self.note_on(channel, pitch, 0, velocity)?;
        }
        for (i, &pitch) in pitches.iter().enumerate() {
            let time = if i == 0 { duration } else { 0 };
            self.note_off(channel, pitch, time, None)?;
        }
        Ok(self)
    }

    /// Append a program change selecting `program` on `channel`.
    pub fn instrument(
        &mut self,
        channel: u8,
        program: u8,
        time: u32,
    ) -> Result<&mut Self, Error> {
        let event = ChannelVoiceEvent::new(ChannelVoiceKind::ProgramChange, channel, time, program)?;
        Ok(self.add_event(event))
    }

    /// Append a tempo change.
    pub fn tempo(&mut self, bpm: impl Into<Bpm>, time: u32) -> Result<&mut Self, Error> {
        let mpqn = MicrosPerQuarter::from(bpm.into());
        let event = MetaEvent::new(MetaKind::Tempo, time)?.with_payload(mpqn.to_bytes());
        Ok(self.add_event(event))
    }

    /// Append a time signature.
    ///
    /// The denominator is stored as its base-2 logarithm; the two trailing
    /// bytes are the standard MIDI-clocks-per-metronome-tick and
    /// 32nds-per-quarter constants.
    ///
    /// # Errors
    /// if `denominator` is not an exact power of two.
    pub fn time_signature(
        &mut self,
        numerator: u8,
        denominator: u8,
        time: u32,
    ) -> Result<&mut Self, Error> {
        if !denominator.is_power_of_two() {
            return Err(TrackError::TimeSignatureDenominator(denominator).into());
        }
        let log2 = denominator.trailing_zeros() as u8;
        let event = MetaEvent::new(MetaKind::TimeSignature, time)?
            .with_payload([numerator, log2, 0x18, 0x08]);
        Ok(self.add_event(event))
    }

    /// Append a key signature.
    ///
    /// `accidentals` counts sharps when positive and flats when negative,
    /// stored as a two's-complement byte.
    pub fn key_signature(
        &mut self,
        accidentals: i8,
        minor: bool,
        time: u32,
    ) -> Result<&mut Self, Error> {
        let event = MetaEvent::new(MetaKind::KeySignature, time)?
            .with_payload([accidentals as u8, u8::from(minor)]);
        Ok(self.add_event(event))
    }

    /// Append a track name.
    pub fn track_name(&mut self, name: &str, time: u32) -> Result<&mut Self, Error> {
        self.push_text(MetaKind::TrackName, name, time)
    }

    /// Append a copyright notice.
    pub fn copyright(&mut self, notice: &str, time: u32) -> Result<&mut Self, Error> {
        self.push_text(MetaKind::Copyright, notice, time)
    }

    /// Append a lyric syllable.
    pub fn lyric(&mut self, text: &str, time: u32) -> Result<&mut Self, Error> {
        self.push_text(MetaKind::Lyric, text, time)
    }

    /// Append a section marker.
    pub fn marker(&mut self, text: &str, time: u32) -> Result<&mut Self, Error> {
        self.push_text(MetaKind::Marker, text, time)
    }

    /// Append a cue point.
    pub fn cue_point(&mut self, text: &str, time: u32) -> Result<&mut Self, Error> {
        self.push_text(MetaKind::CuePoint, text, time)
    }

    fn push_text(&mut self, kind: MetaKind, text: &str, time: u32) -> Result<&mut Self, Error> {
        let event = MetaEvent::new(kind, time)?.with_payload(text);
        Ok(self.add_event(event))
    }

    fn push_key_event<P>(
        &mut self,
        kind: ChannelVoiceKind,
        channel: u8,
        pitch: P,
        time: u32,
        velocity: Option<u8>,
    ) -> Result<&mut Self, Error>
    where
        P: TryInto<Pitch>,
        P::Error: Into<PitchError>,
    {
        let pitch = pitch.try_into().map_err(|e| Error::Pitch(e.into()))?;
        let event = ChannelVoiceEvent::new(kind, channel, time, pitch.byte())?
            .with_param2(velocity.unwrap_or(DEFAULT_VELOCITY));
        Ok(self.add_event(event))
    }

    /// Serialize the chunk. Pure; the track is not consumed and repeated
    /// calls yield identical bytes.
    ///
    /// # Errors
    /// if any contained meta event has no kind set.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EventError> {
        let mut out = Vec::new();
        self.write_into(&mut out)?;
        Ok(out)
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) -> Result<(), EventError> {
        out.extend_from_slice(&Self::CHUNK_ID);
        let length_pos = out.len();
        out.extend_from_slice(&[0; 4]);

        let payload_start = out.len();
        for event in &self.events {
            event.write_into(out)?;
        }
        out.extend_from_slice(&Self::END_OF_TRACK);

        let length = (out.len() - payload_start) as u32;
        out[length_pos..length_pos + 4].copy_from_slice(&length.to_be_bytes());
        Ok(())
    }
}

#[test]
fn empty_track_framing() {
    use pretty_assertions::assert_eq;
    let bytes = Track::new().to_bytes().unwrap();
    assert_eq!(&bytes[..4], b"MTrk");
    // length field covers the end-of-track marker only
    assert_eq!(&bytes[4..8], [0, 0, 0, 4]);
    assert_eq!(&bytes[8..], Track::END_OF_TRACK);
}

#[test]
fn length_counts_event_bytes() {
    use pretty_assertions::assert_eq;
    let mut track = Track::new();
    track.note(0, Pitch::MIDDLE_C, 128, 0, None).unwrap();
    let bytes = track.to_bytes().unwrap();
    // note-on (4) + note-off with two-byte delta (5) + end marker (4)
    assert_eq!(&bytes[4..8], [0, 0, 0, 13]);
    assert_eq!(bytes.len(), 8 + 13);
}
