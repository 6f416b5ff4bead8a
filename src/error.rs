use alloc::string::String;
use core::convert::Infallible;
use thiserror::Error;

#[doc = r#"
Errors produced while resolving a symbolic pitch.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PitchError {
    /// The input did not match `[a-g](#+|b+)?[0-9]+` (case-insensitive).
    #[error("Invalid note name: {0}")]
    InvalidNoteName(String),
    /// The resolved pitch does not fit in a MIDI data byte.
    #[error("Pitch {0} is outside 0..=127")]
    OutOfRange(i64),
    /// Pitches below 12 have no symbolic spelling.
    #[error("No note name for MIDI pitch {0}")]
    Unnamed(u8),
}

impl From<Infallible> for PitchError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// An error raised while building or serializing a single event.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// The byte is not one of the seven channel voice status codes.
    #[error("Unknown channel voice status: {0:#04X}")]
    UnknownStatus(u8),
    /// Channels range over 0..=15.
    #[error("Channel {0} is out of bounds")]
    ChannelOutOfBounds(u8),
    /// Delta times must fit in four variable-length bytes.
    #[error("Delta time {0} exceeds four variable-length bytes")]
    DeltaTimeOverflow(u32),
    /// A meta event was serialized before its kind was set.
    #[error("Kind for meta event not specified")]
    MetaKindUnset,
}

/// An error raised by the track builder helpers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// A chord requires at least one pitch.
    #[error("Chord requires at least one pitch")]
    EmptyChord,
    /// Time signature denominators must be an exact power of two.
    #[error("Time signature denominator {0} is not an exact power of 2")]
    TimeSignatureDenominator(u8),
}

/// An error raised while assembling a file.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FileError {
    /// Resolutions range over 1..=32767.
    #[error("Ticks per quarter note {0} is outside 1..=32767")]
    TicksOutOfRange(u16),
}

#[doc = r#"
Any error this crate can produce.

The concern-specific kinds ([`PitchError`], [`EventError`], [`TrackError`],
[`FileError`]) fold into this type via `From`, so fallible builder calls
can be chained with `?`.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pitch resolution failed.
    #[error("Pitch: {0}")]
    Pitch(#[from] PitchError),
    /// Event construction or serialization failed.
    #[error("Event: {0}")]
    Event(#[from] EventError),
    /// A track builder check failed.
    #[error("Track: {0}")]
    Track(#[from] TrackError),
    /// File construction failed.
    #[error("File: {0}")]
    File(#[from] FileError),
}
