#![doc = r#"
The file chunk assembler.

A [`MidiFile`] owns its tracks and a tick resolution, and writes the
complete byte stream: the six-byte `MThd` header chunk (format word, track
count, resolution) followed by every track chunk in order.
"#]

mod format;
pub use format::*;

mod timing;
pub use timing::*;

use crate::{Blob, EventError, FileError, MimeType, Track};
use alloc::vec::Vec;

#[doc = r#"
A Standard MIDI File under construction.

Tracks are appended during the building phase and the whole graph is
serialized any number of times; `to_bytes` is a pure read of current state.

# Example
```rust
# use midgen::prelude::*;
let mut file = MidiFile::new(96)?;
file.add_track().note(0, "c4", 64, 0, None)?;

let bytes = file.to_bytes()?;
assert_eq!(&bytes[..4], b"MThd");
# Ok::<(), midgen::Error>(())
```
"#]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    ticks: TicksPerQuarterNote,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Header chunk identifier, ASCII `"MThd"`.
    pub const CHUNK_ID: [u8; 4] = *b"MThd";

    /// The header chunk always carries six bytes of data.
    const CHUNK_SIZE: [u8; 4] = [0, 0, 0, 6];

    /// Create an empty file with the given tick resolution.
    ///
    /// # Errors
    /// if `ticks` is outside 1..=32767.
    pub fn new(ticks: u16) -> Result<Self, FileError> {
        Ok(Self::with_resolution(TicksPerQuarterNote::new(ticks)?))
    }

    /// Create an empty file from an already-validated resolution.
    pub const fn with_resolution(ticks: TicksPerQuarterNote) -> Self {
        Self {
            ticks,
            tracks: Vec::new(),
        }
    }

    /// The tick resolution.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.ticks.value()
    }

    /// The tracks in file order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The format this file will be written as, based on its track count.
    pub fn format_type(&self) -> FormatType {
        FormatType::for_track_count(self.tracks.len())
    }

    /// Append a new empty track and return it, so calls keep chaining on
    /// the track.
    pub fn add_track(&mut self) -> &mut Track {
        self.tracks.push(Track::new());
        let last = self.tracks.len() - 1;
        &mut self.tracks[last]
    }

    /// Append a given track and return the file, so calls keep chaining
    /// on the file.
    pub fn push_track(&mut self, track: Track) -> &mut Self {
        self.tracks.push(track);
        self
    }

    /// Serialize the complete file. Pure; repeated calls on an unmodified
    /// file yield identical bytes.
    ///
    /// # Errors
    /// if any contained meta event has no kind set.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EventError> {
        let mut out = Vec::new();
        out.extend_from_slice(&Self::CHUNK_ID);
        out.extend_from_slice(&Self::CHUNK_SIZE);
        out.extend_from_slice(&self.format_type().to_bytes());
        out.extend_from_slice(&(self.tracks.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.ticks.to_bytes());
        for track in &self.tracks {
            track.write_into(&mut out)?;
        }
        Ok(out)
    }

    /// Serialize and wrap with the default `audio/x-midi` MIME type.
    ///
    /// # Errors
    /// if any contained meta event has no kind set.
    pub fn to_blob(&self) -> Result<Blob, EventError> {
        self.to_blob_with(MimeType::Midi)
    }

    /// Serialize and wrap with a caller-selected MIME type.
    ///
    /// # Errors
    /// if any contained meta event has no kind set.
    pub fn to_blob_with(&self, mime: MimeType) -> Result<Blob, EventError> {
        Ok(Blob::new(self.to_bytes()?, mime))
    }

    /// Serialize into a writer.
    ///
    /// # Errors
    /// on writer failure, or if any contained meta event has no kind set.
    #[cfg(feature = "std")]
    pub fn write<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let bytes = self.to_bytes().map_err(std::io::Error::other)?;
        writer.write_all(&bytes)
    }
}
