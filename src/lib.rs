#![doc = r#"
Programmatic Standard MIDI File construction.

Build events (notes, controller changes, tempo/meter/key metadata), collect
them into tracks, and serialize the exact SMF byte layout:

```text
Header Chunk:  "MThd" | 00 00 00 06 | format(2B) | tracks(2B) | ticks(2B)
Track Chunk:   "MTrk" | length(4B, BE) | event bytes... | 00 FF 2F 00
Event:         VLQ delta time | status | data byte(s)        (channel voice)
               VLQ delta time | FF | type | length | payload (meta)
```

Serialization is a pure read of current state: a built file can be written
out repeatedly, and an already-built, no-longer-mutated file is safe to
read from multiple threads.

# Example
```rust
use midgen::prelude::*;

let mut file = MidiFile::default();
let track = file.add_track();
track
    .tempo(120.0, 0)?
    .time_signature(4, 4, 0)?
    .instrument(0, 0x13, 0)?
    .note(0, "c4", 64, 0, None)?
    .note(0, "e4", 64, 0, None)?
    .chord(0, &["c4", "e4", "g4"], 128, None)?;

let bytes = file.to_bytes()?;
assert_eq!(&bytes[..4], b"MThd");
# Ok::<(), midgen::Error>(())
```
"#]
#![no_std]
#![warn(missing_docs)]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod blob;
pub use blob::*;

mod error;
pub use error::*;

pub mod event;

pub mod file;

mod pitch;
pub use pitch::*;

mod tempo;
pub use tempo::*;

mod track;
pub use track::*;

pub mod vlq;

/// Commonly used types, ready to import in one line.
pub mod prelude {
    pub use crate::{
        Blob, Bpm, DEFAULT_VELOCITY, Error, EventError, FileError, MicrosPerQuarter, MimeType,
        Pitch, PitchError, Track, TrackError,
        event::{
            Channel, ChannelVoiceEvent, ChannelVoiceKind, MetaEvent, MetaKind, MetaPayload,
            TrackEvent,
        },
        file::{FormatType, MidiFile, TicksPerQuarterNote},
        vlq::DeltaTime,
    };
}
