use midgen::prelude::*;

/// Read the big-endian u32 length field of the first track chunk.
fn track_length(bytes: &[u8], chunk_start: usize) -> u32 {
    u32::from_be_bytes([
        bytes[chunk_start + 4],
        bytes[chunk_start + 5],
        bytes[chunk_start + 6],
        bytes[chunk_start + 7],
    ])
}

#[test]
fn header_chunk_layout() {
    let mut file = MidiFile::default();
    file.add_track();
    let bytes = file.to_bytes().unwrap();

    assert_eq!(&bytes[0..4], b"MThd");
    assert_eq!(&bytes[4..8], [0, 0, 0, 6]);
    // format 0 for a single track
    assert_eq!(&bytes[8..10], [0, 0]);
    // track count
    assert_eq!(&bytes[10..12], [0, 1]);
    // default resolution of 128
    assert_eq!(&bytes[12..14], [0, 128]);
}

#[test]
fn format_one_for_multiple_tracks() {
    let mut file = MidiFile::default();
    file.add_track();
    file.add_track();
    file.add_track();
    let bytes = file.to_bytes().unwrap();

    assert_eq!(file.format_type(), FormatType::Simultaneous);
    assert_eq!(&bytes[8..10], [0, 1]);
    assert_eq!(&bytes[10..12], [0, 3]);
}

#[test]
fn resolution_is_written_big_endian() {
    let mut file = MidiFile::new(960).unwrap();
    file.add_track();
    let bytes = file.to_bytes().unwrap();
    assert_eq!(&bytes[12..14], [0x03, 0xC0]);
}

#[test]
fn empty_track_length_is_end_marker_only() {
    let mut file = MidiFile::default();
    file.add_track();
    let bytes = file.to_bytes().unwrap();

    assert_eq!(&bytes[14..18], b"MTrk");
    assert_eq!(track_length(&bytes, 14), 4);
    assert_eq!(&bytes[bytes.len() - 4..], [0x00, 0xFF, 0x2F, 0x00]);
}

#[test]
fn known_file_byte_for_byte() {
    let mut file = MidiFile::default();
    file.add_track().note(0, "c4", 64, 0, None).unwrap();

    #[rustfmt::skip]
    let expected = [
        // header chunk
        0x4D, 0x54, 0x68, 0x64, // "MThd"
        0x00, 0x00, 0x00, 0x06, // chunk size
        0x00, 0x00,             // format 0
        0x00, 0x01,             // one track
        0x00, 0x80,             // 128 ticks per quarter note
        // track chunk
        0x4D, 0x54, 0x72, 0x6B, // "MTrk"
        0x00, 0x00, 0x00, 0x0C, // twelve bytes follow
        0x00, 0x90, 0x3C, 0x5A, // note on, middle C, default velocity
        0x40, 0x80, 0x3C, 0x5A, // note off 64 ticks later
        0x00, 0xFF, 0x2F, 0x00, // end of track
    ];
    assert_eq!(file.to_bytes().unwrap(), expected);
}

#[test]
fn serialization_is_idempotent() {
    let mut file = MidiFile::default();
    let track = file.add_track();
    track
        .tempo(120.0, 0)
        .unwrap()
        .time_signature(4, 4, 0)
        .unwrap()
        .note(0, "c4", 64, 0, None)
        .unwrap()
        .note(0, "d4", 64, 0, None)
        .unwrap();

    let first = file.to_bytes().unwrap();
    let second = file.to_bytes().unwrap();
    assert_eq!(first, second);

    // the model survives serialization untouched
    assert_eq!(file.tracks().len(), 1);
    assert_eq!(file.tracks()[0].events().len(), 6);
}

#[test]
fn push_track_keeps_chaining_on_the_file() {
    let mut standalone = Track::new();
    standalone.note(9, 36u8, 32, 0, Some(100)).unwrap();

    let mut file = MidiFile::default();
    file.push_track(standalone).push_track(Track::new());
    assert_eq!(file.tracks().len(), 2);
    assert_eq!(file.tracks()[0].events().len(), 2);
}

#[test]
fn add_track_returns_the_new_track() {
    let mut file = MidiFile::default();
    file.add_track().note(0, 60u8, 64, 0, None).unwrap();
    assert_eq!(file.tracks().len(), 1);
    assert_eq!(file.tracks()[0].events().len(), 2);
}

#[test]
fn resolution_validation_is_immediate() {
    assert_eq!(
        MidiFile::new(0).unwrap_err(),
        FileError::TicksOutOfRange(0)
    );
    assert_eq!(
        MidiFile::new(32768).unwrap_err(),
        FileError::TicksOutOfRange(32768)
    );
    assert!(MidiFile::new(1).is_ok());
    assert!(MidiFile::new(32767).is_ok());
}

#[test]
fn blob_wraps_the_same_bytes() {
    let mut file = MidiFile::default();
    file.add_track().chord(0, &["c4", "e4", "g4"], 256, None).unwrap();

    let blob = file.to_blob().unwrap();
    assert_eq!(blob.mime(), MimeType::Midi);
    assert_eq!(blob.mime().as_str(), "audio/x-midi");
    assert_eq!(blob.bytes(), file.to_bytes().unwrap());

    let generic = file.to_blob_with(MimeType::OctetStream).unwrap();
    assert_eq!(generic.mime().as_str(), "application/octet-stream");
    assert_eq!(generic.len(), blob.len());
}

#[cfg(feature = "std")]
#[test]
fn write_matches_to_bytes() {
    let mut file = MidiFile::default();
    file.add_track().note(0, "c4", 64, 0, None).unwrap();

    let mut out = Vec::new();
    file.write(&mut out).unwrap();
    assert_eq!(out, file.to_bytes().unwrap());
}

#[test]
fn meta_kind_unset_surfaces_at_file_serialization() {
    let mut file = MidiFile::default();
    let mut track = Track::new();
    track.add_event(MetaEvent::default());
    file.push_track(track);

    assert_eq!(file.to_bytes().unwrap_err(), EventError::MetaKindUnset);
}
