use midgen::prelude::*;

fn channel_event(event: &TrackEvent) -> &ChannelVoiceEvent {
    match event {
        TrackEvent::ChannelVoice(e) => e,
        TrackEvent::Meta(_) => panic!("expected a channel voice event"),
    }
}

fn meta_event(event: &TrackEvent) -> &MetaEvent {
    match event {
        TrackEvent::Meta(e) => e,
        TrackEvent::ChannelVoice(_) => panic!("expected a meta event"),
    }
}

#[test]
fn note_on_resolves_names_and_defaults_velocity() {
    let mut track = Track::new();
    track.note_on(0, "c4", 0, None).unwrap();

    let event = channel_event(&track.events()[0]);
    assert_eq!(event.kind(), ChannelVoiceKind::NoteOn);
    assert_eq!(event.param1(), 60);
    assert_eq!(event.param2(), Some(DEFAULT_VELOCITY));
}

#[test]
fn note_on_accepts_numeric_pitch_and_velocity() {
    let mut track = Track::new();
    track.note_on(0, 60u8, 0, Some(127)).unwrap();

    let event = channel_event(&track.events()[0]);
    assert_eq!(event.param1(), 60);
    assert_eq!(event.param2(), Some(127));
}

#[test]
fn note_off_mirrors_note_on() {
    let mut track = Track::new();
    track.note_off(0, "c4", 0, None).unwrap();

    let event = channel_event(&track.events()[0]);
    assert_eq!(event.kind(), ChannelVoiceKind::NoteOff);
    assert_eq!(event.param1(), 60);
}

#[test]
fn note_emits_on_off_pair() {
    let mut track = Track::new();
    track.note(0, "e4", 128, 0, None).unwrap();

    assert_eq!(track.events().len(), 2);
    let on = channel_event(&track.events()[0]);
    let off = channel_event(&track.events()[1]);
    assert_eq!(on.kind(), ChannelVoiceKind::NoteOn);
    assert_eq!(off.kind(), ChannelVoiceKind::NoteOff);
    assert_eq!(on.param1(), 64);
    assert_eq!(off.param1(), 64);
    assert_eq!(off.delta().ticks(), 128);
}

#[test]
fn zero_duration_note_has_no_release() {
    let mut track = Track::new();
    track.note(0, "c4", 0, 0, None).unwrap();

    assert_eq!(track.events().len(), 1);
    assert_eq!(
        channel_event(&track.events()[0]).kind(),
        ChannelVoiceKind::NoteOn
    );
}

#[test]
fn chord_shape() {
    let mut track = Track::new();
    track.chord(0, &["c4", "e4", "g4"], 256, None).unwrap();

    assert_eq!(track.events().len(), 6);
    for i in 0..3 {
        assert_eq!(
            channel_event(&track.events()[i]).kind(),
            ChannelVoiceKind::NoteOn
        );
    }
    for i in 3..6 {
        assert_eq!(
            channel_event(&track.events()[i]).kind(),
            ChannelVoiceKind::NoteOff
        );
    }

    let pitches: Vec<u8> = track.events()[..3]
        .iter()
        .map(|e| channel_event(e).param1())
        .collect();
    assert_eq!(pitches, [60, 64, 67]);

    // only the first release carries the duration
    assert_eq!(channel_event(&track.events()[3]).delta().ticks(), 256);
    assert_eq!(channel_event(&track.events()[4]).delta().ticks(), 0);
    assert_eq!(channel_event(&track.events()[5]).delta().ticks(), 0);
}

#[test]
fn empty_chord_is_rejected() {
    let mut track = Track::new();
    let err = track.chord(0, &[] as &[u8], 256, None).unwrap_err();
    assert_eq!(err, Error::Track(TrackError::EmptyChord));
    assert!(track.events().is_empty());
}

#[test]
fn instrument_is_a_program_change() {
    let mut track = Track::new();
    track.instrument(0, 0x13, 0).unwrap();

    let event = channel_event(&track.events()[0]);
    assert_eq!(event.kind(), ChannelVoiceKind::ProgramChange);
    assert_eq!(event.param1(), 0x13);
    assert_eq!(event.param2(), None);
}

#[test]
fn tempo_payload() {
    let mut track = Track::new();
    track.tempo(120.0, 0).unwrap();

    let event = meta_event(&track.events()[0]);
    assert_eq!(event.kind(), Some(MetaKind::Tempo));
    assert_eq!(*event.payload(), MetaPayload::Bytes(vec![7, 161, 32]));
}

#[test]
fn time_signature_payloads() {
    let mut track = Track::new();
    track.time_signature(4, 4, 0).unwrap();
    track.time_signature(3, 8, 0).unwrap();

    let common = meta_event(&track.events()[0]);
    assert_eq!(common.kind(), Some(MetaKind::TimeSignature));
    assert_eq!(*common.payload(), MetaPayload::Bytes(vec![4, 2, 0x18, 0x08]));

    let waltz = meta_event(&track.events()[1]);
    assert_eq!(*waltz.payload(), MetaPayload::Bytes(vec![3, 3, 0x18, 0x08]));
}

#[test]
fn time_signature_rejects_non_power_of_two() {
    let mut track = Track::new();
    let err = track.time_signature(4, 3, 0).unwrap_err();
    assert_eq!(err, Error::Track(TrackError::TimeSignatureDenominator(3)));
    let err = track.time_signature(4, 0, 0).unwrap_err();
    assert_eq!(err, Error::Track(TrackError::TimeSignatureDenominator(0)));
    assert!(track.events().is_empty());
}

#[test]
fn key_signature_payloads() {
    let mut track = Track::new();
    track.key_signature(0, false, 0).unwrap();
    track.key_signature(2, false, 0).unwrap();
    track.key_signature(-3, true, 0).unwrap();

    assert_eq!(
        *meta_event(&track.events()[0]).payload(),
        MetaPayload::Bytes(vec![0, 0])
    );
    assert_eq!(
        *meta_event(&track.events()[1]).payload(),
        MetaPayload::Bytes(vec![2, 0])
    );
    // three flats, minor: two's-complement count
    assert_eq!(
        *meta_event(&track.events()[2]).payload(),
        MetaPayload::Bytes(vec![0xFD, 1])
    );
}

#[test]
fn text_helpers() {
    let mut track = Track::new();
    track
        .track_name("lead", 0)
        .unwrap()
        .copyright("(c) 2026", 0)
        .unwrap()
        .marker("verse", 0)
        .unwrap()
        .lyric("la", 0)
        .unwrap()
        .cue_point("hit", 0)
        .unwrap();

    let kinds: Vec<Option<MetaKind>> =
        track.events().iter().map(|e| meta_event(e).kind()).collect();
    assert_eq!(
        kinds,
        [
            Some(MetaKind::TrackName),
            Some(MetaKind::Copyright),
            Some(MetaKind::Marker),
            Some(MetaKind::Lyric),
            Some(MetaKind::CuePoint),
        ]
    );
    assert_eq!(
        *meta_event(&track.events()[0]).payload(),
        MetaPayload::Text("lead".into())
    );
}

#[test]
fn builder_calls_chain() {
    let mut track = Track::new();
    track
        .note(0, "c4", 128, 0, None)
        .unwrap()
        .note(0, "d4", 128, 0, None)
        .unwrap()
        .note(0, "e4", 128, 0, None)
        .unwrap()
        .tempo(120.0, 0)
        .unwrap()
        .time_signature(4, 4, 0)
        .unwrap()
        .instrument(0, 19, 0)
        .unwrap();

    assert_eq!(track.events().len(), 9);
}

#[test]
fn invalid_pitch_names_surface_from_builders() {
    let mut track = Track::new();
    let err = track.note_on(0, "xyz", 0, None).unwrap_err();
    assert_eq!(err, Error::Pitch(PitchError::InvalidNoteName("xyz".into())));
    assert!(track.events().is_empty());
}

#[test]
fn out_of_bounds_channel_surfaces_from_builders() {
    let mut track = Track::new();
    let err = track.note_on(16, "c4", 0, None).unwrap_err();
    assert_eq!(err, Error::Event(EventError::ChannelOutOfBounds(16)));
}

#[test]
fn pre_built_events_round_trip_through_add_event() {
    let on = ChannelVoiceEvent::new(ChannelVoiceKind::NoteOn, 9, 0, 36)
        .unwrap()
        .with_param2(100);
    let mut track = Track::new();
    track.add_event(on).add_event(
        MetaEvent::new(MetaKind::EndOfTrack, 0).unwrap(),
    );

    assert_eq!(track.events().len(), 2);
    assert_eq!(track.events()[0], TrackEvent::ChannelVoice(on));
}
