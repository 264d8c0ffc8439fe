use super::*;
use crate::timeline::model::TrackKind;

#[test]
fn builder_assembles_a_valid_sequence() {
    let seq = SequenceBuilder::new("s0", "Main")
        .track(
            TrackBuilder::new("v1", "Video 1")
                .clip_at("a", 0.0, 5.0)
                .clip_at("b", 5.0, 3.0)
                .build(),
        )
        .build()
        .unwrap();

    assert_eq!(seq.tracks.len(), 1);
    assert_eq!(seq.tracks[0].kind, TrackKind::Video);
    let a = seq.tracks[0].get_clip("a").unwrap();
    assert_eq!(a.range.source_in_sec, 0.0);
    assert_eq!(a.range.source_out_sec, 5.0);
}

#[test]
fn builder_refuses_overlapping_clips() {
    let err = SequenceBuilder::new("s0", "Main")
        .track(
            TrackBuilder::new("v1", "Video 1")
                .clip_at("a", 0.0, 5.0)
                .clip_at("b", 4.0, 3.0)
                .build(),
        )
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("overlap"));
}

#[test]
fn builder_refuses_duplicate_clip_ids() {
    let err = SequenceBuilder::new("s0", "Main")
        .track(
            TrackBuilder::new("v1", "Video 1")
                .clip_at("a", 0.0, 2.0)
                .clip_at("a", 6.0, 2.0)
                .build(),
        )
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("duplicate clip id"));
}

#[test]
fn clip_builder_offsets_source_range() {
    let clip = ClipBuilder::new("a", 10.0, 4.0).source_in(2.5).build();
    assert_eq!(clip.place.timeline_in_sec, 10.0);
    assert_eq!(clip.place.duration_sec, 4.0);
    assert_eq!(clip.range.source_in_sec, 2.5);
    assert_eq!(clip.range.source_out_sec, 6.5);
}

#[test]
fn track_builder_sets_kind() {
    let track = TrackBuilder::new("a1", "Audio 1")
        .kind(TrackKind::Audio)
        .build();
    assert_eq!(track.kind, TrackKind::Audio);
    assert!(track.clips.is_empty());
}
