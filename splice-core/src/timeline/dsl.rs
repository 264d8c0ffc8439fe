use crate::foundation::core::{ClipId, SequenceId, TimeSec, TrackId};
use crate::foundation::error::SpliceResult;
use crate::timeline::model::{Clip, ClipPlace, ClipRange, Sequence, Track, TrackKind};

/// Fluent constructor for [`Sequence`] snapshots.
///
/// `build()` validates the assembled sequence, so a builder can never hand
/// out a snapshot that violates the no-overlap invariant.
pub struct SequenceBuilder {
    id: SequenceId,
    name: String,
    tracks: Vec<Track>,
}

impl SequenceBuilder {
    /// Start a sequence with the given id and name.
    pub fn new(id: impl Into<SequenceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    /// Append a track.
    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Assemble and validate the sequence.
    pub fn build(self) -> SpliceResult<Sequence> {
        let seq = Sequence {
            id: self.id,
            name: self.name,
            tracks: self.tracks,
        };
        seq.validate()?;
        Ok(seq)
    }
}

/// Fluent constructor for [`Track`] values.
pub struct TrackBuilder {
    id: TrackId,
    name: String,
    kind: TrackKind,
    clips: Vec<Clip>,
}

impl TrackBuilder {
    /// Start a video track with the given id and name.
    pub fn new(id: impl Into<TrackId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: TrackKind::Video,
            clips: Vec::new(),
        }
    }

    /// Set the track kind.
    pub fn kind(mut self, kind: TrackKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append a clip.
    pub fn clip(mut self, clip: Clip) -> Self {
        self.clips.push(clip);
        self
    }

    /// Append a clip at `timeline_in_sec` lasting `duration_sec`, with a
    /// source range starting at zero.
    pub fn clip_at(self, id: impl Into<ClipId>, timeline_in_sec: TimeSec, duration_sec: TimeSec) -> Self {
        self.clip(ClipBuilder::new(id, timeline_in_sec, duration_sec).build())
    }

    /// Assemble the track.
    pub fn build(self) -> Track {
        Track {
            id: self.id,
            kind: self.kind,
            name: self.name,
            clips: self.clips,
        }
    }
}

/// Fluent constructor for [`Clip`] values.
pub struct ClipBuilder {
    id: ClipId,
    timeline_in_sec: TimeSec,
    duration_sec: TimeSec,
    source_in_sec: TimeSec,
}

impl ClipBuilder {
    /// Start a clip at `timeline_in_sec` lasting `duration_sec`.
    pub fn new(id: impl Into<ClipId>, timeline_in_sec: TimeSec, duration_sec: TimeSec) -> Self {
        Self {
            id: id.into(),
            timeline_in_sec,
            duration_sec,
            source_in_sec: 0.0,
        }
    }

    /// Set the source-range start (defaults to zero).
    pub fn source_in(mut self, source_in_sec: TimeSec) -> Self {
        self.source_in_sec = source_in_sec;
        self
    }

    /// Assemble the clip. The source range spans one timeline duration from
    /// the configured source start.
    pub fn build(self) -> Clip {
        Clip::new(
            self.id,
            ClipPlace::new(self.timeline_in_sec, self.duration_sec),
            ClipRange::new(self.source_in_sec, self.source_in_sec + self.duration_sec),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
