use std::collections::BTreeSet;

use crate::foundation::core::{ClipId, SequenceId, TimeSec, TrackId};
use crate::foundation::error::{SpliceError, SpliceResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A complete timeline snapshot.
///
/// A sequence is a pure data model owned by the surrounding project-document
/// layer. The ripple calculators borrow it read-only for the duration of one
/// call and only ever derive fresh [`RippleResult`](crate::RippleResult)
/// values from it; applying those values is the command executor's job.
///
/// Serialized via Serde (JSON, camelCase keys).
pub struct Sequence {
    /// Sequence identifier.
    pub id: SequenceId,
    /// Sequence name for authoring/debugging.
    pub name: String,
    /// Ordered tracks. No cross-track ordering invariant is required.
    pub tracks: Vec<Track>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Track kind. Informational only to the ripple engine.
pub enum TrackKind {
    /// Video track.
    Video,
    /// Audio track.
    Audio,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A lane of non-overlapping clips within a sequence.
pub struct Track {
    /// Track identifier.
    pub id: TrackId,
    /// Track kind.
    pub kind: TrackKind,
    /// Track name for authoring/debugging.
    pub name: String,
    /// Clips in storage order; not guaranteed sorted by start time.
    pub clips: Vec<Clip>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Range within the source media. Ripple math never touches it.
pub struct ClipRange {
    /// Start time within the source, in seconds.
    pub source_in_sec: TimeSec,
    /// End time within the source, in seconds.
    pub source_out_sec: TimeSec,
}

impl ClipRange {
    /// Build a source range.
    pub fn new(source_in: TimeSec, source_out: TimeSec) -> Self {
        Self {
            source_in_sec: source_in,
            source_out_sec: source_out,
        }
    }

    /// Length of the range in seconds.
    pub fn duration(&self) -> TimeSec {
        self.source_out_sec - self.source_in_sec
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Placement of a clip on the timeline.
pub struct ClipPlace {
    /// Absolute start time on the timeline, in seconds.
    pub timeline_in_sec: TimeSec,
    /// Length on the timeline, in seconds.
    pub duration_sec: TimeSec,
}

impl ClipPlace {
    /// Build a placement.
    pub fn new(timeline_in: TimeSec, duration: TimeSec) -> Self {
        Self {
            timeline_in_sec: timeline_in,
            duration_sec: duration,
        }
    }

    /// End time on the timeline, in seconds.
    pub fn timeline_out_sec(&self) -> TimeSec {
        self.timeline_in_sec + self.duration_sec
    }

    /// True when this placement overlaps `other` in time.
    ///
    /// Touching placements (`self` ends exactly where `other` starts) do not
    /// overlap.
    pub fn overlaps(&self, other: &ClipPlace) -> bool {
        self.timeline_in_sec < other.timeline_out_sec()
            && self.timeline_out_sec() > other.timeline_in_sec
    }

    /// True when `time_sec` falls within `[in, out]`.
    pub fn contains(&self, time_sec: TimeSec) -> bool {
        time_sec >= self.timeline_in_sec && time_sec <= self.timeline_out_sec()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A placed media segment on a track.
pub struct Clip {
    /// Clip identifier (unique within a sequence).
    pub id: ClipId,
    /// Placement on the timeline.
    pub place: ClipPlace,
    /// Range within the source media.
    pub range: ClipRange,
}

impl Clip {
    /// Build a clip from its identifier, placement, and source range.
    pub fn new(id: impl Into<ClipId>, place: ClipPlace, range: ClipRange) -> Self {
        Self {
            id: id.into(),
            place,
            range,
        }
    }
}

impl Track {
    /// Clip lookup by id.
    pub fn get_clip(&self, clip_id: &str) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == clip_id)
    }

    /// Clips in left-to-right timeline order.
    ///
    /// Storage order is not trusted; clips are ordered by start time here,
    /// ties broken by id so the result is deterministic.
    pub fn clips_in_order(&self) -> Vec<&Clip> {
        let mut ordered: Vec<&Clip> = self.clips.iter().collect();
        ordered.sort_by(|a, b| {
            a.place
                .timeline_in_sec
                .total_cmp(&b.place.timeline_in_sec)
                .then_with(|| a.id.cmp(&b.id))
        });
        ordered
    }
}

impl Sequence {
    /// Track lookup by id.
    pub fn get_track(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    /// Clip lookup across every track, returning the owning track's id.
    pub fn find_clip(&self, clip_id: &str) -> Option<(&str, &Clip)> {
        self.tracks.iter().find_map(|track| {
            track
                .get_clip(clip_id)
                .map(|clip| (track.id.as_str(), clip))
        })
    }

    /// Total sequence duration: the latest clip end across all tracks.
    pub fn duration(&self) -> TimeSec {
        self.tracks
            .iter()
            .flat_map(|t| t.clips.iter())
            .map(|c| c.place.timeline_out_sec())
            .fold(0.0, f64::max)
    }

    /// Validate snapshot invariants.
    ///
    /// Checks, per track: finite non-negative times, positive durations,
    /// `source_in_sec <= source_out_sec`, and the no-overlap invariant.
    /// Track ids and clip ids must be unique sequence-wide.
    pub fn validate(&self) -> SpliceResult<()> {
        let mut track_ids = BTreeSet::new();
        let mut clip_ids = BTreeSet::new();

        for track in &self.tracks {
            if track.id.trim().is_empty() {
                return Err(SpliceError::validation("track id must be non-empty"));
            }
            if !track_ids.insert(track.id.as_str()) {
                return Err(SpliceError::validation(format!(
                    "duplicate track id '{}'",
                    track.id
                )));
            }

            for clip in &track.clips {
                if clip.id.trim().is_empty() {
                    return Err(SpliceError::validation(format!(
                        "track '{}' contains a clip with an empty id",
                        track.id
                    )));
                }
                if !clip_ids.insert(clip.id.as_str()) {
                    return Err(SpliceError::validation(format!(
                        "duplicate clip id '{}'",
                        clip.id
                    )));
                }
                if !clip.place.timeline_in_sec.is_finite() || clip.place.timeline_in_sec < 0.0 {
                    return Err(SpliceError::validation(format!(
                        "clip '{}' timeline_in_sec must be finite and >= 0",
                        clip.id
                    )));
                }
                if !clip.place.duration_sec.is_finite() || clip.place.duration_sec <= 0.0 {
                    return Err(SpliceError::validation(format!(
                        "clip '{}' duration_sec must be finite and > 0",
                        clip.id
                    )));
                }
                if !clip.range.source_in_sec.is_finite()
                    || !clip.range.source_out_sec.is_finite()
                    || clip.range.source_in_sec < 0.0
                {
                    return Err(SpliceError::validation(format!(
                        "clip '{}' source range must be finite and >= 0",
                        clip.id
                    )));
                }
                if clip.range.source_in_sec > clip.range.source_out_sec {
                    return Err(SpliceError::validation(format!(
                        "clip '{}' has source_in_sec > source_out_sec",
                        clip.id
                    )));
                }
            }

            // Overlap check on ordered clips: any overlap on a track implies
            // an overlapping adjacent pair once sorted by start time.
            let ordered = track.clips_in_order();
            for pair in ordered.windows(2) {
                if pair[0].place.overlaps(&pair[1].place) {
                    return Err(SpliceError::validation(format!(
                        "track '{}': clips '{}' and '{}' overlap",
                        track.id, pair[0].id, pair[1].id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Parse a sequence from its JSON wire shape.
    pub fn from_json_str(json: &str) -> SpliceResult<Self> {
        serde_json::from_str(json).map_err(|e| SpliceError::serde(e.to_string()))
    }

    /// Serialize the sequence to its JSON wire shape.
    pub fn to_json_string(&self) -> SpliceResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SpliceError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
