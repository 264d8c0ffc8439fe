use std::collections::BTreeSet;

use crate::foundation::core::{ClipId, TimeSec, is_valid_duration_sec, is_valid_time_sec};
use crate::foundation::error::{SpliceError, SpliceResult};
use crate::ripple::mode::RippleMode;
use crate::timeline::model::{Clip, Sequence};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One clip displaced by a ripple edit.
///
/// Ephemeral: computed fresh per call, never persisted by the engine.
pub struct RippleAffectedClip {
    /// Displaced clip id.
    pub clip_id: ClipId,
    /// Start position before the edit, in seconds.
    pub original_time: TimeSec,
    /// Start position after the edit, in seconds.
    pub new_time: TimeSec,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Net outcome of one ripple computation.
///
/// Consumed immediately by the caller to produce a new sequence snapshot;
/// every affected clip satisfies `new_time == original_time + total_delta`.
pub struct RippleResult {
    /// Displaced clips, ascending by original start time.
    pub affected_clips: Vec<RippleAffectedClip>,
    /// Signed net shift in seconds, applied uniformly to every affected clip.
    pub total_delta: TimeSec,
}

impl RippleResult {
    /// Result describing an edit that displaces nothing.
    pub fn empty() -> Self {
        Self {
            affected_clips: Vec::new(),
            total_delta: 0.0,
        }
    }

    /// True when the edit displaces nothing and carries no net shift.
    pub fn is_noop(&self) -> bool {
        self.affected_clips.is_empty() && self.total_delta == 0.0
    }
}

#[tracing::instrument(skip(seq))]
/// Compute the leftward shift caused by deleting `clip_ids`.
///
/// Ids not found in the snapshot contribute nothing and never error;
/// an empty input set (or one with no resolvable id) yields an empty result.
/// The origin point is the earliest start among the removed clips; every
/// remaining clip strictly after it — on the removed clips' tracks, or on
/// every track when `mode.all_tracks` is set — shifts left by the summed
/// removed duration.
pub fn delete_ripple(
    seq: &Sequence,
    mode: RippleMode,
    clip_ids: &[ClipId],
) -> SpliceResult<RippleResult> {
    let mut removed: Vec<(&str, &Clip)> = Vec::new();
    let mut exclude = BTreeSet::new();
    for id in clip_ids {
        if let Some((track_id, clip)) = seq.find_clip(id) {
            removed.push((track_id, clip));
            exclude.insert(clip.id.clone());
        }
    }
    if removed.is_empty() {
        return Ok(RippleResult::empty());
    }

    let total_removed: TimeSec = removed.iter().map(|(_, c)| c.place.duration_sec).sum();
    let origin_point = removed
        .iter()
        .map(|(_, c)| c.place.timeline_in_sec)
        .fold(f64::INFINITY, f64::min);

    let affected = if mode.all_tracks {
        seq.all_clips_after(origin_point, &exclude)
    } else {
        let scope: BTreeSet<&str> = removed.iter().map(|(tid, _)| *tid).collect();
        seq.all_clips_after(origin_point, &exclude)
            .into_iter()
            .filter(|(tid, _)| scope.contains(tid))
            .collect()
    };

    Ok(shifted(affected, -total_removed))
}

#[tracing::instrument(skip(seq))]
/// Compute the rightward shift caused by inserting `duration_sec` of material
/// at `position_sec` on `track_id`.
///
/// Only the downstream shift is reported; splicing the new material in is the
/// caller's responsibility. Clips starting at or before the insertion point
/// are untouched. `total_delta` is `+duration_sec` even when the affected set
/// is empty (including for an unknown track id).
pub fn insert_ripple(
    seq: &Sequence,
    mode: RippleMode,
    track_id: &str,
    position_sec: TimeSec,
    duration_sec: TimeSec,
) -> SpliceResult<RippleResult> {
    ensure_time("insert position", position_sec)?;
    ensure_duration("insert duration", duration_sec)?;

    let exclude = BTreeSet::new();
    let affected = if mode.all_tracks {
        seq.all_clips_after(position_sec, &exclude)
    } else {
        on_track(seq, track_id, position_sec, &exclude)
    };

    Ok(shifted(affected, duration_sec))
}

#[tracing::instrument(skip(seq))]
/// Compute the shift caused by changing a clip's duration from
/// `old_duration_sec` to `new_duration_sec`.
///
/// The trimmed clip's own start never moves (it sits exactly at the
/// threshold, and equality is excluded); every clip starting strictly after
/// it — including one abutting its end — shifts by the duration delta. A
/// zero delta or an unknown clip id yields an empty result.
pub fn trim_ripple(
    seq: &Sequence,
    mode: RippleMode,
    clip_id: &str,
    old_duration_sec: TimeSec,
    new_duration_sec: TimeSec,
) -> SpliceResult<RippleResult> {
    ensure_duration("old duration", old_duration_sec)?;
    ensure_duration("new duration", new_duration_sec)?;

    let delta = new_duration_sec - old_duration_sec;
    if delta == 0.0 {
        return Ok(RippleResult::empty());
    }
    let Some((track_id, clip)) = seq.find_clip(clip_id) else {
        return Ok(RippleResult::empty());
    };

    let threshold = clip.place.timeline_in_sec;
    let exclude = BTreeSet::new();
    let affected = if mode.all_tracks {
        seq.all_clips_after(threshold, &exclude)
    } else {
        on_track(seq, track_id, threshold, &exclude)
    };

    Ok(shifted(affected, delta))
}

#[tracing::instrument(skip(seq))]
/// Compute the shift caused by moving a clip from `old_position_sec` to
/// `new_position_sec`.
///
/// `total_delta` is always `new - old`. The affected set is the clips whose
/// start lies strictly between the two positions, the moved clip itself
/// excluded; each shifts uniformly by `total_delta`. A zero delta or an
/// unknown clip id yields an empty result.
pub fn move_ripple(
    seq: &Sequence,
    mode: RippleMode,
    clip_id: &str,
    old_position_sec: TimeSec,
    new_position_sec: TimeSec,
) -> SpliceResult<RippleResult> {
    ensure_time("old position", old_position_sec)?;
    ensure_time("new position", new_position_sec)?;

    let delta = new_position_sec - old_position_sec;
    if delta == 0.0 {
        return Ok(RippleResult::empty());
    }
    let Some((track_id, _)) = seq.find_clip(clip_id) else {
        return Ok(RippleResult::empty());
    };

    let lower = old_position_sec.min(new_position_sec);
    let upper = old_position_sec.max(new_position_sec);
    let exclude = BTreeSet::from([clip_id.to_string()]);
    let traversed = if mode.all_tracks {
        seq.all_clips_after(lower, &exclude)
    } else {
        on_track(seq, track_id, lower, &exclude)
    };
    let affected: Vec<(&str, &Clip)> = traversed
        .into_iter()
        .filter(|(_, c)| c.place.timeline_in_sec < upper)
        .collect();

    Ok(shifted(affected, delta))
}

fn on_track<'a>(
    seq: &'a Sequence,
    track_id: &'a str,
    threshold: TimeSec,
    exclude: &BTreeSet<ClipId>,
) -> Vec<(&'a str, &'a Clip)> {
    seq.clips_after(track_id, threshold, exclude)
        .into_iter()
        .map(|clip| (track_id, clip))
        .collect()
}

fn shifted(affected: Vec<(&str, &Clip)>, delta: TimeSec) -> RippleResult {
    let affected_clips = affected
        .into_iter()
        .map(|(_, clip)| RippleAffectedClip {
            clip_id: clip.id.clone(),
            original_time: clip.place.timeline_in_sec,
            new_time: clip.place.timeline_in_sec + delta,
        })
        .collect();
    RippleResult {
        affected_clips,
        total_delta: delta,
    }
}

fn ensure_time(what: &str, value: TimeSec) -> SpliceResult<()> {
    if !is_valid_time_sec(value) {
        return Err(SpliceError::validation(format!(
            "{what} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn ensure_duration(what: &str, value: TimeSec) -> SpliceResult<()> {
    if !is_valid_duration_sec(value) {
        return Err(SpliceError::validation(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/ripple/calculator.rs"]
mod tests;
