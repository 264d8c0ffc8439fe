use std::collections::BTreeSet;

use crate::foundation::core::{ClipId, TimeSec};
use crate::timeline::model::{Clip, Sequence, Track};

impl Sequence {
    /// Clips on `track_id` starting strictly after `threshold`.
    ///
    /// Equality is excluded on purpose: a clip starting exactly at the cut
    /// point is not downstream of it. Ids in `exclude` are filtered out.
    /// Results are ordered ascending by start time (ties by id); a
    /// non-existent track yields an empty vec, not an error.
    pub fn clips_after(
        &self,
        track_id: &str,
        threshold: TimeSec,
        exclude: &BTreeSet<ClipId>,
    ) -> Vec<&Clip> {
        match self.get_track(track_id) {
            Some(track) => clips_after_on(track, threshold, exclude),
            None => Vec::new(),
        }
    }

    /// [`Sequence::clips_after`] flattened across every track.
    ///
    /// Returns `(track_id, clip)` pairs ordered ascending by start time,
    /// ties broken by track position and then clip id so the result is
    /// deterministic for a given snapshot.
    pub fn all_clips_after(
        &self,
        threshold: TimeSec,
        exclude: &BTreeSet<ClipId>,
    ) -> Vec<(&str, &Clip)> {
        let mut hits: Vec<(usize, &str, &Clip)> = Vec::new();
        for (track_index, track) in self.tracks.iter().enumerate() {
            for clip in &track.clips {
                if clip.place.timeline_in_sec > threshold && !exclude.contains(&clip.id) {
                    hits.push((track_index, track.id.as_str(), clip));
                }
            }
        }
        hits.sort_by(|a, b| {
            a.2.place
                .timeline_in_sec
                .total_cmp(&b.2.place.timeline_in_sec)
                .then_with(|| a.0.cmp(&b.0))
                .then_with(|| a.2.id.cmp(&b.2.id))
        });
        hits.into_iter().map(|(_, tid, clip)| (tid, clip)).collect()
    }
}

fn clips_after_on<'a>(
    track: &'a Track,
    threshold: TimeSec,
    exclude: &BTreeSet<ClipId>,
) -> Vec<&'a Clip> {
    let mut hits: Vec<&Clip> = track
        .clips
        .iter()
        .filter(|c| c.place.timeline_in_sec > threshold && !exclude.contains(&c.id))
        .collect();
    hits.sort_by(|a, b| {
        a.place
            .timeline_in_sec
            .total_cmp(&b.place.timeline_in_sec)
            .then_with(|| a.id.cmp(&b.id))
    });
    hits
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/query.rs"]
mod tests;
