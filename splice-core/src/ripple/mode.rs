#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Ripple-mode configuration, owned by the caller.
///
/// The calculators take this value explicitly on every invocation instead of
/// consulting shared editor state; they read only [`all_tracks`]. The
/// [`enabled`] flag governs whether the *caller* ripples at all when applying
/// an edit — the calculators stay usable for previews regardless of it.
///
/// Both flags default to off.
///
/// [`all_tracks`]: RippleMode::all_tracks
/// [`enabled`]: RippleMode::enabled
pub struct RippleMode {
    /// Whether the caller should ripple when applying edits.
    pub enabled: bool,
    /// Fan the shift out to every track instead of the anchor track(s) only.
    pub all_tracks: bool,
}

impl RippleMode {
    /// Flip the enabled flag.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Set the enabled flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether ripple is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ripple/mode.rs"]
mod tests;
