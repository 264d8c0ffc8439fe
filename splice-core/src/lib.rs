//! Splice is the ripple-edit calculation engine of a non-linear timeline
//! editor.
//!
//! When an edit removes, adds, or relocates material, every downstream clip
//! has to move by an exact amount so the timeline keeps its order and stays
//! free of overlaps. Splice computes those moves; it never applies them.
//!
//! # Pipeline overview
//!
//! 1. **Snapshot**: the project-document layer hands the engine an immutable
//!    [`Sequence`] (tracks of time-placed [`Clip`]s).
//! 2. **Compute**: one of the four calculators — [`delete_ripple`],
//!    [`insert_ripple`], [`trim_ripple`], [`move_ripple`] — derives a
//!    [`RippleResult`] (affected clips plus the uniform signed shift).
//! 3. **Apply**: the command/undo layer turns the result into a new snapshot
//!    under its own single-writer discipline.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: calculators are pure and stable for a
//!   given snapshot; recomputation yields an identical result.
//! - **No IO, no shared state**: every call reads borrowed input and
//!   allocates only fresh output, so calls may run concurrently without
//!   coordination.
//! - **Advisory failure semantics**: unknown track/clip ids degrade to empty
//!   results; only malformed numeric arguments are rejected, as
//!   [`SpliceError::Validation`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod ripple;
mod timeline;

pub use foundation::core::{
    ClipId, SequenceId, TimeSec, TrackId, is_valid_duration_sec, is_valid_time_sec,
};
pub use foundation::error::{SpliceError, SpliceResult};
pub use ripple::calculator::{
    RippleAffectedClip, RippleResult, delete_ripple, insert_ripple, move_ripple, trim_ripple,
};
pub use ripple::mode::RippleMode;
pub use timeline::dsl::{ClipBuilder, SequenceBuilder, TrackBuilder};
pub use timeline::model::{Clip, ClipPlace, ClipRange, Sequence, Track, TrackKind};
