//! The approved-import pipeline: commit evaluated media files into the
//! managed library.
//!
//! Upstream matching and quality evaluation produce [`ImportDecision`]s; this
//! crate owns everything after that verdict: deduplicating approved decisions
//! per library item, recovering provenance naming, deciding and delegating
//! move/copy/hard-link placement, recording catalog entries, and reporting a
//! per-decision outcome with the events to dispatch.

pub mod decision;
pub mod events;
pub mod grouping;
pub mod naming;
pub mod pipeline;
pub mod placement;
pub mod progress;

pub use decision::{DownloadSource, ImportDecision, LocalMediaFile, ParsedTitleInfo, Rejection};
pub use events::{FileImportedEvent, NotificationSink, PublishError, dispatch_events};
pub use grouping::{Grouping, group_decisions};
pub use naming::{item_relative_path, original_relative_path, resolve_scene_name};
pub use pipeline::{
    DUPLICATE_FILE_REASON, ImportOptions, ImportReport, ImportResult, ImportStats, ImportStatus,
    Importer, UNMATCHED_FILE_REASON,
};
pub use placement::{FileRelocator, PlacementPlan, RelocateError, resolve_placement};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
