//! The import orchestrator: one synchronous pass over a decision batch.
//!
//! Sequencing per winning decision: naming, placement plan, relocation,
//! record build, catalog write, event collection. Failures are
//! decision-scoped and never abort the batch; every input decision comes
//! back as exactly one result, in input order.

use reel_vault_catalog::{CatalogWriter, LibraryFile};
use reel_vault_core::PlacementMode;
use serde::{Deserialize, Serialize};

use crate::decision::{DownloadSource, ImportDecision, Rejection};
use crate::events::FileImportedEvent;
use crate::grouping::group_decisions;
use crate::naming;
use crate::placement::{FileRelocator, resolve_placement};
use crate::progress::ImportProgress;

/// Reason attached to approved decisions that lose the per-item size
/// tie-break.
pub const DUPLICATE_FILE_REASON: &str = "Not the largest file for this item";

/// Reason attached to approved decisions that carry no library item.
pub const UNMATCHED_FILE_REASON: &str = "File is not matched to a library item";

// ── Options & Results ───────────────────────────────────────────────────────

/// Options controlling one import batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// True when the batch arrives from a completed download and files must
    /// be placed; false when they are already resident in the library.
    pub new_download: bool,
    /// The download the batch came from, when there is one.
    pub source: Option<DownloadSource>,
    /// Caller-forced transfer mode; wins over everything else.
    pub mode_override: Option<PlacementMode>,
}

impl ImportOptions {
    /// Options for a batch arriving from a completed download.
    pub fn new_download() -> Self {
        Self {
            new_download: true,
            ..Self::default()
        }
    }

    /// Options for re-importing files already resident in the library.
    pub fn existing_files() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: DownloadSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_mode_override(mut self, mode: PlacementMode) -> Self {
        self.mode_override = Some(mode);
        self
    }
}

/// Outcome tag for one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Imported,
    Rejected,
}

/// Outcome of one input decision.
#[derive(Debug)]
pub struct ImportResult {
    /// The originating decision, including any rejection the pipeline added.
    pub decision: ImportDecision,
    pub status: ImportStatus,
}

impl ImportResult {
    pub fn imported(&self) -> bool {
        self.status == ImportStatus::Imported
    }

    /// Rejection reasons carried upstream or added by the pipeline.
    pub fn rejections(&self) -> &[Rejection] {
        &self.decision.rejections
    }
}

/// Statistics from a single import batch.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub total: u64,
    pub imported: u64,
    pub rejected_upstream: u64,
    pub duplicates: u64,
    pub unmatched: u64,
    pub placement_failures: u64,
    pub catalog_failures: u64,
}

/// Everything produced by one import batch.
#[derive(Debug)]
pub struct ImportReport {
    /// One result per input decision, in input order.
    pub results: Vec<ImportResult>,
    /// One event per committed file, for the caller to dispatch after its
    /// own commit point.
    pub events: Vec<FileImportedEvent>,
    pub stats: ImportStats,
}

// ── Orchestrator ────────────────────────────────────────────────────────────

/// The approved-import pipeline over its two external seams.
pub struct Importer<'a> {
    relocator: &'a dyn FileRelocator,
    catalog: &'a dyn CatalogWriter,
}

impl<'a> Importer<'a> {
    pub fn new(relocator: &'a dyn FileRelocator, catalog: &'a dyn CatalogWriter) -> Self {
        Self { relocator, catalog }
    }

    /// Commit a batch of decisions into the library.
    ///
    /// The optional `progress` callback is invoked as decisions are
    /// processed. Never fails as a whole; per-decision failures surface as
    /// Rejected results with a reason attached.
    pub fn import(
        &self,
        decisions: Vec<ImportDecision>,
        options: &ImportOptions,
        progress: Option<&dyn ImportProgress>,
    ) -> ImportReport {
        let mut decisions = decisions;
        let mut statuses = vec![ImportStatus::Rejected; decisions.len()];
        let mut stats = ImportStats::default();
        stats.total = decisions.len() as u64;

        let grouping = group_decisions(&decisions);
        stats.rejected_upstream = grouping.rejected.len() as u64;
        stats.duplicates = grouping.duplicates.len() as u64;
        stats.unmatched = grouping.unmatched.len() as u64;

        for &index in &grouping.duplicates {
            decisions[index]
                .rejections
                .push(Rejection::new(DUPLICATE_FILE_REASON));
            if let Some(p) = progress {
                p.on_rejected(&decisions[index].file.path, DUPLICATE_FILE_REASON);
            }
        }

        for &index in &grouping.unmatched {
            decisions[index]
                .rejections
                .push(Rejection::new(UNMATCHED_FILE_REASON));
            if let Some(p) = progress {
                p.on_rejected(&decisions[index].file.path, UNMATCHED_FILE_REASON);
            }
        }

        let source = options.source.as_ref();
        // The plan depends only on batch-level inputs; resolve it once.
        let plan = resolve_placement(options.new_download, source, options.mode_override);

        let mut events = Vec::new();
        let total_winners = grouping.winners.len();

        for (position, &index) in grouping.winners.iter().enumerate() {
            let file = decisions[index].file.clone();

            if let Some(p) = progress {
                p.on_file(position + 1, total_winners, &file.path);
            }

            // Grouping only promotes matched decisions.
            let Some(item) = &file.library_item else {
                decisions[index]
                    .rejections
                    .push(Rejection::new(UNMATCHED_FILE_REASON));
                continue;
            };

            let mut record = LibraryFile {
                library_item_id: item.id,
                path: file.path.clone(),
                relative_path: None,
                original_path: naming::original_relative_path(&file.path, source),
                scene_name: naming::resolve_scene_name(&file, source, total_winners),
                size: file.size,
                quality: file.quality,
                release_group: file.release_group.clone(),
                download_id: source.and_then(|s| s.download_id.clone()),
                added_at: chrono::Utc::now().to_rfc3339(),
            };

            if !plan.requires_placement {
                record.relative_path = naming::item_relative_path(&file.path, &item.path);
            }

            if plan.requires_placement
                && let Err(e) = self.relocator.place(&record, item, plan.mode)
            {
                stats.placement_failures += 1;
                log::warn!("Could not place {} in the library: {}", file.path, e);
                let reason = format!("Failed to place file in library: {e}");
                if let Some(p) = progress {
                    p.on_rejected(&file.path, &reason);
                }
                decisions[index].rejections.push(Rejection::new(reason));
                continue;
            }

            match self.catalog.add(&record) {
                Ok(()) => {
                    stats.imported += 1;
                    statuses[index] = ImportStatus::Imported;
                    if let Some(p) = progress {
                        p.on_imported(&file.path);
                    }
                    events.push(FileImportedEvent {
                        record,
                        decision: decisions[index].clone(),
                        new_download: options.new_download,
                    });
                }
                Err(e) => {
                    stats.catalog_failures += 1;
                    log::warn!("Could not record {} in the catalog: {}", file.path, e);
                    let reason = format!("Failed to add file to catalog: {e}");
                    if let Some(p) = progress {
                        p.on_rejected(&file.path, &reason);
                    }
                    decisions[index].rejections.push(Rejection::new(reason));
                }
            }
        }

        if let Some(p) = progress {
            p.on_complete(&stats);
        }

        let results = decisions
            .into_iter()
            .zip(statuses)
            .map(|(decision, status)| ImportResult { decision, status })
            .collect();

        ImportReport {
            results,
            events,
            stats,
        }
    }
}
