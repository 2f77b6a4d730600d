//! Parallel rendering of many icons.
//!
//! ```text
//! seeds ─► par_iter ─► IconCache ─► render_one ─► BatchOutcome (input order kept)
//!                                                       │
//!                                   write_outputs ◄─────┘ ─► <dir>/<fingerprint>.<ext>
//!                                                          ─► <dir>/manifest.json
//! ```
//!
//! Every job is independent; the only shared state is the cache and the
//! progress counters.

use crate::cache::{CacheKey, IconCache};
use crate::dots::{self, KeyEncoding, PublicKey};
use crate::error::IconError;
use crate::grid::{self, GridStyle};
use crate::kind::{DotsFormat, IconKind};
use crate::logger::ProgressLine;
use crate::utils::fingerprint;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File name of the batch manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Rendering parameters shared by all jobs of a batch.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub kind: IconKind,
    pub grid_size: u32,
    pub grid_style: GridStyle,
    pub dots_size: u32,
    pub dots_format: DotsFormat,
    pub encoding: KeyEncoding,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            kind: IconKind::Grid,
            grid_size: 64,
            grid_style: GridStyle::default(),
            dots_size: 64,
            dots_format: DotsFormat::Png,
            encoding: KeyEncoding::Auto,
        }
    }
}

impl BatchOptions {
    pub const fn extension(&self) -> &'static str {
        match self.kind {
            IconKind::Grid => "svg",
            IconKind::Dots => self.dots_format.extension(),
        }
    }

    fn cache_key(&self, input: &str) -> CacheKey {
        match self.kind {
            IconKind::Grid => CacheKey::new(
                IconKind::Grid,
                input,
                self.grid_size,
                self.grid_style.fingerprint(),
            ),
            IconKind::Dots => CacheKey::new(
                IconKind::Dots,
                input,
                self.dots_size,
                format!("{}:{:?}", self.dots_format.extension(), self.encoding),
            ),
        }
    }
}

/// Result of one job.
#[derive(Debug)]
pub struct BatchOutcome {
    pub input: String,
    pub file_name: String,
    pub result: Result<Arc<[u8]>, IconError>,
}

/// One line of `manifest.json`.
#[derive(Debug, Serialize)]
pub struct ManifestEntry<'a> {
    pub input: &'a str,
    pub file: &'a str,
    pub kind: IconKind,
}

/// Totals after writing a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub failed: usize,
}

// ============================================================================
// Input
// ============================================================================

/// Read one seed per line, skipping blank lines and `#` comments.
pub fn read_seeds(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut seeds = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        seeds.push(trimmed.to_string());
    }
    Ok(seeds)
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a single icon to its encoded bytes.
pub fn render_one(input: &str, options: &BatchOptions) -> Result<Vec<u8>, IconError> {
    match options.kind {
        IconKind::Grid => {
            grid::to_svg_with_style(input, options.grid_size, &options.grid_style)
                .map(String::into_bytes)
        }
        IconKind::Dots => {
            let key = PublicKey::decode(input, options.encoding)?;
            match options.dots_format {
                DotsFormat::Png => dots::to_png(&key, options.dots_size),
                DotsFormat::Svg => dots::to_svg(&key, options.dots_size).map(String::into_bytes),
            }
        }
    }
}

/// Render all jobs in parallel with a fresh cache.
pub fn render_all(jobs: &[String], options: &BatchOptions) -> Vec<BatchOutcome> {
    render_all_with(jobs, options, &IconCache::new(), None)
}

/// Render all jobs in parallel; output order equals input order.
pub fn render_all_with(
    jobs: &[String],
    options: &BatchOptions,
    cache: &IconCache,
    progress: Option<&ProgressLine>,
) -> Vec<BatchOutcome> {
    let counter = options.kind.as_str();
    jobs.par_iter()
        .map(|input| {
            let result = cache.get_or_try_insert_with(options.cache_key(input), || {
                render_one(input, options)
            });
            if let Some(p) = progress {
                p.inc(counter);
            }
            BatchOutcome {
                input: input.clone(),
                file_name: format!("{}.{}", fingerprint(input), options.extension()),
                result,
            }
        })
        .collect()
}

// ============================================================================
// Output
// ============================================================================

/// Write successful outcomes into `dir`, plus an optional manifest.
///
/// Failures are logged and counted, never written.
pub fn write_outputs(
    outcomes: &[BatchOutcome],
    kind: IconKind,
    dir: &Path,
    manifest: bool,
) -> Result<BatchSummary> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut summary = BatchSummary::default();
    let mut entries = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match &outcome.result {
            Ok(bytes) => {
                let path: PathBuf = dir.join(&outcome.file_name);
                fs::write(&path, bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                entries.push(ManifestEntry {
                    input: &outcome.input,
                    file: &outcome.file_name,
                    kind,
                });
                summary.written += 1;
            }
            Err(e) => {
                crate::log!("error"; "{}: {}", outcome.input, e);
                summary.failed += 1;
            }
        }
    }

    if manifest {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(summary)
}
