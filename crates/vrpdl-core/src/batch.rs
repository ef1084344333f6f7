//! Batch download of instance/solution pairs.
//!
//! Sequential and blocking: for each pair, derive the destination, make sure
//! the category directory exists, download the instance then the solution,
//! and advance the progress bar. Existing files are overwritten.

use crate::config::{FailurePolicy, VrpdlConfig};
use crate::error::{HarvestError, Result};
use crate::fetch::{download_file, Fetch};
use crate::links::{LinkPair, LinkSet};
use crate::progress::ProgressBar;
use crate::storage::ensure_dir;
use crate::target::PairTarget;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

/// Where and how a batch runs.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Output root; one subdirectory per category is created below it.
    pub output_dir: PathBuf,
    /// Host prefix relative links are resolved against.
    pub source_url: Url,
    pub progress_width: usize,
    pub failure_policy: FailurePolicy,
}

impl BatchOptions {
    pub fn from_config(cfg: &VrpdlConfig) -> anyhow::Result<Self> {
        Ok(Self {
            output_dir: cfg.output_dir.clone(),
            source_url: cfg.source_url()?,
            progress_width: cfg.progress_width,
            failure_policy: cfg.failure_policy,
        })
    }
}

/// A pair that failed under [`FailurePolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedPair {
    pub index: usize,
    pub instance: String,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    /// Pairs with both files written.
    pub downloaded: usize,
    /// Bytes written across all files.
    pub bytes: u64,
    /// Directory creation failures that were logged and passed over.
    pub directory_errors: usize,
    pub failed: Vec<FailedPair>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.downloaded == self.total
    }
}

/// Creates `path`, logging and printing the error instead of failing.
/// A later write into the directory reports the real failure.
fn ensure_dir_logged<W: Write>(path: &Path, out: &mut W, report: &mut BatchReport) {
    if let Err(e) = ensure_dir(path) {
        tracing::warn!("{}", e);
        let _ = writeln!(out, "Failed to create directory\n{}", e);
        report.directory_errors += 1;
    }
}

fn download_pair<F: Fetch, W: Write>(
    fetcher: &F,
    pair: &LinkPair,
    opts: &BatchOptions,
    out: &mut W,
    report: &mut BatchReport,
) -> Result<u64> {
    let target = PairTarget::derive(&opts.source_url, pair)?;
    ensure_dir_logged(&target.dir(&opts.output_dir), out, report);

    let instance_path = target.instance_path(&opts.output_dir);
    let mut bytes = download_file(fetcher, target.instance_url.as_str(), &instance_path)?;
    let solution_path = target.solution_path(&opts.output_dir);
    bytes += download_file(fetcher, target.solution_url.as_str(), &solution_path)?;

    tracing::debug!(
        index = pair.index,
        instance = %instance_path.display(),
        solution = %solution_path.display(),
        bytes,
        "pair downloaded"
    );
    Ok(bytes)
}

/// Downloads every instance/solution pair of `links` under `opts.output_dir`,
/// writing progress to `out`.
///
/// Unequal link counts fail with [`HarvestError::PrecheckMismatch`] before any
/// request or filesystem change. Directory errors never stop the batch; other
/// errors stop it under [`FailurePolicy::Abort`] and are recorded under
/// [`FailurePolicy::Skip`]. An empty batch prints a completed bar and returns.
pub fn download_pairs<F: Fetch, W: Write>(
    fetcher: &F,
    links: &LinkSet,
    opts: &BatchOptions,
    mut out: W,
) -> Result<BatchReport> {
    let pairs = links.pairs()?;
    let mut report = BatchReport {
        total: pairs.len(),
        ..BatchReport::default()
    };

    ensure_dir_logged(&opts.output_dir, &mut out, &mut report);

    let mut progress = ProgressBar::new(pairs.len(), opts.progress_width, &mut out);
    for pair in &pairs {
        match download_pair(fetcher, pair, opts, progress.sink_mut(), &mut report) {
            Ok(bytes) => {
                report.downloaded += 1;
                report.bytes += bytes;
            }
            Err(e) => match opts.failure_policy {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Skip => {
                    tracing::warn!(index = pair.index, instance = %pair.instance, "skipping pair: {}", e);
                    report.failed.push(FailedPair {
                        index: pair.index,
                        instance: pair.instance.clone(),
                        error: e.to_string(),
                    });
                }
            },
        }
        if let Err(e) = progress.advance() {
            tracing::debug!("progress redraw failed: {}", e);
        }
    }
    if let Err(e) = progress.finish() {
        tracing::debug!("progress bar not completed: {}", e);
    }

    tracing::info!(
        total = report.total,
        downloaded = report.downloaded,
        failed = report.failed.len(),
        bytes = report.bytes,
        "batch finished"
    );
    Ok(report)
}
