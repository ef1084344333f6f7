//! Error taxonomy for scraping and batch download.
//!
//! Each variant maps to one failure policy in the orchestrator: directory
//! errors are logged and the batch continues, precheck mismatches are fatal
//! before any I/O, everything else aborts the batch unless the caller asked
//! to skip failed pairs.

use std::io;
use std::path::PathBuf;

/// HTTP GET failure (transport error or a non-2xx status in strict mode).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("GET {url} failed: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
}

/// Directory could not be created (anything other than "already exists").
#[derive(Debug, thiserror::Error)]
#[error("failed to create directory {}: {source}", .path.display())]
pub struct DirectoryError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Downloaded body could not be written to its destination.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A link's URL does not yield a usable category and filename.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("cannot resolve link {link}: {source}")]
    Resolve {
        link: String,
        #[source]
        source: url::ParseError,
    },
    #[error("link {link} has {found} path segment(s), need at least 2")]
    TooFewSegments { link: String, found: usize },
    #[error("link {link} has unusable path segment {segment:?}")]
    BadSegment { link: String, segment: String },
}

/// Top-level error for link retrieval and batch download.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error("the number of instances ({instances}) and solutions ({solutions}) must match")]
    PrecheckMismatch { instances: usize, solutions: usize },
}

pub type Result<T, E = HarvestError> = std::result::Result<T, E>;
