//! End-to-end clip pipeline: URL → extract → clean → assemble → file.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use clipmark_extract::TavilyClient;
use clipmark_markdown::CleanFilter;
use clipmark_shared::{ClipRequest, ClippedDocument, Result};

use crate::assembler;

/// Result of a successful clip.
#[derive(Debug, Clone)]
pub struct ClipOutcome {
    /// Path of the written Markdown file.
    pub path: PathBuf,
    /// Page title as written to the frontmatter.
    pub title: String,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, outcome: &ClipOutcome);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _outcome: &ClipOutcome) {}
}

/// Clip a single URL to a Markdown file under `base_dir/<request.subdir>/`.
///
/// One URL is processed start to finish; the only suspension point is the
/// extraction call. Returns `Ok(None)` when the provider had no usable
/// content for the URL — the request is abandoned and the caller moves on.
#[instrument(skip_all, fields(url = %request.url, subdir = %request.subdir))]
pub async fn clip_url(
    client: &TavilyClient,
    request: &ClipRequest,
    base_dir: &Path,
    filter: &CleanFilter,
    progress: &dyn ProgressReporter,
) -> Result<Option<ClipOutcome>> {
    let start = Instant::now();
    let target_dir = base_dir.join(&request.subdir);

    progress.phase("Extracting content");
    let Some(page) = client.extract(&request.url).await? else {
        warn!("nothing extracted, abandoning clip");
        return Ok(None);
    };

    progress.phase("Cleaning content");
    let body = filter.clean(&page.raw_content);

    let doc = ClippedDocument {
        title: page.title,
        url: request.url.clone(),
        tags: request.tags.clone(),
        body,
    };

    progress.phase("Writing clip");
    let path = assembler::write_clip(&target_dir, &doc)?;

    let outcome = ClipOutcome {
        path,
        title: doc.title,
        elapsed: start.elapsed(),
    };
    progress.done(&outcome);

    info!(
        path = %outcome.path.display(),
        title = %outcome.title,
        elapsed_ms = outcome.elapsed.as_millis(),
        "clip saved"
    );

    Ok(Some(outcome))
}
