pub mod bucket;
pub mod copier;
pub mod date;
pub mod hash;
pub mod media;
pub mod walk;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::{debug, error};

use copier::{CopyDecision, DedupCopier};
use media::MediaKind;

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Source directory to walk. Must exist.
    pub source: PathBuf,
    /// Destination root; created if absent, parents included.
    pub dest: PathBuf,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessResult {
    pub files_found: u64,
    pub files_copied: u64,
    pub files_skipped: u64,
    pub files_failed: u64,
}

/// Run the full pipeline: walk the source tree, resolve each file's
/// capture month, and place it into its date bucket under the destination
/// root. Per-file failures are counted and logged; only setup failures
/// (missing source, uncreatable destination) abort the run.
pub fn process(options: &ProcessOptions) -> anyhow::Result<ProcessResult> {
    anyhow::ensure!(
        options.source.is_dir(),
        "source directory {} does not exist",
        options.source.display()
    );
    fs::create_dir_all(&options.dest)
        .with_context(|| format!("cannot create destination {}", options.dest.display()))?;

    let mut copier = DedupCopier::new(options.dest.clone());
    let mut result = ProcessResult::default();

    for candidate in walk::candidates(&options.source, options.kind) {
        let path = candidate.path();
        debug!("looking at {}", path.display());
        result.files_found += 1;

        let month = date::resolve_capture_month(&path, candidate.kind);
        let bucket = bucket::bucket_for(month.as_ref());

        match copier.place(&path, &bucket, &candidate.file_name) {
            CopyDecision::Copied(dest) => {
                result.files_copied += 1;
                debug!("copied {} -> {}", path.display(), dest.display());
            }
            CopyDecision::CopiedWithSuffix(dest, _) => {
                result.files_copied += 1;
                debug!("copied {} -> {} (name collision)", path.display(), dest.display());
            }
            CopyDecision::SkippedIdentical => {
                result.files_skipped += 1;
                debug!("identical file already in place for {}", path.display());
            }
            CopyDecision::Failed(reason) => {
                result.files_failed += 1;
                error!("cannot process {}: {}", path.display(), reason);
            }
        }
    }

    Ok(result)
}
