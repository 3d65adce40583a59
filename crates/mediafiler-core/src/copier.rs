use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use filetime::FileTime;
use log::debug;
use rand::Rng;

use crate::hash;

const PREFIX_LEN: usize = 5;
const PREFIX_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Outcome of placing one candidate file into its bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyDecision {
    /// Copied to the bucket under its own name.
    Copied(PathBuf),
    /// Name collision with different content; copied under a prefixed name.
    CopiedWithSuffix(PathBuf, String),
    /// A byte-identical file was already in place; nothing written.
    SkippedIdentical,
    /// Hashing or copying failed; the rest of the run is unaffected.
    Failed(String),
}

/// Copies files into date buckets under a destination root, never
/// overwriting anything already there.
pub struct DedupCopier {
    dest_root: PathBuf,
    // Buckets created this run. Only an optimization: create_dir_all is
    // idempotent, so a stale miss here costs one extra syscall.
    created: HashSet<String>,
}

impl DedupCopier {
    pub fn new(dest_root: PathBuf) -> Self {
        Self { dest_root, created: HashSet::new() }
    }

    /// Place `source` into `bucket`, deciding copy / skip / copy-with-prefix.
    pub fn place(&mut self, source: &Path, bucket: &str, file_name: &str) -> CopyDecision {
        match self.try_place(source, bucket, file_name) {
            Ok(decision) => decision,
            Err(e) => CopyDecision::Failed(format!("{e:#}")),
        }
    }

    fn try_place(&mut self, source: &Path, bucket: &str, file_name: &str) -> Result<CopyDecision> {
        let bucket_dir = self.dest_root.join(bucket);
        if !self.created.contains(bucket) {
            fs::create_dir_all(&bucket_dir)
                .with_context(|| format!("cannot create bucket {}", bucket_dir.display()))?;
            self.created.insert(bucket.to_string());
        }

        let candidate = bucket_dir.join(file_name);
        if !candidate.exists() {
            copy_preserving(source, &candidate)?;
            return Ok(CopyDecision::Copied(candidate));
        }

        debug!("file already exists: {}", candidate.display());
        let src_digest = hash::digest(source)?;
        let dst_digest = hash::digest(&candidate)?;
        debug!("{} digest: {}", source.display(), src_digest);
        debug!("{} digest: {}", candidate.display(), dst_digest);

        if src_digest == dst_digest {
            return Ok(CopyDecision::SkippedIdentical);
        }

        // Best-effort uniqueness: the prefixed name is not re-checked for
        // collision within a run.
        let prefix = random_prefix();
        let renamed = bucket_dir.join(format!("{prefix}-{file_name}"));
        debug!("digests differ, copying as {}", renamed.display());
        copy_preserving(source, &renamed)?;
        Ok(CopyDecision::CopiedWithSuffix(renamed, prefix))
    }
}

/// `fs::copy` carries permissions; the modification time is restored
/// separately and its failure is not fatal to the copy.
fn copy_preserving(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest)
        .with_context(|| format!("cannot copy {} to {}", source.display(), dest.display()))?;
    if let Ok(meta) = fs::metadata(source) {
        let mtime = FileTime::from_last_modification_time(&meta);
        filetime::set_file_mtime(dest, mtime).ok();
    }
    Ok(())
}

fn random_prefix() -> String {
    let mut rng = rand::thread_rng();
    (0..PREFIX_LEN)
        .map(|_| PREFIX_CHARS[rng.gen_range(0..PREFIX_CHARS.len())] as char)
        .collect()
}
