use std::path::Path;

use walkdir::WalkDir;

use crate::media::{CandidateFile, MediaKind};

/// Recursively enumerate files under `root` whose extension matches the
/// extension set for `kind`. Symlinks are not followed, unreadable entries
/// are skipped, and the order is whatever the underlying directory
/// traversal yields.
pub fn candidates(root: &Path, kind: MediaKind) -> impl Iterator<Item = CandidateFile> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| kind.matches(entry.path()))
        .filter_map(move |entry| {
            let file_name = entry.file_name().to_str()?.to_string();
            let dir = entry.path().parent()?.to_path_buf();
            Some(CandidateFile { dir, file_name, kind })
        })
}
