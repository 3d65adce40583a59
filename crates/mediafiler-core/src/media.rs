use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Classification of a file as image or video, driving both extension
/// filtering and the date-resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => &["jpg", "jpeg", "png", "gif"],
            MediaKind::Video => &["mts", "mp4", "avi"],
        }
    }

    /// Case-insensitive extension match against this kind's extension set.
    pub fn matches(self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| {
                self.extensions().iter().any(|known| ext.eq_ignore_ascii_case(known))
            })
    }
}

/// One file found during the walk, before any decision has been made.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    /// Directory the file lives in.
    pub dir: PathBuf,
    /// Just the filename.
    pub file_name: String,
    pub kind: MediaKind,
}

impl CandidateFile {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}
