pub mod exif;
pub mod guess;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Datelike, Local};
use log::debug;

use crate::media::MediaKind;

/// Which fallback tier produced the capture date (lower = more trustworthy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Exif,
    Filename,
    Mtime,
}

/// Capture date at month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureMonth {
    pub year: i32,
    pub month: u32,
    pub source: DateSource,
}

/// Best-effort capture year-month for a file.
///
/// Images try embedded metadata, then the filename pattern; when both miss
/// the result is `None` and the caller buckets the file as "unknown".
/// Videos try the filename pattern, then fall back to the file's
/// last-modified timestamp (creation time is unreliable cross-platform),
/// so they only come back `None` if the file cannot even be stat'ed.
pub fn resolve_capture_month(path: &Path, kind: MediaKind) -> Option<CaptureMonth> {
    if kind == MediaKind::Image {
        if let Some((year, month)) = exif::exif_year_month(path) {
            return Some(CaptureMonth { year, month, source: DateSource::Exif });
        }
    }

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if let Some((year, month)) = guess::filename_year_month(file_name) {
        if kind == MediaKind::Image {
            debug!("no capture date in metadata: {}", path.display());
        }
        return Some(CaptureMonth { year, month, source: DateSource::Filename });
    }

    match kind {
        MediaKind::Image => {
            debug!("cannot find capture date for: {}", path.display());
            None
        }
        MediaKind::Video => {
            debug!("cannot find capture date, using file timestamp: {}", path.display());
            mtime_year_month(path)
                .map(|(year, month)| CaptureMonth { year, month, source: DateSource::Mtime })
        }
    }
}

fn mtime_year_month(path: &Path) -> Option<(i32, u32)> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let local: DateTime<Local> = modified.into();
    Some((local.year(), local.month()))
}
