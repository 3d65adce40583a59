use crate::date::CaptureMonth;

/// Bucket name for files whose capture date could not be resolved.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Destination subdirectory name for a resolved capture month: `YYYY-MM`,
/// or the `unknown` sentinel.
pub fn bucket_for(month: Option<&CaptureMonth>) -> String {
    match month {
        Some(m) => format!("{:04}-{:02}", m.year, m.month),
        None => UNKNOWN_BUCKET.to_string(),
    }
}
