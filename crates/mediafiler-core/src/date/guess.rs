use regex::Regex;
use std::sync::LazyLock;

// Camera-style names: YYYYMMDD_HHMMSS immediately before the extension dot.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{8})_[0-9]{6}\.").unwrap());

/// Extract (year, month) from filenames like `20230715_142233.jpg`.
pub fn filename_year_month(file_name: &str) -> Option<(i32, u32)> {
    let caps = DATE_RE.captures(file_name)?;
    let digits = caps.get(1)?.as_str();
    let year: i32 = digits[..4].parse().ok()?;
    let month: u32 = digits[4..6].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}
