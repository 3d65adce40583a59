use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Reader, Tag, Value};

/// Read the embedded capture timestamp from an image file, checking the
/// primary image timestamp first, then the original-capture timestamp.
/// Any open or parse failure means "no metadata" so the caller can fall
/// through to the next tier.
pub fn exif_year_month(path: &Path) -> Option<(i32, u32)> {
    let file = File::open(path).ok()?;
    let reader = Reader::new()
        .read_from_container(&mut BufReader::new(file))
        .ok()?;

    for tag in [Tag::DateTime, Tag::DateTimeOriginal] {
        if let Some(field) = reader.get_field(tag, In::PRIMARY) {
            if let Some(ym) = ascii_value(field).as_deref().and_then(parse_year_month) {
                return Some(ym);
            }
        }
    }

    None
}

fn ascii_value(field: &exif::Field) -> Option<String> {
    match field.value {
        Value::Ascii(ref lines) => lines
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

/// EXIF datetimes are `YYYY:MM:DD HH:MM:SS`; some writers use `-` or `/`
/// as the date separator.
fn parse_year_month(s: &str) -> Option<(i32, u32)> {
    let cleaned = s.replace('-', ":").replace('/', ":");
    let mut parts = cleaned.split(':');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// Minimal JPEG: SOI + one APP1 segment holding a TIFF with a single
    /// DateTime tag + EOI. Enough for the EXIF reader, no pixel data.
    pub(crate) fn jpeg_with_datetime(datetime: &str) -> Vec<u8> {
        let ascii = format!("{datetime}\0");
        let mut tiff = Vec::new();
        tiff.extend_from_slice(b"II\x2a\x00"); // little-endian TIFF magic
        tiff.extend_from_slice(&8u32.to_le_bytes()); // IFD0 offset
        tiff.extend_from_slice(&1u16.to_le_bytes()); // one entry
        tiff.extend_from_slice(&0x0132u16.to_le_bytes()); // Tag::DateTime
        tiff.extend_from_slice(&2u16.to_le_bytes()); // ASCII
        tiff.extend_from_slice(&(ascii.len() as u32).to_le_bytes());
        tiff.extend_from_slice(&26u32.to_le_bytes()); // value offset: 8 + 2 + 12 + 4
        tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
        tiff.extend_from_slice(ascii.as_bytes());

        let mut out = vec![0xff, 0xd8]; // SOI
        out.extend_from_slice(&[0xff, 0xe1]); // APP1
        let payload_len = (2 + b"Exif\0\0".len() + tiff.len()) as u16;
        out.extend_from_slice(&payload_len.to_be_bytes());
        out.extend_from_slice(b"Exif\0\0");
        out.extend_from_slice(&tiff);
        out.extend_from_slice(&[0xff, 0xd9]); // EOI
        out
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(parse_year_month("2022:12:24 10:30:00"), Some((2022, 12)));
        assert_eq!(parse_year_month("2022-12-24 10:30:00"), Some((2022, 12)));
        assert_eq!(parse_year_month("2023:07:15"), Some((2023, 7)));
        assert_eq!(parse_year_month("2023:13:01 00:00:00"), None);
        assert_eq!(parse_year_month("not a date"), None);
        assert_eq!(parse_year_month(""), None);
    }

    #[test]
    fn test_reads_embedded_datetime() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("IMG_0099.jpg");
        let mut f = File::create(&path).unwrap();
        f.write_all(&jpeg_with_datetime("2022:12:24 10:00:00")).unwrap();
        drop(f);

        assert_eq!(exif_year_month(&path), Some((2022, 12)));
    }

    #[test]
    fn test_no_metadata_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plain.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();

        assert_eq!(exif_year_month(&path), None);
        assert_eq!(exif_year_month(&dir.path().join("missing.jpg")), None);
    }
}
