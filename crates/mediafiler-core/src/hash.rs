use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

const CHUNK_SIZE: usize = 8192;

/// Streamed SHA-256 of a file's content, hex-encoded. Used for equality
/// detection between a source file and an existing destination file, not
/// for anything security-relevant.
pub fn digest(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("cannot open {} for hashing", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file
            .read(&mut buf)
            .with_context(|| format!("read failed on {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_same_content_same_digest() {
        let mut a = NamedTempFile::new().unwrap();
        let mut b = NamedTempFile::new().unwrap();
        a.write_all(b"identical content").unwrap();
        b.write_all(b"identical content").unwrap();

        assert_eq!(digest(a.path()).unwrap(), digest(b.path()).unwrap());
    }

    #[test]
    fn test_different_content_different_digest() {
        let mut a = NamedTempFile::new().unwrap();
        let mut b = NamedTempFile::new().unwrap();
        a.write_all(b"content A").unwrap();
        b.write_all(b"content B").unwrap();

        assert_ne!(digest(a.path()).unwrap(), digest(b.path()).unwrap());
    }

    #[test]
    fn test_spans_multiple_chunks() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(&vec![0xabu8; CHUNK_SIZE * 3 + 17]).unwrap();

        let hex = digest(f.path()).unwrap();
        assert_eq!(hex.len(), 64);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(digest(Path::new("/no/such/file")).is_err());
    }
}
