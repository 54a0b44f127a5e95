// ============================================================
// Layer 6 — Archive Extraction
// ============================================================
// The corpus ships as a gzip'd tarball (aclImdb_v1.tar.gz).
// GzDecoder undoes the compression, tar::Archive unpacks the
// entries beneath the destination directory.
//
// Reference: flate2 / tar crate documentation

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::{fs::File, io::BufReader, path::Path};
use tar::Archive;

/// Unpack a `.tar.gz` file into `dest`.
pub fn unpack_tar_gz(archive_path: &Path, dest: &Path) -> Result<()> {
    tracing::info!("Unpacking '{}'", archive_path.display());

    let file = File::open(archive_path)
        .with_context(|| format!("Cannot open archive '{}'", archive_path.display()))?;

    let mut archive = Archive::new(GzDecoder::new(BufReader::new(file)));
    archive
        .unpack(dest)
        .with_context(|| format!("Cannot unpack '{}' into '{}'", archive_path.display(), dest.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unpack_round_trip() {
        let dir = TempDir::new().unwrap();
        let archive_path = dir.path().join("data.tar.gz");

        let encoder = GzEncoder::new(File::create(&archive_path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        let body = b"a fine film";
        let mut header = tar::Header::new_gnu();
        header.set_size(body.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, "aclImdb/train/pos/0_9.txt", &body[..])
            .unwrap();
        builder.into_inner().unwrap().finish().unwrap();

        let out = dir.path().join("out");
        unpack_tar_gz(&archive_path, &out).unwrap();
        assert_eq!(
            fs::read_to_string(out.join("aclImdb/train/pos/0_9.txt")).unwrap(),
            "a fine film"
        );
    }

    #[test]
    fn test_not_an_archive() {
        let dir = TempDir::new().unwrap();
        let archive_path = dir.path().join("data.tar.gz");
        fs::write(&archive_path, b"plain text").unwrap();
        assert!(unpack_tar_gz(&archive_path, dir.path()).is_err());
    }
}
