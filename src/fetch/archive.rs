//! Archive extraction
//!
//! Bundles are shipped as `.tar.gz`/`.tgz` or `.zip` archives. Both unpackers refuse
//! entries that would escape the destination directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::{Result, extraction_failed, file_read_failed};
use crate::installer::list_primitive_files;

/// Supported archive formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    Zip,
}

impl ArchiveFormat {
    /// Detect the archive format from a file name or path
    pub fn detect(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else if name.ends_with(".zip") {
            Some(Self::Zip)
        } else {
            None
        }
    }
}

/// Extract `archive` into `dest`
pub fn extract(archive: &Path, format: ArchiveFormat, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| file_read_failed(archive, &e))?;
    let failed = |reason: String| extraction_failed(archive.display().to_string(), reason);

    tracing::debug!(archive = %archive.display(), dest = %dest.display(), ?format, "extracting archive");

    match format {
        ArchiveFormat::TarGz => {
            let mut tar = tar::Archive::new(GzDecoder::new(file));
            tar.unpack(dest).map_err(|e| failed(e.to_string()))?;
        }
        ArchiveFormat::Zip => {
            let mut zip = zip::ZipArchive::new(file).map_err(|e| failed(e.to_string()))?;
            zip.extract(dest).map_err(|e| failed(e.to_string()))?;
        }
    }

    Ok(())
}

/// Locate the directory holding the primitive files of an extracted archive.
///
/// Archives are commonly built from a directory (`tar -zcf p.tar.gz p/*.yaml`), so when
/// the extraction root has no primitive files and exactly one subdirectory, that
/// subdirectory is the bundle.
pub fn bundle_root(extracted: &Path) -> Result<PathBuf> {
    if !list_primitive_files(extracted)?.is_empty() {
        return Ok(extracted.to_path_buf());
    }

    let entries: Vec<PathBuf> = std::fs::read_dir(extracted)
        .map_err(|e| file_read_failed(extracted, &e))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .collect();

    match entries.as_slice() {
        [only] if only.is_dir() => Ok(only.clone()),
        _ => Ok(extracted.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeatureKitError;
    use crate::test_fixtures::{
        BUNDLE_FILES, build_tar_gz, build_zip, create_temp_dir, write_bundle, write_file,
    };

    fn file_names(dir: &Path) -> Vec<String> {
        list_primitive_files(dir)
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect()
    }

    #[test]
    fn test_detect() {
        assert_eq!(ArchiveFormat::detect("p.tar.gz"), Some(ArchiveFormat::TarGz));
        assert_eq!(ArchiveFormat::detect("P.TGZ"), Some(ArchiveFormat::TarGz));
        assert_eq!(ArchiveFormat::detect("/a/b/p.zip"), Some(ArchiveFormat::Zip));
        assert_eq!(ArchiveFormat::detect("p.tar"), None);
        assert_eq!(ArchiveFormat::detect("p.gz"), None);
    }

    #[test]
    fn test_extract_tar_gz_descends_into_single_dir() {
        let temp = create_temp_dir();
        let bundle = write_bundle(temp.path());
        let archive = build_tar_gz(&bundle, &temp.path().join("p.tar.gz"));

        let dest = temp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        extract(&archive, ArchiveFormat::TarGz, &dest).unwrap();

        let root = bundle_root(&dest).unwrap();
        assert_eq!(root, dest.join("primitives_to_install"));
        assert_eq!(file_names(&root), BUNDLE_FILES);
    }

    #[test]
    fn test_extract_flat_zip() {
        let temp = create_temp_dir();
        let bundle = write_bundle(temp.path());
        let archive = build_zip(&bundle, &temp.path().join("p.zip"));

        let dest = temp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        extract(&archive, ArchiveFormat::Zip, &dest).unwrap();

        assert_eq!(bundle_root(&dest).unwrap(), dest);
        assert_eq!(file_names(&dest), BUNDLE_FILES);
    }

    #[test]
    fn test_extract_corrupt_archive() {
        let temp = create_temp_dir();
        let archive = temp.path().join("broken.tar.gz");
        write_file(&archive, "definitely not gzip");

        let err = extract(&archive, ArchiveFormat::TarGz, temp.path()).unwrap_err();
        assert!(matches!(err, FeatureKitError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_bundle_root_keeps_root_with_several_dirs() {
        let temp = create_temp_dir();
        std::fs::create_dir_all(temp.path().join("a")).unwrap();
        std::fs::create_dir_all(temp.path().join("b")).unwrap();
        assert_eq!(bundle_root(temp.path()).unwrap(), temp.path());
    }
}
