//! Common test utilities for featurekit integration tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// File names of the sample bundle, in sorted order
#[allow(dead_code)]
pub const BUNDLE_FILES: [&str; 3] = ["custom_max.yaml", "custom_mean.yaml", "custom_sum.yaml"];

/// An isolated library root and installation directory
pub struct TestEnv {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Scratch area for bundles and archives
    pub path: PathBuf,
    /// Value of FEATUREKIT_HOME
    pub home: PathBuf,
    /// Value of FEATUREKIT_INSTALL_DIR
    pub install_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("work");
        let home = temp.path().join("home");
        let install_dir = home.join("primitives");
        std::fs::create_dir_all(&path).expect("Failed to create work directory");
        Self {
            temp,
            path,
            home,
            install_dir,
        }
    }

    /// featurekit binary pointed at this environment
    #[allow(deprecated, dead_code)]
    pub fn featurekit_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("featurekit").expect("featurekit binary");
        cmd.env("FEATUREKIT_HOME", &self.home);
        cmd.env("FEATUREKIT_INSTALL_DIR", &self.install_dir);
        cmd.env_remove("FEATUREKIT_LOG");
        cmd.current_dir(&self.path);
        cmd
    }

    /// Copy a fixture directory into the work area
    pub fn copy_fixture(&self, fixture_name: &str) -> PathBuf {
        let target = self.path.join(fixture_name);
        copy_dir(&fixture_path(fixture_name), &target).expect("Failed to copy fixture");
        target
    }

    /// Write a file in the work area
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Sorted file names in the installation directory
    #[allow(dead_code)]
    pub fn installed_files(&self) -> Vec<String> {
        if !self.install_dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = std::fs::read_dir(&self.install_dir)
            .expect("Failed to read installation directory")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of a fixture under tests/common/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(name)
}

/// Pack `bundle` into a `.tar.gz` with its files under the bundle's directory name
#[allow(dead_code)]
pub fn build_tar_gz(bundle: &Path, archive: &Path) -> PathBuf {
    let prefix = PathBuf::from(bundle.file_name().expect("bundle directory has a name"));
    let file = File::create(archive).expect("Failed to create archive");
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    builder
        .append_dir_all(&prefix, bundle)
        .expect("Failed to append bundle");
    builder
        .into_inner()
        .expect("Failed to finish tar")
        .finish()
        .expect("Failed to finish gzip");
    archive.to_path_buf()
}

/// Pack the files of `bundle` flat into a `.zip`
#[allow(dead_code)]
pub fn build_zip(bundle: &Path, archive: &Path) -> PathBuf {
    let file = File::create(archive).expect("Failed to create archive");
    let mut writer = zip::ZipWriter::new(file);
    for entry in std::fs::read_dir(bundle).expect("Failed to read bundle") {
        let path = entry.expect("Failed to read entry").path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("utf-8 file name")
            .to_string();
        writer
            .start_file(name, zip::write::SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer
            .write_all(&std::fs::read(&path).expect("Failed to read file"))
            .expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip");
    archive.to_path_buf()
}

/// Recursively copy a directory
fn copy_dir(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
