//! Library API integration tests
//!
//! Exercises discovery, loading and installation through the public API, with remote
//! downloads served from a local archive.

mod common;

use std::path::{Path, PathBuf};

use featurekit::error::{FeatureKitError, Result};
use featurekit::fetch::Fetcher;
use featurekit::installer::{InstallOptions, Installer, MemoryStore, PrimitiveStore};
use featurekit::registry::PrimitiveRegistry;
use featurekit::{PrimitiveKind, list_primitive_files, load_primitive_from_file};

struct ArchiveFetcher {
    archive: PathBuf,
}

impl Fetcher for ArchiveFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        assert!(url.starts_with("https://"), "{url}");
        std::fs::copy(&self.archive, dest)?;
        Ok(())
    }
}

fn installed_names(store: &MemoryStore) -> Vec<String> {
    let registry = PrimitiveRegistry::load(store).unwrap();
    registry
        .iter()
        .filter(|p| p.is_installed())
        .map(|p| p.name.clone())
        .collect()
}

#[test]
fn test_list_primitive_files_finds_bundle() {
    let dir = common::fixture_path("primitives_to_install");
    let files = list_primitive_files(&dir).unwrap();
    let expected: Vec<PathBuf> = common::BUNDLE_FILES.iter().map(|f| dir.join(f)).collect();
    assert_eq!(files, expected);
}

#[test]
fn test_load_primitive_from_file() {
    let path = common::fixture_path("primitives_to_install").join("custom_max.yaml");
    let (name, definition) = load_primitive_from_file(&path).unwrap();
    assert_eq!(name, "custommax");
    assert_eq!(definition.kind, PrimitiveKind::Aggregation);
    assert!(!definition.stack_on_self);
}

#[test]
fn test_load_primitive_with_helper_definitions() {
    let path = common::fixture_path("primitives_to_install").join("custom_sum.yaml");
    let (name, definition) = load_primitive_from_file(&path).unwrap();
    assert_eq!(name, "customsum");
    assert_eq!(definition.class_name, "CustomSum");
}

#[test]
fn test_load_bad_primitive_files() {
    let dir = common::fixture_path("bad_primitive_files");

    let err = load_primitive_from_file(&dir.join("multiple_primitives.yaml")).unwrap_err();
    assert!(matches!(err, FeatureKitError::MultiplePrimitivesDefined { .. }));
    assert!(
        err.to_string()
            .contains("More than one primitive defined in file")
    );

    let err = load_primitive_from_file(&dir.join("no_primitives.yaml")).unwrap_err();
    assert!(matches!(err, FeatureKitError::NoPrimitiveDefined { .. }));
    assert!(err.to_string().contains("No primitive defined in file"));
}

#[test]
fn test_all_sources_converge() {
    let env = common::TestEnv::new();
    let bundle = env.copy_fixture("primitives_to_install");
    let archive = common::build_tar_gz(&bundle, &env.path.join("primitives_to_install.tar.gz"));
    let zip = common::build_zip(&bundle, &env.path.join("primitives_to_install.zip"));

    let sources = [
        bundle.to_str().unwrap().to_string(),
        archive.to_str().unwrap().to_string(),
        zip.to_str().unwrap().to_string(),
        "s3://featurekit-static/primitives_to_install.tar.gz".to_string(),
        "https://example.com/downloads/primitives_to_install.tar.gz".to_string(),
    ];

    for source in &sources {
        let fetcher = ArchiveFetcher {
            archive: archive.clone(),
        };
        let mut installer = Installer::new(fetcher, MemoryStore::new());
        installer
            .install(source, InstallOptions { prompt: false })
            .unwrap();

        let store = installer.into_store();
        assert_eq!(store.file_names().unwrap(), common::BUNDLE_FILES, "{source}");
        assert_eq!(
            installed_names(&store),
            ["custommax", "custommean", "customsum"],
            "{source}"
        );
    }
}
