//! Integration tests for depcat
//!
//! These tests verify:
//! - Catalog file loading through to the built constraint set
//! - Last-write-wins behavior of the version lookup table
//! - The update check end to end over files on disk

use depcat::catalog::{load_catalog, CatalogDeclarations};
use depcat::update::{check, FreshnessStatus, ReleaseMetadata};
use std::fs;
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Catalog file mirroring a realistic platform declaration
const CATALOG_TOML: &str = r#"
boms = [
  "com.fasterxml.jackson:jackson-bom:2.13.2.20220328",
  "com.google.guava:guava-bom:31.1-jre",
  "io.grpc:grpc-bom:1.45.1",
  "org.junit:junit-bom:5.8.2",
]

dependencies = [
  "com.lmax:disruptor:3.4.4",
  "junit:junit:4.13.2",
  "org.assertj:assertj-core:3.22.0",
]

[[sets]]
group = "com.google.auto.value"
version = "1.9"
modules = ["auto-value", "auto-value-annotations"]

[[sets]]
group = "org.mockito"
version = "4.4.0"
modules = ["mockito-core", "mockito-junit-jupiter"]
"#;

mod catalog_loading {
    use super::*;

    #[test]
    fn test_load_catalog_from_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("catalog.toml");
        fs::write(&path, CATALOG_TOML).unwrap();

        let catalog = load_catalog(&path).unwrap();

        // 4 BOMs + 4 set modules + 3 pins
        assert_eq!(catalog.constraints.len(), 11);
        assert_eq!(
            catalog.constraints.iter().filter(|c| c.is_platform()).count(),
            4
        );
        assert_eq!(catalog.versions.get("io.grpc"), Some("1.45.1"));
        assert_eq!(catalog.versions.get("org.mockito"), Some("4.4.0"));
        assert_eq!(catalog.versions.get("junit"), Some("4.13.2"));
    }

    #[test]
    fn test_malformed_coordinate_aborts_load() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("catalog.toml");
        fs::write(&path, "dependencies = [\"org.assertj:assertj-core\"]\n").unwrap();

        let err = load_catalog(&path).unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("malformed coordinate 'org.assertj:assertj-core'"));
    }

    #[test]
    fn test_missing_catalog_file() {
        let temp_dir = create_test_dir();
        let err = load_catalog(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(format!("{}", err).contains("catalog file not found"));
    }

    #[test]
    fn test_group_collision_across_categories() {
        // BOM, set and pin all declare group "a"; the table keeps the pin.
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
boms = ["a:bom:1.0"]
dependencies = ["a:y:3.0"]

[[sets]]
group = "a"
version = "2.0"
modules = ["x"]
"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.versions.get("a"), Some("3.0"));

        let rendered: Vec<String> = catalog.constraints.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["platform(a:bom:1.0)", "a:x:2.0", "a:y:3.0"]);
    }

    #[test]
    fn test_declarations_parse_matches_load() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("catalog.toml");
        fs::write(&path, CATALOG_TOML).unwrap();

        let decls = CatalogDeclarations::load(&path).unwrap();
        assert_eq!(decls.boms.len(), 4);
        assert_eq!(decls.sets.len(), 2);
        assert_eq!(decls.pins.len(), 3);
    }
}

mod update_check {
    use super::*;

    const RELEASES_JSON: &str = r#"{
        "generated_at": "2022-04-01T00:00:00Z",
        "dependencies": [
            {
                "group": "io.grpc",
                "artifact": "grpc-bom",
                "versions": ["1.45.1", "1.46.0", "1.47.0-RC1"]
            },
            {
                "group": "org.mockito",
                "artifact": "mockito-core",
                "versions": ["4.4.0", "4.5.0", "5.0.0-alpha1"]
            },
            {
                "group": "junit",
                "artifact": "junit",
                "versions": ["4.13.2"]
            }
        ]
    }"#;

    #[test]
    fn test_check_over_files_on_disk() {
        let temp_dir = create_test_dir();
        let catalog_path = temp_dir.path().join("catalog.toml");
        let releases_path = temp_dir.path().join("releases.json");
        fs::write(&catalog_path, CATALOG_TOML).unwrap();
        fs::write(&releases_path, RELEASES_JSON).unwrap();

        let catalog = load_catalog(&catalog_path).unwrap();
        let metadata = ReleaseMetadata::load(&releases_path).unwrap();
        let report = check(&catalog, &metadata);

        assert!(report.generated_at.is_some());
        assert_eq!(report.entries.len(), catalog.constraints.len());
        assert_eq!(report.outdated_count(), 2);

        let grpc = report
            .entries
            .iter()
            .find(|e| e.constraint.coordinate.artifact == "grpc-bom")
            .unwrap();
        assert_eq!(
            grpc.status,
            FreshnessStatus::Outdated {
                latest_stable: "1.46.0".to_string()
            }
        );
        assert_eq!(grpc.suppressed, vec!["1.47.0-RC1"]);

        let junit = report
            .entries
            .iter()
            .find(|e| e.constraint.coordinate.group == "junit")
            .unwrap();
        assert_eq!(junit.status, FreshnessStatus::UpToDate);

        // Constraints absent from the metadata are unknown, not errors
        assert!(report.unknown_count() > 0);
    }

    #[test]
    fn test_invalid_metadata_json() {
        let temp_dir = create_test_dir();
        let releases_path = temp_dir.path().join("releases.json");
        fs::write(&releases_path, "not json").unwrap();

        let err = ReleaseMetadata::load(&releases_path).unwrap_err();
        assert!(format!("{}", err).contains("failed to parse JSON"));
    }
}
