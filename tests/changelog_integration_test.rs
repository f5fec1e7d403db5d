use modcam_tools::{ChangelogConfig, ChangelogStamper, LocalStorage, ToolError};
use std::fs;
use tempfile::TempDir;

const CHANGELOG: &str = "# Changelog

All notable changes to this project will be documented in this file.

## [LATEST]

### Added

- Principal curvature estimation

## [v0.1.0]

- Initial release

[v0.1.0]: https://github.com/modCAM/modcam/releases/tag/v0.1.0
";

fn setup(version: &str, changelog: &str) -> (TempDir, LocalStorage) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("VERSION"), version).unwrap();
    fs::write(temp_dir.path().join("CHANGELOG.md"), changelog).unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    (temp_dir, storage)
}

#[test]
fn test_stamp_changelog_on_disk() {
    let (temp_dir, storage) = setup("v1.2.3\n", CHANGELOG);

    let outcome = ChangelogStamper::new(storage, ChangelogConfig::default())
        .run()
        .unwrap();
    assert!(outcome.placeholder_found);

    let written = fs::read_to_string(temp_dir.path().join("CHANGELOG.md")).unwrap();
    assert!(written.contains("## [v1.2.3]\n\n### Added"));
    assert!(!written.contains("## [LATEST]"));
    assert!(written.contains("## [v0.1.0]"));
    assert!(written.ends_with(
        "[v0.1.0]: https://github.com/modCAM/modcam/releases/tag/v0.1.0\n\n\
         [v1.2.3]: https://github.com/modCAM/modcam/releases/tag/v1.2.3"
    ));
}

#[test]
fn test_second_run_leaves_file_untouched() {
    let (temp_dir, storage) = setup("v1.2.3\n", CHANGELOG);
    let path = temp_dir.path().join("CHANGELOG.md");

    ChangelogStamper::new(storage.clone(), ChangelogConfig::default())
        .run()
        .unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    let outcome = ChangelogStamper::new(storage, ChangelogConfig::default())
        .run()
        .unwrap();
    assert!(!outcome.placeholder_found);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    assert_eq!(after_first.matches("[v1.2.3]:").count(), 1);
}

#[test]
fn test_custom_paths_and_template() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("docs")).unwrap();
    fs::write(temp_dir.path().join("RELEASE"), "2026.10.0").unwrap();
    fs::write(
        temp_dir.path().join("docs/CHANGES.md"),
        "## [UNRELEASED]\n- Fix\n",
    )
    .unwrap();

    let config = ChangelogConfig {
        version_file: "RELEASE".to_string(),
        changelog_file: "docs/CHANGES.md".to_string(),
        placeholder: "## [UNRELEASED]".to_string(),
        release_url_template: "https://example.org/releases/{version}".to_string(),
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    ChangelogStamper::new(storage, config).run().unwrap();

    let written = fs::read_to_string(temp_dir.path().join("docs/CHANGES.md")).unwrap();
    assert_eq!(
        written,
        "## [2026.10.0]\n- Fix\n\n[2026.10.0]: https://example.org/releases/2026.10.0"
    );
}

#[test]
fn test_missing_and_empty_version_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("CHANGELOG.md"), CHANGELOG).unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let result = ChangelogStamper::new(storage.clone(), ChangelogConfig::default()).run();
    assert!(matches!(result, Err(ToolError::VersionFileNotFound { .. })));

    fs::write(temp_dir.path().join("VERSION"), "").unwrap();
    let result = ChangelogStamper::new(storage, ChangelogConfig::default()).run();
    assert!(matches!(result, Err(ToolError::EmptyVersion { .. })));

    // Changelog untouched on failure
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("CHANGELOG.md")).unwrap(),
        CHANGELOG
    );
}

#[test]
fn test_dry_run_and_strict() {
    let (temp_dir, storage) = setup("v2.0.0\n", "# Changelog\n");

    let result = ChangelogStamper::new(storage.clone(), ChangelogConfig::default())
        .strict(true)
        .run();
    match result {
        Err(e @ ToolError::PlaceholderNotFound { .. }) => assert_eq!(e.exit_code(), 2),
        other => panic!("expected PlaceholderNotFound, got {:?}", other),
    }

    fs::write(temp_dir.path().join("CHANGELOG.md"), "## [LATEST]\n").unwrap();
    let outcome = ChangelogStamper::new(storage, ChangelogConfig::default())
        .dry_run(true)
        .run()
        .unwrap();
    assert_eq!(
        outcome.link_line.as_deref(),
        Some("[v2.0.0]: https://github.com/modCAM/modcam/releases/tag/v2.0.0")
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("CHANGELOG.md")).unwrap(),
        "## [LATEST]\n"
    );
}
