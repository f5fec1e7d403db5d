//! Stamps the `## [LATEST]` section of the changelog with the release version.
//!
//! The release date is only known once the release workflow runs, so the
//! changelog keeps a placeholder heading until then. Stamping replaces the
//! placeholder with the version and appends a reference link to the release.

use crate::config::toml_config::ChangelogConfig;
use crate::core::{ReleaseVersion, StampOutcome, Storage};
use crate::utils::error::{Result, ToolError};

pub const DEFAULT_PLACEHOLDER: &str = "## [LATEST]";
pub const DEFAULT_RELEASE_URL_TEMPLATE: &str =
    "https://github.com/modCAM/modcam/releases/tag/{version}";

/// Reads the release version from the first line of `path`.
pub fn read_version<S: Storage>(storage: &S, path: &str) -> Result<ReleaseVersion> {
    if !storage.exists(path) {
        return Err(ToolError::VersionFileNotFound {
            path: path.to_string(),
        });
    }

    let contents = storage.read_to_string(path)?;
    ReleaseVersion::from_first_line(&contents).ok_or_else(|| ToolError::EmptyVersion {
        path: path.to_string(),
    })
}

/// `[<version>]: <url>` for the given template.
pub fn release_link(template: &str, version: &ReleaseVersion) -> String {
    let url = template.replace("{version}", version.as_str());
    format!("[{}]: {}", version, url)
}

/// Replaces the first `placeholder` with `## [<version>]` and appends the release link.
///
/// When the placeholder is missing the contents come back untouched and no
/// link is appended.
pub fn stamp(
    contents: &str,
    version: &ReleaseVersion,
    placeholder: &str,
    url_template: &str,
) -> StampOutcome {
    if placeholder.is_empty() || !contents.contains(placeholder) {
        return StampOutcome {
            version: version.clone(),
            contents: contents.to_string(),
            placeholder_found: false,
            link_line: None,
        };
    }

    let heading = format!("## [{}]", version);
    let link = release_link(url_template, version);

    let mut stamped = contents.replacen(placeholder, &heading, 1);
    stamped.push('\n');
    stamped.push_str(&link);

    StampOutcome {
        version: version.clone(),
        contents: stamped,
        placeholder_found: true,
        link_line: Some(link),
    }
}

pub struct ChangelogStamper<S: Storage> {
    storage: S,
    config: ChangelogConfig,
    strict: bool,
    dry_run: bool,
}

impl<S: Storage> ChangelogStamper<S> {
    pub fn new(storage: S, config: ChangelogConfig) -> Self {
        Self {
            storage,
            config,
            strict: false,
            dry_run: false,
        }
    }

    /// Fail instead of skipping when the placeholder is missing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self) -> Result<StampOutcome> {
        let version = read_version(&self.storage, &self.config.version_file)?;
        tracing::info!("Version: {}", version);

        let path = &self.config.changelog_file;
        if !self.storage.exists(path) {
            return Err(ToolError::ChangelogNotFound { path: path.clone() });
        }

        let contents = self.storage.read_to_string(path)?;
        let outcome = stamp(
            &contents,
            &version,
            &self.config.placeholder,
            &self.config.release_url_template,
        );

        if !outcome.placeholder_found {
            if self.strict {
                return Err(ToolError::PlaceholderNotFound {
                    placeholder: self.config.placeholder.clone(),
                    path: path.clone(),
                });
            }
            tracing::warn!(
                "No '{}' placeholder in {}, leaving it unchanged",
                self.config.placeholder,
                path
            );
            return Ok(outcome);
        }

        if self.dry_run {
            tracing::info!("Dry run, not writing {}", path);
            return Ok(outcome);
        }

        self.storage.write_string(path, &outcome.contents)?;
        tracing::info!("Stamped {} with {}", path, version);
        Ok(outcome)
    }
}
