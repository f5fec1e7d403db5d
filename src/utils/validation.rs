use crate::utils::error::{Result, ToolError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks a release URL template: it must mention `{version}` and expand to an http(s) URL.
pub fn validate_url_template(field_name: &str, template: &str) -> Result<()> {
    if !template.contains("{version}") {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Template must contain the {version} placeholder".to_string(),
        });
    }

    let sample = template.replace("{version}", "v0.0.0");
    match Url::parse(&sample) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ToolError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: template.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_file_extension(field_name: &str, file: &str, extension: &str) -> Result<()> {
    let actual = std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str());

    if actual != Some(extension) {
        return Err(ToolError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!("Expected a .{} file", extension),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_template() {
        assert!(validate_url_template(
            "release_url_template",
            "https://github.com/modCAM/modcam/releases/tag/{version}"
        )
        .is_ok());
        assert!(validate_url_template("release_url_template", "https://example.com/").is_err());
        assert!(validate_url_template("release_url_template", "ftp://example.com/{version}").is_err());
        assert!(validate_url_template("release_url_template", "not a url {version}").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("changelog_file", "CHANGELOG.md").is_ok());
        assert!(validate_path("changelog_file", "").is_err());
        assert!(validate_path("changelog_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("bibtex_bibfiles", "modCAM.bib", "bib").is_ok());
        assert!(validate_file_extension("bibtex_bibfiles", "modCAM.txt", "bib").is_err());
        assert!(validate_file_extension("bibtex_bibfiles", "modCAM", "bib").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("placeholder", "## [LATEST]").is_ok());
        assert!(validate_non_empty_string("placeholder", "   ").is_err());
    }
}
