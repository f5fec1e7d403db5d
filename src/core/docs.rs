use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options handed to the Sphinx documentation builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub project: String,
    pub author: String,
    pub copyright: String,
    pub extensions: Vec<String>,
    pub templates_path: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub html_theme: String,
    pub breathe_default_project: String,
    pub bibtex_bibfiles: Vec<String>,
    pub bibtex_default_style: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        let contributors = "contributors to the modCAM project".to_string();
        Self {
            project: "modCAM".to_string(),
            author: contributors.clone(),
            copyright: contributors,
            extensions: vec!["breathe".to_string()],
            templates_path: vec!["_templates".to_string()],
            exclude_patterns: vec![
                "_build".to_string(),
                "Thumbs.db".to_string(),
                ".DS_Store".to_string(),
            ],
            html_theme: "sphinx_book_theme".to_string(),
            breathe_default_project: "modCAM".to_string(),
            bibtex_bibfiles: vec!["modCAM.bib".to_string()],
            bibtex_default_style: "unsrt".to_string(),
        }
    }
}

impl DocsConfig {
    /// Returns the bibliography files that are missing under `docs_dir`.
    pub fn missing_bibfiles<P: AsRef<Path>>(&self, docs_dir: P) -> Vec<String> {
        self.bibtex_bibfiles
            .iter()
            .filter(|bib| !docs_dir.as_ref().join(bib).is_file())
            .cloned()
            .collect()
    }

    /// Fails on the first bibliography file missing under `docs_dir`.
    pub fn check_files<P: AsRef<Path>>(&self, docs_dir: P) -> Result<()> {
        let docs_dir = docs_dir.as_ref();
        if let Some(missing) = self.missing_bibfiles(docs_dir).into_iter().next() {
            return Err(ToolError::InvalidConfigValueError {
                field: "docs.bibtex_bibfiles".to_string(),
                value: missing,
                reason: format!("File not found under {}", docs_dir.display()),
            });
        }
        Ok(())
    }

    /// Renders a Sphinx `conf.py`. JSON string and list literals are valid Python literals.
    pub fn render_conf_py(&self) -> Result<String> {
        let mut out = String::new();
        out.push_str("# Configuration file for the Sphinx documentation builder.\n");
        out.push_str("# Generated by modcam-tools; edit modcam-tools.toml instead.\n\n");

        out.push_str("# -- Project information ---\n\n");
        out.push_str(&format!("project = {}\n", python_str(&self.project)?));
        out.push_str(&format!("author = {}\n", python_str(&self.author)?));
        out.push_str(&format!("copyright = {}\n\n", python_str(&self.copyright)?));

        out.push_str("# -- General configuration ---\n\n");
        out.push_str(&format!("extensions = {}\n", python_list(&self.extensions)?));
        out.push_str(&format!("templates_path = {}\n", python_list(&self.templates_path)?));
        out.push_str(&format!(
            "exclude_patterns = {}\n\n",
            python_list(&self.exclude_patterns)?
        ));

        out.push_str("# -- Options for HTML output ---\n\n");
        out.push_str(&format!("html_theme = {}\n\n", python_str(&self.html_theme)?));

        out.push_str("# -- Breathe configuration ---\n\n");
        out.push_str(&format!(
            "breathe_default_project = {}\n\n",
            python_str(&self.breathe_default_project)?
        ));

        out.push_str("# -- Bibliography configuration ---\n\n");
        out.push_str(&format!("bibtex_bibfiles = {}\n", python_list(&self.bibtex_bibfiles)?));
        out.push_str(&format!(
            "bibtex_default_style = {}\n",
            python_str(&self.bibtex_default_style)?
        ));

        Ok(out)
    }
}

fn python_str(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn python_list(values: &[String]) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}

impl Validate for DocsConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("docs.project", &self.project)?;
        validate_non_empty_string("docs.html_theme", &self.html_theme)?;

        for extension in &self.extensions {
            validate_non_empty_string("docs.extensions", extension)?;
        }
        for template in &self.templates_path {
            validate_path("docs.templates_path", template)?;
        }
        for bib in &self.bibtex_bibfiles {
            validate_path("docs.bibtex_bibfiles", bib)?;
            validate_file_extension("docs.bibtex_bibfiles", bib, "bib")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_project() {
        let docs = DocsConfig::default();
        assert_eq!(docs.project, "modCAM");
        assert_eq!(docs.extensions, vec!["breathe"]);
        assert_eq!(docs.html_theme, "sphinx_book_theme");
        assert_eq!(docs.bibtex_bibfiles, vec!["modCAM.bib"]);
        assert!(docs.validate().is_ok());
    }

    #[test]
    fn test_render_conf_py() {
        let rendered = DocsConfig::default().render_conf_py().unwrap();
        assert!(rendered.contains("project = \"modCAM\"\n"));
        assert!(rendered.contains("extensions = [\"breathe\"]\n"));
        assert!(rendered.contains("exclude_patterns = [\"_build\",\"Thumbs.db\",\".DS_Store\"]\n"));
        assert!(rendered.contains("bibtex_default_style = \"unsrt\"\n"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let docs = DocsConfig {
            project: "say \"hi\"".to_string(),
            ..DocsConfig::default()
        };
        let rendered = docs.render_conf_py().unwrap();
        assert!(rendered.contains(r#"project = "say \"hi\"""#));
    }

    #[test]
    fn test_validate_rejects_bad_bibfile() {
        let docs = DocsConfig {
            bibtex_bibfiles: vec!["refs.txt".to_string()],
            ..DocsConfig::default()
        };
        assert!(docs.validate().is_err());
    }

    #[test]
    fn test_check_files() {
        let dir = TempDir::new().unwrap();
        let docs = DocsConfig::default();

        assert_eq!(docs.missing_bibfiles(dir.path()), vec!["modCAM.bib"]);
        assert!(docs.check_files(dir.path()).is_err());

        std::fs::write(dir.path().join("modCAM.bib"), "@book{x,}").unwrap();
        assert!(docs.check_files(dir.path()).is_ok());
    }
}
