use crate::config::toml_config::{ChangelogConfig, VenvConfig};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "modcam-tools")]
#[command(version)]
#[command(about = "Release and environment tooling for the modCAM project")]
pub struct CliConfig {
    /// Path to a TOML configuration file (default: modcam-tools.toml if present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stamp the changelog placeholder with the release version
    Changelog(ChangelogArgs),
    /// Print True if running inside a virtual or conda environment, else False
    Venv(VenvArgs),
    /// Inspect or render the Sphinx documentation configuration
    Docs {
        #[command(subcommand)]
        action: DocsAction,
    },
}

#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// File whose first line is the release version
    #[arg(long)]
    pub version_file: Option<String>,

    /// Changelog to stamp in place
    #[arg(long)]
    pub changelog: Option<String>,

    /// Literal heading replaced by the version
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Release URL, with {version} substituted
    #[arg(long)]
    pub release_url_template: Option<String>,

    /// Fail when the placeholder is missing instead of doing nothing
    #[arg(long)]
    pub strict: bool,

    /// Show what would be written without touching the changelog
    #[arg(long)]
    pub dry_run: bool,
}

impl ChangelogArgs {
    pub fn apply(&self, config: &mut ChangelogConfig) {
        if let Some(path) = &self.version_file {
            config.version_file = path.clone();
        }
        if let Some(path) = &self.changelog {
            config.changelog_file = path.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }
        if let Some(template) = &self.release_url_template {
            config.release_url_template = template.clone();
        }
    }
}

#[derive(Debug, Args)]
pub struct VenvArgs {
    /// Python interpreter to query for its prefixes
    #[arg(long)]
    pub python: Option<String>,

    /// Environment variable whose presence means an isolated environment (repeatable)
    #[arg(long = "marker")]
    pub markers: Vec<String>,

    /// Print the detection details as JSON
    #[arg(long)]
    pub json: bool,
}

impl VenvArgs {
    pub fn apply(&self, config: &mut VenvConfig) {
        if let Some(python) = &self.python {
            config.python = python.clone();
        }
        if !self.markers.is_empty() {
            config.marker_env_vars = self.markers.clone();
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum DocsAction {
    /// Print the effective docs configuration
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration and check that bibliography files exist
    Check {
        #[arg(long, default_value = "docs")]
        docs_dir: String,
    },
    /// Render a Sphinx conf.py
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}
