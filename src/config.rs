//! Configuration file support for ai-bom-visualizer.
//!
//! Provides YAML-based configuration through `ai-bom-visualizer.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::DEFAULT_TITLE;
use crate::cli::Args;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "ai-bom-visualizer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Where to write the viewer instead of a temp file.
    pub output: Option<String>,
    /// Open the viewer in a browser after writing it.
    pub view: Option<bool>,
    pub title: Option<String>,
    /// Seconds to wait for stdin to close; 0 waits forever.
    pub stdin_timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref title) = config.title {
        if title.trim().is_empty() {
            bail!(
                "Invalid config: title must not be empty.\n\n\
                 💡 Hint: Remove the 'title' field to use the default title."
            );
        }
    }

    if let Some(ref output) = config.output {
        if !has_html_extension(Path::new(output)) {
            bail!(
                "Invalid config: output '{}' must end in .html or .htm.\n\n\
                 💡 Hint: The viewer is an HTML page, e.g. \"output: ai-bom.html\".",
                output
            );
        }
    }
    Ok(())
}

fn has_html_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective settings after layering CLI arguments over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub view: bool,
    pub title: String,
    pub stdin_timeout_secs: u64,
}

/// Merge CLI arguments with an optional config file. CLI values win.
pub fn merge_config(args: &Args, config: Option<ConfigFile>) -> MergedConfig {
    let config = config.unwrap_or_default();

    MergedConfig {
        file: args.file.clone(),
        output: args
            .output
            .clone()
            .or_else(|| config.output.map(PathBuf::from)),
        // A flag cannot be turned off from the command line, so either source enables it
        view: args.view || config.view.unwrap_or(false),
        title: args
            .title
            .clone()
            .or(config.title)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        stdin_timeout_secs: args
            .timeout
            .or(config.stdin_timeout_secs)
            .unwrap_or(0),
    }
}

/// Resolve the config file for this run: the explicit `--config` path, or
/// the one discovered in `cwd`.
pub fn resolve_config(args: &Args, cwd: &Path) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let discovered = discover_config(cwd)?;
            if discovered.is_some() {
                eprintln!(
                    "📋 Auto-discovered config file: {}",
                    cwd.join(CONFIG_FILENAME).display()
                );
            }
            Ok(discovered)
        }
    }
}
