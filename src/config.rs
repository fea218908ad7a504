use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".sproutrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &["**/src/test/**", "**/*Test.java", "**/*Tests.java"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_internal_markers")]
    pub internal_markers: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ignore_test_files: bool,
    #[serde(default = "default_build_descriptor")]
    pub build_descriptor: String,
    #[serde(default = "default_report_file")]
    pub report_file: String,
    #[serde(default = "default_dead_code_report_file")]
    pub dead_code_report_file: String,
}

fn default_internal_markers() -> Vec<String> {
    ["commons", "security"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    ["**/target/**", "**/build/**"].map(String::from).to_vec()
}

fn default_build_descriptor() -> String {
    "pom.xml".to_string()
}

fn default_report_file() -> String {
    "inventory_report.txt".to_string()
}

fn default_dead_code_report_file() -> String {
    "dead_code_report.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            internal_markers: default_internal_markers(),
            ignores: default_ignores(),
            ignore_test_files: false,
            build_descriptor: default_build_descriptor(),
            report_file: default_report_file(),
            dead_code_report_file: default_dead_code_report_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or a
    /// file name setting is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for (field, value) in [
            ("buildDescriptor", &self.build_descriptor),
            ("reportFile", &self.report_file),
            ("deadCodeReportFile", &self.dead_code_report_file),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("'{}' must not be empty", field);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from; `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
