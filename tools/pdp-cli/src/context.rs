//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use product_details::config::LogFormat;
use product_details::{telemetry, PageConfig};

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Page configuration.
    pub config: PageConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => PageConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path))?,
            None => Self::find_config(&cwd)?.unwrap_or_default(),
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest existing file wins; failing to load it is an error.
    fn find_config(start: &Path) -> Result<Option<PageConfig>> {
        let config_names = ["pdp.toml", ".pdp.toml", "pdp.json"];

        let found = start.ancestors().find_map(|dir| {
            config_names
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.exists())
        });

        found
            .map(|path| {
                PageConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))
            })
            .transpose()
    }

    /// Install the tracing subscriber; `--verbose` raises the filter to debug.
    ///
    /// Logs go to stderr, so `--json` output on stdout stays parseable.
    pub fn init_telemetry(&self) {
        let mut config = self.config.telemetry.clone();
        if self.output.is_verbose() {
            config.filter = "debug".to_string();
        }
        if self.output.is_json() {
            config.format = LogFormat::Json;
        }
        telemetry::init(&config);
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Read a file relative to the working directory.
    pub fn read_file(&self, path: &str) -> Result<String> {
        let resolved = self.resolve_path(path);
        std::fs::read_to_string(&resolved)
            .with_context(|| format!("Failed to read {}", resolved.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_loads_nearest_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pdp.toml"),
            "[meta]\nout_of_stock_label = \"sold out\"\n",
        )
        .unwrap();
        let nested = dir.path().join("fixtures");
        std::fs::create_dir(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.meta.out_of_stock_label, "sold out");
    }

    #[test]
    fn test_find_config_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pdp.toml"), "[meta").unwrap();

        let err = Context::find_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("pdp.toml"));
    }
}
