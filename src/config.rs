use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArtifactError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub latex: LatexConfig,
    pub figures: FigureConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub raw_dir: PathBuf,
    pub tables_dir: PathBuf,
    pub figures_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("data/raw"),
            tables_dir: PathBuf::from("output/tables"),
            figures_dir: PathBuf::from("output/figures"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatexConfig {
    /// Write a `.tex` file next to every table CSV
    pub enabled: bool,
    /// Text written for missing cells
    pub na_rep: String,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self { enabled: true, na_rep: "NaN".to_string() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self { dpi: 300, width_in: 6.4, height_in: 4.8 }
    }
}

impl FigureConfig {
    /// Canvas width in points (1pt = 1/72").
    pub fn width_pt(&self) -> f64 {
        self.width_in * 72.0
    }

    pub fn height_pt(&self) -> f64 {
        self.height_in * 72.0
    }
}

impl Config {
    /// Load configuration. Without an explicit path, `config.toml` is used if
    /// it exists and defaults otherwise; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !config_path.exists() {
            if required {
                return Err(ArtifactError::Config(format!(
                    "Config file '{}' does not exist",
                    config_path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            ArtifactError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Point both output directories under a single root.
    pub fn with_output_root(mut self, root: &Path) -> Self {
        self.paths.tables_dir = root.join("tables");
        self.paths.figures_dir = root.join("figures");
        self
    }

    pub fn with_raw_dir(mut self, raw_dir: &Path) -> Self {
        self.paths.raw_dir = raw_dir.to_path_buf();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.figures.dpi == 0 {
            return Err(ArtifactError::Config("figures.dpi must be positive".into()));
        }
        if !(self.figures.width_in > 0.0 && self.figures.height_in > 0.0) {
            return Err(ArtifactError::Config(
                "figures.width_in and figures.height_in must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_fixed_layout() {
        let config = Config::default();
        assert_eq!(config.paths.raw_dir, PathBuf::from("data/raw"));
        assert_eq!(config.paths.tables_dir, PathBuf::from("output/tables"));
        assert_eq!(config.paths.figures_dir, PathBuf::from("output/figures"));
        assert!(config.latex.enabled);
        assert_eq!(config.figures.dpi, 300);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[latex]\nna_rep = \"--\"\n\n[figures]\ndpi = 150").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.latex.na_rep, "--");
        assert!(config.latex.enabled);
        assert_eq!(config.figures.dpi, 150);
        assert_eq!(config.paths.raw_dir, PathBuf::from("data/raw"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(ArtifactError::Config(_))));
    }

    #[test]
    fn test_zero_dpi_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[figures]\ndpi = 0").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_output_root_override() {
        let config = Config::default().with_output_root(Path::new("/tmp/out"));
        assert_eq!(config.paths.tables_dir, PathBuf::from("/tmp/out/tables"));
        assert_eq!(config.paths.figures_dir, PathBuf::from("/tmp/out/figures"));
    }
}
