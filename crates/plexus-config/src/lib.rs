//! Presentation settings for plexus.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file means defaults; missing keys take their default values.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use color_eyre::eyre::{Result, WrapErr, ensure};
use directories::ProjectDirs;
use log::info;
use plexus_core::ColorTheme;
use serde::Deserialize;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "plexus.log";

/// User-facing settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hue of nodes and connection lines.
    pub color_theme: ColorTheme,
    /// Target time between frames.
    pub frame_interval_ms: u64,
    /// Surface pixels covered by one terminal column.
    pub cell_width_px: f64,
    /// Surface pixels covered by one terminal row.
    pub cell_height_px: f64,
    /// Show the key help line at the bottom.
    pub show_help: bool,
    /// RGB color behind the network; faded lines blend into it.
    pub background: (u8, u8, u8),
    /// Where to write the log. Defaults to the platform data directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            frame_interval_ms: 16,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            show_help: true,
            background: (0, 0, 0),
            log_file: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).wrap_err_with(|| format!("invalid config {}", path.display()))
    }

    /// Parse and validate TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set `color_theme` in the file at `path`, leaving every other key as written.
    ///
    /// A missing file is created holding only the theme.
    pub fn save_theme_to(path: &Path, theme: ColorTheme) -> Result<()> {
        let mut table = if path.exists() {
            fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read config {}", path.display()))?
                .parse::<toml::Table>()
                .wrap_err_with(|| format!("invalid config {}", path.display()))?
        } else {
            toml::Table::new()
        };
        table.insert("color_theme".to_string(), toml::Value::try_from(theme)?);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(path, toml::to_string(&table)?)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        info!("saved color theme {theme:?} to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.frame_interval_ms > 0,
            "frame_interval_ms must be at least 1"
        );
        ensure!(
            self.cell_width_px > 0.0 && self.cell_height_px > 0.0,
            "cell_width_px and cell_height_px must be positive"
        );
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Configured log file, or the default one in the data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE)))
    }

    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "plexus")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            color_theme = "magenta"
            frame_interval_ms = 33
            "#,
        )
        .unwrap();
        assert_eq!(config.color_theme, ColorTheme::Magenta);
        assert_eq!(config.frame_interval(), Duration::from_millis(33));
        assert_eq!(config.cell_width_px, 8.0);
        assert!(config.show_help);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = Config::parse("node_count = 200\nshow_help = false\n").unwrap();
        assert!(!config.show_help);
    }

    #[test]
    fn test_rejects_zero_interval() {
        assert!(Config::parse("frame_interval_ms = 0").is_err());
    }

    #[test]
    fn test_rejects_non_positive_cells() {
        assert!(Config::parse("cell_width_px = 0.0").is_err());
        assert!(Config::parse("cell_height_px = -4.0").is_err());
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(Config::parse(r#"color_theme = "plaid""#).is_err());
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("plexus-config-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_save_theme_creates_minimal_file() {
        let dir = scratch_dir("new");
        let path = dir.join(CONFIG_FILE);

        Config::save_theme_to(&path, ColorTheme::Yellow).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), r#"color_theme = "yellow""#);
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.color_theme, ColorTheme::Yellow);
        assert!(config.show_help);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_theme_keeps_other_keys() {
        let dir = scratch_dir("existing");
        let path = dir.join(CONFIG_FILE);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            &path,
            "color_theme = \"red\"\nshow_help = false\nframe_interval_ms = 40\n",
        )
        .unwrap();

        Config::save_theme_to(&path, ColorTheme::Blue).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.color_theme, ColorTheme::Blue);
        assert!(!config.show_help);
        assert_eq!(config.frame_interval_ms, 40);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_background_key() {
        let config = Config::parse("background = [15, 23, 42]").unwrap();
        assert_eq!(config.background, (15, 23, 42));
        assert_eq!(Config::default().background, (0, 0, 0));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("plexus-config-does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_log_path_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/var/tmp/p.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/var/tmp/p.log")));
    }
}
