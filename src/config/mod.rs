use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Rendering configuration. Every field has a default, so a config file
/// only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid rows per hour.
    pub inner_rows: u32,
    /// Sub-columns per day, including the overflow slot.
    pub inner_cols: u32,
    /// Minutes represented by one grid row.
    pub granularity_minutes: u32,
    pub days_per_page: u32,
    /// Page size in points (A4 landscape by default).
    pub page_width: f32,
    pub page_height: f32,
    /// Distance between the page edge and the grid, on every side.
    pub margin: u32,
    pub font_size: f32,
    pub label_font_size: f32,
    pub header_font_size: f32,
    /// Line height as a multiple of the font size.
    pub leading_factor: f32,
    /// Average glyph width as a multiple of the font size.
    pub char_width_factor: f32,
    /// Extra width granted to event text, in grid columns. Text may spill
    /// this far past the left edge of its box.
    pub text_correction_cols: u32,
    pub overflow_label: String,
    pub default_category: String,
    pub producer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inner_rows: 2,
            inner_cols: 6,
            granularity_minutes: 30,
            days_per_page: 7,
            page_width: 841.89,
            page_height: 595.28,
            margin: 50,
            font_size: 7.0,
            label_font_size: 8.0,
            header_font_size: 12.0,
            leading_factor: 1.2,
            char_width_factor: 0.5,
            text_correction_cols: 2,
            overflow_label: "Beso".to_string(),
            default_category: "default".to_string(),
            producer: "wap-render".to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".waprender")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("waprender.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Config::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the standard location).
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }

    pub fn validate(&self) -> AppResult<()> {
        let bad = |msg: &str| Err(AppError::Configuration(msg.to_string()));

        if self.inner_rows == 0 || self.inner_cols == 0 || self.days_per_page == 0 {
            return bad("inner_rows, inner_cols and days_per_page must be positive");
        }
        if self.granularity_minutes == 0 || 60 % self.granularity_minutes != 0 {
            return bad("granularity_minutes must divide an hour");
        }
        if self.inner_rows * self.granularity_minutes != 60 {
            return bad("inner_rows * granularity_minutes must be 60");
        }
        if self.font_size <= 0.0 || self.leading_factor <= 0.0 || self.char_width_factor <= 0.0 {
            return bad("font_size, leading_factor and char_width_factor must be positive");
        }
        if self.overflow_label.trim().is_empty() {
            return bad("overflow_label must not be empty");
        }
        Ok(())
    }

    /// Width and height left for the grid, in whole points.
    pub fn available_area(&self) -> (i32, i32) {
        let m = 2.0 * self.margin as f32;
        (
            (self.page_width - m) as i32,
            (self.page_height - m) as i32,
        )
    }
}
