use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_SOURCE_BASE_URL;
use crate::error::{ChartError, ChartResult};

/// Settings shared by every chart on a benchmark page.
///
/// Every field has a serde default so a config file only needs to name what
/// it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_source_base_url")]
    pub source_base_url: String,
    #[serde(default = "default_canvas_height_px")]
    pub canvas_height_px: u32,
    #[serde(default = "default_fallback_color")]
    pub fallback_color: Option<String>,
    #[serde(default = "default_fallback_css_class")]
    pub fallback_css_class: String,
    #[serde(default = "default_exclude_fft")]
    pub exclude_fft: bool,
}

impl Default for ChartPageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            source_base_url: default_source_base_url(),
            canvas_height_px: default_canvas_height_px(),
            fallback_color: default_fallback_color(),
            fallback_css_class: default_fallback_css_class(),
            exclude_fft: default_exclude_fft(),
        }
    }
}

impl ChartPageConfig {
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[must_use]
    pub fn with_source_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.source_base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_canvas_height_px(mut self, height_px: u32) -> Self {
        self.canvas_height_px = height_px;
        self
    }

    /// `None` leaves unknown series unstyled.
    #[must_use]
    pub fn with_fallback_color(mut self, color: Option<String>) -> Self {
        self.fallback_color = color;
        self
    }

    #[must_use]
    pub fn with_fallback_css_class(mut self, css_class: impl Into<String>) -> Self {
        self.fallback_css_class = css_class.into();
        self
    }

    #[must_use]
    pub fn with_exclude_fft(mut self, exclude: bool) -> Self {
        self.exclude_fft = exclude;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.source_base_url.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "source_base_url must not be empty".to_owned(),
            ));
        }
        if self.canvas_height_px == 0 {
            return Err(ChartError::InvalidConfig(
                "canvas_height_px must be > 0".to_owned(),
            ));
        }
        if let Some(color) = &self.fallback_color {
            if !is_hex_color(color) {
                return Err(ChartError::InvalidConfig(format!(
                    "fallback_color `{color}` must be #rgb or #rrggbb"
                )));
            }
        }
        if self.fallback_css_class.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "fallback_css_class must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse page config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize page config: {e}"))
        })
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("benchmark-data")
}

fn default_source_base_url() -> String {
    DEFAULT_SOURCE_BASE_URL.to_owned()
}

fn default_canvas_height_px() -> u32 {
    180
}

fn default_fallback_color() -> Option<String> {
    Some("#999999".to_owned())
}

fn default_fallback_css_class() -> String {
    "default".to_owned()
}

fn default_exclude_fft() -> bool {
    true
}
