use url::Url;

use crate::error::{CloudError, Result};

/// Smallest font-size class a word can get
pub const SIZE_MIN: u32 = 11;
/// Largest font-size class a word can get
pub const SIZE_MAX: u32 = 48;
/// Absolute stylesheet, linked first so the page renders without local data
pub const FALLBACK_STYLESHEET_URL: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";
/// Relative stylesheet, next to the generated page
pub const LOCAL_STYLESHEET: &str = "data/tagcloud.css";

/// What the renderer emits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

/// Rendering settings for one cloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudConfig {
    pub min_font: u32,
    pub max_font: u32,
    pub stylesheet_url: Url,
    pub local_stylesheet: String,
    pub format: OutputFormat,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            min_font: SIZE_MIN,
            max_font: SIZE_MAX,
            stylesheet_url: Url::parse(FALLBACK_STYLESHEET_URL)
                .expect("fallback stylesheet URL is valid"),
            local_stylesheet: LOCAL_STYLESHEET.to_string(),
            format: OutputFormat::Html,
        }
    }
}

impl CloudConfig {
    pub fn with_font_range(mut self, min_font: u32, max_font: u32) -> Self {
        self.min_font = min_font;
        self.max_font = max_font;
        self
    }

    /// Replace the absolute stylesheet link. Fails on anything that is not an absolute URL.
    pub fn with_stylesheet_url(mut self, url: &str) -> Result<Self> {
        self.stylesheet_url = Url::parse(url)
            .map_err(|e| CloudError::invalid_config(format!("stylesheet URL {url:?}: {e}")))?;
        Ok(self)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_font == 0 {
            return Err(CloudError::invalid_config("minimum font size must be positive"));
        }
        if self.min_font > self.max_font {
            return Err(CloudError::invalid_config(format!(
                "minimum font size {} exceeds maximum {}",
                self.min_font, self.max_font
            )));
        }
        Ok(())
    }
}
