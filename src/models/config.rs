use crate::assets::AssetLoader;
use crate::error::ConvertError;
use serde::Deserialize;
use tile_dither::{DitherError, MasterPalette, PaletteError};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Master palette preset name
    #[serde(default = "default_palette")]
    pub palette: String,

    /// Custom master palette (16 hex colors), overrides `palette`
    #[serde(default)]
    pub colors: Option<Vec<String>>,

    /// Fixed background index; searched when unset
    #[serde(default)]
    pub background: Option<usize>,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_palette() -> String {
    "ntsc".to_string()
}

/// Output file settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Write a PNG preview alongside the Koala file
    #[serde(default = "default_true")]
    pub preview: bool,

    /// Appended to the input stem for the preview file name
    #[serde(default = "default_preview_suffix")]
    pub preview_suffix: String,

    /// Extension of the Koala file
    #[serde(default = "default_data_extension")]
    pub data_extension: String,

    /// Re-compress preview PNGs with oxipng
    #[serde(default = "default_true")]
    pub optimize_png: bool,
}

fn default_true() -> bool {
    true
}

fn default_preview_suffix() -> String {
    "-dithered".to_string()
}

fn default_data_extension() -> String {
    "koa".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            preview: true,
            preview_suffix: default_preview_suffix(),
            data_extension: default_data_extension(),
            optimize_png: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            colors: None,
            background: None,
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse YAML config text
    pub fn from_yaml(content: &str) -> Result<Self, ConvertError> {
        serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        palette = %config.palette,
                        custom_colors = config.colors.is_some(),
                        background = ?config.background,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Select a preset by name, dropping any custom colors
    pub fn with_palette(mut self, name: impl Into<String>) -> Self {
        self.palette = name.into();
        self.colors = None;
        self
    }

    /// Fix the background color index
    pub fn with_background(mut self, index: usize) -> Self {
        self.background = Some(index);
        self
    }

    /// Resolve the master palette: custom colors first, then the preset
    pub fn master_palette(&self) -> Result<MasterPalette, ConvertError> {
        if let Some(ref colors) = self.colors {
            return MasterPalette::from_hex(colors.as_slice())
                .map_err(|e| DitherError::from(e).into());
        }
        MasterPalette::from_name(&self.palette).map_err(|e| match e {
            PaletteError::UnknownPreset(name) => ConvertError::UnknownPalette(name),
            other => DitherError::from(other).into(),
        })
    }
}
