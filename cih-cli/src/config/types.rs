use serde::{Deserialize, Serialize};

/// Path the app opens at when none is given
pub const DEFAULT_INITIAL_PATH: &str = "/";

/// Theme used when none is configured
pub const DEFAULT_THEME: &str = "cih";

/// Off-screen frame size for `cih render`
pub const DEFAULT_RENDER_WIDTH: u16 = 100;
pub const DEFAULT_RENDER_HEIGHT: u16 = 40;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCihConfig {
    #[serde(default)]
    pub ui: RawUiConfig,

    #[serde(default)]
    pub render: RawRenderConfig,
}

/// UI config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUiConfig {
    pub initial_path: Option<String>,
    pub theme: Option<String>,
}

/// Render config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawRenderConfig {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CihConfig {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Path the interactive app opens at
    pub initial_path: String,

    /// Theme name (cih, light)
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_path: DEFAULT_INITIAL_PATH.to_string(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Frame width in cells
    pub width: u16,

    /// Frame height in rows
    pub height: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_RENDER_WIDTH,
            height: DEFAULT_RENDER_HEIGHT,
        }
    }
}
