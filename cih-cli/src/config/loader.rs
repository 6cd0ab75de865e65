use super::types::{
    CihConfig, DEFAULT_INITIAL_PATH, DEFAULT_RENDER_HEIGHT, DEFAULT_RENDER_WIDTH, DEFAULT_THEME,
    RawCihConfig, RawRenderConfig, RawUiConfig, RenderConfig, UiConfig,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<CihConfig> {
        Self::load_layers(&Self::user_config_path(), &Self::project_config_path())
    }

    /// Load and merge the two config layers from explicit paths
    ///
    /// Missing files are skipped; a file that exists but does not parse is an error.
    pub fn load_layers(user_path: &Path, project_path: &Path) -> Result<CihConfig> {
        let mut raw = RawCihConfig::default();

        // Layer 1: User config
        if let Some(user_config) = Self::read_raw(user_path)? {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        if let Some(project_config) = Self::read_raw(project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        Ok(Self::finalize(raw))
    }

    fn read_raw(path: &Path) -> Result<Option<RawCihConfig>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config layer");
        Ok(Some(config))
    }

    /// Get user config path (XDG)
    pub fn user_config_path() -> PathBuf {
        cih_paths::user_config_file()
    }

    /// Get project config path
    /// Can be overridden with CIH_PROJECT_CONFIG_DIR env var
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("CIH_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join(cih_paths::CONFIG_FILE)
        } else {
            PathBuf::from(".cih").join(cih_paths::CONFIG_FILE)
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawCihConfig, overlay: RawCihConfig) -> RawCihConfig {
        RawCihConfig {
            ui: RawUiConfig {
                initial_path: overlay.ui.initial_path.or(base.ui.initial_path),
                theme: overlay.ui.theme.or(base.ui.theme),
            },
            render: RawRenderConfig {
                width: overlay.render.width.or(base.render.width),
                height: overlay.render.height.or(base.render.height),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawCihConfig) -> CihConfig {
        CihConfig {
            ui: UiConfig {
                initial_path: raw
                    .ui
                    .initial_path
                    .unwrap_or_else(|| DEFAULT_INITIAL_PATH.to_string()),
                theme: raw.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
            },
            render: RenderConfig {
                width: raw.render.width.unwrap_or(DEFAULT_RENDER_WIDTH),
                height: raw.render.height.unwrap_or(DEFAULT_RENDER_HEIGHT),
            },
        }
    }
}
