use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local directory holding the user's video library.
    pub library_directory: PathBuf,
    /// Where the selection and target directory are persisted.
    pub preferences_path: PathBuf,
    pub ffmpeg_path: Option<PathBuf>,
    pub video_extensions: Vec<String>,
    /// Folder that must appear in a picked target directory.
    pub vendor_segment: String,
    /// Folder that must appear in a picked target directory; the asset path is rooted here.
    pub product_segment: String,
    pub asset_subpath: PathBuf,
    pub preview_max_width: u32,
    pub preview_max_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library_directory: PathBuf::from("videos"),
            preferences_path: PathBuf::from("config.json"),
            ffmpeg_path: None,
            video_extensions: ["mp4", "avi", "mov", "mkv"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            vendor_segment: "Riot Games".to_string(),
            product_segment: "VALORANT".to_string(),
            asset_subpath: ["live", "ShooterGame", "Content", "Movies", "Menu"]
                .iter()
                .collect(),
            preview_max_width: 400,
            preview_max_height: 300,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .map_err(|e| anyhow::anyhow!("Failed to read settings file at {}: {}", config_path.display(), e))?;

            match serde_json::from_str::<Self>(&content) {
                Ok(config) => {
                    log::info!("Loaded existing settings from {}", config_path.display());
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("Settings file exists but has issues ({}), replacing it with defaults", e);
                    let config = Self::default();
                    config.save_to(config_path)
                        .map_err(|save_err| anyhow::anyhow!("Failed to save new settings: {}", save_err))?;
                    Ok(config)
                }
            }
        } else {
            log::info!("No settings file found, creating defaults at {}", config_path.display());
            let config = Self::default();
            config.save_to(config_path)
                .map_err(|e| anyhow::anyhow!("Failed to save default settings: {}", e))?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("menu-swap")
            .join("settings.json")
    }

    /// Settings with the library and preferences file placed under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        let defaults = Self::default();
        Self {
            library_directory: root.join(&defaults.library_directory),
            preferences_path: root.join(&defaults.preferences_path),
            ..defaults
        }
    }

    pub fn ffmpeg_program(&self) -> PathBuf {
        self.ffmpeg_path.clone().unwrap_or_else(|| PathBuf::from("ffmpeg"))
    }
}
