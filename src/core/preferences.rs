use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::core::{SwapError, VideoEntry};

/// The persisted selection and target directory.
///
/// Keys this program does not know about are carried through rewrites untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_selected_video: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_selected_video_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valorant_directory: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Preferences {
    /// Picks the index to show after a fresh scan.
    ///
    /// A recorded path still present in `entries` wins; otherwise the recorded
    /// index is clamped to the list.
    pub fn recover_index(&self, entries: &[VideoEntry]) -> usize {
        if entries.is_empty() {
            return 0;
        }

        if let Some(ref recorded) = self.last_selected_video_path {
            let recorded = Path::new(recorded);
            if let Some(position) = entries.iter().position(|entry| entry.path == recorded) {
                return position;
            }
        }

        self.last_selected_video
            .map_or(0, |index| index.min(entries.len() - 1))
    }

    pub fn target_directory(&self) -> Option<PathBuf> {
        self.valorant_directory.as_ref().map(PathBuf::from)
    }
}

/// Read-modify-write access to the preferences document on disk.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document; a missing file yields empty preferences.
    pub fn load(&self) -> Result<Preferences, SwapError> {
        if !self.path.exists() {
            log::debug!("No preferences file at {}", self.path.display());
            return Ok(Preferences::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| SwapError::PreferencesRead {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SwapError::PreferencesParse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save_selection(&self, index: usize, entry: &VideoEntry) -> Result<(), SwapError> {
        let mut preferences = self.load()?;
        preferences.last_selected_video = Some(index);
        preferences.last_selected_video_path = Some(entry.path.to_string_lossy().into_owned());
        self.write(&preferences)?;
        log::debug!("Saved selection {} ({})", index, entry.display_name());
        Ok(())
    }

    pub fn save_target_directory(&self, directory: &Path) -> Result<(), SwapError> {
        let mut preferences = self.load()?;
        preferences.valorant_directory = Some(directory.to_string_lossy().into_owned());
        self.write(&preferences)?;
        log::info!("Cached target directory {}", directory.display());
        Ok(())
    }

    fn write(&self, preferences: &Preferences) -> Result<(), SwapError> {
        let write_error = |source| SwapError::PreferencesWrite {
            path: self.path.clone(),
            source,
        };

        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        preferences
            .serialize(&mut serializer)
            .map_err(|e| write_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(&self.path, content).map_err(write_error)
    }
}
