use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use crate::core::{AppConfig, PreferenceStore, Prompter, SwapError};

/// Where replaceable movie assets live relative to a product install.
#[derive(Debug, Clone)]
pub struct TargetLayout {
    pub vendor_segment: String,
    pub product_segment: String,
    pub asset_subpath: PathBuf,
}

impl TargetLayout {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            vendor_segment: config.vendor_segment.clone(),
            product_segment: config.product_segment.clone(),
            asset_subpath: config.asset_subpath.clone(),
        }
    }

    /// Rewrites a picked directory to the asset directory beneath the first
    /// product segment. Both segments must appear somewhere in `chosen`.
    pub fn derive(&self, chosen: &Path) -> Result<PathBuf, SwapError> {
        let components: Vec<Component> = chosen.components().collect();
        let is_segment = |component: &Component, name: &str| {
            matches!(component, Component::Normal(part) if *part == OsStr::new(name))
        };

        let has_vendor = components.iter().any(|c| is_segment(c, &self.vendor_segment));
        let product_index = components.iter().position(|c| is_segment(c, &self.product_segment));

        match product_index {
            Some(index) if has_vendor => {
                let mut target: PathBuf = components[..=index].iter().collect();
                target.push(&self.asset_subpath);
                Ok(target)
            }
            _ => Err(SwapError::InvalidTargetShape {
                path: chosen.to_path_buf(),
                vendor: self.vendor_segment.clone(),
                product: self.product_segment.clone(),
            }),
        }
    }

    /// Returns the cached target directory if it still exists, otherwise asks
    /// the user for one and caches the derived path.
    ///
    /// `Ok(None)` means the user cancelled the picker.
    pub fn resolve(&self, store: &PreferenceStore, prompter: &dyn Prompter) -> Result<Option<PathBuf>, SwapError> {
        let preferences = store.load()?;

        if let Some(cached) = preferences.target_directory() {
            if cached.exists() {
                log::debug!("Using cached target directory {}", cached.display());
                return Ok(Some(cached));
            }
            log::warn!("Cached target directory no longer exists: {}", cached.display());
        }

        let Some(chosen) = prompter.pick_target_directory() else {
            log::info!("Target directory selection cancelled");
            return Ok(None);
        };

        let target = self.derive(&chosen)?;
        store.save_target_directory(&target)?;
        Ok(Some(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct DirectoryPicker {
        choice: Option<PathBuf>,
        errors: RefCell<Vec<String>>,
        picks: RefCell<usize>,
    }

    impl DirectoryPicker {
        fn choosing(choice: Option<PathBuf>) -> Self {
            Self {
                choice,
                errors: RefCell::new(Vec::new()),
                picks: RefCell::new(0),
            }
        }
    }

    impl Prompter for DirectoryPicker {
        fn pick_video(&self) -> Option<PathBuf> {
            None
        }

        fn pick_target_directory(&self) -> Option<PathBuf> {
            *self.picks.borrow_mut() += 1;
            self.choice.clone()
        }

        fn show_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn show_info(&self, _message: &str) {}
    }

    fn layout() -> TargetLayout {
        TargetLayout::from_config(&AppConfig::default())
    }

    #[test]
    fn test_derive_rewrites_to_asset_directory() {
        let chosen = Path::new("/mnt/c/Riot Games/VALORANT/live/ShooterGame");
        let target = layout().derive(chosen).unwrap();
        assert_eq!(
            target,
            PathBuf::from("/mnt/c/Riot Games/VALORANT/live/ShooterGame/Content/Movies/Menu")
        );
    }

    #[test]
    fn test_derive_accepts_product_folder_itself() {
        let target = layout().derive(Path::new("/games/Riot Games/VALORANT")).unwrap();
        assert_eq!(target, PathBuf::from("/games/Riot Games/VALORANT/live/ShooterGame/Content/Movies/Menu"));
    }

    #[test]
    fn test_derive_uses_first_product_segment() {
        let target = layout().derive(Path::new("/Riot Games/VALORANT/backup/VALORANT")).unwrap();
        assert_eq!(target, PathBuf::from("/Riot Games/VALORANT/live/ShooterGame/Content/Movies/Menu"));
    }

    #[test]
    fn test_derive_rejects_missing_segments() {
        for chosen in ["/games/VALORANT", "/games/Riot Games", "/games/valorant/Riot Games", "/tmp"] {
            let result = layout().derive(Path::new(chosen));
            assert!(
                matches!(result, Err(SwapError::InvalidTargetShape { .. })),
                "{} should be rejected",
                chosen
            );
        }
    }

    #[test]
    fn test_resolve_returns_existing_cached_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("config.json"));
        store.save_target_directory(dir.path()).unwrap();
        let picker = DirectoryPicker::choosing(None);

        let resolved = layout().resolve(&store, &picker).unwrap();

        assert_eq!(resolved, Some(dir.path().to_path_buf()));
        assert_eq!(*picker.picks.borrow(), 0);
    }

    #[test]
    fn test_resolve_prompts_when_cache_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("config.json"));
        store.save_target_directory(&dir.path().join("gone")).unwrap();
        let chosen = dir.path().join("Riot Games").join("VALORANT");
        let picker = DirectoryPicker::choosing(Some(chosen.clone()));

        let resolved = layout().resolve(&store, &picker).unwrap();

        let expected = chosen.join("live").join("ShooterGame").join("Content").join("Movies").join("Menu");
        assert_eq!(resolved, Some(expected.clone()));
        assert_eq!(store.load().unwrap().target_directory(), Some(expected));
    }

    #[test]
    fn test_resolve_cancelled_pick_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("config.json"));
        let picker = DirectoryPicker::choosing(None);

        assert_eq!(layout().resolve(&store, &picker).unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_resolve_invalid_pick_leaves_preferences_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("config.json"));
        std::fs::write(store.path(), r#"{"last_selected_video": 3}"#).unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();
        let picker = DirectoryPicker::choosing(Some(dir.path().join("Games").join("Other")));

        let result = layout().resolve(&store, &picker);

        assert!(matches!(result, Err(SwapError::InvalidTargetShape { .. })));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
        assert!(picker.errors.borrow().is_empty());
    }
}
