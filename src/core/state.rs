use crate::core::{
    deploy, import_video, scan_library, AppConfig, PreferenceStore, Prompter, Selection, SwapError,
    TargetLayout, VideoEntry,
};
use crate::video::{make_preview, FrameSource, PreviewFrame};

/// Everything the user can ask the window to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    ImportVideo,
    Previous,
    Next,
    Apply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Viewing(usize),
}

pub struct SwapperState {
    pub config: AppConfig,
    pub entries: Vec<VideoEntry>,
    pub selection: Selection,
    pub preferences: PreferenceStore,
    pub target_layout: TargetLayout,
    pub preview: Option<PreviewFrame>,
    /// Bumped whenever `preview` is replaced.
    pub preview_revision: u64,
}

impl SwapperState {
    /// Scans the library, restores the last selection and renders its preview.
    ///
    /// Only a library that cannot be created or listed fails startup; a broken
    /// preferences file is reported and ignored.
    pub fn startup(config: AppConfig, prompter: &dyn Prompter, frames: &dyn FrameSource) -> Result<Self, SwapError> {
        let entries = scan_library(&config.library_directory, &config.video_extensions)?;
        let preferences = PreferenceStore::new(config.preferences_path.clone());

        let index = match preferences.load() {
            Ok(saved) => saved.recover_index(&entries),
            Err(e) => {
                log::error!("{}", e);
                prompter.show_error(&format!("An error occurred while loading last selected video: {}", e));
                0
            }
        };

        let mut state = Self {
            target_layout: TargetLayout::from_config(&config),
            selection: Selection::new(index, entries.len()),
            entries,
            preferences,
            config,
            preview: None,
            preview_revision: 0,
        };
        log::info!("Starting in {:?}", state.phase());
        state.refresh_preview(frames);
        Ok(state)
    }

    pub fn phase(&self) -> Phase {
        if self.entries.is_empty() {
            Phase::Idle
        } else {
            Phase::Viewing(self.selection.index())
        }
    }

    pub fn current(&self) -> Option<&VideoEntry> {
        self.entries.get(self.selection.index())
    }

    pub fn dispatch(&mut self, action: UserAction, prompter: &dyn Prompter, frames: &dyn FrameSource) {
        log::debug!("Handling {:?} in {:?}", action, self.phase());
        match action {
            UserAction::ImportVideo => self.import(prompter, frames),
            UserAction::Previous => {
                if self.selection.previous(self.entries.len()) {
                    self.selection_changed(prompter, frames);
                }
            }
            UserAction::Next => {
                if self.selection.next(self.entries.len()) {
                    self.selection_changed(prompter, frames);
                }
            }
            UserAction::Apply => self.apply(prompter),
        }
    }

    fn import(&mut self, prompter: &dyn Prompter, frames: &dyn FrameSource) {
        let Some(source) = prompter.pick_video() else {
            log::debug!("Video selection cancelled");
            return;
        };

        match import_video(&source, &self.config.library_directory) {
            Ok(entry) => {
                self.entries.push(entry);
                self.selection.select_last(self.entries.len());
                self.selection_changed(prompter, frames);
            }
            Err(e) => report(prompter, &e),
        }
    }

    fn selection_changed(&mut self, prompter: &dyn Prompter, frames: &dyn FrameSource) {
        self.refresh_preview(frames);
        self.save_selection(prompter);
    }

    fn save_selection(&self, prompter: &dyn Prompter) {
        let Some(entry) = self.current() else {
            return;
        };
        if let Err(e) = self.preferences.save_selection(self.selection.index(), entry) {
            log::error!("{}", e);
            prompter.show_error(&format!("An error occurred while saving last selected video: {}", e));
        }
    }

    /// Replaces the preview with the current entry's first frame; on any
    /// decode failure the previous preview stays.
    pub fn refresh_preview(&mut self, frames: &dyn FrameSource) {
        let Some(path) = self.current().map(|entry| entry.path.clone()) else {
            return;
        };

        match frames.first_frame(&path) {
            Ok(Some(frame)) => {
                self.preview = Some(make_preview(
                    frame,
                    self.config.preview_max_width,
                    self.config.preview_max_height,
                ));
                self.preview_revision += 1;
            }
            Ok(None) => log::warn!("No frame decoded from {}", path.display()),
            Err(e) => log::warn!("Failed to decode {}: {}", path.display(), e),
        }
    }

    fn apply(&self, prompter: &dyn Prompter) {
        let Some(entry) = self.current() else {
            log::info!("Nothing to apply, the library is empty");
            return;
        };

        let target = match self.target_layout.resolve(&self.preferences, prompter) {
            Ok(Some(target)) => target,
            Ok(None) => return,
            Err(e) => return report(prompter, &e),
        };

        match deploy(&entry.path, &target) {
            Ok(result) => {
                log::info!("Applied {} to {} files", entry.display_name(), result.replaced.len());
                prompter.show_info("Changes applied successfully.");
            }
            Err(e) => report(prompter, &e),
        }
    }
}

fn report(prompter: &dyn Prompter, error: &SwapError) {
    log::error!("{}", error);
    prompter.show_error(&error.to_string());
}
