use std::path::PathBuf;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use crate::core::Prompter;

/// Native pickers and message boxes. Every call blocks until the user answers.
pub struct NativePrompter {
    video_directory: Option<PathBuf>,
}

impl NativePrompter {
    pub fn new() -> Self {
        Self {
            video_directory: dirs::video_dir().or_else(dirs::home_dir),
        }
    }
}

impl Default for NativePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for NativePrompter {
    fn pick_video(&self) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Select Video")
            .add_filter("Video files", &["mp4"]);
        if let Some(ref dir) = self.video_directory {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }

    fn pick_target_directory(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Select Valorant Directory")
            .pick_folder()
    }

    fn show_error(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_info(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Success")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
