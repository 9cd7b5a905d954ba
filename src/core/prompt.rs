use std::path::PathBuf;

/// Blocking user interaction: native pickers and modal alerts.
///
/// A picker returns `None` when the user cancels it.
pub trait Prompter {
    fn pick_video(&self) -> Option<PathBuf>;
    fn pick_target_directory(&self) -> Option<PathBuf>;
    fn show_error(&self, message: &str);
    fn show_info(&self, message: &str);
}
