use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to the user as alerts. The `Display` text is the alert body.
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Failed to prepare video library {}: {source}", .path.display())]
    Library {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to import {} into the video library: {source}", .path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read preferences from {}: {source}", .path.display())]
    PreferencesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preferences file {} is malformed: {source}", .path.display())]
    PreferencesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write preferences to {}: {source}", .path.display())]
    PreferencesWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Target directory must contain '{vendor}' and '{product}' directories: {}", .path.display())]
    InvalidTargetShape {
        path: PathBuf,
        vendor: String,
        product: String,
    },

    #[error("Target directory not specified or does not exist: {}", .0.display())]
    TargetMissing(PathBuf),

    #[error("Selected video file does not exist: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Failed to list target directory {}: {source}", .path.display())]
    TargetListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {}: {source}", .target.display())]
    Replace {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
