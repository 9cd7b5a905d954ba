use std::path::{Path, PathBuf};
use crate::core::SwapError;

/// A video file in the local library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub path: PathBuf,
}

impl VideoEntry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

/// Lists video files in `directory`, creating it first if needed.
///
/// Entries come back in directory iteration order.
pub fn scan_library(directory: &Path, extensions: &[String]) -> Result<Vec<VideoEntry>, SwapError> {
    let library_error = |source| SwapError::Library {
        path: directory.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(directory).map_err(library_error)?;

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(library_error)? {
        let path = entry.map_err(library_error)?.path();
        if path.is_file() && has_extension(&path, extensions) {
            entries.push(VideoEntry::new(path));
        }
    }

    log::info!("Found {} videos in {}", entries.len(), directory.display());
    Ok(entries)
}

/// Copies `source` into the library directory under its own file name.
pub fn import_video(source: &Path, library_directory: &Path) -> Result<VideoEntry, SwapError> {
    let import_error = |source_err| SwapError::Import {
        path: source.to_path_buf(),
        source: source_err,
    };

    let file_name = source.file_name().ok_or_else(|| {
        import_error(std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"))
    })?;

    std::fs::create_dir_all(library_directory).map_err(import_error)?;
    let destination = library_directory.join(file_name);

    if is_same_file(source, &destination) {
        log::debug!("{} is already in the library", source.display());
    } else {
        log::info!("Importing video: {} -> {}", source.display(), destination.display());
        std::fs::copy(source, &destination).map_err(import_error)?;
    }

    Ok(VideoEntry::new(destination))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
