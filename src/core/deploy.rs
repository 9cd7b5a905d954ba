use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use crate::core::SwapError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeployReport {
    pub replaced: Vec<PathBuf>,
}

/// Overwrites every `.mp4` file in `target_directory` with the bytes of `source`.
///
/// Stops at the first failed copy; files replaced before it stay replaced.
pub fn deploy(source: &Path, target_directory: &Path) -> Result<DeployReport, SwapError> {
    if !target_directory.is_dir() {
        return Err(SwapError::TargetMissing(target_directory.to_path_buf()));
    }
    if !source.is_file() {
        return Err(SwapError::SourceMissing(source.to_path_buf()));
    }

    let targets = list_targets(target_directory)?;
    log::info!(
        "Replacing {} files in {} with {}",
        targets.len(),
        target_directory.display(),
        source.display()
    );

    let mut report = DeployReport::default();
    for target in targets {
        std::fs::copy(source, &target).map_err(|e| {
            log::error!("Failed to replace {}: {}", target.display(), e);
            SwapError::Replace {
                target: target.clone(),
                source: e,
            }
        })?;
        log::debug!("Replaced {}", target.display());
        report.replaced.push(target);
    }

    Ok(report)
}

fn list_targets(target_directory: &Path) -> Result<Vec<PathBuf>, SwapError> {
    let listing_error = |source| SwapError::TargetListing {
        path: target_directory.to_path_buf(),
        source,
    };
    let mut targets = Vec::new();
    for entry in std::fs::read_dir(target_directory).map_err(listing_error)? {
        let path = entry.map_err(listing_error)?.path();
        // Exact, case-sensitive match keeps the overwrite as narrow as possible
        if path.is_file() && path.extension() == Some(OsStr::new("mp4")) {
            targets.push(path);
        }
    }
    Ok(targets)
}
