//! Source folder enumeration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use image::ImageFormat;
use serde::Serialize;

use crate::ImportError;

/// Image formats accepted as import sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    /// Infers the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "png" => Some(SourceFormat::Png),
            _ => None,
        }
    }

    pub(crate) fn image_format(self) -> ImageFormat {
        match self {
            SourceFormat::Jpeg => ImageFormat::Jpeg,
            SourceFormat::Png => ImageFormat::Png,
        }
    }
}

/// An image file found in the source folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub path: PathBuf,
    pub name: String,
    pub modified: SystemTime,
    pub format: SourceFormat,
}

/// Result of scanning a source folder.
#[derive(Debug, Default)]
pub struct SourceScan {
    /// Images in import order: oldest first, ties by file name.
    pub images: Vec<SourceImage>,
    /// Entries ignored because they are not JPEG/PNG files.
    pub skipped: usize,
}

/// Lists the importable images of `dir` in chronological order.
pub fn scan_source_dir(dir: &Path) -> Result<SourceScan, ImportError> {
    let read_err = |source| ImportError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let entries = fs::read_dir(dir).map_err(read_err)?;

    let mut scan = SourceScan::default();
    for entry in entries {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();

        let Some(format) = SourceFormat::from_path(&path) else {
            tracing::debug!(path = %path.display(), "skipping non-image entry");
            scan.skipped += 1;
            continue;
        };

        // Follows symlinks so linked screenshots are imported too.
        let metadata = fs::metadata(&path).map_err(read_err)?;
        if !metadata.is_file() {
            tracing::warn!(path = %path.display(), "skipping non-file entry with image extension");
            scan.skipped += 1;
            continue;
        }

        scan.images.push(SourceImage {
            name: entry.file_name().to_string_lossy().into_owned(),
            modified: metadata.modified().map_err(read_err)?,
            path,
            format,
        });
    }

    scan.images
        .sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.name.cmp(&b.name)));

    Ok(scan)
}
