//! The batch import routine.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use serde::Serialize;

use crate::ImportError;
use crate::naming::{NameCounter, base_name};
use crate::options::{ImportOptions, JpegPolicy};
use crate::source::{SourceFormat, SourceImage, scan_source_dir};
use crate::transcode::{decode, encode_jpeg, resample};

/// A source image paired with the file name it will get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedImport {
    pub source: SourceImage,
    pub file_name: String,
}

/// Names for every image of a source folder, in import order.
#[derive(Debug, Default)]
pub struct ImportPlan {
    pub items: Vec<PlannedImport>,
    pub skipped: usize,
}

/// One written destination file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub format: SourceFormat,
    /// False when the source bytes were copied verbatim.
    pub transcoded: bool,
}

/// Outcome of a successful import run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub imported: Vec<ImportedFile>,
    pub skipped: usize,
}

/// Assigns destination names to the images of `source_dir` without writing
/// anything.
pub fn plan(source_dir: &Path, options: &ImportOptions) -> Result<ImportPlan, ImportError> {
    let scan = scan_source_dir(source_dir)?;

    let mut counter = NameCounter::new();
    let items = scan
        .images
        .into_iter()
        .map(|source| {
            let base = base_name(source.modified, options.time_zone);
            let file_name = counter.next(&base);
            PlannedImport { source, file_name }
        })
        .collect();

    Ok(ImportPlan {
        items,
        skipped: scan.skipped,
    })
}

/// Imports every image of `source_dir` into `dest_dir`.
///
/// `dest_dir` must already exist. The first failure aborts the run; files
/// written before it are left in place.
pub fn import(
    source_dir: &Path,
    dest_dir: &Path,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError> {
    let plan = plan(source_dir, options)?;

    tracing::info!(
        source = %source_dir.display(),
        destination = %dest_dir.display(),
        images = plan.items.len(),
        skipped = plan.skipped,
        "importing screenshots"
    );

    if !options.overwrite {
        if let Some(existing) = plan
            .items
            .iter()
            .map(|item| dest_dir.join(&item.file_name))
            .find(|path| path.exists())
        {
            return Err(ImportError::DestinationExists(existing));
        }
    }

    let mut report = ImportReport {
        source_dir: source_dir.to_path_buf(),
        destination_dir: dest_dir.to_path_buf(),
        imported: Vec::with_capacity(plan.items.len()),
        skipped: plan.skipped,
    };

    for item in plan.items {
        let destination = dest_dir.join(&item.file_name);
        let imported = import_one(&item.source, destination, options)?;
        report.imported.push(imported);
    }

    tracing::info!(imported = report.imported.len(), "import finished");
    Ok(report)
}

fn import_one(
    source: &SourceImage,
    destination: PathBuf,
    options: &ImportOptions,
) -> Result<ImportedFile, ImportError> {
    let (bytes, transcoded) = match (source.format, options.jpeg_policy) {
        (SourceFormat::Jpeg, JpegPolicy::Copy) => {
            let bytes = fs::read(&source.path).map_err(|e| ImportError::FileRead {
                path: source.path.clone(),
                source: e,
            })?;
            // Only real JPEG content may be copied; anything else goes through
            // the decoder so mislabeled files are converted and broken ones fail.
            if matches!(image::guess_format(&bytes), Ok(ImageFormat::Jpeg)) {
                (bytes, false)
            } else {
                tracing::debug!(path = %source.path.display(), "not JPEG content, transcoding");
                (transcode(source, &destination, options)?, true)
            }
        }
        _ => (transcode(source, &destination, options)?, true),
    };

    fs::write(&destination, &bytes).map_err(|e| ImportError::FileWrite {
        path: destination.clone(),
        source: e,
    })?;

    tracing::debug!(
        source = %source.path.display(),
        destination = %destination.display(),
        bytes = bytes.len(),
        transcoded,
        "screenshot written"
    );

    Ok(ImportedFile {
        source: source.path.clone(),
        destination,
        format: source.format,
        transcoded,
    })
}

fn transcode(
    source: &SourceImage,
    destination: &Path,
    options: &ImportOptions,
) -> Result<Vec<u8>, ImportError> {
    let image = resample(decode(&source.path, source.format)?, options.resize);
    encode_jpeg(&image, options.quality).map_err(|e| ImportError::Encode {
        path: destination.to_path_buf(),
        source: e,
    })
}
