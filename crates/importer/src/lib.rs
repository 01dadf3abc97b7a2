//! Batch screenshot import.
//!
//! Copies every JPEG/PNG image of a source folder into a destination folder,
//! renamed `YYYYMMDDHHMMSS_<n>.jpg` after its modification time and
//! normalized to JPEG. Processing is synchronous and stops at the first
//! error; files written before the error are kept.

mod import;
mod naming;
mod options;
mod source;
mod transcode;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;

pub use import::{ImportPlan, ImportReport, ImportedFile, PlannedImport, import, plan};
pub use naming::{NameCounter, TimeZonePolicy, base_name};
pub use options::{ImportOptions, JpegPolicy, JpegQuality, Resize};
pub use source::{SourceFormat, SourceImage, SourceScan, scan_source_dir};
pub use transcode::{decode, encode_jpeg, resample};

/// Errors produced while importing screenshots.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("invalid JPEG quality {0}, expected 1-100")]
    InvalidQuality(u8),
}
