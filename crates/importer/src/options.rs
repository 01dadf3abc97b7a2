use serde::{Deserialize, Serialize};

use crate::ImportError;
use crate::naming::TimeZonePolicy;

/// JPEG encoder quality, 1 (smallest) to 100 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct JpegQuality(u8);

impl JpegQuality {
    pub const MAX: JpegQuality = JpegQuality(100);

    pub fn new(quality: u8) -> Result<Self, ImportError> {
        if (1..=100).contains(&quality) {
            Ok(Self(quality))
        } else {
            Err(ImportError::InvalidQuality(quality))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for JpegQuality {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for JpegQuality {
    type Error = ImportError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JpegQuality> for u8 {
    fn from(q: JpegQuality) -> u8 {
        q.0
    }
}

/// What happens to sources that are already JPEG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JpegPolicy {
    /// Decode and encode again at the configured quality.
    #[default]
    Reencode,
    /// Write the source bytes unchanged.
    Copy,
}

/// Target size of the resample step; `0` keeps that dimension's ratio,
/// `0x0` keeps the original size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resize {
    pub width: u32,
    pub height: u32,
}

impl Resize {
    pub fn is_noop(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Knobs for a single import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    pub quality: JpegQuality,
    pub time_zone: TimeZonePolicy,
    pub jpeg_policy: JpegPolicy,
    /// Replace destination files left by an earlier run.
    pub overwrite: bool,
    pub resize: Resize,
}

impl Default for ImportOptions {
    /// Quality 100, local time, JPEG re-encoded, existing files overwritten,
    /// no resizing.
    fn default() -> Self {
        Self {
            quality: JpegQuality::default(),
            time_zone: TimeZonePolicy::default(),
            jpeg_policy: JpegPolicy::default(),
            overwrite: true,
            resize: Resize::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_bounds() {
        assert!(JpegQuality::new(0).is_err());
        assert_eq!(JpegQuality::new(1).unwrap().get(), 1);
        assert_eq!(JpegQuality::new(80).unwrap().get(), 80);
        assert_eq!(JpegQuality::new(100).unwrap().get(), 100);
        assert!(matches!(
            JpegQuality::new(101),
            Err(ImportError::InvalidQuality(101))
        ));
    }

    #[test]
    fn default_quality_is_max() {
        assert_eq!(JpegQuality::default().get(), 100);
    }

    #[test]
    fn default_matches_deserialized_empty() {
        let parsed: ImportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ImportOptions::default());
        assert!(parsed.overwrite);
        assert_eq!(parsed.jpeg_policy, JpegPolicy::Reencode);
        assert_eq!(parsed.time_zone, TimeZonePolicy::Local);
        assert!(parsed.resize.is_noop());
    }

    #[test]
    fn partial_options() {
        let parsed: ImportOptions = serde_json::from_str(
            r#"{"quality": 80, "jpeg_policy": "copy", "resize": {"width": 1280}}"#,
        )
        .unwrap();
        assert_eq!(parsed.quality.get(), 80);
        assert_eq!(parsed.jpeg_policy, JpegPolicy::Copy);
        assert_eq!(parsed.resize, Resize { width: 1280, height: 0 });
        assert!(parsed.overwrite);
    }

    #[test]
    fn rejects_out_of_range_quality() {
        assert!(serde_json::from_str::<ImportOptions>(r#"{"quality": 0}"#).is_err());
        assert!(serde_json::from_str::<ImportOptions>(r#"{"quality": 150}"#).is_err());
    }
}
