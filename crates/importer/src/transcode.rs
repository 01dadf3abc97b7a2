//! Image decoding, resampling and JPEG encoding.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader, ImageResult};

use crate::ImportError;
use crate::options::{JpegQuality, Resize};
use crate::source::SourceFormat;

/// Decodes the image at `path`.
///
/// The content is sniffed first, so a JPEG saved with a `.png` extension
/// still decodes; `format` is only the fallback when sniffing fails.
pub fn decode(path: &Path, format: SourceFormat) -> Result<DynamicImage, ImportError> {
    let read_err = |source| ImportError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut reader = ImageReader::new(BufReader::new(file));
    reader.set_format(format.image_format());
    let reader = reader.with_guessed_format().map_err(read_err)?;

    reader.decode().map_err(|source| ImportError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Resamples `image` to `size` with a Lanczos3 filter.
///
/// `0x0` returns the image untouched. A single zero dimension is derived
/// from the other one, preserving the aspect ratio.
pub fn resample(image: DynamicImage, size: Resize) -> DynamicImage {
    if size.is_noop() {
        return image;
    }

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image;
    }

    let (target_w, target_h) = match (size.width, size.height) {
        (0, h) => (scale(width, h, height), h),
        (w, 0) => (w, scale(height, w, width)),
        (w, h) => (w, h),
    };

    if (target_w, target_h) == (width, height) {
        return image;
    }

    image.resize_exact(target_w, target_h, FilterType::Lanczos3)
}

/// `value * numerator / denominator`, never below one pixel.
fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(numerator) / u64::from(denominator);
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}

/// Encodes `image` as baseline JPEG in memory.
///
/// JPEG carries no alpha channel, so the image is flattened to 8-bit RGB.
pub fn encode_jpeg(image: &DynamicImage, quality: JpegQuality) -> ImageResult<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality.get()).encode_image(&rgb)?;
    Ok(buf)
}
