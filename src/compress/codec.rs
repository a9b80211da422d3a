//! Decode/encode adapter over the `image` crate
//!
//! The re-encode policy is fixed per format and deliberately not configurable:
//! JPEG is written lossy at [`JPEG_QUALITY`], PNG lossless at the codec's best
//! compression.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage, ImageReader, ImageResult};

use crate::scanner::ImageFormat;

/// Quality used for every JPEG re-encode
pub const JPEG_QUALITY: u8 = 75;

/// Decode the image at `path` into memory
///
/// The container is sniffed from the file contents, so a PNG saved with a
/// `.jpg` name still decodes.
pub fn decode(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Encode `image` into `writer` using the fixed policy for `format`
pub fn encode<W: Write>(image: &DynamicImage, format: ImageFormat, writer: W) -> ImageResult<()> {
    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
            jpeg_compatible(image).write_with_encoder(encoder)
        }
        ImageFormat::Png => {
            let encoder =
                PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
            image.write_with_encoder(encoder)
        }
    }
}

/// JPEG only carries 8-bit gray or RGB; alpha and extra bit depth are dropped
fn jpeg_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    fn sample(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 3) as u8, (y * 5) as u8, ((x + y) * 2) as u8, 200])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_png_encode_is_lossless() {
        let image = sample(40, 30);
        let mut bytes = Vec::new();

        encode(&image, ImageFormat::Png, &mut bytes).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn test_png_encode_is_deterministic() {
        let image = sample(64, 64);
        let mut first = Vec::new();
        let mut second = Vec::new();

        encode(&image, ImageFormat::Png, &mut first).unwrap();
        encode(&image, ImageFormat::Png, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_jpeg_encode_flattens_alpha() {
        let image = sample(32, 32);
        let mut bytes = Vec::new();

        encode(&image, ImageFormat::Jpeg, &mut bytes).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn test_jpeg_encode_keeps_grayscale() {
        let image = DynamicImage::ImageLuma16(image::ImageBuffer::from_fn(16, 16, |x, _| {
            image::Luma([(x * 4000) as u16])
        }));
        let mut bytes = Vec::new();

        encode(&image, ImageFormat::Jpeg, &mut bytes).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), ColorType::L8);
    }

    #[test]
    fn test_decode_sniffs_content_over_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("actually-png.jpg");
        let mut bytes = Vec::new();
        encode(&sample(8, 8), ImageFormat::Png, &mut bytes).unwrap();
        fs::write(&path, &bytes).unwrap();

        let decoded = decode(&path).unwrap();

        assert_eq!(decoded.dimensions(), (8, 8));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not an image").unwrap();

        assert!(decode(&path).is_err());
    }
}
