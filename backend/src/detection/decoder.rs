use std::io::Cursor;

use image::{ImageFormat, ImageReader, RgbImage};

use super::hsv::{Hsv, rgb_to_hsv};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("cannot identify image file")]
    UnknownFormat,
    #[error("failed to decode {format:?} image: {source}")]
    Image {
        format: ImageFormat,
        #[source]
        source: image::ImageError,
    },
    #[error("image has no pixels")]
    Empty,
}

/// A decoded image in HSV space, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    pixels: Vec<Hsv>,
}

impl HsvImage {
    /// Returns `None` unless both dimensions are non-zero and `pixels` fills the grid.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Hsv>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;
        if expected == 0 || pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn from_rgb(rgb: &RgbImage) -> Option<Self> {
        let pixels = rgb
            .pixels()
            .map(|p| rgb_to_hsv(p[0], p[1], p[2]))
            .collect();
        Self::from_pixels(rgb.width(), rgb.height(), pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[Hsv] {
        &self.pixels
    }
}

/// Sniffs the container format from the leading bytes.
pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat, DecodeError> {
    image::guess_format(bytes).map_err(|_| DecodeError::UnknownFormat)
}

pub fn decode(bytes: &[u8]) -> Result<HsvImage, DecodeError> {
    let format = detect_format(bytes)?;
    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(format);

    let rgb = reader
        .decode()
        .map_err(|source| DecodeError::Image { format, source })?
        .into_rgb8();

    log::debug!(
        "Decoded {:?} image of {}x{}",
        format,
        rgb.width(),
        rgb.height()
    );

    HsvImage::from_rgb(&rgb).ok_or(DecodeError::Empty)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, Rgba, RgbaImage};

    pub(crate) fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    pub(crate) fn solid_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb(color));
        encode(DynamicImage::ImageRgb8(img), ImageFormat::Png)
    }

    #[test]
    fn decodes_png_dimensions_and_colors() {
        let bytes = solid_png(4, 3, [255, 0, 0]);
        let img = decode(&bytes).unwrap();

        assert_eq!((img.width(), img.height()), (4, 3));
        assert_eq!(img.pixel_count(), 12);
        assert!(img.pixels().iter().all(|p| *p == Hsv::new(0, 255, 255)));
    }

    #[test]
    fn decodes_other_containers() {
        let img = RgbImage::from_pixel(2, 2, Rgb([0, 255, 0]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Bmp);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.pixel_count(), 4);
        assert_eq!(decoded.pixels()[0], Hsv::new(60, 255, 255));
    }

    #[test]
    fn alpha_is_dropped_not_composited() {
        let img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 255, 0]));
        let bytes = encode(DynamicImage::ImageRgba8(img), ImageFormat::Png);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.pixels()[0], Hsv::new(120, 255, 255));
    }

    #[test]
    fn grayscale_is_expanded() {
        let img = GrayImage::from_pixel(3, 2, Luma([200]));
        let bytes = encode(DynamicImage::ImageLuma8(img), ImageFormat::Png);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.pixel_count(), 6);
        assert!(decoded.pixels().iter().all(|p| *p == Hsv::new(0, 0, 200)));
    }

    #[test]
    fn sixteen_bit_channels_are_scaled() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_pixel(2, 2, Rgb([65535, 32896, 0]));
        let bytes = encode(DynamicImage::ImageRgb16(img), ImageFormat::Png);
        let decoded = decode(&bytes).unwrap();
        // (255, 128, 0) after scaling
        assert_eq!(decoded.pixels()[0], Hsv::new(15, 255, 255));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownFormat));
        assert!(matches!(decode(&[]), Err(DecodeError::UnknownFormat)));
    }

    #[test]
    fn rejects_truncated_image() {
        let bytes = solid_png(8, 8, [10, 20, 30]);
        let err = decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(
            matches!(err, DecodeError::Image { format: ImageFormat::Png, .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn empty_grids_are_refused() {
        assert!(HsvImage::from_pixels(0, 0, vec![]).is_none());
        assert!(HsvImage::from_pixels(3, 0, vec![]).is_none());
        assert!(HsvImage::from_pixels(2, 2, vec![Hsv::new(0, 0, 0); 3]).is_none());
        assert!(HsvImage::from_pixels(1, 1, vec![Hsv::new(0, 0, 0)]).is_some());
    }
}
