//! Pixel Feature Extraction
//!
//! Downsamples an image to a fixed analysis size and reduces it to a
//! `ColorProfile`: the share of pixels falling into each of four disjoint
//! color buckets, plus a prefix brightness sample and the original aspect ratio.
//!
//! Bucket predicates are evaluated in order (green, red, yellow, blue) and a
//! pixel lands in at most one bucket, so the four ratios never sum above 1.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use serde::Serialize;

use crate::error::{IdentifyError, Result};

/// Side length of the square analysis image
pub const ANALYSIS_SIZE: u32 = 224;

/// Number of leading pixels used for the brightness estimate
pub const BRIGHTNESS_SAMPLE: usize = 1000;

/// Green bucket floor (chlorophyll)
pub const GREEN_FLOOR: u8 = 80;
/// Red bucket floor (flowers, autumn leaves)
pub const RED_FLOOR: u8 = 100;
/// Yellow bucket: red and green above this, blue below `YELLOW_BLUE_CEILING`
pub const YELLOW_FLOOR: u8 = 150;
pub const YELLOW_BLUE_CEILING: u8 = 100;
/// Blue bucket floor (rare in plants)
pub const BLUE_FLOOR: u8 = 80;

/// Color bucket a single pixel is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBucket {
    Green,
    Red,
    Yellow,
    Blue,
}

/// Assign a pixel to its bucket. First matching predicate wins.
pub fn classify_pixel(r: u8, g: u8, b: u8) -> Option<ColorBucket> {
    if g > r && g > b && g > GREEN_FLOOR {
        Some(ColorBucket::Green)
    } else if r > g && r > b && r > RED_FLOOR {
        Some(ColorBucket::Red)
    } else if r > YELLOW_FLOOR && g > YELLOW_FLOOR && b < YELLOW_BLUE_CEILING {
        Some(ColorBucket::Yellow)
    } else if b > r && b > g && b > BLUE_FLOOR {
        Some(ColorBucket::Blue)
    } else {
        None
    }
}

/// Per-image color statistics used as the sole classification feature
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ColorProfile {
    pub green_ratio: f64,
    pub red_ratio: f64,
    pub yellow_ratio: f64,
    pub blue_ratio: f64,
    /// Mean normalized luminance of the prefix sample, in [0, 1]
    pub brightness: f64,
    /// Width / height of the original (pre-downsample) image
    pub aspect_ratio: f64,
}

impl ColorProfile {
    /// Sum of the four bucket ratios (share of pixels that were counted at all)
    pub fn covered_ratio(&self) -> f64 {
        self.green_ratio + self.red_ratio + self.yellow_ratio + self.blue_ratio
    }

    /// Decode encoded image bytes (PNG, JPEG, GIF, WebP, ...) and profile them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Self::from_image(&image)
    }

    /// Read and profile an image file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Profile an already decoded image of any color mode.
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(IdentifyError::InvalidDimensions { width, height });
        }

        // to_rgb8 drops alpha and expands palettes / grayscale
        let rgb = image.to_rgb8();
        let analysis = image::imageops::resize(&rgb, ANALYSIS_SIZE, ANALYSIS_SIZE, FilterType::Triangle);

        let mut profile = profile_pixels(&analysis);
        profile.aspect_ratio = width as f64 / height as f64;

        tracing::debug!(
            "Color profile: green={:.3} red={:.3} yellow={:.3} blue={:.3} brightness={:.3} aspect={:.2}",
            profile.green_ratio,
            profile.red_ratio,
            profile.yellow_ratio,
            profile.blue_ratio,
            profile.brightness,
            profile.aspect_ratio
        );

        Ok(profile)
    }
}

/// Bucket counts and brightness over every pixel of `image`.
///
/// `aspect_ratio` is left at 1.0; callers with an original size overwrite it.
fn profile_pixels(image: &RgbImage) -> ColorProfile {
    let total = image.width() as usize * image.height() as usize;
    if total == 0 {
        return ColorProfile { aspect_ratio: 1.0, ..Default::default() };
    }

    let mut counts = [0usize; 4];
    let mut luminance_sum = 0u64;
    let mut sampled = 0usize;

    for (idx, Rgb([r, g, b])) in image.pixels().enumerate() {
        if let Some(bucket) = classify_pixel(*r, *g, *b) {
            counts[bucket as usize] += 1;
        }
        if idx < BRIGHTNESS_SAMPLE {
            luminance_sum += *r as u64 + *g as u64 + *b as u64;
            sampled += 1;
        }
    }

    let total = total as f64;
    ColorProfile {
        green_ratio: counts[ColorBucket::Green as usize] as f64 / total,
        red_ratio: counts[ColorBucket::Red as usize] as f64 / total,
        yellow_ratio: counts[ColorBucket::Yellow as usize] as f64 / total,
        blue_ratio: counts[ColorBucket::Blue as usize] as f64 / total,
        brightness: luminance_sum as f64 / (sampled as f64 * 3.0 * 255.0),
        aspect_ratio: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_classify_pixel_priority() {
        assert_eq!(classify_pixel(20, 200, 30), Some(ColorBucket::Green));
        assert_eq!(classify_pixel(220, 40, 40), Some(ColorBucket::Red));
        // Pure yellow with r == g fails both dominance tests, lands in yellow
        assert_eq!(classify_pixel(200, 200, 20), Some(ColorBucket::Yellow));
        assert_eq!(classify_pixel(30, 40, 180), Some(ColorBucket::Blue));
        // Orange-ish yellow is red-dominant and is counted as red first
        assert_eq!(classify_pixel(230, 180, 20), Some(ColorBucket::Red));
    }

    #[test]
    fn test_classify_pixel_floors() {
        // Dominant but too dark
        assert_eq!(classify_pixel(10, 80, 10), None);
        assert_eq!(classify_pixel(100, 10, 10), None);
        assert_eq!(classify_pixel(10, 10, 80), None);
        // Neutral tones
        assert_eq!(classify_pixel(255, 255, 255), None);
        assert_eq!(classify_pixel(0, 0, 0), None);
        assert_eq!(classify_pixel(128, 128, 128), None);
    }

    #[test]
    fn test_white_image_has_no_buckets() {
        let profile = ColorProfile::from_image(&solid(64, 64, [255, 255, 255])).unwrap();
        assert_eq!(profile.covered_ratio(), 0.0);
        assert_relative_eq!(profile.brightness, 1.0, epsilon = 1e-2);
        assert_relative_eq!(profile.aspect_ratio, 1.0);
    }

    #[test]
    fn test_green_image_profile() {
        let profile = ColorProfile::from_image(&solid(300, 150, [30, 160, 40])).unwrap();
        assert_relative_eq!(profile.green_ratio, 1.0, epsilon = 1e-9);
        assert_relative_eq!(profile.red_ratio, 0.0);
        assert_relative_eq!(profile.aspect_ratio, 2.0);
        assert_relative_eq!(profile.brightness, 230.0 / 765.0, epsilon = 1e-2);
    }

    #[test]
    fn test_split_image_ratios() {
        // Left half red, right half green at analysis size
        let mut img = RgbImage::new(ANALYSIS_SIZE, ANALYSIS_SIZE);
        for (x, _, px) in img.enumerate_pixels_mut() {
            *px = if x < ANALYSIS_SIZE / 2 { Rgb([220, 30, 30]) } else { Rgb([30, 200, 30]) };
        }
        let profile = profile_pixels(&img);
        assert_relative_eq!(profile.red_ratio, 0.5, epsilon = 1e-9);
        assert_relative_eq!(profile.green_ratio, 0.5, epsilon = 1e-9);
        assert_relative_eq!(profile.covered_ratio(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rgba_and_grayscale_are_normalized() {
        let rgba = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(10, 20, image::Rgba([30, 160, 40, 0])));
        let profile = ColorProfile::from_image(&rgba).unwrap();
        assert_relative_eq!(profile.green_ratio, 1.0, epsilon = 1e-9);
        assert_relative_eq!(profile.aspect_ratio, 0.5);

        let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(16, 16, image::Luma([200])));
        let profile = ColorProfile::from_image(&gray).unwrap();
        assert_eq!(profile.covered_ratio(), 0.0);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = ColorProfile::from_bytes(b"definitely not an image").unwrap_err();
        assert!(err.is_decode_failure());
    }

    #[test]
    fn test_missing_file_is_decode_class_failure() {
        let err = ColorProfile::from_path(Path::new("/nonexistent/leaf.png")).unwrap_err();
        assert!(matches!(err, IdentifyError::Io(_)));
        assert!(err.is_decode_failure());
    }
}
