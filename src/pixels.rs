//! Image boundary: RGB pixels in, RGB pixels out.
//!
//! Pixels are read as `u8` channels and widened to `f32` points in row-major scan
//! order. Writing rounds and clamps each channel back to `0..=255`; non-finite values
//! are rejected.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::cluster::{Kmeans, KmeansFit};
use crate::error::{Error, Result};

/// Number of color channels per point.
pub const CHANNELS: usize = 3;

/// A decoded image as a flat point list.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// One `[r, g, b]` point per pixel, row-major.
    pub points: Vec<Vec<f32>>,
}

impl PixelImage {
    /// Decode the image at `path` into RGB points.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| image_error(path, source))?
            .to_rgb8();
        Ok(Self::from_rgb(&img))
    }

    /// Convert an in-memory RGB buffer.
    pub fn from_rgb(img: &RgbImage) -> Self {
        let points = img
            .pixels()
            .map(|Rgb(px)| px.iter().map(|&c| c as f32).collect())
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            points,
        }
    }

    /// Rebuild an RGB buffer of this image's size from `points`.
    ///
    /// Only the first three features of each point are used.
    pub fn to_rgb(&self, points: &[Vec<f32>]) -> Result<RgbImage> {
        let expected = self.width as usize * self.height as usize;
        if expected == 0 {
            return Err(Error::InvalidParameter {
                name: "dimensions",
                message: "image must have non-zero width and height",
            });
        }
        if points.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: points.len(),
            });
        }

        let mut raw = Vec::with_capacity(expected * CHANNELS);
        for (index, p) in points.iter().enumerate() {
            if p.len() < CHANNELS {
                return Err(Error::DimensionMismatch {
                    expected: CHANNELS,
                    found: p.len(),
                });
            }
            for &v in &p[..CHANNELS] {
                raw.push(to_channel(v).ok_or(Error::NonFiniteValue { index })?);
            }
        }

        ImageBuffer::from_raw(self.width, self.height, raw).ok_or(Error::InvalidParameter {
            name: "points",
            message: "buffer does not match image dimensions",
        })
    }

    /// Encode `points` at this image's size to `path`. Format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>, points: &[Vec<f32>]) -> Result<()> {
        let path = path.as_ref();
        let img = self.to_rgb(points)?;
        img.save(path).map_err(|source| image_error(path, source))
    }
}

/// Load, cluster, and write the centroid-quantized image.
pub fn quantize_image(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    kmeans: &Kmeans,
) -> Result<KmeansFit> {
    let img = PixelImage::open(input)?;
    let fit = kmeans.fit(&img.points)?;
    img.save(output, &fit.quantized())?;
    Ok(fit)
}

fn to_channel(v: f32) -> Option<u8> {
    if !v.is_finite() {
        return None;
    }
    Some(v.round().clamp(0.0, 255.0) as u8)
}

fn image_error(path: &Path, source: image::ImageError) -> Error {
    match source {
        image::ImageError::IoError(source) => Error::Io {
            path: path.to_path_buf(),
            source,
        },
        source => Error::Image {
            path: path.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> RgbImage {
        ImageBuffer::from_fn(2, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([250, 10, 10])
            } else {
                Rgb([5, 5, 240])
            }
        })
    }

    #[test]
    fn test_from_rgb_scan_order() {
        let img = PixelImage::from_rgb(&checker());
        assert_eq!(img.width, 2);
        assert_eq!(img.height, 2);
        assert_eq!(img.points[0], vec![250.0, 10.0, 10.0]);
        assert_eq!(img.points[1], vec![5.0, 5.0, 240.0]);
        assert_eq!(img.points[2], vec![5.0, 5.0, 240.0]);
    }

    #[test]
    fn test_to_channel_clamps_and_rounds() {
        assert_eq!(to_channel(-3.0), Some(0));
        assert_eq!(to_channel(300.0), Some(255));
        assert_eq!(to_channel(127.6), Some(128));
        assert_eq!(to_channel(f32::NAN), None);
        assert_eq!(to_channel(f32::INFINITY), None);
    }

    #[test]
    fn test_to_rgb_rejects_wrong_length() {
        let img = PixelImage::from_rgb(&checker());
        assert!(matches!(
            img.to_rgb(&img.points[..3]),
            Err(Error::DimensionMismatch {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_to_rgb_rejects_nan() {
        let img = PixelImage::from_rgb(&checker());
        let mut points = img.points.clone();
        points[2][1] = f32::NAN;
        assert!(matches!(
            img.to_rgb(&points),
            Err(Error::NonFiniteValue { index: 2 })
        ));
    }

    #[test]
    fn test_quantize_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        checker().save(&input).unwrap();

        let fit = quantize_image(&input, &output, &Kmeans::new(2).with_iter(3).with_seed(0))
            .unwrap();
        assert_eq!(fit.points.len(), 4);

        let written = PixelImage::open(&output).unwrap();
        assert_eq!(written.width, 2);
        assert_eq!(written.points[0], written.points[3]);
        assert_eq!(written.points[1], written.points[2]);
    }

    #[test]
    fn test_open_missing_file() {
        let err = PixelImage::open("/nonexistent/definitely/missing.png").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
