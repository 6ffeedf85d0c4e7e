//! Diff capability: decide whether two screenshots differ and, if so, produce
//! an image highlighting the difference.

use std::io::Cursor;
use std::path::PathBuf;
use std::process::Command;

use image::{ImageFormat, ImageReader, Rgba, RgbaImage};
use thiserror::Error;

use crate::config::{DiffEngine, VisualConfig};

const HIGHLIGHT: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Result of comparing a baseline with a current capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    pub different: bool,
    /// PNG highlighting the difference; only present when `different`.
    pub diff_image: Option<Vec<u8>>,
}

impl DiffOutcome {
    #[must_use]
    pub const fn same() -> Self {
        Self {
            different: false,
            diff_image: None,
        }
    }
}

/// The differ itself failed, as opposed to finding a difference.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("cannot decode {which} image: {source}")]
    Decode {
        which: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot encode diff image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("comparison tool '{0}' not found in PATH")]
    ToolNotFound(String),

    #[error("comparison tool exited with status {exit_code}: {stderr}")]
    ToolFailed { exit_code: i32, stderr: String },

    #[error("comparison I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ImageDiffer: Sync {
    /// Compare two PNG images.
    ///
    /// # Errors
    /// Returns an error when the comparison could not be performed.
    fn compare(&self, baseline: &[u8], current: &[u8]) -> Result<DiffOutcome, DiffError>;
}

/// Select the differ named by configuration.
#[must_use]
pub fn differ_for(config: &VisualConfig) -> Box<dyn ImageDiffer> {
    match config.diff_engine {
        DiffEngine::Pixel => Box::new(PixelDiffer::new(config.pixel_tolerance)),
        DiffEngine::ImageMagick => Box::new(MagickDiffer::new()),
    }
}

// ============================================================================
// Pixel differ
// ============================================================================

/// In-process RGBA comparison.
///
/// Images of different sizes always differ; the diff canvas covers both, with
/// non-overlapping areas highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelDiffer {
    tolerance: u64,
}

impl PixelDiffer {
    /// `tolerance` is the number of differing pixels accepted as "same".
    #[must_use]
    pub const fn new(tolerance: u64) -> Self {
        Self { tolerance }
    }
}

impl ImageDiffer for PixelDiffer {
    fn compare(&self, baseline: &[u8], current: &[u8]) -> Result<DiffOutcome, DiffError> {
        let a = decode(baseline, "baseline")?;
        let b = decode(current, "current")?;
        let same_size = a.dimensions() == b.dimensions();

        let width = a.width().max(b.width());
        let height = a.height().max(b.height());
        let mut canvas = RgbaImage::new(width, height);
        let mut differing = 0u64;

        for (x, y, out) in canvas.enumerate_pixels_mut() {
            let pa = a.get_pixel_checked(x, y);
            let pb = b.get_pixel_checked(x, y);
            match (pa, pb) {
                (Some(pa), Some(pb)) if pa == pb => *out = faded(*pa),
                _ => {
                    differing += 1;
                    *out = HIGHLIGHT;
                }
            }
        }

        if same_size && differing <= self.tolerance {
            return Ok(DiffOutcome::same());
        }
        tracing::debug!(differing, tolerance = self.tolerance, same_size, "images differ");

        let mut png = Cursor::new(Vec::new());
        canvas
            .write_to(&mut png, ImageFormat::Png)
            .map_err(DiffError::Encode)?;
        Ok(DiffOutcome {
            different: true,
            diff_image: Some(png.into_inner()),
        })
    }
}

fn decode(bytes: &[u8], which: &'static str) -> Result<RgbaImage, DiffError> {
    image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map(|img| img.to_rgba8())
        .map_err(|source| DiffError::Decode { which, source })
}

/// Width and height from the PNG header, without decoding pixels.
fn dimensions(bytes: &[u8], which: &'static str) -> Result<(u32, u32), DiffError> {
    ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png)
        .into_dimensions()
        .map_err(|source| DiffError::Decode { which, source })
}

/// Light grey rendition of an unchanged pixel.
fn faded(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = pixel.0;
    let luma = (u16::from(r) * 3 + u16::from(g) * 6 + u16::from(b)) / 10;
    // Map 0..=255 onto 170..=255.
    let grey = u8::try_from(170 + luma / 3).unwrap_or(u8::MAX);
    Rgba([grey, grey, grey, 255])
}

// ============================================================================
// ImageMagick differ
// ============================================================================

/// Shells out to ImageMagick `compare -metric AE`.
///
/// Exit status 0 means identical, 1 means different; anything else means the
/// tool itself failed. `compare` refuses images of different sizes, so those are
/// settled in-process before the tool runs.
#[derive(Debug, Clone)]
pub struct MagickDiffer {
    program: String,
}

impl Default for MagickDiffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MagickDiffer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("compare")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn resolve(&self) -> Result<PathBuf, DiffError> {
        which::which(&self.program).map_err(|_| DiffError::ToolNotFound(self.program.clone()))
    }
}

impl ImageDiffer for MagickDiffer {
    fn compare(&self, baseline: &[u8], current: &[u8]) -> Result<DiffOutcome, DiffError> {
        let baseline_size = dimensions(baseline, "baseline")?;
        let current_size = dimensions(current, "current")?;
        if baseline_size != current_size {
            tracing::debug!(?baseline_size, ?current_size, "image sizes differ");
            return PixelDiffer::default().compare(baseline, current);
        }

        let program = self.resolve()?;
        let dir = tempfile::Builder::new()
            .prefix("css-guard-diff-")
            .tempdir()?;
        let a = dir.path().join("baseline.png");
        let b = dir.path().join("current.png");
        let out = dir.path().join("diff.png");
        std::fs::write(&a, baseline)?;
        std::fs::write(&b, current)?;

        let output = Command::new(program)
            .arg("-metric")
            .arg("AE")
            .arg(&a)
            .arg(&b)
            .arg(&out)
            .output()?;

        match output.status.code() {
            Some(0) => Ok(DiffOutcome::same()),
            Some(1) => Ok(DiffOutcome {
                different: true,
                diff_image: std::fs::read(&out).ok(),
            }),
            code => Err(DiffError::ToolFailed {
                exit_code: code.unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
