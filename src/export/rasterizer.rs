//! Rasterization of the preview page.
//!
//! Pixel capture is delegated to an external collaborator. The crate ships
//! one that shells out to an HTML-to-image program; tests and embedders
//! provide their own.

use super::error::{ExportError, ExportResult};
use image::RgbaImage;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// Turns a complete HTML page into a bitmap
pub trait Rasterizer {
    /// Render `page_html` at `scale` times its CSS pixel size
    fn rasterize(&self, page_html: &str, scale: f32) -> ExportResult<RgbaImage>;
}

/// Rasterizer backed by a `wkhtmltoimage`-compatible command line program:
/// `<program> --quiet --encoding utf-8 --format png --zoom <scale> <in> <out>`
#[derive(Clone, Debug)]
pub struct CommandRasterizer {
    program: PathBuf,
    extra_args: Vec<String>,
}

impl CommandRasterizer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }

    /// Arguments inserted before the input/output paths
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

impl Rasterizer for CommandRasterizer {
    fn rasterize(&self, page_html: &str, scale: f32) -> ExportResult<RgbaImage> {
        let mut input = tempfile::Builder::new()
            .prefix("proposal-")
            .suffix(".html")
            .tempfile()?;
        input.write_all(page_html.as_bytes())?;
        input.flush()?;

        let output = tempfile::Builder::new()
            .prefix("proposal-")
            .suffix(".png")
            .tempfile()?;

        tracing::debug!("Running {} at zoom {}", self.program.display(), scale);
        let result = Command::new(&self.program)
            .args(["--quiet", "--encoding", "utf-8", "--format", "png", "--zoom"])
            .arg(format!("{:.2}", scale))
            .args(&self.extra_args)
            .arg(input.path())
            .arg(output.path())
            .output()
            .map_err(|e| {
                ExportError::Rasterize(format!("cannot run {}: {}", self.program.display(), e))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExportError::Rasterize(format!(
                "{} exited with {}: {}",
                self.program.display(),
                result.status,
                stderr.trim()
            )));
        }

        let bitmap = image::open(output.path())?.to_rgba8();
        if bitmap.width() == 0 || bitmap.height() == 0 {
            return Err(ExportError::EmptyImage);
        }
        Ok(bitmap)
    }
}
