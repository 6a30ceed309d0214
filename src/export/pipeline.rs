//! The export pipeline: hide contacts, rasterize, encode, deliver.

use super::encode::encode_bitmap;
use super::error::ExportResult;
use super::format::{ExportFormat, export_filename};
use super::rasterizer::Rasterizer;
use super::sink::DownloadSink;
use crate::render::PreviewDocument;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Everything needed to export one preview
#[derive(Clone, Debug)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Keep the per-listing contact lines in the image
    pub include_contact: bool,
    pub customer_name: String,
    pub filename_prefix: String,
    /// JPEG quality, 0.1 ..= 1.0
    pub quality: f32,
    pub scale: f32,
    pub page_title: String,
    /// Date stamped into the file name
    pub date: NaiveDate,
}

impl ExportRequest {
    pub fn filename(&self) -> String {
        export_filename(&self.filename_prefix, &self.customer_name, self.date, self.format)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// File written to `path`
    Delivered {
        path: PathBuf,
        filename: String,
        bytes: Vec<u8>,
    },
    /// The format is not implemented yet
    NotReady(ExportFormat),
}

/// Temporarily hides contact lines of a preview.
///
/// The previous visibility of every entry is restored when the guard is
/// dropped, whether the export succeeded or not.
pub struct ContactVisibilityGuard<'a> {
    doc: &'a mut PreviewDocument,
    saved: Vec<bool>,
}

impl<'a> ContactVisibilityGuard<'a> {
    /// Hide all contact lines when `hide` is set; otherwise leave them be
    pub fn new(doc: &'a mut PreviewDocument, hide: bool) -> Self {
        let saved = doc.entries.iter().map(|e| e.contact_visible).collect();
        if hide {
            for entry in &mut doc.entries {
                entry.contact_visible = false;
            }
        }
        Self { doc, saved }
    }

    pub fn document(&self) -> &PreviewDocument {
        &*self.doc
    }
}

impl Drop for ContactVisibilityGuard<'_> {
    fn drop(&mut self) {
        for (entry, visible) in self.doc.entries.iter_mut().zip(&self.saved) {
            entry.contact_visible = *visible;
        }
    }
}

/// Export `doc` as described by `request`.
///
/// PDF is reported as [`ExportOutcome::NotReady`] without touching the
/// rasterizer. Any failure leaves `doc` exactly as it was.
pub fn export_preview(
    doc: &mut PreviewDocument,
    request: &ExportRequest,
    rasterizer: &dyn Rasterizer,
    sink: &dyn DownloadSink,
) -> ExportResult<ExportOutcome> {
    if !request.format.is_available() {
        return Ok(ExportOutcome::NotReady(request.format));
    }

    let bitmap = {
        let guard = ContactVisibilityGuard::new(doc, !request.include_contact);
        let page = guard.document().to_page(&request.page_title);
        rasterizer.rasterize(&page, request.scale)?
    };

    let Some(bytes) = encode_bitmap(&bitmap, request.format, request.quality)? else {
        return Ok(ExportOutcome::NotReady(request.format));
    };

    let filename = request.filename();
    let path = sink.deliver(&filename, &bytes)?;
    tracing::info!(
        "{} export complete: {} ({} bytes)",
        request.format,
        path.display(),
        bytes.len()
    );

    Ok(ExportOutcome::Delivered {
        path,
        filename,
        bytes,
    })
}
