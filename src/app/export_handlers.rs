//! Export handlers - turning the preview into a downloaded image.

use super::{AppResult, ExportOptions, ProposalApp};
use crate::constants::{EXPORT_FAILED_MESSAGE, PDF_NOT_READY_MESSAGE};
use crate::export::{ExportOutcome, ExportRequest, export_preview};
use crate::notifications::Notice;
use chrono::Utc;

impl ProposalApp {
    /// Options preselected in the download dialog
    pub fn default_export_options(&self) -> ExportOptions {
        ExportOptions::new(self.settings.download.format)
    }

    pub fn export_request(&self, options: ExportOptions) -> ExportRequest {
        ExportRequest {
            format: options.format,
            include_contact: options.include_contact,
            customer_name: self.draft.customer_name.trim().to_string(),
            filename_prefix: self.settings.download.filename.clone(),
            quality: self.settings.download.quality,
            scale: self.settings.export.scale,
            page_title: self.settings.title.clone(),
            date: Utc::now().date_naive(),
        }
    }

    /// Export the current preview.
    ///
    /// Always tells the user how it went. The preview is re-rendered first
    /// so the image matches the draft, and its contact visibility is the
    /// same afterwards whatever the outcome.
    pub fn export(&mut self, options: ExportOptions) -> AppResult<ExportOutcome> {
        self.render();
        let request = self.export_request(options);

        let outcome = match export_preview(
            &mut self.preview,
            &request,
            &*self.rasterizer,
            &*self.sink,
        ) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Export to {} failed: {}", request.filename(), e);
                self.notices.push(Notice::error(EXPORT_FAILED_MESSAGE).blocking());
                return Err(e.into());
            }
        };

        match &outcome {
            ExportOutcome::NotReady(format) => {
                tracing::info!("{} export requested but not available", format);
                self.notices.push(Notice::info(PDF_NOT_READY_MESSAGE).blocking());
            }
            ExportOutcome::Delivered {
                path,
                filename,
                bytes,
            } => {
                self.notices.push(Notice::success(format!(
                    "{} 다운로드 완료: {}",
                    request.format,
                    path.display()
                )));
                if self.settings.remote_enabled() {
                    self.upload_export(bytes, filename);
                }
            }
        }
        Ok(outcome)
    }

    fn upload_export(&self, bytes: &[u8], filename: &str) {
        match self.backend.upload(bytes, filename) {
            Ok(Some(location)) => tracing::info!("Uploaded {} to {}", filename, location),
            Ok(None) => tracing::debug!("Backend {} keeps no uploads", self.backend.name()),
            Err(e) => tracing::warn!("Upload of {} failed: {}", filename, e),
        }
    }
}
