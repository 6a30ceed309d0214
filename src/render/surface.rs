//! Display surfaces for the preview.

use super::preview::PreviewDocument;
use std::path::PathBuf;

/// Something that displays the preview.
///
/// `replace` is called on every re-render and must drop whatever was shown
/// before; there is no incremental update.
pub trait PreviewSurface {
    fn replace(&mut self, doc: &PreviewDocument);
}

/// Surface that keeps the latest markup in memory and optionally mirrors it
/// to a standalone HTML page on disk (for a browser tab left open on it).
#[derive(Debug, Default)]
pub struct HtmlSurface {
    markup: String,
    page_title: String,
    mirror_path: Option<PathBuf>,
    renders: u64,
}

impl HtmlSurface {
    pub fn new(page_title: impl Into<String>) -> Self {
        Self {
            page_title: page_title.into(),
            ..Self::default()
        }
    }

    /// Also write every render to `path` as a full page
    pub fn with_mirror(mut self, path: impl Into<PathBuf>) -> Self {
        self.mirror_path = Some(path.into());
        self
    }

    /// Markup of the last render
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// How many times the content was replaced
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn mirror_path(&self) -> Option<&PathBuf> {
        self.mirror_path.as_ref()
    }
}

impl PreviewSurface for HtmlSurface {
    fn replace(&mut self, doc: &PreviewDocument) {
        self.markup = doc.to_html();
        self.renders += 1;

        if let Some(path) = &self.mirror_path {
            let page = doc.to_page(&self.page_title);
            if let Err(e) = std::fs::write(path, page) {
                tracing::warn!("Failed to mirror preview to {}: {}", path.display(), e);
            }
        }
    }
}
