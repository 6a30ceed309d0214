//! Application state - the ProposalApp struct definition and its builder.

use super::types::{AutosaveTimer, ViewMode};
use crate::constants::AUTOSAVE_INTERVAL_SECS;
use crate::export::{CommandRasterizer, DirectorySink, DownloadSink, Rasterizer};
use crate::notifications::NoticeLog;
use crate::render::{HtmlSurface, PreviewDocument, PreviewSurface, build_preview};
use crate::settings::AppSettings;
use crate::storage::{
    DraftStore, ProposalBackend, SharedStore, StorageKeys, build_backend, open_local_store,
};
use crate::types::Draft;
use std::time::{Duration, Instant};

/// The proposal editor.
///
/// One explicit state object per session. Every mutation goes through a
/// `&mut self` method or [`ProposalApp::handle`].
pub struct ProposalApp {
    pub(super) settings: AppSettings,
    pub(super) draft: Draft,
    pub(super) mode: ViewMode,
    pub(super) preview: PreviewDocument,
    pub(super) surface: Box<dyn PreviewSurface>,
    pub(super) drafts: DraftStore<SharedStore>,
    pub(super) backend: Box<dyn ProposalBackend>,
    pub(super) rasterizer: Box<dyn Rasterizer>,
    pub(super) sink: Box<dyn DownloadSink>,
    pub(super) notices: NoticeLog,
    pub(super) autosave: AutosaveTimer,
    /// Set by a confirmed reset; holds off autosave until the next edit
    pub(super) storage_cleared: bool,
}

impl ProposalApp {
    pub fn builder(settings: AppSettings) -> ProposalAppBuilder {
        ProposalAppBuilder::new(settings)
    }

    // ==================== Accessors ====================

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The preview as last rendered
    pub fn preview(&self) -> &PreviewDocument {
        &self.preview
    }

    pub fn property_count(&self) -> usize {
        self.draft.properties.len()
    }

    pub fn can_add_property(&self) -> bool {
        self.draft.properties.len() < self.settings.max_property_count
    }

    pub fn drafts(&self) -> &DraftStore<SharedStore> {
        &self.drafts
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeLog {
        &mut self.notices
    }
}

/// Assembles a [`ProposalApp`]. Every collaborator not given explicitly is
/// derived from the settings.
pub struct ProposalAppBuilder {
    settings: AppSettings,
    store: Option<SharedStore>,
    surface: Option<Box<dyn PreviewSurface>>,
    backend: Option<Box<dyn ProposalBackend>>,
    rasterizer: Option<Box<dyn Rasterizer>>,
    sink: Option<Box<dyn DownloadSink>>,
    now: Option<Instant>,
}

impl ProposalAppBuilder {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings: settings.sanitized(),
            store: None,
            surface: None,
            backend: None,
            rasterizer: None,
            sink: None,
            now: None,
        }
    }

    pub fn store(mut self, store: SharedStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn surface(mut self, surface: impl PreviewSurface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    pub fn backend(mut self, backend: impl ProposalBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    pub fn rasterizer(mut self, rasterizer: impl Rasterizer + 'static) -> Self {
        self.rasterizer = Some(Box::new(rasterizer));
        self
    }

    pub fn sink(mut self, sink: impl DownloadSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Start the autosave clock at `now` instead of the current instant
    pub fn started_at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    /// Build the app and run the startup sequence
    pub fn build(self) -> ProposalApp {
        let settings = self.settings;
        let store = self.store.unwrap_or_else(|| open_local_store(&settings));
        let drafts = DraftStore::new(store, StorageKeys::from(&settings.storage));

        let backend = self
            .backend
            .unwrap_or_else(|| build_backend(&settings, drafts.clone()));
        let surface: Box<dyn PreviewSurface> = match self.surface {
            Some(surface) => surface,
            None => Box::new(HtmlSurface::new(settings.title.clone())),
        };
        let rasterizer: Box<dyn Rasterizer> = match self.rasterizer {
            Some(rasterizer) => rasterizer,
            None => Box::new(CommandRasterizer::new(&settings.export.rasterizer_program)),
        };
        let sink: Box<dyn DownloadSink> = match (self.sink, &settings.export.output_dir) {
            (Some(sink), _) => sink,
            (None, Some(dir)) => Box::new(DirectorySink::new(dir)),
            (None, None) => Box::new(DirectorySink::downloads()),
        };
        let autosave = AutosaveTimer::new(
            Duration::from_secs(AUTOSAVE_INTERVAL_SECS),
            self.now.unwrap_or_else(Instant::now),
        );

        let draft = Draft::with_blocks(settings.default_property_count);
        let preview = build_preview(&draft);

        let mut app = ProposalApp {
            settings,
            draft,
            mode: ViewMode::default(),
            preview,
            surface,
            drafts,
            backend,
            rasterizer,
            sink,
            notices: NoticeLog::new(),
            autosave,
            storage_cleared: false,
        };
        app.start();
        app
    }
}
