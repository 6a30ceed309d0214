//! Application lifecycle - startup, rendering and autosave.

use super::ProposalApp;
use crate::render::build_preview;
use crate::types::Draft;
use std::time::Instant;

impl ProposalApp {
    /// Restore the stored draft over the default blocks and render.
    pub(super) fn start(&mut self) {
        let stored = self.drafts.load_draft();

        if !stored.customer_name.is_empty() {
            self.draft.customer_name = stored.customer_name;
        }
        if stored.meeting_date_time.is_some() {
            self.draft.meeting_date_time = stored.meeting_date_time;
        }
        if !stored.requirements.is_empty() {
            self.draft.requirements = stored.requirements;
        }
        if !stored.properties.is_empty() {
            let mut blocks = stored.properties;
            blocks.truncate(self.settings.max_property_count);
            self.draft.properties = blocks;
        }

        self.render();
        tracing::info!(
            "{} v{} ready with {} property blocks",
            self.settings.title,
            self.settings.version,
            self.draft.properties.len()
        );
    }

    /// Rebuild the preview from the draft and replace the surface content
    pub fn render(&mut self) {
        self.preview = build_preview(&self.draft);
        self.surface.replace(&self.preview);
    }

    /// Persist the draft if autosave is on. Returns whether it was written.
    ///
    /// Nothing is written between a reset and the next edit, so a cleared
    /// store stays empty across a restart.
    pub fn autosave(&mut self) -> bool {
        if !self.settings.storage.auto_save || self.storage_cleared {
            return false;
        }
        match self.drafts.save_draft(&self.draft) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Autosave failed: {}", e);
                false
            }
        }
    }

    /// Advance the autosave clock; saves when the interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.autosave.is_due(now) {
            return false;
        }
        self.autosave.mark(now);
        tracing::debug!("Periodic autosave");
        self.autosave()
    }

    /// Final save before the session ends
    pub fn unload(&mut self) {
        if self.autosave() {
            tracing::debug!("Draft saved on unload");
        }
    }

    /// Swap in a whole new draft (loaded or opened), then render and save
    pub(super) fn replace_draft(&mut self, mut draft: Draft) {
        draft.properties.truncate(self.settings.max_property_count);
        if draft.properties.is_empty() {
            draft.properties = vec![String::new(); self.settings.default_property_count];
        }
        self.draft = draft;
        self.on_draft_changed();
    }

    pub(super) fn on_draft_changed(&mut self) {
        self.storage_cleared = false;
        self.render();
        self.autosave();
    }
}
