//! Draft editing - customer fields, property blocks and the view mode.

use super::{AppError, AppResult, ProposalApp, ValidationError, ViewMode};
use crate::notifications::Notice;
use chrono::NaiveDateTime;

impl ProposalApp {
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.draft.customer_name = name.into();
        self.on_draft_changed();
    }

    pub fn set_meeting_date_time(&mut self, value: Option<NaiveDateTime>) {
        self.draft.meeting_date_time = value;
        self.on_draft_changed();
    }

    pub fn set_requirements(&mut self, requirements: impl Into<String>) {
        self.draft.requirements = requirements.into();
        self.on_draft_changed();
    }

    /// Replace the raw text of the block at `index`
    pub fn set_property_text(&mut self, index: usize, text: impl Into<String>) -> AppResult<()> {
        if index >= self.draft.properties.len() {
            return Err(self.reject(ValidationError::NoSuchProperty(index)));
        }
        self.draft.properties[index] = text.into();
        self.on_draft_changed();
        Ok(())
    }

    /// Append an empty block; returns its index.
    ///
    /// Refused once `max_property_count` blocks exist.
    pub fn add_property(&mut self) -> AppResult<usize> {
        if !self.can_add_property() {
            let max = self.settings.max_property_count;
            return Err(self.reject(ValidationError::TooManyProperties { max }));
        }
        self.draft.properties.push(String::new());
        self.render();
        Ok(self.draft.properties.len() - 1)
    }

    pub fn remove_property(&mut self, index: usize) -> AppResult<()> {
        if index >= self.draft.properties.len() {
            return Err(self.reject(ValidationError::NoSuchProperty(index)));
        }
        self.draft.properties.remove(index);
        self.on_draft_changed();
        Ok(())
    }

    pub fn switch_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        if mode.is_preview() {
            self.render();
        }
    }

    /// Tell the user why an input was refused and hand back the error
    pub(super) fn reject(&mut self, error: ValidationError) -> AppError {
        tracing::debug!("Rejected: {}", error);
        self.notices.push(Notice::warning(error.to_string()).blocking());
        AppError::Validation(error)
    }
}
