//! Proposal management - named saves, loading, deletion, remote open, reset.

use super::{AppError, AppResult, ProposalApp, ValidationError};
use crate::constants::RESET_DONE_MESSAGE;
use crate::notifications::Notice;
use crate::types::{Draft, SavedProposal};
use chrono::{Local, Utc};

/// Display format of `SavedProposal::saved_at`
const SAVED_AT_FORMAT: &str = "%Y. %m. %d. %H:%M";

impl ProposalApp {
    /// Newest first
    pub fn saved_proposals(&self) -> Vec<SavedProposal> {
        self.drafts.saved_proposals()
    }

    /// Store the current draft under a new id; returns the id.
    ///
    /// The customer name is required. The draft is also handed to the
    /// backend, whose failures are only logged.
    pub fn save_proposal(&mut self) -> AppResult<i64> {
        let name = self.draft.customer_name.trim().to_string();
        if name.is_empty() {
            return Err(self.reject(ValidationError::MissingCustomerName));
        }

        let existing = self.drafts.saved_proposals();
        let id = next_proposal_id(Utc::now().timestamp_millis(), &existing);
        let saved_at = Local::now().format(SAVED_AT_FORMAT).to_string();
        let proposal = SavedProposal::from_draft(id, &self.draft, saved_at);

        if let Err(e) = self.drafts.save_proposal(proposal) {
            tracing::error!("Failed to save proposal for {}: {}", name, e);
            self.notices
                .push(Notice::error("제안서를 저장하지 못했습니다. 저장 공간을 확인해 주세요."));
            return Err(e.into());
        }

        if self.settings.remote_enabled() {
            match self.backend.save(&self.draft) {
                Ok(remote_id) => {
                    tracing::debug!("Backend {} stored draft as {}", self.backend.name(), remote_id)
                }
                Err(e) => tracing::warn!("Backend {} save failed: {}", self.backend.name(), e),
            }
        }

        tracing::info!("Saved proposal {} for {}", id, name);
        self.notices
            .push(Notice::success(format!("'{}' 제안서가 저장되었습니다.", name)));
        Ok(id)
    }

    /// Replace the draft with a saved proposal
    pub fn load_proposal(&mut self, id: i64) -> AppResult<()> {
        let Some(proposal) = self.drafts.find_proposal(id) else {
            return Err(self.not_found(id.to_string()));
        };

        self.replace_draft(proposal.to_draft());
        self.notices.push(Notice::info(format!(
            "'{}' 제안서를 불러왔습니다. ({})",
            proposal.customer_name, proposal.saved_at
        )));
        Ok(())
    }

    pub fn delete_proposal(&mut self, id: i64) -> AppResult<()> {
        if !self.drafts.delete_proposal(id)? {
            return Err(self.not_found(id.to_string()));
        }
        tracing::info!("Deleted proposal {}", id);
        self.notices.push(Notice::success("제안서가 삭제되었습니다."));
        Ok(())
    }

    /// Replace the draft with one fetched through the backend
    pub fn open_remote(&mut self, id: &str) -> AppResult<()> {
        match self.backend.load(id) {
            Ok(Some(draft)) => {
                tracing::info!("Opened {} from {}", id, self.backend.name());
                self.replace_draft(draft);
                Ok(())
            }
            Ok(None) => Err(self.not_found(id.to_string())),
            Err(e) => {
                tracing::warn!("Backend {} load of {} failed: {}", self.backend.name(), id, e);
                self.notices
                    .push(Notice::error("제안서를 불러오지 못했습니다. 잠시 후 다시 시도해 주세요."));
                Err(e.into())
            }
        }
    }

    /// Clear everything, stored data included. Does nothing unless
    /// `confirmed`; returns whether the reset happened.
    pub fn reset(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }

        self.draft = Draft::with_blocks(self.settings.default_property_count);
        if let Err(e) = self.drafts.clear_all() {
            tracing::warn!("Failed to clear stored data: {}", e);
        }
        self.storage_cleared = true;
        self.render();

        tracing::info!("All fields reset");
        self.notices.push(Notice::success(RESET_DONE_MESSAGE));
        true
    }

    fn not_found(&mut self, id: String) -> AppError {
        self.notices
            .push(Notice::warning(format!("제안서를 찾을 수 없습니다: {}", id)));
        AppError::NotFound(id)
    }
}

/// Millisecond timestamp, bumped past the largest existing id when the
/// clock has not moved on (or went backwards)
fn next_proposal_id(now_ms: i64, existing: &[SavedProposal]) -> i64 {
    match existing.iter().map(|p| p.id).max() {
        Some(max) if max >= now_ms => max + 1,
        _ => now_ms,
    }
}
