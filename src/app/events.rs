//! UI events and their dispatch.

use super::{AppResult, ExportOptions, ProposalApp, ViewMode};
use chrono::NaiveDateTime;
use std::time::Instant;

/// Everything the user (or the clock) can do to the editor
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    CustomerNameChanged(String),
    MeetingDateChanged(Option<NaiveDateTime>),
    RequirementsChanged(String),
    PropertyChanged { index: usize, text: String },
    AddProperty,
    RemoveProperty(usize),
    SwitchMode(ViewMode),
    SaveProposal,
    LoadProposal(i64),
    DeleteProposal(i64),
    OpenRemote(String),
    Export(ExportOptions),
    /// `confirmed` is the answer to the reset prompt
    Reset { confirmed: bool },
    Tick(Instant),
    Unload,
}

impl ProposalApp {
    /// Apply one event. Events are handled to completion, one at a time.
    pub fn handle(&mut self, event: AppEvent) -> AppResult<()> {
        match event {
            AppEvent::CustomerNameChanged(name) => self.set_customer_name(name),
            AppEvent::MeetingDateChanged(value) => self.set_meeting_date_time(value),
            AppEvent::RequirementsChanged(text) => self.set_requirements(text),
            AppEvent::PropertyChanged { index, text } => self.set_property_text(index, text)?,
            AppEvent::AddProperty => {
                self.add_property()?;
            }
            AppEvent::RemoveProperty(index) => self.remove_property(index)?,
            AppEvent::SwitchMode(mode) => self.switch_mode(mode),
            AppEvent::SaveProposal => {
                self.save_proposal()?;
            }
            AppEvent::LoadProposal(id) => self.load_proposal(id)?,
            AppEvent::DeleteProposal(id) => self.delete_proposal(id)?,
            AppEvent::OpenRemote(id) => self.open_remote(&id)?,
            AppEvent::Export(options) => {
                self.export(options)?;
            }
            AppEvent::Reset { confirmed } => {
                self.reset(confirmed);
            }
            AppEvent::Tick(now) => {
                self.tick(now);
            }
            AppEvent::Unload => self.unload(),
        }
        Ok(())
    }
}
