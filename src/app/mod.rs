//! Application module - the proposal editor state and its operations.
//!
//! This module is organized into several submodules:
//! - `types` - View mode, export options and the autosave timer
//! - `error` - Controller errors
//! - `state` - The ProposalApp struct and its builder
//! - `lifecycle` - Startup, rendering, autosave, tick and unload
//! - `draft_editing` - Field setters and property block management
//! - `proposal_management` - Saved proposals, remote open and reset
//! - `export_handlers` - Image export of the preview
//! - `events` - The event enum and its dispatcher

mod draft_editing;
mod error;
mod events;
mod export_handlers;
mod lifecycle;
mod proposal_management;
mod state;
mod types;

pub use error::*;
pub use events::AppEvent;
pub use state::{ProposalApp, ProposalAppBuilder};
pub use types::*;
