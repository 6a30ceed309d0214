//! Proposalboard - meeting proposal sheets for real-estate agents.
//!
//! An agent types the customer's details and a handful of free-text listings
//! (copied from a listing board), gets a formatted preview, and exports that
//! preview as an image to hand to the customer.
//!
//! Module layout:
//! - `parser` - splits one listing block into title, detail lines and contact
//! - `render` - builds the preview document and its markup
//! - `storage` - local key-value persistence and the optional remote backend
//! - `app` - the application controller and its event handling
//! - `export` - rasterization, encoding and delivery of the preview image
//! - `settings` - user configuration
//! - `notifications` - user-facing notices

pub mod app;
pub mod constants;
pub mod export;
pub mod notifications;
pub mod parser;
pub mod render;
pub mod settings;
pub mod storage;
pub mod types;
