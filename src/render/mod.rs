//! Preview rendering.
//!
//! Rendering is split in two halves:
//! - `preview` - pure data transform from a [`Draft`](crate::types::Draft)
//!   to a [`PreviewDocument`]
//! - `html` / `surface` - turning that document into markup and pushing it to
//!   whatever displays it
//!
//! The parser and the preview model never touch a display surface, so they
//! can be tested without any UI around them.

mod html;
mod preview;
mod surface;

pub use html::*;
pub use preview::*;
pub use surface::*;
