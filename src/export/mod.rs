//! Image export of the preview.
//!
//! - `format` - export formats and the download file name
//! - `rasterizer` - the pixel-capture collaborator
//! - `encode` - PNG/JPEG encoding
//! - `sink` - where finished files go
//! - `pipeline` - the whole flow, with contact hiding undone on every path

mod encode;
mod error;
mod format;
mod pipeline;
mod rasterizer;
mod sink;

pub use encode::*;
pub use error::*;
pub use format::*;
pub use pipeline::*;
pub use rasterizer::*;
pub use sink::*;
