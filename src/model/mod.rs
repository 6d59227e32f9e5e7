//! Data models for prlog
//!
//! Values flowing from parsed commit subjects to rendered changelog lines.

mod entry;

pub use entry::{ChangeRequestRef, ChangelogEntry};
