//! Library index: scanning, tag reading, the JSON cache and search.
//!
//! Everything here degrades to safe defaults instead of surfacing errors to
//! the UI. The `try_*` variants return the underlying error for callers that
//! want to log or test it.

mod cache;
mod display;
mod filter;
mod model;
mod scan;
mod source;
mod tags;

pub use display::{card_line, format_time};
pub use filter::filter_by_query;
pub use model::Track;
pub use source::{DiskLibrary, LibrarySource};
