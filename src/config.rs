//! Settings for scanning, playback, UI and logging.
//!
//! `schema` holds the serde types with their defaults; `load` layers the
//! TOML file and `VESPER__*` environment variables on top of them.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;
