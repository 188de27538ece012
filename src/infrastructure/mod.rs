//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently just path handling: where the trace file lives and how `~` in
//! configured paths is resolved.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
