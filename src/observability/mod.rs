//! OpenTelemetry-based tracing with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → ceyland-otlp.json
//! ```
//!
//! Spans land in `<data dir>/ceyland-otlp.json`, one JSON object per line.
//! The file rotates at 10 MiB and three backups are kept. The level comes
//! from the `trace_level` config key and defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - `exporter`: span-to-JSON conversion and the `SpanExporter` impl
//! - `rotation`: size-rotated trace file

mod exporter;
pub mod init;
mod rotation;

pub use init::{init_tracing, TRACE_FILE};
