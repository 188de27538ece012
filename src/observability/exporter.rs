//! File-backed OpenTelemetry span exporter.
//!
//! Every finished span becomes one JSON line in the trace file. Field names
//! follow OTLP (`traceId`, `spanId`, `startTimeUnixNano`, ...) so the file
//! can be fed to OTLP tooling line by line.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime};

use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};

use super::rotation::RotatingFile;

fn unix_nanos(at: SystemTime) -> String {
    at.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.to_string()),
        Value::Array(_) => json!(value.to_string()),
    }
}

fn attributes<'a>(pairs: impl Iterator<Item = &'a KeyValue>) -> JsonValue {
    let map: Map<String, JsonValue> = pairs
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

/// One span as a flat OTLP-named JSON object.
fn span_record(span: &SpanData, resource: &JsonValue) -> JsonValue {
    let (status, message) = match &span.status {
        Status::Unset => ("unset", String::new()),
        Status::Ok => ("ok", String::new()),
        Status::Error { description } => ("error", description.to_string()),
    };
    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "name": event.name,
                "timeUnixNano": unix_nanos(event.timestamp),
                "attributes": attributes(event.attributes.iter()),
            })
        })
        .collect();

    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "resource": resource,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(span.attributes.iter()),
        "events": events,
        "status": { "code": status, "message": message },
    })
}

struct FileSpanExporter {
    file: RotatingFile,
    resource: JsonValue,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    fn new(path: PathBuf, resource: &Resource) -> Self {
        Self {
            file: RotatingFile::new(path),
            resource: JsonValue::Object(
                resource
                    .iter()
                    .map(|(key, value)| (key.to_string(), attribute_value(value)))
                    .collect(),
            ),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        for span in &batch {
            let line = span_record(span, &self.resource).to_string();
            if let Err(e) = self.file.write_line(&line) {
                return Box::pin(std::future::ready(Err(TraceError::from(e.to_string()))));
            }
        }
        Box::pin(std::future::ready(Ok(())))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports each span synchronously to `path`.
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_keep_json_types() {
        assert_eq!(attribute_value(&Value::Bool(true)), json!(true));
        assert_eq!(attribute_value(&Value::I64(13)), json!(13));
        assert_eq!(attribute_value(&Value::from("rentals")), json!("rentals"));
    }

    #[test]
    fn attributes_become_an_object() {
        let pairs = [KeyValue::new("page", "home"), KeyValue::new("count", 9_i64)];
        assert_eq!(attributes(pairs.iter()), json!({ "page": "home", "count": 9 }));
    }

    #[test]
    fn nanos_before_epoch_clamp_to_zero() {
        assert_eq!(unix_nanos(SystemTime::UNIX_EPOCH), "0");
    }
}
