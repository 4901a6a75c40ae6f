//! Observability setup for Mergington: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
