//! Logging setup.
//!
//! Two sinks:
//! - a daily-rolling file with one JSON object per line (always on)
//! - human-readable stdout (debug builds only)
//!
//! Each JSON line carries timestamp (ISO 8601 with offset, millisecond
//! precision), level, target, pid, thread, file + line, message, the event's
//! structured fields and the crate version. `log` records are bridged into
//! `tracing`. `RUST_LOG` overrides the configured level.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::config::LogLevel;

pub const LOG_FILE_PREFIX: &str = "zeroday.log";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logger(log_dir: PathBuf, level: LogLevel) -> anyhow::Result<()> {
    if LOG_DIR.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&log_dir)?;

    let _ = LogTracer::builder()
        .with_max_level(log::LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .event_format(JsonLineFormatter::new())
        .with_filter(env_filter(level));

    let stdout_layer = if cfg!(debug_assertions) {
        Some(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_ansi(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                ))
                .with_filter(env_filter(level)),
        )
    } else {
        None
    };

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = FILE_GUARD.set(guard);
    let _ = LOG_DIR.set(log_dir.clone());

    tracing::info!(
        target: "zeroday::logging",
        log_dir = %log_dir.display(),
        level = level.as_str(),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized"
    );

    Ok(())
}

/// Directory the file sink writes to, once initialized
pub fn get_log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}

/// Default directive for a configured level: our crates at that level,
/// dependencies one notch quieter (but never below warn).
pub fn default_directive(level: LogLevel) -> String {
    let deps = match level {
        LogLevel::Trace => "debug",
        LogLevel::Debug => "info",
        LogLevel::Info | LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    };
    format!(
        "{deps},zeroday={lvl},zeroday_domain={lvl},zeroday_infrastructure={lvl},zeroday_app={lvl}",
        lvl = level.as_str()
    )
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(level)))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// One-line JSON event formatter
struct JsonLineFormatter {
    pid: u32,
}

impl JsonLineFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonLineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let thread = std::thread::current();

        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);
        let message = visitor.fields.remove("message");

        let mut line = serde_json::json!({
            "timestamp": chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            "level": metadata.level().to_string(),
            "target": metadata.target(),
            "pid": self.pid,
            "tid": format!("{:?}", thread.id()),
            "thread_name": thread.name().unwrap_or("unnamed"),
            "version": env!("CARGO_PKG_VERSION"),
        });

        if let Some(file) = metadata.file() {
            line["file"] = serde_json::json!(file);
        }
        if let Some(number) = metadata.line() {
            line["line"] = serde_json::json!(number);
        }
        if let Some(message) = message {
            line["message"] = message;
        }
        if !visitor.fields.is_empty() {
            line["fields"] = serde_json::Value::Object(visitor.fields);
        }

        writeln!(
            writer,
            "{}",
            serde_json::to_string(&line).unwrap_or_default()
        )
    }
}

#[derive(Default)]
struct FieldCollector {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl Visit for FieldCollector {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses_for_every_level() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            let directive = default_directive(level);
            assert!(EnvFilter::try_new(&directive).is_ok(), "{directive}");
        }
    }

    #[test]
    fn test_default_directive_quiets_dependencies() {
        let directive = default_directive(LogLevel::Debug);
        assert!(directive.starts_with("info,"));
        assert!(directive.contains("zeroday_app=debug"));
    }
}
