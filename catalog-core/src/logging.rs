use std::{
    fs,
    path::Path,
    sync::OnceLock,
    sync::atomic::{AtomicUsize, Ordering},
};

use chrono::Local;
use tracing::Metadata;
use tracing_appender::{non_blocking::WorkerGuard, rolling::RollingFileAppender};
use tracing_subscriber::{
    EnvFilter,
    filter::Directive,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    prelude::*,
};

use crate::config::LoggingConfig;
use crate::error::{AppError, AppResult};

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`. Keep the returned guard alive
    /// for the life of the process or buffered lines are lost.
    ///
    /// File only: the TUI owns stdout/stderr while it runs.
    pub fn init_tracing(cfg: &LoggingConfig, log_dir: &Path) -> AppResult<WorkerGuard> {
        fs::create_dir_all(log_dir)?;

        SEQ.get_or_init(|| AtomicUsize::new(1));

        // daily rolling file appender → <log_dir>/<prefix>.YYYY-MM-DD
        let file: RollingFileAppender = tracing_appender::rolling::daily(log_dir, &cfg.file_prefix);
        let (writer, guard) = tracing_appender::non_blocking(file);

        let filter = Self::env_filter(&cfg.level)?;

        let file_layer = fmt::layer()
            .event_format(SeqFileMod) // our compact formatter
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .map_err(|e| AppError::Other(format!("logger already initialised: {e}")))?;

        Ok(guard)
    }

    /// `RUST_LOG` wins; otherwise the configured level applies.
    fn env_filter(default_level: &str) -> AppResult<EnvFilter> {
        let directive = default_level
            .parse::<Directive>()
            .map_err(|e| AppError::Other(format!("invalid log level '{default_level}': {e}")))?;
        Ok(EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy())
    }
}

static SEQ: OnceLock<AtomicUsize> = OnceLock::new();

/// Custom formatter: `SEQ TIME LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically‑increasing sequence number
        let seq: usize = SEQ
            .get_or_init(|| AtomicUsize::new(1))
            .fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {} {:5} [{}:{} {}] ",
            Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        // write all key‑value pairs for this event (usually just the message)
        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_build_filters() {
        for level in ["trace", "debug", "info", "warn", "error", "catalog_core=debug"] {
            assert!(Logger::env_filter(level).is_ok(), "{level}");
        }
    }
}
