//! Stderr logging for the board-cells binaries.
//!
//! [`init_with_level`] installs a `log` backend that writes
//! `[elapsed LEVEL] target: message` lines. With the `tracing` feature,
//! [`init_tracing`] installs a `tracing-subscriber` instead; it also picks up
//! `log` records from the solver crates.

use std::fmt::Arguments;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

fn write_line(
    out: &mut impl Write,
    elapsed: f64,
    level: Level,
    target: &str,
    args: &Arguments<'_>,
) -> io::Result<()> {
    writeln!(out, "[{elapsed:7.3}s {level:>5}] {target}: {args}")
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = write_line(
                &mut io::stderr().lock(),
                self.started.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
                record.args(),
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger at `level`. Later calls keep the first logger.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| StderrLogger {
        level,
        started: Instant::now(),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default `info`).
///
/// `json = true` emits one flattened JSON object per event. Closing the
/// solver spans logs their timings.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(io::stderr);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder.finish().try_init()
    };
}
