use std::path::{Path, PathBuf};
use std::process::ExitCode;

use board_cells::{CellDetectConfig, CellReport};
use clap::Parser;
use log::LevelFilter;

#[cfg(not(feature = "tracing"))]
use log::{info, warn};

#[cfg(feature = "tracing")]
use tracing::{info, warn};

#[cfg(feature = "tracing")]
use board_cells_core::init_tracing;
#[cfg(not(feature = "tracing"))]
use board_cells_core::init_with_level;

/// Assign detected puzzle-board cells to grid rows and columns.
#[derive(Parser, Debug)]
#[command(name = "board-cells", version, about)]
struct Cli {
    /// Detection config JSON: board size, grid dimensions or level data, rectangles.
    config: PathBuf,
    /// Report path; overrides `output_path` from the config.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Log level for the stderr logger (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
    /// Emit JSON log lines (only with the `tracing` feature).
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    {
        if let Err(err) = init_with_level(cli.log_level) {
            eprintln!("error: failed to install logger: {err}");
            return ExitCode::FAILURE;
        }
        if cli.json_logs {
            warn!("--json-logs needs the `tracing` feature; using plain logs");
        }
    }

    #[cfg(feature = "tracing")]
    init_tracing(cli.json_logs);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(cli)))]
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = CellDetectConfig::load_json(&cli.config)?;
    let (rows, cols) = cfg.dimensions()?;
    info!(
        "{} rectangles, board {}x{} px, grid {rows}x{cols}",
        cfg.rectangles.len(),
        cfg.board_size.width,
        cfg.board_size.height
    );

    let mut report = CellReport::new(&cfg, &cli.config, rows, cols);
    let outcome = cfg.run(rows, cols);
    match &outcome {
        Ok(mapping) => {
            let missing = mapping.missing_slots().len();
            if missing > 0 {
                info!("{missing} of {} slots have no detection", mapping.slot_count());
            }
            report.set_mapping(mapping);
        }
        Err(err) => {
            warn!("cell mapping failed: {err}");
            report.set_error(err);
        }
    }

    let out_path = cli.output.clone().unwrap_or_else(|| cfg.output_path());
    write_report(&out_path, &report)?;

    outcome.map(|_| ()).map_err(Into::into)
}

fn write_report(path: &Path, report: &CellReport) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    report.write_json(path)?;
    println!("wrote report JSON to {}", path.display());
    Ok(())
}
