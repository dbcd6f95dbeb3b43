//! JSON configuration and report helpers for cell mapping.

use crate::{
    GridCellMapper, GridCellMapperParams, GridCellMapping, LevelDataError, MapError, PuzzleGrid,
};
use board_cells_core::{BoardSize, Cell, PixelRect};
use grid_axis::AxisSolverParams;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum CellsIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CellsConfigError {
    #[error("grid dimensions missing: set `rows`/`cols` or provide `level_data`")]
    MissingDimensions,
    #[error(transparent)]
    LevelData(#[from] LevelDataError),
}

/// Input of one mapping run, as produced by the cell detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellDetectConfig {
    pub board_size: BoardSize,
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub cols: Option<usize>,
    /// Puzzle level data; used for any dimension not set explicitly.
    #[serde(default)]
    pub level_data: Option<String>,
    pub rectangles: Vec<PixelRect>,
    #[serde(default)]
    pub output_path: Option<String>,
    /// Solver overrides applied to both axes.
    #[serde(default)]
    pub solver: Option<AxisSolverParams>,
}

impl CellDetectConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CellsIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), CellsIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("board_cells_report.json"))
    }

    /// Resolve `(rows, cols)`. Explicit values win over level data.
    pub fn dimensions(&self) -> Result<(usize, usize), CellsConfigError> {
        if let (Some(rows), Some(cols)) = (self.rows, self.cols) {
            return Ok((rows, cols));
        }
        let Some(data) = self.level_data.as_deref() else {
            return Err(CellsConfigError::MissingDimensions);
        };
        let grid = PuzzleGrid::from_level_data(data)?;
        Ok((
            self.rows.unwrap_or_else(|| grid.rows()),
            self.cols.unwrap_or_else(|| grid.cols()),
        ))
    }

    /// Build mapper parameters, applying overrides from the config.
    pub fn build_params(&self) -> GridCellMapperParams {
        self.solver
            .map(GridCellMapperParams::uniform)
            .unwrap_or_default()
    }

    pub fn build_mapper(&self) -> GridCellMapper {
        GridCellMapper::new(self.build_params())
    }

    /// Run the mapper on the configured rectangles.
    pub fn run(&self, rows: usize, cols: usize) -> Result<GridCellMapping, MapError> {
        self.build_mapper()
            .identify(self.board_size, rows, cols, &self.rectangles)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellReport {
    pub config_path: String,
    pub board_size: BoardSize,
    pub rows: usize,
    pub cols: usize,
    pub num_rectangles: usize,
    #[serde(default)]
    pub cells: Option<Vec<Cell>>,
    #[serde(default)]
    pub missing_slots: Option<Vec<[usize; 2]>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CellReport {
    /// Build a base report from the input config and resolved dimensions.
    pub fn new(cfg: &CellDetectConfig, config_path: &Path, rows: usize, cols: usize) -> Self {
        Self {
            config_path: config_path.to_string_lossy().into_owned(),
            board_size: cfg.board_size,
            rows,
            cols,
            num_rectangles: cfg.rectangles.len(),
            cells: None,
            missing_slots: None,
            error: None,
        }
    }

    /// Populate report fields from a successful mapping.
    pub fn set_mapping(&mut self, mapping: &GridCellMapping) {
        self.cells = Some(mapping.cells.clone());
        self.missing_slots = Some(
            mapping
                .missing_slots()
                .into_iter()
                .map(|(r, c)| [r, c])
                .collect(),
        );
        self.error = None;
    }

    /// Record a mapping error.
    pub fn set_error(&mut self, err: &MapError) {
        self.cells = None;
        self.missing_slots = None;
        self.error = Some(err.to_string());
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CellsIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), CellsIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
