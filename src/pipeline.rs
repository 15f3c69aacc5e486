//! Encode -> save -> load -> decode round trip.
//!
//! Runs each stage in sequence and stops at the first failure, reporting
//! which stage failed.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::board::grid::Grid;
use crate::board::setup::DEFAULT_SIZE;
use crate::error::SparseError;
use crate::sparse::codec::{decode, encode};
use crate::store::{load_expecting, save, DEFAULT_PATH};

/// Settings for a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Board dimension used when the caller supplies no grid.
    pub size: u32,
    /// Record file written and read back.
    pub path: PathBuf,
    /// Fill density for a random board; None selects the demo position.
    pub density: Option<f64>,
    /// Random seed for `density` boards (0 = use entropy).
    pub seed: u64,
    /// Print the sparse list as JSON instead of the tab layout.
    pub json: bool,
    /// Suppress grid and record output.
    pub quiet: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            size: DEFAULT_SIZE,
            path: PathBuf::from(DEFAULT_PATH),
            density: None,
            seed: 0,
            json: false,
            quiet: false,
        }
    }
}

/// A step of the round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Encode,
    Save,
    Load,
    Decode,
}

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Encode => "encode",
            Stage::Save => "save",
            Stage::Load => "load",
            Stage::Decode => "decode",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failure tagged with the stage that produced it.
#[derive(Debug, thiserror::Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: SparseError,
}

trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, PipelineError>;
}

impl<T> AtStage<T> for Result<T, SparseError> {
    fn at(self, stage: Stage) -> Result<T, PipelineError> {
        self.map_err(|source| PipelineError { stage, source })
    }
}

/// Round-trips `grid` through the record file at `path` and returns the
/// restored grid.
pub fn run(grid: &Grid, path: &Path) -> Result<Grid, PipelineError> {
    debug!("{}: {}x{} grid", Stage::Encode, grid.rows(), grid.cols());
    let records = encode(grid);

    debug!("{}: {} records -> {}", Stage::Save, records.len(), path.display());
    let written = save(&records, path).at(Stage::Save)?;

    debug!("{}: {}", Stage::Load, written.display());
    let loaded = load_expecting(&written, records.len()).at(Stage::Load)?;

    debug!("{}: {} cell records", Stage::Decode, loaded.count());
    let restored = decode(&loaded).at(Stage::Decode)?;

    info!(
        "round trip of {}x{} grid through {} complete ({} stones)",
        restored.rows(),
        restored.cols(),
        written.display(),
        loaded.count()
    );
    Ok(restored)
}

/// Runs the round trip using the path from `config`.
pub fn run_with(config: &PipelineConfig, grid: &Grid) -> Result<Grid, PipelineError> {
    run(grid, &config.path)
}
