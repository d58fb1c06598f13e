use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the dashboard engine and its loaders.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A sheet does not carry one of the required columns.
    #[error("Sheet '{sheet}' is missing required column '{column}'")]
    MissingColumn { sheet: String, column: String },

    /// A workbook could not be opened or one of its sheets read.
    #[error("Failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// The workbook contains no sheets at all.
    #[error("Workbook {0} contains no sheets")]
    NoSheets(PathBuf),

    /// A requested period does not match any sheet in the workbook.
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    /// A ranked key has no entry in the secondary statistic map. Signals
    /// that the ranking and the mean map were derived from different
    /// datasets.
    #[error("No mean available for ranked key '{0}'")]
    RankJoin(String),

    /// Pass-through for raw I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
