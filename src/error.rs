//! Error type shared by the engine and the window shell.

use thiserror::Error;

/// Everything that can go wrong while configuring, stepping or drawing.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Requested grid is larger than the configured maximum extent.
    #[error("grid {width}x{height} exceeds the maximum of {max}x{max}")]
    ExtentTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    /// Cell count does not fit in memory addressing.
    #[error("grid {width}x{height} has too many cells to address")]
    ExtentOverflow { width: usize, height: usize },

    /// Pixel surface for the grid does not fit the drawing backend.
    #[error("{columns}x{rows} cells at {cell_size}px each is too large to draw")]
    SurfaceTooLarge {
        columns: usize,
        rows: usize,
        cell_size: u32,
    },

    /// One of the axes is zero.
    #[error("grid {width}x{height} has no cells")]
    EmptyExtent { width: usize, height: usize },

    /// Concurrent stepping needs at least two workers.
    #[error("partitioned stepping needs at least 2 workers, got {workers}")]
    TooFewWorkers { workers: usize },

    /// Column partition cannot give each worker at least one column.
    #[error("cannot split {width} columns between {workers} workers")]
    InvalidPartition { workers: usize, width: usize },

    /// Seed data does not match the grid extent.
    #[error("seed holds {actual} cells, grid needs {expected}")]
    SeedLength { expected: usize, actual: usize },

    /// Edit outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A sweep worker thread could not be started.
    #[error("failed to start sweep worker {worker}")]
    WorkerSpawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// A sweep worker thread panicked before it could be joined.
    #[error("sweep worker {worker} could not be joined")]
    WorkerJoin { worker: usize },

    /// The shared drawing surface lock was poisoned by a panicking worker.
    #[error("drawing surface lock poisoned")]
    SurfacePoisoned,

    #[error("no entropy for seeding: {0}")]
    Entropy(#[from] getrandom::Error),

    #[error("pixels error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("window error: {0}")]
    Window(#[from] winit::error::OsError),
}
