use std::ops::Range;
use std::sync::Mutex;
use std::thread;

use log::debug;

use super::grid::{GridState, ToroidalIndexer};
use crate::error::LifeError;
use crate::traits_and_structs::{Cell, CellRenderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    /// Cells whose state differs from the previous generation.
    pub changed: usize,
}

pub trait GenerationStepper {
    /// Compute the next buffer from the current one, rendering every cell
    /// whose state changes exactly once. Returns the number of changed cells.
    fn sweep(
        &self,
        grid: &mut GridState,
        renderer: &mut (dyn CellRenderer + Send),
    ) -> Result<usize, LifeError>;

    /// Sweep, flip the buffers, then present the frame.
    fn step(
        &self,
        grid: &mut GridState,
        renderer: &mut (dyn CellRenderer + Send),
    ) -> Result<StepReport, LifeError> {
        let changed = self.sweep(grid, renderer)?;
        grid.flip();
        renderer.present_frame();
        let report = StepReport {
            generation: grid.generation(),
            changed,
        };
        debug!("{:?}", report);
        Ok(report)
    }
}

/// Apply the transition rule to the columns in `columns`.
///
/// `current` is the whole current buffer; `next` holds only the cells of
/// `columns`, starting at `columns.start`. `on_change` fires for each cell
/// whose new state differs from its old one.
fn sweep_columns<F>(
    indexer: &ToroidalIndexer,
    current: &[Cell],
    next: &mut [Cell],
    columns: Range<usize>,
    mut on_change: F,
) -> Result<usize, LifeError>
where
    F: FnMut(usize, usize, Cell) -> Result<(), LifeError>,
{
    let height = indexer.height();
    debug_assert_eq!(next.len(), columns.len() * height);
    let mut changed = 0;
    for (column, x) in next.chunks_exact_mut(height).zip(columns) {
        for (y, slot) in column.iter_mut().enumerate() {
            let old = current[indexer.index(x, y)];
            let new = old.next_state(indexer.live_neighbors(current, x, y));
            *slot = new;
            if new != old {
                changed += 1;
                on_change(x, y, new)?;
            }
        }
    }
    Ok(changed)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialStepper;

impl GenerationStepper for SequentialStepper {
    fn sweep(
        &self,
        grid: &mut GridState,
        renderer: &mut (dyn CellRenderer + Send),
    ) -> Result<usize, LifeError> {
        let indexer = *grid.indexer();
        let (current, next) = grid.split_for_step();
        sweep_columns(&indexer, current, next, 0..indexer.width(), |x, y, cell| {
            renderer.render_cell(x, y, cell);
            Ok(())
        })
    }
}

/// Disjoint, contiguous column ranges that tile `[0, width)` exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionPlan {
    ranges: Vec<Range<usize>>,
}

impl PartitionPlan {
    pub fn new(width: usize, workers: usize) -> Result<Self, LifeError> {
        if workers < 2 || workers > width {
            return Err(LifeError::InvalidPartition { workers, width });
        }
        let ranges: Vec<_> = (0..workers)
            .map(|i| (i * width / workers)..((i + 1) * width / workers))
            .collect();
        let plan = Self { ranges };
        debug_assert!(plan.tiles(width));
        Ok(plan)
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether the ranges are non-empty, in order, and cover `[0, width)`
    /// with no gap or overlap.
    pub fn tiles(&self, width: usize) -> bool {
        let mut expected_start = 0;
        for range in &self.ranges {
            if range.start != expected_start || range.is_empty() {
                return false;
            }
            expected_start = range.end;
        }
        expected_start == width
    }
}

/// Fork-join sweep: one scoped thread per column partition, joined before
/// the flip. Redraws are serialised through a lock held only for the draw.
#[derive(Clone, Copy, Debug)]
pub struct PartitionedStepper {
    workers: usize,
}

impl PartitionedStepper {
    pub const DEFAULT_WORKERS: usize = 2;

    pub fn new(workers: usize) -> Result<Self, LifeError> {
        if workers < 2 {
            return Err(LifeError::TooFewWorkers { workers });
        }
        Ok(Self { workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for PartitionedStepper {
    fn default() -> Self {
        Self {
            workers: Self::DEFAULT_WORKERS,
        }
    }
}

impl GenerationStepper for PartitionedStepper {
    fn sweep(
        &self,
        grid: &mut GridState,
        renderer: &mut (dyn CellRenderer + Send),
    ) -> Result<usize, LifeError> {
        let indexer = *grid.indexer();
        let plan = PartitionPlan::new(indexer.width(), self.workers)?;
        let height = indexer.height();
        let (current, next) = grid.split_for_step();
        let surface = Mutex::new(renderer);

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(plan.len());
            let mut spawned = Ok(());
            let mut rest = next;
            for (worker, columns) in plan.ranges().iter().cloned().enumerate() {
                let (owned, tail) = std::mem::take(&mut rest).split_at_mut(columns.len() * height);
                rest = tail;
                let surface = &surface;
                let handle = thread::Builder::new()
                    .name(format!("sweep-{}", worker))
                    .spawn_scoped(scope, move || {
                        sweep_columns(&indexer, current, owned, columns, |x, y, cell| {
                            let mut surface =
                                surface.lock().map_err(|_| LifeError::SurfacePoisoned)?;
                            surface.render_cell(x, y, cell);
                            Ok(())
                        })
                    });
                match handle {
                    Ok(handle) => handles.push(handle),
                    Err(source) => {
                        spawned = Err(LifeError::WorkerSpawn { worker, source });
                        break;
                    }
                }
            }

            // Every handle is joined here, a panicked worker must not reach the scope's own join.
            let joined: Vec<Result<usize, LifeError>> = handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| {
                    handle
                        .join()
                        .map_err(|_| LifeError::WorkerJoin { worker })
                        .and_then(|swept| swept)
                })
                .collect();
            spawned?;
            joined.into_iter().sum()
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub enum StepperKind {
    Sequential(SequentialStepper),
    Partitioned(PartitionedStepper),
}

impl GenerationStepper for StepperKind {
    fn sweep(
        &self,
        grid: &mut GridState,
        renderer: &mut (dyn CellRenderer + Send),
    ) -> Result<usize, LifeError> {
        match self {
            StepperKind::Sequential(s) => s.sweep(grid, renderer),
            StepperKind::Partitioned(p) => p.sweep(grid, renderer),
        }
    }
}
