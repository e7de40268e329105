use std::time::Duration;

use clap::Parser;
use log::warn;

use crate::auxiliary::randomizer::Seeding;
use crate::engine::{PartitionedStepper, SequentialStepper, StepperKind};
use crate::error::LifeError;

pub const MAX_CELL_SIZE: i64 = 64;

/// Three-state decay automaton on a torus.
#[derive(Clone, Debug, Parser)]
#[command(name = "tri_state_life", about = "Three-state decaying life on a torus")]
pub struct Config {
    /// Grid width in cells [default: 100, with a height of 90].
    pub width: Option<usize>,

    /// Grid height in cells. Defaults to WIDTH when only WIDTH is given.
    pub height: Option<usize>,

    /// Largest accepted value for either axis.
    #[arg(long, default_value_t = 500)]
    pub max_extent: usize,

    /// Edge length of one cell in pixels.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=MAX_CELL_SIZE))]
    pub cell_size: u32,

    /// Column partitions for the concurrent stepper.
    #[arg(long, default_value_t = PartitionedStepper::DEFAULT_WORKERS)]
    pub workers: usize,

    /// Step on the calling thread only.
    #[arg(long)]
    pub sequential: bool,

    /// Start with every cell off instead of a random fill.
    #[arg(long)]
    pub empty: bool,

    /// Milliseconds between generations.
    #[arg(long, default_value_t = 50)]
    pub frame_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            max_extent: 500,
            cell_size: 5,
            workers: PartitionedStepper::DEFAULT_WORKERS,
            sequential: false,
            empty: false,
            frame_ms: 50,
        }
    }
}

impl Config {
    pub const DEFAULT_EXTENT: (usize, usize) = (100, 90);

    pub fn extent(&self) -> Result<(usize, usize), LifeError> {
        let (width, height) = match self.width {
            Some(width) => (width, self.height.unwrap_or(width)),
            None => Self::DEFAULT_EXTENT,
        };
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyExtent { width, height });
        }
        if width > self.max_extent || height > self.max_extent {
            return Err(LifeError::ExtentTooLarge {
                width,
                height,
                max: self.max_extent,
            });
        }
        Ok((width, height))
    }

    pub fn seeding(&self) -> Seeding {
        if self.empty {
            Seeding::Empty
        } else {
            Seeding::Random
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn stepper(&self, width: usize) -> Result<StepperKind, LifeError> {
        if self.sequential {
            return Ok(StepperKind::Sequential(SequentialStepper));
        }
        let workers = self.workers.min(width);
        if workers < 2 {
            warn!(
                "{} worker(s) requested for {} column(s), stepping sequentially",
                self.workers, width
            );
            return Ok(StepperKind::Sequential(SequentialStepper));
        }
        Ok(StepperKind::Partitioned(PartitionedStepper::new(workers)?))
    }
}
