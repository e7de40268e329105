//! A three-state decaying cellular automaton on a torus.
//!
//! Every `Off` cell with exactly two `On` neighbours turns `On`; every `On`
//! cell turns `Dying`; every `Dying` cell turns `Off`. The grid is stepped
//! either on one thread or by several column-partitioned workers, both of
//! which produce the same generations.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod auxiliary;
pub mod engine;
pub mod error;
pub mod projects;
pub mod traits_and_structs;

pub use engine::{
    EditSurface, GenerationStepper, GridState, PartitionPlan, PartitionedStepper,
    SequentialStepper, StepReport, StepperKind, ToroidalIndexer,
};
pub use error::LifeError;
pub use traits_and_structs::{Cell, CellRenderer};
