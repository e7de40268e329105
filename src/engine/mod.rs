pub mod edit;
pub mod grid;
pub mod stepper;

pub use edit::EditSurface;
pub use grid::{GridState, ToroidalIndexer};
pub use stepper::{
    GenerationStepper, PartitionPlan, PartitionedStepper, SequentialStepper, StepReport,
    StepperKind,
};
