pub mod cell;
pub mod renderer_trait;

pub use cell::Cell;
pub use renderer_trait::CellRenderer;
