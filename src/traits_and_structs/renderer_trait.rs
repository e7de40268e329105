use super::cell::Cell;

/// Drawing surface the engine reports changed cells to.
pub trait CellRenderer {
    /// Draw `state` at grid cell `(x, y)`. May be called any number of times
    /// for the same cell.
    fn render_cell(&mut self, x: usize, y: usize, state: Cell);
    /// Publish every pending `render_cell` call at once.
    fn present_frame(&mut self);
}
