use log::debug;

use super::grid::GridState;
use crate::error::LifeError;
use crate::traits_and_structs::{Cell, CellRenderer};

/// Out-of-band writes into the grid that bypass the transition rule.
///
/// Edits land in the buffer the upcoming step reads from, so a painted cell
/// takes part in the very next generation.
pub struct EditSurface<'a, R: CellRenderer + ?Sized> {
    grid: &'a mut GridState,
    renderer: &'a mut R,
}

impl<'a, R: CellRenderer + ?Sized> EditSurface<'a, R> {
    pub fn new(grid: &'a mut GridState, renderer: &'a mut R) -> Self {
        Self { grid, renderer }
    }

    /// Overwrite `(x, y)` with `state` and redraw it immediately.
    pub fn set_cell(&mut self, x: usize, y: usize, state: Cell) -> Result<(), LifeError> {
        let indexer = *self.grid.indexer();
        if !indexer.contains(x, y) {
            return Err(LifeError::OutOfRange {
                x,
                y,
                width: indexer.width(),
                height: indexer.height(),
            });
        }
        self.grid.current_mut()[indexer.index(x, y)] = state;
        self.renderer.render_cell(x, y, state);
        self.renderer.present_frame();
        Ok(())
    }

    /// Set every cell of both buffers to `Off`. Only cells that were visibly
    /// non-`Off` are redrawn. Returns how many were.
    pub fn clear(&mut self) -> usize {
        let indexer = *self.grid.indexer();
        let slot = self.grid.current_slot();
        let mut changed = 0;
        {
            let buffers = self.grid.buffers_mut();
            for x in 0..indexer.width() {
                for y in 0..indexer.height() {
                    let i = indexer.index(x, y);
                    if buffers[slot][i] != Cell::Off {
                        self.renderer.render_cell(x, y, Cell::Off);
                        changed += 1;
                    }
                }
            }
            buffers[0].fill(Cell::Off);
            buffers[1].fill(Cell::Off);
        }
        self.renderer.present_frame();
        debug!("cleared {} cells", changed);
        changed
    }

    /// Replace the grid contents with `cells` and repaint everything.
    pub fn reseed(&mut self, cells: Vec<Cell>) -> Result<(), LifeError> {
        self.grid.load(cells)?;
        self.repaint();
        Ok(())
    }

    pub fn repaint(&mut self) {
        let indexer = *self.grid.indexer();
        let cells = self.grid.current();
        for x in 0..indexer.width() {
            for y in 0..indexer.height() {
                self.renderer.render_cell(x, y, cells[indexer.index(x, y)]);
            }
        }
        self.renderer.present_frame();
    }
}
