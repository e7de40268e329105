use crate::error::LifeError;
use crate::traits_and_structs::{Cell, CellRenderer};

const ON_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const DYING_COLOR: [u8; 4] = [0xaa, 0xaa, 0xaa, 0xff];
const OFF_COLOR: [u8; 4] = [0x00, 0x00, 0x50, 0xff];

pub fn color(state: Cell) -> [u8; 4] {
    match state {
        Cell::On => ON_COLOR,
        Cell::Dying => DYING_COLOR,
        Cell::Off => OFF_COLOR,
    }
}

/// RGBA back buffer with one `cell_size` square per grid cell.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    columns: usize,
    rows: usize,
    cell_size: usize,
    pixel_width: u32,
    pixel_height: u32,
    frame: Vec<u8>,
    pending: bool,
}

impl PixelCanvas {
    pub fn new(columns: usize, rows: usize, cell_size: u32) -> Result<Self, LifeError> {
        let too_large = || LifeError::SurfaceTooLarge {
            columns,
            rows,
            cell_size,
        };
        let side = cell_size.max(1) as usize;
        let width = columns.checked_mul(side).ok_or_else(too_large)?;
        let height = rows.checked_mul(side).ok_or_else(too_large)?;
        let pixel_width = u32::try_from(width).map_err(|_| too_large())?;
        let pixel_height = u32::try_from(height).map_err(|_| too_large())?;
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(too_large)?;

        let mut frame = vec![0; len];
        for pix in frame.chunks_exact_mut(4) {
            pix.copy_from_slice(&OFF_COLOR);
        }
        Ok(Self {
            columns,
            rows,
            cell_size: side,
            pixel_width,
            pixel_height,
            frame,
            pending: true,
        })
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Grid cell under pixel `(px, py)`. Not bounds checked, so it can be fed
    /// to a line walk that leaves the grid.
    pub fn cell_of(&self, px: usize, py: usize) -> (isize, isize) {
        ((px / self.cell_size) as isize, (py / self.cell_size) as isize)
    }

    /// Whether a presented frame is waiting to be shown. Clears the flag.
    pub fn take_pending(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn draw(&self, screen: &mut [u8]) {
        debug_assert_eq!(screen.len(), self.frame.len());
        screen.copy_from_slice(&self.frame);
    }

    #[cfg(test)]
    fn pixel(&self, px: usize, py: usize) -> &[u8] {
        let i = (py * self.columns * self.cell_size + px) * 4;
        &self.frame[i..i + 4]
    }
}

impl CellRenderer for PixelCanvas {
    fn render_cell(&mut self, x: usize, y: usize, state: Cell) {
        let rgba = color(state);
        let stride = self.columns * self.cell_size * 4;
        let left = x * self.cell_size * 4;
        let span = self.cell_size * 4;
        for row in 0..self.cell_size {
            let start = (y * self.cell_size + row) * stride + left;
            for pix in self.frame[start..start + span].chunks_exact_mut(4) {
                pix.copy_from_slice(&rgba);
            }
        }
    }

    fn present_frame(&mut self) {
        self.pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_square_per_cell() {
        let mut canvas = PixelCanvas::new(3, 2, 4).unwrap();
        assert_eq!(canvas.pixel_width(), 12);
        assert_eq!(canvas.pixel_height(), 8);
        canvas.render_cell(1, 1, Cell::On);
        assert_eq!(canvas.pixel(4, 4), &ON_COLOR);
        assert_eq!(canvas.pixel(7, 7), &ON_COLOR);
        assert_eq!(canvas.pixel(3, 4), &OFF_COLOR);
        assert_eq!(canvas.pixel(8, 7), &OFF_COLOR);
        assert_eq!(canvas.pixel(4, 3), &OFF_COLOR);
        canvas.render_cell(1, 1, Cell::Dying);
        assert_eq!(canvas.pixel(5, 5), &DYING_COLOR);
    }

    #[test]
    fn maps_pixels_to_cells() {
        let canvas = PixelCanvas::new(10, 9, 5).unwrap();
        assert_eq!(canvas.cell_of(0, 0), (0, 0));
        assert_eq!(canvas.cell_of(4, 5), (0, 1));
        assert_eq!(canvas.cell_of(49, 44), (9, 8));
        assert_eq!(canvas.cell_of(50, 0), (10, 0));
    }

    #[test]
    fn present_sets_pending_once() {
        let mut canvas = PixelCanvas::new(2, 2, 1).unwrap();
        assert!(canvas.take_pending());
        assert!(!canvas.take_pending());
        canvas.present_frame();
        assert!(canvas.take_pending());
        let mut screen = vec![0; 16];
        canvas.draw(&mut screen);
        assert_eq!(&screen[0..4], &OFF_COLOR);
    }

    #[test]
    fn oversized_surface_is_an_error() {
        let err = PixelCanvas::new(500, 500, 10_000_000).unwrap_err();
        assert!(matches!(
            err,
            LifeError::SurfaceTooLarge {
                columns: 500,
                rows: 500,
                cell_size: 10_000_000
            }
        ));
        assert!(PixelCanvas::new(usize::MAX, 1, 2).is_err());
    }
}
