use crate::error::LifeError;
use crate::traits_and_structs::Cell;

// Column-major (`x * height + y`): a run of columns is one contiguous slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToroidalIndexer {
    width: usize,
    height: usize,
}

impl ToroidalIndexer {
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyExtent { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(LifeError::ExtentOverflow { width, height })?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn north(&self, y: usize) -> usize {
        if y == 0 {
            self.height - 1
        } else {
            y - 1
        }
    }

    pub fn south(&self, y: usize) -> usize {
        (y + 1) % self.height
    }

    pub fn west(&self, x: usize) -> usize {
        if x == 0 {
            self.width - 1
        } else {
            x - 1
        }
    }

    pub fn east(&self, x: usize) -> usize {
        (x + 1) % self.width
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Buffer offset of `(x, y)`. Callers guarantee the coordinate is in range.
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y));
        x * self.height + y
    }

    pub fn neighbors(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        let (n, s) = (self.north(y), self.south(y));
        let (w, e) = (self.west(x), self.east(x));
        [
            (e, y),
            (e, s),
            (x, s),
            (w, s),
            (w, y),
            (w, n),
            (x, n),
            (e, n),
        ]
    }

    pub fn live_neighbors(&self, cells: &[Cell], x: usize, y: usize) -> u8 {
        self.neighbors(x, y)
            .iter()
            .filter(|&&(nx, ny)| cells[self.index(nx, ny)].is_live())
            .count() as u8
    }
}

#[derive(Clone, Debug)]
pub struct GridState {
    indexer: ToroidalIndexer,
    buffers: [Vec<Cell>; 2],
    current: usize,
    generation: u64,
}

impl GridState {
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let indexer = ToroidalIndexer::new(width, height)?;
        let size = indexer.len();
        Ok(Self {
            indexer,
            buffers: [vec![Cell::Off; size], vec![Cell::Off; size]],
            current: 0,
            generation: 0,
        })
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, LifeError> {
        let mut grid = Self::new(width, height)?;
        grid.load(cells)?;
        Ok(grid)
    }

    /// Replace the current buffer with `cells` and the next buffer with `Off`.
    pub fn load(&mut self, cells: Vec<Cell>) -> Result<(), LifeError> {
        let expected = self.indexer.len();
        if cells.len() != expected {
            return Err(LifeError::SeedLength {
                expected,
                actual: cells.len(),
            });
        }
        self.buffers[self.current] = cells;
        self.buffers[self.current ^ 1].fill(Cell::Off);
        Ok(())
    }

    pub fn indexer(&self) -> &ToroidalIndexer {
        &self.indexer
    }

    pub fn width(&self) -> usize {
        self.indexer.width
    }

    pub fn height(&self) -> usize {
        self.indexer.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_slot(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &[Cell] {
        &self.buffers[self.current]
    }

    pub fn next(&self) -> &[Cell] {
        &self.buffers[self.current ^ 1]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.indexer
            .contains(x, y)
            .then(|| self.current()[self.indexer.index(x, y)])
    }

    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.indexer.live_neighbors(self.current(), x, y)
    }

    pub(crate) fn current_mut(&mut self) -> &mut [Cell] {
        &mut self.buffers[self.current]
    }

    pub(crate) fn buffers_mut(&mut self) -> &mut [Vec<Cell>; 2] {
        &mut self.buffers
    }

    pub(crate) fn split_for_step(&mut self) -> (&[Cell], &mut [Cell]) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (first.as_slice(), second.as_mut_slice())
        } else {
            (second.as_slice(), first.as_mut_slice())
        }
    }

    /// Swap the roles of the two buffers. No cell data is copied.
    pub(crate) fn flip(&mut self) {
        self.current ^= 1;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_every_edge() {
        let ix = ToroidalIndexer::new(7, 4).unwrap();
        assert_eq!(ix.west(0), 6);
        assert_eq!(ix.east(6), 0);
        assert_eq!(ix.north(0), 3);
        assert_eq!(ix.south(3), 0);
        assert_eq!(ix.west(3), 2);
        assert_eq!(ix.east(3), 4);
        assert_eq!(ix.north(2), 1);
        assert_eq!(ix.south(2), 3);
    }

    #[test]
    fn corner_neighbours_wrap_on_both_axes() {
        let ix = ToroidalIndexer::new(5, 5).unwrap();
        let n = ix.neighbors(0, 0);
        assert!(n.contains(&(4, 4)));
        assert!(n.contains(&(4, 0)));
        assert!(n.contains(&(0, 4)));
        assert!(n.contains(&(1, 1)));
        assert!(!n.contains(&(0, 0)));
    }

    #[test]
    fn rejects_empty_extent() {
        assert!(matches!(
            ToroidalIndexer::new(0, 3),
            Err(LifeError::EmptyExtent { .. })
        ));
        assert!(GridState::new(3, 0).is_err());
    }

    #[test]
    fn rejects_extent_that_overflows() {
        let err = ToroidalIndexer::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(
            err,
            LifeError::ExtentOverflow {
                width: usize::MAX,
                height: 2
            }
        ));
        assert!(!err.to_string().contains("maximum"));
    }

    #[test]
    fn dying_neighbours_are_not_counted() {
        let mut cells = vec![Cell::Dying; 9];
        cells[4] = Cell::Off;
        let grid = GridState::from_cells(3, 3, cells).unwrap();
        assert_eq!(grid.live_neighbors(1, 1), 0);
    }

    #[test]
    fn counts_all_eight_on_neighbours() {
        let mut cells = vec![Cell::On; 9];
        cells[4] = Cell::Off;
        let grid = GridState::from_cells(3, 3, cells).unwrap();
        assert_eq!(grid.live_neighbors(1, 1), 8);
    }

    #[test]
    fn load_checks_length() {
        let mut grid = GridState::new(4, 4).unwrap();
        let err = grid.load(vec![Cell::On; 15]).unwrap_err();
        assert!(matches!(
            err,
            LifeError::SeedLength {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn flip_swaps_roles_without_copying() {
        let mut grid = GridState::new(2, 2).unwrap();
        {
            let (_, next) = grid.split_for_step();
            next.fill(Cell::On);
        }
        assert_eq!(grid.current_slot(), 0);
        grid.flip();
        assert_eq!(grid.current_slot(), 1);
        assert_eq!(grid.generation(), 1);
        assert!(grid.current().iter().all(|c| *c == Cell::On));
        assert!(grid.next().iter().all(|c| *c == Cell::Off));
    }
}
