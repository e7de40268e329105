/// State of a single grid cell.
///
/// Cells cycle `Off -> On -> Dying -> Off`. Only `Off` cells consult their
/// neighbourhood, and only `On` neighbours are counted as live.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Off = 0,
    Dying = 1,
    On = 2,
}

impl Cell {
    pub const ALL: [Cell; 3] = [Cell::Off, Cell::Dying, Cell::On];

    /// Map a raw value in `0..3` onto a state, `None` for anything else.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Cell::Off),
            1 => Some(Cell::Dying),
            2 => Some(Cell::On),
            _ => None,
        }
    }

    /// Whether this cell counts towards a neighbour's live total.
    pub fn is_live(self) -> bool {
        self == Cell::On
    }

    /// The state this cell takes in the following generation, given how many
    /// of its eight neighbours are `On`.
    #[must_use]
    pub fn next_state(self, live_neighbors: u8) -> Self {
        match self {
            Cell::Off if live_neighbors == 2 => Cell::On,
            Cell::Off => Cell::Off,
            Cell::On => Cell::Dying,
            Cell::Dying => Cell::Off,
        }
    }
}
