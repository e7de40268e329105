use byteorder::{ByteOrder, NativeEndian};
use getrandom::getrandom;
use randomize::PCG32;

use crate::error::LifeError;
use crate::traits_and_structs::Cell;

/// How the grid is filled at startup and on reseed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Every cell `Off`.
    Empty,
    /// Each cell drawn uniformly from the three states.
    Random,
}

/// Generate a pseudorandom seed for the PRNG.
pub fn generate_seed() -> Result<(u64, u64), LifeError> {
    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

/// `len` cells drawn from `rng`.
pub fn random_cells(rng: &mut PCG32, len: usize) -> Vec<Cell> {
    (0..len)
        .map(|_| Cell::from_index(rng.next_u32() % 3).unwrap_or_default())
        .collect()
}

/// Initial column-major cell states for a `width` x `height` grid.
pub fn seed_grid(width: usize, height: usize, seeding: Seeding) -> Result<Vec<Cell>, LifeError> {
    let len = width * height;
    match seeding {
        Seeding::Empty => Ok(vec![Cell::Off; len]),
        Seeding::Random => {
            let mut rng: PCG32 = generate_seed()?.into();
            Ok(random_cells(&mut rng, len))
        }
    }
}
