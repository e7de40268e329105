pub mod config;
pub mod randomizer;
pub mod window;

pub use config::Config;
pub use randomizer::{generate_seed, seed_grid, Seeding};
pub use window::create_window;
