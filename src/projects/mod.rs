pub mod canvas;
pub mod decay_life;

pub use canvas::PixelCanvas;
pub use decay_life::run_decay_life;
