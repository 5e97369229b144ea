pub mod cell;
pub mod settings;
pub mod text;

pub use cell::{Chord, Dot, CELL_BASE};
