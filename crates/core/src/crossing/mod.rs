//! Gamete combination and Punnett squares.

mod combiner;
mod engine;
mod square;

pub use combiner::{combine, gametes};
pub use engine::{cross, CrossingEngine, LARGE_SQUARE_WARNING};
pub use square::PunnettSquare;
