use crate::board::Board;
use crate::config::GameConfig;
use crate::types::Coord2;

pub use random::*;

mod random;

/// Strategy for producing a populated [`Board`].
///
/// `excluded` is the first-clicked cell: when given and in bounds it is
/// guaranteed mine-free, so the first reveal can never detonate. `None` (or
/// an out-of-range coordinate) places mines anywhere, which is what a reset
/// without a meaningful first click uses.
pub trait BoardGenerator {
    fn generate(&mut self, config: GameConfig, excluded: Option<Coord2>) -> Board;
}
