use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::BoardGenerator;
use crate::board::Board;
use crate::cell::Cell;
use crate::config::GameConfig;
use crate::types::{Coord2, ToNdIndex};

/// Places the requested number of mines uniformly at random without
/// replacement, skipping the excluded cell.
///
/// When the request exceeds the number of candidate cells, every candidate
/// becomes a mine and the shortfall is reported through the board's actual
/// `mine_count`, not as an error.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: GameConfig, excluded: Option<Coord2>) -> Board {
        let mut grid: Array2<Cell> =
            Array2::default((config.rows as usize, config.cols as usize));

        let candidates: Vec<Coord2> = (0..config.rows)
            .flat_map(|x| (0..config.cols).map(move |y| (x, y)))
            .filter(|&pos| excluded != Some(pos))
            .collect();

        let requested = config.mines as usize;
        if requested > candidates.len() {
            log::warn!(
                "requested {} mines but only {} cells are available, placing {}",
                requested,
                candidates.len(),
                candidates.len()
            );
        }

        for &coords in candidates.choose_multiple(&mut self.rng, requested) {
            grid[coords.to_nd_index()].is_mine = true;
        }

        Board::from_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{neighbors, CellCount};

    #[test]
    fn places_exactly_the_requested_mines() {
        let mut gen = RandomBoardGenerator::from_seed(1);
        let board = gen.generate(GameConfig::new_unchecked(8, 8, 10), Some((0, 0)));
        assert_eq!(board.mine_count(), 10);
        assert_eq!(board.size(), (8, 8));
    }

    #[test]
    fn excluded_cell_is_never_a_mine() {
        for seed in 0..50 {
            let mut gen = RandomBoardGenerator::from_seed(seed);
            let board = gen.generate(GameConfig::new_unchecked(3, 3, 8), Some((1, 1)));
            assert!(!board.cell((1, 1)).is_mine, "seed {seed}");
            assert_eq!(board.mine_count(), 8);
        }
    }

    #[test]
    fn clamps_when_request_exceeds_candidates() {
        let mut gen = RandomBoardGenerator::from_seed(7);
        let board = gen.generate(GameConfig::new_unchecked(2, 2, 100), Some((0, 0)));
        // 4 cells minus the exclusion
        assert_eq!(board.mine_count(), 3);
        assert!(!board.cell((0, 0)).is_mine);
    }

    #[test]
    fn fills_the_whole_board_without_exclusion() {
        let mut gen = RandomBoardGenerator::from_seed(7);
        let board = gen.generate(GameConfig::new_unchecked(2, 2, 100), None);
        assert_eq!(board.mine_count(), 4);
    }

    #[test]
    fn out_of_range_exclusion_means_no_exclusion() {
        let mut gen = RandomBoardGenerator::from_seed(7);
        let board = gen.generate(GameConfig::new_unchecked(2, 2, 4), Some((200, 200)));
        assert_eq!(board.mine_count(), 4);
    }

    #[test]
    fn neighbor_counts_match_a_brute_force_recount() {
        let mut gen = RandomBoardGenerator::from_seed(42);
        let board = gen.generate(GameConfig::new_unchecked(9, 7, 12), Some((4, 3)));
        let size = board.size();
        for x in 0..size.0 {
            for y in 0..size.1 {
                let cell = board.cell((x, y));
                if cell.is_mine {
                    continue;
                }
                let expected = neighbors((x, y), size)
                    .filter(|&pos| board.cell(pos).is_mine)
                    .count() as u8;
                assert_eq!(cell.neighbor_mines, expected, "at {:?}", (x, y));
            }
        }
    }

    #[test]
    fn mine_count_totals_are_consistent() {
        let mut gen = RandomBoardGenerator::from_seed(3);
        let board = gen.generate(GameConfig::new_unchecked(16, 16, 40), None);
        let counted: CellCount = (0..16)
            .flat_map(|x| (0..16).map(move |y| (x, y)))
            .filter(|&pos| board.cell(pos).is_mine)
            .count() as CellCount;
        assert_eq!(counted, 40);
        assert_eq!(board.safe_cell_count(), 216);
    }
}
