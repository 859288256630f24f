use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{GameError, Result};
use crate::types::{neighbors, CellCount, Coord2, ToNdIndex};

/// A fully generated minefield: every cell carries its mine flag and its
/// precomputed neighbor-mine count.
///
/// `mine_count` is the number of mines actually present in the grid, which
/// may be lower than the count a caller requested (see the generator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Finalizes a grid whose mines are already placed: recounts them and
    /// fills in `neighbor_mines` for every non-mine cell.
    pub(crate) fn from_grid(mut grid: Array2<Cell>) -> Self {
        let size = size_of(&grid);
        for x in 0..size.0 {
            for y in 0..size.1 {
                if grid[(x, y).to_nd_index()].is_mine {
                    continue;
                }
                let count = neighbors((x, y), size)
                    .filter(|&pos| grid[pos.to_nd_index()].is_mine)
                    .count();
                grid[(x, y).to_nd_index()].neighbor_mines =
                    count.try_into().expect("at most 8 neighbors");
            }
        }
        let mine_count = grid
            .iter()
            .filter(|cell| cell.is_mine)
            .count()
            .try_into()
            .expect("cell count fits the count type");
        Self { grid, mine_count }
    }

    /// Builds a board with mines at exactly the given coordinates. Mainly
    /// useful for tests and replays of known layouts.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid: Array2<Cell> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfRange);
            }
            grid[coords.to_nd_index()].is_mine = true;
        }
        Ok(Self::from_grid(grid))
    }

    pub fn size(&self) -> Coord2 {
        size_of(&self.grid)
    }

    /// Mines actually placed on this board.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid
            .len()
            .try_into()
            .expect("cell count fits the count type")
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub(crate) fn revealed_cell_count(&self) -> CellCount {
        self.grid
            .iter()
            .filter(|cell| cell.is_revealed)
            .count()
            .try_into()
            .expect("cell count fits the count type")
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.grid[coords.to_nd_index()]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> {
        neighbors(coords, self.size())
    }
}

fn size_of(grid: &Array2<Cell>) -> Coord2 {
    let dim = grid.dim();
    (
        dim.0.try_into().expect("side length fits the coord type"),
        dim.1.try_into().expect("side length fits the coord type"),
    )
}
