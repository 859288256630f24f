/// Linear dimension, used for individual coordinates and board width/height.
pub type Coord = u8;

/// Area dimension, used for mine/cell counts.
pub type CellCount = u16;

/// Shorthand for a position or size as `(x, y)` = (row, column).
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the in-bounds 8-neighborhood of `center` on a `bounds`-sized grid.
/// Corner and edge cells yield fewer than 8 positions.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.into_iter().filter_map(move |(dx, dy)| {
        let x = center.0.checked_add_signed(dx)?;
        let y = center.1.checked_add_signed(dy)?;
        (x < bounds.0 && y < bounds.1).then_some((x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_of_interior_cell() {
        let mut found: Vec<Coord2> = neighbors((1, 1), (3, 3)).collect();
        found.sort_unstable();
        let expected = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        assert_eq!(found, expected);
    }

    #[test]
    fn neighbors_of_corner_cell() {
        let mut found: Vec<Coord2> = neighbors((0, 0), (3, 3)).collect();
        found.sort_unstable();
        assert_eq!(found, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn neighbors_of_edge_cell() {
        assert_eq!(neighbors((0, 1), (3, 3)).count(), 5);
    }

    #[test]
    fn neighbors_of_single_cell_grid_is_empty() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn area_covers_the_largest_board() {
        assert_eq!(area(100, 100), 10_000);
        assert_eq!(area(255, 255), 65_025);
    }
}
