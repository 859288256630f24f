use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::types::{area, CellCount, Coord};

/// Board dimensions plus the requested mine budget.
///
/// The budget is a request: generation may place fewer mines when the board
/// cannot hold them, and the board reports what was actually placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const MIN_SIDE: Coord = 2;
    pub const MAX_SIDE: Coord = 100;

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Player-entered configuration, checked against the custom-game policy:
    /// side lengths in `[2, 100]`, at least one mine, and mine density capped
    /// at a third of the board. The cap is a usability policy for the config
    /// boundary, not an invariant the engine itself relies on.
    pub fn custom(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let side_ok =
            |side: Coord| (Self::MIN_SIDE..=Self::MAX_SIDE).contains(&side);
        if !side_ok(rows) || !side_ok(cols) {
            return Err(GameError::InvalidConfig);
        }
        if mines < 1 || mines > Self::max_mines(rows, cols) {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    /// Largest mine count the custom-game policy allows: `floor(rows*cols*0.33)`.
    pub fn max_mines(rows: Coord, cols: Coord) -> CellCount {
        (f64::from(area(rows, cols)) * 0.33).floor() as CellCount
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    /// The board a fresh session starts with before any difficulty is picked.
    fn default() -> Self {
        Self::new_unchecked(10, 10, 10)
    }
}

/// Difficulty presets offered by the config boundary, plus free-form custom
/// games. Serializable so a caller can persist the last-used choice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Intermediate,
    Expert,
    Custom(GameConfig),
}

impl Difficulty {
    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Easy => GameConfig::new_unchecked(8, 8, 10),
            Intermediate => GameConfig::new_unchecked(16, 16, 40),
            Expert => GameConfig::new_unchecked(16, 32, 99),
            Custom(config) => config,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_configs() {
        assert_eq!(
            Difficulty::Easy.config(),
            GameConfig::new_unchecked(8, 8, 10)
        );
        assert_eq!(
            Difficulty::Intermediate.config(),
            GameConfig::new_unchecked(16, 16, 40)
        );
        assert_eq!(
            Difficulty::Expert.config(),
            GameConfig::new_unchecked(16, 32, 99)
        );
    }

    #[test]
    fn custom_accepts_in_policy_values() {
        let config = GameConfig::custom(5, 5, 8).unwrap();
        assert_eq!(config.mines, 8);
        assert_eq!(config.total_cells(), 25);
    }

    #[test]
    fn custom_rejects_mines_above_density_cap() {
        // floor(5 * 5 * 0.33) = 8, so 9 mines must be rejected
        assert_eq!(GameConfig::custom(5, 5, 9), Err(GameError::InvalidConfig));
    }

    #[test]
    fn custom_rejects_out_of_range_sides() {
        assert_eq!(GameConfig::custom(1, 5, 1), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::custom(5, 101, 1), Err(GameError::InvalidConfig));
    }

    #[test]
    fn custom_rejects_zero_mines() {
        assert_eq!(GameConfig::custom(5, 5, 0), Err(GameError::InvalidConfig));
    }

    #[test]
    fn custom_allows_largest_board() {
        let config = GameConfig::custom(100, 100, 3300).unwrap();
        assert_eq!(config.total_cells(), 10_000);
    }
}
