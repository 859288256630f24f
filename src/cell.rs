use serde::{Deserialize, Serialize};

/// One board position as both the player and the engine see it.
///
/// `neighbor_mines` is only meaningful when `is_mine` is false; it always
/// holds the exact mine count of the up-to-8 adjacent cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub neighbor_mines: u8,
}

impl Cell {
    /// Whether a reveal would act on this cell at all. Revealed cells are
    /// done, flagged cells are protected until unflagged.
    pub const fn can_reveal(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }
}
