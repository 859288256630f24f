use std::collections::VecDeque;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Result;
use crate::generator::{BoardGenerator, RandomBoardGenerator};
use crate::types::{CellCount, Coord, Coord2};

/// Outcome of a flag toggle. Reporting the flip direction lets a caller keep
/// a remaining-flags counter without re-scanning the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of revealing one or more cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Merges per-cell outcomes when a chord reveals several cells at once.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (Exploded, _) | (_, Exploded) => Exploded,
            (Won, _) | (_, Won) => Won,
            (Revealed, _) | (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// A game session: one owned board plus the derived status flags.
///
/// Behaviorally a four-state machine (idle / in progress / won / lost)
/// encoded in the `game_over`/`success` pair. All transitions mutate in
/// place; `start` and `reset` replace the board wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    revealed_count: CellCount,
    game_over: bool,
    success: bool,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let revealed_count = board.revealed_cell_count();
        Self {
            board,
            revealed_count,
            game_over: false,
            success: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True on loss or win.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True only on win.
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    /// Mines actually placed on the current board. May be lower than what
    /// the last `start` requested; callers must read this back instead of
    /// assuming the request was honored.
    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Replaces the board with a fresh layout and clears the status flags.
    /// Allowed from any state. `first_click` is excluded from mine
    /// placement so the first reveal can never detonate.
    pub fn start(
        &mut self,
        config: GameConfig,
        first_click: Option<Coord2>,
        generator: &mut impl BoardGenerator,
    ) {
        self.board = generator.generate(config, first_click);
        self.revealed_count = 0;
        self.game_over = false;
        self.success = false;
        log::debug!(
            "new {}x{} game, {} mines placed",
            config.rows,
            config.cols,
            self.board.mine_count()
        );
    }

    /// Like `start`, but reuses the current board's mine count as the budget
    /// for the new dimensions.
    pub fn reset(
        &mut self,
        rows: Coord,
        cols: Coord,
        first_click: Option<Coord2>,
        generator: &mut impl BoardGenerator,
    ) {
        let config = GameConfig::new_unchecked(rows, cols, self.board.mine_count());
        self.start(config, first_click, generator);
    }

    /// Reveals a cell. Revealed and flagged cells are left alone, as is the
    /// whole board once the game has ended. Revealing a zero-count cell
    /// opens its entire connected safe region; revealing a mine ends the
    /// game and uncovers everything.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.game_over || !self.board.cell(coords).can_reveal() {
            return Ok(RevealOutcome::NoChange);
        }
        Ok(self.reveal_cell(coords))
    }

    /// Chord reveal: when `coords` is already revealed, reveals every
    /// unflagged hidden neighbor in one batch, merging the per-cell
    /// outcomes. A mine among those neighbors loses the game exactly as a
    /// direct reveal would. There is no flagged-count precondition.
    pub fn area_open(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.game_over || !self.board.cell(coords).is_revealed {
            return Ok(RevealOutcome::NoChange);
        }

        let neighbors: Vec<Coord2> = self.board.iter_neighbors(coords).collect();
        let mut outcome = RevealOutcome::NoChange;
        for pos in neighbors {
            if self.board.cell(pos).can_reveal() {
                outcome = outcome | self.reveal_cell(pos);
            }
        }
        Ok(outcome)
    }

    /// Flips the flag on an unrevealed cell. No flag budget is enforced: a
    /// player may flag more cells than there are mines.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.game_over {
            return Ok(FlagOutcome::NoChange);
        }
        let cell = self.board.cell_mut(coords);
        if cell.is_revealed {
            return Ok(FlagOutcome::NoChange);
        }
        cell.is_flagged = !cell.is_flagged;
        Ok(if cell.is_flagged {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        })
    }

    /// Reveals a single hidden, unflagged cell and applies the follow-up
    /// rules: flood fill on zero counts, loss on a mine, win check after.
    fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.board.cell(coords).is_mine {
            self.explode(coords);
            return RevealOutcome::Exploded;
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.board.safe_cell_count() {
            self.game_over = true;
            self.success = true;
            log::debug!("all safe cells revealed, game won");
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Queue-based flood fill: reveals `start` and, through zero-count
    /// cells, the whole connected safe region plus its numbered border.
    /// Iterative on purpose; call recursion would be bounded only by the
    /// board area (10,000 cells at the 100x100 maximum).
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.board.cell(coords);
            // the revealed flag doubles as the visited mark
            if !cell.can_reveal() {
                continue;
            }

            self.board.cell_mut(coords).is_revealed = true;
            self.revealed_count += 1;
            log::trace!("revealed {:?}, neighbor mines: {}", coords, cell.neighbor_mines);

            if cell.neighbor_mines == 0 {
                to_visit.extend(self.board.iter_neighbors(coords).filter(|&pos| {
                    let neighbor = self.board.cell(pos);
                    !neighbor.is_mine && neighbor.can_reveal()
                }));
            }
        }
    }

    /// Loss transition: uncovers every cell on the board. Flags on mines
    /// stay put; flags on safe cells were wrong and are removed.
    fn explode(&mut self, triggered: Coord2) {
        let (rows, cols) = self.board.size();
        for x in 0..rows {
            for y in 0..cols {
                let cell = self.board.cell_mut((x, y));
                cell.is_revealed = true;
                if cell.is_flagged && !cell.is_mine {
                    cell.is_flagged = false;
                }
            }
        }
        self.revealed_count = self.board.total_cells();
        self.game_over = true;
        self.success = false;
        log::debug!("mine triggered at {:?}, game lost", triggered);
    }
}

impl Default for Game {
    /// A fresh session: default 10x10 board with 10 mines, no exclusion.
    fn default() -> Self {
        let mut generator = RandomBoardGenerator::from_entropy();
        Self::new(generator.generate(GameConfig::default(), None))
    }
}
