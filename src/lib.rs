//! Minesweeper board generation and gameplay rules.
//!
//! Two collaborating pieces: a [`BoardGenerator`] that places mines (with an
//! optional first-click exclusion) and precomputes neighbor counts, and a
//! [`Game`] state machine that applies reveal/flag/chord transitions to the
//! board it owns. The crate does no I/O and holds no global state; a UI
//! layer drives it through the transition methods and renders from the
//! returned board.

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod game;
mod generator;
mod types;
