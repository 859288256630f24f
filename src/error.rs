use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfRange,
    #[error("Invalid board configuration")]
    InvalidConfig,
}

pub type Result<T> = std::result::Result<T, GameError>;
