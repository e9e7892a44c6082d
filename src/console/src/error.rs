use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before a move was chosen")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, GameError>;
