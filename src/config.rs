use thiserror::Error;

use crate::{
    board::{Board, BoardError, Player},
    DEFAULT_DEPTH, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_WIN_LENGTH,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size N must be between {} and {}.", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    BoardSize(usize),
    #[error("Parameter M must be higher than 1 and no higher than N.")]
    WinLength(usize),
    #[error("Parameter H must be 0 or 1.")]
    FirstPlayer(usize),
    #[error("Search depth must be at least 1.")]
    Depth(usize),
}

/// The parameters of one human-versus-computer game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub win_length: usize,
    pub human_first: bool,
    pub depth: usize,
}

impl GameConfig {
    pub fn new(size: usize, win_length: usize, human_first: bool) -> Self {
        Self {
            size,
            win_length,
            human_first,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Builds a configuration from the driver's `N M H` arguments, where `H`
    /// is 1 when the human moves first and 0 when the computer does
    pub fn from_flags(
        size: usize,
        win_length: usize,
        human_first: usize,
    ) -> Result<Self, ConfigError> {
        match human_first {
            0 => Ok(Self::new(size, win_length, false)),
            1 => Ok(Self::new(size, win_length, true)),
            other => Err(ConfigError::FirstPlayer(other)),
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE || self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize(self.size));
        }
        if self.win_length < MIN_WIN_LENGTH || self.win_length > self.size {
            return Err(ConfigError::WinLength(self.win_length));
        }
        if self.depth == 0 {
            return Err(ConfigError::Depth(self.depth));
        }
        Ok(())
    }

    pub fn first_player(&self) -> Player {
        if self.human_first {
            Player::Human
        } else {
            Player::Computer
        }
    }

    /// Creates the empty board this configuration describes
    pub fn board(&self) -> Result<Board, BoardError> {
        Ok(Board::new(self.size, self.win_length)?.with_first_player(self.first_player()))
    }
}
