//! A computer opponent for Connect-M, the game of Connect 4 generalised to
//! an N×N board where M disks in a line win
//!
//! The agent looks a fixed number of moves ahead with minimax search and
//! alpha-beta pruning, scoring the positions at the search horizon with a
//! heuristic that favours nearly complete lines.
//!
//! # Basic Usage
//!
//! ```
//! use connect_m_ai::{board::{Board, Player}, search::select_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_rows(3, &[
//!     "...",
//!     "XX.",
//!     "OO.",
//! ])?;
//! let outcome = select_move(&mut board, 4)?;
//!
//! assert_eq!(outcome.best_move, Some(2));
//! board.apply_move(2, Player::Computer)?;
//! assert!(board.check_win(Player::Computer));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluator;

pub mod search;

pub mod config;

pub mod simulation;


/// The smallest board size accepted by the game driver
pub const MIN_BOARD_SIZE: usize = 3;

/// The largest board size accepted by the game driver
pub const MAX_BOARD_SIZE: usize = 10;

/// The shortest line that can win a game
pub const MIN_WIN_LENGTH: usize = 2;

/// How many plies the computer looks ahead unless configured otherwise
pub const DEFAULT_DEPTH: usize = 4;

const fn largest_win_score() -> evaluator::Score {
    let mut largest = 0;
    let mut size = MIN_BOARD_SIZE;
    while size <= MAX_BOARD_SIZE {
        let mut win_length = MIN_WIN_LENGTH;
        while win_length <= size {
            let score = evaluator::win_score(size, win_length);
            if score > largest {
                largest = score;
            }
            win_length += 1;
        }
        size += 1;
    }
    largest
}

const_assert!(MIN_BOARD_SIZE >= MIN_WIN_LENGTH);
const_assert!(MIN_BOARD_SIZE <= MAX_BOARD_SIZE);
// scores on every supported board stay clear of saturation
const_assert!(largest_win_score() < evaluator::Score::MAX / 2);
