//! Static evaluation of Connect-M positions
//!
//! A position is scored from the computer's point of view by looking at every
//! window of `win_length` cells along rows, columns and both diagonals. Windows
//! holding disks of only one player are worth `10^count` to that player, so
//! near-complete lines dominate the total.

use crate::board::{Board, Cell, Player, DIRECTIONS};

/// Signed evaluation score, positive favours the computer
pub type Score = i64;

/// Weight base of a window: `BASE^count` for `count` disks of one player
pub const BASE: Score = 10;

/// Number of windows of length `win_length` on a `size`x`size` board
pub const fn segment_count(size: usize, win_length: usize) -> usize {
    let span = size - win_length + 1;
    // rows and columns, then both diagonal directions
    2 * size * span + 2 * span * span
}

/// The score of a won position, or `None` if it does not fit in a [`Score`]
///
/// A window in a position nobody has won holds at most `win_length - 1` disks
/// of one player, so the sum over all windows is bounded by
/// `segment_count * BASE^(win_length - 1)`. The win score sits one above that.
pub const fn checked_win_score(size: usize, win_length: usize) -> Option<Score> {
    let weight = match BASE.checked_pow(win_length as u32 - 1) {
        Some(weight) => weight,
        None => return None,
    };
    match (segment_count(size, win_length) as Score).checked_mul(weight) {
        Some(bound) => bound.checked_add(1),
        None => None,
    }
}

/// The score of a won position
///
/// Saturates on dimensions [`checked_win_score`] rejects, which
/// [`Board::new`](crate::board::Board::new) never accepts.
pub const fn win_score(size: usize, win_length: usize) -> Score {
    match checked_win_score(size, win_length) {
        Some(score) => score,
        None => Score::MAX,
    }
}

fn segment_score(computer: usize, human: usize) -> Score {
    match (computer, human) {
        (0, 0) => 0,
        (c, 0) => BASE.saturating_pow(c as u32),
        (0, h) => -BASE.saturating_pow(h as u32),
        _ => 0,
    }
}

/// Scores `board` from the computer's perspective
pub fn evaluate(board: &Board) -> Score {
    let won = win_score(board.size(), board.win_length());
    if board.check_win(Player::Computer) {
        return won;
    }
    if board.check_win(Player::Human) {
        return -won;
    }

    let size = board.size() as isize;
    let length = board.win_length() as isize;
    let mut score: Score = 0;

    for &(dy, dx) in DIRECTIONS.iter() {
        for row in 0..size {
            for column in 0..size {
                let (end_y, end_x) = (row + dy * (length - 1), column + dx * (length - 1));
                if end_y < 0 || end_y >= size || end_x < 0 || end_x >= size {
                    continue;
                }
                let (mut computer, mut human) = (0, 0);
                for i in 0..length {
                    match board.cell((row + dy * i) as usize, (column + dx * i) as usize) {
                        Cell::Computer => computer += 1,
                        Cell::Human => human += 1,
                        Cell::Empty => {}
                    }
                }
                score = score.saturating_add(segment_score(computer, human));
            }
        }
    }
    score
}

/// Scores `board` from `player`'s perspective
pub fn evaluate_for(board: &Board, player: Player) -> Score {
    match player {
        Player::Computer => evaluate(board),
        Player::Human => -evaluate(board),
    }
}
