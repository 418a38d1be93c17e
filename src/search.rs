//! Depth-limited minimax search with alpha-beta pruning

use log::{debug, trace};

use crate::{
    board::{Board, BoardError, Player},
    evaluator::{evaluate_for, Score},
};

use std::ops::{Deref, DerefMut};

/// The move picked by a search along with its score
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when the root was already terminal or the depth was zero
    pub best_move: Option<usize>,
    pub score: Score,
}

/// A move applied to a borrowed board, undone when the guard is dropped
///
/// Every exit from a search node (cutoffs and `?` included) passes through
/// `Drop`, so the board is always restored in stack order.
struct AppliedMove<'a> {
    board: &'a mut Board,
    column: usize,
}

impl<'a> AppliedMove<'a> {
    fn apply(board: &'a mut Board, column: usize, player: Player) -> Result<Self, BoardError> {
        board.apply_move(column, player)?;
        Ok(Self { board, column })
    }
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.board.undo_move(self.column) {
            // the guard placed this disk itself, so the column cannot be empty
            unreachable!("apply/undo imbalance: {}", err);
        }
    }
}

/// An alpha-beta searcher for one side of the game
///
/// # Notes
/// The searcher plays the computer unless told otherwise with
/// [`playing_as`](Search::playing_as). Scores are always reported from the
/// searching side's perspective, and moves are tried in ascending column order
/// so that the lowest column wins among equally scored moves.
#[derive(Clone, Debug)]
pub struct Search {
    depth: usize,
    player: Player,

    /// The number of nodes visited by this `Search` so far (for diagnostics only)
    pub node_count: usize,
}

impl Search {
    /// Creates a computer-side search looking `depth` plies ahead
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            player: Player::Computer,
            node_count: 0,
        }
    }

    /// Makes the search pick moves for `player` instead
    pub fn playing_as(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    /// Finds the best move for the searching side on `board`
    ///
    /// The board is handed back in exactly the state it was passed in.
    pub fn select_move(&mut self, board: &mut Board) -> Result<SearchOutcome, BoardError> {
        let start_nodes = self.node_count;
        self.node_count += 1;

        if self.depth == 0 || board.is_terminal() {
            return Ok(SearchOutcome {
                best_move: None,
                score: evaluate_for(board, self.player),
            });
        }

        let mut alpha = Score::MIN;
        let beta = Score::MAX;
        let mut best_score = Score::MIN;
        let mut best_move = None;

        for column in board.legal_moves() {
            let score = {
                let mut child = AppliedMove::apply(board, column, self.player)?;
                self.min_node(&mut child, alpha, beta, self.depth - 1)?
            };
            trace!("column {} scored {}", column, score);

            // strict comparison keeps the lowest column among ties
            if score > best_score {
                best_score = score;
                best_move = Some(column);
            }
            alpha = alpha.max(best_score);
        }

        debug!(
            "{} search at depth {} picked {:?} (score {}, {} nodes)",
            self.player,
            self.depth,
            best_move,
            best_score,
            self.node_count - start_nodes
        );

        Ok(SearchOutcome {
            best_move,
            score: best_score,
        })
    }

    fn max_node(
        &mut self,
        board: &mut Board,
        mut alpha: Score,
        beta: Score,
        depth: usize,
    ) -> Result<Score, BoardError> {
        self.node_count += 1;
        if depth == 0 || board.is_terminal() {
            return Ok(evaluate_for(board, self.player));
        }

        let mut value = Score::MIN;
        for column in board.legal_moves() {
            let score = {
                let mut child = AppliedMove::apply(board, column, self.player)?;
                self.min_node(&mut child, alpha, beta, depth - 1)?
            };
            value = value.max(score);
            // the opponent already has a better option elsewhere
            if value >= beta {
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    fn min_node(
        &mut self,
        board: &mut Board,
        alpha: Score,
        mut beta: Score,
        depth: usize,
    ) -> Result<Score, BoardError> {
        self.node_count += 1;
        if depth == 0 || board.is_terminal() {
            return Ok(evaluate_for(board, self.player));
        }

        let mut value = Score::MAX;
        for column in board.legal_moves() {
            let score = {
                let mut child = AppliedMove::apply(board, column, self.player.opponent())?;
                self.max_node(&mut child, alpha, beta, depth - 1)?
            };
            value = value.min(score);
            if value <= alpha {
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}

/// Picks the computer's move on `board` looking `depth` plies ahead
pub fn select_move(board: &mut Board, depth: usize) -> Result<SearchOutcome, BoardError> {
    Search::new(depth).select_move(board)
}
