use thiserror::Error;

use crate::evaluator::checked_win_score;

use std::fmt;

/// The four line directions as (row step, column step): horizontal, vertical,
/// main diagonal (top-left to bottom-right) and anti-diagonal
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Errors raised by board operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid move, column {column} out of range. Columns must be between 0 and {max}")]
    ColumnOutOfRange { column: usize, max: usize },
    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),
    #[error("cannot undo a move in column {0}, the column is empty")]
    UndoEmptyColumn(usize),
    #[error("invalid board dimensions {size}x{size} with win length {win_length}")]
    InvalidDimensions { size: usize, win_length: usize },
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

impl BoardError {
    /// True for errors a player can recover from by choosing another column
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            BoardError::ColumnOutOfRange { .. } | BoardError::ColumnFull(_)
        )
    }

    /// True for apply/undo imbalances, which are programmer errors
    pub fn is_internal_consistency(&self) -> bool {
        matches!(self, BoardError::UndoEmptyColumn(_))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }

    fn swapped(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Human => Cell::Computer,
            Cell::Computer => Cell::Human,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    HumanWin,
    ComputerWin,
    Draw,
}

/// A square Connect-M board with gravity
///
/// Cells are stored row-major with row 0 at the top, so a disk dropped into
/// column `c` lands at row `size - 1 - heights[c]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
    active_player: Player,
    num_moves: usize,
}

impl Board {
    /// Creates an empty board with the human to move
    ///
    /// Dimensions whose win score would overflow an `i64` are rejected, since a
    /// saturated win score can no longer be told apart from a heuristic total.
    pub fn new(size: usize, win_length: usize) -> Result<Self, BoardError> {
        if size < 2 || win_length < 2 || win_length > size {
            return Err(BoardError::InvalidDimensions { size, win_length });
        }
        if checked_win_score(size, win_length).is_none() {
            return Err(BoardError::InvalidDimensions { size, win_length });
        }
        Ok(Self {
            size,
            win_length,
            cells: vec![Cell::Empty; size * size],
            heights: vec![0; size],
            active_player: Player::Human,
            num_moves: 0,
        })
    }

    /// Sets the side to move on a fresh board
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.active_player = player;
        self
    }

    /// Builds a board by playing a string of 0-indexed column digits,
    /// alternating players starting with the human
    pub fn from_moves<S: AsRef<str>>(
        size: usize,
        win_length: usize,
        moves: S,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(size, win_length)?;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let player = board.active_player;
                    board.apply_move(column as usize, player)?;
                }
                None => {
                    return Err(BoardError::InvalidPosition(format!(
                        "could not parse '{}' as a valid move",
                        column_char
                    )))
                }
            }
        }
        Ok(board)
    }

    /// Builds a board from text rows, top row first, using `X` for the human,
    /// `O` for the computer and `.` for empty cells
    ///
    /// The side with fewer disks is to move, the human on a tie.
    pub fn from_rows(win_length: usize, rows: &[&str]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut board = Self::new(size, win_length)?;

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != size {
                return Err(BoardError::InvalidPosition(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    size
                )));
            }
            for (column, symbol) in symbols.into_iter().enumerate() {
                board.cells[row * size + column] = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::Human,
                    'O' | 'o' => Cell::Computer,
                    other => {
                        return Err(BoardError::InvalidPosition(format!(
                            "unknown cell symbol '{}'",
                            other
                        )))
                    }
                };
            }
        }

        let mut humans = 0;
        let mut computers = 0;
        for column in 0..size {
            let mut height = 0;
            for row in (0..size).rev() {
                match board.cell(row, column) {
                    Cell::Empty => break,
                    Cell::Human => humans += 1,
                    Cell::Computer => computers += 1,
                }
                height += 1;
            }
            // everything above the first empty cell must be empty too
            if (0..size - height).any(|row| !board.cell(row, column).is_empty()) {
                return Err(BoardError::InvalidPosition(format!(
                    "floating disk in column {}",
                    column
                )));
            }
            board.heights[column] = height;
        }

        board.num_moves = humans + computers;
        board.active_player = if computers < humans {
            Player::Computer
        } else {
            Player::Human
        };
        Ok(board)
    }

    /// Returns the same position with the owner of every disk exchanged
    pub fn swapped(&self) -> Self {
        let mut board = self.clone();
        for cell in board.cells.iter_mut() {
            *cell = cell.swapped();
        }
        board.active_player = self.active_player.opponent();
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.size + column]
    }

    pub fn playable(&self, column: usize) -> bool {
        column < self.size && self.heights[column] < self.size
    }

    /// Columns that can still take a disk, in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.size).filter(|&column| self.playable(column)).collect()
    }

    /// Drops a disk for `player` into `column`, returning the row it lands on
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<usize, BoardError> {
        if column >= self.size {
            return Err(BoardError::ColumnOutOfRange {
                column,
                max: self.size - 1,
            });
        }
        if !self.playable(column) {
            return Err(BoardError::ColumnFull(column));
        }
        let row = self.size - 1 - self.heights[column];
        self.cells[row * self.size + column] = player.cell();
        self.heights[column] += 1;
        self.num_moves += 1;
        self.active_player = self.active_player.opponent();
        Ok(row)
    }

    /// Removes the topmost disk of `column`
    pub fn undo_move(&mut self, column: usize) -> Result<(), BoardError> {
        if column >= self.size || self.heights[column] == 0 {
            return Err(BoardError::UndoEmptyColumn(column));
        }
        let row = self.size - self.heights[column];
        self.cells[row * self.size + column] = Cell::Empty;
        self.heights[column] -= 1;
        self.num_moves -= 1;
        self.active_player = self.active_player.opponent();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height == self.size)
    }

    /// Scans the whole grid for a run of at least `win_length` disks of `player`
    pub fn check_win(&self, player: Player) -> bool {
        let target = player.cell();
        let size = self.size as isize;

        for row in 0..size {
            for column in 0..size {
                if self.cells[(row * size + column) as usize] != target {
                    continue;
                }
                for &(dy, dx) in DIRECTIONS.iter() {
                    // only count from the start of a run
                    let (prev_y, prev_x) = (row - dy, column - dx);
                    if self.in_bounds(prev_y, prev_x)
                        && self.cells[(prev_y * size + prev_x) as usize] == target
                    {
                        continue;
                    }
                    let mut run = 1;
                    let (mut y, mut x) = (row + dy, column + dx);
                    while self.in_bounds(y, x) && self.cells[(y * size + x) as usize] == target {
                        run += 1;
                        if run >= self.win_length {
                            return true;
                        }
                        y += dy;
                        x += dx;
                    }
                }
            }
        }
        false
    }

    pub fn winner(&self) -> Option<Player> {
        if self.check_win(Player::Computer) {
            Some(Player::Computer)
        } else if self.check_win(Player::Human) {
            Some(Player::Human)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.check_win(Player::Computer) || self.check_win(Player::Human) || self.is_full()
    }

    pub fn state(&self) -> GameState {
        match self.winner() {
            Some(Player::Computer) => GameState::ComputerWin,
            Some(Player::Human) => GameState::HumanWin,
            None if self.is_full() => GameState::Draw,
            None => GameState::Playing,
        }
    }

    fn in_bounds(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && row < self.size as isize && column < self.size as isize
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|column| self.cell(row, column).symbol())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
