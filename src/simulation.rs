//! Engine-versus-engine games for comparing search depths
//!
//! Engine one plays the computer side and always moves first, engine two plays
//! the human side. Both engines are deterministic, so a single game per pairing
//! of depths is enough.

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use std::fmt;
use std::ops::RangeInclusive;

use crate::{
    board::{Board, GameState, Player},
    search::Search,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

/// Plays one game between two engines and returns the result
pub fn simulate_game(
    size: usize,
    win_length: usize,
    depth_one: usize,
    depth_two: usize,
) -> Result<Outcome> {
    let mut board = Board::new(size, win_length)?.with_first_player(Player::Computer);
    let mut first = Search::new(depth_one).playing_as(Player::Computer);
    let mut second = Search::new(depth_two).playing_as(Player::Human);

    loop {
        match board.state() {
            GameState::ComputerWin => return Ok(Outcome::FirstWins),
            GameState::HumanWin => return Ok(Outcome::SecondWins),
            GameState::Draw => return Ok(Outcome::Draw),
            GameState::Playing => {}
        }

        let player = board.active_player();
        let search = match player {
            Player::Computer => &mut first,
            Player::Human => &mut second,
        };
        let column = search
            .select_move(&mut board)?
            .best_move
            .ok_or_else(|| anyhow!("no move found in an unfinished game:\n{}", board))?;
        board.apply_move(column, player)?;
    }
}

/// Which board sizes and depths a sweep covers
///
/// Every board uses a win length equal to its size.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub sizes: RangeInclusive<usize>,
    pub depths: RangeInclusive<usize>,
    pub show_progress: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: 3..=6,
            depths: 1..=4,
            show_progress: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SweepCell {
    pub size: usize,
    pub depth_one: usize,
    pub depth_two: usize,
    pub outcome: Outcome,
}

/// Results of a sweep, ordered by size, then depth of engine one, then depth
/// of engine two
#[derive(Clone, Debug)]
pub struct SweepReport {
    pub depths: RangeInclusive<usize>,
    pub cells: Vec<SweepCell>,
}

impl SweepReport {
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.cells.iter().map(|cell| cell.size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    pub fn outcome(&self, size: usize, depth_one: usize, depth_two: usize) -> Option<Outcome> {
        self.cells
            .iter()
            .find(|cell| {
                cell.size == size && cell.depth_one == depth_one && cell.depth_two == depth_two
            })
            .map(|cell| cell.outcome)
    }

    pub fn draws(&self, size: usize) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.size == size && cell.outcome == Outcome::Draw)
            .count()
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for size in self.sizes() {
            writeln!(f, "{0}x{0} board (rows: engine 1 depth, columns: engine 2 depth)", size)?;
            write!(f, "   ")?;
            for depth_two in self.depths.clone() {
                write!(f, "{:>3}", depth_two)?;
            }
            writeln!(f)?;
            for depth_one in self.depths.clone() {
                write!(f, "{:>3}", depth_one)?;
                for depth_two in self.depths.clone() {
                    let symbol = match self.outcome(size, depth_one, depth_two) {
                        Some(Outcome::FirstWins) => "1",
                        Some(Outcome::SecondWins) => "2",
                        Some(Outcome::Draw) => "D",
                        None => "-",
                    };
                    write!(f, "{:>3}", symbol)?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Total draws by board size")?;
        for size in self.sizes() {
            writeln!(f, "{0}x{0}: {1}", size, self.draws(size))?;
        }
        Ok(())
    }
}

/// Plays every pairing of depths on every board size, in parallel
pub fn run_sweep(config: &SweepConfig) -> Result<SweepReport> {
    let mut jobs = Vec::new();
    for size in config.sizes.clone() {
        for depth_one in config.depths.clone() {
            for depth_two in config.depths.clone() {
                jobs.push((size, depth_one, depth_two));
            }
        }
    }

    let progress = if config.show_progress {
        ProgressBar::new(jobs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Simulating games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let cells = jobs
        .par_iter()
        .map(|&(size, depth_one, depth_two)| {
            let outcome = simulate_game(size, size, depth_one, depth_two)?;
            info!(
                "Board: {0}x{0}, Depths: {1} vs {2}, Outcome: {3:?}",
                size, depth_one, depth_two, outcome
            );
            progress.inc(1);
            Ok(SweepCell {
                size,
                depth_one,
                depth_two,
                outcome,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish();

    Ok(SweepReport {
        depths: config.depths.clone(),
        cells,
    })
}
