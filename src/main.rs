use anyhow::Result;
use clap::Parser;
use log::info;

use std::io::{stdin, stdout, Write};

use connect_m_ai::{
    board::{BoardError, GameState, Player},
    config::GameConfig,
    search::Search,
    DEFAULT_DEPTH,
};

mod display;
use display::display;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Connect-M against the computer", long_about = None)]
struct Args {
    /// Number of rows and columns of the board (3-10)
    #[arg(value_name = "N")]
    size: usize,

    /// Number of disks in a line needed to win (2-N)
    #[arg(value_name = "M")]
    win_length: usize,

    /// 1 if the human moves first, 0 if the computer does
    #[arg(value_name = "H")]
    human_first: usize,

    /// How many moves ahead the computer looks
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = match GameConfig::from_flags(args.size, args.win_length, args.human_first) {
        Ok(config) => config.with_depth(args.depth),
        Err(err) => {
            println!("{}", err);
            std::process::exit(1);
        }
    };
    if let Err(err) = config.validate() {
        println!("{}", err);
        std::process::exit(1);
    }
    info!("starting game with {:?}", config);

    let mut board = config.board()?;
    let mut search = Search::new(config.depth);
    let stdin = stdin();

    println!("Welcome to Connect {}\n", config.win_length);

    // game loop
    loop {
        display(&board)?;

        match board.state() {
            GameState::Playing => {}
            GameState::HumanWin => {
                println!("Human wins!");
                break;
            }
            GameState::ComputerWin => {
                println!("Computer wins!");
                break;
            }
            GameState::Draw => {
                println!("The game is a draw.");
                break;
            }
        }

        match board.active_player() {
            Player::Human => {
                print!("Enter column (1-{}): ", board.size());
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    // stdin closed, nobody is left to play
                    println!("\nNo more input. Ending the game.");
                    break;
                }

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column) => column,
                    Err(_) => {
                        println!("Invalid input. Please enter a number.");
                        continue;
                    }
                };
                if column < 1 {
                    println!("Column out of range.");
                    continue;
                }

                if let Err(err) = board.apply_move(column - 1, Player::Human) {
                    if !err.is_illegal_move() {
                        return Err(err.into());
                    }
                    match err {
                        BoardError::ColumnFull(_) => {
                            println!("Column is full. Choose another column.")
                        }
                        _ => println!("Column out of range."),
                    }
                    continue;
                }
            }
            Player::Computer => {
                println!("Computer is thinking...");
                stdout().flush()?;

                let outcome = search.select_move(&mut board)?;
                match outcome.best_move {
                    Some(column) => {
                        board.apply_move(column, Player::Computer)?;
                        println!("Computer places disk in column {}", column + 1);
                    }
                    None => {
                        println!("No valid moves available. The game is a draw.");
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
