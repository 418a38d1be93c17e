use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect_m_ai::board::{Board, Cell};

/// Draws the board with 1-based column labels on top and row labels on the left
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();
    let border = format!("   +{}\n", "---+".repeat(board.size()));

    let labels: String = (1..=board.size()).map(|x| format!("{:^4}", x)).collect();
    stdout.queue(PrintStyledContent(style(format!("    {}\n", labels.trim_end()))))?;
    stdout.queue(PrintStyledContent(style(border.clone())))?;

    for row in 0..board.size() {
        stdout.queue(PrintStyledContent(style(format!("{:>2} |", row + 1))))?;
        for column in 0..board.size() {
            let cell = board.cell(row, column);
            let symbol = match cell {
                Cell::Empty => ' ',
                other => other.symbol(),
            };
            stdout
                .queue(PrintStyledContent(style(" ")))?
                .queue(PrintStyledContent(
                    style(symbol)
                        .attribute(Attribute::Bold)
                        .with(match cell {
                            Cell::Human => Color::Red,
                            Cell::Computer => Color::Yellow,
                            Cell::Empty => Color::Reset,
                        }),
                ))?
                .queue(PrintStyledContent(style(" |")))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
        stdout.queue(PrintStyledContent(style(border.clone())))?;
    }
    stdout.flush()?;
    Ok(())
}
