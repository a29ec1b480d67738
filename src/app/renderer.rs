use std::io::{Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::level::{MAX_LEVEL, Tier};
use crate::maze::Cell;

use super::GameState;

/// Rows reserved above the maze for the title and below it for the help line.
const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 2;

/// Draws one full frame: title, maze with the player on top, status line.
pub fn draw(stdout: &mut Stdout, game: &GameState) -> std::io::Result<()> {
    let maze = &game.level().maze;
    let needed_width = maze.width() * Cell::CELL_WIDTH;
    let needed_height = maze.height() + HEADER_ROWS + FOOTER_ROWS;

    queue!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let (term_width, term_height) = terminal::size()?;
    if term_width < needed_width || term_height < needed_height {
        let msg = format!(
            "Terminal is too small ({}x{}); need at least {}x{}. Please resize.\r\n",
            term_width, term_height, needed_width, needed_height
        );
        queue!(
            stdout,
            style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold))
        )?;
        return stdout.flush();
    }

    let tier = Tier::of_level(game.level().id);
    let title = format!(
        "🌀 Maze Adventure — Level {}/{} {}\r\n",
        game.level().id,
        MAX_LEVEL,
        tier.stars()
    );
    queue!(
        stdout,
        style::PrintStyledContent(title.with(Color::Cyan).attribute(Attribute::Bold))
    )?;

    for y in 0..maze.height() {
        queue!(stdout, cursor::MoveTo(0, y + HEADER_ROWS))?;
        for x in 0..maze.width() {
            if (x, y) == game.player() {
                queue!(stdout, style::Print("🤖"))?;
            } else {
                queue!(stdout, style::Print(maze[(x, y)]))?;
            }
        }
    }

    queue!(stdout, cursor::MoveTo(0, maze.height() + HEADER_ROWS + 1))?;
    if game.won() {
        let msg = if game.level().id == MAX_LEVEL {
            "🏆 You beat every level! Enter plays again from the start."
        } else {
            "🎉 You found the gold! Press Enter for the next level."
        };
        queue!(
            stdout,
            style::PrintStyledContent(msg.with(Color::Green).attribute(Attribute::Bold))
        )?;
    } else {
        queue!(
            stdout,
            style::PrintStyledContent(
                "Arrow keys move · r restarts · Esc quits".with(Color::Grey)
            )
        )?;
    }

    stdout.flush()
}
