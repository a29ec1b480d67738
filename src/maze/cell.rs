use crossterm::style::{Color, Stylize};

use std::fmt;

/// A single cell of the maze grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Solid cell; blocks movement.
    #[default]
    Wall,
    /// Open cell the player can walk on.
    Path,
    /// The player's starting cell.
    Start,
    /// The cell that completes the level when reached.
    Goal,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether the player may stand on this cell.
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "🟫".with(Color::DarkYellow),
            Cell::Path => "🟩".with(Color::Green),
            Cell::Start => "🟦".with(Color::Blue),
            Cell::Goal => "🟨".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
