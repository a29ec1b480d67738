//! Terminal front-end: raw-mode game loop, movement, and level flow.

mod renderer;

use std::io::{Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    terminal::{self, ClearType},
};

use crate::level::{Level, MAX_LEVEL};
use crate::maze::{Cell, Pos};
use crate::progress::Progress;

#[derive(Debug, Copy, Clone)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One level in play: the maze, where the player stands, and whether the
/// goal has been reached.
pub struct GameState {
    level: Level,
    player: Pos,
    won: bool,
}

impl GameState {
    pub fn new(level: Level) -> Self {
        let player = level.start;
        GameState {
            level,
            player,
            won: false,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Puts the player back on the start cell.
    pub fn restart(&mut self) {
        self.player = self.level.start;
        self.won = false;
    }

    /// Attempts to move the player one cell in the given direction.
    /// Returns the new position if the move is legal, `None` if it would
    /// leave the grid or run into a wall. Reaching the goal marks the game
    /// as won; further moves are ignored until the next level starts.
    pub fn move_player(&mut self, direction: Direction) -> Option<Pos> {
        if self.won {
            return None;
        }
        let (x, y) = self.player;
        let target = match direction {
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y.saturating_add(1)),
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => (x.saturating_add(1), y),
        };
        if !self.level.maze.is_in_bounds(target) {
            return None;
        }
        if self.level.maze[target] == Cell::Wall {
            tracing::debug!(?target, "move blocked by wall");
            return None;
        }

        self.player = target;
        if self.level.maze[target] == Cell::Goal {
            tracing::info!(level = self.level.id, "goal reached");
            self.won = true;
        }
        Some(target)
    }
}

/// The interactive game: owns the progress store and drives the level flow.
pub struct App {
    progress: Progress,
}

impl App {
    pub fn new(progress: Progress) -> Self {
        App { progress }
    }

    /// Set a panic hook to restore terminal state on panic, so the terminal
    /// is not left in raw mode or the alternate screen.
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen.
    /// Also sets a panic hook to restore terminal on panic.
    fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()
    }

    /// Restore terminal to original state: leave alternate screen and
    /// disable raw mode.
    fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()
    }

    /// Runs the game until the player quits. Progress is saved every time a
    /// level is completed.
    pub fn run(mut self) -> std::io::Result<()> {
        let mut stdout = std::io::stdout();
        App::setup_terminal(&mut stdout)?;
        let result = self.game_loop(&mut stdout);
        App::restore_terminal(&mut stdout)?;
        result
    }

    fn game_loop(&mut self, stdout: &mut Stdout) -> std::io::Result<()> {
        let first = self.progress.current_level.min(MAX_LEVEL);
        let mut game = GameState::new(Level::build(first).map_err(std::io::Error::other)?);
        tracing::info!(level = first, "game started");

        loop {
            renderer::draw(stdout, &game)?;

            let Event::Key(key) = event::read()? else {
                // Resize and the rest just trigger a redraw
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    tracing::info!("player quit");
                    return Ok(());
                }
                KeyCode::Up => self.handle_move(&mut game, Direction::Up),
                KeyCode::Down => self.handle_move(&mut game, Direction::Down),
                KeyCode::Left => self.handle_move(&mut game, Direction::Left),
                KeyCode::Right => self.handle_move(&mut game, Direction::Right),
                KeyCode::Char('r') => game.restart(),
                KeyCode::Enter if game.won() => {
                    let next = if game.level().id < MAX_LEVEL {
                        game.level().id + 1
                    } else {
                        1 // loop back to the first level after the last one
                    };
                    game = GameState::new(Level::build(next).map_err(std::io::Error::other)?);
                    tracing::info!(level = next, "level started");
                }
                _ => {}
            }
        }
    }

    fn handle_move(&mut self, game: &mut GameState, direction: Direction) {
        if game.move_player(direction).is_some() && game.won() {
            self.progress.complete_level(game.level().id);
            if let Err(err) = self.progress.save() {
                tracing::warn!(%err, "could not save progress");
            }
        }
    }
}
