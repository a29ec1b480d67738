//! Level-dependent post-processing of the carved maze.

use rand::{Rng, rngs::StdRng};

use crate::maze::{Cell, Maze, Pos};

/// Applies the per-level difficulty tweaks to a freshly carved maze.
///
/// Level 1 opens up to three extra interior walls so the first maze has a
/// wide, forgiving corridor. Levels 2-4 keep the perfect maze untouched.
/// From level 5 up, a level-scaled number of extra openings adds redundant
/// loops: a perfect maze forces one long winding route, which play-testing
/// showed gets monotonous on the big grids, so later levels deliberately
/// offer shortcuts instead.
///
/// Only cells between two rooms (even `x` or even `y`) and away from the
/// border are eligible, so rooms and the outer ring are never modified. The
/// counts are attempts, not guaranteed flips: a pick that lands on an
/// already-open cell does nothing.
pub fn adjust_complexity(maze: &mut Maze, level: u32, rng: &mut StdRng) {
    let attempts = extra_opening_attempts(level);
    if attempts == 0 {
        return;
    }

    let (width, height) = (maze.width(), maze.height());
    let mut opened = 0;
    for _ in 0..attempts {
        let x = rng.random_range(2..width - 2);
        let y = rng.random_range(2..height - 2);
        if maze[(x, y)] == Cell::Wall && (x % 2 == 0 || y % 2 == 0) {
            maze[(x, y)] = Cell::Path;
            opened += 1;
        }
    }
    tracing::debug!(level, attempts, opened, "complexity adjusted");
}

/// How many wall-opening attempts a level gets. The exact constants are
/// tuning knobs; only the tier direction (easy levels a few, mid levels
/// none, high levels more and more) is contractual.
fn extra_opening_attempts(level: u32) -> u32 {
    match level {
        1 => 3,
        2..=4 => 0,
        5..=8 => (level - 4) * 2,
        9..=12 => (level - 4) * 3,
        _ => (level - 4) * 3 + 5,
    }
}

/// Carves a guaranteed route between `start` and `goal`: along the start's
/// row to the goal's column, then along that column to the goal. Used as a
/// last resort when verification fails; works for any interior marker
/// placement, not just opposite corners.
pub fn carve_rescue_corridor(maze: &mut Maze, start: Pos, goal: Pos) {
    let (x_lo, x_hi) = (start.0.min(goal.0), start.0.max(goal.0));
    for x in x_lo..=x_hi {
        open_cell(maze, (x, start.1));
    }
    let (y_lo, y_hi) = (start.1.min(goal.1), start.1.max(goal.1));
    for y in y_lo..=y_hi {
        open_cell(maze, (goal.0, y));
    }
}

fn open_cell(maze: &mut Maze, pos: Pos) {
    if maze[pos] == Cell::Wall {
        maze[pos] = Cell::Path;
    }
}
