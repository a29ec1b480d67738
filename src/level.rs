//! Level tables: dimensions, marker placement, and per-level seeds.

use crate::generator::{GenerateError, generate_maze};
use crate::maze::{Maze, Pos};

/// Number of levels in the game.
pub const MAX_LEVEL: u32 = 16;

/// Multiplier turning a level id into the generation seed. Any fixed value
/// works; this one is kept so existing levels keep their exact layouts.
const MAZE_SEED: u64 = 12345;

/// Difficulty band of a level, driving grid size and the star rating shown
/// in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub fn of_level(level: u32) -> Self {
        match level {
            ..=8 => Tier::Easy,
            9..=12 => Tier::Medium,
            _ => Tier::Hard,
        }
    }

    /// Grid dimensions for this tier; bigger mazes for higher tiers.
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            Tier::Easy => (15, 11),
            Tier::Medium => (19, 15),
            Tier::Hard => (23, 17),
        }
    }

    pub fn stars(self) -> &'static str {
        match self {
            Tier::Easy => "⭐",
            Tier::Medium => "⭐⭐",
            Tier::Hard => "⭐⭐⭐",
        }
    }
}

/// One playable maze level.
pub struct Level {
    pub id: u32,
    pub maze: Maze,
    pub start: Pos,
    pub goal: Pos,
}

impl Level {
    /// Builds the maze for `id`. Deterministic: the same id always produces
    /// the same level.
    pub fn build(id: u32) -> Result<Self, GenerateError> {
        let (width, height) = Tier::of_level(id).dimensions();
        let (start, goal) = markers(id, width, height);
        let seed = id as u64 * MAZE_SEED;
        let maze = generate_maze(id, width, height, start, goal, Some(seed))?;
        Ok(Level {
            id,
            maze,
            start,
            goal,
        })
    }
}

/// Start/goal placement. Early levels always run top-left to bottom-right;
/// past level 8 the corner pair is shuffled per level for variety, derived
/// from the level id so it never changes between sessions.
fn markers(level: u32, width: u16, height: u16) -> (Pos, Pos) {
    let top_left = (1, 1);
    let top_right = (width - 2, 1);
    let bottom_left = (1, height - 2);
    let bottom_right = (width - 2, height - 2);

    if level <= 8 {
        return (top_left, bottom_right);
    }
    match level % 4 {
        0 => (top_left, bottom_right),
        1 => (top_right, bottom_left),
        2 => (bottom_left, top_right),
        _ => (bottom_right, top_left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;
    use crate::solver::is_reachable;

    #[test]
    fn test_tier_bands() {
        assert_eq!(Tier::of_level(1), Tier::Easy);
        assert_eq!(Tier::of_level(8), Tier::Easy);
        assert_eq!(Tier::of_level(9), Tier::Medium);
        assert_eq!(Tier::of_level(12), Tier::Medium);
        assert_eq!(Tier::of_level(13), Tier::Hard);
        assert_eq!(Tier::of_level(16), Tier::Hard);
    }

    #[test]
    fn test_early_levels_use_default_corners() {
        for level in 1..=8 {
            assert_eq!(markers(level, 15, 11), ((1, 1), (13, 9)));
        }
    }

    #[test]
    fn test_advanced_markers_sit_in_corners() {
        for level in 9..=16 {
            let (width, height) = Tier::of_level(level).dimensions();
            let (start, goal) = markers(level, width, height);
            for (x, y) in [start, goal] {
                assert!(x == 1 || x == width - 2);
                assert!(y == 1 || y == height - 2);
            }
            // Start and goal always end up in opposite corners.
            assert_eq!(start.0.abs_diff(goal.0), width - 3);
            assert_eq!(start.1.abs_diff(goal.1), height - 3);
        }
    }

    #[test]
    fn test_every_level_is_solvable() {
        for id in 1..=MAX_LEVEL {
            let level = Level::build(id).unwrap();
            assert_eq!(level.maze[level.start], Cell::Start);
            assert_eq!(level.maze[level.goal], Cell::Goal);
            assert!(
                is_reachable(&level.maze, level.start, level.goal),
                "level {id} unsolvable"
            );
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = Level::build(13).unwrap();
        let b = Level::build(13).unwrap();
        assert_eq!(a.start, b.start);
        assert_eq!(a.goal, b.goal);
        assert!(a.maze == b.maze);
    }
}
