//! Maze generation pipeline.
//!
//! A maze is built in stages: open the room lattice, carve a perfect maze
//! over it with randomized backtracking, apply level-dependent complexity
//! tweaks, stamp the start and goal markers, then verify reachability with a
//! breadth-first search. If verification ever fails a rescue corridor is
//! carved between the two markers and the maze is accepted as-is.

mod backtrack;
mod complexity;

use rand::{SeedableRng, rngs::StdRng};

use crate::maze::{Cell, Maze, Pos};
use crate::solver::is_reachable;

use backtrack::carve_passages;
use complexity::{adjust_complexity, carve_rescue_corridor};

/// Precondition violations reported by [`generate_maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Dimensions too small to hold a border plus at least one room.
    DimensionsTooSmall { width: u16, height: u16 },
    /// Start or goal marker outside the interior of the grid.
    MarkerOutsideInterior { x: u16, y: u16 },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::DimensionsTooSmall { width, height } => write!(
                f,
                "maze dimensions {}x{} are too small; both sides must be at least 5",
                width, height
            ),
            GenerateError::MarkerOutsideInterior { x, y } => write!(
                f,
                "start/goal marker ({}, {}) is outside the maze interior",
                x, y
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a complete, guaranteed-solvable maze for one level.
///
/// `level` controls the complexity adjustment (extra openings on easy and
/// hard levels), `start` and `goal` are stamped into the grid after carving.
/// With the same `seed` and arguments the result is bit-identical across
/// calls; with `None` the maze is different every time.
pub fn generate_maze(
    level: u32,
    width: u16,
    height: u16,
    start: Pos,
    goal: Pos,
    seed: Option<u64>,
) -> Result<Maze, GenerateError> {
    if width < 5 || height < 5 {
        return Err(GenerateError::DimensionsTooSmall { width, height });
    }
    for marker in [start, goal] {
        let on_border =
            marker.0 == 0 || marker.1 == 0 || marker.0 >= width - 1 || marker.1 >= height - 1;
        if on_border {
            return Err(GenerateError::MarkerOutsideInterior {
                x: marker.0,
                y: marker.1,
            });
        }
    }

    let mut rng = get_rng(seed);
    let mut maze = Maze::new(width, height);

    open_room_lattice(&mut maze);
    carve_passages(&mut maze, &mut rng);
    adjust_complexity(&mut maze, level, &mut rng);

    maze[start] = Cell::Start;
    maze[goal] = Cell::Goal;

    if !is_reachable(&maze, start, goal) {
        // The carver connects every room and the adjuster only opens cells,
        // so this fires only for unusual marker placements.
        tracing::warn!(level, ?start, ?goal, "maze unsolvable, carving rescue corridor");
        carve_rescue_corridor(&mut maze, start, goal);
    }

    tracing::debug!(level, width, height, "maze generated");
    Ok(maze)
}

/// Opens the room lattice: every interior cell with both coordinates odd
/// becomes a path. The cells in between stay walls until the carver links
/// neighboring rooms.
fn open_room_lattice(maze: &mut Maze) {
    let (width, height) = (maze.width(), maze.height());
    for y in (1..height - 1).step_by(2) {
        for x in (1..width - 1).step_by(2) {
            maze[(x, y)] = Cell::Path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_tiny_dimensions() {
        let err = generate_maze(1, 3, 11, (1, 1), (1, 9), Some(7)).unwrap_err();
        assert_eq!(
            err,
            GenerateError::DimensionsTooSmall {
                width: 3,
                height: 11
            }
        );
    }

    #[test]
    fn test_rejects_marker_on_border() {
        let err = generate_maze(1, 15, 11, (0, 1), (13, 9), Some(7)).unwrap_err();
        assert_eq!(err, GenerateError::MarkerOutsideInterior { x: 0, y: 1 });
    }

    #[test]
    fn test_room_lattice() {
        let mut maze = Maze::new(15, 11);
        open_room_lattice(&mut maze);
        for ((x, y), cell) in maze.cells() {
            let is_room = x % 2 == 1 && y % 2 == 1 && x < 14 && y < 10;
            let expected = if is_room { Cell::Path } else { Cell::Wall };
            assert_eq!(cell, expected, "cell ({x}, {y})");
        }
    }

    #[test]
    fn test_border_stays_walled() {
        let maze = generate_maze(1, 15, 11, (1, 1), (13, 9), Some(1)).unwrap();
        for ((x, y), cell) in maze.cells() {
            if x == 0 || y == 0 || x == 14 || y == 10 {
                assert_eq!(cell, Cell::Wall, "border cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_rooms_never_walled_back() {
        for level in [1, 3, 8, 16] {
            let maze = generate_maze(level, 23, 17, (1, 1), (21, 15), Some(level as u64)).unwrap();
            for ((x, y), cell) in maze.cells() {
                if x % 2 == 1 && y % 2 == 1 && !maze.is_border((x, y)) {
                    assert_ne!(cell, Cell::Wall, "room ({x}, {y}) at level {level}");
                }
            }
        }
    }

    #[test]
    fn test_exactly_one_start_and_goal() {
        let maze = generate_maze(9, 19, 15, (17, 1), (1, 13), Some(42)).unwrap();
        let starts = maze.cells().filter(|&(_, c)| c == Cell::Start).count();
        let goals = maze.cells().filter(|&(_, c)| c == Cell::Goal).count();
        assert_eq!(starts, 1);
        assert_eq!(goals, 1);
        assert_eq!(maze[(17, 1)], Cell::Start);
        assert_eq!(maze[(1, 13)], Cell::Goal);
    }

    #[test]
    fn test_generated_maze_is_solvable() {
        for level in 1..=16u32 {
            let maze = generate_maze(level, 15, 11, (1, 1), (13, 9), Some(level as u64)).unwrap();
            assert!(
                is_reachable(&maze, (1, 1), (13, 9)),
                "level {level} unsolvable"
            );
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = generate_maze(5, 15, 11, (1, 1), (13, 9), Some(5 * 12345)).unwrap();
        let b = generate_maze(5, 15, 11, (1, 1), (13, 9), Some(5 * 12345)).unwrap();
        assert!(a == b);
    }

    #[test]
    fn test_level_one_scenario() {
        let maze = generate_maze(1, 15, 11, (1, 1), (13, 9), Some(12345)).unwrap();
        assert_eq!(maze[(1, 1)], Cell::Start);
        assert_eq!(maze[(13, 9)], Cell::Goal);
        for x in 0..15 {
            assert_eq!(maze[(x, 0)], Cell::Wall);
            assert_eq!(maze[(x, 10)], Cell::Wall);
        }
        for y in 0..11 {
            assert_eq!(maze[(0, y)], Cell::Wall);
            assert_eq!(maze[(14, y)], Cell::Wall);
        }
        assert!(is_reachable(&maze, (1, 1), (13, 9)));
    }

    #[test]
    fn test_extra_openings_grow_with_level() {
        // The perfect carve opens exactly rooms-1 connector cells, so any
        // difference in non-room path counts comes from the adjuster.
        let count_connectors = |level: u32| {
            let maze = generate_maze(level, 15, 11, (1, 1), (13, 9), Some(99)).unwrap();
            maze.cells()
                .filter(|&((x, y), c)| c != Cell::Wall && (x % 2 == 0 || y % 2 == 0))
                .count()
        };
        let mid = count_connectors(3);
        let high = count_connectors(12);
        assert!(high >= mid, "expected {high} >= {mid}");
    }
}
