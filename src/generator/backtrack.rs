//! Randomized recursive backtracking over the room lattice.

use std::collections::HashSet;

use rand::{Rng, rngs::StdRng};

use crate::maze::{Cell, Maze, Pos};

/// Room-to-room steps: two cells in each cardinal direction.
const ROOM_STEPS: [(i32, i32); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// Connects every room of the lattice into a perfect maze.
///
/// Starting from the room at (1, 1), repeatedly looks at the top of an
/// explicit stack, picks an unvisited room two cells away at random, opens
/// the wall cell midway between the two rooms, and pushes the new room.
/// When a room has no unvisited neighbors it is popped off. The loop ends
/// once every room has been visited, leaving exactly one route between any
/// pair of rooms.
pub fn carve_passages(maze: &mut Maze, rng: &mut StdRng) {
    let start: Pos = (1, 1);
    let mut visited: HashSet<Pos> = HashSet::new();
    visited.insert(start);

    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let unvisited: Vec<Pos> = ROOM_STEPS
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = current.0 as i32 + dx;
                let y = current.1 as i32 + dy;
                let inside = x > 0 && x < maze.width() as i32 - 1 && y > 0 && y < maze.height() as i32 - 1;
                inside.then_some((x as u16, y as u16))
            })
            .filter(|room| !visited.contains(room))
            .collect();

        match unvisited.as_slice() {
            [] => {
                stack.pop();
            }
            rooms => {
                let next = rooms[rng.random_range(0..rooms.len())];
                visited.insert(next);
                // Open the wall cell exactly midway between the two rooms.
                let wall = ((current.0 + next.0) / 2, (current.1 + next.1) / 2);
                maze[wall] = Cell::Path;
                stack.push(next);
            }
        }
    }
}
