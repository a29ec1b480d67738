//! Breadth-first reachability over the maze grid.
//!
//! Movement is 4-connected and any non-wall cell is traversable. The
//! generator uses [`is_reachable`] as its solvability guard; [`shortest_path`]
//! additionally recovers the route for tests and diagnostics.

use std::collections::{HashMap, VecDeque};

use crate::maze::{Maze, Pos, neighbors};

/// Checks whether `goal` can be reached from `start` by moving through
/// non-wall cells only.
pub fn is_reachable(maze: &Maze, start: Pos, goal: Pos) -> bool {
    shortest_path(maze, start, goal).is_some()
}

/// Runs a breadth-first search from `start` to `goal` and returns the
/// shortest route, including both endpoints, or `None` if the goal is
/// unreachable.
pub fn shortest_path(maze: &Maze, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return None;
    }
    if !maze[start].is_walkable() || !maze[goal].is_walkable() {
        return None;
    }

    // Doubles as the visited set: a cell is visited iff it has a parent entry.
    let mut parents: HashMap<Pos, Pos> = HashMap::new();
    parents.insert(start, start);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let mut route = vec![goal];
            let mut cell = goal;
            while cell != start {
                cell = parents[&cell];
                route.push(cell);
            }
            route.reverse();
            return Some(route);
        }

        for neighbor in neighbors(current, maze) {
            if maze[neighbor].is_walkable() && !parents.contains_key(&neighbor) {
                parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    None
}
