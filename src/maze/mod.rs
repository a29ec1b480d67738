pub mod cell;

pub use cell::Cell;

/// A grid position as `(x, y)`.
pub type Pos = (u16, u16);

/// A rectangular maze grid stored as a flat array of [`Cell`]s.
///
/// Every cell starts out as a wall; the generator carves paths into it and
/// stamps the start and goal markers. After generation the grid is only read.
#[derive(Debug)]
pub struct Maze {
    grid: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Maze {
    /// Creates a new maze of the given dimensions with every cell a wall.
    pub fn new(width: u16, height: u16) -> Self {
        let grid = vec![Cell::Wall; width as usize * height as usize].into_boxed_slice();
        Maze {
            grid,
            width,
            height,
        }
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Pos) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Checks if the given coordinate lies on the outer ring of the grid.
    pub fn is_border(&self, coord: Pos) -> bool {
        coord.0 == 0 || coord.1 == 0 || coord.0 == self.width - 1 || coord.1 == self.height - 1
    }

    /// Iterates over every cell together with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.grid.iter().enumerate().map(|(i, &cell)| {
            let x = (i % self.width as usize) as u16;
            let y = (i / self.width as usize) as u16;
            ((x, y), cell)
        })
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }
}

impl std::ops::Index<Pos> for Maze {
    type Output = Cell;

    fn index(&self, index: Pos) -> &Self::Output {
        let (x, y) = index;
        &self.grid[self.ravel_index(x, y)]
    }
}

impl std::ops::IndexMut<Pos> for Maze {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let (x, y) = index;
        &mut self.grid[self.ravel_index(x, y)]
    }
}

impl PartialEq for Maze {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.grid == other.grid
    }
}

/// Get neighbors of a cell.
/// A neighbor is a cell one step away in the cardinal directions (up, down, left, right).
pub fn neighbors(coord: Pos, maze: &Maze) -> impl Iterator<Item = Pos> + '_ {
    let neighbors: Vec<Pos> = if maze.is_in_bounds(coord) {
        let (x, y) = coord;
        // NOTE: wrapping_sub sends 0 - 1 to u16::MAX, which the bounds filter
        // below rejects; saturating_add keeps x + 1 from overflowing the same way.
        vec![
            (x.wrapping_sub(1), y),
            (x.saturating_add(1), y),
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
        ]
    } else {
        vec![]
    };

    neighbors.into_iter().filter(move |&c| maze.is_in_bounds(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::new(5, 5);
        maze[(2, 3)] = Cell::Start;
        assert_eq!(maze[(2, 3)], Cell::Start);
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5);
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
    }

    #[test]
    fn test_border() {
        let maze = Maze::new(5, 7);
        assert!(maze.is_border((0, 3)));
        assert!(maze.is_border((4, 3)));
        assert!(maze.is_border((2, 0)));
        assert!(maze.is_border((2, 6)));
        assert!(!maze.is_border((2, 3)));
    }

    #[test]
    fn test_neighbors_at_corner() {
        let maze = Maze::new(5, 5);
        let n: Vec<_> = neighbors((0, 0), &maze).collect();
        assert_eq!(n.len(), 2);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
    }

    #[test]
    fn test_cells_iterates_in_row_order() {
        let mut maze = Maze::new(3, 2);
        maze[(2, 1)] = Cell::Goal;
        let all: Vec<_> = maze.cells().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], ((0, 0), Cell::Wall));
        assert_eq!(all[5], ((2, 1), Cell::Goal));
    }
}
