//! Named preset patterns.

use super::{Cell, Grid, GridError};

/// A named set of live cells, relative to the pattern's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box width
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    /// Bounding box height
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Absolute coordinates when the top-left corner sits at `(x, y)`
    pub fn cells_at(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// Stamp the pattern onto `grid` with its top-left corner at `(x, y)`.
    ///
    /// Existing live cells are kept. If any cell would land outside the
    /// grid nothing is written.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) -> Result<(), GridError> {
        let (width, height) = grid.dimensions();
        if let Some((cx, cy)) = self.cells_at(x, y).find(|&(cx, cy)| !grid.contains(cx, cy)) {
            return Err(GridError::OutOfBounds { x: cx, y: cy, width, height });
        }

        self.cells_at(x, y)
            .try_for_each(|(cx, cy)| grid.set(cx, cy, Cell::Alive))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    /// Simplest spaceship, moves one cell diagonally every 4 generations
    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        description: "Moves diagonally (period 4)",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    };

    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        description: "Oscillator (period 2)",
        cells: &[(0, 0), (1, 0), (2, 0)],
    };

    pub const TOAD: Pattern = Pattern {
        name: "Toad",
        description: "Oscillator (period 2)",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    };

    pub const BEACON: Pattern = Pattern {
        name: "Beacon",
        description: "Oscillator (period 2)",
        cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    };

    pub const PULSAR: Pattern = Pattern {
        name: "Pulsar",
        description: "Oscillator (period 3)",
        cells: &[
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    };

    pub const LWSS: Pattern = Pattern {
        name: "LWSS",
        description: "Lightweight spaceship (period 4)",
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    };

    pub const GLIDER_GUN: Pattern = Pattern {
        name: "Gosper Glider Gun",
        description: "Produces gliders (period 30)",
        cells: &[
            (0, 4), (0, 5), (1, 4), (1, 5),
            (10, 4), (10, 5), (10, 6),
            (11, 3), (11, 7),
            (12, 2), (12, 8),
            (13, 2), (13, 8),
            (14, 5),
            (15, 3), (15, 7),
            (16, 4), (16, 5), (16, 6),
            (17, 5),
            (20, 2), (20, 3), (20, 4),
            (21, 2), (21, 3), (21, 4),
            (22, 1), (22, 5),
            (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    };

    /// Methuselah, stabilizes after 1103 generations on an unbounded plane
    pub const R_PENTOMINO: Pattern = Pattern {
        name: "R-pentomino",
        description: "Methuselah",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    };

    pub const ACORN: Pattern = Pattern {
        name: "Acorn",
        description: "Methuselah",
        cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
    };

    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        description: "Still life",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    };

    /// Get all available patterns
    pub fn all_patterns() -> [Pattern; 10] {
        [
            GLIDER,
            BLINKER,
            TOAD,
            BEACON,
            PULSAR,
            LWSS,
            GLIDER_GUN,
            R_PENTOMINO,
            ACORN,
            BLOCK,
        ]
    }

    /// Case-insensitive lookup by name
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    #[test]
    fn test_bounding_boxes() {
        assert_eq!((GLIDER.width(), GLIDER.height()), (3, 3));
        assert_eq!((BLINKER.width(), BLINKER.height()), (3, 1));
        assert_eq!((PULSAR.width(), PULSAR.height()), (13, 13));
        assert_eq!((GLIDER_GUN.width(), GLIDER_GUN.height()), (36, 9));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = all_patterns().iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all_patterns().len());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("glider"), Some(GLIDER));
        assert_eq!(by_name("LWSS"), Some(LWSS));
        assert_eq!(by_name("unknown"), None);
    }

    #[test]
    fn test_place_on_keeps_existing_cells() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(9, 9, Cell::Alive).unwrap();

        BLOCK.place_on(&mut grid, 3, 4).unwrap();
        assert_eq!(grid.count_live(), 5);
        assert_eq!(grid.get(4, 5), Ok(Cell::Alive));
    }

    #[test]
    fn test_place_on_out_of_bounds_writes_nothing() {
        let mut grid = Grid::new(10, 10).unwrap();

        let result = GLIDER.place_on(&mut grid, 8, 0);
        assert!(matches!(result, Err(GridError::OutOfBounds { .. })));
        assert_eq!(grid.count_live(), 0);
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let mut grid = Grid::new(17, 17).unwrap();
        PULSAR.place_on(&mut grid, 2, 2).unwrap();

        let one = grid.next_generation();
        let three = one.next_generation().next_generation();
        assert_ne!(one, grid);
        assert_eq!(three, grid);
    }
}
