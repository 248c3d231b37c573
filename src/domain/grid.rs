//! Dense, bounded cell matrix.
//!
//! The grid does not wrap: any neighbor position that falls outside
//! `[0, width) x [0, height)` counts as a dead cell. Edge cells therefore
//! see fewer possible neighbors (three at a corner, five along an edge).

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, GridError};

/// Relative positions of the eight Moore neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid manages the 2D cellular automaton grid.
/// Cells are stored row-major, so `(x, y)` lives at `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// Zero-sized dimensions, or dimensions whose cell count does not fit
    /// in memory addressing, are rejected before anything is allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = match width.checked_mul(height) {
            Some(len) if width > 0 && height > 0 => len,
            _ => return Err(GridError::InvalidDimension { width, height }),
        };

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` addresses a cell of this grid
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if self.contains(x, y) {
            Ok(self.index(x, y))
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    /// Shorthand for `get(x, y)?.is_alive()`
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.get(x, y).map(Cell::is_alive)
    }

    /// Set cell at position
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Make every cell independently alive with probability `density`.
    ///
    /// The caller owns the random source, so a seeded rng gives a
    /// reproducible board.
    pub fn randomize(&mut self, density: f64, rng: &mut impl Rng) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidArgument(format!(
                "density {density} is outside [0, 1]"
            )));
        }

        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        Ok(())
    }

    /// Total number of live cells (full scan)
    pub fn count_live(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Number of live cells among the 8 Moore neighbors of `(x, y)`.
    /// Positions beyond the edges count as dead.
    pub fn neighbor_count(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.checked_index(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
            .filter(|&(nx, ny)| self.contains(nx, ny))
            .filter(|&(nx, ny)| self.cells[self.index(nx, ny)].is_alive())
            .count() as u8
    }

    /// Next generation computed into a fresh grid (serial).
    /// `self` is only read, so no cell sees a partially written generation.
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.cells[self.index(x, y)].evolve(self.live_neighbors(x, y)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Next generation with rows computed in parallel by rayon.
    /// Each worker writes only its own row of the new buffer.
    pub fn next_generation_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];

        cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, next) in row.iter_mut().enumerate() {
                    *next = self.cells[self.index(x, y)].evolve(self.live_neighbors(x, y));
                }
            });

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Coordinates of live cells, row-major (y ascending, then x)
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in live {
            grid.set(x, y, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.dimensions(), (7, 3));
        assert_eq!(grid.count_live(), 0);
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Dead));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimension { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimension { width: 5, height: 0 })
        );
        assert!(Grid::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(3, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(3, 2), Ok(Cell::Alive));
        assert_eq!(grid.is_alive(0, 0), Ok(false));

        assert_eq!(
            grid.get(4, 0),
            Err(GridError::OutOfBounds { x: 4, y: 0, width: 4, height: 3 })
        );
        assert!(grid.set(0, 3, Cell::Alive).is_err());
        assert_eq!(grid.count_live(), 1);
    }

    #[test]
    fn test_clear() {
        let mut grid = grid_with(5, 5, &[(0, 0), (4, 4), (2, 3)]);
        assert_eq!(grid.count_live(), 3);
        grid.clear();
        assert_eq!(grid.count_live(), 0);
    }

    #[test]
    fn test_randomize_extremes_and_validation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(12, 9).unwrap();

        grid.randomize(1.0, &mut rng).unwrap();
        assert_eq!(grid.count_live(), 12 * 9);

        grid.randomize(0.0, &mut rng).unwrap();
        assert_eq!(grid.count_live(), 0);

        assert!(matches!(grid.randomize(1.5, &mut rng), Err(GridError::InvalidArgument(_))));
        assert!(grid.randomize(-0.1, &mut rng).is_err());
        assert!(grid.randomize(f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_randomize_is_deterministic_under_seed() {
        let mut a = Grid::new(30, 30).unwrap();
        let mut b = Grid::new(30, 30).unwrap();
        a.randomize(0.4, &mut StdRng::seed_from_u64(42)).unwrap();
        b.randomize(0.4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_neighbor_count_interior() {
        // Horizontal blinker at (4,5), (5,5), (6,5)
        let grid = grid_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);

        assert_eq!(grid.neighbor_count(5, 5), Ok(2));
        assert_eq!(grid.neighbor_count(5, 4), Ok(3));
        assert_eq!(grid.neighbor_count(5, 6), Ok(3));
        assert_eq!(grid.neighbor_count(0, 0), Ok(0));
    }

    #[test]
    fn test_neighbor_count_edges_do_not_wrap() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.randomize(1.0, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(grid.neighbor_count(0, 0), Ok(3));
        assert_eq!(grid.neighbor_count(5, 5), Ok(3));
        assert_eq!(grid.neighbor_count(3, 0), Ok(5));
        assert_eq!(grid.neighbor_count(0, 3), Ok(5));
        assert_eq!(grid.neighbor_count(2, 2), Ok(8));

        // A cell on the opposite edge is not a neighbor
        let grid = grid_with(6, 6, &[(5, 0), (0, 5)]);
        assert_eq!(grid.neighbor_count(0, 0), Ok(0));

        assert!(grid.neighbor_count(6, 0).is_err());
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(grid.neighbor_count(0, 0), Ok(0));
        assert_eq!(grid.next_generation().count_live(), 0);
    }

    #[test]
    fn test_blinker_evolution() {
        let grid = grid_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);

        let next = grid.next_generation();
        assert_eq!(next, grid_with(10, 10, &[(5, 4), (5, 5), (5, 6)]));

        let next2 = next.next_generation();
        assert_eq!(next2, grid);
    }

    #[test]
    fn test_block_at_corner_is_stable() {
        let grid = grid_with(4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(50, 37).unwrap();
        grid.randomize(0.35, &mut StdRng::seed_from_u64(9)).unwrap();

        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..10 {
            serial = serial.next_generation();
            parallel = parallel.next_generation_parallel();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_live_cells_row_major() {
        let grid = grid_with(5, 5, &[(3, 1), (0, 4), (1, 1), (4, 0)]);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(4, 0), (1, 1), (3, 1), (0, 4)]);
    }
}
