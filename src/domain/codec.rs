//! Plain-text pattern codec.
//!
//! A pattern file holds one live cell per line as `x,y` (column, row).
//! Blank lines and lines whose first non-blank character is `#` are
//! ignored. The file carries no dimensions; the caller supplies the
//! target grid size when decoding.
//!
//! Decoding is best-effort: malformed and out-of-range lines are counted
//! and skipped, never fatal.

use std::collections::BTreeSet;

use tracing::debug;

use super::{Cell, Grid, GridError};

/// Live cells recovered from pattern text, plus what had to be skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedPattern {
    /// In-range live cells, ordered by `(x, y)`
    pub cells: BTreeSet<(usize, usize)>,
    /// Lines that were not exactly two comma-separated integers
    pub malformed: usize,
    /// Well-formed lines that fell outside the target grid
    pub out_of_range: usize,
}

impl DecodedPattern {
    /// Total number of skipped lines
    pub fn skipped(&self) -> usize {
        self.malformed + self.out_of_range
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Encode the live cells of `grid` as `x,y` lines in row-major order.
/// Never emits comments or blank lines.
pub fn encode(grid: &Grid) -> Vec<String> {
    grid.live_cells().map(|(x, y)| format!("{x},{y}")).collect()
}

/// [`encode`] joined into file contents, one newline-terminated line per cell.
pub fn encode_to_string(grid: &Grid) -> String {
    encode(grid).into_iter().fold(String::new(), |mut out, line| {
        out.push_str(&line);
        out.push('\n');
        out
    })
}

/// Decode pattern text against a `width` x `height` target.
pub fn decode(text: &str, width: usize, height: usize) -> DecodedPattern {
    decode_with_offset(text, width, height, (0, 0))
}

/// Decode pattern text, translating every coordinate by `offset` before the
/// range check.
pub fn decode_with_offset(
    text: &str,
    width: usize,
    height: usize,
    offset: (i64, i64),
) -> DecodedPattern {
    let mut decoded = DecodedPattern::default();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((x, y)) = parse_coordinate(line) else {
            debug!(line, "skipping malformed pattern line");
            decoded.malformed += 1;
            continue;
        };

        let position = x
            .checked_add(offset.0)
            .zip(y.checked_add(offset.1))
            .and_then(|(x, y)| Some((to_index(x, width)?, to_index(y, height)?)));

        match position {
            Some(cell) => {
                decoded.cells.insert(cell);
            }
            None => {
                debug!(x, y, width, height, "skipping out-of-range pattern line");
                decoded.out_of_range += 1;
            }
        }
    }

    decoded
}

/// Clear `grid` and mark every decoded cell live.
///
/// The whole pattern is checked against the grid first, so a mismatched
/// grid is reported without touching the board.
pub fn apply_pattern(grid: &mut Grid, pattern: &DecodedPattern) -> Result<(), GridError> {
    let (width, height) = grid.dimensions();
    if let Some(&(x, y)) = pattern.cells.iter().find(|&&(x, y)| !grid.contains(x, y)) {
        return Err(GridError::OutOfBounds { x, y, width, height });
    }

    grid.clear();
    for &(x, y) in &pattern.cells {
        grid.set(x, y, Cell::Alive)?;
    }
    Ok(())
}

fn parse_coordinate(line: &str) -> Option<(i64, i64)> {
    let (x, y) = line.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn to_index(value: i64, limit: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in live {
            grid.set(x, y, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_encode_row_major() {
        let grid = grid_with(5, 5, &[(2, 2), (1, 0), (0, 2), (2, 1), (1, 2)]);
        assert_eq!(encode(&grid), vec!["1,0", "2,1", "0,2", "1,2", "2,2"]);
        assert_eq!(encode_to_string(&grid), "1,0\n2,1\n0,2\n1,2\n2,2\n");
    }

    #[test]
    fn test_encode_empty_grid() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(encode(&grid).is_empty());
        assert_eq!(encode_to_string(&grid), "");
    }

    #[test]
    fn test_decode_skips_comments_malformed_and_out_of_range() {
        let decoded = decode("#comment\n1,1\nbadline\n99999,99999\n2,2", 5, 5);

        assert_eq!(decoded.cells, BTreeSet::from([(1, 1), (2, 2)]));
        assert_eq!(decoded.malformed, 1);
        assert_eq!(decoded.out_of_range, 1);
        assert_eq!(decoded.skipped(), 2);
    }

    #[test]
    fn test_decode_tolerates_whitespace_and_blank_lines() {
        let text = "\n   # indented comment\n  3 , 4  \r\n\n\t0,0\n";
        let decoded = decode(text, 5, 5);

        assert_eq!(decoded.cells, BTreeSet::from([(3, 4), (0, 0)]));
        assert_eq!(decoded.skipped(), 0);
    }

    #[test]
    fn test_decode_malformed_variants() {
        let text = "1\n1,2,3\na,b\n1.5,2\n,\n1;2\n99999999999999999999,1";
        let decoded = decode(text, 10, 10);

        assert!(decoded.is_empty());
        assert_eq!(decoded.malformed, 7);
        assert_eq!(decoded.out_of_range, 0);
    }

    #[test]
    fn test_decode_negative_and_edge_coordinates() {
        let decoded = decode("-1,0\n0,-1\n5,0\n0,5\n4,4", 5, 5);

        assert_eq!(decoded.cells, BTreeSet::from([(4, 4)]));
        assert_eq!(decoded.out_of_range, 4);
        assert_eq!(decoded.malformed, 0);
    }

    #[test]
    fn test_decode_duplicates_collapse() {
        let decoded = decode("1,1\n1,1\n", 3, 3);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.skipped(), 0);
    }

    #[test]
    fn test_decode_with_offset() {
        let decoded = decode_with_offset("0,0\n-1,2\n4,4", 5, 5, (1, 1));
        assert_eq!(decoded.cells, BTreeSet::from([(1, 1), (0, 3)]));
        assert_eq!(decoded.out_of_range, 1);

        let overflow = decode_with_offset(&format!("{},0", i64::MAX), 5, 5, (1, 0));
        assert_eq!(overflow.out_of_range, 1);
    }

    #[test]
    fn test_apply_pattern_clears_first() {
        let mut grid = grid_with(5, 5, &[(0, 0), (4, 4)]);
        let decoded = decode("1,1\n2,2", 5, 5);

        apply_pattern(&mut grid, &decoded).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_apply_pattern_rejects_foreign_dimensions() {
        let decoded = decode("7,7", 10, 10);
        let mut grid = grid_with(5, 5, &[(0, 0)]);

        assert!(matches!(
            apply_pattern(&mut grid, &decoded),
            Err(GridError::OutOfBounds { x: 7, y: 7, .. })
        ));
        // Board left untouched
        assert_eq!(grid.count_live(), 1);
    }

    #[test]
    fn test_round_trip() {
        let original = grid_with(8, 6, &[(0, 0), (7, 5), (3, 2), (4, 2), (7, 0)]);
        let decoded = decode(&encode_to_string(&original), 8, 6);
        assert_eq!(decoded.skipped(), 0);

        let mut restored = Grid::new(8, 6).unwrap();
        apply_pattern(&mut restored, &decoded).unwrap();
        assert_eq!(restored, original);
    }
}
