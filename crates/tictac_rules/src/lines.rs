//! The eight winning lines of the 3x3 board.

use serde::{Deserialize, Serialize};

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal line.
    Row,
    /// Vertical line.
    Column,
    /// Corner-to-corner line.
    Diagonal,
}

/// One of the eight fixed index triples that wins a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    ordinal: usize,
    kind: LineKind,
    cells: [usize; 3],
}

impl Line {
    const fn new(ordinal: usize, kind: LineKind, cells: [usize; 3]) -> Self {
        Self {
            ordinal,
            kind,
            cells,
        }
    }

    /// All winning lines in table order: rows, columns, diagonals.
    pub const ALL: [Line; 8] = [
        Line::new(0, LineKind::Row, [0, 1, 2]),
        Line::new(1, LineKind::Row, [3, 4, 5]),
        Line::new(2, LineKind::Row, [6, 7, 8]),
        Line::new(3, LineKind::Column, [0, 3, 6]),
        Line::new(4, LineKind::Column, [1, 4, 7]),
        Line::new(5, LineKind::Column, [2, 5, 8]),
        Line::new(6, LineKind::Diagonal, [0, 4, 8]),
        Line::new(7, LineKind::Diagonal, [2, 4, 6]),
    ];

    /// Position of this line in [`Line::ALL`].
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Orientation of this line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Cell indices covered by this line.
    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// Short human-readable name, e.g. `"row 1"` or `"diagonal 2"`.
    pub fn label(&self) -> String {
        let (name, nth) = match self.kind {
            LineKind::Row => ("row", self.ordinal + 1),
            LineKind::Column => ("column", self.ordinal - 2),
            LineKind::Diagonal => ("diagonal", self.ordinal - 5),
        };
        format!("{name} {nth}")
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "{} [{a}, {b}, {c}]", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_table_order() {
        for (i, line) in Line::ALL.iter().enumerate() {
            assert_eq!(line.ordinal(), i);
        }
    }

    #[test]
    fn test_every_cell_is_covered() {
        let mut coverage = [0; 9];
        for line in Line::ALL {
            for index in line.cells() {
                coverage[index] += 1;
            }
        }
        // Center sits on four lines, corners on three, edges on two.
        assert_eq!(coverage, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Line::ALL[0].label(), "row 1");
        assert_eq!(Line::ALL[5].label(), "column 3");
        assert_eq!(Line::ALL[7].to_string(), "diagonal 2 [2, 4, 6]");
    }
}
