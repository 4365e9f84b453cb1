//! Strike-through geometry for highlighting a winning line.
//!
//! Percentages are relative to the board's width and height; the strike is
//! centred on `(left_pct, top_pct)` and rotated by `rotation_deg`. This is
//! rendering metadata only and is indexed by [`Line::ordinal`].

use tictac_rules::Line;

/// Placement of the strike over a winning line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeGeometry {
    /// Vertical centre, percent of board height.
    pub top_pct: f32,
    /// Horizontal centre, percent of board width.
    pub left_pct: f32,
    /// Strike length, percent of board width.
    pub width_pct: f32,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f32,
}

const fn strike(top_pct: f32, left_pct: f32, width_pct: f32, rotation_deg: f32) -> StrikeGeometry {
    StrikeGeometry {
        top_pct,
        left_pct,
        width_pct,
        rotation_deg,
    }
}

/// Geometry per line, in [`Line::ALL`] order.
pub const STRIKES: [StrikeGeometry; 8] = [
    // Rows
    strike(16.6, 50.0, 90.0, 0.0),
    strike(50.0, 50.0, 90.0, 0.0),
    strike(83.3, 50.0, 90.0, 0.0),
    // Columns
    strike(50.0, 16.6, 90.0, 90.0),
    strike(50.0, 50.0, 90.0, 90.0),
    strike(50.0, 83.3, 90.0, 90.0),
    // Diagonals (sqrt(2) * 90)
    strike(50.0, 50.0, 127.0, 45.0),
    strike(50.0, 50.0, 127.0, 135.0),
];

impl StrikeGeometry {
    /// Geometry for `line`.
    pub fn for_line(line: &Line) -> Self {
        STRIKES[line.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_rules::LineKind;

    #[test]
    fn test_orientation_follows_line_kind() {
        for line in Line::ALL {
            let geometry = StrikeGeometry::for_line(&line);
            match line.kind() {
                LineKind::Row => assert_eq!(geometry.rotation_deg, 0.0),
                LineKind::Column => assert_eq!(geometry.rotation_deg, 90.0),
                LineKind::Diagonal => assert_eq!(geometry.width_pct, 127.0),
            }
        }
    }
}
