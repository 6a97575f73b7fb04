use std::{fmt, str::FromStr};

use crate::foundation::core::GridCoord;
use crate::foundation::error::{GridwalkError, GridwalkResult};

/// One unit step of a monotonic lattice path.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Move {
    /// Column increment.
    Right,
    /// Row increment.
    Down,
}

impl Move {
    /// Displacement as `(d_row, d_col)`.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// Apply the move to `at`. No bounds check.
    pub fn step(self, at: GridCoord) -> GridCoord {
        let (dr, dc) = self.delta();
        GridCoord::new(at.row + dr, at.col + dc)
    }

    /// Single-letter notation (`R` / `D`).
    pub fn as_char(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Down => 'D',
        }
    }
}

/// Ordered list of moves describing one lattice path.
///
/// Equality, ordering and hashing are structural over the move list, so a
/// `BTreeSet<MoveSequence>` or `HashSet<MoveSequence>` deduplicates paths.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    /// Wrap an explicit move list.
    pub fn new(moves: Vec<Move>) -> Self {
        Self(moves)
    }

    /// Borrow the moves in order.
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the single-cell path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of [`Move::Right`] entries.
    pub fn rights(&self) -> usize {
        self.0.iter().filter(|m| **m == Move::Right).count()
    }

    /// Number of [`Move::Down`] entries.
    pub fn downs(&self) -> usize {
        self.0.iter().filter(|m| **m == Move::Down).count()
    }

    /// Whether this sequence joins opposite corners of a `dims`×`dims` grid.
    pub fn is_corner_to_corner(&self, dims: usize) -> bool {
        dims >= 1 && self.rights() == dims - 1 && self.downs() == dims - 1
    }

    /// Grid coordinates visited, starting with the origin cell.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        std::iter::once(GridCoord::ORIGIN).chain(self.0.iter().scan(
            GridCoord::ORIGIN,
            |at, m| {
                *at = m.step(*at);
                Some(*at)
            },
        ))
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.0 {
            write!(f, "{}", m.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = GridwalkError;

    /// Parse `R`/`D` notation. Case-insensitive; whitespace and commas are ignored.
    fn from_str(s: &str) -> GridwalkResult<Self> {
        let mut moves = Vec::with_capacity(s.len());
        for (pos, ch) in s.chars().enumerate() {
            match ch.to_ascii_uppercase() {
                'R' => moves.push(Move::Right),
                'D' => moves.push(Move::Down),
                c if c.is_whitespace() || c == ',' => {}
                other => {
                    return Err(GridwalkError::invalid_argument(format!(
                        "unknown move '{other}' at position {pos} (expected R or D)"
                    )));
                }
            }
        }
        Ok(Self(moves))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lattice/moves.rs"]
mod tests;
