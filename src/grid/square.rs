use crate::foundation::core::{GridCoord, Point, Rect, Vec2};
use crate::foundation::error::{GridwalkError, GridwalkResult};
use crate::grid::view::GridView;

/// Regular N×N grid of square cells.
///
/// Cell `(row, col)` is centered at `origin + (col * cell_side, row * cell_side)`, so the
/// start cell sits at `origin` and the goal cell at the opposite corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawSquareGrid")]
pub struct SquareGrid {
    dims: usize,
    cell_side: f64,
    origin: Point,
}

impl SquareGrid {
    /// Build a grid with its start cell centered at the origin.
    pub fn new(dims: usize, cell_side: f64) -> GridwalkResult<Self> {
        if dims < 1 {
            return Err(GridwalkError::invalid_grid("grid dims must be >= 1"));
        }
        if dims.checked_mul(dims).is_none() {
            return Err(GridwalkError::invalid_grid(format!(
                "a {dims}x{dims} grid has more cells than fit in usize"
            )));
        }
        if !cell_side.is_finite() || cell_side <= 0.0 {
            return Err(GridwalkError::invalid_grid(
                "cell_side must be finite and > 0",
            ));
        }
        Ok(Self {
            dims,
            cell_side,
            origin: Point::ORIGIN,
        })
    }

    /// Same grid with the start cell centered at `origin`.
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    /// Same grid shifted by `delta`.
    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            origin: self.origin + delta,
            ..self
        }
    }

    /// Side dimension N.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Side length of one cell.
    pub fn cell_side(&self) -> f64 {
        self.cell_side
    }

    /// Center of the start cell.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Index of the start cell (top-left).
    pub fn start_index(&self) -> usize {
        0
    }

    /// Index of the goal cell (bottom-right).
    pub fn goal_index(&self) -> usize {
        self.dims * self.dims - 1
    }

    /// Center of the cell at `coord`.
    pub fn center_at(&self, coord: GridCoord) -> Point {
        self.origin + Vec2::new(coord.col as f64, coord.row as f64) * self.cell_side
    }

    /// Square covered by the cell at `index`.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let c = GridView::center_of(self, index);
        let h = self.cell_side * 0.5;
        Rect::new(c.x - h, c.y - h, c.x + h, c.y + h)
    }

    /// Bounding box of all cells.
    pub fn bounds(&self) -> Rect {
        self.cell_rect(self.start_index())
            .union(self.cell_rect(self.goal_index()))
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// All cell centers in index order.
    pub fn centers(&self) -> Vec<Point> {
        (0..self.dims * self.dims)
            .map(|i| GridView::center_of(self, i))
            .collect()
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSquareGrid {
    dims: usize,
    cell_side: f64,
    origin: Point,
}

impl TryFrom<RawSquareGrid> for SquareGrid {
    type Error = GridwalkError;

    fn try_from(raw: RawSquareGrid) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.dims, raw.cell_side)?.with_origin(raw.origin))
    }
}

impl GridView for SquareGrid {
    fn cell_count(&self) -> usize {
        self.dims * self.dims
    }

    fn center_of(&self, index: usize) -> Point {
        self.center_at(GridCoord::from_index(index, self.dims))
    }

    fn cell_side(&self) -> f64 {
        self.cell_side
    }

    fn dims(&self) -> GridwalkResult<usize> {
        Ok(self.dims)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/square.rs"]
mod tests;
