use crate::foundation::core::Point;
use crate::foundation::error::{GridwalkError, GridwalkResult};
use crate::foundation::math::exact_isqrt;

/// Read-only view of a square grid as seen by the path rasterizer.
///
/// Cells are addressed by linear index `row * N + col` with `N * N == cell_count()`.
pub trait GridView {
    /// Total number of cells (N²).
    fn cell_count(&self) -> usize;

    /// Center of the cell at `index`, `index < cell_count()`.
    fn center_of(&self, index: usize) -> Point;

    /// Side length of one cell, the unit endpoint offsets are scaled by.
    fn cell_side(&self) -> f64;

    /// Side dimension N; fails with [`GridwalkError::InvalidGrid`] when the cell count
    /// is not a non-zero perfect square.
    fn dims(&self) -> GridwalkResult<usize> {
        let count = self.cell_count();
        match exact_isqrt(count) {
            Some(n) if n > 0 => Ok(n),
            _ => Err(GridwalkError::invalid_grid(format!(
                "cell count {count} is not a positive perfect square"
            ))),
        }
    }
}

impl<G: GridView + ?Sized> GridView for &G {
    fn cell_count(&self) -> usize {
        (**self).cell_count()
    }

    fn center_of(&self, index: usize) -> Point {
        (**self).center_of(index)
    }

    fn cell_side(&self) -> f64 {
        (**self).cell_side()
    }
}

/// Grid known only through its explicit cell centers, as owned by an external renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawCenterList")]
pub struct CenterList {
    centers: Vec<Point>,
    cell_side: f64,
}

impl CenterList {
    /// Wrap centers listed in row-major order. The count is checked lazily by
    /// [`GridView::dims`]; `cell_side` must be finite and > 0.
    pub fn new(centers: Vec<Point>, cell_side: f64) -> GridwalkResult<Self> {
        if !cell_side.is_finite() || cell_side <= 0.0 {
            return Err(GridwalkError::invalid_grid(
                "cell_side must be finite and > 0",
            ));
        }
        Ok(Self { centers, cell_side })
    }

    /// Centers in row-major order.
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCenterList {
    centers: Vec<Point>,
    cell_side: f64,
}

impl TryFrom<RawCenterList> for CenterList {
    type Error = GridwalkError;

    fn try_from(raw: RawCenterList) -> Result<Self, Self::Error> {
        Self::new(raw.centers, raw.cell_side)
    }
}

impl GridView for CenterList {
    fn cell_count(&self) -> usize {
        self.centers.len()
    }

    fn center_of(&self, index: usize) -> Point {
        self.centers[index]
    }

    fn cell_side(&self) -> f64 {
        self.cell_side
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/view.rs"]
mod tests;
