use crate::{
    foundation::core::{BezPath, Line, Point},
    foundation::error::{GridwalkError, GridwalkResult},
    geometry::offset::offset_point,
    grid::view::GridView,
    lattice::moves::MoveSequence,
};

/// Fraction of a cell side by which drawn path endpoints are pulled inward by default.
pub const DEFAULT_OFFSET_FRACTION: f64 = 0.35;

/// Drawable geometry of one path over a concrete grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathGeometry {
    /// Visited cell indices, start cell first.
    pub visited: Vec<usize>,
    /// Polyline vertices: cell centers, with the first and last nudged inward.
    pub points: Vec<Point>,
}

impl PathGeometry {
    /// Straight segments joining consecutive points.
    pub fn segments(&self) -> Vec<Line> {
        self.points
            .windows(2)
            .map(|w| Line::new(w[0], w[1]))
            .collect()
    }

    /// Number of segments (one per move).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The polyline as a single open path.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut pts = self.points.iter();
        if let Some(first) = pts.next() {
            path.move_to(*first);
            for p in pts {
                path.line_to(*p);
            }
        }
        path
    }
}

/// Cell indices visited by `moves` on a `dims`×`dims` grid, start cell included.
///
/// Fails with [`GridwalkError::InvalidArgument`] if a move steps outside the grid.
pub fn visited_indices(dims: usize, moves: &MoveSequence) -> GridwalkResult<Vec<usize>> {
    if dims < 1 || dims.checked_mul(dims).is_none() {
        return Err(GridwalkError::invalid_argument(format!(
            "grid dims must be >= 1 with dims*dims cells addressable, got {dims}"
        )));
    }
    let mut out = Vec::with_capacity(moves.len() + 1);
    for (step, at) in moves.coords().enumerate() {
        if !at.in_bounds(dims) {
            return Err(GridwalkError::invalid_argument(format!(
                "step {step} of '{moves}' leaves the {dims}x{dims} grid at row {}, col {}",
                at.row, at.col
            )));
        }
        out.push(at.to_index(dims));
    }
    Ok(out)
}

/// Convert a move sequence into line geometry over `grid`.
///
/// The first point is moved toward the second and the last toward the one before it,
/// each by `offset_fraction * grid.cell_side()`; interior points stay on cell centers.
///
/// Errors:
/// - [`GridwalkError::InvalidArgument`]: `offset_fraction` outside `(0, 0.5)`, or moves
///   leaving the grid.
/// - [`GridwalkError::InvalidGrid`]: cell count is not a perfect square.
/// - [`GridwalkError::DegenerateSegment`]: empty sequence, or coincident endpoint pair.
#[tracing::instrument(level = "trace", skip(grid, moves), fields(moves = %moves))]
pub fn rasterize<G: GridView + ?Sized>(
    grid: &G,
    moves: &MoveSequence,
    offset_fraction: f64,
) -> GridwalkResult<PathGeometry> {
    if !offset_fraction.is_finite() || offset_fraction <= 0.0 || offset_fraction >= 0.5 {
        return Err(GridwalkError::invalid_argument(format!(
            "offset_fraction must be in (0, 0.5), got {offset_fraction}"
        )));
    }
    let dims = grid.dims()?;
    let visited = visited_indices(dims, moves)?;
    if visited.len() < 2 {
        return Err(GridwalkError::degenerate_segment(
            "path visits a single cell; start and goal coincide",
        ));
    }

    let mut points: Vec<Point> = visited.iter().map(|&i| grid.center_of(i)).collect();
    let amount = offset_fraction * grid.cell_side();
    let k = points.len() - 1;

    // Both ends read the unmodified centers; with k == 1 they pull toward each other.
    let first = offset_point(points[0], points[1], amount)?;
    let last = offset_point(points[k], points[k - 1], amount)?;
    points[0] = first;
    points[k] = last;

    tracing::trace!(dims, segments = k, "rasterized path");
    Ok(PathGeometry { visited, points })
}

#[cfg(test)]
#[path = "../../tests/unit/lattice/rasterize.rs"]
mod tests;
