use crate::{
    foundation::core::Vec2,
    foundation::error::{GridwalkError, GridwalkResult},
    grid::square::SquareGrid,
};

/// Place one grid per entry of `sizes` left to right.
///
/// The first grid has its start cell centered at the origin. Every following grid starts
/// `gap` units right of the previous grid's bounding box and shares the first grid's
/// bottom edge (largest y, the goal row side).
pub fn layout_row(sizes: &[usize], cell_side: f64, gap: f64) -> GridwalkResult<Vec<SquareGrid>> {
    if sizes.is_empty() {
        return Err(GridwalkError::invalid_grid("layout needs at least one grid"));
    }
    if !gap.is_finite() || gap < 0.0 {
        return Err(GridwalkError::invalid_grid("layout gap must be finite and >= 0"));
    }

    let mut out = Vec::<SquareGrid>::with_capacity(sizes.len());
    for &n in sizes {
        let grid = SquareGrid::new(n, cell_side)?;
        let placed = match out.last() {
            None => grid,
            Some(prev) => {
                let b = grid.bounds();
                let x = prev.bounds().x1 + gap - b.x0;
                let y = out[0].bounds().y1 - b.y1;
                grid.translated(Vec2::new(x, y))
            }
        };
        out.push(placed);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
