//! Endpoint nudging for drawn paths.

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{GridwalkError, GridwalkResult};

/// Move `p1` toward `p2` by exactly `amount` along the line joining them.
///
/// Points are planar, so the direction carries no depth component. Fails with
/// [`GridwalkError::DegenerateSegment`] when the two points coincide.
pub fn offset_point(p1: Point, p2: Point, amount: f64) -> GridwalkResult<Point> {
    let dir = unit_direction(p1, p2)?;
    Ok(p1 + dir * amount)
}

fn unit_direction(from: Point, to: Point) -> GridwalkResult<Vec2> {
    let d = to - from;
    let len = d.hypot();
    if !len.is_finite() || len == 0.0 {
        return Err(GridwalkError::degenerate_segment(format!(
            "points ({}, {}) and ({}, {}) coincide",
            from.x, from.y, to.x, to.y
        )));
    }
    Ok(d / len)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/offset.rs"]
mod tests;
