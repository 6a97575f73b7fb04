//! gridwalk enumerates monotonic lattice paths on square grids and turns them into drawable
//! geometry for animated explainers.
//!
//! # Pipeline overview
//!
//! 1. **Enumerate**: `n -> Vec<MoveSequence>`, every distinct right/down path from the
//!    top-left to the bottom-right cell of an `n`×`n` grid
//! 2. **Rasterize**: `GridView + MoveSequence -> PathGeometry`, visited cells and a polyline
//!    whose endpoints are pulled inward off the start/goal markers
//! 3. **Storyboard** (optional): lay out several grids, color and schedule every path on a
//!    frame timeline, and export it as JSON for an external renderer
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: enumeration and rasterization depend only on their inputs.
//! - **No rendering**: pixels, camera and playback belong to the consumer.
//!
//! See [`crate::guide`] for a longer walkthrough.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;
mod geometry;
mod grid;
mod lattice;
mod scene;

/// High-level, standalone documentation for gridwalk's concepts.
pub mod guide;

pub use foundation::core::{
    BezPath, Fps, FrameIndex, FrameRange, GridCoord, Line, Point, Rect, Rgba8Premul, Vec2,
};
pub use foundation::error::{GridwalkError, GridwalkResult};
pub use geometry::offset::offset_point;
pub use grid::square::SquareGrid;
pub use grid::view::{CenterList, GridView};
pub use lattice::enumerate::{PathSet, count_paths, enumerate_many, enumerate_paths};
pub use lattice::moves::{Move, MoveSequence};
pub use lattice::rasterize::{DEFAULT_OFFSET_FRACTION, PathGeometry, rasterize, visited_indices};
pub use scene::config::{StoryboardConfig, StrokeTiming};
pub use scene::layout::layout_row;
pub use scene::palette::{HexColor, Palette};
pub use scene::storyboard::{GridPlan, PathStroke, Storyboard};
