//! # gridwalk guide
//!
//! A standalone walkthrough of what gridwalk computes and how the pieces fit.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Move`](crate::Move): one unit step, [`Right`](crate::Move::Right) (column + 1) or
//!   [`Down`](crate::Move::Down) (row + 1)
//! - [`MoveSequence`](crate::MoveSequence): an ordered list of moves, written `RRDD`
//! - [`GridView`](crate::GridView): any square grid that can report its cell count, cell
//!   centers, and cell side length
//! - [`PathGeometry`](crate::PathGeometry): visited cell indices plus a drawable polyline
//!
//! The pipeline has two independent, pure stages:
//!
//! 1. Enumerate: [`enumerate_paths`](crate::enumerate_paths) returns every distinct
//!    monotonic path across an `n`×`n` grid.
//! 2. Rasterize: [`rasterize`](crate::rasterize) turns one sequence into geometry over a
//!    concrete grid.
//!
//! Neither stage knows about the other. Drawing, coloring and animating the result is the
//! renderer's job.
//!
//! ---
//!
//! ## Counting
//!
//! A path across an `n`×`n` grid makes exactly `n - 1` right moves and `n - 1` down moves.
//! Choosing where the rights go fixes the path, so there are `C(2(n-1), n-1)` of them:
//!
//! | n | paths |
//! |---|-------|
//! | 1 | 1     |
//! | 2 | 2     |
//! | 3 | 6     |
//! | 4 | 20    |
//! | 5 | 70    |
//! | 6 | 252   |
//!
//! [`count_paths`](crate::count_paths) gives the closed form; `enumerate_paths(n).len()`
//! always agrees with it.
//!
//! ---
//!
//! ## Endpoint offsets
//!
//! The renderer puts `S` and `G` glyphs on the start and goal cells. To keep path lines off
//! those glyphs, the first polyline point is pulled from the start center toward the second
//! point, and the last point from the goal center toward the one before it. The distance is
//! `offset_fraction * cell_side` (default fraction:
//! [`DEFAULT_OFFSET_FRACTION`](crate::DEFAULT_OFFSET_FRACTION)). Interior points stay on cell
//! centers. [`offset_point`](crate::offset_point) is the primitive.
//!
//! ---
//!
//! ## Storyboards
//!
//! [`Storyboard::build`](crate::Storyboard::build) strings the two stages together for a
//! whole explainer: grids of several sizes side by side
//! ([`layout_row`](crate::layout_row)), each path colored along a
//! [`Palette`](crate::Palette) gradient and given a draw/fade slot on a frame timeline. The
//! result serializes to JSON for an external renderer. Configuration is a
//! [`StoryboardConfig`](crate::StoryboardConfig) JSON document.
//!
//! ---
//!
//! ## Errors
//!
//! All fallible APIs return [`GridwalkResult`](crate::GridwalkResult):
//!
//! - `InvalidArgument`: grid side `< 1`, offset fraction outside `(0, 0.5)`, a move that
//!   leaves the grid
//! - `InvalidGrid`: cell count that is not a perfect square, bad cell size or layout input
//! - `DegenerateSegment`: coincident points where a direction is needed
//! - `Validation`: out-of-range configuration
//!
//! There is no retry or fallback anywhere; callers decide whether to skip a path or abort.
