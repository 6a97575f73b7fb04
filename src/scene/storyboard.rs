//! Frame-timed description of a full path sweep.
//!
//! A storyboard lays out one grid per configured size, enumerates every corner-to-corner
//! path of each grid, and schedules the paths one after another: each stroke is drawn,
//! then faded, before the next begins. Grids play in order. The result is plain data for
//! an external renderer; nothing here draws pixels.

use crate::{
    foundation::core::{Fps, FrameIndex, FrameRange, Point, Rect},
    foundation::error::{GridwalkError, GridwalkResult},
    grid::square::SquareGrid,
    grid::view::GridView,
    lattice::enumerate::enumerate_many,
    lattice::moves::MoveSequence,
    lattice::rasterize::{PathGeometry, rasterize},
    scene::config::StoryboardConfig,
    scene::layout::layout_row,
    scene::palette::HexColor,
};

/// Complete sweep over all configured grids.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Storyboard {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Total length in frames.
    pub duration: FrameIndex,
    /// Bounding box of every grid, for framing the camera.
    pub bounds: Rect,
    /// Grids in playback order.
    pub grids: Vec<GridPlan>,
}

/// One grid and the strokes swept over it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridPlan {
    /// Caption such as `3x3`.
    pub label: String,
    /// Grid placement and cell size.
    pub grid: SquareGrid,
    /// Bounding box of the grid.
    pub bounds: Rect,
    /// Where the start (`S`) marker goes.
    pub start_marker: Point,
    /// Where the goal (`G`) marker goes.
    pub goal_marker: Point,
    /// Number of distinct paths, equal to `strokes.len()`.
    pub path_count: u64,
    /// Frames spanned by this grid's strokes.
    pub span: FrameRange,
    /// Paths in enumeration order.
    pub strokes: Vec<PathStroke>,
}

/// One path drawn and faded on the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathStroke {
    /// 1-based counter shown next to the grid while the stroke is visible.
    pub number: usize,
    /// The path's moves.
    pub moves: MoveSequence,
    /// Gradient color keyed by `number`.
    pub color: HexColor,
    /// Line geometry over the grid.
    pub geometry: PathGeometry,
    /// Frames during which the stroke is drawn.
    pub draw: FrameRange,
    /// Frames during which it fades out.
    pub fade: FrameRange,
}

impl PathStroke {
    /// Whether the stroke is on screen at `frame`.
    pub fn visible_at(&self, frame: FrameIndex) -> bool {
        self.draw.contains(frame) || self.fade.contains(frame)
    }
}

impl Storyboard {
    /// Lay out, enumerate, rasterize and schedule every path described by `cfg`.
    #[tracing::instrument(skip(cfg), fields(grids = cfg.grid_sizes.len()))]
    pub fn build(cfg: &StoryboardConfig) -> GridwalkResult<Self> {
        cfg.validate()?;

        let grids = layout_row(&cfg.grid_sizes, cfg.cell_side, cfg.gap)?;
        let sets = enumerate_many(&cfg.grid_sizes, cfg.threads)?;

        let mut plans = Vec::<GridPlan>::with_capacity(grids.len());
        let mut cursor = FrameIndex(0);
        for (idx, (grid, set)) in grids.iter().zip(&sets).enumerate() {
            let timing = cfg.timing_for(idx);
            let draw_frames = cfg.fps.secs_to_frames_floor(timing.draw_secs).max(1);
            let fade_frames = cfg.fps.secs_to_frames_floor(timing.fade_secs).max(1);

            let grid_start = cursor;
            let total = set.len();
            let mut strokes = Vec::<PathStroke>::with_capacity(total);
            for (i, moves) in set.paths.iter().enumerate() {
                let geometry = rasterize(grid, moves, cfg.offset_fraction)?;
                let draw = FrameRange::starting_at(cursor, draw_frames);
                let fade = FrameRange::starting_at(draw.end, fade_frames);
                cursor = fade.end;
                strokes.push(PathStroke {
                    number: i + 1,
                    moves: moves.clone(),
                    color: cfg.palette.straight_at(i, total),
                    geometry,
                    draw,
                    fade,
                });
            }

            tracing::debug!(
                n = set.n,
                paths = total,
                frames = cursor.0 - grid_start.0,
                "scheduled grid"
            );
            plans.push(GridPlan {
                label: format!("{0}x{0}", set.n),
                grid: *grid,
                bounds: grid.bounds(),
                start_marker: grid.center_of(grid.start_index()),
                goal_marker: grid.center_of(grid.goal_index()),
                path_count: total as u64,
                span: FrameRange::new(grid_start, cursor)?,
                strokes,
            });
        }

        let bounds = plans
            .iter()
            .map(|p| p.bounds)
            .reduce(|a, b| a.union(b))
            .ok_or_else(|| GridwalkError::validation("storyboard has no grids"))?;

        Ok(Self {
            fps: cfg.fps,
            duration: cursor,
            bounds,
            grids: plans,
        })
    }

    /// Total number of strokes across all grids.
    pub fn stroke_count(&self) -> usize {
        self.grids.iter().map(|g| g.strokes.len()).sum()
    }

    /// Strokes on screen at `frame`, with the grid each belongs to.
    pub fn visible_at(
        &self,
        frame: FrameIndex,
    ) -> impl Iterator<Item = (&GridPlan, &PathStroke)> {
        self.grids.iter().flat_map(move |g| {
            g.strokes
                .iter()
                .filter(move |s| s.visible_at(frame))
                .map(move |s| (g, s))
        })
    }

    /// Duration in seconds at the storyboard's frame rate.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration.0)
    }

    /// Pretty JSON for an external renderer.
    pub fn to_json_pretty(&self) -> GridwalkResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GridwalkError::serde(format!("serialize storyboard: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/storyboard.rs"]
mod tests;
