use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::Fps,
    foundation::error::{GridwalkError, GridwalkResult},
    lattice::rasterize::DEFAULT_OFFSET_FRACTION,
    scene::palette::Palette,
};

/// How long one path stays on screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeTiming {
    /// Seconds spent drawing the path.
    pub draw_secs: f64,
    /// Seconds spent fading it out.
    pub fade_secs: f64,
}

impl StrokeTiming {
    /// Timing from draw and fade seconds.
    pub const fn new(draw_secs: f64, fade_secs: f64) -> Self {
        Self {
            draw_secs,
            fade_secs,
        }
    }
}

/// Inputs of a path-sweep storyboard, loadable from JSON.
///
/// Every field has a default, so `{}` is a valid document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoryboardConfig {
    /// Side lengths of the grids, placed left to right.
    pub grid_sizes: Vec<usize>,
    /// Side length of one cell in scene units.
    pub cell_side: f64,
    /// Endpoint nudge as a fraction of `cell_side`, in `(0, 0.5)`.
    pub offset_fraction: f64,
    /// Horizontal space between neighbouring grids.
    pub gap: f64,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Path color gradient.
    pub palette: Palette,
    /// Per-grid stroke timing; the last entry applies to any further grids.
    pub timing: Vec<StrokeTiming>,
    /// Worker threads for enumeration (`None` = rayon default).
    pub threads: Option<usize>,
}

impl Default for StoryboardConfig {
    fn default() -> Self {
        Self {
            grid_sizes: vec![3, 4, 5],
            cell_side: 2.0,
            offset_fraction: DEFAULT_OFFSET_FRACTION,
            gap: 4.0,
            fps: Fps::default(),
            palette: Palette::default(),
            // Larger grids have more paths, so each one gets less screen time.
            timing: vec![
                StrokeTiming::new(0.3, 0.2),
                StrokeTiming::new(0.2, 0.15),
                StrokeTiming::new(0.15, 0.1),
            ],
            threads: None,
        }
    }
}

impl StoryboardConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> GridwalkResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| GridwalkError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json_str(s: &str) -> GridwalkResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| GridwalkError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check ranges of every field.
    pub fn validate(&self) -> GridwalkResult<()> {
        if self.grid_sizes.is_empty() {
            return Err(GridwalkError::validation("grid_sizes must not be empty"));
        }
        if let Some(n) = self.grid_sizes.iter().find(|&&n| !(2..=10).contains(&n)) {
            return Err(GridwalkError::validation(format!(
                "grid_sizes entries must be in 2..=10, got {n}"
            )));
        }
        if !self.cell_side.is_finite() || self.cell_side <= 0.0 {
            return Err(GridwalkError::validation("cell_side must be finite and > 0"));
        }
        if !self.offset_fraction.is_finite()
            || self.offset_fraction <= 0.0
            || self.offset_fraction >= 0.5
        {
            return Err(GridwalkError::validation(
                "offset_fraction must be in (0, 0.5)",
            ));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(GridwalkError::validation("gap must be finite and >= 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(GridwalkError::validation("fps must have num>0 and den>0"));
        }
        if self.timing.is_empty() {
            return Err(GridwalkError::validation("timing must not be empty"));
        }
        for (idx, t) in self.timing.iter().enumerate() {
            for (name, value) in [("draw_secs", t.draw_secs), ("fade_secs", t.fade_secs)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(GridwalkError::validation(format!(
                        "timing[{idx}].{name} must be finite and > 0"
                    )));
                }
            }
        }
        if self.threads == Some(0) {
            return Err(GridwalkError::validation("threads must be >= 1 when set"));
        }
        Ok(())
    }

    /// Timing for the grid at position `grid_idx`.
    pub fn timing_for(&self, grid_idx: usize) -> StrokeTiming {
        self.timing
            .get(grid_idx)
            .or_else(|| self.timing.last())
            .copied()
            .unwrap_or(StrokeTiming::new(0.3, 0.2))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
