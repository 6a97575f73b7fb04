use crate::foundation::error::{GridwalkError, GridwalkResult};

pub use kurbo::{BezPath, Line, Point, Rect, Vec2};

/// Zero-based (row, column) position inside an N×N grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridCoord {
    /// Row, growing downward from the start corner.
    pub row: usize,
    /// Column, growing rightward from the start corner.
    pub col: usize,
}

impl GridCoord {
    /// The start corner `(0, 0)`.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Build a coordinate from its row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear index `row * dims + col`.
    pub fn to_index(self, dims: usize) -> usize {
        self.row * dims + self.col
    }

    /// Inverse of [`GridCoord::to_index`].
    pub fn from_index(index: usize, dims: usize) -> Self {
        Self {
            row: index / dims,
            col: index % dims,
        }
    }

    /// Whether both components are `< dims`.
    pub fn in_bounds(self, dims: usize) -> bool {
        self.row < dims && self.col < dims
    }
}

/// Zero-based frame number on a storyboard timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> GridwalkResult<Self> {
        if start.0 > end.0 {
            return Err(GridwalkError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range of `len` frames beginning at `start`.
    pub fn starting_at(start: FrameIndex, len: u64) -> Self {
        Self {
            start,
            end: FrameIndex(start.0.saturating_add(len)),
        }
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Whether the range covers no frame.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Whether `f` lies inside the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Rational frame rate `num / den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> GridwalkResult<Self> {
        if den == 0 {
            return Err(GridwalkError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(GridwalkError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of `frames` frames in seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Whole frames contained in `secs` seconds (negative input yields 0).
    ///
    /// Products within `1e-9` of the next whole frame count as that frame, so
    /// `0.29 s` at 100 fps is 29 frames rather than 28.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64() + FRAME_SNAP).floor().max(0.0) as u64
    }
}

const FRAME_SNAP: f64 = 1e-9;

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Premultiply straight (non-premultiplied) channels.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
