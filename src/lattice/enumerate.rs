use rayon::prelude::*;

use crate::{
    foundation::error::{GridwalkError, GridwalkResult},
    foundation::math::binomial,
    lattice::moves::{Move, MoveSequence},
};

/// Every distinct corner-to-corner path of one grid side length.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PathSet {
    /// Grid side length.
    pub n: usize,
    /// Distinct move sequences, in enumeration order.
    pub paths: Vec<MoveSequence>,
}

impl PathSet {
    /// Number of paths in the set.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false for a set produced by [`enumerate_paths`].
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn check_side(n: usize) -> GridwalkResult<()> {
    if n < 1 {
        return Err(GridwalkError::invalid_argument(format!(
            "grid side length must be >= 1, got {n}"
        )));
    }
    Ok(())
}

/// Closed-form number of monotonic paths across an `n`×`n` grid, `C(2(n-1), n-1)`.
pub fn count_paths(n: usize) -> GridwalkResult<u64> {
    check_side(n)?;
    let too_many =
        || GridwalkError::invalid_argument(format!("path count for n={n} does not fit in u64"));
    let steps = u64::try_from(n - 1).map_err(|_| too_many())?;
    let total = steps.checked_mul(2).ok_or_else(too_many)?;
    binomial(total, steps).ok_or_else(too_many)
}

// Upper bound on the result buffer reserved before enumeration starts.
const RESERVE_LIMIT: u64 = 1 << 16;

/// Enumerate every distinct monotonic path from the top-left to the bottom-right
/// cell of an `n`×`n` grid.
///
/// Each result holds exactly `n - 1` rights and `n - 1` downs and no two results are
/// equal. Paths come out in lexicographic order with [`Move::Right`] before
/// [`Move::Down`]; `n = 1` yields the single empty sequence.
#[tracing::instrument]
pub fn enumerate_paths(n: usize) -> GridwalkResult<Vec<MoveSequence>> {
    let expected = count_paths(n)?;
    let steps = n - 1;

    let reserve = usize::try_from(expected.min(RESERVE_LIMIT)).unwrap_or(0);
    let mut out = Vec::with_capacity(reserve);
    let mut prefix = Vec::with_capacity(2 * steps);
    place_moves(steps, steps, &mut prefix, &mut out);

    tracing::debug!(n, paths = out.len(), "enumerated lattice paths");
    debug_assert_eq!(out.len() as u64, expected);
    Ok(out)
}

// Choose the next move among those with remaining budget. Identical moves are never
// swapped, so each distinct arrangement is reached exactly once.
fn place_moves(
    rights_left: usize,
    downs_left: usize,
    prefix: &mut Vec<Move>,
    out: &mut Vec<MoveSequence>,
) {
    if rights_left == 0 && downs_left == 0 {
        out.push(MoveSequence::new(prefix.clone()));
        return;
    }
    if rights_left > 0 {
        prefix.push(Move::Right);
        place_moves(rights_left - 1, downs_left, prefix, out);
        prefix.pop();
    }
    if downs_left > 0 {
        prefix.push(Move::Down);
        place_moves(rights_left, downs_left - 1, prefix, out);
        prefix.pop();
    }
}

/// Enumerate several grid sizes concurrently on a dedicated worker pool.
///
/// Results keep the order of `sizes`. `threads = None` uses rayon's default.
#[tracing::instrument]
pub fn enumerate_many(sizes: &[usize], threads: Option<usize>) -> GridwalkResult<Vec<PathSet>> {
    for &n in sizes {
        check_side(n)?;
    }
    let pool = build_thread_pool(threads)?;

    let sets = pool.install(|| {
        sizes
            .par_iter()
            .map(|&n| -> GridwalkResult<PathSet> {
                Ok(PathSet {
                    n,
                    paths: enumerate_paths(n)?,
                })
            })
            .collect::<Vec<_>>()
    });

    sets.into_iter().collect()
}

fn build_thread_pool(threads: Option<usize>) -> GridwalkResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GridwalkError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GridwalkError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/lattice/enumerate.rs"]
mod tests;
