//! One-dimensional gradient lattice with lazy growth and front eviction.
//!
//! A [`GradientField`] anchors a random sample in [-1, 1] at every integer
//! lattice coordinate it has been asked about, growing the lattice forward
//! on demand. Point queries interpolate between the two samples
//! surrounding the coordinate with a quintic smootherstep blend, so the
//! resulting curve is continuous with zero first and second derivative at
//! lattice boundaries. A caller that sweeps forward (a timeline, a terrain
//! scanline) can evict the prefix it has passed with [`GradientField::discard`],
//! keeping memory proportional to the active window instead of the total
//! distance travelled.

use crate::error::NoiseError;
use crate::prng::SplitMix64;

/// A growing sequence of lattice-anchored random samples, queryable at any
/// real coordinate at or above its lower bound.
///
/// The field owns its PRNG; for a fixed seed and a fixed sequence of
/// [`value_at`](GradientField::value_at) / [`discard`](GradientField::discard)
/// calls, every returned value is exactly reproducible.
#[derive(Debug, Clone)]
pub struct GradientField {
    /// Kept lattice samples; front entry is lattice point `discarded`.
    samples: Vec<f64>,
    /// Coordinate of the eviction boundary. Queries below this fail.
    lower_bound: f64,
    /// Exact count of evicted lattice entries. Kept as an integer rather
    /// than re-derived from `lower_bound` so index arithmetic cannot
    /// drift as float error accumulates across many discards.
    discarded: u64,
    rng: SplitMix64,
}

impl GradientField {
    /// Creates an empty field with the given seed and a lower bound of 0.
    ///
    /// No samples are drawn until the first query.
    pub fn new(seed: u64) -> Self {
        Self {
            samples: Vec::new(),
            lower_bound: 0.0,
            discarded: 0,
            rng: SplitMix64::new(seed),
        }
    }

    /// Creates an empty field with a system-sourced seed.
    ///
    /// The resulting noise is not reproducible across runs; use
    /// [`GradientField::new`] for deterministic output.
    pub fn from_entropy() -> Self {
        Self {
            samples: Vec::new(),
            lower_bound: 0.0,
            discarded: 0,
            rng: SplitMix64::from_entropy(),
        }
    }

    /// Coordinate of the eviction boundary; queries below it fail.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Cumulative count of lattice entries evicted by [`discard`](GradientField::discard).
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Number of lattice samples currently kept in memory.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no lattice samples are currently kept.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples the noise curve at coordinate `t`.
    ///
    /// Lattice points `floor(t)` and `floor(t) + 1` are generated first if
    /// they do not exist yet; growth is strictly append-only, so values at
    /// previously queried coordinates never change. The two surrounding
    /// samples are scaled by the signed distances to `t` and blended with
    /// the quintic smootherstep weight, which pins the curve to 0 at every
    /// lattice point.
    ///
    /// Returns [`NoiseError::OutOfBounds`] without touching any state when
    /// `t` is below the current lower bound.
    pub fn value_at(&mut self, t: f64) -> Result<f64, NoiseError> {
        if t < self.lower_bound {
            return Err(NoiseError::OutOfBounds {
                t,
                lower_bound: self.lower_bound,
            });
        }

        // lower_bound >= 0 always, so cell >= 0 and the u64 cast is exact.
        let cell = t.floor() as u64;
        while self.discarded + self.samples.len() as u64 <= cell + 1 {
            let sample = self.rng.next_range(-1.0, 1.0);
            self.samples.push(sample);
        }

        let lo = (cell - self.discarded) as usize;
        let d1 = t - t.floor();
        let d2 = d1 - 1.0;
        let a1 = self.samples[lo] * d1;
        let a2 = self.samples[lo + 1] * d2;
        Ok(lerp(a1, a2, ease(d1)))
    }

    /// Permanently evicts the lattice prefix below `lower_bound + amount`
    /// and advances the lower bound by exactly `amount`.
    ///
    /// The caller guarantees it will never query below the new bound
    /// again; doing so fails with [`NoiseError::OutOfBounds`]. Entries
    /// still needed for queries at or above the new bound are kept, so a
    /// coordinate that stays valid across a discard returns the identical
    /// value before and after. `amount` must be non-negative.
    pub fn discard(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "discard amount must be non-negative");
        // Entry count is computed from the fractional part of the current
        // bound, then accumulated as an exact integer: the lattice point
        // at floor(new bound) must survive since queries at the new bound
        // still interpolate from it.
        let evict = (amount + self.lower_bound.fract()).floor() as u64;
        let present = evict.min(self.samples.len() as u64) as usize;
        self.samples.drain(..present);
        self.discarded += evict;
        self.lower_bound += amount;
    }
}

/// Quintic smootherstep: `6x^5 - 15x^4 + 10x^3`, with `ease(0) = 0` and
/// `ease(1) = 1` and zero first/second derivative at both endpoints.
fn ease(x: f64) -> f64 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

fn lerp(start: f64, stop: f64, amt: f64) -> f64 {
    amt * (stop - start) + start
}
