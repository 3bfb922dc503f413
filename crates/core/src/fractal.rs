//! Multi-octave fractal composition over a [`GradientField`].
//!
//! Stacks several noise layers sampled at geometrically scaled
//! frequencies and weights, then normalizes by the total weight so the
//! output stays in the same range as a single layer. Low octave counts
//! give smooth rolling curves; higher counts add fine detail.

use crate::error::NoiseError;
use crate::field::GradientField;
use crate::params::{param_f64, param_u32};
use serde_json::Value;

/// Default octave count — four layers covers most terrain/animation uses.
const DEFAULT_OCTAVES: u32 = 4;
/// Default persistence — each octave carries half the previous amplitude.
const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Default lacunarity — each octave doubles the sampling frequency.
const DEFAULT_LACUNARITY: f64 = 2.0;

/// Composition parameters for fractal noise.
///
/// Use [`Default`] for the classic octave stack (4 octaves, persistence
/// 0.5, lacunarity 2.0). Values are not validated; degenerate settings
/// (zero octaves, non-positive persistence) produce degenerate but
/// well-defined output rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    /// Number of noise layers to sum.
    pub octaves: u32,
    /// Per-octave amplitude decay factor.
    pub persistence: f64,
    /// Per-octave frequency growth factor.
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            lacunarity: DEFAULT_LACUNARITY,
        }
    }
}

impl FractalParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            octaves: param_u32(params, "octaves", DEFAULT_OCTAVES),
            persistence: param_f64(params, "persistence", DEFAULT_PERSISTENCE),
            lacunarity: param_f64(params, "lacunarity", DEFAULT_LACUNARITY),
        }
    }
}

/// Samples fractal noise at coordinate `t`.
///
/// Each octave queries the field at `t * frequency` and accumulates the
/// result weighted by the current amplitude; frequency then grows by
/// `lacunarity` and amplitude decays by `persistence`. The sum is
/// normalized by the total amplitude, so a single octave reduces exactly
/// to [`GradientField::value_at`]. Zero octaves yield `0.0`.
///
/// Only the field's lazy growth state is mutated; any
/// [`NoiseError::OutOfBounds`] from an octave query propagates unchanged.
pub fn fractal(
    field: &mut GradientField,
    t: f64,
    params: &FractalParams,
) -> Result<f64, NoiseError> {
    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_amplitude = 0.0;
    for _ in 0..params.octaves {
        value += field.value_at(t * frequency)? * amplitude;
        max_amplitude += amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }
    if max_amplitude == 0.0 {
        return Ok(0.0);
    }
    Ok(value / max_amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn default_params_match_documented_values() {
        let params = FractalParams::default();
        assert_eq!(params.octaves, 4);
        assert!((params.persistence - 0.5).abs() < f64::EPSILON);
        assert!((params.lacunarity - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_octave_reduces_to_a_direct_lookup() {
        // With one octave the amplitude sum is exactly 1, so the
        // persistence and lacunarity settings cannot influence the result.
        let params = FractalParams {
            octaves: 1,
            persistence: 0.25,
            lacunarity: 3.5,
        };
        let mut composed = GradientField::new(42);
        let mut direct = GradientField::new(42);
        for &t in &[0.1, 0.5, 2.75, 6.3] {
            assert_eq!(
                fractal(&mut composed, t, &params).unwrap(),
                direct.value_at(t).unwrap(),
                "single-octave fractal diverged at t = {t}"
            );
        }
    }

    #[test]
    fn three_octave_stack_matches_golden_value() {
        let params = FractalParams {
            octaves: 3,
            ..FractalParams::default()
        };
        let mut field = GradientField::new(42);
        let got = fractal(&mut field, 0.4, &params).unwrap();
        assert!(
            (got - 0.191_179_048_837_323_45).abs() < TOLERANCE,
            "fractal(0.4) = {got}"
        );
    }

    #[test]
    fn default_stack_matches_golden_value() {
        let mut field = GradientField::new(7);
        let got = fractal(&mut field, 0.9, &FractalParams::default()).unwrap();
        assert!(
            (got - 0.003_597_923_049_242_988).abs() < TOLERANCE,
            "fractal(0.9) = {got}"
        );
    }

    #[test]
    fn zero_octaves_yield_zero_without_growing_the_field() {
        let params = FractalParams {
            octaves: 0,
            ..FractalParams::default()
        };
        let mut field = GradientField::new(42);
        assert_eq!(fractal(&mut field, 5.0, &params).unwrap(), 0.0);
        assert!(field.is_empty(), "degenerate composition must not draw samples");
    }

    #[test]
    fn out_of_bounds_from_an_octave_propagates() {
        let mut field = GradientField::new(42);
        field.discard(3.0);
        // The first octave queries at t itself, which is below the bound.
        let err = fractal(&mut field, 1.0, &FractalParams::default()).unwrap_err();
        assert_eq!(
            err,
            NoiseError::OutOfBounds {
                t: 1.0,
                lower_bound: 3.0
            }
        );
    }

    #[test]
    fn from_json_falls_back_to_defaults() {
        let params = FractalParams::from_json(&serde_json::json!({}));
        assert_eq!(params, FractalParams::default());
    }

    #[test]
    fn from_json_extracts_partial_overrides() {
        let params = FractalParams::from_json(&serde_json::json!({
            "octaves": 6,
            "lacunarity": 1.9
        }));
        assert_eq!(params.octaves, 6);
        assert!((params.persistence - 0.5).abs() < f64::EPSILON);
        assert!((params.lacunarity - 1.9).abs() < f64::EPSILON);
    }

    #[test]
    fn from_json_ignores_wrong_types() {
        let params = FractalParams::from_json(&serde_json::json!({
            "octaves": "six",
            "persistence": null
        }));
        assert_eq!(params, FractalParams::default());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalized_output_stays_bounded(
                seed: u64,
                t in 0.0_f64..10.0,
                octaves in 1_u32..5,
                persistence in 0.01_f64..2.0,
                lacunarity in 0.0_f64..2.0,
            ) {
                // Every octave sample is in [-1, 1] and the weights are
                // positive, so the weighted mean cannot leave [-1, 1].
                let params = FractalParams { octaves, persistence, lacunarity };
                let mut field = GradientField::new(seed);
                let v = fractal(&mut field, t, &params).unwrap();
                prop_assert!(v.abs() <= 1.0, "fractal({t}) = {v} for seed {seed}");
            }

            #[test]
            fn composition_is_deterministic_per_seed(seed: u64, t in 0.0_f64..10.0) {
                let mut field_a = GradientField::new(seed);
                let mut field_b = GradientField::new(seed);
                let params = FractalParams::default();
                prop_assert_eq!(
                    fractal(&mut field_a, t, &params).unwrap(),
                    fractal(&mut field_b, t, &params).unwrap()
                );
            }
        }
    }
}
