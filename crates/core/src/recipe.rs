//! Reproducible specification for a noise sampling run.
//!
//! A [`Recipe`] captures everything needed to recreate a sample series:
//! the field seed, the fractal composition parameters, and the sampling
//! range. Two identical recipes with an explicit seed produce
//! bit-identical output.

use crate::error::NoiseError;
use crate::field::GradientField;
use crate::fractal::{fractal, FractalParams};
use serde::{Deserialize, Serialize};

/// Reproducible specification for a noise sampling run.
///
/// `seed: None` requests a system-sourced seed, trading reproducibility
/// for variety; everything else is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub seed: Option<u64>,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    pub start: f64,
    pub step: f64,
    pub count: usize,
}

impl Recipe {
    /// Creates a recipe with the default fractal stack, sampling `count`
    /// values from 0 at the given step.
    pub fn new(seed: Option<u64>, step: f64, count: usize) -> Self {
        let params = FractalParams::default();
        Self {
            seed,
            octaves: params.octaves,
            persistence: params.persistence,
            lacunarity: params.lacunarity,
            start: 0.0,
            step,
            count,
        }
    }

    /// The fractal composition parameters this recipe describes.
    pub fn fractal_params(&self) -> FractalParams {
        FractalParams {
            octaves: self.octaves,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
        }
    }

    /// Builds a field and produces the sample series.
    ///
    /// Samples are taken at `start + i * step` for `i` in `0..count`.
    /// A negative start (or a step that walks the cursor below zero)
    /// surfaces as [`NoiseError::OutOfBounds`] from the underlying field.
    pub fn run(&self) -> Result<Vec<f64>, NoiseError> {
        let mut field = match self.seed {
            Some(seed) => GradientField::new(seed),
            None => GradientField::from_entropy(),
        };
        let params = self.fractal_params();
        let mut values = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let t = self.start + i as f64 * self.step;
            values.push(fractal(&mut field, t, &params)?);
        }
        Ok(values)
    }
}
