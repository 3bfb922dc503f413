#![deny(unsafe_code)]
//! Seedable one-dimensional gradient noise for procedural generation.
//!
//! Provides the [`GradientField`] lattice noise generator (lazy forward
//! growth, front eviction for streaming use), the [`fractal`] multi-octave
//! compositor with [`FractalParams`], the [`SplitMix64`] PRNG, and
//! [`Recipe`] for reproducible sampling runs.
//!
//! ```
//! use drift_core::{fractal, FractalParams, GradientField};
//!
//! let mut field = GradientField::new(42);
//! let smooth = field.value_at(0.5)?;
//! let layered = fractal(&mut field, 0.5, &FractalParams::default())?;
//! assert!(smooth.abs() <= 1.0 && layered.abs() <= 1.0);
//! # Ok::<(), drift_core::NoiseError>(())
//! ```

pub mod error;
pub mod field;
pub mod fractal;
pub mod params;
pub mod prng;
pub mod recipe;

pub use error::NoiseError;
pub use field::GradientField;
pub use fractal::{fractal, FractalParams};
pub use prng::SplitMix64;
pub use recipe::Recipe;
