#![deny(unsafe_code)]
//! CLI binary for the drift noise generator.
//!
//! Subcommands:
//! - `sample` — produce a fractal noise series over an evenly spaced range
//! - `replay <recipe.json>` — re-run a serialized sampling recipe

mod error;

use clap::{Parser, Subcommand};
use drift_core::{fractal, GradientField, Recipe};
use error::CliError;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "drift", about = "Seedable 1D gradient noise sampler")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample fractal noise at evenly spaced coordinates.
    Sample {
        /// PRNG seed for deterministic output; omit for a system-sourced seed.
        #[arg(long)]
        seed: Option<u64>,

        /// First sampling coordinate.
        #[arg(long, default_value_t = 0.0)]
        start: f64,

        /// Coordinate increment between samples.
        #[arg(long, default_value_t = 0.1)]
        step: f64,

        /// Number of samples to produce.
        #[arg(short = 'n', long, default_value_t = 64)]
        count: usize,

        /// Number of noise layers to sum.
        #[arg(long, default_value_t = 4)]
        octaves: u32,

        /// Per-octave amplitude decay factor.
        #[arg(long, default_value_t = 0.5)]
        persistence: f64,

        /// Per-octave frequency growth factor.
        #[arg(long, default_value_t = 2.0)]
        lacunarity: f64,

        /// Evict lattice entries behind the sampling cursor as it advances.
        #[arg(long)]
        evict: bool,
    },
    /// Re-run a sampling recipe from a JSON file.
    Replay {
        /// Path to a recipe JSON file.
        path: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Sample {
            seed,
            start,
            step,
            count,
            octaves,
            persistence,
            lacunarity,
            evict,
        } => {
            let recipe = Recipe {
                seed,
                octaves,
                persistence,
                lacunarity,
                start,
                step,
                count,
            };
            let values = if evict {
                // Eviction is only sound when the cursor moves forward and
                // no octave can query below it: frequencies stay >= 1 when
                // lacunarity >= 1, and coordinates stay >= 0 when the range
                // starts there.
                if start < 0.0 || step <= 0.0 || lacunarity < 1.0 {
                    return Err(CliError::Input(
                        "--evict requires start >= 0, step > 0, and lacunarity >= 1".into(),
                    ));
                }
                sample_with_eviction(&recipe)?
            } else {
                recipe.run()?
            };
            emit(cli.json, &recipe, &values)?;
        }
        Command::Replay { path } => {
            let text = fs::read_to_string(&path)?;
            let recipe: Recipe = serde_json::from_str(&text)?;
            let values = recipe.run()?;
            emit(cli.json, &recipe, &values)?;
        }
    }

    Ok(())
}

/// Samples a recipe while discarding the lattice prefix the cursor has
/// passed, keeping field memory proportional to the octave span instead of
/// the distance travelled.
fn sample_with_eviction(recipe: &Recipe) -> Result<Vec<f64>, CliError> {
    let mut field = match recipe.seed {
        Some(seed) => GradientField::new(seed),
        None => GradientField::from_entropy(),
    };
    let params = recipe.fractal_params();
    let mut values = Vec::with_capacity(recipe.count);
    for i in 0..recipe.count {
        let t = recipe.start + i as f64 * recipe.step;
        let stale = t.floor() - field.lower_bound();
        if stale > 0.0 {
            field.discard(stale);
        }
        values.push(fractal(&mut field, t, &params)?);
    }
    Ok(values)
}

fn emit(json: bool, recipe: &Recipe, values: &[f64]) -> Result<(), CliError> {
    if json {
        let info = serde_json::json!({
            "recipe": recipe,
            "values": values,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for v in values {
            println!("{v}");
        }
        match recipe.seed {
            Some(seed) => eprintln!(
                "sampled {} values (seed {seed}, {} octaves) from {}",
                values.len(),
                recipe.octaves,
                recipe.start
            ),
            None => eprintln!(
                "sampled {} values (entropy seed, {} octaves) from {}",
                values.len(),
                recipe.octaves,
                recipe.start
            ),
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
