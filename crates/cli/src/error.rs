//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: noise error (query below the field's lower bound)
//! - 11: I/O error (recipe file read)
//! - 12: input error (bad flag combination, bad recipe contents)
//! - 13: serialization error (recipe parse, JSON output failure)

use drift_core::NoiseError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A noise-level error (out-of-bounds query).
    Noise(NoiseError),
    /// An I/O error (recipe file read).
    Io(String),
    /// A user input error (bad flag combination).
    Input(String),
    /// A serialization error (recipe parse or JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Noise(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Noise(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<NoiseError> for CliError {
    fn from(e: NoiseError) -> Self {
        CliError::Noise(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_error_exit_code_is_10() {
        let err = CliError::Noise(NoiseError::OutOfBounds {
            t: 0.5,
            lower_bound: 2.0,
        });
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("read failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad flags".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_noise_error_keeps_the_message() {
        let cli_err = CliError::from(NoiseError::OutOfBounds {
            t: 0.5,
            lower_bound: 2.0,
        });
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("0.5"));
        assert!(cli_err.to_string().contains("2"));
    }

    #[test]
    fn from_io_error_routes_to_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing recipe");
        let cli_err = CliError::from(io_err);
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("missing recipe"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
