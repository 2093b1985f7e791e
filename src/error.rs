//! Game-specific error types.
//!
//! Errors only arise at the configuration boundary: reading and validating
//! `assets/game.toml`.  The simulation itself is infallible, and game over is
//! a session state reported through the frame snapshot, not an error.

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// The config file exists but could not be read.
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has mistyped keys.
    ConfigParse {
        /// Where the text came from; `None` for in-memory strings.
        path: Option<PathBuf>,
        message: String,
    },

    /// A tunable is outside the range the simulation can run with.
    InvalidConfig {
        /// Name of the config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, source } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            GameError::ConfigParse {
                path: Some(path),
                message,
            } => write!(f, "failed to parse config '{}': {}", path.display(), message),
            GameError::ConfigParse {
                path: None,
                message,
            } => write!(f, "failed to parse config: {}", message),
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is outside accepted range {}",
                name, value, expected
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite and not negative.
pub fn validate_non_negative(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "[0.0, ∞)",
        })
    }
}

/// Returns an error unless `friction` lies in (0, 1].
///
/// Zero would stop the ship dead on thrust release; anything above 1 makes it
/// accelerate while coasting.
pub fn validate_friction(value: f32) -> GameResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name: "friction",
            value,
            expected: "(0.0, 1.0]",
        })
    }
}
