use thiserror::Error;

/// Configuration for a bounded mirror descent run.
///
/// The engine has no stopping criterion of its own; `max_steps` only bounds
/// how many transitions [`run`](super::run) will request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_steps: usize,
}

/// Errors that can occur when validating a run config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_steps must be at least 1")]
    ZeroSteps,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_steps: 100 }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSteps`] if `max_steps` is zero.
    pub fn new(max_steps: usize) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(Self { max_steps })
    }

    /// Returns the maximum number of transitions.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}
