use thiserror::Error;

/// Configuration shared by the line searches.
///
/// The precision `epsilon` is a search argument, not a config value, so that a
/// single config can drive a sweep over many precisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_iters: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Config {
    /// Iteration guard used by [`Config::default`].
    ///
    /// Narrowing `[-1e6, 1e6]` down to `1e-12` takes about 90 golden-section
    /// iterations, so this bound is only reached by a misbehaving objective.
    pub const DEFAULT_MAX_ITERS: usize = 1000;

    /// Creates a new config with a validated iteration guard.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxIters`] if `max_iters` is zero.
    pub fn new(max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self { max_iters })
    }

    /// Returns the maximum number of narrowing iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_guard_constant() {
        assert_eq!(Config::default().max_iters(), Config::DEFAULT_MAX_ITERS);
    }

    #[test]
    fn rejects_zero_max_iters() {
        assert_eq!(Config::new(0), Err(ConfigError::MaxIters));
    }

    #[test]
    fn accepts_positive_max_iters() {
        let config = Config::new(7).expect("valid config");
        assert_eq!(config.max_iters(), 7);
    }
}
