//! Shell configuration

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellConfigError {
    #[error("fallback path {0:?} must start with '/'")]
    InvalidFallbackPath(String),
}

/// User-facing configuration for the application shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Whether the store rejects out-of-band state replacement. On by
    /// default; turn off only for embedding layers that hydrate state
    /// wholesale.
    pub strict: bool,
    /// Path re-resolved when a navigated path matches no route
    pub fallback_path: String,
}

impl ShellConfig {
    pub const DEFAULT_FALLBACK: &'static str = "/home";

    /// Validates the configuration before bootstrap
    pub fn validate(&self) -> Result<(), ShellConfigError> {
        if !self.fallback_path.starts_with('/') {
            return Err(ShellConfigError::InvalidFallbackPath(
                self.fallback_path.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            strict: true,
            fallback_path: Self::DEFAULT_FALLBACK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_with_home_fallback() {
        let config = ShellConfig::default();
        assert!(config.strict);
        assert_eq!(config.fallback_path, "/home");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fallback_without_leading_slash_is_rejected() {
        let config = ShellConfig {
            fallback_path: "home".into(),
            ..ShellConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ShellConfigError::InvalidFallbackPath("home".into()))
        );
    }
}
