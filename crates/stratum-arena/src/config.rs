//! Arena configuration parameters.

use stratum_core::{is_power_of_two, ArenaError, DEFAULT_ALIGNMENT};

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated by [`Arena::with_config`](crate::Arena::with_config); values
/// are immutable once the arena exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Alignment used by [`Arena::alloc`](crate::Arena::alloc) and
    /// [`Arena::resize`](crate::Arena::resize).
    ///
    /// Default: two pointer widths. Must be a non-zero power of two.
    pub default_alignment: usize,
}

impl ArenaConfig {
    /// Default alignment: `2 * size_of::<usize>()`.
    pub const DEFAULT_ALIGNMENT: usize = DEFAULT_ALIGNMENT;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            default_alignment: Self::DEFAULT_ALIGNMENT,
        }
    }

    /// Override the default alignment.
    pub fn with_default_alignment(mut self, align: usize) -> Self {
        self.default_alignment = align;
        self
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.default_alignment == 0 || !is_power_of_two(self.default_alignment) {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "default_alignment must be a non-zero power of two (got {})",
                    self.default_alignment
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alignment_is_two_pointer_widths() {
        let config = ArenaConfig::default();
        assert_eq!(config.default_alignment, 2 * std::mem::size_of::<usize>());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn override_is_preserved() {
        let config = ArenaConfig::new().with_default_alignment(64);
        assert_eq!(config.default_alignment, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_alignment_rejected() {
        let config = ArenaConfig::new().with_default_alignment(0);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn non_power_of_two_rejected() {
        let err = ArenaConfig::new()
            .with_default_alignment(24)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("got 24"));
    }
}
