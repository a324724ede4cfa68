use crate::error::Result;

mod build;
mod env;

pub use build::{BuildOptions, HeaderCheck, ParsePolicy};

const ENV_RESULT_LIMIT: &str = "AUTOCOMPLETE_RESULT_LIMIT";
const DEFAULT_RESULT_LIMIT: usize = 10;

/// Runtime settings for loading a store and presenting its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub build: BuildOptions,
    /// Maximum matches shown per query; `0` means unlimited.
    pub result_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            build: BuildOptions::default(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            build: BuildOptions::from_env()?,
            result_limit: env::read_env_usize(ENV_RESULT_LIMIT, defaults.result_limit, 0),
        })
    }

    /// `None` when every match should be shown.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        if self.result_limit == 0 {
            None
        } else {
            Some(self.result_limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreConfig;

    #[test]
    fn zero_result_limit_means_unlimited() {
        let config = StoreConfig {
            result_limit: 0,
            ..StoreConfig::default()
        };
        assert_eq!(config.limit(), None);
        assert_eq!(StoreConfig::default().limit(), Some(10));
    }
}
