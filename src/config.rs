use crate::error::{Result, WordCountError};

/// Worker threads used by the parallel counter unless configured otherwise
pub const DEFAULT_WORKERS: usize = 2;

/// Lines handed to a worker per claim
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Words printed when no topK argument is given
pub const DEFAULT_TOP_K: usize = 20;

/// Settings for the parallel counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    workers: usize,
    batch_size: usize,
}

impl ParallelConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> ParallelConfigBuilder {
        ParallelConfigBuilder::new()
    }

    /// Number of worker threads
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Lines per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Builder for [`ParallelConfig`]
#[derive(Debug, Clone)]
pub struct ParallelConfigBuilder {
    workers: usize,
    batch_size: usize,
}

impl ParallelConfigBuilder {
    /// Create a builder holding the default settings
    pub fn new() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the number of worker threads
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the number of lines per batch
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ParallelConfig> {
        if self.workers == 0 {
            return Err(WordCountError::ConfigError(
                "worker count must be at least 1".into(),
            ));
        }
        if self.batch_size == 0 {
            return Err(WordCountError::ConfigError(
                "batch size must be at least 1".into(),
            ));
        }

        Ok(ParallelConfig {
            workers: self.workers,
            batch_size: self.batch_size,
        })
    }
}

impl Default for ParallelConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a topK argument. Accepts any non-negative integer.
pub fn parse_top_k(value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| WordCountError::InvalidTopK {
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParallelConfig::builder().build().unwrap();
        assert_eq!(config, ParallelConfig::default());
        assert_eq!(config.workers(), 2);
        assert_eq!(config.batch_size(), 1000);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ParallelConfig::builder()
            .workers(8)
            .batch_size(64)
            .build()
            .unwrap();
        assert_eq!(config.workers(), 8);
        assert_eq!(config.batch_size(), 64);
    }

    #[test]
    fn test_zero_values_rejected() {
        let result = ParallelConfig::builder().workers(0).build();
        assert!(matches!(result, Err(WordCountError::ConfigError(_))));

        let result = ParallelConfig::builder().batch_size(0).build();
        assert!(matches!(result, Err(WordCountError::ConfigError(_))));
    }

    #[test]
    fn test_parse_top_k() {
        assert_eq!(parse_top_k("0").unwrap(), 0);
        assert_eq!(parse_top_k("25").unwrap(), 25);
        assert!(matches!(
            parse_top_k("-3"),
            Err(WordCountError::InvalidTopK { .. })
        ));
        assert!(matches!(
            parse_top_k("ten"),
            Err(WordCountError::InvalidTopK { .. })
        ));
    }
}
