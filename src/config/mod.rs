//! Configuration for a re-identification experiment.

use std::fmt;

use crate::error::{ReidError, Result};

/// Privacy budgets tested by default, matching the published experiment grid
pub const DEFAULT_EPSILONS: [f64; 14] = [
    0.01, 0.1, 1.0, 1.2, 1.25, 1.3, 1.35, 1.4, 1.6, 1.8, 2.0, 4.0, 6.0, 8.0,
];

/// Configuration for one (state, county) unit of work
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Two-letter state code, e.g. "MN"
    pub state: String,
    /// State FIPS code
    pub state_fips: u32,
    /// County FIPS code without the state digits
    pub county_fips: u32,
    /// Ordered list of privacy budgets to test
    pub epsilons: Vec<f64>,
    /// Number of disjoint tract chunks a large county is split into
    pub n_chunks: usize,
    /// Index of the chunk processed by this unit of work
    pub chunk_index: usize,
    /// Base RNG seed for the noise draws; `None` seeds from OS entropy
    pub random_seed: Option<u64>,
    /// Rescale noisy counts so the total population is preserved.
    /// Off by default: the published mechanism lets the total drift.
    pub rescale_total: bool,
}

impl ExperimentConfig {
    /// Check the configuration before any simulation begins
    pub fn validate(&self) -> Result<()> {
        for &epsilon in &self.epsilons {
            if !epsilon.is_finite() || epsilon <= 0.0 {
                return Err(ReidError::InvalidEpsilon(epsilon));
            }
        }
        if self.n_chunks == 0 || self.chunk_index >= self.n_chunks {
            return Err(ReidError::InvalidChunking {
                n_chunks: self.n_chunks,
                chunk_index: self.chunk_index,
            });
        }
        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            state: "MN".to_string(),
            state_fips: 27,
            county_fips: 51,
            epsilons: DEFAULT_EPSILONS.to_vec(),
            n_chunks: 1,
            chunk_index: 0,
            random_seed: None,
            rescale_total: false,
        }
    }
}

impl fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Experiment Configuration:")?;
        writeln!(
            f,
            "  Geography: {} ({:02}{:03})",
            self.state, self.state_fips, self.county_fips
        )?;
        writeln!(f, "  Epsilons: {:?}", self.epsilons)?;
        if self.n_chunks > 1 {
            writeln!(f, "  Chunk: {} of {}", self.chunk_index, self.n_chunks)?;
        }
        if let Some(seed) = self.random_seed {
            writeln!(f, "  Random Seed: {seed}")?;
        }
        writeln!(f, "  Rescale Total: {}", self.rescale_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExperimentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_nonpositive_epsilon_rejected() {
        let config = ExperimentConfig {
            epsilons: vec![1.0, 0.0],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ReidError::InvalidEpsilon(_))
        ));

        let config = ExperimentConfig {
            epsilons: vec![-2.0],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ExperimentConfig {
            epsilons: vec![f64::INFINITY],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_chunking_rejected() {
        let config = ExperimentConfig {
            n_chunks: 4,
            chunk_index: 4,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ReidError::InvalidChunking { .. })
        ));

        let config = ExperimentConfig {
            n_chunks: 0,
            chunk_index: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
