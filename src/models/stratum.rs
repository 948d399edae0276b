//! Stratum keys and privatized population rows

use crate::models::RaceEthnicity;

/// The join key for linkage: the finest granularity at which the privatized
/// population table reports geography, plus the voting-age split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StratumKey {
    /// State FIPS code
    pub state: u32,
    /// County FIPS code without the state digits
    pub county: u32,
    /// Census tract code
    pub tract: u32,
    /// Census block code
    pub block: u32,
    /// Voting-age indicator
    pub voting_age: bool,
}

/// One row of a privatized population table.
///
/// Either an original individual (exact mode, `pweight` 1.0) or an aggregated
/// histogram row materialized from a noisy stratum count (finite budget,
/// `pweight` the rounded count).
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationRow {
    /// State FIPS code
    pub state: u32,
    /// County FIPS code without the state digits
    pub county: u32,
    /// Census tract code
    pub tract: u32,
    /// Census block code
    pub block: u32,
    /// Voting-age indicator
    pub voting_age: bool,
    /// Race/ethnicity indicators
    pub race: RaceEthnicity,
    /// Population mass this row stands for
    pub pweight: f64,
}

impl PopulationRow {
    /// The stratum this row reports
    #[must_use]
    pub const fn stratum_key(&self) -> StratumKey {
        StratumKey {
            state: self.state,
            county: self.county,
            tract: self.tract,
            block: self.block,
            voting_age: self.voting_age,
        }
    }
}
