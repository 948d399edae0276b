//! Attacker-visible records and their held-out ground truth
//!
//! The two views are produced together and share a row index; the ground
//! truth is consumed only by scoring, never by linkage.

use crate::models::{RaceEthnicity, Sex, StratumKey};

/// One attacker-visible record of the simulated commercial dataset.
/// Sensitive attributes are redacted; only geography and basic
/// demographics survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommercialRecord {
    /// Row index shared with the ground-truth view
    pub index: usize,
    /// State FIPS code
    pub state: u32,
    /// County FIPS code without the state digits
    pub county: u32,
    /// Census tract code
    pub tract: u32,
    /// Census block code
    pub block: u32,
    /// Age in completed years
    pub age: u8,
    /// Sex
    pub sex: Sex,
    /// Voting-age indicator derived from age
    pub voting_age: bool,
}

impl CommercialRecord {
    /// The stratum this record falls in
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

/// Held-out sensitive attributes for one attacker-visible record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundTruthRecord {
    /// Row index shared with the commercial view
    pub index: usize,
    /// Race/ethnicity indicators
    pub race: RaceEthnicity,
}
