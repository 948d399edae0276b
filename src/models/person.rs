//! Individual records of the synthetic population

use crate::models::types::{RELATIONSHIP_GQ_INSTITUTIONAL, RELATIONSHIP_GQ_NONINSTITUTIONAL};
use crate::models::{RaceEthnicity, Sex, StratumKey};

/// Minimum age reported as voting age in the population tables
pub const VOTING_AGE: u8 = 18;

/// One person of the synthetic population
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
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
    /// Household relationship code; 16 and 17 mark group-quarters residents
    pub relationship: u8,
    /// Race/ethnicity indicators
    pub race: RaceEthnicity,
}

impl Person {
    /// Whether this person is of voting age
    #[must_use]
    pub const fn voting_age(&self) -> bool {
        self.age >= VOTING_AGE
    }

    /// Whether this person lives in institutional or noninstitutional
    /// group quarters, excluded from the attacker-visible data
    #[must_use]
    pub const fn is_group_quarters(&self) -> bool {
        self.relationship == RELATIONSHIP_GQ_INSTITUTIONAL
            || self.relationship == RELATIONSHIP_GQ_NONINSTITUTIONAL
    }

    /// The stratum this person falls in
    #[must_use]
    pub const fn stratum_key(&self) -> StratumKey {
        StratumKey {
            state: self.state,
            county: self.county,
            tract: self.tract,
            block: self.block,
            voting_age: self.voting_age(),
        }
    }
}
