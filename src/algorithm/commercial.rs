//! Simulated commercial data
//!
//! Derives the attacker-visible dataset by redacting the sensitive columns
//! from the synthetic population and dropping group-quarters residents,
//! together with a held-out ground-truth view over the same rows. The two
//! views share a row index at all times; only scoring may read the ground
//! truth.

use log::debug;

use crate::error::{ReidError, Result};
use crate::models::{CommercialRecord, GroundTruthRecord, Person};

/// Derive the attacker view and its ground truth from the population,
/// excluding group-quarters residents
#[must_use]
pub fn simulate_commercial(persons: &[Person]) -> (Vec<CommercialRecord>, Vec<GroundTruthRecord>) {
    simulate_commercial_with(persons, |_| true)
}

/// Derive the attacker view and its ground truth, keeping only rows that
/// satisfy `predicate` on top of the group-quarters exclusion
pub fn simulate_commercial_with<F>(
    persons: &[Person],
    predicate: F,
) -> (Vec<CommercialRecord>, Vec<GroundTruthRecord>)
where
    F: Fn(&Person) -> bool,
{
    let mut commercial = Vec::with_capacity(persons.len());
    let mut ground_truth = Vec::with_capacity(persons.len());
    for (index, person) in persons.iter().enumerate() {
        if person.is_group_quarters() || !predicate(person) {
            continue;
        }
        commercial.push(CommercialRecord {
            index,
            state: person.state,
            county: person.county,
            tract: person.tract,
            block: person.block,
            age: person.age,
            sex: person.sex,
            voting_age: person.voting_age(),
        });
        ground_truth.push(GroundTruthRecord {
            index,
            race: person.race,
        });
    }
    debug!(
        "commercial view: {} of {} records visible to the attacker",
        commercial.len(),
        persons.len()
    );
    (commercial, ground_truth)
}

/// Check the shared-index invariant between the attacker view and the
/// ground truth
pub fn check_alignment(
    commercial: &[CommercialRecord],
    ground_truth: &[GroundTruthRecord],
) -> Result<()> {
    if commercial.len() != ground_truth.len() {
        return Err(ReidError::IndexMisaligned {
            position: commercial.len().min(ground_truth.len()),
        });
    }
    for (position, (record, truth)) in commercial.iter().zip(ground_truth).enumerate() {
        if record.index != truth.index {
            return Err(ReidError::IndexMisaligned { position });
        }
    }
    Ok(())
}
