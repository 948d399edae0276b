//! Scoring and summarization of linkage results
//!
//! Aggregates the per-variant linked tables into uniqueness and correctness
//! counts, written under budget-qualified metric keys. All counts are exact
//! integers; the only randomness in the pipeline lives in the noise
//! simulation.

use std::collections::BTreeMap;

use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::experiment::ExperimentResults;
use crate::models::{CommercialRecord, GroundTruthRecord, LinkedRecord, RaceAttribute};

/// One summary record per (geography, configuration) unit of work.
///
/// The metric namespace is open ended: keys are generated per tested
/// privacy budget and per sensitive attribute, so new budgets need no
/// schema change.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Two-letter state code
    pub state: String,
    /// State FIPS code
    pub state_fips: u32,
    /// County FIPS code without the state digits
    pub county_fips: u32,
    /// Named counts, keyed by metric name
    #[serde(flatten)]
    pub metrics: BTreeMap<String, u64>,
}

impl Summary {
    /// Look up one metric by name
    #[must_use]
    pub fn metric(&self, key: &str) -> Option<u64> {
        self.metrics.get(key).copied()
    }
}

fn truth_flag(truth: &GroundTruthRecord, attr: RaceAttribute) -> f64 {
    f64::from(truth.race.get(attr))
}

/// Whether a linked record's estimates exactly equal the ground-truth vector
fn matches_truth(linked: &LinkedRecord, truth: &GroundTruthRecord) -> bool {
    linked.estimates.is_some_and(|est| {
        RaceAttribute::ALL
            .iter()
            .enumerate()
            .all(|(i, attr)| est[i] == truth_flag(truth, *attr))
    })
}

/// Fully determined and correct imputation counts restricted to individuals
/// outside their tract's modal race/ethnicity category
fn nonmajority_counts(
    commercial: &[CommercialRecord],
    ground_truth: &[GroundTruthRecord],
    linked: &[LinkedRecord],
) -> (u64, u64) {
    let mut groups: FxHashMap<(u32, u32, u32), Vec<usize>> = FxHashMap::default();
    for (position, record) in commercial.iter().enumerate() {
        groups
            .entry((record.state, record.county, record.tract))
            .or_default()
            .push(position);
    }

    let mut n_determined = 0;
    let mut n_correct = 0;
    for positions in groups.values() {
        let mut counts = [0u64; 8];
        for &position in positions {
            for (i, attr) in RaceAttribute::ALL.iter().enumerate() {
                counts[i] += u64::from(ground_truth[position].race.get(*attr));
            }
        }
        // modal category; earliest in reporting order wins ties
        let mut majority = 0;
        for i in 1..counts.len() {
            if counts[i] > counts[majority] {
                majority = i;
            }
        }
        let majority_attr = RaceAttribute::ALL[majority];

        for &position in positions {
            if ground_truth[position].race.get(majority_attr) != 0 {
                continue;
            }
            let record = &linked[position];
            if record.is_fully_determined() {
                n_determined += 1;
                if matches_truth(record, &ground_truth[position]) {
                    n_correct += 1;
                }
            }
        }
    }
    (n_determined, n_correct)
}

/// Aggregate all linked tables of one unit of work into its summary record
#[must_use]
pub fn summarize_results(results: &ExperimentResults) -> Summary {
    let mut metrics = BTreeMap::new();
    let ground_truth = &results.ground_truth;

    for (label, linked) in &results.linked {
        let n_unique_match = linked.iter().filter(|r| r.is_unique_match()).count() as u64;
        metrics.insert(format!("n_unique_match_eps_{label}"), n_unique_match);

        let mut n_determined = 0;
        let mut n_determined_correct = 0;
        for (record, truth) in linked.iter().zip(ground_truth) {
            if record.is_fully_determined() {
                n_determined += 1;
                if matches_truth(record, truth) {
                    n_determined_correct += 1;
                }
            }
        }
        metrics.insert(format!("n_unique_impute_all_eps_{label}"), n_determined);
        metrics.insert(
            format!("n_correct_impute_all_eps_{label}"),
            n_determined_correct,
        );

        for attr in RaceAttribute::ALL {
            let col = attr.name();
            let mut n_estimate_one = 0;
            let mut n_estimate_one_correct = 0;
            let mut n_unique_match_correct = 0;
            for (record, truth) in linked.iter().zip(ground_truth) {
                let estimate = record.estimate(attr);
                let flag = truth_flag(truth, attr);
                if estimate == Some(1.0) {
                    n_estimate_one += 1;
                    if flag == 1.0 {
                        n_estimate_one_correct += 1;
                    }
                }
                if record.is_unique_match() && estimate.is_some_and(|value| value == flag) {
                    n_unique_match_correct += 1;
                }
            }
            metrics.insert(
                format!("n_unique_impute_attribute_{col}_eps_{label}"),
                n_estimate_one,
            );
            metrics.insert(
                format!("n_correct_impute_attribute_{col}_eps_{label}"),
                n_estimate_one_correct,
            );
            metrics.insert(
                format!("n_unique_match_correct_impute_attribute_{col}_eps_{label}"),
                n_unique_match_correct,
            );
        }

        let (n_nonmajority, n_nonmajority_correct) =
            nonmajority_counts(&results.commercial, ground_truth, linked);
        metrics.insert(
            format!("n_unique_impute_nonmajority_{label}"),
            n_nonmajority,
        );
        metrics.insert(
            format!("n_correct_impute_nonmajority_eps_{label}"),
            n_nonmajority_correct,
        );
    }

    // base rates for normalization
    if !results.linked.is_empty() {
        for attr in RaceAttribute::ALL {
            let total: u64 = ground_truth
                .iter()
                .map(|truth| u64::from(truth.race.get(attr)))
                .sum();
            metrics.insert(format!("n_{}", attr.name()), total);
        }
        metrics.insert("n_total".to_string(), ground_truth.len() as u64);
    }

    debug!(
        "summarized {} variants into {} metrics",
        results.linked.len(),
        metrics.len()
    );
    Summary {
        state: results.config.state.clone(),
        state_fips: results.config.state_fips,
        county_fips: results.config.county_fips,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RaceEthnicity;

    #[test]
    fn test_matches_truth_requires_exact_vector() {
        let truth = GroundTruthRecord {
            index: 0,
            race: RaceEthnicity::single(RaceAttribute::Black),
        };
        let mut estimates = [0.0; 8];
        estimates[RaceAttribute::Black.index()] = 1.0;
        let linked = LinkedRecord {
            index: 0,
            n_match: 1,
            estimates: Some(estimates),
        };
        assert!(matches_truth(&linked, &truth));

        let mut wrong = estimates;
        wrong[RaceAttribute::White.index()] = 1.0;
        let linked = LinkedRecord {
            index: 0,
            n_match: 2,
            estimates: Some(wrong),
        };
        assert!(!matches_truth(&linked, &truth));

        let unmatched = LinkedRecord {
            index: 0,
            n_match: 0,
            estimates: None,
        };
        assert!(!matches_truth(&unmatched, &truth));
    }
}
