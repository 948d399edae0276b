//! Statistical linkage of attacker records against a privatized population
//!
//! The privatized table is grouped by stratum once, each group summarized
//! into its population mass and weighted attribute fractions, and every
//! attacker record is then resolved with a single map lookup.

use log::debug;
use rustc_hash::FxHashMap;

use crate::models::{CommercialRecord, LinkedRecord, PopulationRow, RaceAttribute, StratumKey};

/// Precomputed summary of one stratum of the privatized population
#[derive(Debug, Clone, Copy)]
pub struct StratumSummary {
    /// Total population mass in the stratum
    pub n_match: f64,
    /// Weighted fraction of mass holding each attribute, in
    /// [`RaceAttribute::ALL`] order
    pub fractions: [f64; 8],
}

/// Group a privatized table by stratum key and summarize each group.
/// Built once per table; linkage then costs one lookup per attacker record.
#[must_use]
pub fn summarize_strata(rows: &[PopulationRow]) -> FxHashMap<StratumKey, StratumSummary> {
    let mut acc: FxHashMap<StratumKey, (f64, [f64; 8])> = FxHashMap::default();
    for row in rows {
        let entry = acc.entry(row.stratum_key()).or_insert((0.0, [0.0; 8]));
        entry.0 += row.pweight;
        for (i, attr) in RaceAttribute::ALL.iter().enumerate() {
            entry.1[i] += row.pweight * f64::from(row.race.get(*attr));
        }
    }
    debug!("summarized {} strata from {} rows", acc.len(), rows.len());
    acc.into_iter()
        .map(|(key, (mass, weighted))| {
            let mut fractions = [0.0; 8];
            for (fraction, total) in fractions.iter_mut().zip(weighted) {
                *fraction = total / mass;
            }
            (
                key,
                StratumSummary {
                    n_match: mass,
                    fractions,
                },
            )
        })
        .collect()
}

/// Left-join each attacker record onto its stratum summary.
/// Records whose stratum holds no population get `n_match` 0 and no
/// attribute estimates.
#[must_use]
pub fn link_records(
    commercial: &[CommercialRecord],
    strata: &FxHashMap<StratumKey, StratumSummary>,
) -> Vec<LinkedRecord> {
    commercial
        .iter()
        .map(|record| match strata.get(&record.stratum_key()) {
            Some(summary) => LinkedRecord {
                index: record.index,
                n_match: summary.n_match.round() as u64,
                estimates: Some(summary.fractions),
            },
            None => LinkedRecord {
                index: record.index,
                n_match: 0,
                estimates: None,
            },
        })
        .collect()
}

/// Floor-line comparator that ignores the population data entirely:
/// every record is imputed as non-Hispanic white with no population match
#[must_use]
pub fn simple_impute_records(commercial: &[CommercialRecord]) -> Vec<LinkedRecord> {
    let mut estimates = [0.0; 8];
    estimates[RaceAttribute::White.index()] = 1.0;
    commercial
        .iter()
        .map(|record| LinkedRecord {
            index: record.index,
            n_match: 0,
            estimates: Some(estimates),
        })
        .collect()
}
