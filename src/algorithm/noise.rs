//! Privacy-noise simulation producing privatized population tables
//!
//! Two modes mirror the released PPMF products: an exact pass-through for an
//! infinite privacy budget, and the Laplace mechanism over an exhaustive
//! stratum histogram for a finite budget epsilon.
//!
//! The finite-epsilon histogram is keyed by the population's original
//! indicator combinations, so multi-race people occupy their multi-flag
//! cells; the materialized output is then run through taxonomy
//! normalization, which collapses those cells to the multi-race category
//! and applies Hispanic precedence.

use itertools::{Itertools, iproduct};
use log::debug;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::algorithm::taxonomy;
use crate::error::{ReidError, Result};
use crate::models::{Person, PopulationRow, RaceEthnicity};

/// Histogram cell key: geography, voting age, and the enumerated attribute
/// flags (hispanic plus the six single-race flags; racmulti is derived later)
type HistKey = (u32, u32, u32, u32, bool, u8, [u8; 6]);

/// One enumerated cell with its noised occupancy, prior to rounding
struct NoisyCell {
    state: u32,
    county: u32,
    tract: u32,
    block: u32,
    voting_age: bool,
    hispanic: u8,
    races: [u8; 6],
    noisy_count: f64,
}

fn hist_key(person: &Person) -> HistKey {
    (
        person.state,
        person.county,
        person.tract,
        person.block,
        person.voting_age(),
        person.race.hispanic,
        [
            person.race.racwht,
            person.race.racblk,
            person.race.racaian,
            person.race.racasn,
            person.race.racnhpi,
            person.race.racsor,
        ],
    )
}

/// Laplace scale calibrated for a unit-sensitivity counting query
/// under budget epsilon
fn laplace_scale(epsilon: f64) -> f64 {
    1.0 / (2.0 * epsilon)
}

/// Draw one sample from Laplace(0, scale) by inverse CDF over a uniform draw
fn sample_laplace<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> f64 {
    // u in [-0.5, 0.5); the closed end maps to -inf, absorbed by the clip
    let u = rng.random::<f64>() - 0.5;
    -scale * u.signum() * (1.0 - 2.0 * u.abs()).ln()
}

/// Sorted distinct values observed for one geography column
fn distinct_values<I: Iterator<Item = u32>>(values: I) -> Vec<u32> {
    let mut out: Vec<u32> = values.collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Simulate a privatized table with an infinite privacy budget: the
/// normalized population passes through unchanged, one row per person with
/// unit weight and a derived voting-age indicator. Deterministic.
#[must_use]
pub fn simulate_exact(persons: &[Person]) -> Vec<PopulationRow> {
    persons
        .iter()
        .map(|person| PopulationRow {
            state: person.state,
            county: person.county,
            tract: person.tract,
            block: person.block,
            voting_age: person.voting_age(),
            race: person.race,
            pweight: 1.0,
        })
        .collect()
}

/// Simulate a privatized table under a finite privacy budget.
///
/// Enumerates the full cross product of the observed geography codes
/// against every combination of the voting-age, Hispanic, and single-race
/// flags, adds one independent Laplace(0, 1/(2 epsilon)) draw per cell,
/// clips to non-negative, rounds to integral counts, and materializes the
/// surviving cells as aggregated population rows. Cells whose attribute
/// vector names no category at all are dropped.
///
/// Unless `rescale_total` is set, the total synthetic population is allowed
/// to drift from the true total.
pub fn simulate_with_epsilon<R: Rng + ?Sized>(
    persons: &[Person],
    epsilon: f64,
    rescale_total: bool,
    rng: &mut R,
) -> Result<Vec<PopulationRow>> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(ReidError::InvalidEpsilon(epsilon));
    }

    // True occupancy per histogram cell, one unit of mass per person
    let mut occupancy: FxHashMap<HistKey, f64> = FxHashMap::default();
    for person in persons {
        *occupancy.entry(hist_key(person)).or_insert(0.0) += 1.0;
    }

    let states = distinct_values(persons.iter().map(|p| p.state));
    let counties = distinct_values(persons.iter().map(|p| p.county));
    let tracts = distinct_values(persons.iter().map(|p| p.tract));
    let blocks = distinct_values(persons.iter().map(|p| p.block));

    // {0,1}^8 over voting_age, hispanic, and the six single-race flags
    let flag_space: Vec<Vec<u8>> = itertools::repeat_n(vec![0u8, 1u8], 8)
        .multi_cartesian_product()
        .collect();

    let scale = laplace_scale(epsilon);
    let mut cells = Vec::with_capacity(
        states.len() * counties.len() * tracts.len() * blocks.len() * flag_space.len(),
    );
    for (&state, &county, &tract, &block) in iproduct!(&states, &counties, &tracts, &blocks) {
        for flags in &flag_space {
            let voting_age = flags[0] == 1;
            let hispanic = flags[1];
            let races = [flags[2], flags[3], flags[4], flags[5], flags[6], flags[7]];
            let key = (state, county, tract, block, voting_age, hispanic, races);
            let true_count = occupancy.get(&key).copied().unwrap_or(0.0);
            let noisy_count = (true_count + sample_laplace(rng, scale)).max(0.0);
            cells.push(NoisyCell {
                state,
                county,
                tract,
                block,
                voting_age,
                hispanic,
                races,
                noisy_count,
            });
        }
    }

    if rescale_total {
        let noisy_total: f64 = cells.iter().map(|cell| cell.noisy_count).sum();
        if noisy_total > 0.0 {
            let factor = persons.len() as f64 / noisy_total;
            for cell in &mut cells {
                cell.noisy_count *= factor;
            }
        }
    }

    let mut rows = Vec::new();
    for cell in &cells {
        let pweight = cell.noisy_count.round();
        if pweight <= 0.0 {
            continue;
        }
        let race = RaceEthnicity {
            hispanic: cell.hispanic,
            racwht: cell.races[0],
            racblk: cell.races[1],
            racaian: cell.races[2],
            racasn: cell.races[3],
            racnhpi: cell.races[4],
            racsor: cell.races[5],
            ..Default::default()
        };
        // a cell naming no category holds no valid person
        if race.is_degenerate() {
            continue;
        }
        rows.push(PopulationRow {
            state: cell.state,
            county: cell.county,
            tract: cell.tract,
            block: cell.block,
            voting_age: cell.voting_age,
            race,
            pweight,
        });
    }

    let rows = taxonomy::normalize_rows(&rows)?;
    debug!(
        "epsilon {epsilon}: {} cells enumerated, {} rows materialized, mass {} (true {})",
        cells.len(),
        rows.len(),
        rows.iter().map(|r| r.pweight).sum::<f64>(),
        persons.len()
    );
    Ok(rows)
}
