//! End-to-end experiment driver
//!
//! One (state, county, chunk) unit of work, in memory: normalize the
//! population taxonomy, derive the attacker view and its ground truth,
//! simulate a privatized table per configured budget, link each against the
//! attacker view, and score the lot. File loading and batch scheduling live
//! with the caller.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::algorithm::scoring::{self, Summary};
use crate::algorithm::{commercial, linkage, noise, taxonomy};
use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::models::{CommercialRecord, GroundTruthRecord, LinkedRecord, Person};
use crate::utils::progress;

/// Label for the exact-mode (infinite budget) variant
pub const EXACT_LABEL: &str = "inf";
/// Label for the floor-line imputation variant
pub const BASELINE_LABEL: &str = "baseline";

/// Reporting label for one finite privacy budget
#[must_use]
pub fn epsilon_label(epsilon: f64) -> String {
    format!("sim_{epsilon:.2}")
}

/// Everything one unit of work produces, ready for scoring
#[derive(Debug, Clone)]
pub struct ExperimentResults {
    /// Configuration the unit ran under
    pub config: ExperimentConfig,
    /// Attacker-visible records
    pub commercial: Vec<CommercialRecord>,
    /// Held-out sensitive attributes, index-aligned with the attacker view
    pub ground_truth: Vec<GroundTruthRecord>,
    /// Linked tables in reporting order, one per privatization variant
    pub linked: Vec<(String, Vec<LinkedRecord>)>,
}

/// Prepare one unit of work and link every privatization variant
pub fn prepare_and_link(
    persons: &[Person],
    config: &ExperimentConfig,
) -> Result<ExperimentResults> {
    config.validate()?;

    // large counties are split into disjoint tract chunks
    let chunk: Vec<Person> = persons
        .iter()
        .filter(|p| (p.tract as usize) % config.n_chunks == config.chunk_index)
        .cloned()
        .collect();
    info!(
        "unit of work {}{:02}{:03}: {} of {} records in chunk {} of {}",
        config.state,
        config.state_fips,
        config.county_fips,
        chunk.len(),
        persons.len(),
        config.chunk_index,
        config.n_chunks
    );

    let normalized = taxonomy::normalize_persons(&chunk)?;
    let (commercial_view, ground_truth) = commercial::simulate_commercial(&normalized);
    commercial::check_alignment(&commercial_view, &ground_truth)?;

    let mut linked: Vec<(String, Vec<LinkedRecord>)> = Vec::new();
    if commercial_view.is_empty() {
        info!("no attacker-visible records after filtering; empty linkage result");
        return Ok(ExperimentResults {
            config: config.clone(),
            commercial: commercial_view,
            ground_truth,
            linked,
        });
    }

    linked.push((
        BASELINE_LABEL.to_string(),
        linkage::simple_impute_records(&commercial_view),
    ));

    let exact_rows = noise::simulate_exact(&normalized);
    linked.push((
        EXACT_LABEL.to_string(),
        linkage::link_records(&commercial_view, &linkage::summarize_strata(&exact_rows)),
    ));

    let pb = progress::create_main_progress_bar(
        config.epsilons.len() as u64,
        Some("Simulating privatized tables"),
    );
    // the noisy histogram consumes the chunk before category collapse, so
    // multi-race records occupy their multi-flag cells
    let noisy: Result<Vec<(String, Vec<LinkedRecord>)>> = config
        .epsilons
        .par_iter()
        .enumerate()
        .map(|(i, &epsilon)| {
            // derived per-variant seeds keep parallel runs reproducible
            let mut rng = match config.random_seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => StdRng::from_os_rng(),
            };
            let rows =
                noise::simulate_with_epsilon(&chunk, epsilon, config.rescale_total, &mut rng)?;
            let table = linkage::link_records(&commercial_view, &linkage::summarize_strata(&rows));
            pb.inc(1);
            Ok((epsilon_label(epsilon), table))
        })
        .collect();
    linked.extend(noisy?);
    progress::finish_progress_bar(&pb, Some("Privatized tables linked"));

    Ok(ExperimentResults {
        config: config.clone(),
        commercial: commercial_view,
        ground_truth,
        linked,
    })
}

/// Run one full unit of work and summarize it
pub fn run_experiment(persons: &[Person], config: &ExperimentConfig) -> Result<Summary> {
    let results = prepare_and_link(persons, config)?;
    Ok(scoring::summarize_results(&results))
}
