use log::info;
use rand::prelude::*;

use ppmf_reid::{ExperimentConfig, Person, RaceAttribute, RaceEthnicity, Sex, run_experiment};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ExperimentConfig {
        epsilons: vec![0.01, 0.1, 1.0, 2.0, 4.0, 8.0],
        random_seed: Some(20210428),
        ..Default::default()
    };
    info!("{config}");

    let population = demo_population(&config, 2000);
    info!("generated {} person records", population.len());

    let summary = run_experiment(&population, &config)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// Small synthetic population for exercising the pipeline end to end.
/// Real experiments load the synthetic census product instead.
fn demo_population(config: &ExperimentConfig, size: usize) -> Vec<Person> {
    let mut rng = match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (0..size)
        .map(|_| {
            let race = match rng.random_range(0..100) {
                0..12 => RaceEthnicity::single(RaceAttribute::Hispanic),
                12..72 => RaceEthnicity::single(RaceAttribute::White),
                72..84 => RaceEthnicity::single(RaceAttribute::Black),
                84..90 => RaceEthnicity::single(RaceAttribute::Asian),
                90..93 => RaceEthnicity::single(RaceAttribute::Sor),
                93..95 => RaceEthnicity::single(RaceAttribute::Aian),
                95..96 => RaceEthnicity::single(RaceAttribute::Nhpi),
                // raw multi-flag records exercise the taxonomy collapse
                _ => RaceEthnicity {
                    racwht: 1,
                    racblk: 1,
                    ..Default::default()
                },
            };
            Person {
                state: config.state_fips,
                county: config.county_fips,
                tract: 100 + rng.random_range(0..4),
                block: 1 + rng.random_range(0..25),
                age: rng.random_range(0..90),
                sex: Sex::from(rng.random_range(1..=2_i32)),
                relationship: if rng.random_range(0..100) < 3 { 16 } else { 0 },
                race,
            }
        })
        .collect()
}
