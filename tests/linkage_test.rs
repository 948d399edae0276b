//! Tests for commercial-data derivation and statistical linkage

mod common;

use common::{gq_person, person};
use ppmf_reid::algorithm::commercial::{check_alignment, simulate_commercial};
use ppmf_reid::algorithm::linkage::{link_records, simple_impute_records, summarize_strata};
use ppmf_reid::algorithm::noise::simulate_exact;
use ppmf_reid::algorithm::taxonomy::normalize_persons;
use ppmf_reid::{Person, RaceAttribute};

/// The reference scenario: four voting-age white residents of one block
fn single_stratum_population() -> Vec<Person> {
    (0..4)
        .map(|i| person(100, 1, 30 + i, RaceAttribute::White))
        .collect()
}

#[test]
fn test_commercial_view_alignment() {
    let mut population = single_stratum_population();
    population.push(gq_person(100, 1, 60, RaceAttribute::Black));
    let population = normalize_persons(&population).unwrap();

    let (commercial, ground_truth) = simulate_commercial(&population);
    check_alignment(&commercial, &ground_truth).unwrap();

    // group-quarters residents are invisible to the attacker
    assert_eq!(commercial.len(), 4);
    assert!(commercial.iter().all(|record| record.index < 4));
}

#[test]
fn test_single_stratum_scenario() {
    let population = normalize_persons(&single_stratum_population()).unwrap();
    let (commercial, _) = simulate_commercial(&population);

    let strata = summarize_strata(&simulate_exact(&population));
    let linked = link_records(&commercial, &strata);

    assert_eq!(linked.len(), 4);
    for record in &linked {
        assert_eq!(record.n_match, 4);
        assert_eq!(record.estimate(RaceAttribute::White), Some(1.0));
        assert_eq!(record.estimate(RaceAttribute::Hispanic), Some(0.0));
        assert!(record.is_fully_determined());
        assert!(!record.is_unique_match());
    }
}

#[test]
fn test_baseline_imputation() {
    let population = normalize_persons(&single_stratum_population()).unwrap();
    let (commercial, _) = simulate_commercial(&population);

    let linked = simple_impute_records(&commercial);
    for record in &linked {
        assert_eq!(record.n_match, 0);
        assert_eq!(record.estimate(RaceAttribute::White), Some(1.0));
        for attr in RaceAttribute::ALL {
            if attr != RaceAttribute::White {
                assert_eq!(record.estimate(attr), Some(0.0));
            }
        }
    }
}

#[test]
fn test_missing_stratum_is_not_an_error() {
    let population = normalize_persons(&single_stratum_population()).unwrap();
    let (commercial, _) = simulate_commercial(&population);

    // population confined to a different block than the attacker records
    let elsewhere = normalize_persons(&[person(100, 9, 45, RaceAttribute::White)]).unwrap();
    let strata = summarize_strata(&simulate_exact(&elsewhere));
    let linked = link_records(&commercial, &strata);

    for record in &linked {
        assert_eq!(record.n_match, 0);
        assert_eq!(record.estimates, None);
        assert!(!record.is_fully_determined());
    }
}

#[test]
fn test_weighted_attribute_fractions() {
    let mut population = single_stratum_population();
    population.pop();
    population.push(person(100, 1, 52, RaceAttribute::Black));
    let population = normalize_persons(&population).unwrap();

    let (commercial, _) = simulate_commercial(&population);
    let strata = summarize_strata(&simulate_exact(&population));
    let linked = link_records(&commercial, &strata);

    for record in &linked {
        assert_eq!(record.n_match, 4);
        assert_eq!(record.estimate(RaceAttribute::White), Some(0.75));
        assert_eq!(record.estimate(RaceAttribute::Black), Some(0.25));
        assert!(!record.is_fully_determined());
    }
}

#[test]
fn test_group_quarters_count_toward_matches() {
    // one household resident and one institutionalized resident share a block
    let population = normalize_persons(&[
        person(100, 1, 30, RaceAttribute::White),
        gq_person(100, 1, 35, RaceAttribute::Black),
    ])
    .unwrap();

    let (commercial, _) = simulate_commercial(&population);
    assert_eq!(commercial.len(), 1);

    let strata = summarize_strata(&simulate_exact(&population));
    let linked = link_records(&commercial, &strata);
    assert_eq!(linked[0].n_match, 2);
    assert_eq!(linked[0].estimate(RaceAttribute::White), Some(0.5));
    assert!(!linked[0].is_unique_match());
}

#[test]
fn test_voting_age_splits_strata() {
    let population = normalize_persons(&[
        person(100, 1, 30, RaceAttribute::White),
        person(100, 1, 10, RaceAttribute::Black),
    ])
    .unwrap();

    let (commercial, _) = simulate_commercial(&population);
    let strata = summarize_strata(&simulate_exact(&population));
    let linked = link_records(&commercial, &strata);

    // the adult and the child live in the same block but different strata
    for record in &linked {
        assert_eq!(record.n_match, 1);
        assert!(record.is_unique_match());
        assert!(record.is_fully_determined());
    }
}
