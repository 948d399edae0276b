//! Tests for race/ethnicity taxonomy normalization

mod common;

use common::person;
use ppmf_reid::algorithm::taxonomy::normalize_persons;
use ppmf_reid::{Person, RaceAttribute, RaceEthnicity, ReidError};

fn messy_population() -> Vec<Person> {
    let mut hispanic_white = person(100, 1, 30, RaceAttribute::Hispanic);
    hispanic_white.race.racwht = 1;

    let mut multi = person(100, 2, 40, RaceAttribute::White);
    multi.race.racblk = 1;
    multi.race.racaian = 1;

    vec![
        hispanic_white,
        multi,
        person(100, 3, 50, RaceAttribute::Asian),
        person(101, 1, 12, RaceAttribute::Sor),
    ]
}

#[test]
fn test_normalization_totality() {
    let normalized = normalize_persons(&messy_population()).unwrap();
    for p in &normalized {
        assert_eq!(p.race.category_sum(), 1);
    }
    assert_eq!(
        normalized[0].race,
        RaceEthnicity::single(RaceAttribute::Hispanic)
    );
    assert_eq!(
        normalized[1].race,
        RaceEthnicity::single(RaceAttribute::Multi)
    );
    assert_eq!(
        normalized[2].race,
        RaceEthnicity::single(RaceAttribute::Asian)
    );
}

#[test]
fn test_normalization_idempotence() {
    let once = normalize_persons(&messy_population()).unwrap();
    let twice = normalize_persons(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_input_not_mutated() {
    let population = messy_population();
    let before = population.clone();
    let _ = normalize_persons(&population).unwrap();
    assert_eq!(population, before);
}

#[test]
fn test_corrupt_record_is_fatal() {
    let mut population = messy_population();
    population[2].race = RaceEthnicity::default();
    let result = normalize_persons(&population);
    assert!(matches!(
        result,
        Err(ReidError::TaxonomyInvariant { index: 2, sum: 0 })
    ));
}

#[test]
fn test_non_geography_fields_preserved() {
    let population = messy_population();
    let normalized = normalize_persons(&population).unwrap();
    for (before, after) in population.iter().zip(&normalized) {
        assert_eq!(before.tract, after.tract);
        assert_eq!(before.block, after.block);
        assert_eq!(before.age, after.age);
        assert_eq!(before.relationship, after.relationship);
    }
}
