//! Shared helpers for integration tests

use ppmf_reid::{Person, RaceAttribute, RaceEthnicity, Sex};

/// A household resident in the given tract/block with one race category set
#[must_use]
pub fn person(tract: u32, block: u32, age: u8, attr: RaceAttribute) -> Person {
    Person {
        state: 27,
        county: 51,
        tract,
        block,
        age,
        sex: Sex::Female,
        relationship: 0,
        race: RaceEthnicity::single(attr),
    }
}

/// A group-quarters resident, invisible to the attacker
#[must_use]
pub fn gq_person(tract: u32, block: u32, age: u8, attr: RaceAttribute) -> Person {
    Person {
        relationship: 16,
        ..person(tract, block, age, attr)
    }
}
