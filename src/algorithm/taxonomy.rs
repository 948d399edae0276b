//! Race/ethnicity taxonomy normalization
//!
//! Canonicalizes the indicator columns into a mutually exclusive,
//! collectively exhaustive category per record: the Hispanic flag takes
//! precedence and zeroes all race flags, and multiple race flags collapse
//! to the multi-race category. A record that ends up with anything other
//! than exactly one category set means the input was corrupt, and the unit
//! of work aborts.

use log::debug;

use crate::error::{ReidError, Result};
use crate::models::{Person, PopulationRow};

/// Normalize the race/ethnicity flags of every person record.
/// Returns a new record set; the input is not mutated.
pub fn normalize_persons(persons: &[Person]) -> Result<Vec<Person>> {
    let mut out = Vec::with_capacity(persons.len());
    for (index, person) in persons.iter().enumerate() {
        let race = person.race.normalized();
        if !race.is_normalized() {
            return Err(ReidError::TaxonomyInvariant {
                index,
                sum: race.category_sum(),
            });
        }
        out.push(Person {
            race,
            ..person.clone()
        });
    }
    debug!("normalized {} person records", out.len());
    Ok(out)
}

/// Normalize the race/ethnicity flags of every privatized population row.
/// Returns a new row set; the input is not mutated.
pub fn normalize_rows(rows: &[PopulationRow]) -> Result<Vec<PopulationRow>> {
    let mut out = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let race = row.race.normalized();
        if !race.is_normalized() {
            return Err(ReidError::TaxonomyInvariant {
                index,
                sum: race.category_sum(),
            });
        }
        out.push(PopulationRow { race, ..row.clone() });
    }
    debug!("normalized {} population rows", out.len());
    Ok(out)
}
