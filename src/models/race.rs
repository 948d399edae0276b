//! Race and ethnicity indicator vector
//!
//! Every record in the pipeline carries the same fixed, ordered set of 0/1
//! category indicators. After normalization exactly one indicator is set:
//! the Hispanic flag wins over any race flag, and more than one race flag
//! collapses to the multi-race category.

use crate::models::RaceAttribute;

/// Ordered 0/1 indicators for the mutually exclusive race/ethnicity categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RaceEthnicity {
    /// Hispanic or Latino ethnicity
    pub hispanic: u8,
    /// White alone
    pub racwht: u8,
    /// Black or African American alone
    pub racblk: u8,
    /// American Indian or Alaska Native alone
    pub racaian: u8,
    /// Asian alone
    pub racasn: u8,
    /// Native Hawaiian or Other Pacific Islander alone
    pub racnhpi: u8,
    /// Some Other Race alone
    pub racsor: u8,
    /// Two or more races
    pub racmulti: u8,
}

impl RaceEthnicity {
    /// A vector with a single category set
    #[must_use]
    pub fn single(attr: RaceAttribute) -> Self {
        let mut race = Self::default();
        race.set(attr, 1);
        race
    }

    /// Indicator value for one category
    #[must_use]
    pub const fn get(&self, attr: RaceAttribute) -> u8 {
        match attr {
            RaceAttribute::Hispanic => self.hispanic,
            RaceAttribute::White => self.racwht,
            RaceAttribute::Black => self.racblk,
            RaceAttribute::Aian => self.racaian,
            RaceAttribute::Asian => self.racasn,
            RaceAttribute::Nhpi => self.racnhpi,
            RaceAttribute::Sor => self.racsor,
            RaceAttribute::Multi => self.racmulti,
        }
    }

    /// Set the indicator value for one category
    pub const fn set(&mut self, attr: RaceAttribute, value: u8) {
        match attr {
            RaceAttribute::Hispanic => self.hispanic = value,
            RaceAttribute::White => self.racwht = value,
            RaceAttribute::Black => self.racblk = value,
            RaceAttribute::Aian => self.racaian = value,
            RaceAttribute::Asian => self.racasn = value,
            RaceAttribute::Nhpi => self.racnhpi = value,
            RaceAttribute::Sor => self.racsor = value,
            RaceAttribute::Multi => self.racmulti = value,
        }
    }

    /// Sum over the six single-race flags only
    #[must_use]
    pub const fn race_flag_sum(&self) -> u32 {
        (self.racwht + self.racblk + self.racaian + self.racasn + self.racnhpi + self.racsor)
            as u32
    }

    /// Sum over all eight category indicators
    #[must_use]
    pub const fn category_sum(&self) -> u32 {
        self.hispanic as u32 + self.racmulti as u32 + self.race_flag_sum()
    }

    /// Apply the canonicalization rules and return the resulting vector.
    ///
    /// Hispanic takes precedence and zeroes every race flag; among the
    /// remaining records, more than one race flag collapses to `racmulti`.
    /// Idempotent by construction.
    #[must_use]
    pub const fn normalized(&self) -> Self {
        let mut out = *self;
        if out.hispanic == 1 {
            out.racwht = 0;
            out.racblk = 0;
            out.racaian = 0;
            out.racasn = 0;
            out.racnhpi = 0;
            out.racsor = 0;
            out.racmulti = 0;
        } else {
            match out.race_flag_sum() {
                0 => {}
                1 => out.racmulti = 0,
                _ => {
                    out.racwht = 0;
                    out.racblk = 0;
                    out.racaian = 0;
                    out.racasn = 0;
                    out.racnhpi = 0;
                    out.racsor = 0;
                    out.racmulti = 1;
                }
            }
        }
        out
    }

    /// Whether exactly one category is set
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        self.category_sum() == 1
    }

    /// Whether the vector names no category at all. Such rows are invalid
    /// and must not appear in a privatized population table.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.category_sum() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hispanic_precedence() {
        let race = RaceEthnicity {
            hispanic: 1,
            racwht: 1,
            racblk: 1,
            ..Default::default()
        };
        let normalized = race.normalized();
        assert_eq!(normalized, RaceEthnicity::single(RaceAttribute::Hispanic));
        assert!(normalized.is_normalized());
    }

    #[test]
    fn test_multi_race_collapse() {
        let race = RaceEthnicity {
            racwht: 1,
            racasn: 1,
            ..Default::default()
        };
        let normalized = race.normalized();
        assert_eq!(normalized, RaceEthnicity::single(RaceAttribute::Multi));
    }

    #[test]
    fn test_single_race_unchanged() {
        let race = RaceEthnicity::single(RaceAttribute::Black);
        assert_eq!(race.normalized(), race);
    }

    #[test]
    fn test_normalization_idempotent() {
        let inputs = [
            RaceEthnicity {
                hispanic: 1,
                racsor: 1,
                ..Default::default()
            },
            RaceEthnicity {
                racwht: 1,
                racblk: 1,
                racnhpi: 1,
                ..Default::default()
            },
            RaceEthnicity::single(RaceAttribute::Aian),
            RaceEthnicity::single(RaceAttribute::Multi),
        ];
        for race in inputs {
            let once = race.normalized();
            assert_eq!(once.normalized(), once);
        }
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(RaceEthnicity::default().is_degenerate());
        assert!(!RaceEthnicity::single(RaceAttribute::Sor).is_degenerate());
    }
}
