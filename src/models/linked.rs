//! Linkage outcomes

use crate::models::RaceAttribute;

/// An attacker-visible record augmented with its linkage outcome
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedRecord {
    /// Row index shared with the commercial view and ground truth
    pub index: usize,
    /// Population mass sharing this record's stratum; 0 when unmatched
    pub n_match: u64,
    /// Weighted fraction of stratum mass holding each attribute, in
    /// [`RaceAttribute::ALL`] order. `None` when the stratum held no
    /// population; treated as zero downstream.
    pub estimates: Option<[f64; 8]>,
}

impl LinkedRecord {
    /// Estimated fraction for one attribute, if the record matched a stratum
    #[must_use]
    pub fn estimate(&self, attr: RaceAttribute) -> Option<f64> {
        self.estimates.map(|est| est[attr.index()])
    }

    /// Exactly one population unit fell in this record's stratum, so the
    /// attribute estimates collapse to that unit's exact indicator values
    #[must_use]
    pub const fn is_unique_match(&self) -> bool {
        self.n_match == 1
    }

    /// Every attribute estimate is integral (0 or 1), a fully determined
    /// imputation. Can hold without a unique match when all population in
    /// the stratum agrees.
    #[must_use]
    pub fn is_fully_determined(&self) -> bool {
        self.estimates
            .is_some_and(|est| est.iter().all(|value| value.fract() == 0.0))
    }
}
