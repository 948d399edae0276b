//! Common domain type definitions

/// Sex of an individual as recorded in the synthetic population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Unknown or not specified
    Unknown,
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for Sex {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// Household relationship code for institutionalized group quarters
pub const RELATIONSHIP_GQ_INSTITUTIONAL: u8 = 16;
/// Household relationship code for noninstitutionalized group quarters
pub const RELATIONSHIP_GQ_NONINSTITUTIONAL: u8 = 17;

/// One of the mutually exclusive race/ethnicity categories.
///
/// The variant order is the reporting order used everywhere in the crate,
/// from indicator vectors to summary metric names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceAttribute {
    /// Hispanic or Latino ethnicity, taking precedence over all race flags
    Hispanic,
    /// White alone
    White,
    /// Black or African American alone
    Black,
    /// American Indian or Alaska Native alone
    Aian,
    /// Asian alone
    Asian,
    /// Native Hawaiian or Other Pacific Islander alone
    Nhpi,
    /// Some Other Race alone
    Sor,
    /// Two or more races
    Multi,
}

impl RaceAttribute {
    /// All categories in reporting order
    pub const ALL: [Self; 8] = [
        Self::Hispanic,
        Self::White,
        Self::Black,
        Self::Aian,
        Self::Asian,
        Self::Nhpi,
        Self::Sor,
        Self::Multi,
    ];

    /// Column name used in metric keys and serialized output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hispanic => "hispanic",
            Self::White => "racwht",
            Self::Black => "racblk",
            Self::Aian => "racaian",
            Self::Asian => "racasn",
            Self::Nhpi => "racnhpi",
            Self::Sor => "racsor",
            Self::Multi => "racmulti",
        }
    }

    /// Position of this category in the reporting order
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hispanic => 0,
            Self::White => 1,
            Self::Black => 2,
            Self::Aian => 3,
            Self::Asian => 4,
            Self::Nhpi => 5,
            Self::Sor => 6,
            Self::Multi => 7,
        }
    }
}
