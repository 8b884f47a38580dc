pub mod builtin;
pub mod naive;
pub mod pattern;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Shape shared by every validator, so harnesses can swap them freely.
pub type Validator = fn(&str) -> bool;

#[cfg_attr(feature = "cmd", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// split on dots, check every piece
    Naive,
    /// one forward scan, no allocation
    SinglePass,
    /// `std::net::Ipv4Addr` parser
    Std,
    /// precompiled regular expression
    Regex,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Naive,
        Strategy::SinglePass,
        Strategy::Std,
        Strategy::Regex,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::SinglePass => "single-pass",
            Strategy::Std => "std",
            Strategy::Regex => "regex",
        }
    }

    pub fn validator(&self) -> Validator {
        match self {
            Strategy::Naive => naive::validate,
            Strategy::SinglePass => crate::ip::validate,
            Strategy::Std => builtin::validate,
            Strategy::Regex => pattern::validate,
        }
    }

    pub fn validate(&self, candidate: &str) -> bool {
        (self.validator())(candidate)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::SinglePass
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl Display for UnknownStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown strategy: {}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .find(|st| st.name() == s)
            .copied()
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}
