use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Whether higher or lower values of a metric are favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// The tracked comparison metrics, in catalog order.
///
/// Every property-vs-market comparison and every trend series walks this
/// catalog in order, so consumers always see metrics in the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "rent_per_sqft")]
    RentPerSqft,
    #[serde(rename = "occupancy_rate")]
    OccupancyRate,
    #[serde(rename = "renewal_rate")]
    RenewalRate,
    #[serde(rename = "lease_term_months")]
    LeaseTermMonths,
    #[serde(rename = "time_to_lease_days")]
    TimeToLeaseDays,
}

impl Metric {
    pub const ALL: [Self; 5] = [
        Self::RentPerSqft,
        Self::OccupancyRate,
        Self::RenewalRate,
        Self::LeaseTermMonths,
        Self::TimeToLeaseDays,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RentPerSqft => "rent_per_sqft",
            Self::OccupancyRate => "occupancy_rate",
            Self::RenewalRate => "renewal_rate",
            Self::LeaseTermMonths => "lease_term_months",
            Self::TimeToLeaseDays => "time_to_lease_days",
        }
    }

    /// The display unit for this metric's values.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::RentPerSqft => "$/sqft/yr",
            Self::OccupancyRate => "%",
            Self::RenewalRate => "%",
            Self::LeaseTermMonths => "months",
            Self::TimeToLeaseDays => "days",
        }
    }

    /// Time-to-lease is the only metric where a lower value wins.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::TimeToLeaseDays => Polarity::LowerIsBetter,
            _ => Polarity::HigherIsBetter,
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single property metric compares to its market benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "outperforming")]
    Outperforming,
    #[serde(rename = "at-market")]
    AtMarket,
    #[serde(rename = "underperforming")]
    Underperforming,
    #[serde(rename = "no-data")]
    NoData,
}

impl Classification {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outperforming => "outperforming",
            Self::AtMarket => "at-market",
            Self::Underperforming => "underperforming",
            Self::NoData => "no-data",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Month-over-month movement of a market metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl Display for TrendDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Building quality class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyClass {
    A,
    B,
    C,
}

impl FromStr for PropertyClass {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(CoreError::InvalidPropertyClass(other.to_owned())),
        }
    }
}

impl Display for PropertyClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(s)
    }
}
