use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{Metric, PropertyClass};

/// A dated record of market-level metric values.
///
/// Any metric value may be absent; absence is meaningful (a gap in the
/// source data) and must never be conflated with zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub date: NaiveDate,
    pub avg_rent_per_sqft: Option<Decimal>,
    pub avg_occupancy_rate: Option<Decimal>,
    pub renewal_rate: Option<Decimal>,
    /// Share of leases signed with new tenants. Carried in the data and
    /// rendered in overview responses, but not a catalog metric: the
    /// property side has no counterpart to compare against.
    pub new_deal_rate: Option<Decimal>,
    pub avg_lease_term_months: Option<Decimal>,
    pub avg_time_to_lease_days: Option<Decimal>,
}

impl MarketSnapshot {
    /// The benchmark value for a catalog metric, if present.
    pub fn value(&self, metric: Metric) -> Option<Decimal> {
        match metric {
            Metric::RentPerSqft => self.avg_rent_per_sqft,
            Metric::OccupancyRate => self.avg_occupancy_rate,
            Metric::RenewalRate => self.renewal_rate,
            Metric::LeaseTermMonths => self.avg_lease_term_months,
            Metric::TimeToLeaseDays => self.avg_time_to_lease_days,
        }
    }
}

/// A metro-level market and its snapshot history.
///
/// Snapshots are kept in chronological order with at most one per date;
/// the datastore enforces both at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub market_id: i64,
    pub market_name: String,
    pub city: String,
    pub state: String,
    pub market_type: String,
    pub performance: Vec<MarketSnapshot>,
}

/// A property's current performance figures. Each field is independently
/// nullable; consumers must handle the absent case explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyPerformance {
    pub current_occupancy_rate: Option<Decimal>,
    pub current_avg_rent_per_sqft: Option<Decimal>,
    pub renewal_rate_ytd: Option<Decimal>,
    pub avg_lease_term_months: Option<Decimal>,
    pub avg_time_to_lease_days: Option<Decimal>,
}

impl PropertyPerformance {
    /// The property-side value for a catalog metric, if present.
    ///
    /// The renewal comparison uses the year-to-date figure, which is the
    /// only renewal number tracked per property.
    pub fn value(&self, metric: Metric) -> Option<Decimal> {
        match metric {
            Metric::RentPerSqft => self.current_avg_rent_per_sqft,
            Metric::OccupancyRate => self.current_occupancy_rate,
            Metric::RenewalRate => self.renewal_rate_ytd,
            Metric::LeaseTermMonths => self.avg_lease_term_months,
            Metric::TimeToLeaseDays => self.avg_time_to_lease_days,
        }
    }
}

/// A single commercial asset, referencing (not owning) its market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub property_id: i64,
    pub name: String,
    pub address: String,
    pub market_id: i64,
    pub area_sqft: i64,
    pub year_built: i32,
    pub property_class: PropertyClass,
    pub performance: PropertyPerformance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            avg_rent_per_sqft: Some(dec!(38.20)),
            avg_occupancy_rate: None,
            renewal_rate: Some(dec!(71.5)),
            new_deal_rate: Some(dec!(28.5)),
            avg_lease_term_months: Some(dec!(48)),
            avg_time_to_lease_days: Some(dec!(94)),
        }
    }

    #[test]
    fn snapshot_accessor_covers_catalog() {
        let snap = snapshot();
        assert_eq!(snap.value(Metric::RentPerSqft), Some(dec!(38.20)));
        assert_eq!(snap.value(Metric::OccupancyRate), None);
        assert_eq!(snap.value(Metric::TimeToLeaseDays), Some(dec!(94)));
    }

    #[test]
    fn renewal_comparison_uses_ytd_figure() {
        let perf = PropertyPerformance {
            current_occupancy_rate: None,
            current_avg_rent_per_sqft: None,
            renewal_rate_ytd: Some(dec!(68.0)),
            avg_lease_term_months: None,
            avg_time_to_lease_days: None,
        };
        assert_eq!(perf.value(Metric::RenewalRate), Some(dec!(68.0)));
    }
}
