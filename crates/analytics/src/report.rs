use core_types::{Classification, Metric, PropertyClass, TrendDirection};
use rust_decimal::Decimal;
use serde::Serialize;

/// The comparison of one property metric against its market benchmark.
///
/// Constructed per request and discarded with the response; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarianceResult {
    pub metric: Metric,
    pub unit: &'static str,
    pub property_value: Option<Decimal>,
    pub market_value: Option<Decimal>,
    /// Signed percentage variance. `None` when either side is missing or
    /// the benchmark is zero; zero itself is a valid variance.
    pub variance_pct: Option<Decimal>,
    pub classification: Classification,
}

/// Month-over-month movement of one market metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendResult {
    pub metric: Metric,
    pub latest_value: Decimal,
    pub previous_value: Decimal,
    pub change_pct: Decimal,
    pub direction: TrendDirection,
}

/// How many metrics landed in each classification bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClassificationCounts {
    pub outperforming: usize,
    pub at_market: usize,
    pub underperforming: usize,
    pub no_data: usize,
    /// Metrics that could actually be compared (everything but no-data).
    pub evaluated: usize,
}

/// The overall verdict for a property. Ties are a first-class outcome:
/// a `Mixed` verdict is reported instead of arbitrarily picking a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(Classification),
    Mixed,
    InsufficientData,
}

impl Verdict {
    /// The wire label rendered in responses.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Winner(classification) => classification.as_str(),
            Self::Mixed => "mixed",
            Self::InsufficientData => "insufficient-data",
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// An overall verdict together with the full count breakdown, so a
/// consumer can always render e.g. "3/5 metrics above market".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceSummary {
    pub verdict: Verdict,
    pub counts: ClassificationCounts,
}

/// The condensed per-property row used by multi-asset market views.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySummary {
    pub property_id: i64,
    pub property_name: String,
    pub property_class: PropertyClass,
    pub current_occupancy_rate: Option<Decimal>,
    pub current_avg_rent_per_sqft: Option<Decimal>,
    pub occupancy_vs_market: Option<Decimal>,
    pub rent_vs_market: Option<Decimal>,
    pub overall_performance: PerformanceSummary,
}
