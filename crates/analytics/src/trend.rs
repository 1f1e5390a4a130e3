use core_types::{MarketSnapshot, Metric, TrendDirection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::report::TrendResult;

/// Percentage-change magnitude below which a metric is considered stable.
/// Boundary values (exactly ±1%) are stable.
pub const TREND_THRESHOLD_PCT: Decimal = dec!(1.0);

/// Month-over-month movement of the catalog metrics between two
/// chronologically ordered market snapshots.
///
/// A trend needs two real data points: with no previous snapshot, or with
/// a metric absent in either snapshot, that metric is omitted from the
/// output rather than padded with a placeholder. A zero previous value is
/// omitted the same way.
pub fn trend(latest: &MarketSnapshot, previous: Option<&MarketSnapshot>) -> Vec<TrendResult> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    Metric::ALL
        .iter()
        .filter_map(|&metric| {
            let latest_value = latest.value(metric)?;
            let previous_value = previous.value(metric)?;
            if previous_value.is_zero() {
                return None;
            }

            let change_pct =
                ((latest_value - previous_value) / previous_value * dec!(100)).round_dp(2);

            let direction = if change_pct > TREND_THRESHOLD_PCT {
                TrendDirection::Up
            } else if change_pct < -TREND_THRESHOLD_PCT {
                TrendDirection::Down
            } else {
                TrendDirection::Stable
            };

            Some(TrendResult {
                metric,
                latest_value,
                previous_value,
                change_pct,
                direction,
            })
        })
        .collect()
}
