use core_types::{Classification, MarketSnapshot, Metric, Polarity, PropertyPerformance};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::report::VarianceResult;

/// Variance magnitude (in percent) separating at-market from out/under.
/// Boundary values land on at-market.
pub const VARIANCE_THRESHOLD_PCT: Decimal = dec!(5.0);

/// Compares a property's current performance against a market benchmark
/// snapshot, one `VarianceResult` per metric in catalog order.
///
/// A metric missing on either side, or a zero-valued benchmark, degrades
/// into a `no-data` entry with the variance left unset. Division by zero
/// must never surface to the caller.
pub fn compare(performance: &PropertyPerformance, benchmark: &MarketSnapshot) -> Vec<VarianceResult> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let property_value = performance.value(metric);
            let market_value = benchmark.value(metric);

            let variance_pct = match (property_value, market_value) {
                (Some(prop), Some(market)) if !market.is_zero() => {
                    Some(((prop - market) / market * dec!(100)).round_dp(2))
                }
                _ => None,
            };

            let classification = match variance_pct {
                Some(pct) => classify(metric, pct),
                None => Classification::NoData,
            };

            VarianceResult {
                metric,
                unit: metric.unit(),
                property_value,
                market_value,
                variance_pct,
                classification,
            }
        })
        .collect()
}

fn classify(metric: Metric, variance_pct: Decimal) -> Classification {
    // For lower-is-better metrics a negative variance (property below the
    // market figure) is the favorable direction.
    let favorable_pct = match metric.polarity() {
        Polarity::HigherIsBetter => variance_pct,
        Polarity::LowerIsBetter => -variance_pct,
    };

    if favorable_pct > VARIANCE_THRESHOLD_PCT {
        Classification::Outperforming
    } else if favorable_pct < -VARIANCE_THRESHOLD_PCT {
        Classification::Underperforming
    } else {
        Classification::AtMarket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn benchmark() -> MarketSnapshot {
        MarketSnapshot {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            avg_rent_per_sqft: Some(dec!(40.00)),
            avg_occupancy_rate: Some(dec!(90.0)),
            renewal_rate: Some(dec!(70.0)),
            new_deal_rate: Some(dec!(30.0)),
            avg_lease_term_months: Some(dec!(48)),
            avg_time_to_lease_days: Some(dec!(100)),
        }
    }

    fn performance() -> PropertyPerformance {
        PropertyPerformance {
            current_occupancy_rate: Some(dec!(90.0)),
            current_avg_rent_per_sqft: Some(dec!(44.00)),
            renewal_rate_ytd: Some(dec!(63.0)),
            avg_lease_term_months: Some(dec!(48)),
            avg_time_to_lease_days: Some(dec!(80)),
        }
    }

    #[test]
    fn results_follow_catalog_order() {
        let results = compare(&performance(), &benchmark());
        let metrics: Vec<Metric> = results.iter().map(|r| r.metric).collect();
        assert_eq!(metrics, Metric::ALL);
    }

    #[test]
    fn classifies_around_the_five_percent_threshold() {
        let results = compare(&performance(), &benchmark());
        // Rent: +10% above market.
        assert_eq!(results[0].variance_pct, Some(dec!(10.00)));
        assert_eq!(results[0].classification, Classification::Outperforming);
        // Occupancy: exactly at market.
        assert_eq!(results[1].variance_pct, Some(dec!(0.00)));
        assert_eq!(results[1].classification, Classification::AtMarket);
        // Renewal: -10% below market.
        assert_eq!(results[2].classification, Classification::Underperforming);
    }

    #[test]
    fn exact_boundary_is_at_market() {
        let mut perf = performance();
        perf.current_avg_rent_per_sqft = Some(dec!(42.00)); // exactly +5%
        perf.renewal_rate_ytd = Some(dec!(66.5)); // exactly -5%
        let results = compare(&perf, &benchmark());
        assert_eq!(results[0].variance_pct, Some(dec!(5.00)));
        assert_eq!(results[0].classification, Classification::AtMarket);
        assert_eq!(results[2].variance_pct, Some(dec!(-5.00)));
        assert_eq!(results[2].classification, Classification::AtMarket);
    }

    #[test]
    fn time_to_lease_polarity_is_inverted() {
        // 80 days against a 100-day market: variance -20%, but faster
        // leasing is favorable.
        let results = compare(&performance(), &benchmark());
        let ttl = &results[4];
        assert_eq!(ttl.variance_pct, Some(dec!(-20.00)));
        assert_eq!(ttl.classification, Classification::Outperforming);

        let mut slow = performance();
        slow.avg_time_to_lease_days = Some(dec!(120));
        let results = compare(&slow, &benchmark());
        assert_eq!(results[4].variance_pct, Some(dec!(20.00)));
        assert_eq!(results[4].classification, Classification::Underperforming);
    }

    #[test]
    fn missing_property_value_yields_no_data() {
        let mut perf = performance();
        perf.current_occupancy_rate = None;
        let results = compare(&perf, &benchmark());
        assert_eq!(results[1].classification, Classification::NoData);
        assert_eq!(results[1].variance_pct, None);
        assert_eq!(results[1].market_value, Some(dec!(90.0)));
    }

    #[test]
    fn missing_market_value_yields_no_data() {
        let mut bench = benchmark();
        bench.renewal_rate = None;
        let results = compare(&performance(), &bench);
        assert_eq!(results[2].classification, Classification::NoData);
        assert_eq!(results[2].variance_pct, None);
    }

    #[test]
    fn zero_benchmark_yields_no_data_instead_of_faulting() {
        let mut bench = benchmark();
        bench.avg_rent_per_sqft = Some(Decimal::ZERO);
        let results = compare(&performance(), &bench);
        assert_eq!(results[0].classification, Classification::NoData);
        assert_eq!(results[0].variance_pct, None);
        assert_eq!(results[0].market_value, Some(Decimal::ZERO));
    }

    #[test]
    fn variance_sign_matches_value_difference() {
        let results = compare(&performance(), &benchmark());
        for result in &results {
            let (Some(prop), Some(market), Some(pct)) =
                (result.property_value, result.market_value, result.variance_pct)
            else {
                continue;
            };
            assert_eq!(
                pct.is_sign_negative(),
                (prop - market).is_sign_negative(),
                "{}",
                result.metric
            );
        }
    }
}
