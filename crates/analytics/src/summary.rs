use core_types::{Classification, MarketSnapshot, Metric, Property};

use crate::engine::compare;
use crate::report::{ClassificationCounts, PerformanceSummary, PropertySummary, VarianceResult, Verdict};

/// Reduces a per-metric comparison into one overall verdict.
///
/// Majority vote over the comparable results. An exact tie among the
/// leading categories is reported as `Mixed` rather than picking an
/// arbitrary winner; the full count breakdown is always attached.
pub fn summarize(results: &[VarianceResult]) -> PerformanceSummary {
    let mut counts = ClassificationCounts::default();
    for result in results {
        match result.classification {
            Classification::Outperforming => counts.outperforming += 1,
            Classification::AtMarket => counts.at_market += 1,
            Classification::Underperforming => counts.underperforming += 1,
            Classification::NoData => counts.no_data += 1,
        }
    }
    counts.evaluated = counts.outperforming + counts.at_market + counts.underperforming;

    if counts.evaluated == 0 {
        return PerformanceSummary {
            verdict: Verdict::InsufficientData,
            counts,
        };
    }

    let contenders = [
        (Classification::Outperforming, counts.outperforming),
        (Classification::AtMarket, counts.at_market),
        (Classification::Underperforming, counts.underperforming),
    ];
    let top = contenders.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let leaders: Vec<Classification> = contenders
        .iter()
        .filter(|&&(_, n)| n == top)
        .map(|&(label, _)| label)
        .collect();

    let verdict = match leaders.as_slice() {
        [winner] => Verdict::Winner(*winner),
        _ => Verdict::Mixed,
    };

    PerformanceSummary { verdict, counts }
}

/// The condensed per-property row for multi-asset market views.
///
/// The headline variances are the occupancy and rent entries from the full
/// comparison; the overall verdict comes from the same five-metric
/// comparison, so list views and the single-property endpoint agree.
pub fn property_summary(property: &Property, benchmark: &MarketSnapshot) -> PropertySummary {
    let results = compare(&property.performance, benchmark);
    let overall_performance = summarize(&results);

    let variance_for = |metric: Metric| {
        results
            .iter()
            .find(|r| r.metric == metric)
            .and_then(|r| r.variance_pct)
    };

    PropertySummary {
        property_id: property.property_id,
        property_name: property.name.clone(),
        property_class: property.property_class,
        current_occupancy_rate: property.performance.current_occupancy_rate,
        current_avg_rent_per_sqft: property.performance.current_avg_rent_per_sqft,
        occupancy_vs_market: variance_for(Metric::OccupancyRate),
        rent_vs_market: variance_for(Metric::RentPerSqft),
        overall_performance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn result(metric: Metric, classification: Classification) -> VarianceResult {
        VarianceResult {
            metric,
            unit: metric.unit(),
            property_value: Some(dec!(1)),
            market_value: Some(dec!(1)),
            variance_pct: Some(dec!(0)),
            classification,
        }
    }

    fn results(classifications: [Classification; 5]) -> Vec<VarianceResult> {
        Metric::ALL
            .iter()
            .zip(classifications)
            .map(|(&metric, classification)| result(metric, classification))
            .collect()
    }

    #[test]
    fn strict_majority_wins() {
        use Classification::*;
        let summary = summarize(&results([
            Outperforming,
            Outperforming,
            Outperforming,
            AtMarket,
            Underperforming,
        ]));
        assert_eq!(summary.verdict, Verdict::Winner(Outperforming));
        assert_eq!(summary.counts.outperforming, 3);
        assert_eq!(summary.counts.at_market, 1);
        assert_eq!(summary.counts.underperforming, 1);
        assert_eq!(summary.counts.no_data, 0);
        assert_eq!(summary.counts.evaluated, 5);
    }

    #[test]
    fn exact_tie_reports_mixed_with_full_counts() {
        use Classification::*;
        let summary = summarize(&results([
            Outperforming,
            Outperforming,
            AtMarket,
            Underperforming,
            Underperforming,
        ]));
        assert_eq!(summary.verdict, Verdict::Mixed);
        assert_eq!(summary.verdict.label(), "mixed");
        assert_eq!(summary.counts.outperforming, 2);
        assert_eq!(summary.counts.at_market, 1);
        assert_eq!(summary.counts.underperforming, 2);
        assert_eq!(summary.counts.evaluated, 5);
    }

    #[test]
    fn three_way_tie_is_also_mixed() {
        use Classification::*;
        let summary = summarize(&results([
            Outperforming,
            AtMarket,
            Underperforming,
            NoData,
            NoData,
        ]));
        assert_eq!(summary.verdict, Verdict::Mixed);
        assert_eq!(summary.counts.no_data, 2);
        assert_eq!(summary.counts.evaluated, 3);
    }

    #[test]
    fn all_no_data_means_insufficient_data() {
        use Classification::*;
        let summary = summarize(&results([NoData, NoData, NoData, NoData, NoData]));
        assert_eq!(summary.verdict, Verdict::InsufficientData);
        assert_eq!(summary.verdict.label(), "insufficient-data");
        assert_eq!(summary.counts.outperforming, 0);
        assert_eq!(summary.counts.at_market, 0);
        assert_eq!(summary.counts.underperforming, 0);
        assert_eq!(summary.counts.no_data, 5);
    }

    #[test]
    fn no_data_does_not_dilute_the_vote() {
        use Classification::*;
        let summary = summarize(&results([
            Outperforming,
            Outperforming,
            NoData,
            NoData,
            NoData,
        ]));
        assert_eq!(summary.verdict, Verdict::Winner(Outperforming));
        assert_eq!(summary.counts.evaluated, 2);
    }
}
