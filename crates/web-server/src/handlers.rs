use crate::{error::AppError, AppState};
use analytics::{PerformanceSummary, PropertySummary, TrendResult, VarianceResult};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use core_types::{MarketSnapshot, Property, PropertyClass};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 100;

// ============================================================================
// Query parameters
// ============================================================================
//
// All values arrive as raw strings and are validated here so that a bad
// value surfaces as a 422 with the uniform envelope instead of axum's
// default 400 rejection.

#[derive(Debug, Deserialize)]
pub struct MarketOverviewQuery {
    start_date: Option<String>,
    end_date: Option<String>,
    include_trends: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarketPropertiesQuery {
    sort_by: Option<String>,
    sort_order: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
    property_class: Option<String>,
}

fn parse_date(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    value
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::InvalidParam(format!(
                    "{name} must be an ISO date (YYYY-MM-DD), got '{raw}'"
                ))
            })
        })
        .transpose()
}

fn parse_bool(name: &str, value: Option<&str>, default: bool) -> Result<bool, AppError> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(AppError::InvalidParam(format!(
                "{name} must be a boolean, got '{raw}'"
            ))),
        },
    }
}

fn parse_usize(name: &str, value: Option<&str>, default: usize) -> Result<usize, AppError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            AppError::InvalidParam(format!("{name} must be a non-negative integer, got '{raw}'"))
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    OccupancyVariance,
    RentVariance,
    PropertyName,
}

impl SortKey {
    fn parse(value: Option<&str>) -> Result<Option<Self>, AppError> {
        match value {
            None => Ok(None),
            Some("occupancy_variance") => Ok(Some(Self::OccupancyVariance)),
            Some("rent_variance") => Ok(Some(Self::RentVariance)),
            Some("property_name") => Ok(Some(Self::PropertyName)),
            Some(other) => Err(AppError::InvalidParam(format!(
                "sort_by must be one of occupancy_variance, rent_variance, property_name; got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::to_ascii_lowercase).as_deref() {
            None | Some("desc") => Ok(Self::Desc),
            Some("asc") => Ok(Self::Asc),
            Some(other) => Err(AppError::InvalidParam(format!(
                "sort_order must be 'asc' or 'desc', got '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Response bodies
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MarketOverviewResponse {
    pub market_id: i64,
    pub market_name: String,
    pub city: String,
    pub state: String,
    pub market_type: String,
    pub latest_performance: MarketSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<Vec<TrendResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_history: Option<Vec<MarketSnapshot>>,
}

#[derive(Debug, Serialize)]
pub struct PropertyMarketPerformanceResponse {
    pub property: Property,
    pub market_benchmark: MarketSnapshot,
    pub variance_analysis: Vec<VarianceResult>,
    pub overall_performance: PerformanceSummary,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
    pub total: usize,
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct MarketPropertiesResponse {
    pub market_id: i64,
    pub market_name: String,
    pub market_benchmark: MarketSnapshot,
    pub properties: Vec<PropertySummary>,
    pub total_count: usize,
    pub pagination: Pagination,
}

// ============================================================================
// Handlers
// ============================================================================

/// # GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "service": "MarketLens CRE Analytics API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "market_overview": "/api/markets/{market_id}",
            "market_properties": "/api/markets/{market_id}/properties",
            "property_performance": "/api/properties/{property_id}/market-performance",
            "health": "/api/health"
        }
    }))
}

/// # GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "MarketLens CRE Analytics API" }))
}

/// # GET /api/markets/:market_id
///
/// Market overview: identity fields, the latest benchmark snapshot,
/// month-over-month trends (on by default), and the snapshot history when
/// a date bound is supplied.
pub async fn get_market_overview(
    Path(market_id): Path<i64>,
    Query(query): Query<MarketOverviewQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<MarketOverviewResponse>, AppError> {
    let start_date = parse_date("start_date", query.start_date.as_deref())?;
    let end_date = parse_date("end_date", query.end_date.as_deref())?;
    let include_trends = parse_bool("include_trends", query.include_trends.as_deref(), true)?;

    let market = state.store.market(market_id)?;
    let latest = state.store.latest_snapshot(market_id)?;

    let performance_history = if start_date.is_some() || end_date.is_some() {
        let snapshots = state
            .store
            .snapshots_in_range(market_id, start_date, end_date)?;
        Some(snapshots.into_iter().cloned().collect())
    } else {
        None
    };

    let trends = include_trends.then(|| {
        let previous = state.store.previous_snapshot(market_id, latest);
        analytics::trend(latest, previous)
    });

    Ok(Json(MarketOverviewResponse {
        market_id: market.market_id,
        market_name: market.market_name.clone(),
        city: market.city.clone(),
        state: market.state.clone(),
        market_type: market.market_type.clone(),
        latest_performance: latest.clone(),
        trends,
        performance_history,
    }))
}

/// # GET /api/properties/:property_id/market-performance
///
/// Compares an individual property against the latest benchmark snapshot
/// of its market: the full per-metric variance analysis plus the overall
/// verdict with its count breakdown.
pub async fn get_property_market_performance(
    Path(property_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PropertyMarketPerformanceResponse>, AppError> {
    let property = state.store.property(property_id)?;
    let benchmark = state.store.latest_snapshot(property.market_id)?;

    let variance_analysis = analytics::compare(&property.performance, benchmark);
    let overall_performance = analytics::summarize(&variance_analysis);

    Ok(Json(PropertyMarketPerformanceResponse {
        property: property.clone(),
        market_benchmark: benchmark.clone(),
        variance_analysis,
        overall_performance,
    }))
}

/// # GET /api/markets/:market_id/properties
///
/// Per-property summaries for every asset in a market, with optional class
/// filtering, sorting, and offset pagination.
pub async fn get_market_properties(
    Path(market_id): Path<i64>,
    Query(query): Query<MarketPropertiesQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<MarketPropertiesResponse>, AppError> {
    let sort_key = SortKey::parse(query.sort_by.as_deref())?;
    let sort_order = SortOrder::parse(query.sort_order.as_deref())?;
    let limit = parse_usize("limit", query.limit.as_deref(), DEFAULT_LIMIT)?;
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::InvalidParam(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {limit}"
        )));
    }
    let offset = parse_usize("offset", query.offset.as_deref(), 0)?;
    let class_filter = query
        .property_class
        .as_deref()
        .map(|raw| {
            PropertyClass::from_str(raw).map_err(|_| {
                AppError::InvalidParam(format!("property_class must be A, B or C, got '{raw}'"))
            })
        })
        .transpose()?;

    let market = state.store.market(market_id)?;
    let benchmark = state.store.latest_snapshot(market_id)?;

    let mut summaries: Vec<PropertySummary> = state
        .store
        .properties_in_market(market_id)
        .into_iter()
        .filter(|property| class_filter.is_none_or(|class| property.property_class == class))
        .map(|property| analytics::property_summary(property, benchmark))
        .collect();

    if let Some(key) = sort_key {
        sort_summaries(&mut summaries, key, sort_order);
    }

    let total_count = summaries.len();
    let page: Vec<PropertySummary> = summaries.into_iter().skip(offset).take(limit).collect();

    Ok(Json(MarketPropertiesResponse {
        market_id: market.market_id,
        market_name: market.market_name.clone(),
        market_benchmark: benchmark.clone(),
        properties: page,
        total_count,
        pagination: Pagination {
            limit,
            offset,
            total: total_count,
            has_more: offset.saturating_add(limit) < total_count,
        },
    }))
}

/// Sorts property summaries in place. Rows with a missing sort variance go
/// last regardless of direction so partial data never floats to the top.
fn sort_summaries(summaries: &mut [PropertySummary], key: SortKey, order: SortOrder) {
    let variance_cmp = |a: Option<Decimal>, b: Option<Decimal>, order: SortOrder| match (a, b) {
        (Some(x), Some(y)) => match order {
            SortOrder::Asc => x.cmp(&y),
            SortOrder::Desc => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    summaries.sort_by(|a, b| match key {
        SortKey::OccupancyVariance => {
            variance_cmp(a.occupancy_vs_market, b.occupancy_vs_market, order)
        }
        SortKey::RentVariance => variance_cmp(a.rent_vs_market, b.rent_vs_market, order),
        SortKey::PropertyName => match order {
            SortOrder::Asc => a.property_name.cmp(&b.property_name),
            SortOrder::Desc => b.property_name.cmp(&a.property_name),
        },
    });
}
