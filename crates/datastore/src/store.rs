use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use core_types::{Market, MarketSnapshot, Property};

use crate::error::StoreError;

/// The immutable in-memory dataset: every market with its snapshot
/// history, and every property.
///
/// Built once at startup by [`Store::load`] and shared read-only from then
/// on, so concurrent request handlers need no locking.
#[derive(Debug)]
pub struct Store {
    markets: HashMap<i64, Market>,
    properties: HashMap<i64, Property>,
}

impl Store {
    /// Loads and validates the dataset from the two JSON files.
    ///
    /// Snapshot histories are sorted chronologically; a duplicate
    /// (market, date) pair, a duplicate id, or a property pointing at an
    /// unknown market is a load error, not something to paper over at
    /// query time.
    pub fn load(
        markets_path: impl AsRef<Path>,
        properties_path: impl AsRef<Path>,
    ) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(markets_path.as_ref())?;
        let parsed: Vec<Market> = serde_json::from_str(&raw)?;

        let mut markets = HashMap::with_capacity(parsed.len());
        for mut market in parsed {
            market.performance.sort_by_key(|snapshot| snapshot.date);
            if let Some(window) = market
                .performance
                .windows(2)
                .find(|w| w[0].date == w[1].date)
            {
                return Err(StoreError::DuplicateSnapshot {
                    market_id: market.market_id,
                    date: window[0].date,
                });
            }
            let id = market.market_id;
            if markets.insert(id, market).is_some() {
                return Err(StoreError::DuplicateMarket(id));
            }
        }

        let raw = fs::read_to_string(properties_path.as_ref())?;
        let parsed: Vec<Property> = serde_json::from_str(&raw)?;

        let mut properties = HashMap::with_capacity(parsed.len());
        for property in parsed {
            if !markets.contains_key(&property.market_id) {
                return Err(StoreError::UnknownPropertyMarket {
                    property_id: property.property_id,
                    market_id: property.market_id,
                });
            }
            let id = property.property_id;
            if properties.insert(id, property).is_some() {
                return Err(StoreError::DuplicateProperty(id));
            }
        }

        tracing::info!(
            markets = markets.len(),
            properties = properties.len(),
            "Dataset loaded."
        );

        Ok(Self {
            markets,
            properties,
        })
    }

    pub fn market(&self, market_id: i64) -> Result<&Market, StoreError> {
        self.markets
            .get(&market_id)
            .ok_or(StoreError::MarketNotFound(market_id))
    }

    pub fn property(&self, property_id: i64) -> Result<&Property, StoreError> {
        self.properties
            .get(&property_id)
            .ok_or(StoreError::PropertyNotFound(property_id))
    }

    /// All markets, ordered by id for stable output.
    pub fn markets(&self) -> Vec<&Market> {
        let mut all: Vec<&Market> = self.markets.values().collect();
        all.sort_by_key(|market| market.market_id);
        all
    }

    /// All properties belonging to a market, ordered by id.
    pub fn properties_in_market(&self, market_id: i64) -> Vec<&Property> {
        let mut matching: Vec<&Property> = self
            .properties
            .values()
            .filter(|property| property.market_id == market_id)
            .collect();
        matching.sort_by_key(|property| property.property_id);
        matching
    }

    /// The benchmark snapshot for a market: the one with the maximum date.
    /// The load-time uniqueness invariant rules out ties.
    pub fn latest_snapshot(&self, market_id: i64) -> Result<&MarketSnapshot, StoreError> {
        let market = self.market(market_id)?;
        market
            .performance
            .last()
            .ok_or(StoreError::NoSnapshots(market_id))
    }

    /// Snapshots within an inclusive date range, chronological. An absent
    /// bound is unbounded on that side. An unknown market is an error; a
    /// known market with nothing in range yields an empty Vec.
    pub fn snapshots_in_range(
        &self,
        market_id: i64,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<&MarketSnapshot>, StoreError> {
        let market = self.market(market_id)?;
        Ok(market
            .performance
            .iter()
            .filter(|snapshot| start.is_none_or(|s| snapshot.date >= s))
            .filter(|snapshot| end.is_none_or(|e| snapshot.date <= e))
            .collect())
    }

    /// The snapshot immediately preceding the given one in date order for
    /// the same market, or `None` if it is the earliest.
    pub fn previous_snapshot(
        &self,
        market_id: i64,
        snapshot: &MarketSnapshot,
    ) -> Option<&MarketSnapshot> {
        let market = self.markets.get(&market_id)?;
        market
            .performance
            .iter()
            .filter(|candidate| candidate.date < snapshot.date)
            .max_by_key(|candidate| candidate.date)
    }
}
