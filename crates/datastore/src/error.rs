use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Market {0} not found")]
    MarketNotFound(i64),

    #[error("Property {0} not found")]
    PropertyNotFound(i64),

    #[error("No performance data found for market {0}")]
    NoSnapshots(i64),

    #[error("Duplicate snapshot for market {market_id} on {date}")]
    DuplicateSnapshot { market_id: i64, date: NaiveDate },

    #[error("Duplicate market id {0} in dataset")]
    DuplicateMarket(i64),

    #[error("Duplicate property id {0} in dataset")]
    DuplicateProperty(i64),

    #[error("Property {property_id} references unknown market {market_id}")]
    UnknownPropertyMarket { property_id: i64, market_id: i64 },

    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}
