// Market relevance engine: match short social posts against a catalog of
// prediction markets and rank the markets each post is actually about.

pub mod action;
pub mod arbitrage;
pub mod catalog;
pub mod clusters;
pub mod config;
pub mod counter;
pub mod error;
pub mod matcher;
pub mod metrics;
pub mod models;
pub mod normalizer;
pub mod promo;
pub mod scorer;
pub mod sentiment;
pub mod signal;
pub mod synonyms;
pub mod tables;

pub use action::{Direction, SuggestedAction};
pub use arbitrage::ArbitrageSpread;
pub use catalog::{load_markets, Catalog, CatalogHandle};
pub use config::Config;
pub use error::{MatchError, Result};
pub use matcher::{Matcher, MatcherConfig};
pub use models::{Category, Market, MarketMatch, Platform};
pub use sentiment::{analyze_sentiment, Sentiment, SentimentReading};
pub use signal::{Signal, SignalType, Urgency};
pub use tables::MatchTables;
