// =============================================================================
// models.rs — THE CATALOG'S NOUNS
// =============================================================================
//
// A Market is what the catalog hands us. A MarketMatch is what we hand back.
// Everything in between (counts, bonuses, hits) is ephemeral and lives in
// the modules that compute it.
//
// Markets are owned by the catalog and shared by Arc, so a MarketMatch can
// outlive the snapshot it came from without copying titles and keyword
// lists around for every post.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Topical category of a market.
///
/// The fixed vocabulary mirrors the category clusters. Any other label a
/// provider sends is kept verbatim in `Other` so it round-trips, but it
/// never lines up with a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Gaming,
    Crypto,
    Music,
    Tech,
    Sports,
    Politics,
    Finance,
    Other(String),
}

impl Category {
    /// Parse a provider label. Case and surrounding whitespace are ignored.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "gaming" => Category::Gaming,
            "crypto" => Category::Crypto,
            "music" => Category::Music,
            "tech" => Category::Tech,
            "sports" => Category::Sports,
            "politics" => Category::Politics,
            "finance" => Category::Finance,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Gaming => "gaming",
            Category::Crypto => "crypto",
            Category::Music => "music",
            Category::Tech => "tech",
            Category::Sports => "sports",
            Category::Politics => "politics",
            Category::Finance => "finance",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which venue lists the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Kalshi,
    Polymarket,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Kalshi => write!(f, "kalshi"),
            Platform::Polymarket => write!(f, "polymarket"),
        }
    }
}

/// One prediction-market listing.
///
/// Only `id`, `title`, `keywords`, `category` and `end_date` feed the
/// relevance score. The rest is provider passthrough that signal
/// classification and the caller's UI care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: String,
    pub title: String,

    /// Explicit keyword phrases. Lowercase and deduplicated once the market
    /// has gone through [`Market::normalize_keywords`], which the catalog
    /// does on load.
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub category: Option<Category>,

    /// Resolution date as the provider sent it. Parsed lazily by the scorer;
    /// garbage here just means "no recency boost".
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub yes_price: Option<f64>,
    #[serde(default)]
    pub no_price: Option<f64>,
    #[serde(default, rename = "volume24h")]
    pub volume_24h: Option<f64>,
}

impl Market {
    pub fn new(id: impl Into<String>, title: impl Into<String>, keywords: &[&str]) -> Self {
        let mut market = Self {
            id: id.into(),
            title: title.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category: None,
            end_date: None,
            platform: None,
            description: None,
            url: None,
            yes_price: None,
            no_price: None,
            volume_24h: None,
        };
        market.normalize_keywords();
        market
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_yes_price(mut self, yes_price: f64) -> Self {
        self.yes_price = Some(yes_price);
        self
    }

    /// Lowercase, trim and deduplicate keywords, keeping first-seen order.
    /// Blank keywords are dropped.
    pub fn normalize_keywords(&mut self) {
        let mut seen = std::collections::HashSet::new();
        let keywords = std::mem::take(&mut self.keywords);
        self.keywords = keywords
            .into_iter()
            .map(|k| k.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
            .filter(|k| !k.is_empty())
            .filter(|k| seen.insert(k.clone()))
            .collect();
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "[{}] {} ({})", self.id, self.title, category),
            None => write!(f, "[{}] {}", self.id, self.title),
        }
    }
}

/// A market the post is plausibly about, with how sure we are.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMatch {
    pub market: Arc<Market>,
    /// Always inside [0, 1].
    pub confidence: f64,
    /// Surface forms that matched: the keyword itself for exact hits, the
    /// synonym that fired for synonym hits.
    pub matched_keywords: Vec<String>,
}

impl fmt::Display for MarketMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (confidence: {:.1}%)",
            self.market,
            self.confidence * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercased_and_deduplicated() {
        let market = Market::new("m1", "Bitcoin above 100k?", &["Bitcoin", "BTC", "bitcoin", "  ", "All  Time   High"]);
        assert_eq!(market.keywords, vec!["bitcoin", "btc", "all time high"]);
    }

    #[test]
    fn test_category_labels_parse() {
        assert_eq!(Category::from_label(" Crypto "), Category::Crypto);
        assert_eq!(Category::from_label("geopolitics"), Category::Other("geopolitics".to_string()));
    }

    #[test]
    fn test_market_deserializes_from_provider_json() {
        let json = r#"{
            "id": "kx-gta6",
            "platform": "kalshi",
            "title": "Will GTA 6 release before 2027?",
            "keywords": ["GTA", "gta 6", "Rockstar"],
            "category": "gaming",
            "endDate": "2026-12-31",
            "yesPrice": 0.42,
            "volume24h": 12000.0
        }"#;
        let mut market: Market = serde_json::from_str(json).unwrap();
        market.normalize_keywords();
        assert_eq!(market.category, Some(Category::Gaming));
        assert_eq!(market.platform, Some(Platform::Kalshi));
        assert_eq!(market.keywords, vec!["gta", "gta 6", "rockstar"]);
        assert_eq!(market.volume_24h, Some(12000.0));
    }

    #[test]
    fn test_unknown_category_round_trips() {
        let market = Market::new("m1", "Ceasefire by June?", &["ceasefire"])
            .with_category(Category::from_label("geopolitics"));
        let json = serde_json::to_string(&market).unwrap();
        assert!(json.contains("\"category\":\"geopolitics\""));
    }
}
