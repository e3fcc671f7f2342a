// =============================================================================
// clusters.rs — TOPICAL GRAVITY WELLS
// =============================================================================
//
// A post that says "gaming", "console" and "esports" is about gaming. A post
// that says "console" once might be about a car dashboard. Category clusters
// are curated term sets that let the scorer notice when several matched
// terms pile up in one topic.
//
// Clusters are ORDERED. The scorer walks them front to back and the first
// cluster that reaches a qualifying count is the only one that counts.
// =============================================================================

use std::collections::HashSet;

use crate::models::Category;

/// Ordered category → representative terms.
#[derive(Debug, Clone, Default)]
pub struct CategoryClusters {
    clusters: Vec<(Category, HashSet<String>)>,
}

impl CategoryClusters {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Category, &'a [&'a str])>,
    {
        let clusters = pairs
            .into_iter()
            .map(|(category, terms)| {
                (category, terms.iter().map(|t| t.to_lowercase()).collect())
            })
            .collect();
        Self { clusters }
    }

    pub fn builtin() -> Self {
        Self::from_pairs([
            (Category::Gaming, GAMING_TERMS),
            (Category::Crypto, CRYPTO_TERMS),
            (Category::Music, MUSIC_TERMS),
            (Category::Tech, TECH_TERMS),
            (Category::Sports, SPORTS_TERMS),
            (Category::Politics, POLITICS_TERMS),
            (Category::Finance, FINANCE_TERMS),
        ])
    }

    /// Clusters in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &HashSet<String>)> {
        self.clusters.iter().map(|(category, terms)| (category, terms))
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

const GAMING_TERMS: &[&str] = &[
    "gaming", "video game", "console", "esports", "pc", "steam", "playstation",
    "xbox", "nintendo", "switch", "gta", "minecraft", "valorant",
];

const CRYPTO_TERMS: &[&str] = &[
    "crypto", "cryptocurrency", "bitcoin", "ethereum", "btc", "eth",
    "blockchain", "defi", "web3", "solana", "nft",
];

const MUSIC_TERMS: &[&str] = &[
    "music", "album", "tour", "concert", "artist", "song", "single", "spotify",
    "streaming music", "coachella", "festival",
];

const TECH_TERMS: &[&str] = &[
    "tech", "technology", "ai", "software", "startup", "silicon valley",
    "coding", "developer", "nvidia", "openai",
];

const SPORTS_TERMS: &[&str] = &[
    "sports", "team", "championship", "playoff", "season", "athlete", "coach",
    "league", "nfl", "nba",
];

const POLITICS_TERMS: &[&str] = &[
    "politics", "election", "congress", "president", "senate", "house", "vote",
    "bill", "policy",
];

const FINANCE_TERMS: &[&str] = &[
    "stock", "stocks", "market", "trading", "wall street", "ipo", "shares",
    "investor",
];
