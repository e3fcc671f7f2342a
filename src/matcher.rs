// =============================================================================
// matcher.rs — POST IN, RANKED MARKETS OUT
// =============================================================================
//
// The pipeline for one post:
//
//   length gate → promotional gate → normalize → vocabulary scan
//     → per-market counting → score → threshold → stable sort → cap
//
// Each gate returns an empty list, never an error. The catalog snapshot is
// taken once per call, so a refresh landing mid-match is invisible until the
// next post.
//
// Batches go through rayon, one post per task. Posts are independent and
// every table is read-only, so there is nothing to coordinate beyond the
// stats counters, which are atomic.
// =============================================================================

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::CatalogHandle;
use crate::counter::count_matches;
use crate::error::{MatchError, Result};
use crate::metrics::MatchStats;
use crate::models::MarketMatch;
use crate::normalizer::NormalizedText;
use crate::scorer::score;

/// Posts shorter than this many characters are not worth matching.
pub const MIN_TEXT_CHARS: usize = 10;

pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.3;
pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Markets scoring below this are dropped. Must be finite and in [0, 1].
    pub min_confidence: f64,
    /// At most this many markets are returned per post. Must be at least 1.
    pub max_results: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_confidence.is_finite() || !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MatchError::InvalidThreshold(self.min_confidence));
        }
        if self.max_results == 0 {
            return Err(MatchError::ZeroMaxResults);
        }
        Ok(())
    }
}

/// Ranks catalog markets by relevance to a post.
#[derive(Debug)]
pub struct Matcher {
    config: MatcherConfig,
    catalog: Arc<CatalogHandle>,
    stats: Arc<MatchStats>,
}

impl Matcher {
    pub fn new(config: MatcherConfig, catalog: Arc<CatalogHandle>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            stats: Arc::new(MatchStats::new()),
        })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<CatalogHandle> {
        &self.catalog
    }

    pub fn stats(&self) -> &Arc<MatchStats> {
        &self.stats
    }

    /// Markets relevant to `text`, best first, scored against the wall clock.
    pub fn find_matches(&self, text: &str) -> Vec<MarketMatch> {
        self.find_matches_at(text, Utc::now())
    }

    /// Same as [`Matcher::find_matches`] with an explicit "now" for recency.
    pub fn find_matches_at(&self, text: &str, now: DateTime<Utc>) -> Vec<MarketMatch> {
        self.stats.increment_seen();

        if text.chars().count() < MIN_TEXT_CHARS {
            self.stats.increment_rejected_short();
            return Vec::new();
        }

        let tables = self.catalog.tables();
        if tables.promotional.is_promotional(text) {
            self.stats.increment_rejected_promotional();
            return Vec::new();
        }

        let normalized = NormalizedText::new(text);
        let snapshot = self.catalog.snapshot();
        let hits = snapshot.vocabulary().scan(normalized.as_str());
        if hits.is_empty() {
            self.stats.increment_no_vocabulary_hits();
            return Vec::new();
        }

        let mut scored = 0;
        let mut matches: Vec<MarketMatch> = snapshot
            .markets()
            .iter()
            .filter_map(|market| {
                let found = count_matches(&hits, market, &tables.synonyms);
                if found.counts.is_empty() {
                    return None;
                }
                scored += 1;

                let confidence = score(
                    &found.counts,
                    market,
                    &found.matched_keywords,
                    &tables.clusters,
                    now,
                );
                (confidence >= self.config.min_confidence).then(|| MarketMatch {
                    market: Arc::clone(market),
                    confidence,
                    matched_keywords: found.matched_keywords,
                })
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order
        matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        matches.truncate(self.config.max_results);

        self.stats.add_markets_scored(scored);
        self.stats.add_matches_returned(matches.len());

        debug!(
            vocabulary_hits = hits.len(),
            markets_scored = scored,
            returned = matches.len(),
            top = matches.first().map(|m| m.confidence).unwrap_or(0.0),
            "Matched post"
        );

        matches
    }

    /// Match many posts in parallel. Output order follows input order, and
    /// every post is scored against the same "now".
    pub fn batch_match<S>(&self, texts: &[S]) -> Vec<Vec<MarketMatch>>
    where
        S: AsRef<str> + Sync,
    {
        let now = Utc::now();
        texts
            .par_iter()
            .map(|text| self.find_matches_at(text.as_ref(), now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Market};
    use crate::tables::MatchTables;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn matcher_with(markets: Vec<Market>, min_confidence: f64, max_results: usize) -> Matcher {
        let catalog = CatalogHandle::new(markets, MatchTables::builtin()).unwrap();
        Matcher::new(
            MatcherConfig {
                min_confidence,
                max_results,
            },
            Arc::new(catalog),
        )
        .unwrap()
    }

    fn sample_catalog() -> Vec<Market> {
        vec![
            Market::new(
                "gta6",
                "Will GTA 6 release before 2027?",
                &["gta", "gta 6", "rockstar", "release date", "trailer"],
            )
            .with_category(Category::Gaming),
            Market::new(
                "btc150",
                "Will Bitcoin hit $150k in 2026?",
                &["bitcoin", "btc", "crypto", "halving", "etf"],
            )
            .with_category(Category::Crypto),
            Market::new(
                "fedcut",
                "Fed rate cut in March?",
                &["fed", "rate cut", "powell", "fomc", "inflation"],
            )
            .with_category(Category::Finance),
        ]
    }

    fn ids(matches: &[MarketMatch]) -> Vec<String> {
        matches.iter().map(|m| m.market.id.clone()).collect()
    }

    #[test]
    fn test_relevant_post_finds_its_market() {
        let matcher = matcher_with(sample_catalog(), 0.3, 5);
        let matches = matcher.find_matches_at("Rockstar just dropped the GTA 6 trailer", now());
        assert_eq!(matches[0].market.id, "gta6");
        assert!(matches[0].confidence > 0.5);
        assert!(matches.iter().all(|m| m.market.id != "btc150"));
    }

    #[test]
    fn test_matching_is_deterministic() {
        let matcher = matcher_with(sample_catalog(), 0.0, 5);
        let text = "Powell hints at a rate cut while bitcoin ETF flows surge";
        let first = matcher.find_matches_at(text, now());
        let second = matcher.find_matches_at(text, now());

        assert_eq!(ids(&first), ids(&second));
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.confidence, b.confidence);
            assert_eq!(a.matched_keywords, b.matched_keywords);
        }
    }

    #[test]
    fn test_threshold_monotonicity() {
        let text = "Powell hints at a rate cut while bitcoin ETF flows surge and GTA trailer leaks";
        let mut previous: Option<Vec<String>> = None;

        for threshold in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
            let matcher = matcher_with(sample_catalog(), threshold, 10);
            let current = ids(&matcher.find_matches_at(text, now()));
            if let Some(looser) = &previous {
                assert!(
                    current.iter().all(|id| looser.contains(id)),
                    "{current:?} not a subset of {looser:?} at {threshold}"
                );
            }
            previous = Some(current);
        }
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let matcher = matcher_with(sample_catalog(), 0.0, 10);
        let posts = [
            "GTA 6 trailer from Rockstar, release date confirmed, gta gta gta",
            "bitcoin btc crypto halving etf all at once",
            "fed rate cut, powell, fomc, inflation",
        ];
        for post in posts {
            for m in matcher.find_matches_at(post, now()) {
                assert!((0.0..=1.0).contains(&m.confidence));
            }
        }
    }

    #[test]
    fn test_promotional_posts_short_circuit() {
        let matcher = matcher_with(sample_catalog(), 0.0, 5);
        assert!(matcher
            .find_matches_at("Join our Discord for GTA 6 leaks and bitcoin signals", now())
            .is_empty());
        assert!(matcher
            .find_matches_at("BTC to $100k, then $150k, $200k, $250k and $1M", now())
            .is_empty());
        assert_eq!(matcher.stats().snapshot().rejected_promotional, 2);
    }

    #[test]
    fn test_short_text_is_rejected() {
        let matcher = matcher_with(sample_catalog(), 0.0, 5);
        assert!(matcher.find_matches_at("bitcoin!!", now()).is_empty());
        assert!(matcher.find_matches_at("", now()).is_empty());
        assert_eq!(matcher.stats().snapshot().rejected_short, 2);
    }

    #[test]
    fn test_synonym_match_scores_below_exact() {
        let market = || Market::new("gta6", "Will GTA 6 release before 2027?", &["gta"]);
        let matcher = matcher_with(vec![market()], 0.0, 5);

        let by_synonym = matcher.find_matches_at("rockstar just posted a teaser", now());
        let by_exact = matcher.find_matches_at("gta just posted a teaser", now());

        assert_eq!(by_synonym.len(), 1);
        assert_eq!(by_synonym[0].matched_keywords, vec!["rockstar"]);
        assert!(by_synonym[0].confidence > 0.0);
        assert!(by_synonym[0].confidence < by_exact[0].confidence);
    }

    #[test]
    fn test_cluster_coherence_lifts_score() {
        let matcher = matcher_with(
            vec![Market::new(
                "esports",
                "Who wins the spring split?",
                &["gaming", "console", "esports", "tournament", "league", "prize"],
            )
            .with_category(Category::Gaming)],
            0.0,
            5,
        );

        let three_terms = matcher.find_matches_at("gaming console esports news today", now());
        let one_term = matcher.find_matches_at("gaming news roundup for today", now());

        let confidence = |m: &[MarketMatch]| m.first().map(|m| m.confidence).unwrap_or(0.0);
        assert!(confidence(&three_terms) > confidence(&one_term));
    }

    #[test]
    fn test_sooner_resolution_ranks_higher() {
        let keywords = &["election", "senate", "ballot", "turnout", "recount"];
        let matcher = matcher_with(
            vec![
                Market::new("late", "Senate recount outcome (late)", keywords)
                    .with_end_date((now() + Duration::days(300)).to_rfc3339()),
                Market::new("soon", "Senate recount outcome (soon)", keywords)
                    .with_end_date((now() + Duration::days(3)).to_rfc3339()),
            ],
            0.0,
            5,
        );

        let matches = matcher.find_matches_at("the recount drags on for weeks", now());
        assert_eq!(ids(&matches), vec!["soon", "late"]);
        assert!(matches[0].confidence > matches[1].confidence);
    }

    #[test]
    fn test_result_cap_keeps_best() {
        let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
        let fillers = ["fillerone", "fillertwo", "fillerthree", "fillerfour"];
        let markets = (1..=5)
            .map(|n| {
                let keywords: Vec<&str> = words[..n]
                    .iter()
                    .chain(&fillers[..5 - n])
                    .copied()
                    .collect();
                Market::new(format!("m{n}"), format!("Market {n}"), &keywords)
            })
            .collect();
        let matcher = matcher_with(markets, 0.0, 3);

        let matches = matcher.find_matches_at("alpha beta gamma delta epsilon", now());
        assert_eq!(ids(&matches), vec!["m5", "m4", "m3"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let matcher = matcher_with(
            vec![
                Market::new("first", "Turnout A", &["ballot", "turnout"]),
                Market::new("second", "Turnout B", &["ballot", "turnout"]),
            ],
            0.0,
            5,
        );
        let matches = matcher.find_matches_at("ballot turnout looks strong", now());
        assert_eq!(matches[0].confidence, matches[1].confidence);
        assert_eq!(ids(&matches), vec!["first", "second"]);
    }

    #[test]
    fn test_unrelated_post_returns_nothing() {
        let matcher = matcher_with(sample_catalog(), 0.0, 5);
        assert!(matcher
            .find_matches_at("lovely weather for a picnic by the lake", now())
            .is_empty());
        assert_eq!(matcher.stats().snapshot().no_vocabulary_hits, 1);
    }

    #[test]
    fn test_refresh_is_visible_on_next_call() {
        let matcher = matcher_with(sample_catalog(), 0.0, 5);
        assert!(matcher.find_matches_at("taylor swift tour announced", now()).is_empty());

        matcher
            .catalog()
            .replace(vec![Market::new("swift", "Taylor Swift album in 2026?", &["taylor swift", "tour"])])
            .unwrap();
        let matches = matcher.find_matches_at("taylor swift tour announced", now());
        assert_eq!(ids(&matches), vec!["swift"]);
    }

    #[test]
    fn test_repeated_catalog_id_is_returned_once() {
        let matcher = matcher_with(
            vec![
                Market::new("btc", "Bitcoin above 150k?", &["bitcoin", "btc"]),
                Market::new("btc", "Bitcoin above 150k?", &["bitcoin", "btc"]),
            ],
            0.0,
            5,
        );
        let matches = matcher.find_matches_at("bitcoin and btc pumping today", now());
        assert_eq!(ids(&matches), vec!["btc"]);
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let matcher = matcher_with(sample_catalog(), 0.0, 5);
        let posts = vec![
            "Powell signals a rate cut at the next FOMC",
            "the cat sat on the mat, as cats do",
            "Rockstar confirms GTA 6 release date",
        ];
        let results = matcher.batch_match(&posts);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0][0].market.id, "fedcut");
        assert!(results[1].is_empty());
        assert_eq!(results[2][0].market.id, "gta6");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let catalog = Arc::new(CatalogHandle::new(Vec::new(), MatchTables::builtin()).unwrap());
        let bad = [
            MatcherConfig { min_confidence: 1.5, max_results: 5 },
            MatcherConfig { min_confidence: -0.1, max_results: 5 },
            MatcherConfig { min_confidence: f64::NAN, max_results: 5 },
            MatcherConfig { min_confidence: 0.3, max_results: 0 },
        ];
        for config in bad {
            assert!(Matcher::new(config, Arc::clone(&catalog)).is_err(), "{config:?}");
        }
        assert!(Matcher::new(MatcherConfig::default(), catalog).is_ok());
    }
}
