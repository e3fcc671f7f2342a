// =============================================================================
// catalog.rs — THE MARKETS WE KNOW ABOUT, AND EVERY WORD THEY CARE ABOUT
// =============================================================================
//
// Checking every keyword of every market against every post one memmem call
// at a time is fine for twenty markets and silly for two thousand. So each
// catalog snapshot carries a VOCABULARY: every explicit keyword plus every
// synonym one hop away, compiled into a single Aho-Corasick automaton.
//
// One pass over the post yields the set of vocabulary terms present as whole
// terms. If that set is empty no market can match and we're done. Otherwise
// the per-market counting asks the hit set instead of rescanning the text.
//
// Snapshots are immutable. The handle swaps in a new one on refresh under a
// write lock held for exactly one pointer store; a match in flight keeps the
// Arc it started with and never sees half a catalog.
// =============================================================================

use aho_corasick::{AhoCorasick, MatchKind};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::Market;
use crate::normalizer::{is_whole_term_at, TermLookup};
use crate::synonyms::SynonymTable;
use crate::tables::MatchTables;

/// Every term a snapshot can ever ask about, compiled for one-pass scanning.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    automaton: AhoCorasick,
}

impl Vocabulary {
    /// Keywords of `markets` plus their direct synonyms, deduplicated.
    pub fn build(markets: &[Arc<Market>], synonyms: &SynonymTable) -> Result<Self> {
        let mut terms = Vec::new();
        let mut index = HashMap::new();

        let mut add = |term: &str| {
            if !term.is_empty() && !index.contains_key(term) {
                index.insert(term.to_string(), terms.len());
                terms.push(term.to_string());
            }
        };

        for market in markets {
            for keyword in &market.keywords {
                add(keyword);
                for synonym in synonyms.related(keyword) {
                    add(synonym);
                }
            }
        }

        // Standard semantics are required for overlapping iteration, and we
        // want overlaps: "gta" and "gta 6" both start at the same byte.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&terms)?;

        Ok(Self {
            terms,
            index,
            automaton,
        })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms present in `folded` as whole terms.
    pub fn scan<'a>(&'a self, folded: &str) -> TermHits<'a> {
        let hits = self
            .automaton
            .find_overlapping_iter(folded)
            .filter(|m| is_whole_term_at(folded, m.start(), m.end()))
            .map(|m| m.pattern().as_usize())
            .collect();
        TermHits { vocab: self, hits }
    }
}

/// Result of one vocabulary pass over a post.
#[derive(Debug, Clone)]
pub struct TermHits<'a> {
    vocab: &'a Vocabulary,
    hits: HashSet<usize>,
}

impl TermHits<'_> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// The matched terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.hits.iter().map(|&i| self.vocab.terms[i].as_str())
    }
}

impl TermLookup for TermHits<'_> {
    fn contains_term(&self, term: &str) -> bool {
        self.vocab
            .index
            .get(term)
            .is_some_and(|i| self.hits.contains(i))
    }
}

/// One immutable view of the market list.
#[derive(Debug, Clone)]
pub struct Catalog {
    markets: Vec<Arc<Market>>,
    vocabulary: Vocabulary,
}

impl Catalog {
    /// Normalize keywords and build the vocabulary. Market order is kept; it
    /// is the tie-break order for equal scores.
    ///
    /// Ids are unique within a snapshot. A repeated id keeps its first
    /// listing and later ones are dropped.
    pub fn new(markets: Vec<Market>, synonyms: &SynonymTable) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        let markets: Vec<Arc<Market>> = markets
            .into_iter()
            .filter(|market| {
                let first = seen_ids.insert(market.id.clone());
                if !first {
                    warn!(id = %market.id, "Dropping duplicate market id from catalog");
                }
                first
            })
            .map(|mut market| {
                market.normalize_keywords();
                Arc::new(market)
            })
            .collect();
        let vocabulary = Vocabulary::build(&markets, synonyms)?;

        debug!(
            markets = markets.len(),
            terms = vocabulary.len(),
            "Built catalog snapshot"
        );

        Ok(Self {
            markets,
            vocabulary,
        })
    }

    pub fn markets(&self) -> &[Arc<Market>] {
        &self.markets
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

/// Shared, refreshable pointer to the current catalog snapshot plus the
/// tables every snapshot is built against.
#[derive(Debug)]
pub struct CatalogHandle {
    tables: Arc<MatchTables>,
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(markets: Vec<Market>, tables: Arc<MatchTables>) -> Result<Self> {
        let catalog = Catalog::new(markets, &tables.synonyms)?;
        Ok(Self {
            tables,
            current: RwLock::new(Arc::new(catalog)),
        })
    }

    pub fn tables(&self) -> &Arc<MatchTables> {
        &self.tables
    }

    /// The snapshot as of now. Cheap: one Arc clone under a read lock.
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read())
    }

    /// Build a snapshot from `markets` and swap it in. On error the previous
    /// snapshot stays live. Returns the new market count.
    pub fn replace(&self, markets: Vec<Market>) -> Result<usize> {
        let catalog = Arc::new(Catalog::new(markets, &self.tables.synonyms)?);
        let count = catalog.len();
        *self.current.write() = catalog;
        info!(markets = count, "Catalog snapshot replaced");
        Ok(count)
    }

    /// Re-read a catalog file and swap it in.
    pub fn reload_from(&self, path: impl AsRef<Path>) -> Result<usize> {
        let markets = load_markets(path)?;
        self.replace(markets)
    }
}

/// Parse a JSON array of markets.
pub fn parse_markets(json: &str) -> Result<Vec<Market>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of markets from disk.
pub fn load_markets(path: impl AsRef<Path>) -> Result<Vec<Market>> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    parse_markets(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::count_matches;
    use crate::normalizer::NormalizedText;
    use std::io::Write;

    fn sample_markets() -> Vec<Market> {
        vec![
            Market::new("m1", "Will GTA 6 release before 2027?", &["gta", "gta 6"]),
            Market::new("m2", "Bitcoin above 150k?", &["Bitcoin", "btc"]),
        ]
    }

    #[test]
    fn test_vocabulary_includes_one_hop_synonyms() {
        let catalog = Catalog::new(sample_markets(), &SynonymTable::builtin()).unwrap();
        let hits = catalog.vocabulary().scan("rockstar finally confirmed it");
        assert!(hits.contains_term("rockstar"));
        assert!(!hits.contains_term("gta"));
    }

    #[test]
    fn test_scan_respects_word_boundaries() {
        let catalog = Catalog::new(sample_markets(), &SynonymTable::builtin()).unwrap();
        let hits = catalog.vocabulary().scan("gtav is ancient now");
        assert!(!hits.contains_term("gta"));
        let hits = catalog.vocabulary().scan("gta 6 hype");
        assert!(hits.contains_term("gta"));
        assert!(hits.contains_term("gta 6"));
    }

    #[test]
    fn test_no_vocabulary_hit_means_empty_scan() {
        let catalog = Catalog::new(sample_markets(), &SynonymTable::builtin()).unwrap();
        assert!(catalog.vocabulary().scan("lovely weather for a picnic").is_empty());
    }

    #[test]
    fn test_vocabulary_hits_agree_with_text_lookup() {
        let synonyms = SynonymTable::builtin();
        let catalog = Catalog::new(sample_markets(), &synonyms).unwrap();
        let text = NormalizedText::new("BTC ripping while Rockstar teases GTA 6");
        let hits = catalog.vocabulary().scan(text.as_str());

        for market in catalog.markets() {
            assert_eq!(
                count_matches(&hits, market, &synonyms),
                count_matches(&text, market, &synonyms),
                "disagreement on {}",
                market.id
            );
        }
    }

    #[test]
    fn test_keywords_are_normalized_on_load() {
        let catalog = Catalog::new(sample_markets(), &SynonymTable::builtin()).unwrap();
        assert_eq!(catalog.markets()[1].keywords, vec!["bitcoin", "btc"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first_listing() {
        let markets = parse_markets(
            r#"[
                {"id":"btc","title":"Bitcoin above 150k?","keywords":["bitcoin","btc"]},
                {"id":"eth","title":"ETH flips BTC?","keywords":["eth"]},
                {"id":"btc","title":"Bitcoin below 50k?","keywords":["bitcoin"]}
            ]"#,
        )
        .unwrap();
        let catalog = Catalog::new(markets, &SynonymTable::builtin()).unwrap();

        let ids: Vec<&str> = catalog.markets().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["btc", "eth"]);
        assert_eq!(catalog.markets()[0].title, "Bitcoin above 150k?");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new(), &SynonymTable::builtin()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.vocabulary().scan("anything").is_empty());
    }

    #[test]
    fn test_replace_swaps_snapshot_but_old_arc_survives() {
        let handle = CatalogHandle::new(sample_markets(), MatchTables::builtin()).unwrap();
        let before = handle.snapshot();

        let count = handle
            .replace(vec![Market::new("m3", "Fed cut in March?", &["rate cut"])])
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(before.len(), 2);
        assert_eq!(handle.snapshot().markets()[0].id, "m3");
    }

    #[test]
    fn test_load_markets_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"pm-1","title":"Taylor Swift album in 2026?","keywords":["Taylor Swift","album"],"category":"music","platform":"polymarket"}}]"#
        )
        .unwrap();

        let handle = CatalogHandle::new(Vec::new(), MatchTables::builtin()).unwrap();
        assert_eq!(handle.reload_from(file.path()).unwrap(), 1);
        assert_eq!(handle.snapshot().markets()[0].keywords, vec!["taylor swift", "album"]);
    }

    #[test]
    fn test_failed_reload_keeps_previous_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not an array").unwrap();

        let handle = CatalogHandle::new(sample_markets(), MatchTables::builtin()).unwrap();
        assert!(handle.reload_from(file.path()).is_err());
        assert!(handle.reload_from("/definitely/not/here.json").is_err());
        assert_eq!(handle.snapshot().len(), 2);
    }
}
