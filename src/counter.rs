// =============================================================================
// counter.rs — TALLYING THE EVIDENCE
// =============================================================================
//
// For one market, walk its explicit keywords and sort each one into a
// bucket:
//
// - EXACT: the keyword itself is in the post. If it is also in the market's
//   title that's a TITLE hit on top, and if it has more than one word that's
//   a MULTI-WORD hit on top. Those two are labels on an exact hit, not
//   alternatives to it.
// - SYNONYM: the keyword is absent, but one of its table synonyms is
//   present. First synonym to fire wins and its surface form is recorded.
// - nothing.
//
// A keyword lands in EXACT or SYNONYM, never both.
// =============================================================================

use serde::Serialize;

use crate::models::Market;
use crate::normalizer::{contains_term, normalize, TermLookup};
use crate::synonyms::SynonymTable;

/// Per-(post, market) tallies. Built fresh for every match call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    pub exact: usize,
    pub synonym: usize,
    /// Exact hits whose keyword also appears in the market title.
    pub title: usize,
    /// Exact hits on keywords of two or more tokens.
    pub multi_word: usize,
    /// Number of explicit keywords examined.
    pub total_checked: usize,
}

impl MatchCounts {
    /// Keywords that matched at all, exact or via synonym.
    pub fn matched(&self) -> usize {
        self.exact + self.synonym
    }

    pub fn is_empty(&self) -> bool {
        self.matched() == 0
    }
}

/// Tallies plus the surface forms that produced them, in keyword order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatch {
    pub counts: MatchCounts,
    pub matched_keywords: Vec<String>,
}

/// Count how `market`'s keywords show up in the post behind `text`.
pub fn count_matches<P>(text: &P, market: &Market, synonyms: &SynonymTable) -> KeywordMatch
where
    P: TermLookup + ?Sized,
{
    let mut result = KeywordMatch {
        counts: MatchCounts {
            total_checked: market.keywords.len(),
            ..MatchCounts::default()
        },
        matched_keywords: Vec::new(),
    };

    // Folded lazily: most markets never get an exact hit.
    let mut title: Option<String> = None;

    for keyword in &market.keywords {
        if text.contains_term(keyword) {
            result.counts.exact += 1;

            let title = title.get_or_insert_with(|| normalize(&market.title));
            if contains_term(title, keyword) {
                result.counts.title += 1;
            }
            if keyword.contains(char::is_whitespace) {
                result.counts.multi_word += 1;
            }
            result.matched_keywords.push(keyword.clone());
            continue;
        }

        if let Some(synonym) = synonyms
            .related(keyword)
            .iter()
            .find(|synonym| text.contains_term(synonym))
        {
            result.counts.synonym += 1;
            result.matched_keywords.push(synonym.clone());
        }
    }

    result
}
