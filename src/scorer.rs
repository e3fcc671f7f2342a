// =============================================================================
// scorer.rs — TURNING TALLIES INTO ONE NUMBER
// =============================================================================
//
// Five independent terms, added up, clipped to [0, 1]:
//
// 1. BASE     weighted hits over a capped denominator. Exact beats synonym,
//             and an exact hit that also sits in the title gets a bit extra.
// 2. COVERAGE share of the (capped) keyword list that matched at all.
// 3. PHRASE   multi-word exact hits are rarely coincidences.
// 4. COHERENCE several matched terms from one category cluster, more if
//             the market lives in that category.
// 5. RECENCY  markets resolving within a month, more within a week.
//
// The denominator cap keeps coverage honest at both ends: a market with 40
// description-derived keywords isn't punished for having a long list, and a
// market with one keyword can't divide by a tiny number forever.
//
// Everything here is a pure function. The clock comes in as an argument.
// =============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::HashSet;

use crate::clusters::CategoryClusters;
use crate::counter::MatchCounts;
use crate::models::{Category, Market};

/// Coverage is computed against at most this many keywords.
pub const DENOMINATOR_CAP: usize = 5;

pub const EXACT_WEIGHT: f64 = 1.0;
pub const SYNONYM_WEIGHT: f64 = 0.5;
pub const TITLE_WEIGHT: f64 = 0.15;

pub const COVERAGE_BONUS_MAX: f64 = 0.2;

pub const PHRASE_BONUS_PER_MATCH: f64 = 0.12;
pub const PHRASE_BONUS_MAX: f64 = 0.3;

pub const COHERENCE_STRONG_ALIGNED: f64 = 0.15;
pub const COHERENCE_STRONG: f64 = 0.10;
pub const COHERENCE_MODERATE_ALIGNED: f64 = 0.08;
pub const COHERENCE_MODERATE: f64 = 0.05;

pub const RECENCY_WEEK_BOOST: f64 = 0.10;
pub const RECENCY_MONTH_BOOST: f64 = 0.05;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Confidence in [0, 1] that the post is about `market`.
///
/// A market with no keywords, or none of whose keywords matched, scores
/// exactly zero: the bonus terms amplify evidence, they don't invent it.
pub fn score(
    counts: &MatchCounts,
    market: &Market,
    matched_keywords: &[String],
    clusters: &CategoryClusters,
    now: DateTime<Utc>,
) -> f64 {
    if counts.total_checked == 0 || counts.is_empty() {
        return 0.0;
    }

    let total = base_score(counts)
        + coverage_bonus(counts)
        + phrase_bonus(counts)
        + coherence_bonus(matched_keywords, market.category.as_ref(), clusters)
        + recency_boost(market.end_date.as_deref(), now);

    total.clamp(0.0, 1.0)
}

fn capped_denominator(counts: &MatchCounts) -> f64 {
    counts.total_checked.min(DENOMINATOR_CAP).max(1) as f64
}

/// Weighted hits over the capped denominator. Not clipped on its own.
pub fn base_score(counts: &MatchCounts) -> f64 {
    let weighted = counts.exact as f64 * EXACT_WEIGHT
        + counts.synonym as f64 * SYNONYM_WEIGHT
        + counts.title as f64 * TITLE_WEIGHT;
    weighted / capped_denominator(counts)
}

/// Up to [`COVERAGE_BONUS_MAX`], scaled by the share of keywords matched.
pub fn coverage_bonus(counts: &MatchCounts) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let fraction = (counts.matched() as f64 / capped_denominator(counts)).min(1.0);
    COVERAGE_BONUS_MAX * fraction
}

pub fn phrase_bonus(counts: &MatchCounts) -> f64 {
    (counts.multi_word as f64 * PHRASE_BONUS_PER_MATCH).min(PHRASE_BONUS_MAX)
}

/// Bonus from the first cluster (in table order) holding two or more of the
/// matched surface forms. Later clusters are never consulted once one
/// qualifies.
pub fn coherence_bonus(
    matched_keywords: &[String],
    market_category: Option<&Category>,
    clusters: &CategoryClusters,
) -> f64 {
    let distinct: HashSet<&str> = matched_keywords.iter().map(String::as_str).collect();

    for (category, terms) in clusters.iter() {
        let in_cluster = distinct.iter().filter(|kw| terms.contains(**kw)).count();
        let aligned = market_category == Some(category);

        if in_cluster >= 3 {
            return if aligned { COHERENCE_STRONG_ALIGNED } else { COHERENCE_STRONG };
        }
        if in_cluster == 2 {
            return if aligned { COHERENCE_MODERATE_ALIGNED } else { COHERENCE_MODERATE };
        }
    }
    0.0
}

/// Boost for markets resolving soon. Missing, unparseable and past dates
/// all get zero.
pub fn recency_boost(end_date: Option<&str>, now: DateTime<Utc>) -> f64 {
    let Some(end) = end_date.and_then(parse_end_date) else {
        return 0.0;
    };

    let days_until_end = (end - now).num_seconds() as f64 / SECONDS_PER_DAY;
    if days_until_end <= 0.0 {
        0.0
    } else if days_until_end <= 7.0 {
        RECENCY_WEEK_BOOST
    } else if days_until_end <= 30.0 {
        RECENCY_MONTH_BOOST
    } else {
        0.0
    }
}

/// Providers send RFC 3339, bare dates, and naive timestamps. Naive values
/// are taken as UTC.
pub fn parse_end_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.and_utc())
}
