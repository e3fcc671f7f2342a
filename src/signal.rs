// =============================================================================
// signal.rs — WHAT A DOWNSTREAM BOT SHOULD DO WITH A MATCH
// =============================================================================
//
// Matching says "this post is about these markets". A trading bot also wants
// to know: have I seen this event before, what kind of signal is it, how
// fast do I need to react, which way does the post lean, and is there a
// side worth taking. This module annotates a ranked match list with exactly
// that and nothing more. It never changes the matches.
//
// Event ids are deterministic so retries and duplicate posts collapse to the
// same id: an unmatched post hashes its own text, a matched post hashes its
// top market.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::time::Instant;

use crate::action::{suggest_action, SuggestedAction};
use crate::arbitrage::{top_pair_spread, ArbitrageSpread};
use crate::matcher::Matcher;
use crate::models::MarketMatch;
use crate::normalizer::{NormalizedText, TermLookup};
use crate::scorer::parse_end_date;
use crate::sentiment::{analyze_sentiment, SentimentReading};

/// Terms that mark a post as breaking news.
const BREAKING_TERMS: &[&str] = &[
    "breaking", "just", "announced", "now", "alert", "urgent", "confirmed",
];

/// Terms that make a news event time-critical.
const URGENT_TERMS: &[&str] = &["now", "breaking", "just", "alert", "urgent", "immediately"];

const NEWS_EVENT_CONFIDENCE: f64 = 0.8;
const SENTIMENT_SHIFT_CONFIDENCE: f64 = 0.7;
const MEDIUM_URGENCY_CONFIDENCE: f64 = 0.6;

const EVENT_HASH_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    Arbitrage,
    NewsEvent,
    SentimentShift,
    UserInterest,
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalType::Arbitrage => "arbitrage",
            SignalType::NewsEvent => "news_event",
            SignalType::SentimentShift => "sentiment_shift",
            SignalType::UserInterest => "user_interest",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// A post's matches plus the annotations a consumer acts on.
#[derive(Debug, Clone, Serialize)]
pub struct Signal {
    pub event_id: String,
    pub signal_type: SignalType,
    pub urgency: Urgency,
    pub matches: Vec<MarketMatch>,
    pub sentiment: SentimentReading,
    /// Absent when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arbitrage: Option<ArbitrageSpread>,
    pub processing_time_ms: f64,
}

impl Signal {
    /// Match `text` and annotate the result against the wall clock.
    pub fn analyze(matcher: &Matcher, text: &str) -> Self {
        Self::analyze_at(matcher, text, Utc::now())
    }

    pub fn analyze_at(matcher: &Matcher, text: &str, now: DateTime<Utc>) -> Self {
        let started = Instant::now();

        let matches = matcher.find_matches_at(text, now);
        let normalized = NormalizedText::new(text);
        let signal_type = classify_signal(&normalized, &matches);
        let urgency = determine_urgency(signal_type, &matches, &normalized, now);
        let sentiment = analyze_sentiment(text);
        let suggested_action = matches
            .first()
            .map(|top| suggest_action(&top.market, &sentiment, urgency));

        Self {
            event_id: event_id(text, &matches),
            signal_type,
            urgency,
            sentiment,
            suggested_action,
            arbitrage: top_pair_spread(&matches),
            matches,
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

/// Deterministic id: `evt_none_<hash of text>` without matches,
/// `evt_<category>_<hash of top market>` with them.
pub fn event_id(text: &str, matches: &[MarketMatch]) -> String {
    let Some(top) = matches.first() else {
        return format!("evt_none_{}", short_hash(&text.to_lowercase()));
    };

    let market = &top.market;
    let category = market
        .category
        .as_ref()
        .map(|c| c.as_str())
        .unwrap_or("other");
    let platform = market
        .platform
        .map(|p| p.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "evt_{}_{}",
        category,
        short_hash(&format!("{}_{}", platform, market.id))
    )
}

fn short_hash(input: &str) -> String {
    let digest = hex::encode(Sha256::digest(input.as_bytes()));
    digest[..EVENT_HASH_CHARS].to_string()
}

pub fn classify_signal<P>(text: &P, matches: &[MarketMatch]) -> SignalType
where
    P: TermLookup + ?Sized,
{
    let Some(top) = matches.first() else {
        return SignalType::UserInterest;
    };

    if top_pair_spread(matches).is_some() {
        return SignalType::Arbitrage;
    }
    if top.confidence > NEWS_EVENT_CONFIDENCE && has_any_term(text, BREAKING_TERMS) {
        return SignalType::NewsEvent;
    }
    if top.confidence > SENTIMENT_SHIFT_CONFIDENCE {
        return SignalType::SentimentShift;
    }
    SignalType::UserInterest
}

pub fn determine_urgency<P>(
    signal_type: SignalType,
    matches: &[MarketMatch],
    text: &P,
    now: DateTime<Utc>,
) -> Urgency
where
    P: TermLookup + ?Sized,
{
    let Some(top) = matches.first() else {
        return Urgency::Low;
    };

    if signal_type == SignalType::Arbitrage {
        return Urgency::Critical;
    }
    if signal_type == SignalType::NewsEvent && has_any_term(text, URGENT_TERMS) {
        return Urgency::High;
    }

    if let Some(end) = top.market.end_date.as_deref().and_then(parse_end_date) {
        let hours_left = (end - now).num_minutes() as f64 / 60.0;
        if hours_left > 0.0 && hours_left < 24.0 {
            return Urgency::High;
        }
        if hours_left > 0.0 && hours_left < 72.0 {
            return Urgency::Medium;
        }
    }

    if top.confidence > NEWS_EVENT_CONFIDENCE {
        return if signal_type == SignalType::NewsEvent {
            Urgency::High
        } else {
            Urgency::Medium
        };
    }
    if top.confidence > MEDIUM_URGENCY_CONFIDENCE {
        return Urgency::Medium;
    }
    Urgency::Low
}

fn has_any_term<P>(text: &P, terms: &[&str]) -> bool
where
    P: TermLookup + ?Sized,
{
    terms.iter().any(|term| text.contains_term(term))
}
