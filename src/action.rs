// =============================================================================
// action.rs — YES, NO, OR SIT ON YOUR HANDS
// =============================================================================
//
// Turns a post's sentiment and its top market's price into a suggested side.
//
// Sentiment implies a yes probability: neutral is a coin flip, bullish pulls
// it up toward 0.9, bearish pushes it down toward 0.1, both scaled by how
// sure the sentiment reading is. The edge is how far that implied
// probability sits from the market's yes price, again scaled by sentiment
// confidence. Below ten cents of edge the answer is HOLD.
//
// Above it: bullish sentiment with yes priced under the implied probability
// says YES, bearish sentiment with yes priced over it says NO. Everything
// else, including a neutral read, is HOLD.
// =============================================================================

use serde::Serialize;

use crate::models::Market;
use crate::sentiment::{Sentiment, SentimentReading};
use crate::signal::Urgency;

/// Edge a trade needs before a side is suggested.
pub const MIN_TRADE_EDGE: f64 = 0.10;

/// How far full-confidence sentiment moves the implied probability off 0.5.
const SENTIMENT_SWING: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Yes,
    No,
    Hold,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedAction {
    pub direction: Direction,
    /// 0.0 to 1.0
    pub confidence: f64,
    pub edge: f64,
    pub reasoning: String,
}

impl SuggestedAction {
    fn hold(edge: f64, reasoning: impl Into<String>) -> Self {
        Self {
            direction: Direction::Hold,
            confidence: 0.0,
            edge,
            reasoning: reasoning.into(),
        }
    }
}

/// Yes probability the sentiment reading argues for.
pub fn implied_yes_probability(reading: &SentimentReading) -> f64 {
    match reading.sentiment {
        Sentiment::Neutral => 0.5,
        Sentiment::Bullish => 0.5 + reading.confidence * SENTIMENT_SWING,
        Sentiment::Bearish => 0.5 - reading.confidence * SENTIMENT_SWING,
    }
}

/// Confidence-weighted gap between implied probability and the yes price.
/// `None` when the market has no yes price.
pub fn edge(market: &Market, reading: &SentimentReading) -> Option<f64> {
    let price = market.yes_price?;
    Some(reading.confidence * (implied_yes_probability(reading) - price).abs())
}

pub fn suggest_action(
    market: &Market,
    reading: &SentimentReading,
    urgency: Urgency,
) -> SuggestedAction {
    let (Some(price), Some(edge)) = (market.yes_price, edge(market, reading)) else {
        return SuggestedAction::hold(0.0, "Market has no yes price to trade against");
    };
    if edge < MIN_TRADE_EDGE {
        return SuggestedAction::hold(edge, "Insufficient edge to justify a trade");
    }

    let implied = implied_yes_probability(reading);
    let percent = |value: f64| (value * 100.0).round();

    let (direction, reasoning) = match reading.sentiment {
        Sentiment::Neutral => (
            Direction::Hold,
            "Neutral sentiment, no clear directional bias".to_string(),
        ),
        Sentiment::Bullish if implied > price => (
            Direction::Yes,
            format!(
                "Bullish sentiment ({}% confidence) suggests YES is underpriced at {}%",
                percent(reading.confidence),
                percent(price)
            ),
        ),
        Sentiment::Bullish => (
            Direction::Hold,
            "Bullish sentiment but YES already priced high".to_string(),
        ),
        Sentiment::Bearish if implied < price => (
            Direction::No,
            format!(
                "Bearish sentiment ({}% confidence) suggests YES is overpriced at {}%",
                percent(reading.confidence),
                percent(price)
            ),
        ),
        Sentiment::Bearish => (
            Direction::Hold,
            "Bearish sentiment but YES already priced low".to_string(),
        ),
    };

    let confidence = match urgency {
        Urgency::Critical => (edge * 1.5).min(0.95),
        Urgency::High => (edge * 1.2).min(0.9),
        Urgency::Medium | Urgency::Low => edge,
    };

    SuggestedAction {
        direction,
        confidence,
        edge,
        reasoning,
    }
}
