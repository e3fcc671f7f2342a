// =============================================================================
// sentiment.rs — WHICH WAY IS THE POST LEANING
// =============================================================================
//
// A lexicon count, nothing smarter. Every word that reads bullish ("moon",
// "rally", "confirmed") or bearish ("dump", "crash", "unlikely") scores one
// point for its side. Two things bend the count:
//
//   - A negation right before the word flips it. "not bullish" is bearish,
//     "never crash" is bullish.
//   - A strong modifier right before the word doubles it. "extremely
//     bearish" is worth two.
//
// A side wins when it holds more than 60% of the points; its share is the
// confidence. Anything closer is neutral, and the confidence says how evenly
// split it was. A post with no lexicon words at all is neutral with zero
// confidence.
//
// Words are compared after lowercasing and stripping everything that isn't
// a letter, so "don't" is "dont" and "#moon!" is "moon".
// =============================================================================

use serde::Serialize;
use std::fmt;

const BULLISH_WORDS: &[&str] = &[
    "bullish", "moon", "rally", "pump", "surge", "soar", "skyrocket", "buy",
    "long", "calls", "green", "win", "winning", "yes", "definitely",
    "confirmed", "happening", "inevitable", "obvious", "clearly", "certain",
    "guarantee", "lock", "easy", "confident", "predict", "up", "rise",
    "increase", "gain", "profit", "success", "boom", "growth", "explosive",
    "parabolic", "breakout",
];

/// Two-word bullish phrases, checked before the single words.
const BULLISH_PHRASES: &[(&str, &str)] = &[("will", "happen"), ("going", "to")];

const BEARISH_WORDS: &[&str] = &[
    "bearish", "dump", "crash", "plunge", "tank", "collapse", "fall", "sell",
    "short", "puts", "red", "lose", "losing", "no", "impossible", "unlikely",
    "doubt", "skeptical", "concern", "worried", "fear", "risk", "down",
    "decline", "drop", "decrease", "loss", "fail", "failure", "bubble",
    "overvalued", "recession", "bear", "correction",
];

const STRONG_MODIFIERS: &[&str] = &[
    "very", "extremely", "highly", "absolutely", "completely", "totally",
    "definitely", "certainly", "obviously", "clearly", "strongly", "really",
];

// apostrophes are stripped before lookup
const NEGATIONS: &[&str] = &[
    "not", "no", "dont", "wont", "cant", "isnt", "arent", "doesnt", "never",
    "neither", "nor", "none", "nobody", "nothing", "nowhere",
];

/// Share of the points one side needs to win.
const DOMINANCE_RATIO: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Bearish => "bearish",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentReading {
    pub sentiment: Sentiment,
    /// 0.0 to 1.0
    pub confidence: f64,
}

impl SentimentReading {
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
        }
    }
}

pub fn analyze_sentiment(text: &str) -> SentimentReading {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|raw| {
            raw.chars()
                .filter(|c| c.is_alphabetic())
                .flat_map(char::to_lowercase)
                .collect()
        })
        .collect();

    let mut bullish = 0.0;
    let mut bearish = 0.0;
    let mut i = 0;

    while i < words.len() {
        let word = words[i].as_str();
        let next = words.get(i + 1).map(String::as_str);

        let (polarity, width) = if next.is_some_and(|n| is_bullish_phrase(word, n)) {
            (Some(true), 2)
        } else if BULLISH_WORDS.contains(&word) {
            (Some(true), 1)
        } else if BEARISH_WORDS.contains(&word) {
            (Some(false), 1)
        } else {
            (None, 1)
        };

        if let Some(is_bullish) = polarity {
            let previous = i.checked_sub(1).map(|p| words[p].as_str());
            let negated = previous.is_some_and(|p| NEGATIONS.contains(&p));
            let weight = if previous.is_some_and(|p| STRONG_MODIFIERS.contains(&p)) {
                2.0
            } else {
                1.0
            };

            if is_bullish != negated {
                bullish += weight;
            } else {
                bearish += weight;
            }
        }
        i += width;
    }

    reading_from_scores(bullish, bearish)
}

fn is_bullish_phrase(first: &str, second: &str) -> bool {
    BULLISH_PHRASES
        .iter()
        .any(|&(a, b)| a == first && b == second)
}

fn reading_from_scores(bullish: f64, bearish: f64) -> SentimentReading {
    let total = bullish + bearish;
    if total == 0.0 {
        return SentimentReading::neutral();
    }

    let bullish_ratio = bullish / total;
    let bearish_ratio = bearish / total;

    if bullish_ratio > DOMINANCE_RATIO {
        return SentimentReading {
            sentiment: Sentiment::Bullish,
            confidence: bullish_ratio,
        };
    }
    if bearish_ratio > DOMINANCE_RATIO {
        return SentimentReading {
            sentiment: Sentiment::Bearish,
            confidence: bearish_ratio,
        };
    }
    SentimentReading {
        sentiment: Sentiment::Neutral,
        confidence: 1.0 - (bullish_ratio - bearish_ratio).abs(),
    }
}
