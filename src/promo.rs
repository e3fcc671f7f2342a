// =============================================================================
// promo.rs — THE BOUNCER
// =============================================================================
//
// A surprising share of posts that mention Bitcoin are not about Bitcoin.
// They are about how you, specifically, can make $500 a day from your couch
// if you join a Discord. Matching those against markets produces confident
// nonsense, so they get rejected before a single keyword is checked.
//
// Three tests, any one is enough:
//
// 1. Signature patterns. Scam phrasing, "link in bio", "join discord",
//    airdrops, presales, "risk-free", "guaranteed profit" and friends.
// 2. Emoji density. More than a handful of emoji in a SHORT post. Long posts
//    with a few rockets are allowed to live.
// 3. Dollar soup. Three or more distinct dollar figures with no market in
//    sight is how promo copy reads.
//
// This is a heuristic. Recall on obvious spam matters; precision on
// borderline posts does not.
// =============================================================================

use regex::{Regex, RegexSet, RegexSetBuilder};
use std::collections::HashSet;
use tracing::debug;

use crate::error::Result;

/// Signature patterns, matched case-insensitively against the raw post.
pub const BUILTIN_PROMOTIONAL_PATTERNS: &[&str] = &[
    // Funded-trader and "free money" scams
    r"\$\d+k.*pass.*test",
    r"won't give you.*we will",
    r"no deposits.*profits",
    r"worst case.*lose.*fee",
    r"free \$\d+",
    r"claim.*\$\d+",
    r"(earn|make)\s+\$\d[\d,]*[kmb]?\s+(a|per|every)\s+(day|week|hour)",
    r"limited.*offer",
    // Funnels off-platform
    r"click.*link.*bio",
    r"\bdm\b.*for.*more",
    r"join.*discord",
    // Token launch hype
    r"airdrop",
    r"whitelist",
    r"presale",
    // Promises no honest market makes
    r"guaranteed.*profit",
    r"risk[- ]free",
];

/// More than this many emoji in a short post is spam.
pub const EMOJI_DENSITY_THRESHOLD: usize = 8;

/// Posts at or above this many characters are exempt from the emoji test.
pub const SHORT_TEXT_CHARS: usize = 200;

/// This many distinct dollar amounts or more is promo copy.
pub const DOLLAR_AMOUNT_THRESHOLD: usize = 3;

const DIAGNOSTIC_PREFIX_CHARS: usize = 60;

/// Compiled promotional signatures plus the two numeric heuristics.
#[derive(Debug, Clone)]
pub struct PromotionalPatternSet {
    patterns: RegexSet,
    dollar_amount: Regex,
    emoji_threshold: usize,
    short_text_chars: usize,
    dollar_threshold: usize,
}

impl PromotionalPatternSet {
    pub fn new(
        patterns: &[&str],
        emoji_threshold: usize,
        short_text_chars: usize,
        dollar_threshold: usize,
    ) -> Result<Self> {
        let patterns = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()?;
        let dollar_amount = Regex::new(r"(?i)\$\d+(?:[.,]\d+)*[kmb]?")?;

        Ok(Self {
            patterns,
            dollar_amount,
            emoji_threshold,
            short_text_chars,
            dollar_threshold,
        })
    }

    /// The shipped signature list and thresholds.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_PROMOTIONAL_PATTERNS,
            EMOJI_DENSITY_THRESHOLD,
            SHORT_TEXT_CHARS,
            DOLLAR_AMOUNT_THRESHOLD,
        )
        .expect("builtin promotional patterns must compile")
    }

    /// Is this post spam/promo that should never reach the matcher?
    pub fn is_promotional(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        if self.patterns.is_match(text) {
            log_rejection(text, "signature pattern");
            return true;
        }

        let emoji = count_emoji(text);
        if emoji > self.emoji_threshold && text.chars().count() < self.short_text_chars {
            log_rejection(text, "emoji density");
            return true;
        }

        if self.distinct_dollar_amounts(text) >= self.dollar_threshold {
            log_rejection(text, "dollar amounts");
            return true;
        }

        false
    }

    /// Number of distinct dollar tokens (`$100`, `$5K`, `$1.5m`), compared
    /// case-insensitively.
    pub fn distinct_dollar_amounts(&self, text: &str) -> usize {
        self.dollar_amount
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl Default for PromotionalPatternSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn log_rejection(text: &str, reason: &'static str) {
    let prefix: String = text.chars().take(DIAGNOSTIC_PREFIX_CHARS).collect();
    debug!(reason = reason, prefix = %prefix, "Skipping promotional content");
}

/// Count emoji code points. Skin-tone modifiers, variation selectors and
/// ZWJ glue are not counted, so one composed emoji counts once per visible
/// pictograph. Plain symbols that only turn into emoji with a variation
/// selector (✓, ➔, ☐, ♥) are text and are not counted.
pub fn count_emoji(text: &str) -> usize {
    text.chars().filter(|&c| is_emoji(c)).count()
}

fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    if (0x1F3FB..=0x1F3FF).contains(&cp) {
        return false;
    }
    matches!(
        cp,
        0x1F1E6..=0x1F1FF   // regional indicators (flags)
            | 0x1F300..=0x1F5FF // symbols and pictographs
            | 0x1F600..=0x1F64F // emoticons
            | 0x1F680..=0x1F6FF // transport and map
            | 0x1F900..=0x1F9FF // supplemental symbols and pictographs
            | 0x1FA70..=0x1FAFF // symbols and pictographs extended-A
    ) || EMOJI_PRESENTATION_BMP
        .iter()
        .any(|range| range.contains(&cp))
}

/// BMP code points that render as emoji by default (Emoji_Presentation).
const EMOJI_PRESENTATION_BMP: &[std::ops::RangeInclusive<u32>] = &[
    0x231A..=0x231B,
    0x23E9..=0x23EC,
    0x23F0..=0x23F0,
    0x23F3..=0x23F3,
    0x25FD..=0x25FE,
    0x2614..=0x2615,
    0x2648..=0x2653,
    0x267F..=0x267F,
    0x2693..=0x2693,
    0x26A1..=0x26A1,
    0x26AA..=0x26AB,
    0x26BD..=0x26BE,
    0x26C4..=0x26C5,
    0x26CE..=0x26CE,
    0x26D4..=0x26D4,
    0x26EA..=0x26EA,
    0x26F2..=0x26F3,
    0x26F5..=0x26F5,
    0x26FA..=0x26FA,
    0x26FD..=0x26FD,
    0x2705..=0x2705,
    0x270A..=0x270B,
    0x2728..=0x2728,
    0x274C..=0x274C,
    0x274E..=0x274E,
    0x2753..=0x2755,
    0x2757..=0x2757,
    0x2795..=0x2797,
    0x27B0..=0x27B0,
    0x27BF..=0x27BF,
    0x2B1B..=0x2B1C,
    0x2B50..=0x2B50,
    0x2B55..=0x2B55,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> PromotionalPatternSet {
        PromotionalPatternSet::builtin()
    }

    #[test]
    fn test_empty_text_is_not_promotional() {
        assert!(!classifier().is_promotional(""));
    }

    #[test]
    fn test_signature_patterns_are_rejected() {
        let c = classifier();
        assert!(c.is_promotional("Join our Discord for early alpha on BTC"));
        assert!(c.is_promotional("Huge AIRDROP live now, eth holders eligible"));
        assert!(c.is_promotional("Click the link in my bio for signals"));
        assert!(c.is_promotional("Risk-free trading on every Fed decision"));
        assert!(c.is_promotional("Get $100K if you pass our trading test"));
        assert!(c.is_promotional("I make $500 a day trading bitcoin, ask me how"));
        assert!(c.is_promotional("DM me for more bitcoin tips"));
    }

    #[test]
    fn test_regular_posts_pass() {
        let c = classifier();
        assert!(!c.is_promotional("Powell says rate cuts are off the table until inflation cools"));
        assert!(!c.is_promotional("Bitcoin just broke $100k for the first time"));
        assert!(!c.is_promotional("The admin form asks for more details"));
    }

    #[test]
    fn test_emoji_dense_short_post_is_rejected() {
        let post = "BTC 🚀🚀🚀🚀🚀🔥🔥🔥💎💎 moon";
        assert!(count_emoji(post) > EMOJI_DENSITY_THRESHOLD);
        assert!(classifier().is_promotional(post));
    }

    #[test]
    fn test_long_post_with_emoji_is_allowed() {
        let mut post = "Long breakdown of the ETF flows this week and what it means for the halving. ".repeat(4);
        post.push_str("🚀🚀🚀🚀🚀🔥🔥🔥💎💎");
        assert!(post.chars().count() >= SHORT_TEXT_CHARS);
        assert!(!classifier().is_promotional(&post));
    }

    #[test]
    fn test_few_emoji_are_fine() {
        assert!(!classifier().is_promotional("GTA 6 trailer is out 🎮🔥"));
    }

    #[test]
    fn test_dollar_soup_is_rejected() {
        let c = classifier();
        assert_eq!(c.distinct_dollar_amounts("$100 $5K $1.5M $100"), 3);
        assert!(c.is_promotional("Turn $100 into $5K, then $50K, then $1M, then $10M"));
    }

    #[test]
    fn test_repeated_dollar_amount_counts_once() {
        let c = classifier();
        assert!(!c.is_promotional("BTC at $100k? $100k is the line everyone watches, $100K or bust"));
    }

    #[test]
    fn test_skin_tone_modifier_is_not_counted() {
        // thumbs up + medium skin tone
        assert_eq!(count_emoji("\u{1F44D}\u{1F3FD}"), 1);
    }

    #[test]
    fn test_text_symbols_are_not_emoji() {
        assert_eq!(count_emoji("\u{2713} \u{2794} \u{2610} \u{2665} \u{2192}"), 0);
        // high voltage, check mark button, sparkles, star
        assert_eq!(count_emoji("\u{26A1}\u{2705}\u{2728}\u{2B50}"), 4);
    }

    #[test]
    fn test_checklist_post_is_not_emoji_dense() {
        let post = "Fed recap \u{2713} cut \u{2713} dots \u{2713} presser \u{2713} QT \u{2794} \u{2794} \u{2794} \u{2794} \u{2794}";
        assert_eq!(count_emoji(post), 0);
        assert!(!classifier().is_promotional(post));
    }

    #[test]
    fn test_invalid_custom_pattern_is_an_error() {
        assert!(PromotionalPatternSet::new(&["(unclosed"], 8, 200, 3).is_err());
    }
}
