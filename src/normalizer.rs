// =============================================================================
// normalizer.rs — SCRUBBING THE POST BEFORE ANYONE LOOKS AT IT
// =============================================================================
//
// Posts show up shouting, full of links, with whitespace that looks like it
// was typed on a phone in a moving car. Before any keyword test runs we:
//
// 1. Case-fold everything, so "BITCOIN", "Bitcoin" and "bitcoin" are one term.
// 2. Drop URL tokens and @mentions. "https://t.co/btc..." is not a post
//    about Bitcoin, and "@elonmusk" is an address, not a topic.
// 3. Collapse whitespace runs to a single space, so "rate   cut" still
//    matches the two-word keyword "rate cut".
//
// Running it twice gives the same answer as running it once. The raw text is
// kept next to the folded copy for logging only.
//
// Term lookups are whole-term: "eth" must not fire inside "whether", and
// "sol" must not fire inside "console". memchr finds candidates, a boundary
// check on each side throws out the ones buried inside a longer word.
// =============================================================================

/// A post after case-folding and cleanup, plus the raw text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    original: String,
    folded: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self {
            original: raw.to_string(),
            folded: normalize(raw),
        }
    }

    /// The folded text every pattern and term test runs against.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// The untouched input. Diagnostics only.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Case-fold, drop URL and @mention tokens and collapse whitespace.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .filter(|token| !is_url(token) && !is_mention(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_url(token: &str) -> bool {
    token.starts_with("http://") || token.starts_with("https://")
}

/// `@handle`, optionally with trailing punctuation ("@powell:"). A bare "@"
/// is kept.
fn is_mention(token: &str) -> bool {
    token
        .strip_prefix('@')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Anything that can answer "does this whole term appear in the post?".
///
/// The normalized text answers it directly. The catalog's vocabulary scan
/// answers it from a precomputed hit set, which is what the matcher uses in
/// the hot loop.
pub trait TermLookup {
    fn contains_term(&self, term: &str) -> bool;
}

impl TermLookup for NormalizedText {
    fn contains_term(&self, term: &str) -> bool {
        contains_term(&self.folded, term)
    }
}

impl TermLookup for str {
    fn contains_term(&self, term: &str) -> bool {
        contains_term(self, term)
    }
}

/// Whole-term substring test. Both inputs are expected to be folded already.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() || term.len() > haystack.len() {
        return false;
    }

    memchr::memmem::find_iter(haystack.as_bytes(), term.as_bytes())
        .any(|start| is_whole_term_at(haystack, start, start + term.len()))
}

/// True when `haystack[start..end]` is not glued to a word character on
/// either side. Callers pass offsets from a match of a valid UTF-8 needle,
/// so both offsets sit on char boundaries.
pub(crate) fn is_whole_term_at(haystack: &str, start: usize, end: usize) -> bool {
    let before_ok = haystack[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c));
    let after_ok = haystack[end..]
        .chars()
        .next()
        .map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_case_and_whitespace() {
        assert_eq!(normalize("  Fed   RATE\tCut\n incoming "), "fed rate cut incoming");
    }

    #[test]
    fn test_normalize_drops_urls() {
        assert_eq!(
            normalize("Bitcoin pumping https://t.co/abc123 right now"),
            "bitcoin pumping right now"
        );
    }

    #[test]
    fn test_normalize_drops_mentions() {
        assert_eq!(
            normalize("@elonmusk says doge to the moon, cc @Crypto_Desk:"),
            "says doge to the moon, cc"
        );
        assert_eq!(normalize("meet @ 5pm"), "meet @ 5pm");
        assert!(!NormalizedText::new("@elonmusk posted again").contains_term("elonmusk"));
        assert!(NormalizedText::new("elonmusk posted again").contains_term("elonmusk"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "GTA 6 Trailer DROPPED!!! https://rockstar.com",
            "İstanbul   ÉLECTION  results",
            "",
            "   ",
            "S&P 500 hits ATH 🚀🚀",
            "@fed_watch: Powell @ the podium",
        ];
        for raw in samples {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_original_text_is_retained() {
        let text = NormalizedText::new("Powell SPEAKS");
        assert_eq!(text.original(), "Powell SPEAKS");
        assert_eq!(text.as_str(), "powell speaks");
    }

    #[test]
    fn test_contains_term_respects_word_boundaries() {
        assert!(contains_term("eth is flipping btc", "eth"));
        assert!(!contains_term("whether or not", "eth"));
        assert!(!contains_term("new console launch", "sol"));
        assert!(contains_term("#bitcoin to the moon", "bitcoin"));
        assert!(contains_term("trump's tariffs", "trump"));
    }

    #[test]
    fn test_contains_term_multi_word_and_symbols() {
        assert!(contains_term("the fed will cut. rate cut confirmed", "rate cut"));
        assert!(contains_term("s&p 500 at a new high", "s&p 500"));
        assert!(!contains_term("grand theft", "grand theft auto"));
    }

    #[test]
    fn test_contains_term_finds_later_occurrence() {
        // first "gta" is inside a word, the second is a real hit
        assert!(contains_term("gtav is old, gta 6 is new", "gta"));
    }

    #[test]
    fn test_lookup_trait_on_normalized_text() {
        let text = NormalizedText::new("Rockstar just dropped the TRAILER");
        assert!(text.contains_term("rockstar"));
        assert!(!text.contains_term("rock"));
    }
}
