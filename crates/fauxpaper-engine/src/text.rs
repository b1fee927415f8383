//! Text post-processing shared by every generation tier
//!
//! Applied uniformly whether a unit came from the SDK tier, the wire tier
//! or the template tier: percent tokens become the `%` symbol, and an
//! abstract without a fictional/parody marker gains the canonical
//! disclaimer sentence.

use regex::Regex;
use std::sync::LazyLock;

/// Canonical disclaimer appended to abstracts that lack one
pub const DISCLAIMER: &str =
    "This study is entirely fictional and should not be cited in any academic work.";

static NUM_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*percent").unwrap());
static NUM_PER_CENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*per\s*cent").unwrap());
static BARE_PERCENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bpercent\b").unwrap());
static BARE_PER_CENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bper\s*cent\b").unwrap());

/// Replace spelled-out "percent"/"per cent" tokens with `%`
///
/// Number-adjacent forms attach the symbol to the number ("50 percent" →
/// "50%"); bare tokens become a lone `%`.
///
/// # Examples
///
/// ```
/// use fauxpaper_engine::text::normalize_percent;
///
/// assert_eq!(normalize_percent("50 percent of people"), "50% of people");
/// assert_eq!(normalize_percent("12 per cent rise"), "12% rise");
/// assert_eq!(normalize_percent("a large percent"), "a large %");
/// ```
pub fn normalize_percent(text: &str) -> String {
    let text = NUM_PERCENT.replace_all(text, "$1%");
    let text = NUM_PER_CENT.replace_all(&text, "$1%");
    let text = BARE_PERCENT.replace_all(&text, "%");
    BARE_PER_CENT.replace_all(&text, "%").into_owned()
}

/// Append the canonical disclaimer unless the text already reads as parody
///
/// The check is a case-insensitive search for "fictional" or "parody".
pub fn ensure_disclaimer(abstract_text: String) -> String {
    let lower = abstract_text.to_lowercase();
    if lower.contains("fictional") || lower.contains("parody") {
        abstract_text
    } else {
        format!("{} {}", abstract_text.trim_end(), DISCLAIMER)
    }
}

/// Strip trailing sentence punctuation from a claim before it joins a title
pub fn strip_trailing_punct(claim: &str) -> &str {
    claim.trim_end_matches(['.', '!', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_adjacent_percent() {
        assert_eq!(
            normalize_percent("50 percent of people believe this"),
            "50% of people believe this"
        );
        assert_eq!(normalize_percent("50percent"), "50%");
        assert_eq!(normalize_percent("9 PER CENT"), "9%");
    }

    #[test]
    fn test_bare_percent_tokens() {
        assert_eq!(normalize_percent("a percent of a per cent"), "a % of a %");
    }

    #[test]
    fn test_percent_never_survives() {
        let cleaned = normalize_percent("80 Percent said 20 per cent, percent!");
        assert!(!cleaned.to_lowercase().contains("percent"));
        assert!(cleaned.contains("80%"));
        assert!(cleaned.contains("20%"));
    }

    #[test]
    fn test_normalize_percent_idempotent() {
        let once = normalize_percent("75 percent sure");
        assert_eq!(normalize_percent(&once), once);
    }

    #[test]
    fn test_disclaimer_appended_when_missing() {
        let out = ensure_disclaimer("We found things.".to_string());
        assert!(out.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_disclaimer_skipped_when_marked() {
        let fictional = "All data is FICTIONAL.".to_string();
        assert_eq!(ensure_disclaimer(fictional.clone()), fictional);

        let parody = "A work of parody.".to_string();
        assert_eq!(ensure_disclaimer(parody.clone()), parody);
    }

    #[test]
    fn test_strip_trailing_punct() {
        assert_eq!(strip_trailing_punct("rice is nice!?"), "rice is nice");
        assert_eq!(strip_trailing_punct("no punctuation"), "no punctuation");
    }
}
