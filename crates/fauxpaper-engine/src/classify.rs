//! Rule-based topic classification
//!
//! A fixed, ordered table of (domain, keyword-set) rules evaluated against
//! the lower-cased claim. The first rule with a keyword occurring in the
//! claim wins; no match falls back to `general`. Pure and deterministic.
//! New domains are added by extending the table, not by branching.

use fauxpaper_domain::{Domain, TopicProfile};

/// Ordered classification rules; earlier rows take priority
const RULES: &[(Domain, &[&str])] = &[
    (
        Domain::Biochemistry,
        &[
            "glucose", "chemical", "molecule", "atom", "reaction", "acid", "base", "compound",
            "element", "oxygen", "carbon", "protein", "enzyme", "cell", "dna", "rna",
        ],
    ),
    (
        Domain::Physics,
        &[
            "energy", "force", "gravity", "speed", "light", "quantum", "wave", "particle",
            "electric", "magnetic", "momentum",
        ],
    ),
    (
        Domain::Nutrition,
        &[
            "food", "eat", "rice", "diet", "nutrition", "calorie", "meal", "cooking", "taste",
            "spoon", "fork", "stew", "vitamin",
        ],
    ),
    (
        Domain::Psychology,
        &[
            "people", "person", "think", "feel", "behavior", "social", "mental", "happy", "sad",
            "stress", "intelligence", "personality",
        ],
    ),
    (
        Domain::Technology,
        &[
            "computer", "phone", "internet", "app", "software", "code", "data", "ai", "machine",
            "digital", "algorithm",
        ],
    ),
    (
        Domain::Economics,
        &[
            "money", "rich", "poor", "economy", "price", "cost", "income", "wealth", "salary",
            "profit", "market",
        ],
    ),
];

/// Classify a claim into a domain profile
///
/// Matching is substring containment against the lower-cased claim, so
/// "eating" triggers the "eat" keyword.
///
/// # Examples
///
/// ```
/// use fauxpaper_engine::classify::classify;
/// use fauxpaper_domain::Domain;
///
/// assert_eq!(classify("Eating rice every day").domain, Domain::Nutrition);
/// assert_eq!(classify("the moon is cheese").domain, Domain::General);
/// ```
pub fn classify(claim: &str) -> TopicProfile {
    let claim_lower = claim.to_lowercase();

    for (domain, keywords) in RULES {
        if keywords.iter().any(|keyword| claim_lower.contains(keyword)) {
            return domain.profile();
        }
    }

    Domain::General.profile()
}
