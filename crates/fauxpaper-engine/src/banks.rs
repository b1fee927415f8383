//! Phrase banks for the template tier
//!
//! Fixed pools the assembler samples from. Voice picks a name/institution
//! pool, template variant picks a title prefix list; tone selection happens
//! in the assembler itself. Banks grow linearly with voices plus tones,
//! never as a cross-product.

use fauxpaper_domain::{TemplateVariant, Voice};

pub const INSTITUTIONS_NAIJA: &[&str] = &[
    "University of Unverified Studies, Lagos",
    "Institute for Dubious Research, Abuja",
    "College of Questionable Sciences, Port Harcourt",
    "Academy of Anecdotal Evidence, Ibadan",
    "School of Confident Misunderstandings, Kano",
    "Department of Bro Science, Fictional State University",
    "Center for Hearsay Studies, Enugu",
    "Faculty of Trust Me Research, Benin City",
    "National Institute of Made-Up Statistics, Calabar",
    "Federal University of Unsourced Claims, Kaduna",
];

pub const INSTITUTIONS_GLOBAL: &[&str] = &[
    "University of Unverified Studies, Stockholm",
    "Institute for Dubious Research, Geneva",
    "College of Questionable Sciences, Vienna",
    "Academy of Anecdotal Evidence, Toronto",
    "School of Confident Misunderstandings, Melbourne",
    "Department of Bro Science, Fictional State University",
    "Center for Hearsay Studies, Edinburgh",
    "Faculty of Trust Me Research, Copenhagen",
    "International Institute of Made-Up Data, Zurich",
    "Global Center for Unsourced Research, Amsterdam",
];

pub const FIRST_NAMES_NAIJA: &[&str] = &[
    "Chukwuemeka", "Oluwaseun", "Adebayo", "Ngozi", "Chidinma", "Emeka", "Folake", "Tunde",
    "Amaka", "Obiora", "Yetunde", "Ikechukwu", "Funke", "Babatunde", "Chinwe",
];

pub const FIRST_NAMES_GLOBAL: &[&str] = &[
    "Alexander", "Victoria", "Sebastian", "Eleanor", "Theodore", "Penelope", "Harrison",
    "Cordelia", "Benjamin", "Margaret", "Nathaniel", "Catherine", "Frederick", "Elizabeth",
    "William",
];

pub const SURNAMES_NAIJA: &[&str] = &[
    "Okonkwo", "Adeyemi", "Nwachukwu", "Ibrahim", "Okafor", "Balogun", "Eze", "Abubakar",
    "Okoro", "Adeleke", "Obi", "Mohammed", "Chukwu", "Afolabi", "Nnamdi",
];

pub const SURNAMES_GLOBAL: &[&str] = &[
    "Worthington", "Pemberton", "Ashford", "Blackwood", "Sterling", "Whitmore", "Harrington",
    "Caldwell", "Montgomery", "Fitzgerald", "Chamberlain", "Wellington", "Kensington",
    "Thornbury", "Fairfax",
];

pub const JOURNALS: &[&str] = &[
    "Journal of Improbable Findings",
    "Quarterly Review of Unsubstantiated Claims",
    "International Journal of Anecdotal Science",
    "Proceedings of the Fictional Research Society",
    "Archives of Dubious Studies",
    "Bulletin of Made-Up Statistics",
    "Annals of Unverified Research",
    "Journal of Confident Assertions",
];

pub const REFERENCE_TITLES: &[&str] = &[
    "On the Nature of Unverified Claims",
    "A Framework for Dubious Research Methodology",
    "The Role of 'Trust Me, Bro' in Modern Discourse",
    "Statistical Methods for Imaginary Data",
    "Fabricating Evidence: A Practical Guide",
    "Why Nobody Reads Past the Abstract",
    "Confirmation Bias: A How-To Manual",
    "P-Hacking for Beginners",
];

pub const TITLE_PREFIXES_JOURNAL: &[&str] = &[
    "A Rigorous Investigation into",
    "Empirical Evidence Supporting",
    "A Meta-Analysis of",
    "Correlational Study of",
    "Cross-Sectional Analysis of",
    "The Definitive Study on",
    "Quantitative Assessment of",
];

pub const TITLE_PREFIXES_CONFERENCE: &[&str] = &[
    "Towards Understanding",
    "Novel Insights into",
    "Preliminary Findings on",
    "An Exploratory Study of",
    "Investigating the Relationship Between",
    "New Evidence for",
];

pub const TITLE_PREFIXES_THESIS: &[&str] = &[
    "An Investigation into",
    "A Comprehensive Study of",
    "Exploring the Phenomenon of",
    "Understanding the Dynamics of",
    "A Critical Analysis of",
];

pub const STUDY_DURATIONS: &[&str] = &["6 months", "1 year", "2 years", "an undisclosed period"];

/// Institution pool for a voice
pub fn institutions(voice: Voice) -> &'static [&'static str] {
    match voice {
        Voice::Naija => INSTITUTIONS_NAIJA,
        Voice::Global => INSTITUTIONS_GLOBAL,
    }
}

/// First-name pool for a voice
pub fn first_names(voice: Voice) -> &'static [&'static str] {
    match voice {
        Voice::Naija => FIRST_NAMES_NAIJA,
        Voice::Global => FIRST_NAMES_GLOBAL,
    }
}

/// Surname pool for a voice
pub fn surnames(voice: Voice) -> &'static [&'static str] {
    match voice {
        Voice::Naija => SURNAMES_NAIJA,
        Voice::Global => SURNAMES_GLOBAL,
    }
}

/// Title prefix pool for a template variant
pub fn title_prefixes(template: TemplateVariant) -> &'static [&'static str] {
    match template {
        TemplateVariant::Journal => TITLE_PREFIXES_JOURNAL,
        TemplateVariant::Conference => TITLE_PREFIXES_CONFERENCE,
        TemplateVariant::Thesis => TITLE_PREFIXES_THESIS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_nonempty_and_distinct_entries() {
        for pool in [
            INSTITUTIONS_NAIJA,
            INSTITUTIONS_GLOBAL,
            FIRST_NAMES_NAIJA,
            FIRST_NAMES_GLOBAL,
            SURNAMES_NAIJA,
            SURNAMES_GLOBAL,
            JOURNALS,
            REFERENCE_TITLES,
            TITLE_PREFIXES_JOURNAL,
            TITLE_PREFIXES_CONFERENCE,
            TITLE_PREFIXES_THESIS,
            STUDY_DURATIONS,
        ] {
            assert!(!pool.is_empty());
            let mut unique: Vec<_> = pool.to_vec();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), pool.len(), "duplicate entry in bank");
        }
    }

    #[test]
    fn test_voice_pools_resolve() {
        assert_eq!(institutions(Voice::Naija), INSTITUTIONS_NAIJA);
        assert_eq!(surnames(Voice::Global), SURNAMES_GLOBAL);
        assert_eq!(first_names(Voice::Naija), FIRST_NAMES_NAIJA);
    }

    #[test]
    fn test_template_prefixes_resolve() {
        assert_eq!(
            title_prefixes(TemplateVariant::Journal),
            TITLE_PREFIXES_JOURNAL
        );
        assert_eq!(
            title_prefixes(TemplateVariant::Thesis),
            TITLE_PREFIXES_THESIS
        );
    }
}
