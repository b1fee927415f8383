//! Request module - the configuration that shapes a generated paper

use serde::{Deserialize, Serialize};

/// Maximum accepted claim length, enforced at the caller boundary
pub const MAX_CLAIM_LEN: usize = 500;

/// Document template the paper imitates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Peer-reviewed journal article
    Journal,

    /// Conference proceedings entry
    Conference,

    /// Graduate thesis chapter
    Thesis,
}

impl TemplateVariant {
    /// Get the variant name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateVariant::Journal => "journal",
            TemplateVariant::Conference => "conference",
            TemplateVariant::Thesis => "thesis",
        }
    }

    /// Parse a variant from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "journal" => Some(TemplateVariant::Journal),
            "conference" => Some(TemplateVariant::Conference),
            "thesis" => Some(TemplateVariant::Thesis),
            _ => None,
        }
    }
}

/// How much of the paper is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    /// Title, abstract, limitations and references only
    Abstract,

    /// Adds the four long-form sections
    Short,

    /// Long-form sections plus the larger reference list
    Full,
}

impl LengthTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthTier::Abstract => "abstract",
            LengthTier::Short => "short",
            LengthTier::Full => "full",
        }
    }

    /// Parse a tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "abstract" => Some(LengthTier::Abstract),
            "short" => Some(LengthTier::Short),
            "full" => Some(LengthTier::Full),
            _ => None,
        }
    }

    /// Whether the long-form sections (intro/methods/results/discussion)
    /// are produced for this tier
    pub fn has_sections(&self) -> bool {
        matches!(self, LengthTier::Short | LengthTier::Full)
    }

    /// Number of fabricated references for this tier
    pub fn reference_count(&self) -> usize {
        match self {
            LengthTier::Abstract => 4,
            LengthTier::Short => 6,
            LengthTier::Full => 8,
        }
    }
}

/// Regional voice of the generated prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    /// Nigerian English voice with local references
    Naija,

    /// International academic English
    Global,
}

impl Voice {
    /// Get the voice name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Naija => "naija",
            Voice::Global => "global",
        }
    }

    /// Parse a voice from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "naija" => Some(Voice::Naija),
            "global" => Some(Voice::Global),
            _ => None,
        }
    }
}

/// Comedic register of the generated prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Absurdity delivered with a straight face
    Deadpan,

    /// Self-aware jokes and asides
    Comedic,
}

impl Tone {
    /// Get the tone name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Deadpan => "deadpan",
            Tone::Comedic => "comedic",
        }
    }

    /// Parse a tone from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deadpan" => Some(Tone::Deadpan),
            "comedic" => Some(Tone::Comedic),
            _ => None,
        }
    }
}

/// A complete generation request
///
/// The claim is assumed to be pre-validated by the caller (non-empty,
/// at most [`MAX_CLAIM_LEN`] characters, moderation already applied).
/// The credential is an opaque pass-through for the external text service;
/// it never participates in fingerprinting or seeding and is skipped
/// during serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The user-supplied claim text
    pub claim: String,

    /// Document template the paper imitates
    pub template: TemplateVariant,

    /// How much of the paper to generate
    pub length: LengthTier,

    /// Regional voice for the prose
    pub voice: Voice,

    /// Comedic register for the prose
    pub tone: Tone,

    /// Number of chart specifications to produce (positive)
    pub chart_count: u32,

    /// Request reproducible, claim-seeded generation
    pub lock_seed: bool,

    /// Opaque credential for the external text service
    #[serde(skip)]
    pub credential: Option<String>,
}

impl GenerationRequest {
    /// Create a request with the default configuration for a claim
    ///
    /// Defaults: journal template, abstract length, global voice, deadpan
    /// tone, one chart, entropy seeding, no credential.
    pub fn new(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            template: TemplateVariant::Journal,
            length: LengthTier::Abstract,
            voice: Voice::Global,
            tone: Tone::Deadpan,
            chart_count: 1,
            lock_seed: false,
            credential: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_round_trips() {
        for v in ["journal", "conference", "thesis"] {
            assert_eq!(TemplateVariant::parse(v).unwrap().as_str(), v);
        }
        for v in ["abstract", "short", "full"] {
            assert_eq!(LengthTier::parse(v).unwrap().as_str(), v);
        }
        for v in ["naija", "global"] {
            assert_eq!(Voice::parse(v).unwrap().as_str(), v);
        }
        for v in ["deadpan", "comedic"] {
            assert_eq!(Tone::parse(v).unwrap().as_str(), v);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(TemplateVariant::parse("preprint").is_none());
        assert!(LengthTier::parse("").is_none());
        assert!(Voice::parse("pidgin").is_none());
        assert!(Tone::parse("dry").is_none());
    }

    #[test]
    fn test_reference_counts_by_tier() {
        assert_eq!(LengthTier::Abstract.reference_count(), 4);
        assert_eq!(LengthTier::Short.reference_count(), 6);
        assert_eq!(LengthTier::Full.reference_count(), 8);
    }

    #[test]
    fn test_sections_only_for_short_and_full() {
        assert!(!LengthTier::Abstract.has_sections());
        assert!(LengthTier::Short.has_sections());
        assert!(LengthTier::Full.has_sections());
    }

    #[test]
    fn test_credential_never_serialized() {
        let mut request = GenerationRequest::new("water is wet");
        request.credential = Some("sk-secret".to_string());

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(!json.contains("credential"));
    }

    #[test]
    fn test_enum_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TemplateVariant::Conference).unwrap(),
            "\"conference\""
        );
        assert_eq!(serde_json::to_string(&Voice::Naija).unwrap(), "\"naija\"");
    }
}
