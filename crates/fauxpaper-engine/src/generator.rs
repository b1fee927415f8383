//! Top-level paper generation pipeline
//!
//! `generate` is a synchronous, stateless computation: it constructs a
//! request-scoped generator, classifies the claim, resolves title and
//! abstract through the strategy chain (or the template tier directly for
//! abstract-length papers), assembles the remaining content and the chart
//! specs, and returns one immutable artifact. It never returns a partial
//! or error result; the worst case silently substitutes templated text for
//! richer LLM output.

use crate::assemble::TemplateAssembler;
use crate::chain::{GenerationTier, StrategyChain};
use crate::charts::build_charts;
use crate::classify::classify;
use crate::prompt::{abstract_prompt, title_prompt};
use crate::rng::PaperRng;
use crate::text::{ensure_disclaimer, normalize_percent};
use fauxpaper_domain::{GeneratedPaper, GenerationRequest, LongFormSections, PaperId};

/// Sampling parameters for the title unit
const TITLE_PARAMS: (u32, f32) = (100, 0.9);

/// Sampling parameters for the abstract unit
const ABSTRACT_PARAMS: (u32, f32) = (500, 0.85);

/// The deterministic content-generation pipeline
///
/// # Examples
///
/// ```
/// use fauxpaper_engine::PaperGenerator;
/// use fauxpaper_domain::GenerationRequest;
///
/// let mut request = GenerationRequest::new("eating rice every day makes you smarter");
/// request.lock_seed = true;
///
/// let paper = PaperGenerator::new().generate(&request);
/// assert!(paper.abstract_text.to_lowercase().contains("fictional"));
/// ```
#[derive(Debug, Default)]
pub struct PaperGenerator;

impl PaperGenerator {
    /// Create a generator
    pub fn new() -> Self {
        Self
    }

    /// Generate a complete paper for a pre-validated request
    pub fn generate(&self, request: &GenerationRequest) -> GeneratedPaper {
        let normalized = fauxpaper_domain::normalize_claim(&request.claim);
        let mut rng = PaperRng::for_request(&normalized, request.lock_seed);

        let id = PaperId::from_suffix(&rng.id_suffix(5));
        let profile = classify(&normalized);
        let assembler = TemplateAssembler::new(request.voice, request.tone, request.template);

        tracing::info!(
            paper_id = %id,
            domain = profile.domain.as_str(),
            length = request.length.as_str(),
            lock_seed = request.lock_seed,
            "Generating paper"
        );

        // Title - the chain applies only to short/full papers
        let title = if request.length.has_sections() {
            let chain = StrategyChain::for_credential(
                request.credential.as_deref(),
                TITLE_PARAMS.0,
                TITLE_PARAMS.1,
            );
            let prompt = title_prompt(&normalized, request.template, request.voice, request.tone);
            let (text, tier) = chain.resolve(&prompt, || assembler.title(&mut rng, &normalized));
            log_tier("title", tier);
            text.trim_matches(['"', '\'']).to_string()
        } else {
            assembler.title(&mut rng, &normalized)
        };
        let title = normalize_percent(&title);

        let authors = assembler.authors(&mut rng, 3);
        let affiliations = assembler.affiliations(&mut rng);

        // Abstract - same tier rules as the title
        let abstract_text = if request.length.has_sections() {
            let chain = StrategyChain::for_credential(
                request.credential.as_deref(),
                ABSTRACT_PARAMS.0,
                ABSTRACT_PARAMS.1,
            );
            let prompt = abstract_prompt(&normalized, request.voice, request.tone, &profile);
            let (text, tier) =
                chain.resolve(&prompt, || assembler.abstract_text(&mut rng, &normalized));
            log_tier("abstract", tier);
            text
        } else {
            assembler.abstract_text(&mut rng, &normalized)
        };
        let abstract_text = ensure_disclaimer(normalize_percent(&abstract_text));

        let limitations = assembler.limitations();
        let references = assembler.references(&mut rng, request.length.reference_count());
        let charts = build_charts(&mut rng, &profile, request.chart_count);

        let sections = request.length.has_sections().then(|| LongFormSections {
            introduction: assembler.introduction(&normalized),
            methods: assembler.methods(&mut rng),
            results: assembler.results(&mut rng, &normalized),
            discussion: assembler.discussion(&normalized),
        });

        tracing::info!(paper_id = %id, "Paper generated");

        GeneratedPaper {
            id,
            title,
            authors,
            affiliations,
            abstract_text,
            sections,
            limitations,
            references,
            charts,
        }
    }
}

fn log_tier(unit: &str, tier: GenerationTier) {
    tracing::debug!(unit, tier = tier.as_str(), "Text unit resolved");
}
