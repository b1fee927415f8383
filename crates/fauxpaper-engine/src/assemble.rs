//! Template assembler - the deterministic terminal generation tier
//!
//! Produces all structural content (authors, affiliations, title, abstract,
//! long-form sections, limitations, references) from the phrase banks and
//! the request-scoped generator. Voice and tone each select independently
//! from their own small banks.
//!
//! The numeric ranges drawn here are exact contracts: sample size 500-5000,
//! percentages 45-85 (secondary 30-60), confidence deltas 3-8, p-values in
//! (0.001, 0.04) at 3 decimals, effect sizes 0.3-0.8 at 2 decimals. They
//! keep lock-seed output bit-for-bit stable.

use crate::banks;
use crate::rng::PaperRng;
use crate::text::{normalize_percent, strip_trailing_punct};
use fauxpaper_domain::{TemplateVariant, Tone, Voice};

/// Abstract tail sentence for the template tier
const ABSTRACT_TAIL: &str = "This study is entirely fictional and should not be cited in any \
serious academic work. All data presented is simulated for parody purposes only.";

/// Assembles every templated part of a paper for one request
pub struct TemplateAssembler {
    voice: Voice,
    tone: Tone,
    template: TemplateVariant,
}

impl TemplateAssembler {
    /// Create an assembler for a request's voice/tone/template selection
    pub fn new(voice: Voice, tone: Tone, template: TemplateVariant) -> Self {
        Self {
            voice,
            tone,
            template,
        }
    }

    /// Generate `count` fictional author names, "Surname, F. M." form
    ///
    /// Surnames are drawn without replacement from the voice pool, falling
    /// back to the full pool once exhausted.
    pub fn authors(&self, rng: &mut PaperRng, count: usize) -> Vec<String> {
        let surname_pool = banks::surnames(self.voice);
        let first_pool = banks::first_names(self.voice);

        let mut used: Vec<&str> = Vec::new();
        let mut authors = Vec::with_capacity(count);

        for _ in 0..count {
            let available: Vec<&'static str> = surname_pool
                .iter()
                .copied()
                .filter(|s| !used.contains(s))
                .collect();
            let surname = if available.is_empty() {
                *rng.pick(surname_pool)
            } else {
                *rng.pick(&available)
            };
            used.push(surname);

            let first = *rng.pick(first_pool);
            let middle = rng.upper_letter();
            authors.push(format!("{}, {}. {}.", surname, &first[..1], middle));
        }

        authors
    }

    /// Sample 2 distinct fictional institutions for the voice
    pub fn affiliations(&self, rng: &mut PaperRng) -> Vec<String> {
        rng.sample_distinct(banks::institutions(self.voice), 2)
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Template-tier title: variant prefix plus the cleaned claim
    pub fn title(&self, rng: &mut PaperRng, normalized_claim: &str) -> String {
        let prefix = *rng.pick(banks::title_prefixes(self.template));
        let clean = normalize_percent(strip_trailing_punct(normalized_claim.trim()));
        format!("{} {}", prefix, clean)
    }

    /// Template-tier abstract with fabricated statistics and disclaimer
    pub fn abstract_text(&self, rng: &mut PaperRng, normalized_claim: &str) -> String {
        let sample_size = rng.int(500..=5000);
        let percentage = rng.int(45..=85);
        let p_value = rng.rounded(0.001, 0.04, 3);
        let ci_low = percentage - rng.int(3..=8);
        let ci_high = percentage + rng.int(3..=8);

        let claim = normalize_percent(normalized_claim);

        let intro = match self.voice {
            Voice::Naija => {
                let options = [
                    format!(
                        "This study investigates the widely circulated claim that {}.",
                        claim
                    ),
                    format!(
                        "Following numerous reports from trusted sources (specifically, \
                         \"my brother told me\"), we examine whether {}.",
                        claim
                    ),
                    format!(
                        "In response to growing discourse on social media platforms, this \
                         research explores the assertion that {}.",
                        claim
                    ),
                ];
                rng.pick(&options).clone()
            }
            Voice::Global => {
                let options = [
                    format!("This research investigates the hypothesis that {}.", claim),
                    format!(
                        "Building upon anecdotal evidence from various sources, we examine \
                         the claim that {}.",
                        claim
                    ),
                    format!(
                        "The present study aims to empirically evaluate the proposition \
                         that {}.",
                        claim
                    ),
                ];
                rng.pick(&options).clone()
            }
        };

        let (method, result) = match self.tone {
            Tone::Deadpan => (
                format!(
                    "A simulated observational study was conducted with N={} fictional \
                     participants across multiple imaginary locations. Data were collected \
                     using entirely fabricated questionnaires and analyzed using non-existent \
                     statistical software.",
                    sample_size
                ),
                format!(
                    "Results indicate a {}% correlation with the stated hypothesis \
                     (95% CI: [{}%, {}%], p < {:.3}, simulated). Effect size was deemed \
                     \"definitely significant\" by our fictional standards.",
                    percentage, ci_low, ci_high, p_value
                ),
            ),
            Tone::Comedic => (
                format!(
                    "We surveyed {} entirely made-up participants who definitely exist and \
                     weren't just imagined for this paper. Our methodology was peer-reviewed \
                     by our imagination.",
                    sample_size
                ),
                format!(
                    "Amazingly, {}% of our fictional respondents agreed with the hypothesis \
                     (p < {:.3}, which we promise is real). The remaining {}% were clearly \
                     not paying attention.",
                    percentage,
                    p_value,
                    100 - percentage
                ),
            ),
        };

        format!("{} {} {} {}", intro, method, result, ABSTRACT_TAIL)
    }

    /// Introduction section (short/full tiers)
    pub fn introduction(&self, normalized_claim: &str) -> String {
        match self.tone {
            Tone::Deadpan => format!(
                "The phenomenon described as \"{claim}\" has garnered significant attention \
                 in recent discourse, particularly in informal settings where rigorous \
                 scientific methodology is often secondary to persuasive anecdote.\n\n\
                 Previous research in related areas has been notably absent, creating what we \
                 term a \"knowledge vacuum\" that this study aims to address through entirely \
                 fabricated means. The theoretical framework underlying this investigation \
                 draws from the established field of \"things people say at parties\" \
                 (Fictional et al., 2023).\n\n\
                 The present study contributes to the literature by providing the first \
                 completely made-up empirical evidence for this claim. Our research questions \
                 are as follows: (1) Is the claim true? (2) Can we make it look true with \
                 fake data? (3) Will anyone actually read past the abstract?",
                claim = normalized_claim
            ),
            Tone::Comedic => format!(
                "Let's be honest: someone at a party said \"{claim}\" and it sounded so \
                 confident that we decided to \"prove\" it with science.\n\n\
                 The academic literature on this topic is, unsurprisingly, non-existent. We \
                 looked. We really did. For about five minutes. This conspicuous absence of \
                 research clearly indicates either a massive oversight by the scientific \
                 community or, more likely, that nobody thought this needed formal study \
                 until now.\n\n\
                 This groundbreaking investigation seeks to answer the age-old questions: Is \
                 this claim true? More importantly, can we make a convincing-looking paper \
                 about it? Spoiler alert: the answer to both is \"kind of, but not really.\"",
                claim = normalized_claim
            ),
        }
    }

    /// Methods section with fabricated design parameters (short/full tiers)
    pub fn methods(&self, rng: &mut PaperRng) -> String {
        let sample_size = rng.int(500..=5000);
        let locations = rng.int(3..=12);
        let duration = *rng.pick(banks::STUDY_DURATIONS);
        let certificate = rng.int(1000..=9999);

        let mut section = format!(
            "**Simulated Study Design**\n\n\
             This study employed a fictional mixed-methods approach combining imaginary \
             quantitative surveys with entirely made-up qualitative interviews.\n\n\
             **Participants**\n\
             A total of N={sample_size} fictional participants were recruited from \
             {locations} imaginary locations. Inclusion criteria included: being completely \
             made up, existing only in this paper, and having no verifiable identity \
             whatsoever.\n\n\
             **Data Collection**\n\
             Data were collected over {duration} using instruments that do not actually \
             exist. The primary measure was the Fictional Assessment Scale (FAS), which we \
             just invented for this study.\n\n\
             **Statistical Analysis**\n\
             All analyses were performed using StatsFaker Pro™ (Imaginary Software Inc., \
             2024). We employed regression analysis, ANOVA, and several other statistical \
             tests that sound impressive but were applied to completely fabricated data.\n\n\
             **Ethical Considerations**\n\
             This study received approval from the Fictional Ethics Board of Made-Up \
             Research (FEBMUR), Certificate No. FAKE-{certificate}. No real humans were \
             involved because no real research was conducted."
        );

        if self.template == TemplateVariant::Thesis {
            section.push_str(
                "\n\n**Note from the Faculty of Parody Studies**\n\
                 This methodology section is presented in standard academic format for \
                 satirical purposes. The Faculty of Parody Studies approves this fictional \
                 approach to non-research.",
            );
        }

        section
    }

    /// Results section with fabricated findings (short/full tiers)
    pub fn results(&self, rng: &mut PaperRng, normalized_claim: &str) -> String {
        let main_pct = rng.int(45..=85);
        let secondary_pct = rng.int(30..=60);
        let p_value = rng.rounded(0.001, 0.04, 3);
        let effect_size = rng.rounded(0.3, 0.8, 2);

        format!(
            "**Fabricated Findings**\n\n\
             The primary analysis revealed strong fictional support for the hypothesis that \
             {claim}. Specifically, {main_pct}% of our imaginary participants demonstrated \
             the predicted effect (p < {p_value:.3}, Cohen's d = {effect_size:.2}).\n\n\
             Secondary analyses, which we conducted after seeing the primary results, also \
             supported our predetermined conclusions. A total of {secondary_pct}% of \
             participants in the fictional control group showed no effect whatsoever, which \
             we interpret as further evidence for our hypothesis.\n\n\
             Subgroup analyses revealed that the effect was strongest among participants who \
             were most conveniently made up to support our claims. Demographic variations \
             were observed but will not be reported because we didn't actually collect \
             demographic data.\n\n\
             All results should be interpreted with the understanding that they are entirely \
             fictional and represent no actual empirical findings whatsoever.",
            claim = normalized_claim,
        )
    }

    /// Discussion section (short/full tiers)
    pub fn discussion(&self, normalized_claim: &str) -> String {
        format!(
            "The present study provides compelling fictional evidence that {claim}. These \
             fabricated findings have important imaginary implications for both theory and \
             practice.\n\n\
             Our results are consistent with previous work that doesn't exist, suggesting a \
             robust pattern of made-up evidence across multiple non-studies. The theoretical \
             contributions of this work include demonstrating that with sufficient \
             creativity, one can generate academic-looking content about virtually any \
             claim.\n\n\
             **Practical Implications**\n\
             If these findings were real (they are not), they would suggest that people \
             should probably reconsider their assumptions about this topic. However, since \
             everything here is fictional, the primary practical implication is \
             entertainment value.\n\n\
             **Strengths and Limitations**\n\
             The main strength of this study is its creative use of entirely fabricated data \
             to support a predetermined conclusion. The main limitation is that none of it \
             is real. Other limitations include: we made everything up, the sample doesn't \
             exist, and the statistical analyses were performed on imaginary numbers.\n\n\
             **Future Directions**\n\
             Future research should continue to not be done, as this topic requires no \
             actual investigation. Should anyone feel compelled to study this for real, they \
             should probably find a more productive use of their time.",
            claim = normalized_claim,
        )
    }

    /// Limitations block - produced for every length tier
    pub fn limitations(&self) -> String {
        let mut base = String::from(
            "**Study Limitations & Parody Disclaimer**\n\n\
             This study has several methodological limitations that warrant \
             acknowledgment:\n\n\
             1. **All data is fictional.** No actual research was conducted for this paper.\n\
             2. **Participants do not exist.** Every participant mentioned is entirely \
             imaginary.\n\
             3. **Statistical analyses are meaningless.** The numbers were generated to look \
             impressive, not to reflect reality.\n\
             4. **Conclusions are predetermined.** We decided what we wanted to \"find\" \
             before \"collecting\" data.\n\
             5. **This is parody.** This document is intended for entertainment purposes \
             only.\n\n\
             **DO NOT CITE THIS PAPER IN ANY SERIOUS ACADEMIC WORK.**\n\n\
             This research was generated by FAUXPAPER, a parody research paper generator. \
             All authors, affiliations, journals, and findings are completely fictional.",
        );

        if self.voice == Voice::Naija && self.tone == Tone::Comedic {
            base.push_str(
                "\n\nNa joke we dey joke, no go cite am for your thesis abeg. Your \
                 supervisor go find you.",
            );
        }

        if self.template == TemplateVariant::Thesis {
            base.push_str(
                "\n\n**Submitted to the Faculty of Parody Studies**\n\
                 This thesis was submitted in partial fulfillment of the requirements for \
                 the imaginary degree of Master of Made-Up Science (M.MUS) at the Fictional \
                 University. Academic formatting used for parody purposes only.",
            );
        }

        base
    }

    /// Generate `count` fabricated reference strings
    pub fn references(&self, rng: &mut PaperRng, count: usize) -> Vec<String> {
        let mut refs = Vec::with_capacity(count);

        for _ in 0..count {
            let author_count = rng.int(1..=3) as usize;
            let authors = self.authors(rng, author_count);
            let year = rng.int(2019..=2024);
            let journal = *rng.pick(banks::JOURNALS);
            let volume = rng.int(1..=50);
            let issue = rng.int(1..=4);
            let pages_start = rng.int(1..=100);
            let pages_end = pages_start + rng.int(10..=30);
            let title = *rng.pick(banks::REFERENCE_TITLES);

            refs.push(format!(
                "{} ({}). \"{}\" [FICTIONAL]. {}, {}({}), {}-{}.",
                authors.join("; "),
                year,
                title,
                journal,
                volume,
                issue,
                pages_start,
                pages_end,
            ));
        }

        refs
    }
}
