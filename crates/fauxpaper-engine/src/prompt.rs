//! LLM prompt engineering for the title and abstract units
//!
//! Prompts embed voice and tone instructions plus the topic profile's
//! domain vocabulary so the richer tiers stay on-style. The template tier
//! never sees these.

use fauxpaper_domain::{TemplateVariant, Tone, TopicProfile, Voice};

const NAIJA_VOICE: &str = "NIGERIAN ENGLISH VOICE:
- Use Nigerian expressions like \"sha\", \"abi\", \"na so\", \"wahala\", \"gist\"
- Reference Nigerian contexts (Lagos traffic, NEPA/light, jollof rice debates, etc.)
- Use Nigerian academic humor (\"as per my last email\" becomes \"as per my last WhatsApp voice note\")
- Include relatable Nigerian scenarios in examples
- May reference fictional Nigerian institutions
- Casual but academic tone typical of Nigerian academia";

const GLOBAL_VOICE: &str = "INTERNATIONAL ACADEMIC VOICE:
- Use formal British/American academic English
- Reference global/Western contexts
- Maintain traditional academic formality
- Use standard academic phrases and conventions
- Reference fictional international institutions";

const DEADPAN_TONE: &str = "DEADPAN SERIOUS TONE:
- Write as if this is completely legitimate research
- NO jokes, NO winks to the audience
- Maintain absolute academic seriousness throughout
- Let the absurdity of the claim create the humor
- Use overly formal language for mundane observations
- Cite fictional studies with complete seriousness
- The humor comes from treating nonsense as serious science";

const COMEDIC_TONE: &str = "COMEDIC/WITTY TONE:
- Include subtle academic humor and wit
- Use dry observations and ironic commentary
- Self-aware about the absurdity of the research
- Include clever wordplay related to the topic
- Break the fourth wall slightly (\"as the researchers definitely didn't make up\")
- Use humorous asides in parentheses
- Make fun of academic conventions while using them";

fn voice_block(voice: Voice) -> &'static str {
    match voice {
        Voice::Naija => NAIJA_VOICE,
        Voice::Global => GLOBAL_VOICE,
    }
}

fn tone_block(tone: Tone) -> &'static str {
    match tone {
        Tone::Deadpan => DEADPAN_TONE,
        Tone::Comedic => COMEDIC_TONE,
    }
}

fn join_some(items: &[&str], take: usize) -> String {
    items
        .iter()
        .take(take)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the title prompt for the LLM tiers
pub fn title_prompt(claim: &str, template: TemplateVariant, voice: Voice, tone: Tone) -> String {
    let voice_hint = match voice {
        Voice::Naija => "Can include subtle Nigerian cultural references or wordplay if relevant",
        Voice::Global => "Use standard international academic title conventions",
    };
    let tone_hint = match tone {
        Tone::Deadpan => "Make it sound completely serious and legitimate",
        Tone::Comedic => "Can include subtle wit or clever wordplay",
    };

    format!(
        "Generate a creative, academic-sounding research paper title for this ridiculous claim: \"{claim}\"

STYLE:
- {voice_hint}
- {tone_hint}

REQUIREMENTS:
- Sound like a real {template} article title
- Include a colon with a subtitle if appropriate
- Use % symbol instead of \"percent\"
- Examples of good parody titles:
  - \"Correlation Without Causation: A Meta-Analysis of Things That Sound Related\"
  - \"The Placebo Effect of Confidence: Why Saying Things Loudly Makes Them True\"
  - \"Spoons and Society: Cutlery as a Predictor of Socioeconomic Status\"

Generate ONLY the title, nothing else. No quotes around it.",
        claim = claim,
        voice_hint = voice_hint,
        tone_hint = tone_hint,
        template = template.as_str(),
    )
}

/// Build the abstract prompt for the LLM tiers
pub fn abstract_prompt(claim: &str, voice: Voice, tone: Tone, profile: &TopicProfile) -> String {
    format!(
        "Generate a parody academic abstract for this ridiculous claim: \"{claim}\"

{voice_block}

{tone_block}

DOMAIN: {domain}
Include domain-specific elements:
- Jargon: {jargon}
- Formulas/notation: {formulas}
- Units: {units}
- Methods: {methods}

REQUIREMENTS:
- 150-200 words
- Include fake sample size (N=500-5000)
- Include percentage results using % symbol (45-85%)
- Include fake p-value (p < 0.001-0.04)
- Include at least ONE relevant formula or technical notation from the domain
- Reference \"simulated\" or \"fictional\" methodology
- End with disclaimer that this is fictional/parody
- Do NOT use real institution names or real people

Generate ONLY the abstract text, nothing else.",
        claim = claim,
        voice_block = voice_block(voice),
        tone_block = tone_block(tone),
        domain = profile.domain.as_str().to_uppercase(),
        jargon = join_some(profile.jargon, 3),
        formulas = join_some(profile.formulas, 2),
        units = join_some(profile.units, 2),
        methods = join_some(profile.methods, 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxpaper_domain::Domain;

    #[test]
    fn test_title_prompt_carries_claim_and_template() {
        let prompt = title_prompt(
            "rice makes you smarter",
            TemplateVariant::Conference,
            Voice::Global,
            Tone::Deadpan,
        );
        assert!(prompt.contains("rice makes you smarter"));
        assert!(prompt.contains("conference article title"));
        assert!(prompt.contains("completely serious"));
    }

    #[test]
    fn test_abstract_prompt_embeds_domain_vocabulary() {
        let profile = Domain::Nutrition.profile();
        let prompt = abstract_prompt("rice is life", Voice::Naija, Tone::Comedic, &profile);

        assert!(prompt.contains("DOMAIN: NUTRITION"));
        assert!(prompt.contains("caloric intake"));
        assert!(prompt.contains("NIGERIAN ENGLISH VOICE"));
        assert!(prompt.contains("COMEDIC/WITTY TONE"));
    }

    #[test]
    fn test_prompts_differ_by_unit() {
        let profile = Domain::General.profile();
        let title = title_prompt("x", TemplateVariant::Journal, Voice::Global, Tone::Deadpan);
        let abs = abstract_prompt("x", Voice::Global, Tone::Deadpan, &profile);
        assert_ne!(title, abs);
    }
}
