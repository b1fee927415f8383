//! Fauxpaper CLI - generate a parody research paper from a claim.

use anyhow::{bail, Result};
use clap::Parser;
use fauxpaper_domain::request::MAX_CLAIM_LEN;
use fauxpaper_domain::{
    Fingerprint, GeneratedPaper, GenerationRequest, LengthTier, TemplateVariant, Tone, Voice,
};
use fauxpaper_engine::PaperGenerator;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "fauxpaper", about = "Fabricate a parody research paper from a claim")]
struct Cli {
    /// The claim to "prove"
    claim: String,

    /// Document template: journal, conference or thesis
    #[arg(long, default_value = "journal", value_parser = parse_template)]
    template: TemplateVariant,

    /// Paper length: abstract, short or full
    #[arg(long, default_value = "abstract", value_parser = parse_length)]
    length: LengthTier,

    /// Prose voice: naija or global
    #[arg(long, default_value = "global", value_parser = parse_voice)]
    voice: Voice,

    /// Prose tone: deadpan or comedic
    #[arg(long, default_value = "deadpan", value_parser = parse_tone)]
    tone: Tone,

    /// Number of chart specifications
    #[arg(long = "charts", default_value_t = 1)]
    chart_count: u32,

    /// Seed generation from the claim for reproducible output
    #[arg(long)]
    lock_seed: bool,

    /// Credential for the external text-generation service
    #[arg(long, env = "FAUXPAPER_API_KEY", hide_env_values = true)]
    credential: Option<String>,
}

fn parse_template(s: &str) -> Result<TemplateVariant, String> {
    TemplateVariant::parse(s).ok_or_else(|| format!("unknown template '{}'", s))
}

fn parse_length(s: &str) -> Result<LengthTier, String> {
    LengthTier::parse(s).ok_or_else(|| format!("unknown length '{}'", s))
}

fn parse_voice(s: &str) -> Result<Voice, String> {
    Voice::parse(s).ok_or_else(|| format!("unknown voice '{}'", s))
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    Tone::parse(s).ok_or_else(|| format!("unknown tone '{}'", s))
}

#[derive(Serialize)]
struct Output {
    fingerprint: String,
    paper: GeneratedPaper,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Boundary validation; the engine assumes a valid claim
    let claim = cli.claim.trim();
    if claim.is_empty() {
        bail!("claim must not be empty");
    }
    if claim.chars().count() > MAX_CLAIM_LEN {
        bail!("claim is too long (maximum {} characters)", MAX_CLAIM_LEN);
    }
    if cli.chart_count == 0 {
        bail!("chart count must be positive");
    }

    let request = GenerationRequest {
        claim: claim.to_string(),
        template: cli.template,
        length: cli.length,
        voice: cli.voice,
        tone: cli.tone,
        chart_count: cli.chart_count,
        lock_seed: cli.lock_seed,
        credential: cli.credential,
    };

    let fingerprint = Fingerprint::of(&request);
    tracing::debug!(%fingerprint, "Request fingerprinted");

    let paper = PaperGenerator::new().generate(&request);

    let output = Output {
        fingerprint: fingerprint.to_string(),
        paper,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["fauxpaper", "rice is nice"]);
        assert_eq!(cli.claim, "rice is nice");
        assert_eq!(cli.template, TemplateVariant::Journal);
        assert_eq!(cli.length, LengthTier::Abstract);
        assert_eq!(cli.chart_count, 1);
        assert!(!cli.lock_seed);
    }

    #[test]
    fn test_cli_parses_full_flags() {
        let cli = Cli::parse_from([
            "fauxpaper",
            "rice is nice",
            "--template",
            "thesis",
            "--length",
            "full",
            "--voice",
            "naija",
            "--tone",
            "comedic",
            "--charts",
            "3",
            "--lock-seed",
        ]);
        assert_eq!(cli.template, TemplateVariant::Thesis);
        assert_eq!(cli.length, LengthTier::Full);
        assert_eq!(cli.voice, Voice::Naija);
        assert_eq!(cli.tone, Tone::Comedic);
        assert_eq!(cli.chart_count, 3);
        assert!(cli.lock_seed);
    }

    #[test]
    fn test_cli_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["fauxpaper", "x", "--template", "zine"]).is_err());
    }
}
