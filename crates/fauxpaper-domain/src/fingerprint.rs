//! Fingerprint module - idempotency key and seed derivation
//!
//! The fingerprint identifies a (normalized claim, configuration) pair for
//! deduplication by the external store. The core only computes the key; the
//! store owns the at-most-one-paper-per-fingerprint contract. Collisions
//! across semantically different claims are an accepted limitation of a
//! content-derived 64-bit key.

use crate::request::GenerationRequest;
use sha2::{Digest, Sha256};
use std::fmt;

/// Normalize claim text for fingerprinting and seed derivation
///
/// Lower-cases and collapses all interior whitespace to single spaces
/// (leading/trailing whitespace removed). Claim variants that normalize
/// identically fingerprint identically.
///
/// # Examples
///
/// ```
/// use fauxpaper_domain::normalize_claim;
///
/// assert_eq!(normalize_claim("  Rice  IS\tNice "), "rice is nice");
/// ```
pub fn normalize_claim(claim: &str) -> String {
    claim
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the lock-seed value from the normalized claim alone
///
/// Independent of template/length/voice/tone/chart_count/lock_seed so that
/// the same claim always reproduces the same generator stream. Takes the
/// leading 8 bytes of the SHA-256 digest as a big-endian u64.
pub fn claim_seed(normalized_claim: &str) -> u64 {
    let digest = Sha256::digest(normalized_claim.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Deterministic 16-hex-character dedup key for a generation request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint for a request
    ///
    /// Hashes `normalized_claim|template|length|voice|tone|chart_count|lock_seed`
    /// with SHA-256 and keeps the first 16 hex characters. The credential
    /// never participates.
    ///
    /// # Examples
    ///
    /// ```
    /// use fauxpaper_domain::{Fingerprint, GenerationRequest};
    ///
    /// let request = GenerationRequest::new("Garri Cures Mondays");
    /// let a = Fingerprint::of(&request);
    /// let b = Fingerprint::of(&GenerationRequest::new("garri   cures mondays"));
    /// assert_eq!(a, b);
    /// ```
    pub fn of(request: &GenerationRequest) -> Self {
        let material = format!(
            "{}|{}|{}|{}|{}|{}|{}",
            normalize_claim(&request.claim),
            request.template.as_str(),
            request.length.as_str(),
            request.voice.as_str(),
            request.tone.as_str(),
            request.chart_count,
            request.lock_seed,
        );

        let digest = Sha256::digest(material.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Fingerprint(format!("{:016x}", u64::from_be_bytes(bytes)))
    }

    /// Reconstruct a fingerprint from its stored hex form
    ///
    /// For storage-layer deserialization; no validation beyond length.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Fingerprint(hex.into())
    }

    /// Get the 16-character hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{LengthTier, TemplateVariant, Tone, Voice};

    fn base_request() -> GenerationRequest {
        GenerationRequest::new("eating rice every day makes you smarter")
    }

    #[test]
    fn test_normalize_collapses_case_and_whitespace() {
        assert_eq!(
            normalize_claim("Eating   Rice\nEvery Day"),
            "eating rice every day"
        );
        assert_eq!(normalize_claim(""), "");
    }

    #[test]
    fn test_fingerprint_is_16_hex_chars() {
        let fp = Fingerprint::of(&base_request());
        assert_eq!(fp.as_str().len(), 16);
        assert!(fp.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_invariant_under_claim_normalization() {
        let a = Fingerprint::of(&base_request());
        let mut noisy = base_request();
        noisy.claim = "  EATING rice\tevery   day makes you SMARTER ".to_string();
        assert_eq!(a, Fingerprint::of(&noisy));
    }

    #[test]
    fn test_fingerprint_changes_with_every_config_field() {
        let base = Fingerprint::of(&base_request());

        let mut r = base_request();
        r.template = TemplateVariant::Thesis;
        assert_ne!(base, Fingerprint::of(&r));

        let mut r = base_request();
        r.length = LengthTier::Full;
        assert_ne!(base, Fingerprint::of(&r));

        let mut r = base_request();
        r.voice = Voice::Naija;
        assert_ne!(base, Fingerprint::of(&r));

        let mut r = base_request();
        r.tone = Tone::Comedic;
        assert_ne!(base, Fingerprint::of(&r));

        let mut r = base_request();
        r.chart_count = 3;
        assert_ne!(base, Fingerprint::of(&r));

        let mut r = base_request();
        r.lock_seed = true;
        assert_ne!(base, Fingerprint::of(&r));
    }

    #[test]
    fn test_fingerprint_ignores_credential() {
        let base = Fingerprint::of(&base_request());
        let mut r = base_request();
        r.credential = Some("sk-anything".to_string());
        assert_eq!(base, Fingerprint::of(&r));
    }

    #[test]
    fn test_claim_seed_stable_and_claim_only() {
        let seed = claim_seed("eating rice every day makes you smarter");
        assert_eq!(
            seed,
            claim_seed("eating rice every day makes you smarter"),
            "Seed must be stable across calls"
        );
        assert_ne!(seed, claim_seed("eating beans every day makes you smarter"));
    }
}
