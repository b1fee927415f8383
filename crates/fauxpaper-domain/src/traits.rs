//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the generation core and
//! infrastructure. Implementations live in other crates (fauxpaper-llm,
//! fauxpaper-store) or outside this workspace entirely (rasterizer, PDF
//! renderer).

use crate::fingerprint::Fingerprint;
use crate::paper::{ChartSpec, GeneratedPaper, PaperId};
use crate::request::GenerationRequest;

/// Trait for text-generation service access
///
/// Implemented by the infrastructure layer (fauxpaper-llm). Both fallback
/// tiers of the strategy chain - the higher-level client and the raw wire
/// call - expose this same capability signature.
pub trait TextProvider {
    /// Error type for provider operations
    type Error;

    /// Generate a text completion for a prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for the dedup/persistence store
///
/// The store owns the at-most-one-paper-per-fingerprint contract; the
/// generation core only computes the key. On a hit the prior artifact is
/// returned unmodified - no regeneration, no re-rasterization.
pub trait PaperStore {
    /// Error type for store operations
    type Error;

    /// Look up a previously stored paper by its fingerprint
    fn get_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<GeneratedPaper>, Self::Error>;

    /// Store a paper under its fingerprint along with the request fields
    fn store(
        &mut self,
        paper_id: &PaperId,
        fingerprint: &Fingerprint,
        request: &GenerationRequest,
        paper: &GeneratedPaper,
    ) -> Result<(), Self::Error>;
}

/// Trait for turning a chart spec into an image artifact
///
/// Implemented outside this workspace; the core never touches pixels.
pub trait ChartRenderer {
    /// Error type for rendering operations
    type Error;

    /// Rasterize one chart specification
    fn render(&self, spec: &ChartSpec) -> Result<Vec<u8>, Self::Error>;
}

/// Trait for producing a downloadable document from a paper
///
/// Implemented outside this workspace (PDF layout is not the core's job).
pub trait DocumentRenderer {
    /// Error type for rendering operations
    type Error;

    /// Render the paper plus its rasterized chart artifacts
    fn render(&self, paper: &GeneratedPaper, charts: &[Vec<u8>]) -> Result<Vec<u8>, Self::Error>;
}
