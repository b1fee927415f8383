//! Fauxpaper Generation Engine
//!
//! The deterministic content-generation pipeline: a short user claim plus a
//! small configuration becomes a complete fabricated research paper
//! artifact (title, authors, abstract, optional long-form sections,
//! limitations, references, chart specifications).
//!
//! # Architecture
//!
//! - [`rng`]: request-scoped randomness controller (deterministic or
//!   entropy-seeded, never process-global)
//! - [`classify`]: rule-based claim → domain profile mapping
//! - [`chain`]: tiered fallback for richer LLM text with a guaranteed
//!   template terminal tier
//! - [`assemble`]: phrase-bank templating for all structural content
//! - [`charts`]: declarative chart spec construction
//! - [`generator`]: the single `generate(request) -> GeneratedPaper`
//!   pipeline tying it together
//!
//! Fingerprinting lives in `fauxpaper-domain`; the engine only computes
//! content, and the external store owns deduplication.
//!
//! # Examples
//!
//! ```
//! use fauxpaper_engine::PaperGenerator;
//! use fauxpaper_domain::GenerationRequest;
//!
//! let mut request = GenerationRequest::new("50 percent of people believe this");
//! request.lock_seed = true;
//!
//! let paper = PaperGenerator::new().generate(&request);
//! assert!(paper.title.contains("50%"));
//! ```

#![warn(clippy::all)]

pub mod assemble;
pub mod banks;
pub mod chain;
pub mod charts;
pub mod classify;
pub mod generator;
pub mod prompt;
pub mod rng;
pub mod text;

// Re-exports for convenience
pub use chain::{GenerationTier, StrategyChain};
pub use generator::PaperGenerator;
pub use rng::PaperRng;
