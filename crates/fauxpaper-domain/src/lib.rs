//! Fauxpaper Domain Layer
//!
//! This crate contains the data model for the parody-paper generation
//! pipeline. It defines the request and artifact value types, the
//! fingerprint/seed derivations, the topic vocabulary model, and the
//! trait interfaces behind which all external collaborators live.
//!
//! ## Key Concepts
//!
//! - **GenerationRequest**: A claim plus the small configuration that shapes
//!   the generated artifact
//! - **Fingerprint**: Deterministic short digest used by the external store
//!   as an idempotency key
//! - **TopicProfile**: Classification of a claim into a content domain with
//!   an associated vocabulary bank
//! - **GeneratedPaper**: The complete immutable artifact returned to the caller
//!
//! ## Architecture
//!
//! - Pure data and total functions only - no I/O, no randomness
//! - Infrastructure implementations (LLM access, stores, renderers) live in
//!   other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fingerprint;
pub mod paper;
pub mod request;
pub mod topic;
pub mod traits;

// Re-exports for convenience
pub use fingerprint::{claim_seed, normalize_claim, Fingerprint};
pub use paper::{ChartKind, ChartSpec, GeneratedPaper, LongFormSections, PaperId};
pub use request::{GenerationRequest, LengthTier, TemplateVariant, Tone, Voice};
pub use topic::{Domain, TopicProfile};
