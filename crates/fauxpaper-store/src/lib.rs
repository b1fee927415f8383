//! Fauxpaper Storage Layer
//!
//! In-memory implementation of the `PaperStore` trait from
//! `fauxpaper-domain`. The store owns the dedup contract: at most one
//! paper per fingerprint, and a hit returns the prior artifact unmodified
//! so the caller skips regeneration and re-rasterization entirely.
//!
//! # Examples
//!
//! ```
//! use fauxpaper_store::MemoryStore;
//! use fauxpaper_domain::traits::PaperStore;
//! use fauxpaper_domain::{Fingerprint, GenerationRequest};
//!
//! let store = MemoryStore::new();
//! let request = GenerationRequest::new("rice is nice");
//! assert!(store.get_by_fingerprint(&Fingerprint::of(&request)).unwrap().is_none());
//! ```

#![warn(missing_docs)]

use fauxpaper_domain::traits::PaperStore;
use fauxpaper_domain::{Fingerprint, GeneratedPaper, GenerationRequest, PaperId};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A paper already exists under this fingerprint
    #[error("Duplicate fingerprint: {0}")]
    Duplicate(String),
}

/// One stored paper with the request fields that produced it
#[derive(Debug, Clone)]
pub struct StoredRecord {
    /// The paper's short code
    pub paper_id: PaperId,

    /// The originating request (credential stripped)
    pub request: GenerationRequest,

    /// The stored artifact
    pub paper: GeneratedPaper,
}

/// In-memory fingerprint-keyed paper store
///
/// Reference implementation of the external persistence collaborator. Not
/// synchronized; callers needing shared access wrap it in their own lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    papers: HashMap<String, StoredRecord>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored papers
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the store holds no papers
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

impl PaperStore for MemoryStore {
    type Error = StoreError;

    fn get_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<GeneratedPaper>, Self::Error> {
        Ok(self
            .papers
            .get(fingerprint.as_str())
            .map(|record| record.paper.clone()))
    }

    fn store(
        &mut self,
        paper_id: &PaperId,
        fingerprint: &Fingerprint,
        request: &GenerationRequest,
        paper: &GeneratedPaper,
    ) -> Result<(), Self::Error> {
        if self.papers.contains_key(fingerprint.as_str()) {
            return Err(StoreError::Duplicate(fingerprint.to_string()));
        }

        let mut request = request.clone();
        request.credential = None;

        self.papers.insert(
            fingerprint.as_str().to_string(),
            StoredRecord {
                paper_id: paper_id.clone(),
                request,
                paper: paper.clone(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_paper() -> GeneratedPaper {
        GeneratedPaper {
            id: PaperId::from_suffix("TEST1"),
            title: "A Meta-Analysis of rice".to_string(),
            authors: vec!["Okafor, C. Q.".to_string()],
            affiliations: vec!["Institute for Dubious Research, Abuja".to_string()],
            abstract_text: "Entirely fictional.".to_string(),
            sections: None,
            limitations: "Parody only.".to_string(),
            references: vec![],
            charts: vec![],
        }
    }

    #[test]
    fn test_miss_returns_none() {
        let store = MemoryStore::new();
        let fp = Fingerprint::of(&GenerationRequest::new("nothing here"));
        assert!(store.get_by_fingerprint(&fp).unwrap().is_none());
    }

    #[test]
    fn test_store_then_hit_returns_identical_artifact() {
        let mut store = MemoryStore::new();
        let request = GenerationRequest::new("rice is nice");
        let fp = Fingerprint::of(&request);
        let paper = sample_paper();

        store.store(&paper.id, &fp, &request, &paper).unwrap();

        let hit = store.get_by_fingerprint(&fp).unwrap().unwrap();
        assert_eq!(hit, paper, "hit must return the artifact unmodified");
    }

    #[test]
    fn test_second_store_under_same_fingerprint_is_rejected() {
        let mut store = MemoryStore::new();
        let request = GenerationRequest::new("rice is nice");
        let fp = Fingerprint::of(&request);
        let paper = sample_paper();

        store.store(&paper.id, &fp, &request, &paper).unwrap();
        let second = store.store(&paper.id, &fp, &request, &paper);
        assert!(matches!(second, Err(StoreError::Duplicate(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_stored_request_drops_credential() {
        let mut store = MemoryStore::new();
        let mut request = GenerationRequest::new("rice is nice");
        request.credential = Some("sk-secret".to_string());
        let fp = Fingerprint::of(&request);
        let paper = sample_paper();

        store.store(&paper.id, &fp, &request, &paper).unwrap();
        let record = store.papers.get(fp.as_str()).unwrap();
        assert!(record.request.credential.is_none());
    }
}
