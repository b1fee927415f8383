//! Tiered text-generation strategy chain
//!
//! For each text unit (title, abstract) the chain tries an ordered list of
//! attempts sharing one capability signature, strictly in sequence, each at
//! most once: the typed SDK-style client, then the raw wire call, then the
//! template fallback. The template tier is total, so the chain always
//! terminates with a result and never surfaces an error to the caller.
//!
//! Tiers are fallbacks, not racers - a later tier runs only after the
//! previous one failed. Without a credential the chain holds no network
//! attempts at all and resolves straight to the template tier.

use fauxpaper_domain::traits::TextProvider;
use fauxpaper_llm::{ChatClient, WireClient};

/// Which tier produced a text unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationTier {
    /// Higher-level typed client succeeded
    Sdk,

    /// Raw wire call succeeded
    Http,

    /// Deterministic template fallback (always succeeds)
    Template,
}

impl GenerationTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationTier::Sdk => "sdk",
            GenerationTier::Http => "http",
            GenerationTier::Template => "template",
        }
    }
}

/// One fallible attempt in the chain
trait TextAttempt {
    fn tier(&self) -> GenerationTier;

    /// Try to produce the unit; `None` moves the chain to the next tier
    fn attempt(&self, prompt: &str) -> Option<String>;
}

struct SdkAttempt {
    client: ChatClient,
}

impl TextAttempt for SdkAttempt {
    fn tier(&self) -> GenerationTier {
        GenerationTier::Sdk
    }

    fn attempt(&self, prompt: &str) -> Option<String> {
        match self.client.generate(prompt) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("SDK tier failed: {}", e);
                None
            }
        }
    }
}

struct WireAttempt {
    client: WireClient,
}

impl TextAttempt for WireAttempt {
    fn tier(&self) -> GenerationTier {
        GenerationTier::Http
    }

    fn attempt(&self, prompt: &str) -> Option<String> {
        match self.client.generate(prompt) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Wire tier failed: {}", e);
                None
            }
        }
    }
}

/// Ordered fallback chain for one text unit
pub struct StrategyChain {
    attempts: Vec<Box<dyn TextAttempt>>,
}

impl StrategyChain {
    /// Build the chain for an optional credential and sampling parameters
    ///
    /// With a credential the chain holds the SDK attempt (when the client
    /// constructs) followed by the wire attempt. Without one the chain is
    /// empty and [`resolve`](Self::resolve) goes straight to the fallback.
    pub fn for_credential(
        credential: Option<&str>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        let mut attempts: Vec<Box<dyn TextAttempt>> = Vec::new();

        if let Some(key) = credential {
            match ChatClient::new(key) {
                Ok(client) => {
                    attempts.push(Box::new(SdkAttempt {
                        client: client.with_params(max_tokens, temperature),
                    }));
                }
                Err(e) => {
                    tracing::warn!("SDK client construction failed: {}", e);
                }
            }
            attempts.push(Box::new(WireAttempt {
                client: WireClient::new(key).with_params(max_tokens, temperature),
            }));
        } else {
            tracing::debug!("No credential - template tier only");
        }

        Self { attempts }
    }

    /// Run the chain, falling back to the guaranteed-total template closure
    ///
    /// Returns the produced text and the tier that produced it. The
    /// fallback is evaluated lazily so a successful network tier consumes
    /// no draws from the request generator.
    pub fn resolve(
        &self,
        prompt: &str,
        fallback: impl FnOnce() -> String,
    ) -> (String, GenerationTier) {
        for attempt in &self.attempts {
            if let Some(text) = attempt.attempt(prompt) {
                return (text, attempt.tier());
            }
        }

        (fallback(), GenerationTier::Template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedAttempt {
        tier: GenerationTier,
        response: Option<String>,
    }

    impl TextAttempt for FixedAttempt {
        fn tier(&self) -> GenerationTier {
            self.tier
        }

        fn attempt(&self, _prompt: &str) -> Option<String> {
            self.response.clone()
        }
    }

    fn chain_of(attempts: Vec<Box<dyn TextAttempt>>) -> StrategyChain {
        StrategyChain { attempts }
    }

    #[test]
    fn test_empty_chain_uses_fallback() {
        let chain = StrategyChain::for_credential(None, 100, 0.9);
        let (text, tier) = chain.resolve("prompt", || "templated".to_string());
        assert_eq!(text, "templated");
        assert_eq!(tier, GenerationTier::Template);
    }

    #[test]
    fn test_first_success_wins() {
        let chain = chain_of(vec![
            Box::new(FixedAttempt {
                tier: GenerationTier::Sdk,
                response: Some("from sdk".to_string()),
            }),
            Box::new(FixedAttempt {
                tier: GenerationTier::Http,
                response: Some("from wire".to_string()),
            }),
        ]);

        let (text, tier) = chain.resolve("prompt", || unreachable!());
        assert_eq!(text, "from sdk");
        assert_eq!(tier, GenerationTier::Sdk);
    }

    #[test]
    fn test_failure_falls_through_in_order() {
        let chain = chain_of(vec![
            Box::new(FixedAttempt {
                tier: GenerationTier::Sdk,
                response: None,
            }),
            Box::new(FixedAttempt {
                tier: GenerationTier::Http,
                response: Some("from wire".to_string()),
            }),
        ]);

        let (text, tier) = chain.resolve("prompt", || unreachable!());
        assert_eq!(text, "from wire");
        assert_eq!(tier, GenerationTier::Http);
    }

    #[test]
    fn test_all_failures_reach_template_tier() {
        let chain = chain_of(vec![
            Box::new(FixedAttempt {
                tier: GenerationTier::Sdk,
                response: None,
            }),
            Box::new(FixedAttempt {
                tier: GenerationTier::Http,
                response: None,
            }),
        ]);

        let (text, tier) = chain.resolve("prompt", || "last resort".to_string());
        assert_eq!(text, "last resort");
        assert_eq!(tier, GenerationTier::Template);
    }

    #[test]
    fn test_fallback_not_evaluated_on_success() {
        let evaluated = Cell::new(false);
        let chain = chain_of(vec![Box::new(FixedAttempt {
            tier: GenerationTier::Sdk,
            response: Some("hit".to_string()),
        })]);

        let (_, tier) = chain.resolve("prompt", || {
            evaluated.set(true);
            String::new()
        });
        assert_eq!(tier, GenerationTier::Sdk);
        assert!(!evaluated.get());
    }

    #[test]
    fn test_credential_chain_has_network_tiers() {
        // Construction succeeds offline; only the actual calls need a network
        let chain = StrategyChain::for_credential(Some("sk-test"), 100, 0.9);
        assert_eq!(chain.attempts.len(), 2);
        assert_eq!(chain.attempts[0].tier(), GenerationTier::Sdk);
        assert_eq!(chain.attempts[1].tier(), GenerationTier::Http);
    }
}
