//! Near-duplicate detection for product descriptions.
//!
//! Descriptions are compared as sets of lower-cased alphanumeric tokens
//! using the Jaccard index `|A ∩ B| / |A ∪ B|`.

use auction_config::RulesConfig;
use auction_core::{AuctionError, AuctionResult, ProductId};
use std::collections::HashSet;
use tracing::debug;

/// Default threshold at which two descriptions count as duplicates.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Splits text into its set of lower-cased alphanumeric tokens.
#[must_use]
pub fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Jaccard similarity of two texts in `[0, 1]`.
///
/// Two texts without any tokens are identical.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = tokenize(a);
    let b = tokenize(b);

    let union = a.union(&b).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = a.intersection(&b).count();

    intersection as f64 / union as f64
}

/// Rejects descriptions too close to an existing product's description.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionRule {
    threshold: f64,
}

impl DescriptionRule {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn from_config(rules: &RulesConfig) -> Self {
        Self::new(rules.description_similarity_threshold)
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Checks `description` of product `id` against every other product.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::BusinessRule`] naming the first product whose
    /// description reaches the threshold.
    pub fn check(
        &self,
        id: ProductId,
        description: &str,
        existing: &[(ProductId, String)],
    ) -> AuctionResult<()> {
        for (other_id, other) in existing.iter().filter(|(other_id, _)| *other_id != id) {
            let score = similarity(description, other);
            if score >= self.threshold {
                debug!(
                    "Description of {} matches {} with similarity {:.2}",
                    id, other_id, score
                );
                return Err(AuctionError::business_rule(format!(
                    "description is too similar to product {}",
                    other_id
                )));
            }
        }
        Ok(())
    }
}

impl Default for DescriptionRule {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}
