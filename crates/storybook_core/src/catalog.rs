//! Read-only view over the authored prompt table.

use crate::STORY_PROMPTS;
use std::collections::BTreeMap;

/// Cost estimate per generated image, in USD.
pub const COST_PER_IMAGE_USD: f64 = 0.03;

/// Ordered mapping from story slug to its scene prompts.
///
/// Iteration is always in slug order. The catalog borrows `'static` literal
/// data and is never mutated after construction.
///
/// # Examples
///
/// ```
/// use storybook_core::PromptCatalog;
///
/// let catalog = PromptCatalog::builtin();
/// let prompts = catalog.get("panchatantra-thirsty-crow").unwrap();
/// assert_eq!(prompts.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCatalog {
    entries: BTreeMap<&'static str, &'static [&'static str]>,
}

impl PromptCatalog {
    /// The authored catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_entries(STORY_PROMPTS)
    }

    /// Build a catalog from literal `(slug, prompts)` pairs.
    pub fn from_entries(entries: &[(&'static str, &'static [&'static str])]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Scene prompts for a story, if the catalog defines it.
    pub fn get(&self, slug: &str) -> Option<&'static [&'static str]> {
        self.entries.get(slug).copied()
    }

    /// Whether the catalog defines prompts for `slug`.
    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Story slugs in sorted order.
    pub fn slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// `(slug, prompts)` pairs in slug order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.entries.iter().map(|(slug, prompts)| (*slug, *prompts))
    }

    /// Number of stories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of scene prompts across all stories.
    pub fn total_images(&self) -> usize {
        self.entries.values().map(|prompts| prompts.len()).sum()
    }

    /// Estimated cost of illustrating every scene at `cost_per_image` USD.
    pub fn estimated_cost(&self, cost_per_image: f64) -> f64 {
        self.total_images() as f64 * cost_per_image
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
