//! Catalog overview for `--list`.

use std::fmt;

/// One catalog entry as listed.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ListingEntry {
    /// Story slug
    slug: String,
    /// Number of scene prompts
    prompts: usize,
    /// Whether the primary record already references an image
    has_images: bool,
}

impl ListingEntry {
    /// Entry for `slug`.
    pub fn new(slug: impl Into<String>, prompts: usize, has_images: bool) -> Self {
        Self {
            slug: slug.into(),
            prompts,
            has_images,
        }
    }
}

impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.has_images {
            "HAS IMAGES"
        } else {
            "needs images"
        };
        write!(f, "  {}: {} prompts ({})", self.slug, self.prompts, status)
    }
}

/// Every catalog entry plus the totals line.
///
/// # Examples
///
/// ```
/// use storybook_batch::{Listing, ListingEntry};
///
/// let listing = Listing::new(vec![ListingEntry::new("panchatantra-thirsty-crow", 6, false)], 0.03);
/// assert_eq!(
///     listing.to_string(),
///     "  panchatantra-thirsty-crow: 6 prompts (needs images)\n\nTotal: 1 stories, 6 images (~$0.18)\n",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Listing {
    /// Entries in slug order
    entries: Vec<ListingEntry>,
    /// Estimated cost of one image
    cost_per_image: f64,
}

impl Listing {
    /// Listing of `entries` priced at `cost_per_image`.
    pub fn new(entries: Vec<ListingEntry>, cost_per_image: f64) -> Self {
        Self {
            entries,
            cost_per_image,
        }
    }

    /// Scene count across all entries.
    pub fn total_images(&self) -> usize {
        self.entries.iter().map(|entry| entry.prompts).sum()
    }

    /// Estimated cost of generating every scene.
    pub fn estimated_cost(&self) -> f64 {
        self.total_images() as f64 * self.cost_per_image
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        writeln!(
            f,
            "\nTotal: {} stories, {} images (~${:.2})",
            self.entries.len(),
            self.total_images(),
            self.estimated_cost()
        )
    }
}
