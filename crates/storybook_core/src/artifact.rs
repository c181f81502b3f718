//! Deterministic artifact naming.
//!
//! An artifact is named `<shortname>-<NN>.png` where `NN` is the 1-based,
//! zero-padded section index. The file's existence is the only record that a
//! scene has been illustrated.

/// Category prefixes stripped from a slug to form its short name, in the
/// order they are removed.
pub const CATEGORY_PREFIXES: [&str; 6] = [
    "puranic-",
    "epic-",
    "panchatantra-",
    "saint-",
    "vedic-",
    "wisdom-",
];

/// File extension of generated artifacts.
pub const IMAGE_EXTENSION: &str = "png";

/// Strip every category prefix from a slug.
///
/// Each prefix is removed wherever it occurs, one prefix after another.
///
/// # Examples
///
/// ```
/// use storybook_core::short_name;
///
/// assert_eq!(short_name("panchatantra-thirsty-crow"), "thirsty-crow");
/// assert_eq!(short_name("saint-kabir"), "kabir");
/// ```
pub fn short_name(slug: &str) -> String {
    CATEGORY_PREFIXES
        .iter()
        .fold(slug.to_string(), |name, prefix| name.replace(prefix, ""))
}

/// Image identifier for the scene at zero-based `index` of `slug`.
///
/// # Examples
///
/// ```
/// use storybook_core::image_id;
///
/// assert_eq!(image_id("panchatantra-thirsty-crow", 0), "thirsty-crow-01");
/// assert_eq!(image_id("puranic-dhruv-tara", 6), "dhruv-tara-07");
/// ```
pub fn image_id(slug: &str, index: usize) -> String {
    format!("{}-{:02}", short_name(slug), index + 1)
}

/// File name of the artifact for an image identifier.
pub fn image_file_name(image_id: &str) -> String {
    format!("{image_id}.{IMAGE_EXTENSION}")
}
