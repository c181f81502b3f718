//! Output aspect ratios accepted by the image provider.

use serde::{Deserialize, Serialize};

/// Aspect ratio of a generated image.
///
/// Parsed from and displayed as the provider's `W:H` notation.
///
/// # Examples
///
/// ```
/// use storybook_core::AspectRatio;
///
/// let ratio: AspectRatio = "16:9".parse().unwrap();
/// assert_eq!(ratio, AspectRatio::Landscape);
/// assert_eq!(AspectRatio::default().to_string(), "3:4");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
pub enum AspectRatio {
    /// 1:1
    #[strum(serialize = "1:1")]
    #[serde(rename = "1:1")]
    Square,
    /// 3:4, the storybook page format
    #[default]
    #[strum(serialize = "3:4")]
    #[serde(rename = "3:4")]
    Portrait,
    /// 4:3
    #[strum(serialize = "4:3")]
    #[serde(rename = "4:3")]
    Classic,
    /// 9:16
    #[strum(serialize = "9:16")]
    #[serde(rename = "9:16")]
    Tall,
    /// 16:9
    #[strum(serialize = "16:9")]
    #[serde(rename = "16:9")]
    Landscape,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_parses_back() {
        for ratio in AspectRatio::iter() {
            let parsed: AspectRatio = ratio.to_string().parse().unwrap();
            assert_eq!(parsed, ratio);
        }
    }

    #[test]
    fn test_unknown_ratio_is_rejected() {
        assert!("2:1".parse::<AspectRatio>().is_err());
        assert!("portrait".parse::<AspectRatio>().is_err());
    }
}
