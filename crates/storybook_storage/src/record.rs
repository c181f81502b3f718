//! In-memory story record.

use serde_json::Value;
use storybook_error::{JsonError, StorageError, StorageErrorKind, StorybookResult};

/// Key holding the ordered section list.
const SECTIONS_KEY: &str = "sections";
/// Key holding a section's image reference.
const IMAGE_KEY: &str = "image";

/// A story record as authored on disk.
///
/// Only `sections[i].image` is ever modified. Every other key keeps its value
/// and its authored position.
///
/// # Examples
///
/// ```
/// use storybook_storage::StoryRecord;
///
/// let mut record = StoryRecord::from_json(
///     r#"{"title": "The Thirsty Crow", "sections": [{"text": "A hot day."}, {"text": "A pitcher."}]}"#,
/// ).unwrap();
///
/// assert!(!record.has_images());
/// record.apply_images(&["thirsty-crow-01".to_string()]).unwrap();
/// assert_eq!(record.image(0), Some("thirsty-crow-01"));
/// assert_eq!(record.image(1), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StoryRecord {
    value: Value,
}

impl StoryRecord {
    /// Parse a record, requiring a `sections` array.
    pub fn from_json(text: &str) -> StorybookResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| JsonError::new(format!("Failed to parse story record: {}", e)))?;
        let record = Self { value };
        record.sections()?;
        Ok(record)
    }

    /// Serialize with two-space indentation and a trailing newline.
    ///
    /// Non-ASCII text is written as-is.
    pub fn to_json(&self) -> StorybookResult<String> {
        let mut text = serde_json::to_string_pretty(&self.value)
            .map_err(|e| JsonError::new(format!("Failed to serialize story record: {}", e)))?;
        text.push('\n');
        Ok(text)
    }

    /// Number of authored sections.
    pub fn section_count(&self) -> usize {
        self.sections().map(|sections| sections.len()).unwrap_or(0)
    }

    /// Image reference of the section at `index`, if it is a string.
    pub fn image(&self, index: usize) -> Option<&str> {
        self.sections()
            .ok()?
            .get(index)?
            .get(IMAGE_KEY)?
            .as_str()
    }

    /// Whether any section carries a non-empty image reference.
    pub fn has_images(&self) -> bool {
        self.sections()
            .map(|sections| {
                sections
                    .iter()
                    .any(|section| section.get(IMAGE_KEY).is_some_and(is_truthy))
            })
            .unwrap_or(false)
    }

    /// Set `sections[i].image = image_ids[i]` for every index both share.
    ///
    /// Existing references are overwritten. Sections past the end of
    /// `image_ids` are untouched, as are identifiers past the last section.
    /// Returns the number of sections written.
    pub fn apply_images(&mut self, image_ids: &[String]) -> StorybookResult<usize> {
        let sections = self.sections_mut()?;
        let mut written = 0;
        for (index, (section, image_id)) in sections.iter_mut().zip(image_ids).enumerate() {
            let Some(fields) = section.as_object_mut() else {
                return Err(StorageError::new(StorageErrorKind::MalformedRecord(format!(
                    "section {} is not an object",
                    index
                )))
                .into());
            };
            fields.insert(IMAGE_KEY.to_string(), Value::String(image_id.clone()));
            written += 1;
        }
        Ok(written)
    }

    fn sections(&self) -> StorybookResult<&Vec<Value>> {
        self.value
            .get(SECTIONS_KEY)
            .and_then(Value::as_array)
            .ok_or_else(|| missing_sections().into())
    }

    fn sections_mut(&mut self) -> StorybookResult<&mut Vec<Value>> {
        self.value
            .get_mut(SECTIONS_KEY)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| missing_sections().into())
    }
}

fn missing_sections() -> StorageError {
    StorageError::new(StorageErrorKind::MalformedRecord(
        "expected a `sections` array".to_string(),
    ))
}

/// JSON truthiness as the authoring tools treat it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
