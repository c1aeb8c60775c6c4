use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Rejects empty/whitespace-only input, anything longer than 256 graphemes,
    /// and a handful of characters that have no business in a person's name.
    pub fn parse(s: String) -> Result<Self, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > 256;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters =
            s.chars().any(|c| forbidden_characters.contains(&c));

        if is_empty_or_whitespace {
            Err("Name is required".to_string())
        } else if is_too_long || contains_forbidden_characters {
            Err(format!("{s} is not a valid name"))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
