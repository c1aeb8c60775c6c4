#[derive(Debug, Clone)]
pub struct Website(String);

impl Website {
    // Required field, but the form accepts anything the submitter calls a
    // website. No URL-shape check.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            Err("Website is required".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for Website {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
