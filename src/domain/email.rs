#[derive(Debug, Clone)]
pub struct Email(String);

impl Email {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            Err("Email is required".to_string())
        } else if !validator::validate_email(s.clone()) {
            Err(format!("{s} is not a valid email address"))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
