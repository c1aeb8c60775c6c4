use std::time::Duration;

use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::Email;

#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
}

#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Clone, serde::Deserialize)]
pub struct EmailSettings {
    pub base_url: String,
    pub user: String,
    pub pass: Secret<String>,
    pub recipient: String,
    pub timeout_milliseconds: u64,
}

/// The operator address notification messages are delivered to.
#[derive(Clone)]
pub struct NotificationRecipient(pub Email);

impl Settings {
    pub fn get() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
            .set_override_option("application.port", std::env::var("PORT").ok())?
            .set_override_option("email.user", std::env::var("EMAIL_USER").ok())?
            .set_override_option("email.pass", std::env::var("EMAIL_PASS").ok())?
            .set_override_option("email.recipient", std::env::var("RECIPIENT_EMAIL").ok())?
            .build()?;
        settings.try_deserialize::<Self>()
    }
}

impl EmailSettings {
    pub fn sender(&self) -> Result<Email, String> {
        Email::parse(self.user.clone())
    }

    pub fn recipient(&self) -> Result<NotificationRecipient, String> {
        Email::parse(self.recipient.clone()).map(NotificationRecipient)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}
