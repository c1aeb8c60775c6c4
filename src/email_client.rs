use std::time::Duration;

use crate::domain::Email;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

/// The mail transport. Configured once at startup and shared read-only
/// across requests.
#[derive(Clone)]
pub struct EmailClient {
    base_url: String,
    http_client: reqwest::Client,
    sender: Email,
    token: Secret<String>,
    timeout: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

impl EmailClient {
    pub fn new(base_url: String, sender: Email, token: Secret<String>, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            sender,
            token,
            timeout,
        }
    }

    pub async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.base_url);
        let body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            subject,
            html_body,
            text_body,
        };

        let _ = self
            .http_client
            .post(url)
            .timeout(self.timeout)
            .json(&body)
            .header("X-Postmark-Server-Token", self.token.expose_secret())
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
