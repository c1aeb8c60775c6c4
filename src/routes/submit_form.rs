use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use tera::Tera;

use crate::configuration::NotificationRecipient;
use crate::domain::{Email, Submission};
use crate::email_client::EmailClient;

#[derive(serde::Deserialize)]
pub struct SubmitFormBody {
    // Required fields default to empty strings so a missing key is reported
    // as a validation error with the same payload shape as an empty one.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

#[derive(serde::Serialize)]
struct SubmitFormResponse {
    success: bool,
    message: &'static str,
}

#[derive(serde::Serialize)]
struct SubmitFormErrorBody {
    success: bool,
    error: String,
}

#[derive(thiserror::Error)]
pub enum SubmitFormError {
    #[error("{0}")]
    Validation(String),
    #[error("Failed to render an email body")]
    Render(#[from] tera::Error),
    #[error("Failed to deliver an email")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for SubmitFormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitFormError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Render(_) | Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The validation reason is safe to show; everything else stays in the logs.
        let error = match self {
            Self::Validation(reason) => reason.clone(),
            _ => "Failed to send your message. Please try again later.".to_string(),
        };

        HttpResponse::build(self.status_code()).json(SubmitFormErrorBody {
            success: false,
            error,
        })
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(body, email_client, recipient, tera),
    fields(
        submitter_email = %body.email,
        submitter_name = %body.name,
    ),
)]
pub async fn submit_form(
    body: web::Json<SubmitFormBody>,
    email_client: web::Data<EmailClient>,
    recipient: web::Data<NotificationRecipient>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, SubmitFormError> {
    let submission: Submission = body
        .into_inner()
        .try_into()
        .map_err(SubmitFormError::Validation)?;

    send_notification(&email_client, &recipient.0, &tera, &submission).await?;
    send_confirmation(&email_client, &tera, &submission).await?;

    Ok(HttpResponse::Ok().json(SubmitFormResponse {
        success: true,
        message: "Thank you! Your message has been sent.",
    }))
}

#[tracing::instrument(
    name = "Sending notification email to the site operator",
    skip(email_client, tera, submission)
)]
async fn send_notification(
    email_client: &EmailClient,
    recipient: &Email,
    tera: &Tera,
    submission: &Submission,
) -> Result<(), SubmitFormError> {
    let context = template_context(submission);
    let html_body = tera.render("notification.html", &context)?;
    let text_body = tera.render("notification.txt", &context)?;
    let subject = format!("New contact form submission from {}", submission.name.as_ref());

    email_client
        .send_email(recipient, &subject, &html_body, &text_body)
        .await
        .map_err(|e| {
            tracing::error!("Failed to deliver the notification email: {:?}", e);
            e
        })?;

    Ok(())
}

#[tracing::instrument(
    name = "Sending confirmation email to the submitter",
    skip(email_client, tera, submission)
)]
async fn send_confirmation(
    email_client: &EmailClient,
    tera: &Tera,
    submission: &Submission,
) -> Result<(), SubmitFormError> {
    let context = template_context(submission);
    let html_body = tera.render("confirmation.html", &context)?;
    let text_body = tera.render("confirmation.txt", &context)?;

    email_client
        .send_email(
            &submission.email,
            "We received your message",
            &html_body,
            &text_body,
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to deliver the confirmation email: {:?}", e);
            e
        })?;

    Ok(())
}

fn template_context(submission: &Submission) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("name", submission.name.as_ref());
    context.insert("email", submission.email.as_ref());
    context.insert("website", submission.website.as_ref());
    context.insert("phone", &submission.phone);
    context.insert("service", &submission.service);
    context.insert("message", &submission.message);
    context
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
