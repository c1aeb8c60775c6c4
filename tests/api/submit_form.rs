use crate::helpers::spawn_app;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "John Smith",
        "email": "john@company.com",
        "website": "https://example.com",
        "service": "on-page",
    })
}

#[tokio::test]
async fn a_valid_submission_returns_200_and_sends_two_emails() {
    // GIVEN
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // WHEN
    let result = app.post_submit_form(&valid_body()).await;

    // THEN
    assert_eq!(200, result.status());
    let payload: serde_json::Value = result.json().await.expect("Failed to parse body");
    assert_eq!(payload["success"], true);
}

#[tokio::test]
async fn the_notification_is_sent_before_the_confirmation() {
    // GIVEN
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // WHEN
    app.post_submit_form(&valid_body()).await;

    // THEN
    let requests = app
        .email_server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    assert_eq!(2, requests.len());

    let notification: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("Invalid notification body");
    let confirmation: serde_json::Value =
        serde_json::from_slice(&requests[1].body).expect("Invalid confirmation body");

    // Operator address from config.yaml first, then the submitter's own.
    assert_eq!(notification["To"], "contact@example.com");
    assert_eq!(confirmation["To"], "john@company.com");
}

#[tokio::test]
async fn missing_or_invalid_fields_return_400_and_send_nothing() {
    // GIVEN
    let app = spawn_app().await;
    let test_cases = [
        (
            serde_json::json!({"email": "john@company.com", "website": "https://example.com"}),
            "missing name",
        ),
        (
            serde_json::json!({"name": "John Smith", "website": "https://example.com"}),
            "missing email",
        ),
        (
            serde_json::json!({"name": "John Smith", "email": "john@company.com"}),
            "missing website",
        ),
        (
            serde_json::json!({"name": "", "email": "john@company.com", "website": "https://example.com"}),
            "empty name",
        ),
        (
            serde_json::json!({"name": "John Smith", "email": "", "website": "https://example.com"}),
            "empty email",
        ),
        (
            serde_json::json!({"name": "John Smith", "email": "john@company.com", "website": "  "}),
            "blank website",
        ),
        (
            serde_json::json!({"name": "John Smith", "email": "not-an-email", "website": "https://example.com"}),
            "malformed email",
        ),
    ];

    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for (invalid_body, why_invalid_body_message) in test_cases {
        // WHEN
        let result = app.post_submit_form(&invalid_body).await;

        // THEN
        assert_eq!(
            400,
            result.status(),
            "The API did not fail properly with Bad Request (400) when the body had {why_invalid_body_message}"
        );
        let payload: serde_json::Value = result.json().await.expect("Failed to parse body");
        assert_eq!(payload["success"], false);
        assert!(payload["error"].is_string());
    }
}

#[tokio::test]
async fn a_transport_failure_on_the_first_send_returns_500_and_short_circuits() {
    // GIVEN
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.email_server)
        .await;

    // WHEN
    let result = app.post_submit_form(&valid_body()).await;

    // THEN
    assert_eq!(500, result.status());
    let payload: serde_json::Value = result.json().await.expect("Failed to parse body");
    assert_eq!(payload["success"], false);
    // The mail API error must not leak to the caller.
    assert_eq!(
        payload["error"],
        "Failed to send your message. Please try again later."
    );

    let requests = app
        .email_server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    assert_eq!(1, requests.len());
}

#[tokio::test]
async fn a_transport_failure_on_the_second_send_returns_500() {
    // GIVEN
    let app = spawn_app().await;

    // First call (the notification) succeeds, the confirmation fails.
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .mount(&app.email_server)
        .await;
    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.email_server)
        .await;

    // WHEN
    let result = app.post_submit_form(&valid_body()).await;

    // THEN
    assert_eq!(500, result.status());
    let payload: serde_json::Value = result.json().await.expect("Failed to parse body");
    assert_eq!(payload["success"], false);
}

#[tokio::test]
async fn submitting_the_same_payload_twice_sends_four_emails() {
    // GIVEN
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&app.email_server)
        .await;

    // WHEN
    let first = app.post_submit_form(&valid_body()).await;
    let second = app.post_submit_form(&valid_body()).await;

    // THEN
    assert_eq!(200, first.status());
    assert_eq!(200, second.status());
}

#[tokio::test]
async fn optional_fields_are_relayed_when_present() {
    // GIVEN
    let app = spawn_app().await;
    let body = serde_json::json!({
        "name": "John Smith",
        "email": "john@company.com",
        "website": "https://example.com",
        "phone": "+1 555 0100",
        "service": "on-page",
        "message": "Looking for an audit.",
    });

    Mock::given(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // WHEN
    let result = app.post_submit_form(&body).await;

    // THEN
    assert_eq!(200, result.status());
    let requests = app
        .email_server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    let notification: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("Invalid notification body");
    let text_body = notification["TextBody"]
        .as_str()
        .expect("TextBody is not a string");
    assert!(text_body.contains("+1 555 0100"));
    assert!(text_body.contains("on-page"));
    assert!(text_body.contains("Looking for an audit."));
}
