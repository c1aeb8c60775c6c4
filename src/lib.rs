use crate::configuration::NotificationRecipient;
use crate::email_client::EmailClient;
use actix_web::{dev::Server, web, App, HttpServer};
use tera::Tera;
use tracing_actix_web::TracingLogger;

pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod routes;
pub mod startup;
pub mod telemetry;

pub fn run(
    listener: std::net::TcpListener,
    email_client: EmailClient,
    recipient: NotificationRecipient,
    templates: Tera,
) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    let recipient = web::Data::new(recipient);
    let tera = web::Data::new(templates);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(routes::health))
            .route("/api/submit-form", web::post().to(routes::submit_form))
            .app_data(email_client.clone())
            .app_data(recipient.clone())
            .app_data(tera.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
