use std::net::TcpListener;

use actix_web::dev::Server;
use anyhow::Context;
use tera::Tera;

use crate::{configuration::Settings, email_client::EmailClient, run};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> anyhow::Result<Self> {
        let sender = config
            .email
            .sender()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid sender address in configuration")?;
        let recipient = config
            .email
            .recipient()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid notification recipient in configuration")?;
        let timeout = config.email.timeout();
        let email_client = EmailClient::new(config.email.base_url, sender, config.email.pass, timeout);

        let templates = Tera::new("templates/**/*").context("Failed to load email templates")?;

        let address = (config.application.host, config.application.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, email_client, recipient, templates)?;

        Ok(Self { port, server })
    }
}
