use reqwest::Client;
use serde_json::{json, Value};

use crate::config::MailConfig;
use crate::models::ContactForm;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Forwards contact messages to the site owner through Resend.
pub struct Mailer {
    config: MailConfig,
    client: Client,
    endpoint: String,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            endpoint: RESEND_ENDPOINT.to_string(),
        }
    }

    /// Post to another Resend-compatible endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub async fn send(&self, payload: Value) -> Result<(), MailError> {
        if self.config.api_key.is_empty() {
            // Development: log instead of sending
            tracing::info!(
                to = %self.config.to,
                subject = payload["subject"].as_str().unwrap_or_default(),
                "RESEND_API_KEY not set, mail not sent"
            );
            return Ok(());
        }

        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(MailError::Rejected {
                status: res.status().as_u16(),
                body: res.text().await.unwrap_or_default(),
            })
        }
    }

    pub async fn send_contact(&self, form: &ContactForm) -> Result<(), MailError> {
        self.send(contact_payload(&self.config, form)).await
    }
}

/// Resend request body for a contact notification. Replies go to the sender.
pub fn contact_payload(config: &MailConfig, form: &ContactForm) -> Value {
    let name = escape_html(form.name.trim());
    let email = escape_html(form.email.trim());
    let subject = form.subject.trim();
    let message = escape_html(form.message.trim()).replace('\n', "<br/>");

    json!({
        "from": config.from,
        "to": config.to,
        "reply_to": form.email.trim(),
        "subject": format!("[Portfolio] {subject}"),
        "html": format!(
            r#"
            <div style="font-family: sans-serif; max-width: 600px; margin: 0 auto;">
                <h2>New message from your portfolio</h2>
                <p><strong>{name}</strong> &lt;{email}&gt;</p>
                <p style="margin: 24px 0; line-height: 1.5;">{message}</p>
            </div>
            "#
        ),
    })
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Local stand-in for the mail provider that rejects every message with a
/// 422. Returns the endpoint URL to hand to [`Mailer::with_endpoint`].
#[cfg(test)]
pub(crate) async fn spawn_rejecting_provider() -> String {
    use axum::{http::StatusCode, routing::post, Router};

    let app = Router::new().route(
        "/emails",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "invalid `to` field") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move { axum::serve(listener, app).await });
    format!("http://{addr}/emails")
}
