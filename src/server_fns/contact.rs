use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::{models::ContactForm, services::email::Mailer};

/// Shown to the visitor whenever the mail provider fails. Details stay in the log.
#[cfg(feature = "ssr")]
pub(crate) const DELIVERY_FAILED: &str =
    "Sorry, your message could not be sent. Please try again later.";

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::state::AppState;
    use axum::Extension;
    use leptos_axum::extract;

    let form = ContactForm::new(name, email, subject, message);
    if let Err(e) = form.validate() {
        tracing::debug!(error = %e, "rejected contact form");
        return Err(ServerFnError::new(e.to_string()));
    }

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(from = %form.email.trim(), subject = %form.subject.trim(), "contact message received");

    deliver(&state.mailer, &form).await
}

#[cfg(feature = "ssr")]
pub(crate) async fn deliver(mailer: &Mailer, form: &ContactForm) -> Result<(), ServerFnError> {
    mailer.send_contact(form).await.map_err(|e| {
        tracing::error!(error = %e, "failed to deliver contact message");
        ServerFnError::new(DELIVERY_FAILED)
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::config::MailConfig;
    use crate::services::email::spawn_rejecting_provider;

    #[tokio::test]
    async fn invalid_form_is_rejected_before_delivery() {
        let err = submit_contact(
            "Ada".into(),
            "not-an-email".into(),
            "Hi".into(),
            "Hello".into(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("doesn't look like an email address"));
    }

    #[tokio::test]
    async fn provider_failure_is_reported_generically() {
        let endpoint = spawn_rejecting_provider().await;
        let mailer = Mailer::new(MailConfig {
            api_key: "re_test".into(),
            from: "site@example.com".into(),
            to: "owner@example.com".into(),
        })
        .with_endpoint(endpoint);
        let form = ContactForm::new("Ada", "ada@example.com", "Hi", "Hello");

        let message = deliver(&mailer, &form).await.unwrap_err().to_string();
        assert!(message.contains(DELIVERY_FAILED));
        assert!(!message.contains("422"));
    }
}
