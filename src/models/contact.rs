use serde::{Deserialize, Serialize};

pub const MAX_MESSAGE_CHARS: usize = 5000;

/// A message submitted through the contact section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Reasons a contact form is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("Please enter an email address")]
    MissingEmail,
    #[error("'{0}' doesn't look like an email address")]
    InvalidEmail(String),
    #[error("Please add a subject")]
    MissingSubject,
    #[error("Please write a message")]
    MissingMessage,
    #[error("Message is too long ({0} characters, max 5000)")]
    MessageTooLong(usize),
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Checks fields in form order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.subject.trim().is_empty() {
            return Err(ContactError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        let len = self.message.chars().count();
        if len > MAX_MESSAGE_CHARS {
            return Err(ContactError::MessageTooLong(len));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
