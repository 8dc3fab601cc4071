//! Runtime settings read from the environment at startup.

pub const DEFAULT_FROM: &str = "portfolio@localhost";
pub const DEFAULT_TO: &str = "hello@localhost";

#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    /// Resend API key. Empty disables delivery (messages are only logged).
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub mail: MailConfig,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            mail: MailConfig {
                api_key: var("RESEND_API_KEY", ""),
                from: var("CONTACT_FROM", DEFAULT_FROM),
                to: var("CONTACT_TO", DEFAULT_TO),
            },
        }
    }
}
