//! Configuration loaded from the process environment.
//!
//! Grounded on `rootsignal_common::Config::from_env`'s layout and its
//! `log_redacted` helper, but returning `Result` instead of panicking: a
//! missing-config job should exit early with a structured 400 response
//! rather than crash the invoking host.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("environment variable {name} must be {expected}, got {value:?}")]
    Invalid { name: &'static str, expected: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailType {
    Full,
    Short,
}

/// Shared across the collector and mailer job entrypoints; not every field
/// is meaningful to both (e.g. `days_back`/`email_type` are mailer-only,
/// `hours_back`/`per_source` collector-only), but loading one `Config` keeps
/// both binaries' `main.rs` identical in shape.
#[derive(Clone)]
pub struct Config {
    pub sources: Vec<String>,
    pub per_source: usize,
    pub hours_back: u32,
    pub days_back: u32,
    pub email_type: EmailType,

    pub store_base_url: String,
    pub store_token: String,
    pub collection_id_path: PathBuf,

    pub smtp_relay: String,
    pub smtp_username: String,
    pub smtp_app_password: String,
    pub mail_from: String,
    pub mail_to: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let sources_raw = env::var("SOURCES").unwrap_or_else(|_| "all-free".to_string());
        let sources = if sources_raw.trim() == "all-free" {
            carbonwire_sources::registry::default_sources()
        } else {
            sources_raw.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
        };

        let per_source = parse_with_default("PER_SOURCE", 100)?;
        let hours_back = parse_with_default("HOURS_BACK", 24)?;
        let days_back = parse_with_default("DAYS_BACK", 1)?;

        let email_type = match env::var("EMAIL_TYPE").unwrap_or_else(|_| "full".to_string()).as_str() {
            "full" => EmailType::Full,
            "short" => EmailType::Short,
            other => {
                return Err(ConfigError::Invalid {
                    name: "EMAIL_TYPE",
                    expected: "\"full\" or \"short\"",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            sources,
            per_source,
            hours_back,
            days_back,
            email_type,
            store_base_url: env::var("STORE_BASE_URL").unwrap_or_else(|_| "https://store.internal".to_string()),
            store_token: required_env("STORE_TOKEN")?,
            collection_id_path: env::var("COLLECTION_ID_PATH")
                .unwrap_or_else(|_| ".carbonwire-collection-id".to_string())
                .into(),
            smtp_relay: env::var("SMTP_RELAY").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_username: required_env("SMTP_FROM_ADDRESS")?,
            smtp_app_password: required_env("SMTP_APP_PASSWORD")?,
            mail_from: required_env("SMTP_FROM_ADDRESS")?,
            mail_to: required_env("MAIL_TO")?.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect(),
        })
    }

    /// Log the shape of every sensitive value without ever logging the value
    /// itself.
    pub fn log_redacted(&self) {
        let sensitive = [
            ("STORE_TOKEN", &self.store_token),
            ("SMTP_APP_PASSWORD", &self.smtp_app_password),
        ];
        for (name, value) in sensitive {
            if value.is_empty() {
                tracing::info!("{name} = (empty)");
            } else {
                tracing::info!("{name} = ({} chars)", value.len());
            }
        }
        tracing::info!(
            sources = self.sources.len(),
            per_source = self.per_source,
            hours_back = self.hours_back,
            days_back = self.days_back,
            email_type = ?self.email_type,
            "configuration loaded"
        );
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("sources", &self.sources)
            .field("per_source", &self.per_source)
            .field("hours_back", &self.hours_back)
            .field("days_back", &self.days_back)
            .field("email_type", &self.email_type)
            .field("store_base_url", &self.store_base_url)
            .field("store_token", &"<redacted>")
            .field("collection_id_path", &self.collection_id_path)
            .field("smtp_relay", &self.smtp_relay)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_app_password", &"<redacted>")
            .field("mail_from", &self.mail_from)
            .field("mail_to", &self.mail_to)
            .finish()
    }
}

fn required_env(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn parse_with_default<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::fmt::Display + Copy,
{
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            name: key,
            expected: "an integer",
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_reported_not_panicked() {
        // STORE_TOKEN deliberately left unset in this process's environment.
        std::env::remove_var("STORE_TOKEN");
        let err = required_env("STORE_TOKEN").unwrap_err();
        assert!(matches!(err, ConfigError::Missing("STORE_TOKEN")));
    }

    #[test]
    fn invalid_integer_is_reported() {
        std::env::set_var("PER_SOURCE", "not-a-number");
        let err = parse_with_default::<usize>("PER_SOURCE", 100).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PER_SOURCE", .. }));
        std::env::remove_var("PER_SOURCE");
    }

    #[test]
    fn default_used_when_unset() {
        std::env::remove_var("PER_SOURCE");
        assert_eq!(parse_with_default("PER_SOURCE", 100usize).unwrap(), 100);
    }
}
