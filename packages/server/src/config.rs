use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Mail account used both as API credential and sender address.
    pub email_user: String,
    pub email_pass: String,
    /// Base URL of the transactional mail API.
    pub mail_api_url: String,
    /// Recipient of every submission notification.
    pub notify_to: String,
    /// Display name on outgoing notifications.
    pub sender_name: String,
    /// When set, 500 responses carry no diagnostic detail.
    pub production: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Mail credentials are required: the process refuses to start
    /// without them.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            email_user: env::var("EMAIL_USER")
                .context("EMAIL_USER must be set")?,
            email_pass: env::var("EMAIL_PASS")
                .context("EMAIL_PASS must be set")?,
            mail_api_url: env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.mailjet.com".to_string()),
            notify_to: env::var("NOTIFY_TO")
                .unwrap_or_else(|_| "sylvia.b@bloowmoney.com".to_string()),
            sender_name: env::var("SENDER_NAME")
                .unwrap_or_else(|_| "Site Obsèques".to_string()),
            production: env::var("APP_ENV")
                .map(|v| v == "production")
                .unwrap_or(false),
        })
    }
}
