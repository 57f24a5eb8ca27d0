use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub owner_name: String,
    /// Owner mailbox; also the SMTP username
    pub email_address: String,
    pub email_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Absolute base for links placed in emails
    pub public_base_url: String,
    pub notify_owner_on_request: bool,
}

/// Variables read by `Config::from_env`, in the order they are logged.
pub const CONFIG_ENV_VARS: &[&str] = &[
    "PORT",
    "OWNER_NAME",
    "EMAIL_ADDRESS",
    "EMAIL_PASSWORD",
    "SMTP_HOST",
    "SMTP_PORT",
    "PUBLIC_BASE_URL",
    "NOTIFY_OWNER_ON_REQUEST",
];

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        Ok(Self {
            port,
            owner_name: env::var("OWNER_NAME").unwrap_or_else(|_| "Portfolio Owner".to_string()),
            email_address: env::var("EMAIL_ADDRESS").context("EMAIL_ADDRESS must be set")?,
            email_password: env::var("EMAIL_PASSWORD").context("EMAIL_PASSWORD must be set")?,
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| mailer::DEFAULT_SMTP_PORT.to_string())
                .parse()
                .context("SMTP_PORT must be a valid number")?,
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),
            notify_owner_on_request: parse_flag(
                &env::var("NOTIFY_OWNER_ON_REQUEST").unwrap_or_else(|_| "true".to_string()),
            )
            .context("NOTIFY_OWNER_ON_REQUEST must be true/false, 1/0, yes/no or on/off")?,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("owner_name", &self.owner_name)
            .field("email_address", &self.email_address)
            .field("email_password", &"***")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("public_base_url", &self.public_base_url)
            .field("notify_owner_on_request", &self.notify_owner_on_request)
            .finish()
    }
}

/// Parse a boolean env value, case-insensitively.
pub fn parse_flag(val: &str) -> Result<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value: {:?}", other),
    }
}

/// Mask all but the first few characters of a value for startup logging.
pub fn mask_value(val: &str) -> String {
    let show = val.chars().take(4).collect::<String>();
    let hidden = val.chars().count().saturating_sub(show.chars().count());
    format!("{}{}  ({} chars)", show, "*".repeat(hidden), val.chars().count())
}
