//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATA_DIR` (optional): directory holding the JSON documents, defaults to `data`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8000
/// - `SMTP_HOST` / `SMTP_USERNAME` / `SMTP_PASSWORD` (optional): SMTP relay
///   credentials for the contact form; delivery is disabled when any is missing
/// - `SMTP_PORT` (optional): SMTP submission port, defaults to 587 (STARTTLS)
/// - `CONTACT_SENDER` (optional): From address, defaults to SMTP_USERNAME
/// - `CONTACT_RECIPIENT` (optional): where contact-form submissions are sent
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default)]
    pub smtp_host: Option<String>,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(default)]
    pub smtp_username: Option<String>,

    #[serde(default)]
    pub smtp_password: Option<String>,

    #[serde(default)]
    pub contact_sender: Option<String>,

    #[serde(default)]
    pub contact_recipient: Option<String>,
}

/// Default document directory if DATA_DIR is not set.
fn default_data_dir() -> String {
    "data".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    8000
}

/// Default SMTP submission port (STARTTLS).
fn default_smtp_port() -> u16 {
    587
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into
    /// expected types (e.g., a non-numeric SERVER_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: data_dir -> DATA_DIR
        envy::from_env::<Config>()
    }
}
