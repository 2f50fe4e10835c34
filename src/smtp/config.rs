use crate::smtp::Result;
use crate::smtp::credentials::Credentials;
use crate::smtp::error::SmtpError;
use crate::smtp::error::SmtpError::UnknownSecurity;
use derive_getters::Getters;
use std::str::FromStr;

pub const DEFAULT_SMTP_HOST: &str = "smtp-auth.ru.nl";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// How the connection to the SMTP server is secured.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Security {
    /// Plain connection upgraded with `STARTTLS`.
    #[default]
    StartTls,
    /// TLS from the first byte, usually on port 465.
    Tls,
    /// No TLS at all.
    Plain,
}

impl FromStr for Security {
    type Err = SmtpError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "starttls" => Ok(Security::StartTls),
            "tls" => Ok(Security::Tls),
            "plain" | "none" => Ok(Security::Plain),
            _ => Err(UnknownSecurity(value.to_owned())),
        }
    }
}

#[derive(Debug, Getters, PartialEq, Clone)]
pub struct SmtpConfig {
    host: String,
    port: u16,
    security: Security,
    credentials: Option<Credentials>,
}

impl SmtpConfig {
    pub fn new(
        host: String,
        port: u16,
        security: Security,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            host,
            port,
            security,
            credentials,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_SMTP_HOST.to_owned(),
            DEFAULT_SMTP_PORT,
            Security::default(),
            None,
        )
    }
}
