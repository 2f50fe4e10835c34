use crate::smtp::error::SmtpError;

pub mod config;
pub mod credentials;
pub mod error;
pub mod transport;

type Result<T, E = SmtpError> = std::result::Result<T, E>;
