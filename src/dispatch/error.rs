use crate::smtp::error::SmtpError;
use crate::template::error::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Can't render message [recipient: {email}]")]
    RenderFailed {
        email: String,
        source: TemplateError,
    },
    #[error("Can't send message [recipient: {email}, already sent: {sent}]")]
    SendFailed {
        email: String,
        sent: usize,
        source: SmtpError,
    },
    #[error("Unknown message layout [value: {0}]")]
    UnknownLayout(String),
}
