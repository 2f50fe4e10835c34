use crate::config::ConfigError;
use crate::dispatch::error::DispatchError;
use crate::recipient::error::RecipientError;
use crate::template::error::TemplateError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The command line is invalid.")]
    Config(#[from] ConfigError),
    #[error("Error while reading recipients.")]
    Recipient(#[from] RecipientError),
    #[error("Error while compiling template.")]
    Template(#[from] TemplateError),
    #[error("Error while sending emails.")]
    Dispatch(#[from] DispatchError),
}
