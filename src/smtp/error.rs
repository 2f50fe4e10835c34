use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum SmtpError {
    #[error("Can't connect to SMTP server [address: {0}]")]
    CantConnectToSmtpServer(String),
    #[error("Can't send message [recipient: {0}]")]
    CantSendMessage(String),
    #[error("Unknown SMTP security [value: {0}]")]
    UnknownSecurity(String),
}
