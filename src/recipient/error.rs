use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipientError {
    #[error("Can't open recipients file [path: {path:?}]")]
    CantOpenRecipientsFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Can't read recipients file")]
    CantReadRecipientsFile(#[source] std::io::Error),
    #[error("Unknown recipients delimiter [value: {0}]")]
    UnknownDelimiter(String),
}
