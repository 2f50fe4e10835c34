use crate::recipient::error::RecipientError;
use derive_getters::Getters;
use serde::Serialize;
use std::str::FromStr;

pub mod error;
pub mod parse;

type Result<T, E = RecipientError> = std::result::Result<T, E>;

/// One addressee of a mail-merge run.
/// Serialized as the data context of the message templates.
#[derive(Debug, Serialize, Getters, PartialEq, Eq, Clone)]
pub struct Recipient {
    email: String,
    name: String,
}

impl Recipient {
    pub fn new(email: String, name: String) -> Self {
        Self { email, name }
    }
}

/// How fields are separated on each line of a recipients list.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Delimiter {
    /// `email,name`, CSV quoting allowed.
    #[default]
    Comma,
    /// `email name`, the name being the rest of the line.
    Whitespace,
}

impl FromStr for Delimiter {
    type Err = RecipientError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "comma" | "," => Ok(Delimiter::Comma),
            "whitespace" | "space" => Ok(Delimiter::Whitespace),
            _ => Err(RecipientError::UnknownDelimiter(value.to_owned())),
        }
    }
}
