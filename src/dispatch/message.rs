use crate::dispatch::error::DispatchError;
use crate::dispatch::error::DispatchError::UnknownLayout;
use std::str::FromStr;

const CRLF: &str = "\r\n";

/// Whether a blank line separates the `Subject:` header from the body.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum MessageLayout {
    #[default]
    BlankLine,
    Compact,
}

impl FromStr for MessageLayout {
    type Err = DispatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "blank-line" => Ok(MessageLayout::BlankLine),
            "compact" => Ok(MessageLayout::Compact),
            _ => Err(UnknownLayout(value.to_owned())),
        }
    }
}

/// Build the raw message: a `Subject:` header then the body, all lines ending with CRLF.
pub fn compose_message(subject: &str, body: &str, layout: MessageLayout) -> Vec<u8> {
    let mut message = String::with_capacity(subject.len() + body.len() + 16);
    message.push_str("Subject: ");
    message.push_str(subject);
    message.push_str(CRLF);
    if layout == MessageLayout::BlankLine {
        message.push_str(CRLF);
    }
    for line in body.lines() {
        message.push_str(line);
        message.push_str(CRLF);
    }
    if body.is_empty() {
        message.push_str(CRLF);
    }

    message.into_bytes()
}
