use crate::recipient::Result;
use crate::recipient::error::RecipientError::{CantOpenRecipientsFile, CantReadRecipientsFile};
use crate::recipient::{Delimiter, Recipient};
use crate::tools::log_message;
use csv::{ErrorKind, StringRecord, Trim};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const COMMENT_MARKER: char = '#';

/// Read the recipients listed in the file at `path`, in file order.
///
/// Comments and blank lines are skipped silently.
/// Lines with fewer than two non-empty fields, or that aren't valid UTF-8,
/// are skipped with a warning.
pub fn parse_recipients(path: &Path, delimiter: Delimiter) -> Result<Vec<Recipient>> {
    let file = File::open(path).map_err(|source| CantOpenRecipientsFile {
        path: path.to_path_buf(),
        source,
    })?;
    let recipients = read_recipients(file, delimiter)?;
    info!("{} recipient(s) read from {path:?}", recipients.len());

    Ok(recipients)
}

pub fn read_recipients<R: Read>(reader: R, delimiter: Delimiter) -> Result<Vec<Recipient>> {
    match delimiter {
        Delimiter::Comma => read_comma_separated_recipients(reader),
        Delimiter::Whitespace => read_whitespace_separated_recipients(reader),
    }
}

fn read_comma_separated_recipients<R: Read>(reader: R) -> Result<Vec<Recipient>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(COMMENT_MARKER as u8))
        .from_reader(reader);

    let mut recipients = vec![];
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(error) => match error.into_kind() {
                ErrorKind::Io(error) => return Err(CantReadRecipientsFile(error)),
                kind => {
                    log_message("Malformed recipient line, skipping it")(kind);
                    continue;
                }
            },
        };
        if is_skippable_record(&record) {
            continue;
        }

        let line = record.position().map(|position| position.line());
        match (record.get(0), record.get(1)) {
            (Some(email), Some(name)) if !email.is_empty() && !name.is_empty() => {
                recipients.push(Recipient::new(email.to_owned(), name.to_owned()))
            }
            _ => {
                warn!("Malformed recipient line, skipping it [line: {line:?}, fields: {record:?}]");
            }
        }
    }

    Ok(recipients)
}

/// Blank lines and comments indented by whitespace, which the CSV reader reports as records.
fn is_skippable_record(record: &StringRecord) -> bool {
    (record.len() == 1 && record.get(0).is_some_and(str::is_empty))
        || record
            .get(0)
            .is_some_and(|field| field.starts_with(COMMENT_MARKER))
}

fn read_whitespace_separated_recipients<R: Read>(reader: R) -> Result<Vec<Recipient>> {
    let mut recipients = vec![];
    for (index, line) in BufReader::new(reader).split(b'\n').enumerate() {
        let line = line.map_err(CantReadRecipientsFile)?;
        let line_number = index + 1;
        let line = match std::str::from_utf8(&line) {
            Ok(line) => line.trim(),
            Err(error) => {
                log_message(&format!(
                    "Malformed recipient line, skipping it [line: {line_number}]"
                ))(error);
                continue;
            }
        };
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        match line.split_once(char::is_whitespace) {
            Some((email, name)) => {
                recipients.push(Recipient::new(email.to_owned(), name.trim_start().to_owned()))
            }
            None => {
                warn!("Malformed recipient line, skipping it [line: {line_number}, content: {line}]");
            }
        }
    }

    Ok(recipients)
}
