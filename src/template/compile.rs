use crate::template::Result;
use crate::template::MessageTemplate;
use crate::template::error::TemplateError::{CantOpenTemplateFile, CantReadTemplateFile};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

const SUBJECT_PREFIX: &str = "Subject:";

/// `{{.Name}}`, `{{- .Email -}}`...
static DOTTED_FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(-?)\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*(-?)\}\}")
        .expect("Dotted field regex should be valid.")
});

/// Compile the template file at `path`.
///
/// The first line starting with `Subject:` holds the subject,
/// every other line is part of the body.
/// Both are Tera templates: literal `{{`, `{%` or `{#` must sit inside `{% raw %}...{% endraw %}`.
pub fn compile_template(path: &Path) -> Result<MessageTemplate> {
    let mut file = File::open(path).map_err(|source| CantOpenTemplateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| CantReadTemplateFile {
            path: path.to_path_buf(),
            source,
        })?;

    parse_template(&text)
}

pub fn parse_template(text: &str) -> Result<MessageTemplate> {
    let (subject, body) = split_subject_and_body(text);
    if subject.is_none() {
        warn!("No `{SUBJECT_PREFIX}` line found in template, subject will be empty");
    }
    let subject = subject.unwrap_or_default();

    MessageTemplate::new(
        &normalize_dotted_fields(&subject),
        &normalize_dotted_fields(&body),
    )
}

fn split_subject_and_body(text: &str) -> (Option<String>, String) {
    let mut subject = None;
    let mut body = String::with_capacity(text.len());
    for line in text.lines() {
        if subject.is_none() {
            if let Some(value) = line.strip_prefix(SUBJECT_PREFIX) {
                subject = Some(value.trim().to_owned());
                continue;
            }
        }
        body.push_str(line);
        body.push('\n');
    }

    (subject, body)
}

/// Rewrite dotted field references as plain variables: `{{.Name}}` becomes `{{ name }}`.
fn normalize_dotted_fields(text: &str) -> Cow<'_, str> {
    DOTTED_FIELD_REGEX.replace_all(text, |captures: &Captures| {
        let open = &captures[1];
        let field = captures[2].to_lowercase();
        let close = &captures[3];
        format!("{{{{{open} {field} {close}}}}}")
    })
}
