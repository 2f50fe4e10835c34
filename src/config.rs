use crate::dispatch::DispatchSettings;
use crate::recipient::Delimiter;
use crate::smtp::config::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT, SmtpConfig};
use crate::smtp::credentials::Credentials;
use crate::tools::env_args::{ArgName, has_flag, retrieve_arg_value, retrieve_positional_args};
use derive_getters::Getters;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

type Result<T, E = ConfigError> = std::result::Result<T, E>;

const RECIPIENTS_ARG: [&str; 2] = ["-l", "--recipients"];
const DELIMITER_ARG: [&str; 2] = ["-d", "--delimiter"];
const FROM_ARG: [&str; 2] = ["-f", "--from"];
const SMTP_HOST_ARG: [&str; 2] = ["-n", "--smtp-host"];
const SMTP_PORT_ARG: [&str; 2] = ["-p", "--smtp-port"];
const SMTP_SECURITY_ARG: &str = "--smtp-security";
const SMTP_LOGIN_ARG: [&str; 2] = ["-u", "--smtp-login"];
const SMTP_PASSWORD_ARG: [&str; 2] = ["-s", "--smtp-password"];
const LAYOUT_ARG: &str = "--layout";
const DRY_RUN_ARG: &str = "--dry-run";
const HELP_ARG: [&str; 2] = ["-h", "--help"];
const VALUE_ARGS: [&str; 16] = [
    RECIPIENTS_ARG[0],
    RECIPIENTS_ARG[1],
    DELIMITER_ARG[0],
    DELIMITER_ARG[1],
    FROM_ARG[0],
    FROM_ARG[1],
    SMTP_HOST_ARG[0],
    SMTP_HOST_ARG[1],
    SMTP_PORT_ARG[0],
    SMTP_PORT_ARG[1],
    SMTP_SECURITY_ARG,
    SMTP_LOGIN_ARG[0],
    SMTP_LOGIN_ARG[1],
    SMTP_PASSWORD_ARG[0],
    SMTP_PASSWORD_ARG[1],
    LAYOUT_ARG,
];

const DEFAULT_RECIPIENTS: &str = "recipients.csv";
const DEFAULT_FROM: &str = "no-reply@donders.ru.nl";

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Missing mail content template")]
    MissingTemplate,
    #[error("Only one template can be given [templates: {0:?}]")]
    TooManyTemplates(Vec<String>),
    #[error("Invalid SMTP port [value: {0}]")]
    InvalidSmtpPort(String),
    #[error("Invalid value for {arg} [reason: {reason}]")]
    InvalidArgValue { arg: &'static str, reason: String },
}

/// Everything a run needs, read once from the command line.
#[derive(Debug, Getters, PartialEq)]
pub struct MailMergeConfig {
    recipients_path: PathBuf,
    delimiter: Delimiter,
    template_path: PathBuf,
    dry_run: bool,
    dispatch: DispatchSettings,
}

impl MailMergeConfig {
    /// `args` is the full command line, program name first.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let template_path = retrieve_template_path(args)?;
        let recipients_path = retrieve_arg_value(args, RECIPIENTS_ARG.to_vec())
            .unwrap_or_else(|| DEFAULT_RECIPIENTS.to_owned());
        let delimiter = retrieve_parsed_arg_value(args, DELIMITER_ARG[1], DELIMITER_ARG.to_vec())?;
        let from = retrieve_arg_value(args, FROM_ARG.to_vec())
            .unwrap_or_else(|| DEFAULT_FROM.to_owned());
        let layout = retrieve_parsed_arg_value(args, LAYOUT_ARG, LAYOUT_ARG)?;

        Ok(Self {
            recipients_path: PathBuf::from(recipients_path),
            delimiter,
            template_path: PathBuf::from(template_path),
            dry_run: has_flag(args, DRY_RUN_ARG),
            dispatch: DispatchSettings::new(from, build_smtp_config(args)?, layout),
        })
    }
}

pub fn is_help_requested(args: &[String]) -> bool {
    has_flag(args, HELP_ARG.to_vec())
}

pub fn usage(program: &str) -> String {
    format!(
        "\nUsage: {program} [OPTIONS] <template>

OPTIONS:
  -l, --recipients=<path>       file containing the list of recipients (default: {DEFAULT_RECIPIENTS})
  -d, --delimiter=<delimiter>   `comma` or `whitespace` (default: comma)
  -f, --from=<email>            sender's email address (default: {DEFAULT_FROM})
  -n, --smtp-host=<hostname>    network hostname of the SMTP server (default: {DEFAULT_SMTP_HOST})
  -p, --smtp-port=<port>        network port of the SMTP server (default: {DEFAULT_SMTP_PORT})
      --smtp-security=<mode>    `starttls`, `tls` or `plain` (default: starttls)
  -u, --smtp-login=<username>   SMTP username for PLAIN authentication
  -s, --smtp-password=<secret>  SMTP password for PLAIN authentication
      --layout=<layout>         `blank-line` or `compact` (default: blank-line)
      --dry-run                 print messages instead of sending them
  -h, --help                    print this help

Option values can be given as `--name=value` or `--name value`.

The template's first `Subject:` line is the subject, the other lines the body.
Both use Tera syntax: `{{{{ name }}}}` and `{{{{ email }}}}` (or `{{{{.Name}}}}`) are replaced
by the recipient's fields. `{{{{`, `{{%` and `{{#` start template tags, wrap literal
text containing them in `{{% raw %}}...{{% endraw %}}`.
"
    )
}

fn retrieve_template_path(args: &[String]) -> Result<String> {
    match retrieve_positional_args(args, &VALUE_ARGS).as_slice() {
        [] => Err(ConfigError::MissingTemplate),
        [template] => Ok((*template).to_owned()),
        templates => Err(ConfigError::TooManyTemplates(
            templates.iter().map(|template| (*template).to_owned()).collect(),
        )),
    }
}

fn build_smtp_config(args: &[String]) -> Result<SmtpConfig> {
    let host = retrieve_arg_value(args, SMTP_HOST_ARG.to_vec())
        .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned());
    let port = match retrieve_arg_value(args, SMTP_PORT_ARG.to_vec()) {
        Some(port) => port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidSmtpPort(port.clone()))?,
        None => DEFAULT_SMTP_PORT,
    };
    let security = retrieve_parsed_arg_value(args, SMTP_SECURITY_ARG, SMTP_SECURITY_ARG)?;
    let credentials = Credentials::from_optional(
        retrieve_arg_value(args, SMTP_LOGIN_ARG.to_vec()),
        retrieve_arg_value(args, SMTP_PASSWORD_ARG.to_vec()),
    );

    Ok(SmtpConfig::new(host, port, security, credentials))
}

/// Parse an optional arg, falling back to the type's default when absent.
fn retrieve_parsed_arg_value<'a, T, A>(
    args: &[String],
    arg: &'static str,
    arg_names: A,
) -> Result<T>
where
    T: FromStr + Default,
    T::Err: Display,
    A: Into<ArgName<'a>>,
{
    match retrieve_arg_value(args, arg_names) {
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidArgValue {
            arg,
            reason: e.to_string(),
        }),
        None => Ok(T::default()),
    }
}
