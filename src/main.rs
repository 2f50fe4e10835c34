mod config;
mod dispatch;
mod error;
mod recipient;
mod smtp;
mod template;
mod tools;

#[macro_use]
extern crate log;

use crate::config::{MailMergeConfig, is_help_requested, usage};
use crate::dispatch::dispatch;
use crate::error::{ApplicationError, Result};
use crate::recipient::parse::parse_recipients;
use crate::smtp::transport::{DryRunTransport, SmtpTransport};
use crate::template::compile::compile_template;
use env_logger::Env;
use std::error::Error;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if is_help_requested(&args) {
        let program = args.first().map(String::as_str).unwrap_or("mail-merge");
        println!("{}", usage(program));
        return ExitCode::SUCCESS;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", describe_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<()> {
    let config = MailMergeConfig::from_args(args)?;
    debug!("Running with {config:?}");

    let template = compile_template(config.template_path())?;
    let recipients = parse_recipients(config.recipients_path(), *config.delimiter())?;

    let sent = if *config.dry_run() {
        dispatch(&DryRunTransport, config.dispatch(), &template, &recipients).await?
    } else {
        dispatch(&SmtpTransport, config.dispatch(), &template, &recipients).await?
    };
    info!("{sent} email(s) sent");

    Ok(())
}

/// The error followed by each of its sources, one per line.
fn describe_error(error: &ApplicationError) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(error) = source {
        description.push_str(&format!("\n  caused by: {error}"));
        source = error.source();
    }

    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::tools::test::tests::{resource, write_temp_file};

    fn args(args: &[&str]) -> Vec<String> {
        std::iter::once("mail-merge")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[tokio::test]
    async fn should_run_dry_run() {
        let recipients = format!("-l={}", resource("recipients.csv").display());
        let template = resource("template.txt").display().to_string();

        run(&args(&[recipients.as_str(), "--dry-run", template.as_str()]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_run_with_empty_recipients_list_without_connecting() {
        let recipients = write_temp_file("recipients.csv", "# nobody\n");
        let recipients = format!("-l={}", recipients.display());
        let template = resource("template.txt").display().to_string();

        // Port 1 refuses connections, any send attempt would fail.
        run(&args(&[recipients.as_str(), "-n=127.0.0.1", "-p=1", template.as_str()]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_fail_before_sending_when_template_is_invalid() {
        let template = write_temp_file("template.txt", "Subject: {{ name\n");
        let template = template.display().to_string();

        let error = run(&args(&["-l=does-not-matter.csv", template.as_str()]))
            .await
            .unwrap_err();

        assert!(matches!(error, ApplicationError::Template(_)));
    }

    #[tokio::test]
    async fn should_fail_without_template() {
        let error = run(&args(&[])).await.unwrap_err();

        assert!(matches!(
            error,
            ApplicationError::Config(ConfigError::MissingTemplate)
        ));
    }

    #[test]
    fn should_describe_error_with_its_sources() {
        let error = ApplicationError::from(ConfigError::InvalidSmtpPort("smtp".to_owned()));

        assert_eq!(
            "The command line is invalid.\n  caused by: Invalid SMTP port [value: smtp]",
            describe_error(&error)
        );
    }
}
