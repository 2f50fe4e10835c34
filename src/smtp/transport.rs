use crate::smtp::Result;
use crate::smtp::config::{Security, SmtpConfig};
use crate::smtp::error::SmtpError::{CantConnectToSmtpServer, CantSendMessage};
use crate::tools::{log_message, log_message_and_return};
use mail_send::smtp::message::Message;
use mail_send::{SmtpClient, SmtpClientBuilder};
use tokio::io::{AsyncRead, AsyncWrite};

/// Delivers one already composed message to one recipient.
#[allow(async_fn_in_trait)]
pub trait MailTransport {
    async fn send(&self, smtp: &SmtpConfig, from: &str, to: &str, message: &[u8]) -> Result<()>;
}

/// Opens a connection per message with `mail-send`.
#[derive(Debug, Default)]
pub struct SmtpTransport;

impl MailTransport for SmtpTransport {
    async fn send(&self, smtp: &SmtpConfig, from: &str, to: &str, message: &[u8]) -> Result<()> {
        let mut builder = SmtpClientBuilder::new(smtp.host().clone(), *smtp.port())
            .implicit_tls(*smtp.security() == Security::Tls);
        if let Some(credentials) = smtp.credentials() {
            builder =
                builder.credentials((credentials.login().clone(), credentials.password().clone()));
        }
        let message = Message::new(from, [to], message);

        let connection_failed = log_message_and_return(
            "Couldn't connect to SMTP server",
            CantConnectToSmtpServer(smtp.address()),
        );
        match smtp.security() {
            Security::Plain => {
                let client = builder.connect_plain().await.map_err(connection_failed)?;
                send_and_quit(client, message, to).await
            }
            Security::StartTls | Security::Tls => {
                let client = builder.connect().await.map_err(connection_failed)?;
                send_and_quit(client, message, to).await
            }
        }
    }
}

async fn send_and_quit<T>(mut client: SmtpClient<T>, message: Message<'_>, to: &str) -> Result<()>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    client
        .send(message)
        .await
        .map_err(log_message_and_return(
            "Couldn't send message",
            CantSendMessage(to.to_owned()),
        ))?;
    // The message is accepted at this point.
    if let Err(error) = client.quit().await {
        log_message("Couldn't close SMTP session")(error);
    }

    Ok(())
}

/// Prints messages on stdout instead of sending them.
#[derive(Debug, Default)]
pub struct DryRunTransport;

impl MailTransport for DryRunTransport {
    async fn send(&self, smtp: &SmtpConfig, from: &str, to: &str, message: &[u8]) -> Result<()> {
        println!(
            "--- Dry run [server: {}, from: {from}, to: {to}]\n{}",
            smtp.address(),
            String::from_utf8_lossy(message)
        );
        Ok(())
    }
}
