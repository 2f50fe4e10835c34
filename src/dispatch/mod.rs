use crate::dispatch::error::DispatchError;
use crate::dispatch::error::DispatchError::{RenderFailed, SendFailed};
use crate::dispatch::message::{MessageLayout, compose_message};
use crate::recipient::Recipient;
use crate::smtp::config::SmtpConfig;
use crate::smtp::transport::MailTransport;
use crate::template::MessageTemplate;
use derive_getters::Getters;

pub mod error;
pub mod message;

type Result<T, E = DispatchError> = std::result::Result<T, E>;

/// Everything shared read-only by all the sends of a run.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct DispatchSettings {
    from: String,
    smtp: SmtpConfig,
    layout: MessageLayout,
}

impl DispatchSettings {
    pub fn new(from: String, smtp: SmtpConfig, layout: MessageLayout) -> Self {
        Self { from, smtp, layout }
    }
}

/// Render and send one message per recipient, in order.
///
/// Stops at the first render or send failure; messages already sent stay sent.
/// Returns how many messages were sent.
pub async fn dispatch<T: MailTransport>(
    transport: &T,
    settings: &DispatchSettings,
    template: &MessageTemplate,
    recipients: &[Recipient],
) -> Result<usize> {
    let mut sent = 0;
    for recipient in recipients {
        let email = recipient.email();
        let rendered = template.render(recipient).map_err(|source| RenderFailed {
            email: email.clone(),
            source,
        })?;
        let message = compose_message(rendered.subject(), rendered.body(), settings.layout);

        transport
            .send(&settings.smtp, &settings.from, email, &message)
            .await
            .map_err(|source| SendFailed {
                email: email.clone(),
                sent,
                source,
            })?;
        sent += 1;
        info!("Email sent: {email}");
    }

    Ok(sent)
}
