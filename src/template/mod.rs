use crate::recipient::Recipient;
use crate::template::error::TemplateError;
use crate::template::error::TemplateError::{CompilationFailed, RenderFailed};
use derive_getters::Getters;
use tera::{Context, Tera};

pub mod compile;
pub mod error;

type Result<T, E = TemplateError> = std::result::Result<T, E>;

const SUBJECT_TEMPLATE: &str = "subject";
const BODY_TEMPLATE: &str = "body";

/// Subject and body templates, compiled once and rendered for every recipient.
pub struct MessageTemplate {
    tera: Tera,
}

/// What a [`MessageTemplate`] produces for a single recipient.
#[derive(Debug, Getters, PartialEq, Eq)]
pub struct RenderedMessage {
    subject: String,
    body: String,
}

impl MessageTemplate {
    pub fn new(subject: &str, body: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(SUBJECT_TEMPLATE, subject)
            .map_err(|source| CompilationFailed {
                template: SUBJECT_TEMPLATE,
                source,
            })?;
        tera.add_raw_template(BODY_TEMPLATE, body)
            .map_err(|source| CompilationFailed {
                template: BODY_TEMPLATE,
                source,
            })?;

        Ok(Self { tera })
    }

    /// Render the subject then the body with the recipient's fields.
    /// Referencing a field a recipient doesn't have is an error.
    pub fn render(&self, recipient: &Recipient) -> Result<RenderedMessage> {
        let context = Context::from_serialize(recipient).map_err(|source| RenderFailed {
            template: SUBJECT_TEMPLATE,
            source,
        })?;
        let subject = self.render_template(SUBJECT_TEMPLATE, &context)?;
        let body = self.render_template(BODY_TEMPLATE, &context)?;

        Ok(RenderedMessage { subject, body })
    }

    fn render_template(&self, template: &'static str, context: &Context) -> Result<String> {
        self.tera
            .render(template, context)
            .map_err(|source| RenderFailed { template, source })
    }
}
