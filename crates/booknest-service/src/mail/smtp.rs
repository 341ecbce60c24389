//! SMTP delivery with lettre

use async_trait::async_trait;
use booknest_common::SmtpConfig;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, instrument};

use super::{ContactMessage, MailError, Mailer};

/// Port for implicit TLS; any other port negotiates STARTTLS
const SMTPS_PORT: u16 = 465;

/// SMTP-backed [`Mailer`]
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from configuration. Does not connect.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let builder = if config.port == SMTPS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };

        let transport = builder.credentials(credentials).port(config.port).build();

        Ok(Self {
            transport,
            from: config.from.parse()?,
            to: config.to.parse()?,
        })
    }

    /// Compose the outgoing mail; replies go to the visitor
    pub fn build_message(&self, contact: &ContactMessage) -> Result<Message, MailError> {
        let reply_to = Mailbox::new(Some(contact.name.clone()), contact.email.parse()?);

        let body = format!(
            "From: {} <{}>\n\n{}\n",
            contact.name, contact.email, contact.message
        );

        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(contact.subject_line())
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        Ok(message)
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[instrument(skip(self, message), fields(reply_to = %message.email))]
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        let email = self.build_message(message)?;
        self.transport.send(email).await?;

        info!("Contact message delivered");
        Ok(())
    }
}
