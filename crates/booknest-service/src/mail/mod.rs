//! Outgoing mail
//!
//! Services depend on the [`Mailer`] trait; [`SmtpMailer`] delivers over SMTP.

mod smtp;

use async_trait::async_trait;

pub use smtp::SmtpMailer;

/// A message submitted through the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Subject line for the delivered mail
    pub fn subject_line(&self) -> String {
        match self.subject.as_deref().map(str::trim) {
            Some(subject) if !subject.is_empty() => format!("[BookNest] {subject}"),
            _ => format!("[BookNest] Message from {}", self.name),
        }
    }
}

/// Mail delivery errors
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivers contact messages to the site operators
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError>;
}
