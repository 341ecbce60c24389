//! Contact form service

use tracing::{error, info, instrument};

use crate::dto::ContactRequest;
use crate::mail::ContactMessage;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Contact form service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Forward a contact form submission to the site inbox
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn send_contact_message(&self, request: ContactRequest) -> ServiceResult<()> {
        let Some(mailer) = self.ctx.mailer() else {
            return Err(ServiceError::unavailable("contact form is not configured"));
        };

        let message = ContactMessage {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            subject: request
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: request.message,
        };

        if message.name.is_empty() || message.message.trim().is_empty() {
            return Err(ServiceError::validation("name and message are required"));
        }

        mailer.send_contact(&message).await.map_err(|e| {
            error!(error = %e, "Failed to deliver contact message");
            ServiceError::from(e)
        })?;

        info!("Contact message delivered");
        Ok(())
    }
}
