//! Contact form handler

use axum::extract::State;
use booknest_service::dto::ContactRequest;
use booknest_service::ContactService;

use crate::extractors::ValidatedJson;
use crate::response::{Accepted, ApiResult};
use crate::state::AppState;

/// Forward a message to the site inbox
///
/// POST /contact
pub async fn send_contact_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> ApiResult<Accepted> {
    let service = ContactService::new(state.service_context());
    service.send_contact_message(request).await?;
    Ok(Accepted)
}
