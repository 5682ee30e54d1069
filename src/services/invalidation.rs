//! Ticket invalidation — the logout visit.
//!
//! No ticket or session store exists, so invalidation is a delay followed
//! by a decision about where the browser goes next.
//!
//! The busy state is the held request: the logout delay runs before any
//! byte of the response is sent, so the browser keeps showing its own
//! loading indicator and no "Logging out..." page is ever rendered. The
//! only page the user sees is the outcome.

use std::time::Duration;

use tracing::info;

use super::pacer::{Cancelled, Pacer};
use crate::sso::{self, LogoutRequest};

/// Logout outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalidation {
    /// Login page to return to, and after how long. `None` when no service was given.
    pub redirect: Option<(String, Duration)>,
}

/// Wait the logout delay, then decide whether to return to the login page.
///
/// # Errors
///
/// Returns `Cancelled` when shutdown interrupts the delay.
pub async fn invalidate(pacer: &Pacer, request: &LogoutRequest) -> Result<Invalidation, Cancelled> {
    let pacing = pacer.pacing();
    pacer.wait(pacing.logout).await?;

    let redirect = request
        .service
        .as_deref()
        .map(|service| (sso::login_url(service, &request.app_code), pacing.logout_redirect));

    info!(
        app_code = %request.app_code,
        has_ticket = !request.ticket.is_empty(),
        has_service = redirect.is_some(),
        "logout completed"
    );

    Ok(Invalidation { redirect })
}

#[cfg(test)]
#[path = "invalidation_test.rs"]
mod tests;
