//! Ticket issuance — the login form submission.
//!
//! DESIGN
//! ======
//! Field validation is presence-only and runs before anything else, so an
//! incomplete form is rejected without a delay. A complete form without a
//! captured `service` is rejected next. Only then does the flow wait the
//! issue delay and mint the ticket, which is the identifier verbatim.
//!
//! The notice delay is not awaited here: it travels with the result so
//! the response can schedule the browser's navigation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::pacer::{Cancelled, Pacer};
use crate::sso::{self, RedirectRequest, Ticket};

pub const IDENTIFIER_REQUIRED: &str = "Enter a ticket!";
pub const SECRET_REQUIRED: &str = "Enter a password!";
pub const MISSING_SERVICE: &str = "Error: no service URL!";
pub const ISSUED_NOTICE: &str = "Login successful! Redirecting...";

// =============================================================================
// FORM STATE
// =============================================================================

/// Submitted login form. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Inline validation messages, one slot per form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub identifier: Option<&'static str>,
    pub secret: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifier.is_none() && self.secret.is_none()
    }
}

impl LoginForm {
    /// Presence check for both fields.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            identifier: self.username.is_empty().then_some(IDENTIFIER_REQUIRED),
            secret: self.password.is_empty().then_some(SECRET_REQUIRED),
        }
    }
}

// =============================================================================
// RESULT / ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error("required fields missing")]
    Invalid(FieldErrors),
    #[error("no service URL to redirect to")]
    MissingService,
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// A ticket and where to deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issuance {
    pub ticket: Ticket,
    pub callback_url: String,
    /// How long the success notice shows before navigating to `callback_url`.
    pub redirect_after: Duration,
}

// =============================================================================
// ISSUE
// =============================================================================

/// Validate the form, wait the issue delay, and mint a ticket.
///
/// # Errors
///
/// `Invalid` for empty fields, `MissingService` when the page was opened
/// without a `service`, `Cancelled` when shutdown interrupts the delay.
pub async fn issue(pacer: &Pacer, request: &RedirectRequest, form: &LoginForm) -> Result<Issuance, IssueError> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(IssueError::Invalid(errors));
    }

    let Some(service) = request.service.as_deref() else {
        warn!(app_code = %request.app_code, "login submitted without service");
        return Err(IssueError::MissingService);
    };

    let pacing = pacer.pacing();
    pacer.wait(pacing.issue).await?;

    let ticket = Ticket::from_identifier(&form.username);
    let callback_url = sso::callback_url(service, &ticket);
    info!(app_code = %request.app_code, %service, "ticket issued");

    Ok(Issuance { ticket, callback_url, redirect_after: pacing.notice })
}

#[cfg(test)]
#[path = "issuance_test.rs"]
mod tests;
