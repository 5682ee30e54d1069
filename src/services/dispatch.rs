//! Dispatcher — forwards callers that arrive at `/` with a `service` to the login page.

use crate::sso::{self, RedirectRequest};

/// What the home route should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Full-page redirect to the login URL.
    Redirect(String),
    /// No service supplied: show the landing page.
    Landing,
}

/// Decide the home route's response. Pure: the same request always yields the same target.
#[must_use]
pub fn dispatch(request: &RedirectRequest) -> Dispatch {
    match &request.service {
        Some(service) => Dispatch::Redirect(sso::login_url(service, &request.app_code)),
        None => Dispatch::Landing,
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
