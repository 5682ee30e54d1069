//! Logout route — confirm sign-out and return to login when a service is given.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::services::invalidation;
use crate::sso::{LogoutRequest, SsoParams};
use crate::state::AppState;

/// `GET /sso/logout`
pub async fn logout(State(state): State<AppState>, params: SsoParams) -> Response {
    let request = LogoutRequest::from_params(&params);

    match invalidation::invalidate(&state.pacer, &request).await {
        Ok(done) => match done.redirect {
            Some((url, delay)) => {
                let response = super::page(StatusCode::OK, state.views.logout_done(Some((&url, delay))));
                super::with_refresh(response, &url, delay)
            }
            None => super::page(StatusCode::OK, state.views.logout_done(None)),
        },
        Err(e) => {
            tracing::warn!(error = %e, "logout interrupted");
            super::page(StatusCode::SERVICE_UNAVAILABLE, state.views.unavailable())
        }
    }
}

#[cfg(test)]
#[path = "logout_test.rs"]
mod tests;
