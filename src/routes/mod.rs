//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three browser-facing routes reproduce the SSO redirect handshake:
//! `/` forwards to login, `/sso/login` issues a ticket to the caller's
//! callback, `/sso/logout` confirms and returns to login. Every response
//! is a full page; navigation happens through `Location` or declarative
//! refresh, never client-side routing.

pub mod home;
pub mod login;
pub mod logout;

use std::time::Duration;

use axum::Router;
use axum::http::header::REFRESH;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::sso::{LOGIN_PATH, LOGOUT_PATH};
use crate::state::AppState;
use crate::views;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route(LOGIN_PATH, get(login::login_page).post(login::login_submit))
        .route(LOGOUT_PATH, get(logout::logout))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a rendered page into a response. A template failure is logged
/// and answered with a bare 500.
pub(crate) fn page(status: StatusCode, rendered: views::RenderResult) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "page render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Attach a `Refresh` header. URLs that cannot be a header value are left
/// to the page's meta refresh.
pub(crate) fn with_refresh(mut response: Response, url: &str, delay: Duration) -> Response {
    match HeaderValue::from_str(&views::refresh_value(url, delay)) {
        Ok(value) => {
            response.headers_mut().insert(REFRESH, value);
        }
        Err(e) => tracing::debug!(error = %e, "refresh target not representable as header"),
    }
    response
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
