//! Home route — the redirect dispatcher.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use crate::services::dispatch::{Dispatch, dispatch};
use crate::sso::{RedirectRequest, SsoParams};
use crate::state::AppState;

/// `GET /` — forward to the login page when a `service` is given, else show the landing page.
pub async fn home(State(state): State<AppState>, params: SsoParams) -> Response {
    match dispatch(&RedirectRequest::from_params(&params)) {
        Dispatch::Redirect(url) => Redirect::to(&url).into_response(),
        Dispatch::Landing => super::page(StatusCode::OK, state.views.landing()),
    }
}
