//! Login routes — render the form, issue the mock ticket.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::services::issuance::{self, FieldErrors, IssueError, LoginForm};
use crate::sso::{RedirectRequest, SsoParams};
use crate::state::AppState;
use crate::views::ui::Notice;

pub(crate) fn issue_error_status(err: &IssueError) -> StatusCode {
    match err {
        IssueError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        IssueError::MissingService => StatusCode::BAD_REQUEST,
        IssueError::Cancelled(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// `GET /sso/login` — empty login form bound to the captured `service`/`appCode`.
pub async fn login_page(State(state): State<AppState>, params: SsoParams) -> Response {
    let request = RedirectRequest::for_login(&params);
    let rendered = state.views.login_form(&request, &LoginForm::default(), FieldErrors::default(), None);
    super::page(StatusCode::OK, rendered)
}

/// `POST /sso/login` — validate, wait, and send the browser to the callback with its ticket.
pub async fn login_submit(State(state): State<AppState>, params: SsoParams, Form(form): Form<LoginForm>) -> Response {
    let request = RedirectRequest::for_login(&params);
    let views = &state.views;

    match issuance::issue(&state.pacer, &request, &form).await {
        Ok(issued) => {
            tracing::debug!(ticket = %issued.ticket, url = %issued.callback_url, "redirecting to callback");
            let response = super::page(StatusCode::OK, views.login_success(&issued));
            super::with_refresh(response, &issued.callback_url, issued.redirect_after)
        }
        Err(err) => {
            let status = issue_error_status(&err);
            let rendered = match err {
                IssueError::Invalid(errors) => views.login_form(&request, &form, errors, None),
                IssueError::MissingService => {
                    let notice = Notice::error(issuance::MISSING_SERVICE);
                    views.login_form(&request, &form, FieldErrors::default(), Some(&notice))
                }
                IssueError::Cancelled(e) => {
                    tracing::warn!(error = %e, "login interrupted");
                    views.unavailable()
                }
            };
            super::page(status, rendered)
        }
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
