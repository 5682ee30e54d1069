//! SSO request model and redirect URL construction.
//!
//! DESIGN
//! ======
//! Every value the portal works with arrives in the query string or the
//! login form and is gone once the response is sent. Nothing here is
//! stored, signed, or checked against a directory.
//!
//! TRADE-OFFS
//! ==========
//! The ticket is the submitted identifier echoed back, and `service` is
//! used as a redirect target without validation. This is a development
//! stand-in, not an authentication contract. Extending it into one needs
//! real ticket issuance and verification.

use axum::extract::{FromRequestParts, Query};
use axum::extract::rejection::QueryRejection;
use axum::http::Uri;
use axum::http::request::Parts;

/// App code substituted when the caller omits `appCode`.
pub const DEFAULT_APP_CODE: &str = "NET_VISION";

/// Path of the ticket issuance (login) page.
pub const LOGIN_PATH: &str = "/sso/login";

/// Path of the ticket invalidation (logout) page.
pub const LOGOUT_PATH: &str = "/sso/logout";

// =============================================================================
// RAW QUERY PARAMETERS
// =============================================================================

/// Query parameters as they appear on the wire.
///
/// A key may repeat in a URL; the first occurrence wins and later ones
/// are ignored. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsoParams {
    pub service: Option<String>,
    pub app_code: Option<String>,
    pub ticket: Option<String>,
}

impl SsoParams {
    /// Fold decoded `key=value` pairs, keeping the first value per key.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "service" => &mut params.service,
                "appCode" => &mut params.app_code,
                "ticket" => &mut params.ticket,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Parse the query string of `uri`.
    ///
    /// # Errors
    ///
    /// Returns the query rejection when the string is not valid URL encoding.
    pub fn try_from_uri(uri: &Uri) -> Result<Self, QueryRejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)?;
        Ok(Self::from_pairs(pairs))
    }
}

impl<S> FromRequestParts<S> for SsoParams
where
    S: Send + Sync,
{
    type Rejection = QueryRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::try_from_uri(&parts.uri)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

fn app_code_or_default(value: Option<&str>) -> String {
    non_empty(value).unwrap_or_else(|| DEFAULT_APP_CODE.to_owned())
}

/// Strip every trailing `/` from a service URL.
#[must_use]
pub fn strip_trailing_slashes(service: &str) -> &str {
    service.trim_end_matches('/')
}

// =============================================================================
// REDIRECT REQUEST
// =============================================================================

/// Where to send the browser after a login, and on behalf of which app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRequest {
    /// Callback URL. `None` when the parameter was absent or empty.
    pub service: Option<String>,
    pub app_code: String,
}

impl RedirectRequest {
    /// Build from query parameters, carrying `service` unchanged.
    #[must_use]
    pub fn from_params(params: &SsoParams) -> Self {
        Self {
            service: non_empty(params.service.as_deref()),
            app_code: app_code_or_default(params.app_code.as_deref()),
        }
    }

    /// Build from query parameters as the login page captures them:
    /// trailing slashes are stripped from `service`.
    #[must_use]
    pub fn for_login(params: &SsoParams) -> Self {
        let service = params
            .service
            .as_deref()
            .map(strip_trailing_slashes)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Self { service, app_code: app_code_or_default(params.app_code.as_deref()) }
    }
}

// =============================================================================
// LOGOUT REQUEST
// =============================================================================

/// Parameters of a logout visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutRequest {
    /// Ticket being invalidated. Carried for logging only; no store is consulted.
    pub ticket: String,
    pub service: Option<String>,
    pub app_code: String,
}

impl LogoutRequest {
    #[must_use]
    pub fn from_params(params: &SsoParams) -> Self {
        Self {
            ticket: params.ticket.clone().unwrap_or_default(),
            service: non_empty(params.service.as_deref()),
            app_code: app_code_or_default(params.app_code.as_deref()),
        }
    }
}

// =============================================================================
// TICKET
// =============================================================================

/// Mock login credential: the identifier the user typed, verbatim.
///
/// It has no expiry and no signature, and no server-side record exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket(String);

impl Ticket {
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        Self(identifier.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// URL CONSTRUCTION
// =============================================================================

/// `/sso/login?service=<service>&appCode=<app_code>`, both percent-encoded.
///
/// Everything except `A-Z a-z 0-9 - _ . ~` is encoded, which includes
/// `! ' ( ) *`. Browsers' `encodeURIComponent` leaves those five as-is, so
/// targets are equal after decoding, not necessarily byte for byte.
#[must_use]
pub fn login_url(service: &str, app_code: &str) -> String {
    format!(
        "{LOGIN_PATH}?service={}&appCode={}",
        urlencoding::encode(service),
        urlencoding::encode(app_code)
    )
}

/// `<service without trailing slashes>?ticket=<ticket>`.
///
/// The ticket is percent-encoded so an identifier containing `&`, `#` or
/// spaces arrives intact; the callback decodes it back to the identifier
/// exactly as typed.
#[must_use]
pub fn callback_url(service: &str, ticket: &Ticket) -> String {
    format!("{}?ticket={}", strip_trailing_slashes(service), urlencoding::encode(ticket.as_str()))
}

#[cfg(test)]
#[path = "sso_test.rs"]
mod tests;
