use super::*;

fn params(service: Option<&str>, app_code: Option<&str>, ticket: Option<&str>) -> SsoParams {
    SsoParams {
        service: service.map(str::to_owned),
        app_code: app_code.map(str::to_owned),
        ticket: ticket.map(str::to_owned),
    }
}

// =============================================================================
// RedirectRequest
// =============================================================================

#[test]
fn redirect_request_defaults_app_code() {
    let req = RedirectRequest::from_params(&params(Some("https://a.test"), None, None));
    assert_eq!(req.app_code, DEFAULT_APP_CODE);
    assert_eq!(req.service.as_deref(), Some("https://a.test"));
}

#[test]
fn redirect_request_empty_app_code_uses_default() {
    let req = RedirectRequest::from_params(&params(Some("https://a.test"), Some(""), None));
    assert_eq!(req.app_code, "NET_VISION");
}

#[test]
fn redirect_request_empty_service_is_absent() {
    let req = RedirectRequest::from_params(&params(Some(""), Some("APP"), None));
    assert!(req.service.is_none());
    assert_eq!(req.app_code, "APP");
}

#[test]
fn redirect_request_keeps_trailing_slash_outside_login() {
    let req = RedirectRequest::from_params(&params(Some("https://a.test/cb/"), None, None));
    assert_eq!(req.service.as_deref(), Some("https://a.test/cb/"));
}

#[test]
fn login_request_strips_trailing_slashes() {
    let req = RedirectRequest::for_login(&params(Some("https://a.test/cb///"), None, None));
    assert_eq!(req.service.as_deref(), Some("https://a.test/cb"));
}

#[test]
fn login_request_all_slashes_is_absent() {
    let req = RedirectRequest::for_login(&params(Some("///"), None, None));
    assert!(req.service.is_none());
}

// =============================================================================
// LogoutRequest
// =============================================================================

#[test]
fn logout_request_parses_all_fields() {
    let req = LogoutRequest::from_params(&params(Some("https://a.test"), Some("HR"), Some("abc")));
    assert_eq!(req.ticket, "abc");
    assert_eq!(req.service.as_deref(), Some("https://a.test"));
    assert_eq!(req.app_code, "HR");
}

#[test]
fn logout_request_missing_fields() {
    let req = LogoutRequest::from_params(&SsoParams::default());
    assert_eq!(req.ticket, "");
    assert!(req.service.is_none());
    assert_eq!(req.app_code, "NET_VISION");
}

// =============================================================================
// URL construction
// =============================================================================

#[test]
fn login_url_percent_encodes_service() {
    assert_eq!(
        login_url("https://example.com", DEFAULT_APP_CODE),
        "/sso/login?service=https%3A%2F%2Fexample.com&appCode=NET_VISION"
    );
}

#[test]
fn login_url_encodes_query_in_service() {
    assert_eq!(
        login_url("https://a.test/cb?x=1&y=2", "A B"),
        "/sso/login?service=https%3A%2F%2Fa.test%2Fcb%3Fx%3D1%26y%3D2&appCode=A%20B"
    );
}

#[test]
fn callback_url_strips_trailing_slash() {
    let ticket = Ticket::from_identifier("user1");
    assert_eq!(callback_url("https://example.com/cb/", &ticket), "https://example.com/cb?ticket=user1");
}

#[test]
fn callback_url_encodes_ticket() {
    let ticket = Ticket::from_identifier("a b&c");
    assert_eq!(callback_url("https://example.com", &ticket), "https://example.com?ticket=a%20b%26c");
}

#[test]
fn ticket_is_identifier_verbatim() {
    let ticket = Ticket::from_identifier("  Mixed.Case  ");
    assert_eq!(ticket.as_str(), "  Mixed.Case  ");
    assert_eq!(ticket.to_string(), "  Mixed.Case  ");
}

#[test]
fn strip_trailing_slashes_leaves_inner_slashes() {
    assert_eq!(strip_trailing_slashes("https://a.test/x/y//"), "https://a.test/x/y");
    assert_eq!(strip_trailing_slashes("no-slash"), "no-slash");
}

#[test]
fn params_deserialize_app_code_camel_case() {
    let raw: SsoParams = parse_query("service=https%3A%2F%2Fa.test&appCode=HR");
    assert_eq!(raw.service.as_deref(), Some("https://a.test"));
    assert_eq!(raw.app_code.as_deref(), Some("HR"));
    assert!(raw.ticket.is_none());
}

#[test]
fn params_repeated_key_keeps_first_value() {
    let raw = parse_query("service=https%3A%2F%2Fa.test&service=https%3A%2F%2Fb.test&appCode=A&appCode=B");
    assert_eq!(raw.service.as_deref(), Some("https://a.test"));
    assert_eq!(raw.app_code.as_deref(), Some("A"));
}

#[test]
fn params_repeated_empty_first_value_still_wins() {
    let raw = parse_query("service=&service=https%3A%2F%2Fb.test");
    assert_eq!(raw.service.as_deref(), Some(""));
    assert!(RedirectRequest::from_params(&raw).service.is_none());
}

#[test]
fn params_ignore_unknown_keys_and_missing_query() {
    assert_eq!(parse_query("foo=bar&ticket=t1").ticket.as_deref(), Some("t1"));
    let uri: axum::http::Uri = "/".parse().unwrap();
    assert_eq!(SsoParams::try_from_uri(&uri).unwrap(), SsoParams::default());
}

#[test]
fn login_url_encodes_reserved_marks_and_decodes_back() {
    let service = "https://a.test/it's(1)*!";
    let url = login_url(service, "APP");
    assert!(url.contains("it%27s%281%29%2A%21"));
    let raw = SsoParams::try_from_uri(&url.parse().unwrap()).unwrap();
    assert_eq!(raw.service.as_deref(), Some(service));
}

fn parse_query(query: &str) -> SsoParams {
    let uri: axum::http::Uri = format!("/?{query}").parse().unwrap();
    SsoParams::try_from_uri(&uri).unwrap()
}
