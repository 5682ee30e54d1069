use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_SSO_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_SSO_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    let key = "__TEST_SSO_EB_CI_311__";
    unsafe { std::env::set_var(key, "  YES ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_SSO_EB_INVALID_312__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_SSO_EB_SURELY_UNSET_313__"), None);
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_reads_value() {
    let key = "__TEST_SSO_EP_OK_321__";
    unsafe { std::env::set_var(key, "750") };
    assert_eq!(env_parse(key, 500_u64), 750);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_garbage_falls_back() {
    let key = "__TEST_SSO_EP_BAD_322__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse(key, 500_u64), 500);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_unset_falls_back() {
    assert_eq!(env_parse("__TEST_SSO_EP_UNSET_323__", 3004_u16), 3004);
}

// =============================================================================
// Pacing / Config
// =============================================================================

#[test]
fn pacing_default_matches_portal_timings() {
    let pacing = Pacing::default();
    assert_eq!(pacing.issue, Duration::from_millis(500));
    assert_eq!(pacing.notice, Duration::from_millis(1000));
    assert_eq!(pacing.logout, Duration::from_millis(1000));
    assert_eq!(pacing.logout_redirect, Duration::from_millis(500));
}

#[test]
fn pacing_instant_is_all_zero() {
    let pacing = Pacing::instant();
    assert!(pacing.issue.is_zero());
    assert!(pacing.notice.is_zero());
    assert!(pacing.logout.is_zero());
    assert!(pacing.logout_redirect.is_zero());
}

#[test]
fn bind_addr_joins_host_and_port() {
    let config = Config { host: "127.0.0.1".into(), port: 8080, pacing: Pacing::instant() };
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}
