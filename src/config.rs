//! Runtime configuration loaded from environment variables.
//!
//! All values have defaults, so the portal starts with an empty
//! environment. Numeric values that fail to parse fall back to their
//! default rather than aborting startup.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3004;

const DEFAULT_ISSUE_DELAY_MS: u64 = 500;
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;
const DEFAULT_LOGOUT_DELAY_MS: u64 = 1000;
const DEFAULT_LOGOUT_REDIRECT_DELAY_MS: u64 = 500;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// PACING
// =============================================================================

/// Fixed delays that simulate authentication latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Busy wait before a ticket is issued.
    pub issue: Duration,
    /// How long the success notice shows before the callback redirect.
    pub notice: Duration,
    /// Busy wait before logout completes.
    pub logout: Duration,
    /// Delay between the logout confirmation and the redirect to login.
    pub logout_redirect: Duration,
}

impl Pacing {
    /// All delays zero. Used by tests and `SSO_INSTANT=true`.
    #[must_use]
    pub const fn instant() -> Self {
        Self { issue: Duration::ZERO, notice: Duration::ZERO, logout: Duration::ZERO, logout_redirect: Duration::ZERO }
    }

    fn from_env() -> Self {
        if env_bool("SSO_INSTANT").unwrap_or(false) {
            return Self::instant();
        }
        Self {
            issue: Duration::from_millis(env_parse("SSO_ISSUE_DELAY_MS", DEFAULT_ISSUE_DELAY_MS)),
            notice: Duration::from_millis(env_parse("SSO_REDIRECT_DELAY_MS", DEFAULT_REDIRECT_DELAY_MS)),
            logout: Duration::from_millis(env_parse("SSO_LOGOUT_DELAY_MS", DEFAULT_LOGOUT_DELAY_MS)),
            logout_redirect: Duration::from_millis(env_parse(
                "SSO_LOGOUT_REDIRECT_DELAY_MS",
                DEFAULT_LOGOUT_REDIRECT_DELAY_MS,
            )),
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            issue: Duration::from_millis(DEFAULT_ISSUE_DELAY_MS),
            notice: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            logout: Duration::from_millis(DEFAULT_LOGOUT_DELAY_MS),
            logout_redirect: Duration::from_millis(DEFAULT_LOGOUT_REDIRECT_DELAY_MS),
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub pacing: Pacing,
}

impl Config {
    /// Read `HOST`, `PORT` and the `SSO_*` delay variables.
    #[must_use]
    pub fn from_env() -> Self {
        let host = std::env::var("HOST")
            .ok()
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());

        Self { host, port: env_parse("PORT", DEFAULT_PORT), pacing: Pacing::from_env() }
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
