//! Server-rendered HTML pages.
//!
//! DESIGN
//! ======
//! Pages are `minijinja` templates compiled into the binary and parsed
//! once at startup. Template names end in `.html`, which turns on HTML
//! auto-escaping for every interpolated value. Each page extends
//! `base.html` and receives a shared frame (title, tone, stylesheet tones,
//! optional refresh) with its own fields nested under `page`.
//!
//! Delayed navigation uses declarative refresh, which only has
//! whole-second resolution, so delays are rounded up to the next second.

pub mod ui;

use std::sync::Arc;
use std::time::Duration;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::services::issuance::{self, FieldErrors, Issuance, LoginForm};
use crate::sso::{self, LOGIN_PATH, LOGOUT_PATH, RedirectRequest};
use ui::{Notice, NoticeView, Style, Tone};

const TEMPLATES: [(&str, &str); 7] = [
    ("base.html", include_str!("templates/base.html")),
    ("notice.html", include_str!("templates/notice.html")),
    ("landing.html", include_str!("templates/landing.html")),
    ("login.html", include_str!("templates/login.html")),
    ("success.html", include_str!("templates/success.html")),
    ("logout.html", include_str!("templates/logout.html")),
    ("unavailable.html", include_str!("templates/unavailable.html")),
];

pub type RenderResult = Result<String, minijinja::Error>;

/// Whole seconds for a declarative refresh, rounded up.
#[must_use]
pub fn refresh_secs(delay: Duration) -> u64 {
    let secs = delay.as_secs();
    if delay.subsec_nanos() > 0 { secs + 1 } else { secs }
}

/// Value for a `Refresh` header or meta tag: `<secs>; url=<url>`.
#[must_use]
pub fn refresh_value(url: &str, delay: Duration) -> String {
    format!("{}; url={url}", refresh_secs(delay))
}

/// Form action that carries the captured parameters back on submit.
#[must_use]
pub fn login_action(request: &RedirectRequest) -> String {
    match &request.service {
        Some(service) => sso::login_url(service, &request.app_code),
        None => format!("{LOGIN_PATH}?appCode={}", urlencoding::encode(&request.app_code)),
    }
}

// =============================================================================
// PAGE FRAME
// =============================================================================

/// Fields every page passes to `base.html`; page-specific values live under `page`.
#[derive(Serialize)]
struct Frame<'a, T: Serialize> {
    title: &'a str,
    tone: Style,
    wide: bool,
    refresh: Option<String>,
    tones: [Style; 4],
    muted: Style,
    page: T,
}

// =============================================================================
// VIEWS
// =============================================================================

/// Parsed template set. Cheap to clone.
#[derive(Clone)]
pub struct Views {
    env: Arc<Environment<'static>>,
}

impl Views {
    /// Parse all page templates.
    ///
    /// # Errors
    ///
    /// Returns the first template syntax error.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    fn render<T: Serialize>(
        &self,
        name: &str,
        title: &str,
        tone: Tone,
        refresh: Option<(&str, Duration)>,
        page: T,
    ) -> RenderResult {
        let frame = Frame {
            title,
            tone: tone.style(),
            wide: name == "landing.html",
            refresh: refresh.map(|(url, delay)| refresh_value(url, delay)),
            tones: Tone::all_styles(),
            muted: Tone::Muted.style(),
            page,
        };
        self.env.get_template(name)?.render(frame)
    }

    pub fn landing(&self) -> RenderResult {
        let page = context! {
            login_path => LOGIN_PATH,
            logout_path => LOGOUT_PATH,
            default_app_code => sso::DEFAULT_APP_CODE,
        };
        self.render("landing.html", "Mock SSO Portal", Tone::Primary, None, page)
    }

    /// Login form, optionally with inline field errors and a top-level notice.
    /// The secret is never echoed back.
    pub fn login_form(
        &self,
        request: &RedirectRequest,
        form: &LoginForm,
        errors: FieldErrors,
        notice: Option<&Notice>,
    ) -> RenderResult {
        let page = context! {
            action => login_action(request),
            username => &form.username,
            errors => errors,
            notice => notice.map(NoticeView::from),
            button => Tone::Primary.style(),
        };
        self.render("login.html", "Login", Tone::Primary, None, page)
    }

    /// Success notice that navigates to the callback once the notice delay passes.
    pub fn login_success(&self, issuance: &Issuance) -> RenderResult {
        let notice = Notice::success(issuance::ISSUED_NOTICE);
        let page = context! {
            notice => NoticeView::from(&notice),
            url => &issuance.callback_url,
        };
        let refresh = Some((issuance.callback_url.as_str(), issuance.redirect_after));
        self.render("success.html", "Login", Tone::Success, refresh, page)
    }

    /// Logged-out confirmation, with a pending return to login when a service was given.
    pub fn logout_done(&self, redirect: Option<(&str, Duration)>) -> RenderResult {
        let subtitle = if redirect.is_some() {
            "Redirecting to the login page..."
        } else {
            "You have been signed out."
        };
        self.render("logout.html", "Logged out", Tone::Success, redirect, context! { subtitle })
    }

    /// Shown when a pending simulated delay is cut short by shutdown.
    pub fn unavailable(&self) -> RenderResult {
        let notice = Notice::error("The portal is shutting down. Please retry.");
        let page = context! { notice => NoticeView::from(&notice) };
        self.render("unavailable.html", "Unavailable", Tone::Danger, None, page)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
