//! Visual variants as a closed set.
//!
//! Call sites pick a `Tone`; the mapping to concrete style lives only here.
//! The page stylesheet is generated from `Tone::ALL`, so every class a
//! template can reference has a rule.

use serde::Serialize;

/// Fixed style descriptor for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    /// CSS class applied to the element.
    pub class: &'static str,
    /// Accent color used for headings, borders and secondary text.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Danger,
    /// Secondary text such as page subtitles.
    Muted,
}

impl Tone {
    pub const ALL: [Self; 4] = [Self::Primary, Self::Success, Self::Danger, Self::Muted];

    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Primary => Style { class: "tone-primary", accent: "#1890ff" },
            Self::Success => Style { class: "tone-success", accent: "#52c41a" },
            Self::Danger => Style { class: "tone-danger", accent: "#ff4d4f" },
            Self::Muted => Style { class: "tone-muted", accent: "#8c8c8c" },
        }
    }

    /// Styles for every tone, in declaration order.
    #[must_use]
    pub fn all_styles() -> [Style; 4] {
        Self::ALL.map(Self::style)
    }
}

/// Transient top-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { tone: Tone::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { tone: Tone::Danger, message: message.into() }
    }
}

/// What a template sees of a notice.
#[derive(Debug, Serialize)]
pub(crate) struct NoticeView<'a> {
    class: &'static str,
    message: &'a str,
}

impl<'a> From<&'a Notice> for NoticeView<'a> {
    fn from(notice: &'a Notice) -> Self {
        Self { class: notice.tone.style().class, message: &notice.message }
    }
}
