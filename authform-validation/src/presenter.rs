// What a presentation layer should do with a report
//
// Nothing here touches markup. The types describe the decision (submit or
// block, which banner, which input type) and leave rendering to the caller.

use crate::{FormKind, FormValidationReport, ValidationResult};

/// Whether a submission may go ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit; show `loading_label` on the disabled button.
    Proceed { loading_label: &'static str },
    /// Cancel the submission and show these messages next to their fields.
    Block { errors: Vec<ValidationResult> },
}

impl SubmitDecision {
    /// The sign-in form shows a single alert at a time, so only its first
    /// failure is surfaced. Other forms flag every failing field.
    pub fn from_report(kind: FormKind, report: &FormValidationReport) -> Self {
        if report.form_valid() {
            return SubmitDecision::Proceed {
                loading_label: loading_label(kind),
            };
        }

        let errors = match kind {
            FormKind::Login => report.first_failure().cloned().into_iter().collect(),
            FormKind::Registration | FormKind::ChangePassword => {
                report.failures().cloned().collect()
            }
        };
        SubmitDecision::Block { errors }
    }

    pub fn allows_submit(&self) -> bool {
        matches!(self, SubmitDecision::Proceed { .. })
    }
}

/// Text shown on the submit button while the request is in flight.
pub fn loading_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Signing in...",
        FormKind::Registration => "Registering...",
        FormKind::ChangePassword => "Updating password...",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Danger,
    Success,
}

/// Page-level message driven by the server's redirect query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: BannerKind,
    pub message: &'static str,
}

impl StatusBanner {
    pub const INVALID_CREDENTIALS: StatusBanner = StatusBanner {
        kind: BannerKind::Danger,
        message: "Invalid username or password. Please try again.",
    };

    pub const LOGGED_OUT: StatusBanner = StatusBanner {
        kind: BannerKind::Success,
        message: "You have been logged out successfully.",
    };

    /// Banners for a sign-in page query such as `?error=true` or `?logout=1`.
    ///
    /// Keys and values are form-urlencoded. A banner needs a non-empty value
    /// on the first occurrence of its key, so `?error` and `?error=` show
    /// nothing. The error banner comes first when both are present.
    pub fn from_query(query: &str) -> Vec<StatusBanner> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut banners = Vec::new();
        if query_param(query, "error").is_some_and(|v| !v.is_empty()) {
            banners.push(Self::INVALID_CREDENTIALS);
        }
        if query_param(query, "logout").is_some_and(|v| !v.is_empty()) {
            banners.push(Self::LOGGED_OUT);
        }
        banners
    }
}

/// Decoded value of the first `wanted` pair in `query`.
fn query_param(query: &str, wanted: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == wanted)
        .map(|(_, value)| decode_component(value))
}

// `+` stands for a space in form-urlencoded text. Malformed escapes are kept
// as written.
fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

/// Show/hide state of a password input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Hidden,
    Visible,
}

impl PasswordVisibility {
    pub fn toggle(self) -> Self {
        match self {
            PasswordVisibility::Hidden => PasswordVisibility::Visible,
            PasswordVisibility::Visible => PasswordVisibility::Hidden,
        }
    }

    /// Value for the input's `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "password",
            PasswordVisibility::Visible => "text",
        }
    }

    /// Icon class on the toggle button.
    pub fn icon_class(self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "fa-eye",
            PasswordVisibility::Visible => "fa-eye-slash",
        }
    }
}
