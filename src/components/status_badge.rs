use leptos::prelude::*;

/// Outcome of one API status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckStatus {
    pub fn from_flag(ok: bool) -> Self {
        if ok {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }

    fn icon_and_class(self) -> (&'static str, &'static str) {
        match self {
            CheckStatus::Pass => ("bi-check-circle-fill", "status-badge text-success"),
            CheckStatus::Warn => ("bi-exclamation-circle-fill", "status-badge text-warning"),
            CheckStatus::Fail => ("bi-x-circle-fill", "status-badge text-danger"),
        }
    }
}

#[component]
pub fn StatusBadge(
    /// What was checked, e.g. "Scoring API"
    #[prop(into)]
    label: String,
    status: CheckStatus,
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    let (icon, class) = status.icon_and_class();

    view! {
        <li class="list-group-item d-flex align-items-center gap-2">
            <i class=format!("bi {} {}", icon, class)></i>
            <span class="fw-semibold">{label}</span>
            <span class="ms-auto text-muted">{detail.unwrap_or_default()}</span>
        </li>
    }
}
