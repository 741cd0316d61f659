//! Use case outputs

use crate::domain::value_object::{email::Email, route::Route, toast::Toast};

/// Result of a successful form submit
#[derive(Debug, Clone, Default)]
pub struct FlowOutcome {
    pub toast: Option<Toast>,
    pub redirect: Option<Route>,
}

impl FlowOutcome {
    pub fn navigate(toast: Toast, to: Route) -> Self {
        Self {
            toast: Some(toast),
            redirect: Some(to),
        }
    }

    /// Stay on the page, show nothing
    pub fn stay() -> Self {
        Self::default()
    }
}

/// Result of a successful resend
#[derive(Debug, Clone)]
pub struct ResendOutcome {
    pub toast: Toast,
    pub cooldown_secs: u32,
}

/// Data for the verification page
#[derive(Debug, Clone)]
pub struct VerifyEmailView {
    pub email: Email,
    pub resend_available: bool,
    pub cooldown_secs: u32,
}
