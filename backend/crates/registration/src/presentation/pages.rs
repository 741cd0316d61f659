//! Page views
//!
//! JSON descriptors for each page of the flow. Every page carries the same
//! header and footer chrome.

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::application::VerifyEmailView;
use crate::domain::value_object::route::Route;

pub const BRAND: &str = "Zink Bank";

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: Route,
    /// Rendered as a link but no page exists behind it
    pub inert: bool,
}

const fn link(label: &'static str, href: Route) -> Link {
    Link {
        label,
        href,
        inert: !href.is_served(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub brand: Link,
    pub nav: Vec<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub copyright: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Chrome {
    pub header: Header,
    pub footer: Footer,
}

impl Chrome {
    pub fn for_year(year: i32) -> Self {
        Self {
            header: Header {
                brand: link(BRAND, Route::Landing),
                nav: vec![link("Home", Route::Landing), link("Sign in", Route::Login)],
            },
            footer: Footer {
                copyright: format!("© {year} {BRAND}. All rights reserved."),
                links: vec![
                    link("About", Route::About),
                    link("Terms of use", Route::Terms),
                    link("Privacy policy", Route::Privacy),
                ],
            },
        }
    }

    pub fn current() -> Self {
        Self::for_year(Utc::now().year())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub placeholder: &'static str,
}

const fn field(
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> Field {
    Field {
        name,
        label,
        kind,
        placeholder,
    }
}

/// Form page descriptor
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPage {
    pub title: &'static str,
    pub fields: Vec<Field>,
    pub submit_label: &'static str,
    pub links: Vec<Link>,
    pub chrome: Chrome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub title: String,
    pub tagline: &'static str,
    pub actions: Vec<Link>,
    pub chrome: Chrome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailPage {
    pub title: &'static str,
    pub email: String,
    pub fields: Vec<Field>,
    pub resend_available: bool,
    pub cooldown_seconds: u32,
    pub chrome: Chrome,
}

pub fn landing() -> LandingPage {
    LandingPage {
        title: format!("Welcome to {BRAND}!"),
        tagline: "Open an account in a few minutes and manage your money online.",
        actions: vec![
            link("Create account", Route::Register),
            link("Sign in", Route::Login),
        ],
        chrome: Chrome::current(),
    }
}

pub fn login() -> FormPage {
    FormPage {
        title: "Sign in",
        fields: vec![
            field("email", "Email", "email", "Enter email"),
            field("password", "Password", "password", "Enter password"),
            field("rememberMe", "Remember me", "checkbox", ""),
        ],
        submit_label: "Sign in",
        links: vec![
            link("Forgot password?", Route::ResetPassword),
            link("Create account", Route::Register),
        ],
        chrome: Chrome::current(),
    }
}

pub fn register() -> FormPage {
    FormPage {
        title: "Sign up for Zink Bank",
        fields: vec![
            field("username", "Username", "text", "Enter username"),
            field("email", "Email", "email", "Enter email"),
            field("password", "Password", "password", "Enter password"),
            field("confirmPassword", "Confirm password", "password", "Repeat password"),
            field("terms", "I accept the terms of use", "checkbox", ""),
        ],
        submit_label: "Sign up",
        links: vec![
            link("Terms of use", Route::Terms),
            link("Already have an account? Sign in", Route::Login),
        ],
        chrome: Chrome::current(),
    }
}

pub fn verify_email(view: VerifyEmailView) -> VerifyEmailPage {
    VerifyEmailPage {
        title: "Email verification",
        email: view.email.into_inner(),
        fields: vec![field("code", "Verification code", "text", "000000")],
        resend_available: view.resend_available,
        cooldown_seconds: view.cooldown_secs,
        chrome: Chrome::current(),
    }
}
