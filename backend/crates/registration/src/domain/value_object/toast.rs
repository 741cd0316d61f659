//! Toast Value Object
//!
//! Transient on-screen notification returned with flow responses.

use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(
        title: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// Error styling
    pub fn destructive(
        title: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::info(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Toast::destructive("Invalid code", "Try again")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Invalid code",
                "description": "Try again",
                "variant": "destructive",
            })
        );
    }
}
