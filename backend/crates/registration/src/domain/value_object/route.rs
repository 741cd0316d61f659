//! Route Value Object
//!
//! Every path the flow can navigate to. The last four only ever appear as
//! links; nothing serves them.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Register,
    VerifyEmail,
    About,
    Terms,
    Privacy,
    ResetPassword,
}

impl Route {
    #[inline]
    pub const fn path(&self) -> &'static str {
        use Route::*;
        match self {
            Landing => "/",
            Login => "/login",
            Register => "/register",
            VerifyEmail => "/verify-email",
            About => "/about",
            Terms => "/terms",
            Privacy => "/privacy",
            ResetPassword => "/reset-password",
        }
    }

    /// Whether the service renders a page for this route
    #[inline]
    pub const fn is_served(&self) -> bool {
        use Route::*;
        matches!(self, Landing | Login | Register | VerifyEmail)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
