//! Value Object Module

pub mod email;
pub mod password;
pub mod route;
pub mod toast;
pub mod user_name;
pub mod verification_code;
