//! Shared Kernel
//!
//! Vocabulary shared by every crate in the workspace:
//! - the unified error type and result alias
//! - field-level validation errors
//! - typed ID wrappers
//!
//! Only things with the same meaning across all crates belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod field;
    pub mod kind;
}
pub mod id;
