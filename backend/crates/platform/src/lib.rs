//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the service crates:
//! - Cryptographic utilities (random bytes, HMAC-SHA256, Base64, signed tokens)
//! - Cookie building and extraction

pub mod cookie;
pub mod crypto;
