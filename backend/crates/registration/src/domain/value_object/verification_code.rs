//! Verification Code Value Object
//!
//! Six ASCII digits drawn uniformly from [100000, 999999].

use derive_more::Display;
use platform::crypto::constant_time_eq;
use rand::Rng;
use std::fmt;

/// Number of characters in a code
pub const CODE_LENGTH: usize = 6;

const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

#[derive(Clone, PartialEq, Eq, Display)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Draw a fresh code from the thread-local CSPRNG
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let value = rng.random_range(CODE_MIN..=CODE_MAX);
        Self(value.to_string())
    }

    /// Rehydrate a code read back from the session bridge
    pub fn from_stored(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact string equality with the entered code
    pub fn matches(&self, input: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), input.as_bytes())
    }
}

impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationCode(******)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_codes_are_six_digits_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let code = VerificationCode::generate_with(&mut rng);
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));

            let value: u32 = code.as_str().parse().unwrap();
            assert!((CODE_MIN..=CODE_MAX).contains(&value));
        }
    }

    #[test]
    fn test_thread_rng_code_shape() {
        let code = VerificationCode::generate();
        assert_eq!(code.as_str().len(), CODE_LENGTH);
        assert!(!code.as_str().starts_with('0'));
    }

    #[test]
    fn test_exact_match_only() {
        let code = VerificationCode::from_stored("482193");
        assert!(code.matches("482193"));
        assert!(!code.matches("482194"));
        assert!(!code.matches(" 482193"));
        assert!(!code.matches("48219"));
    }

    #[test]
    fn test_display_and_debug() {
        let code = VerificationCode::from_stored("482193");
        assert_eq!(code.to_string(), "482193");
        assert!(!format!("{:?}", code).contains("482193"));
    }
}
