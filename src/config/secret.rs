//! Secure credential handling using the secrecy crate
//!
//! Cosmos DB account keys and service principal secrets are wrapped in
//! [`SecretString`], which zeroes memory on drop, redacts `Debug` output
//! and requires an explicit `expose_secret()` to read.
//!
//! # Example
//!
//! ```rust
//! use abs_metadata::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("account-key==".to_string());
//! assert_eq!(key.expose_secret(), "account-key==");
//! println!("{:?}", key); // Prints: Secret([REDACTED ...])
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<SecretValue> for String {
    fn from(mut s: SecretValue) -> Self {
        std::mem::take(&mut s.0)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A string that must not leak into logs
pub type SecretString = Secret<SecretValue>;

/// Wraps a String as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
