//! Fail-open results
//!
//! Every step that is allowed to fail without stopping a job returns an
//! [`Outcome`] instead of a `Result`. A degraded outcome still carries a
//! usable value (an empty record set, an unfiltered table) plus the
//! diagnostic explaining what went wrong.

use std::fmt::Display;

/// The value produced by a fail-open step
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The step succeeded
    Complete(T),

    /// The step failed and `value` is the fallback
    Degraded { value: T, diagnostic: String },
}

impl<T> Outcome<T> {
    /// Converts a `Result`, substituting `fallback()` on error
    pub fn or_degrade<E: Display>(result: Result<T, E>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Outcome::Complete(value),
            Err(e) => Outcome::Degraded {
                value: fallback(),
                diagnostic: e.to_string(),
            },
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Complete(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Complete(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    /// The diagnostic of a degraded outcome
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Outcome::Complete(_) => None,
            Outcome::Degraded { diagnostic, .. } => Some(diagnostic),
        }
    }

    /// Maps the carried value, keeping the diagnostic
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Complete(value) => Outcome::Complete(f(value)),
            Outcome::Degraded { value, diagnostic } => Outcome::Degraded {
                value: f(value),
                diagnostic,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_degrade_ok() {
        let outcome = Outcome::or_degrade(Ok::<_, String>(vec![1, 2]), Vec::new);
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.diagnostic(), None);
        assert_eq!(outcome.into_value(), vec![1, 2]);
    }

    #[test]
    fn test_or_degrade_err_uses_fallback() {
        let outcome = Outcome::or_degrade(Err::<Vec<i32>, _>("lookup failed"), Vec::new);
        assert!(outcome.is_degraded());
        assert_eq!(outcome.diagnostic(), Some("lookup failed"));
        assert!(outcome.value().is_empty());
    }

    #[test]
    fn test_map_keeps_diagnostic() {
        let outcome: Outcome<Vec<i32>> = Outcome::Degraded {
            value: vec![],
            diagnostic: "timeout".to_string(),
        };
        let mapped = outcome.map(|v| v.len());
        assert_eq!(mapped.diagnostic(), Some("timeout"));
        assert_eq!(*mapped.value(), 0);
    }
}
