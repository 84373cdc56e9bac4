//! `KEY=VALUE` credentials file
//!
//! One pair per line, split on the first `=` only, so values may contain
//! `=` (Cosmos DB keys usually end in `==`). Keys and values are trimmed,
//! blank lines and `#` comments are skipped, and a later duplicate wins.

use crate::domain::errors::MetadataError;
use crate::domain::result::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

pub const AZURE_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
pub const AZURE_RESOURCE_GROUP_NAME: &str = "AZURE_RESOURCE_GROUP_NAME";
pub const AZURE_BLOCKCHAIN_MEMBER_NAME: &str = "AZURE_BLOCKCHAIN_MEMBER_NAME";
pub const AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";
pub const AZURE_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const AZURE_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const AZURE_MANAGEMENT_ENDPOINT: &str = "AZURE_MANAGEMENT_ENDPOINT";
pub const COSMOS_DB_ENDPOINT: &str = "COSMOS_DB_ENDPOINT";
pub const COSMOS_DB_KEY: &str = "COSMOS_DB_KEY";
pub const COSMOS_DB_DATABASE_NAME: &str = "COSMOS_DB_DATABASE_NAME";
pub const COSMOS_DB_CONTAINER_NAME: &str = "COSMOS_DB_CONTAINER_NAME";

/// Keys of the optional contract source; all four or none take effect
pub const COSMOS_DB_KEYS: [&str; 4] = [
    COSMOS_DB_ENDPOINT,
    COSMOS_DB_KEY,
    COSMOS_DB_DATABASE_NAME,
    COSMOS_DB_CONTAINER_NAME,
];

/// Every key the collector understands
pub const KNOWN_KEYS: [&str; 11] = [
    AZURE_SUBSCRIPTION_ID,
    AZURE_RESOURCE_GROUP_NAME,
    AZURE_BLOCKCHAIN_MEMBER_NAME,
    AZURE_TENANT_ID,
    AZURE_CLIENT_ID,
    AZURE_CLIENT_SECRET,
    AZURE_MANAGEMENT_ENDPOINT,
    COSMOS_DB_ENDPOINT,
    COSMOS_DB_KEY,
    COSMOS_DB_DATABASE_NAME,
    COSMOS_DB_CONTAINER_NAME,
];

/// Parsed credentials file
///
/// Values are wiped from memory when the map is dropped and never appear
/// in `Debug` output.
#[derive(Clone, Default)]
pub struct Credentials {
    entries: BTreeMap<String, String>,
}

impl Credentials {
    /// Looks up a key; empty values count as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Looks up a key that must be present
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the key when it is missing or empty.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            MetadataError::Configuration(format!("Missing required credential: {key}"))
        })
    }

    /// Sets or replaces a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if let Some(mut old) = self.entries.insert(key.into(), value.into()) {
            old.zeroize();
        }
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Credentials {
    type Err = MetadataError;

    fn from_str(contents: &str) -> Result<Self> {
        let mut credentials = Credentials::default();

        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                MetadataError::Configuration(format!(
                    "Line {} of credentials file is not KEY=VALUE",
                    index + 1
                ))
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(MetadataError::Configuration(format!(
                    "Line {} of credentials file has an empty key",
                    index + 1
                )));
            }

            credentials.set(key, value.trim());
        }

        Ok(credentials)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        for value in self.entries.values_mut() {
            value.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let credentials: Credentials = "AZURE_SUBSCRIPTION_ID=sub-123\nAZURE_RESOURCE_GROUP_NAME=rg-chain\n"
            .parse()
            .unwrap();

        assert_eq!(credentials.len(), 2);
        assert_eq!(credentials.get(AZURE_SUBSCRIPTION_ID), Some("sub-123"));
        assert_eq!(credentials.get(AZURE_RESOURCE_GROUP_NAME), Some("rg-chain"));
    }

    #[test]
    fn test_split_on_first_equals_only() {
        let credentials: Credentials = "COSMOS_DB_KEY=abc/def+ghi==".parse().unwrap();
        assert_eq!(credentials.get(COSMOS_DB_KEY), Some("abc/def+ghi=="));
    }

    #[test]
    fn test_trims_and_skips_blank_and_comment_lines() {
        let contents = "\n# subscription\n  AZURE_SUBSCRIPTION_ID = sub-1  \n\n";
        let credentials: Credentials = contents.parse().unwrap();
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials.get(AZURE_SUBSCRIPTION_ID), Some("sub-1"));
    }

    #[test]
    fn test_line_without_equals_is_error() {
        let err = "AZURE_SUBSCRIPTION_ID=sub\nnot a pair"
            .parse::<Credentials>()
            .unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn test_empty_key_is_error() {
        assert!("=value".parse::<Credentials>().is_err());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let credentials: Credentials = "A=1\nA=2".parse().unwrap();
        assert_eq!(credentials.get("A"), Some("2"));
    }

    #[test]
    fn test_require_missing_and_empty() {
        let credentials: Credentials = "AZURE_RESOURCE_GROUP_NAME=".parse().unwrap();
        assert!(credentials.require(AZURE_RESOURCE_GROUP_NAME).is_err());
        let err = credentials.require(AZURE_SUBSCRIPTION_ID).unwrap_err();
        assert!(err.to_string().contains(AZURE_SUBSCRIPTION_ID));
    }

    #[test]
    fn test_debug_hides_values() {
        let credentials: Credentials = "COSMOS_DB_KEY=super-secret".parse().unwrap();
        let debug = format!("{credentials:?}");
        assert!(debug.contains("COSMOS_DB_KEY"));
        assert!(!debug.contains("super-secret"));
    }
}
