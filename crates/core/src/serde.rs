//! Serde helper functions for form and query deserialization.
//!
//! HTML forms and query strings send empty strings for blank optional
//! fields; these helpers treat them as `None`. Required text fields are
//! stripped of surrounding whitespace before validation sees them.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Deserialize a required string with surrounding whitespace removed.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(trimmed(s))
}

/// Deserialize an optional page number, treating blank or non-numeric
/// values as None.
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPage {
        Number(u32),
        Text(String),
    }

    let raw: Option<RawPage> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPage::Number(n)) => Some(n),
        Some(RawPage::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Owned copy of `value` with surrounding whitespace removed.
pub fn trimmed(value: impl Into<String>) -> String {
    value.into().trim().to_string()
}
