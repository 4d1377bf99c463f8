// src/domain/access/principal.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque user identity. Backends hand these out as strings or numbers; both
/// are compared by their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PrincipalId(String);

impl PrincipalId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PrincipalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PrincipalId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<PrincipalId> for String {
    fn from(value: PrincipalId) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrincipal {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl<'de> Deserialize<'de> for PrincipalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPrincipal::deserialize(deserializer)? {
            RawPrincipal::Text(text) => Self(text),
            RawPrincipal::Signed(n) => Self(n.to_string()),
            RawPrincipal::Unsigned(n) => Self(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_textual_ids_compare_by_text() {
        let from_number: PrincipalId = serde_json::from_str("42").unwrap();
        let from_text: PrincipalId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_ne!(from_text, PrincipalId::new("042"));
    }
}
