use serde::{Deserialize, Serialize};

/// What to do when two declared names are equal ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Fail the population with `DuplicateMember`.
    #[default]
    #[serde(rename = "reject")]
    Reject,
    /// The later declaration replaces the earlier one, keeping its position.
    #[serde(rename = "lastWins")]
    LastWins,
}

/// Options applied when an enum table is populated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumConfig {
    /// Duplicate-name handling (default: reject)
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl EnumConfig {
    /// Configuration that silently shadows duplicate names.
    pub fn last_wins() -> Self {
        Self {
            duplicates: DuplicatePolicy::LastWins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnumConfig::default();
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_serialize_config() {
        let json = serde_json::to_string(&EnumConfig::last_wins()).unwrap();
        assert_eq!(json, r#"{"duplicates":"lastWins"}"#);
    }

    #[test]
    fn test_deserialize_config() {
        let config: EnumConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EnumConfig::default());

        let config: EnumConfig = serde_json::from_str(r#"{"duplicates": "lastWins"}"#).unwrap();
        assert_eq!(config.duplicates, DuplicatePolicy::LastWins);
    }
}
