use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CATALOG_PATH_ENV: &str = "EXCHANGE_META_CATALOG";
pub const INCLUDE_BUILTIN_ENV: &str = "EXCHANGE_META_BUILTIN";

/// Where the exchange catalog comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional JSON file layered over the builtin entries
    pub path: Option<PathBuf>,
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            include_builtin: default_include_builtin(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(CATALOG_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.path = Some(PathBuf::from(path.trim()));
        }

        if let Some(value) = lookup(INCLUDE_BUILTIN_ENV) {
            match value.trim().to_lowercase().as_str() {
                "0" | "false" | "no" | "off" => config.include_builtin = false,
                "1" | "true" | "yes" | "on" | "" => {}
                other => log::warn!(
                    "Ignoring unrecognized {} value '{}'",
                    INCLUDE_BUILTIN_ENV,
                    other
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CatalogConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, CatalogConfig::default());
        assert!(config.include_builtin);
        assert!(config.path.is_none());
    }

    #[test]
    fn test_reads_path_and_builtin_flag() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (CATALOG_PATH_ENV, " /etc/exchanges.json "),
            (INCLUDE_BUILTIN_ENV, "Off"),
        ]));

        assert_eq!(config.path, Some(PathBuf::from("/etc/exchanges.json")));
        assert!(!config.include_builtin);
    }

    #[test]
    fn test_unrecognized_flag_keeps_default() {
        let config = CatalogConfig::from_lookup(lookup_from(&[(INCLUDE_BUILTIN_ENV, "maybe")]));
        assert!(config.include_builtin);
    }

    #[test]
    fn test_deserialize_defaults_builtin() {
        let config: CatalogConfig = serde_json::from_str(r#"{ "path": null }"#).unwrap();
        assert!(config.include_builtin);
    }
}
