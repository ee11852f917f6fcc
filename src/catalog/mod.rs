pub mod config;

pub use config::CatalogConfig;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::MetaError;
use crate::models::{CredentialField, ExchangeMeta};

/// Exchange metadata keyed by normalized exchange id (e.g. "bitget")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeCatalog {
    entries: HashMap<String, ExchangeMeta>,
}

/// Trim and lowercase an exchange id
pub fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

impl ExchangeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exchanges the journal syncs with out of the box
    pub fn builtin() -> Self {
        // BitGet and BloFin both sign requests with key + secret and send the passphrase header
        let key_secret_passphrase = |name: &str| {
            ExchangeMeta::named(name)
                .with(CredentialField::ApiKey, true)
                .with(CredentialField::SecretKey, true)
                .with(CredentialField::ClientId, false)
                .with(CredentialField::SubAccount, false)
                .with(CredentialField::Passphrase, true)
                .with(CredentialField::WalletId, false)
        };

        let mut catalog = Self::new();
        catalog.insert("bitget", key_secret_passphrase("BitGet"));
        catalog.insert("blofin", key_secret_passphrase("BloFin"));
        catalog
    }

    /// Build a catalog from configuration: builtin entries first, then the file on top
    pub fn from_config(config: &CatalogConfig) -> Result<Self, MetaError> {
        let mut catalog = if config.include_builtin {
            Self::builtin()
        } else {
            Self::new()
        };

        if let Some(path) = &config.path {
            let loaded = Self::load_from_path(path)?;
            catalog.merge(loaded);
        }

        log::info!("Exchange catalog ready with {} entries", catalog.len());
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, MetaError> {
        let raw: HashMap<String, ExchangeMeta> = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for (id, meta) in raw {
            let normalized = normalize_id(&id);
            if catalog.entries.contains_key(&normalized) {
                return Err(MetaError::ParseError(format!(
                    "duplicate exchange id '{}'",
                    normalized
                )));
            }
            catalog.entries.insert(normalized, meta);
        }
        Ok(catalog)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, MetaError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| MetaError::IoError(format!("{}: {}", path.display(), e)))?;

        let catalog = Self::from_json_str(&data)?;
        log::info!(
            "Loaded {} exchange entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Serialize with ids sorted so the output is stable
    pub fn to_json_string_pretty(&self) -> Result<String, MetaError> {
        let sorted: BTreeMap<&String, &ExchangeMeta> = self.entries.iter().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    /// Insert or replace an entry, returning the previous one
    pub fn insert(&mut self, id: &str, meta: ExchangeMeta) -> Option<ExchangeMeta> {
        self.entries.insert(normalize_id(id), meta)
    }

    pub fn get(&self, id: &str) -> Option<&ExchangeMeta> {
        self.entries.get(&normalize_id(id))
    }

    pub fn require(&self, id: &str) -> Result<&ExchangeMeta, MetaError> {
        self.get(id)
            .ok_or_else(|| MetaError::UnknownExchange(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Exchange ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other` onto this catalog. Existing entries keep fields `other` leaves absent.
    pub fn merge(&mut self, other: ExchangeCatalog) {
        for (id, meta) in other.entries {
            match self.entries.get_mut(&id) {
                Some(existing) => {
                    let merged = existing.overlay(&meta);
                    if merged.required_credentials() != existing.required_credentials() {
                        log::warn!(
                            "Credential requirements for '{}' changed: {:?} -> {:?}",
                            id,
                            existing.required_credentials(),
                            merged.required_credentials()
                        );
                    }
                    *existing = merged;
                }
                None => {
                    log::debug!("Adding exchange '{}' to catalog", id);
                    self.entries.insert(id, meta);
                }
            }
        }
    }
}
