use serde::{Deserialize, Serialize};

use super::credential_field::CredentialField;
use crate::error::MetaError;

/// Which credentials an exchange requires (shared with the frontend)
///
/// Every field is optional. An absent flag means the exchange did not say,
/// and it is treated as "not needed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExchangeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_needed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key_needed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id_needed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_account_needed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase_needed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id_needed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ExchangeMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder-style setter for a single flag
    pub fn with(mut self, field: CredentialField, needed: bool) -> Self {
        self.set_flag(field, Some(needed));
        self
    }

    pub fn flag(&self, field: CredentialField) -> Option<bool> {
        match field {
            CredentialField::ApiKey => self.api_key_needed,
            CredentialField::SecretKey => self.secret_key_needed,
            CredentialField::ClientId => self.client_id_needed,
            CredentialField::SubAccount => self.sub_account_needed,
            CredentialField::Passphrase => self.passphrase_needed,
            CredentialField::WalletId => self.wallet_id_needed,
        }
    }

    pub fn set_flag(&mut self, field: CredentialField, value: Option<bool>) {
        let slot = match field {
            CredentialField::ApiKey => &mut self.api_key_needed,
            CredentialField::SecretKey => &mut self.secret_key_needed,
            CredentialField::ClientId => &mut self.client_id_needed,
            CredentialField::SubAccount => &mut self.sub_account_needed,
            CredentialField::Passphrase => &mut self.passphrase_needed,
            CredentialField::WalletId => &mut self.wallet_id_needed,
        };
        *slot = value;
    }

    pub fn requires(&self, field: CredentialField) -> bool {
        self.flag(field).unwrap_or(false)
    }

    /// Required credentials, in `CredentialField::ALL` order
    pub fn required_credentials(&self) -> Vec<CredentialField> {
        CredentialField::ALL
            .into_iter()
            .filter(|field| self.requires(*field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && CredentialField::ALL.iter().all(|f| self.flag(*f).is_none())
    }

    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }

    /// Layer `other` on top of `self`: fields present in `other` win
    pub fn overlay(&self, other: &ExchangeMeta) -> ExchangeMeta {
        let mut merged = self.clone();
        for field in CredentialField::ALL {
            if let Some(value) = other.flag(field) {
                merged.set_flag(field, Some(value));
            }
        }
        if let Some(name) = &other.name {
            merged.name = Some(name.clone());
        }
        merged
    }

    pub fn from_json_str(json: &str) -> Result<Self, MetaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, MetaError> {
        Ok(serde_json::to_string(self)?)
    }
}
