use serde::{Deserialize, Serialize};
use std::fmt;

/// A credential an exchange may ask for before it accepts API calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialField {
    ApiKey,
    SecretKey,
    ClientId,
    SubAccount,
    Passphrase,
    WalletId,
}

impl CredentialField {
    pub const ALL: [CredentialField; 6] = [
        CredentialField::ApiKey,
        CredentialField::SecretKey,
        CredentialField::ClientId,
        CredentialField::SubAccount,
        CredentialField::Passphrase,
        CredentialField::WalletId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialField::ApiKey => "api_key",
            CredentialField::SecretKey => "secret_key",
            CredentialField::ClientId => "client_id",
            CredentialField::SubAccount => "sub_account",
            CredentialField::Passphrase => "passphrase",
            CredentialField::WalletId => "wallet_id",
        }
    }

    /// Human-readable label for credential forms
    pub fn label(&self) -> &'static str {
        match self {
            CredentialField::ApiKey => "API Key",
            CredentialField::SecretKey => "Secret Key",
            CredentialField::ClientId => "Client ID",
            CredentialField::SubAccount => "Sub-account",
            CredentialField::Passphrase => "Passphrase",
            CredentialField::WalletId => "Wallet ID",
        }
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&CredentialField::SubAccount).unwrap();
        assert_eq!(json, "\"sub_account\"");

        let field: CredentialField = serde_json::from_str("\"wallet_id\"").unwrap();
        assert_eq!(field, CredentialField::WalletId);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = CredentialField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "API Key",
                "Secret Key",
                "Client ID",
                "Sub-account",
                "Passphrase",
                "Wallet ID",
            ]
        );
    }

    #[test]
    fn test_display_matches_wire_name() {
        for field in CredentialField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field));
        }
    }
}
