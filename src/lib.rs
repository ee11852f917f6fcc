pub mod catalog;
pub mod error;
pub mod models;

pub use catalog::{CatalogConfig, ExchangeCatalog};
pub use error::MetaError;
pub use models::{CredentialField, ExchangeMeta};
