pub mod credential_field;
pub mod exchange_meta;

pub use credential_field::*;
pub use exchange_meta::*;
