//! Application identity.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Qualifier and vendor for ProjectDirs.
pub const QUALIFIER: &str = "io";
pub const VENDOR: &str = "advisor-chat";

/// Title shown in the header.
pub const TITLE: &str = "Financial Advisor Bot";
