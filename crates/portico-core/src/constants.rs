/// Default build definition file looked up by the driver
pub const DEFAULT_DEFINITION_FILE: &str = "portico.toml";

/// Pre-release marker identifying snapshot versions
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Property that forces signing even for snapshot builds
pub const FORCE_SIGN_PROPERTY: &str = "forceSign";

/// Suffix of the property holding a repository's username (`<name>Username`)
pub const USERNAME_PROPERTY_SUFFIX: &str = "Username";

/// Suffix of the property holding a repository's password (`<name>Password`)
pub const PASSWORD_PROPERTY_SUFFIX: &str = "Password";
