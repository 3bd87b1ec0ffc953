//! Gateway environments and their base URLs

/// Base URL of the production merchant API
pub const PRODUCTION_URL: &str = "https://merchants.api.utrust.com/api/";
/// Base URL of the sandbox merchant API
pub const SANDBOX_URL: &str = "https://merchants.api.sandbox-utrust.com/api/";

/// Gateway environment a client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Resolve an environment by name.
    ///
    /// Only `"production"` selects production; every other name, including
    /// typos, selects the sandbox so a misconfiguration never moves real funds.
    pub fn from_name(name: &str) -> Self {
        match name {
            "production" => Environment::Production,
            _ => Environment::Sandbox,
        }
    }

    /// Get the environment identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
        }
    }

    /// Get the API base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
