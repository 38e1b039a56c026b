//! Remote service endpoint configuration.
//!
//! # Responsibility
//! - Hold the record API endpoint and project credentials.
//! - Load configuration from the process environment.
//!
//! # Invariants
//! - This is the whole environment contract; nothing else in core reads
//!   environment variables.

/// Environment variable naming the record API base URL.
pub const ENV_API_URL: &str = "TASKHIVE_API_URL";
/// Environment variable naming the project identifier header value.
pub const ENV_PROJECT_ID: &str = "TASKHIVE_PROJECT_ID";
/// Environment variable naming the public key header value.
pub const ENV_PUBLIC_KEY: &str = "TASKHIVE_PUBLIC_KEY";

/// Connection settings for the hosted record API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Base URL of the record API, without a trailing path.
    pub base_url: String,
    /// Project identifier sent as `X-Project-Id`.
    pub project_id: String,
    /// Public key sent as `X-Public-Key`.
    pub public_key: String,
}

impl RemoteConfig {
    /// Creates a configuration from explicit values.
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            project_id: project_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    /// - Returns a human-readable message when any variable is missing or
    ///   blank after trimming.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            base_url: required_env(ENV_API_URL)?,
            project_id: required_env(ENV_PROJECT_ID)?,
            public_key: required_env(ENV_PUBLIC_KEY)?,
        })
    }
}

fn required_env(name: &str) -> Result<String, String> {
    let value = std::env::var(name)
        .map_err(|_| format!("missing required environment variable `{name}`"))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("environment variable `{name}` is empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{required_env, RemoteConfig};

    #[test]
    fn missing_variable_names_itself_in_the_error() {
        let error = required_env("TASKHIVE_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(error.contains("TASKHIVE_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn explicit_constructor_keeps_values() {
        let config = RemoteConfig::new("https://api.example.com", "proj", "key");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.project_id, "proj");
        assert_eq!(config.public_key, "key");
    }
}
