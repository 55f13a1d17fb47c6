//! CLI configuration.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://inventory-backend-roan.vercel.app";

/// Environment variable overriding the configured base URL.
pub const API_BASE_ENV: &str = "INVENTORY_API_BASE";

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["inventory.toml", ".inventory.toml", "inventory.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Order form settings.
    #[serde(default)]
    pub orders: OrdersConfig,

    /// Environment-specific overrides.
    #[serde(default)]
    pub environments: HashMap<String, EnvironmentConfig>,
}

impl ConsoleConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Get environment-specific config.
    pub fn for_environment(&self, env: &str) -> Result<ConsoleConfig> {
        let Some(env_config) = self.environments.get(env) else {
            let mut known: Vec<&str> = self.environments.keys().map(String::as_str).collect();
            known.sort_unstable();
            bail!(
                "Unknown environment '{}'. Known environments: {}",
                env,
                if known.is_empty() {
                    "none".to_string()
                } else {
                    known.join(", ")
                }
            );
        };

        let mut config = self.clone();
        if let Some(ref base_url) = env_config.base_url {
            config.api.base_url = Some(base_url.clone());
        }
        if let Some(ref user_agent) = env_config.user_agent {
            config.api.user_agent = user_agent.clone();
        }
        Ok(config)
    }
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the inventory backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("inventory-cli/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Order form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersConfig {
    /// Status values offered by the status prompt. Other values may still
    /// be typed in.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
}

fn default_statuses() -> Vec<String> {
    ["pending", "processing", "shipped", "delivered", "cancelled"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            statuses: default_statuses(),
        }
    }
}

/// Environment-specific overrides of `[api]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Where the effective base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUrlSource {
    Flag,
    Env,
    File,
    Default,
}

impl BaseUrlSource {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Flag => "--api-base",
            Self::Env => API_BASE_ENV,
            Self::File => "config file",
            Self::Default => "default",
        }
    }
}

/// Pick the base URL: flag, then environment variable, then file, then the
/// built-in default. Blank values are skipped.
pub fn resolve_base_url(
    flag: Option<&str>,
    env_value: Option<&str>,
    config: &ConsoleConfig,
) -> (String, BaseUrlSource) {
    let candidates = [
        (flag, BaseUrlSource::Flag),
        (env_value, BaseUrlSource::Env),
        (config.api.base_url.as_deref(), BaseUrlSource::File),
    ];

    candidates
        .into_iter()
        .find_map(|(value, source)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (v.to_string(), source))
        })
        .unwrap_or_else(|| (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default))
}

/// Problems found in a config, split into errors and warnings.
pub fn validate(config: &ConsoleConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Some(ref url) = config.api.base_url {
        if !is_http_url(url) {
            errors.push(format!("api.base_url '{}' must start with http:// or https://", url));
        }
    }

    if config.api.user_agent.trim().is_empty() {
        warnings.push("api.user_agent is empty".to_string());
    }

    if config.orders.statuses.is_empty() {
        warnings.push("orders.statuses is empty; status will always be typed in".to_string());
    }

    let mut seen = std::collections::HashSet::new();
    for status in &config.orders.statuses {
        if status.trim().is_empty() {
            errors.push("orders.statuses contains an empty value".to_string());
        } else if !seen.insert(status.as_str()) {
            warnings.push(format!("orders.statuses lists '{}' more than once", status));
        }
    }

    let mut names: Vec<&String> = config.environments.keys().collect();
    names.sort();
    for name in names {
        if let Some(ref url) = config.environments[name].base_url {
            if !is_http_url(url) {
                errors.push(format!(
                    "environments.{}.base_url '{}' must start with http:// or https://",
                    name, url
                ));
            }
        }
    }

    (errors, warnings)
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Generate a default inventory.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Inventory console configuration

[api]
base_url = "{base_url}"
# user_agent = "inventory-cli"

[orders]
statuses = ["pending", "processing", "shipped", "delivered", "cancelled"]

[environments.local]
base_url = "http://localhost:3000"

# [environments.staging]
# base_url = "https://staging.example.com"
"#,
        base_url = DEFAULT_BASE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_text: &str) -> ConsoleConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_default_config_parses() {
        let config = parse(&generate_default_config());
        assert_eq!(config.api.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(config.orders.statuses.len(), 5);
        assert!(config.environments.contains_key("local"));

        let (errors, warnings) = validate(&config);
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(warnings.is_empty(), "{:?}", warnings);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("");
        assert_eq!(config.api.base_url, None);
        assert!(config.api.user_agent.starts_with("inventory-cli/"));
        assert_eq!(config.orders.statuses[0], "pending");
    }

    #[test]
    fn test_base_url_precedence() {
        let config = parse("[api]\nbase_url = \"http://file.test\"\n");

        assert_eq!(
            resolve_base_url(Some("http://flag.test"), Some("http://env.test"), &config),
            ("http://flag.test".to_string(), BaseUrlSource::Flag)
        );
        assert_eq!(
            resolve_base_url(None, Some("http://env.test"), &config),
            ("http://env.test".to_string(), BaseUrlSource::Env)
        );
        assert_eq!(
            resolve_base_url(None, Some("  "), &config),
            ("http://file.test".to_string(), BaseUrlSource::File)
        );
        assert_eq!(
            resolve_base_url(None, None, &ConsoleConfig::default()),
            (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default)
        );
    }

    #[test]
    fn test_environment_overrides_api() {
        let config = parse(
            r#"
[api]
base_url = "http://prod.test"
user_agent = "ua"

[environments.local]
base_url = "http://localhost:3000"
"#,
        );

        let local = config.for_environment("local").unwrap();
        assert_eq!(local.api.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(local.api.user_agent, "ua");

        let err = config.for_environment("qa").unwrap_err();
        assert!(err.to_string().contains("Known environments: local"));
    }

    #[test]
    fn test_validate_reports_problems() {
        let config = parse(
            r#"
[api]
base_url = "ftp://nope"

[orders]
statuses = ["pending", "pending", ""]
"#,
        );
        let (errors, warnings) = validate(&config);
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings, vec!["orders.statuses lists 'pending' more than once"]);
    }

    #[test]
    fn test_json_config() {
        let config: ConsoleConfig =
            serde_json::from_str(r#"{"api": {"base_url": "http://json.test"}}"#).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://json.test"));
    }
}
