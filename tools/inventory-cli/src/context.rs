//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use inventory_data::{FetchClient, ReqwestTransport};
use tracing::debug;

use crate::config::{resolve_base_url, BaseUrlSource, ConsoleConfig, API_BASE_ENV, CONFIG_NAMES};
use crate::output::Output;
use crate::prompt::TerminalPrompter;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with the selected environment applied.
    pub config: ConsoleConfig,
    /// File the configuration came from.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Effective backend base URL.
    pub api_base: String,
    pub api_base_source: BaseUrlSource,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        env: Option<&str>,
        api_base: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (ConsoleConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ConsoleConfig::default(), None),
            }
        };

        let config = match env {
            Some(env) => config.for_environment(env)?,
            None => config,
        };

        let env_value = std::env::var(API_BASE_ENV).ok();
        let (api_base, api_base_source) =
            resolve_base_url(api_base, env_value.as_deref(), &config);
        debug!(
            config = ?config_path,
            env = ?env,
            api_base = %api_base,
            source = api_base_source.describe(),
            "resolved configuration"
        );

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            api_base,
            api_base_source,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(ConsoleConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ConsoleConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// HTTP client for the configured backend.
    pub fn client(&self) -> FetchClient {
        self.output.debug(&format!(
            "Using {} ({})",
            self.api_base,
            self.api_base_source.describe()
        ));
        FetchClient::new(ReqwestTransport::new())
            .with_base_url(self.api_base.clone())
            .with_default_header("Accept", "application/json")
            .with_default_header("User-Agent", self.config.api.user_agent.clone())
    }

    /// Prompter for controller notices and confirmations.
    pub fn prompter(&self, assume_yes: bool) -> TerminalPrompter {
        TerminalPrompter::new(self.output.clone(), assume_yes)
    }

    /// Status values offered by the order status prompt.
    pub fn statuses(&self) -> &[String] {
        &self.config.orders.statuses
    }
}
