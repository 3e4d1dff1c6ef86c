use std::path::Path;

use eyre::Context;
use lp_types::primitive::ContractAddresses;
use serde::Deserialize;
use url::Url;

/// Settings that can live in a toml file instead of on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub rpc_url:   Option<Url>,
    pub contracts: ContractAddresses
}

impl DemoConfig {
    /// Without a path the built-in defaults are used.
    pub fn load(config: Option<&Path>) -> eyre::Result<Self> {
        match config {
            Some(path) => Self::load_from_config(path),
            None => Ok(Self::default())
        }
    }

    pub fn load_from_config(config_path: &Path) -> eyre::Result<Self> {
        if !config_path.exists() {
            return Err(eyre::eyre!("Config file does not exist at {:?}", config_path));
        }

        let toml_content = std::fs::read_to_string(config_path)
            .wrap_err_with(|| format!("Could not read config file {:?}", config_path))?;

        let config: DemoConfig = toml::from_str(&toml_content)
            .wrap_err_with(|| format!("Could not deserialize config file {:?}", config_path))?;

        Ok(config)
    }

    /// The command line (or `PROVIDER`) wins over the file.
    pub fn resolve_rpc_url(&self, cli: Option<Url>) -> eyre::Result<Url> {
        cli.or_else(|| self.rpc_url.clone())
            .ok_or_else(|| eyre::eyre!("no rpc url: pass --rpc-url, set PROVIDER or add rpc_url to the config"))
    }
}
