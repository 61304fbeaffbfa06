use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote sales API the dashboard is fed from
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// Products endpoint returning the full record batch as one JSON array
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[source]
base_url = "https://labdados.com/produtos"
timeout_secs = 30
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration and store it for the lifetime of the process.
///
/// Search order:
/// 1. config.toml next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn initialize() -> anyhow::Result<()> {
    let config = load_config()?;
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Configuration initialized twice"))?;
    Ok(())
}

/// The process-wide configuration. Falls back to the embedded default when
/// `initialize` was never called (unit tests).
pub fn get() -> &'static Config {
    CONFIG.get_or_init(|| toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid"))
}

fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.source.base_url, "https://labdados.com/produtos");
        assert_eq!(config.source.timeout_secs, 30);
    }
}
