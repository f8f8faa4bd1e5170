use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// Insert the demo standards sets and units into an empty database
    #[serde(default)]
    pub demo_data: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/unit_planner.db"

[server]
host = "0.0.0.0"
port = 3000

[seed]
demo_data = true
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Database file path; relative paths are resolved against the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    Ok(resolve_database_path(&config.database.path, exe_dir.as_deref()))
}

fn resolve_database_path(db_path_str: &str, exe_dir: Option<&Path>) -> PathBuf {
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    match exe_dir {
        Some(dir) => dir.join(db_path),
        None => PathBuf::from(db_path_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/unit_planner.db");
        assert_eq!(config.server.port, 3000);
        assert!(config.seed.demo_data);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[database]\npath = \"app.db\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(!config.seed.demo_data);
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_missing_database_section_is_an_error() {
        assert!(parse_config("[server]\nport = 1\n").is_err());
    }

    #[test]
    fn test_relative_path_resolves_next_to_executable() {
        let resolved = resolve_database_path("db/app.db", Some(Path::new("/opt/planner")));
        assert_eq!(resolved, PathBuf::from("/opt/planner/db/app.db"));

        let fallback = resolve_database_path("db/app.db", None);
        assert_eq!(fallback, PathBuf::from("db/app.db"));
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let resolved = resolve_database_path("/var/lib/planner.db", Some(Path::new("/opt")));
        assert_eq!(resolved, PathBuf::from("/var/lib/planner.db"));
    }
}
