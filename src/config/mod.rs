//! Configuration management

use anyhow::Result;
use serde::Deserialize;

/// Base name of the optional config file (`portfolio.toml`, `.json`, `.yaml`)
const CONFIG_FILE_STEM: &str = "portfolio";

/// Environment contract the Dioxus server reads its bind address from
const SERVER_IP_ENV: &str = "IP";
const SERVER_PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_ip")]
    pub ip: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_ip() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "portfolio_site=info,dioxus=warn".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: default_ip(),
            port: default_port(),
            log_filter: default_log_filter(),
        }
    }
}

/// Get config directory (PORTFOLIO_CONFIG_DIR or the working directory)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<ServerConfig> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("ip", default_ip())?
        .set_default("port", default_port() as i64)?
        .set_default("log_filter", default_log_filter())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join(CONFIG_FILE_STEM).to_string_lossy())
                .required(false),
        )
        // Override with environment variables (PORTFOLIO_IP, PORTFOLIO_LOG_FILTER, etc.)
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .prefix_separator("_")
                .try_parsing(true),
        );

    // Explicit precedence: PORTFOLIO_PORT > PORT > config > default
    if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Hosting platforms hand out the port this way
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;
    let config: ServerConfig = config.try_deserialize()?;
    Ok(config)
}

/// Hand the loaded address to the Dioxus server. Values already present in
/// the environment are left alone.
pub fn export_server_address(config: &ServerConfig) {
    if std::env::var_os(SERVER_IP_ENV).is_none() {
        std::env::set_var(SERVER_IP_ENV, &config.ip);
    }
    if std::env::var_os(SERVER_PORT_ENV).is_none() {
        std::env::set_var(SERVER_PORT_ENV, config.port.to_string());
    }
}
