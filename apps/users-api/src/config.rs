use core_config::{app_info, server::ServerConfig, AppInfo, ConfigError, FromEnv};

pub use core_config::Environment;

/// Application configuration
/// Composes shared config components from `core_config`
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless overridden

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}
