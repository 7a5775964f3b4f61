pub mod toml_config;

pub use toml_config::ServiceConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "car-price-api")]
#[command(about = "HTTP inference service for used car resale prices")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long, help = "Path to the ONNX model file")]
    pub model_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔 (若有) 再套用命令列參數
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let base = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }

    pub fn apply_overrides(&self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(model_path) = &self.model_path {
            config.model.path = model_path.clone();
        }
        if self.json_logs {
            config.logging.json = true;
        }
        config
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "car-price-api",
            "--port",
            "8081",
            "--model-path",
            "models/other.onnx",
            "--verbose",
        ]);

        assert_eq!(cli.port, Some(8081));
        assert_eq!(cli.model_path.as_deref(), Some("models/other.onnx"));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags_override_file_values() {
        let base = ServiceConfig::from_toml_str(
            "[server]\nhost = \"0.0.0.0\"\nport = 9000\n[model]\npath = \"a.onnx\"\n",
        )
        .unwrap();

        let cli = CliConfig {
            port: Some(7000),
            json_logs: true,
            ..Default::default()
        };
        let config = cli.apply_overrides(base);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.model.path, "a.onnx");
        assert!(config.logging.json);
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let config = CliConfig::default().resolve().unwrap();
        assert_eq!(config, ServiceConfig::default());
    }
}
