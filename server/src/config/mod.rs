use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct Configuration {
    pub(crate) listen: SocketAddr,
    /// Output directory of the frontend build.
    pub(crate) dist_dir: PathBuf,
    #[serde(default = "default_log_filter")]
    pub(crate) log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl Configuration {
    pub(crate) async fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config_file =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
        serde_yaml::from_str::<Configuration>(&config_file).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    pub async fn deserializes_sample_config() {
        let config = Configuration::from_file(Path::new("config-sample.yaml"))
            .await
            .unwrap();
        assert_eq!(config.listen, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("../app/dist"));
    }

    #[test]
    fn log_filter_defaults_to_info() {
        let config =
            serde_yaml::from_str::<Configuration>("listen: 127.0.0.1:8080\ndist_dir: dist\n")
                .unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[tokio::test]
    async fn reports_missing_file() {
        let error = Configuration::from_file(Path::new("does-not-exist.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().starts_with("cannot read does-not-exist.yaml"));
    }
}
