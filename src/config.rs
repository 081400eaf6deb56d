use crate::error::{AgriCareError, Result};
use agricare_common::EndpointConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: EndpointConfig,
    /// 土壌画像の送信失敗時にデモ結果を表示する
    pub demo_fallback: bool,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: EndpointConfig::default(),
            demo_fallback: true,
            timeout_seconds: 60,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_env_overrides())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AgriCareError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("agricare").join("config.json"))
    }

    /// 環境変数を優先
    pub fn with_env_overrides(mut self) -> Self {
        self.endpoints = self.endpoints.with_overrides(|name| std::env::var(name).ok());
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoints.validate()?;
        if self.timeout_seconds == 0 {
            return Err(AgriCareError::Config("timeout_seconds は1以上にしてください".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.demo_fallback);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.endpoints.plant_url = "http://10.0.0.5:5000".to_string();
        config.demo_fallback = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timeout_seconds, 5);
        assert!(config.demo_fallback);
        assert_eq!(config.endpoints, EndpointConfig::default());
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.timeout_seconds = 0;
        assert!(matches!(config.validate(), Err(AgriCareError::Config(_))));

        config.timeout_seconds = 10;
        config.endpoints.soil_image_url = "localhost:5000".to_string();
        assert!(matches!(config.validate(), Err(AgriCareError::Common(_))));
    }
}
