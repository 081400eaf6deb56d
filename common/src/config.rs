//! 推論サービスの接続先設定
//!
//! 3つのワークフローそれぞれにベースURLを持つ。
//! 環境変数（CLIは実行時、Webはビルド時）で上書きできる。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 既定のベースURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// 土壌画像ワークフローのベースURL
pub const ENV_SOIL_API_URL: &str = "AGRICARE_API_URL";
/// 植物ワークフローのベースURL
pub const ENV_PLANT_API_URL: &str = "AGRICARE_PLANT_API_URL";
/// 数値フォームワークフローのベースURL
pub const ENV_READINGS_API_URL: &str = "AGRICARE_READINGS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub plant_url: String,
    pub soil_image_url: String,
    pub soil_readings_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            plant_url: DEFAULT_BASE_URL.to_string(),
            soil_image_url: DEFAULT_BASE_URL.to_string(),
            soil_readings_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl EndpointConfig {
    /// 環境変数で上書きする
    ///
    /// `lookup` は変数名から値を返す（空文字は未設定扱い）。
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = pick(ENV_PLANT_API_URL) {
            self.plant_url = url;
        }
        if let Some(url) = pick(ENV_SOIL_API_URL) {
            self.soil_image_url = url;
        }
        if let Some(url) = pick(ENV_READINGS_API_URL) {
            self.soil_readings_url = url;
        }
        self
    }

    /// 全URLが http(s) で始まるか検証
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("plant_url", &self.plant_url),
            ("soil_image_url", &self.soil_image_url),
            ("soil_readings_url", &self.soil_readings_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::Config(format!("{} must be an http(s) URL: {:?}", name, url)));
            }
        }
        Ok(())
    }
}

/// ベースURLとパスを連結
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
