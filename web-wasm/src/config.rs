//! ビルド時設定
//!
//! 環境変数はビルド時に `option_env!` で埋め込む。

use agricare_common::config::{ENV_PLANT_API_URL, ENV_READINGS_API_URL, ENV_SOIL_API_URL};
use agricare_common::EndpointConfig;

/// Leptos context で配布するアプリ設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoints: EndpointConfig,
    pub demo_fallback: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoints: EndpointConfig::default(),
            demo_fallback: true,
        }
    }
}

impl AppConfig {
    /// ビルド時に埋め込まれた値から作る
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| match name {
            ENV_SOIL_API_URL => option_env!("AGRICARE_API_URL").map(str::to_string),
            ENV_PLANT_API_URL => option_env!("AGRICARE_PLANT_API_URL").map(str::to_string),
            ENV_READINGS_API_URL => option_env!("AGRICARE_READINGS_API_URL").map(str::to_string),
            "AGRICARE_DEMO_FALLBACK" => option_env!("AGRICARE_DEMO_FALLBACK").map(str::to_string),
            _ => None,
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let demo_fallback = lookup("AGRICARE_DEMO_FALLBACK")
            .map(|v| !matches!(v.trim(), "0" | "false" | "off"))
            .unwrap_or(true);

        Self {
            endpoints: EndpointConfig::default().with_overrides(lookup),
            demo_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_soil_url_and_fallback_switch() {
        let config = AppConfig::from_lookup(|name| match name {
            "AGRICARE_API_URL" => Some("https://soil.example".to_string()),
            "AGRICARE_DEMO_FALLBACK" => Some("false".to_string()),
            _ => None,
        });
        assert_eq!(config.endpoints.soil_image_url, "https://soil.example");
        assert!(!config.demo_fallback);
    }
}
