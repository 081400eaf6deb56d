//! 解析結果・入力値の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - SoilAnalysis: 土壌画像解析の結果（`analysis` キー配下）
//! - SoilReadings: 数値フォームの5項目
//! - ResponseBody: 受信した本文（原文と解析結果）
//! - Outcome: ワークフローが保持する表示用の結果

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 土壌の色分析
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAnalysis {
    /// 色相（0-360）
    pub hue: f64,
    /// 彩度（0-255）
    pub saturation: f64,
    /// 明度（0-255）
    pub brightness: f64,
}

/// 土壌のテクスチャ指標
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureMetrics {
    pub roughness: f64,
    pub particle_density: f64,
}

/// 改善提案（4カテゴリ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    pub immediate_actions: Vec<String>,
    pub long_term_improvements: Vec<String>,
    pub fertilizer_suggestions: Vec<String>,
    pub planting_recommendations: Vec<String>,
}

/// 土壌解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoilAnalysis {
    pub soil_type: String,
    /// 健康スコア（0-100）
    pub health_score: f64,
    pub health_rating: String,
    pub organic_matter: String,
    pub texture: String,
    pub drainage: String,
    pub color_analysis: ColorAnalysis,
    pub texture_metrics: TextureMetrics,
    pub recommendations: Recommendations,
}

/// 数値フォームの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingField {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
    Moisture,
}

impl ReadingField {
    /// フォーム表示順
    pub const ALL: [ReadingField; 5] = [
        ReadingField::Nitrogen,
        ReadingField::Phosphorus,
        ReadingField::Potassium,
        ReadingField::Ph,
        ReadingField::Moisture,
    ];

    /// JSONキー兼input name
    pub fn name(&self) -> &'static str {
        match self {
            ReadingField::Nitrogen => "nitrogen",
            ReadingField::Phosphorus => "phosphorus",
            ReadingField::Potassium => "potassium",
            ReadingField::Ph => "ph",
            ReadingField::Moisture => "moisture",
        }
    }

    /// プレースホルダ（項目名の大文字）
    pub fn placeholder(&self) -> String {
        self.name().to_uppercase()
    }
}

impl std::str::FromStr for ReadingField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ReadingField::ALL
            .into_iter()
            .find(|f| f.name() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// 土壌の数値入力（入力された文字列のまま送信する）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilReadings {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub ph: String,
    pub moisture: String,
}

impl SoilReadings {
    pub fn get(&self, field: ReadingField) -> &str {
        match field {
            ReadingField::Nitrogen => &self.nitrogen,
            ReadingField::Phosphorus => &self.phosphorus,
            ReadingField::Potassium => &self.potassium,
            ReadingField::Ph => &self.ph,
            ReadingField::Moisture => &self.moisture,
        }
    }

    pub fn set(&mut self, field: ReadingField, value: String) {
        let slot = match field {
            ReadingField::Nitrogen => &mut self.nitrogen,
            ReadingField::Phosphorus => &mut self.phosphorus,
            ReadingField::Potassium => &mut self.potassium,
            ReadingField::Ph => &mut self.ph,
            ReadingField::Moisture => &mut self.moisture,
        };
        *slot = value;
    }

    /// 未入力の項目（表示順）
    pub fn missing_fields(&self) -> Vec<ReadingField> {
        ReadingField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// 受信したJSON本文
///
/// 表示には受信した原文を使う（キー順や数値の表記を変えない）。
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBody {
    pub text: String,
    pub value: serde_json::Value,
}

impl ResponseBody {
    /// 本文をJSONとして解析する（前後の空白は除く）
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let value = serde_json::from_str(text)?;
        Ok(Self {
            text: text.to_string(),
            value,
        })
    }
}

impl From<serde_json::Value> for ResponseBody {
    fn from(value: serde_json::Value) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }
}

/// ワークフローが保持する結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// レスポンスをそのまま表示する（植物・数値フォーム）
    Raw(ResponseBody),
    /// 土壌ダッシュボード表示
    Soil {
        analysis: SoilAnalysis,
        /// デモ用フォールバック結果かどうか
        fallback: bool,
    },
}

impl Outcome {
    pub fn soil_analysis(&self) -> Option<&SoilAnalysis> {
        match self {
            Outcome::Soil { analysis, .. } => Some(analysis),
            Outcome::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<&serde_json::Value> {
        match self {
            Outcome::Raw(body) => Some(&body.value),
            Outcome::Soil { .. } => None,
        }
    }

    /// 受信した原文
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Outcome::Raw(body) => Some(&body.text),
            Outcome::Soil { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Soil { fallback: true, .. })
    }
}
