//! 植物診断レスポンスの治療アドバイス
//!
//! レスポンスに `treatment` オブジェクトがあれば、生JSONの下に表示する。

use serde::{Deserialize, Serialize};

/// 表示する注意書き
pub const TREATMENT_DISCLAIMER: &str = "This AI diagnosis is for guidance only. \
For severe infections or valuable crops, please consult with a local agricultural \
extension office or plant pathologist for professional advice and treatment recommendations.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Treatment {
    pub description: Option<String>,
    pub symptoms: Option<String>,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
}

impl Treatment {
    /// レスポンスから取り出す（キーがない・形式不正なら None）
    pub fn from_response(response: &serde_json::Value) -> Option<Self> {
        let value = response.get("treatment")?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// description が空でなければ返す
    pub fn about(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn common_symptoms(&self) -> Option<&str> {
        self.symptoms.as_deref().filter(|s| !s.is_empty())
    }
}
