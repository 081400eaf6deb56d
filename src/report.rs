//! 結果JSONの保存

use crate::error::Result;
use agricare_common::{Outcome, Workflow};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub mode: String,
    /// 送信した画像のファイル名（数値フォームは None）
    pub image: Option<String>,
    pub analyzed_at: String,
    /// デモ用フォールバック結果かどうか
    pub fallback: bool,
    pub error: Option<String>,
    pub result: serde_json::Value,
}

impl Report {
    pub fn from_workflow(workflow: &Workflow) -> Result<Self> {
        let result = match workflow.outcome() {
            Some(Outcome::Raw(body)) => body.value.clone(),
            Some(Outcome::Soil { analysis, .. }) => serde_json::to_value(analysis)?,
            None => serde_json::Value::Null,
        };

        Ok(Self {
            mode: workflow.mode().as_str().to_string(),
            image: workflow.image().map(|i| i.file_name.clone()),
            analyzed_at: chrono::Local::now().to_rfc3339(),
            fallback: workflow.outcome().is_some_and(Outcome::is_fallback),
            error: workflow.error().map(str::to_string),
            result,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agricare_common::{CaptureSource, EndpointConfig, ImageArtifact, InputMode};
    use tempfile::tempdir;

    #[test]
    fn test_report_from_fallback() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow
            .select_image(CaptureSource::FilePicker, ImageArtifact::new("s.jpg", "image/jpeg", vec![1]))
            .unwrap();
        let pending = workflow.begin_submission(&EndpointConfig::default()).unwrap();
        workflow.complete_submission(pending.ticket, Err(agricare_common::Error::Http(500)));

        let report = Report::from_workflow(&workflow).unwrap();
        assert_eq!(report.mode, "soil-image");
        assert_eq!(report.image.as_deref(), Some("s.jpg"));
        assert!(report.fallback);
        assert_eq!(report.result["soil_type"], "Loamy");
        assert!(report.error.is_some());

        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.save(&path).unwrap();
        let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["fallback"], true);
        assert_eq!(saved["result"]["health_score"], 75.0);
    }
}
