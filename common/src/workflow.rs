//! 選択 → 送信 → 表示 のワークフロー
//!
//! 植物画像・土壌画像・土壌数値フォームの3ページを、入力モードで切り替える
//! 1つの状態機械で扱う。通信はフロントエンド側（reqwest / fetch）が行い、
//! ここでは送信内容の組み立てと結果の反映だけを担当する。

use crate::capture::{CaptureSource, CaptureState, ImageArtifact};
use crate::config::{join_url, EndpointConfig};
use crate::dashboard::DashboardView;
use crate::error::{Error, Result};
use crate::fallback::demo_analysis;
use crate::treatment::Treatment;
use crate::types::{Outcome, ReadingField, ResponseBody, SoilAnalysis, SoilReadings};

/// 入力モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// 植物の葉画像（ファイル選択のみ）
    PlantImage,
    /// 土壌画像（ファイル選択・ドロップ・カメラ）
    SoilImage,
    /// 土壌の数値フォーム
    SoilReadings,
}

/// 送信失敗の見せ方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePresentation {
    /// ページ内のエラーバナー
    Banner,
    /// ブロッキングなアラート
    Alert,
}

impl InputMode {
    pub const ALL: [InputMode; 3] = [InputMode::PlantImage, InputMode::SoilImage, InputMode::SoilReadings];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::PlantImage => "plant",
            InputMode::SoilImage => "soil-image",
            InputMode::SoilReadings => "soil-readings",
        }
    }

    /// 推論サービス側のパス
    pub fn path(&self) -> &'static str {
        match self {
            InputMode::PlantImage => "/predict",
            InputMode::SoilImage => "/predict-soil",
            InputMode::SoilReadings => "/predict_soil",
        }
    }

    /// 送信先URL
    pub fn endpoint(&self, endpoints: &EndpointConfig) -> String {
        let base = match self {
            InputMode::PlantImage => &endpoints.plant_url,
            InputMode::SoilImage => &endpoints.soil_image_url,
            InputMode::SoilReadings => &endpoints.soil_readings_url,
        };
        join_url(base, self.path())
    }

    /// multipart のフィールド名（画像モードのみ）
    pub fn upload_field(&self) -> Option<&'static str> {
        match self {
            InputMode::PlantImage => Some("file"),
            InputMode::SoilImage => Some("image"),
            InputMode::SoilReadings => None,
        }
    }

    pub fn accepts(&self, source: CaptureSource) -> bool {
        match self {
            InputMode::PlantImage => source == CaptureSource::FilePicker,
            InputMode::SoilImage => true,
            InputMode::SoilReadings => false,
        }
    }

    pub fn supports_camera(&self) -> bool {
        self.accepts(CaptureSource::Camera)
    }

    pub fn supports_drag_drop(&self) -> bool {
        self.accepts(CaptureSource::DragDrop)
    }

    pub fn is_image_mode(&self) -> bool {
        self.upload_field().is_some()
    }

    pub fn failure_presentation(&self) -> FailurePresentation {
        match self {
            InputMode::SoilImage => FailurePresentation::Banner,
            InputMode::PlantImage | InputMode::SoilReadings => FailurePresentation::Alert,
        }
    }

    /// 画像未選択時のメッセージ
    pub fn missing_image_message(&self) -> &'static str {
        match self {
            InputMode::PlantImage => "Please upload an image first!",
            InputMode::SoilImage | InputMode::SoilReadings => "Please select an image first",
        }
    }

    /// 送信失敗時のメッセージ
    pub fn failure_message(&self) -> &'static str {
        match self {
            InputMode::SoilImage => "Failed to analyze soil. Please try again.",
            InputMode::PlantImage | InputMode::SoilReadings => "Error connecting to backend!",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            InputMode::PlantImage => "🌿 Plant Disease Detection",
            InputMode::SoilImage => "🌱 Soil Health Analysis",
            InputMode::SoilReadings => "🌍 Soil Health Prediction",
        }
    }

    /// クライアント側のルート
    pub fn route(&self) -> &'static str {
        match self {
            InputMode::PlantImage => "/plant",
            InputMode::SoilImage => "/soil/image",
            InputMode::SoilReadings => "/soil",
        }
    }

    /// レスポンス本文から表示用の結果を取り出す
    pub fn extract(&self, body: ResponseBody) -> Result<Outcome> {
        match self {
            InputMode::PlantImage | InputMode::SoilReadings => Ok(Outcome::Raw(body)),
            InputMode::SoilImage => {
                let analysis = body
                    .value
                    .get("analysis")
                    .filter(|v| v.is_object())
                    .ok_or_else(|| Error::Payload("missing `analysis` object".to_string()))?;
                let analysis: SoilAnalysis = serde_json::from_value(analysis.clone())
                    .map_err(|e| Error::Payload(format!("malformed `analysis`: {}", e)))?;
                Ok(Outcome::Soil { analysis, fallback: false })
            }
        }
    }
}

impl std::str::FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        InputMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown mode: {}. Use plant, soil-image, or soil-readings", s))
    }
}

/// 送信内容
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    /// multipart/form-data で画像を送る
    Multipart {
        url: String,
        field: &'static str,
        artifact: ImageArtifact,
    },
    /// application/json で本文を送る
    Json {
        url: String,
        body: serde_json::Value,
    },
}

impl SubmitRequest {
    pub fn url(&self) -> &str {
        match self {
            SubmitRequest::Multipart { url, .. } | SubmitRequest::Json { url, .. } => url,
        }
    }
}

/// 送信の世代番号
///
/// 選択やリセットで世代が進み、古い世代の完了通知は捨てられる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 開始済みの送信
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub ticket: Ticket,
    pub request: SubmitRequest,
}

/// ワークフローの状態
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    mode: InputMode,
    capture: CaptureState,
    readings: SoilReadings,
    outcome: Option<Outcome>,
    error: Option<String>,
    loading: bool,
    generation: u64,
    demo_fallback: bool,
}

impl Workflow {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            capture: CaptureState::new(),
            readings: SoilReadings::default(),
            outcome: None,
            error: None,
            loading: false,
            generation: 0,
            demo_fallback: true,
        }
    }

    /// 送信失敗時にデモ結果を表示するか（土壌画像モードのみ有効）
    pub fn with_demo_fallback(mut self, enabled: bool) -> Self {
        self.demo_fallback = enabled;
        self
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn capture(&self) -> &CaptureState {
        &self.capture
    }

    pub fn image(&self) -> Option<&ImageArtifact> {
        self.capture.image()
    }

    pub fn preview(&self) -> Option<&str> {
        self.capture.preview()
    }

    pub fn readings(&self) -> &SoilReadings {
        &self.readings
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 画像を選択する
    ///
    /// 成功時は以前の結果・エラーを消す。不正な画像は状態を変えずエラーを記録する。
    pub fn select_image(&mut self, source: CaptureSource, artifact: ImageArtifact) -> Result<()> {
        self.select(source, artifact, None)
    }

    /// カメラ撮影画像をプレビュー付きで選択する
    pub fn select_captured(&mut self, artifact: ImageArtifact, preview: String) -> Result<()> {
        self.select(CaptureSource::Camera, artifact, Some(preview))
    }

    fn select(
        &mut self,
        source: CaptureSource,
        artifact: ImageArtifact,
        preview: Option<String>,
    ) -> Result<()> {
        if !self.mode.accepts(source) {
            return Err(Error::UnsupportedSource(source.as_str().to_string()));
        }

        let accepted = match preview {
            Some(preview) => self.capture.accept_with_preview(source, artifact, preview),
            None => self.capture.accept(source, artifact),
        };

        match accepted {
            Ok(()) => {
                self.outcome = None;
                self.error = None;
                self.advance_generation();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 数値フォームの値を更新
    pub fn set_reading(&mut self, field: ReadingField, value: impl Into<String>) {
        self.readings.set(field, value.into());
    }

    /// 送信を開始する
    ///
    /// 送信中は `Error::Busy`。入力不足はエラーを記録して返す。
    pub fn begin_submission(&mut self, endpoints: &EndpointConfig) -> Result<PendingSubmission> {
        if self.loading {
            return Err(Error::Busy);
        }

        let request = match self.build_request(endpoints) {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.loading = true;
        self.error = None;
        Ok(PendingSubmission {
            ticket: Ticket(self.generation),
            request,
        })
    }

    fn build_request(&self, endpoints: &EndpointConfig) -> Result<SubmitRequest> {
        let url = self.mode.endpoint(endpoints);

        match self.mode.upload_field() {
            Some(field) => {
                let artifact = self
                    .capture
                    .image()
                    .ok_or_else(|| Error::MissingImage(self.mode.missing_image_message().to_string()))?;
                Ok(SubmitRequest::Multipart {
                    url,
                    field,
                    artifact: artifact.clone(),
                })
            }
            None => {
                let missing = self.readings.missing_fields();
                if !missing.is_empty() {
                    let names: Vec<_> = missing.iter().map(|f| f.name()).collect();
                    return Err(Error::IncompleteReadings(names.join(", ")));
                }
                Ok(SubmitRequest::Json {
                    url,
                    body: serde_json::to_value(&self.readings)?,
                })
            }
        }
    }

    /// 送信結果を反映する
    ///
    /// 古い世代の結果は無視して false を返す。
    pub fn complete_submission(
        &mut self,
        ticket: Ticket,
        response: Result<ResponseBody>,
    ) -> bool {
        if ticket.0 != self.generation || !self.loading {
            return false;
        }
        self.loading = false;

        match response.and_then(|body| self.mode.extract(body)) {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(self.mode.failure_message().to_string());
                self.outcome = if self.mode == InputMode::SoilImage && self.demo_fallback {
                    Some(Outcome::Soil {
                        analysis: demo_analysis(),
                        fallback: true,
                    })
                } else {
                    None
                };
            }
        }
        true
    }

    /// 初期状態に戻す（送信中の結果は破棄される）
    pub fn reset(&mut self) {
        self.capture.clear();
        self.readings = SoilReadings::default();
        self.outcome = None;
        self.error = None;
        self.advance_generation();
    }

    fn advance_generation(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// 土壌ダッシュボード
    pub fn dashboard(&self) -> Option<DashboardView> {
        self.outcome
            .as_ref()
            .and_then(Outcome::soil_analysis)
            .map(DashboardView::from_analysis)
    }

    /// 生JSONの表示文字列（受信した原文のまま）
    pub fn raw_text(&self) -> Option<String> {
        self.outcome
            .as_ref()
            .and_then(Outcome::raw_text)
            .map(str::to_string)
    }

    /// 植物診断の治療アドバイス
    pub fn treatment(&self) -> Option<Treatment> {
        if self.mode != InputMode::PlantImage {
            return None;
        }
        self.outcome
            .as_ref()
            .and_then(Outcome::raw)
            .and_then(Treatment::from_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::HealthBand;
    use serde_json::json;

    fn jpeg() -> ImageArtifact {
        ImageArtifact::new("sample.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF])
    }

    fn text_file() -> ImageArtifact {
        ImageArtifact::new("notes.txt", "text/plain", b"hello".to_vec())
    }

    fn endpoints() -> EndpointConfig {
        EndpointConfig {
            plant_url: "http://plant.local".to_string(),
            soil_image_url: "http://soil.local/".to_string(),
            soil_readings_url: "http://readings.local".to_string(),
        }
    }

    fn filled_readings(workflow: &mut Workflow) {
        for (field, value) in ReadingField::ALL.into_iter().zip(["40", "12", "30", "6.5", "21"]) {
            workflow.set_reading(field, value);
        }
    }

    #[test]
    fn test_mode_endpoints() {
        let endpoints = endpoints();
        assert_eq!(InputMode::PlantImage.endpoint(&endpoints), "http://plant.local/predict");
        assert_eq!(InputMode::SoilImage.endpoint(&endpoints), "http://soil.local/predict-soil");
        assert_eq!(InputMode::SoilReadings.endpoint(&endpoints), "http://readings.local/predict_soil");
        assert_eq!(InputMode::PlantImage.upload_field(), Some("file"));
        assert_eq!(InputMode::SoilImage.upload_field(), Some("image"));
        assert_eq!(InputMode::SoilReadings.upload_field(), None);
    }

    #[test]
    fn test_mode_sources() {
        assert!(InputMode::PlantImage.accepts(CaptureSource::FilePicker));
        assert!(!InputMode::PlantImage.supports_drag_drop());
        assert!(!InputMode::PlantImage.supports_camera());
        assert!(InputMode::SoilImage.supports_camera());
        assert!(InputMode::SoilImage.supports_drag_drop());
        assert!(!InputMode::SoilReadings.accepts(CaptureSource::FilePicker));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("soil-image".parse::<InputMode>(), Ok(InputMode::SoilImage));
        assert_eq!("PLANT".parse::<InputMode>(), Ok(InputMode::PlantImage));
        assert!("garden".parse::<InputMode>().is_err());
    }

    #[test]
    fn test_invalid_image_keeps_state_and_sets_error() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let kept = workflow.image().cloned();

        assert!(workflow.select_image(CaptureSource::DragDrop, text_file()).is_err());
        assert_eq!(workflow.image().cloned(), kept);
        assert_eq!(workflow.error(), Some("Please drop a valid image file"));

        assert!(workflow.select_image(CaptureSource::FilePicker, text_file()).is_err());
        assert_eq!(workflow.error(), Some("Please select a valid image file"));
    }

    #[test]
    fn test_unsupported_source_is_rejected() {
        let mut workflow = Workflow::new(InputMode::PlantImage);
        let err = workflow.select_image(CaptureSource::DragDrop, jpeg()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSource(_)));
        assert!(workflow.image().is_none());
        assert!(workflow.error().is_none());
    }

    #[test]
    fn test_new_selection_clears_previous_result() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let pending = workflow.begin_submission(&endpoints()).unwrap();
        workflow.complete_submission(pending.ticket, Err(Error::Transport("offline".into())));
        assert!(workflow.outcome().is_some());
        assert!(workflow.error().is_some());

        workflow.select_image(CaptureSource::DragDrop, jpeg()).unwrap();
        assert!(workflow.outcome().is_none());
        assert!(workflow.error().is_none());
    }

    #[test]
    fn test_soil_success_builds_dashboard() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();

        let pending = workflow.begin_submission(&endpoints()).unwrap();
        assert!(workflow.is_loading());
        match &pending.request {
            SubmitRequest::Multipart { url, field, artifact } => {
                assert_eq!(url, "http://soil.local/predict-soil");
                assert_eq!(*field, "image");
                assert_eq!(artifact.file_name, "sample.jpg");
            }
            other => panic!("unexpected request: {:?}", other),
        }

        let body = json!({"analysis": {"soil_type": "Clay", "health_score": 42}});
        assert!(workflow.complete_submission(pending.ticket, Ok(body.into())));
        assert!(!workflow.is_loading());
        assert!(workflow.error().is_none());

        let view = workflow.dashboard().expect("dashboard missing");
        assert_eq!(view.title, "Clay Soil");
        assert_eq!(view.score_width_css(), "42%");
        assert_eq!(view.band, HealthBand::from_score(42.0));
        assert!(!workflow.outcome().unwrap().is_fallback());
    }

    #[test]
    fn test_soil_failure_uses_demo_fallback() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();

        let pending = workflow.begin_submission(&endpoints()).unwrap();
        workflow.complete_submission(pending.ticket, Err(Error::Transport("connection refused".into())));

        assert_eq!(workflow.error(), Some("Failed to analyze soil. Please try again."));
        let outcome = workflow.outcome().expect("fallback missing");
        assert!(outcome.is_fallback());
        let analysis = outcome.soil_analysis().unwrap();
        assert_eq!(analysis.soil_type, "Loamy");
        assert_eq!(analysis.health_score, 75.0);
    }

    #[test]
    fn test_soil_missing_analysis_key_is_failure() {
        for body in [json!({"result": "ok"}), json!({"analysis": "Clay"}), json!({"analysis": {"health_score": "high"}})] {
            let mut workflow = Workflow::new(InputMode::SoilImage);
            workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
            let pending = workflow.begin_submission(&endpoints()).unwrap();
            workflow.complete_submission(pending.ticket, Ok(body.into()));
            assert!(workflow.outcome().unwrap().is_fallback());
            assert!(workflow.error().is_some());
        }
    }

    #[test]
    fn test_soil_failure_without_fallback() {
        let mut workflow = Workflow::new(InputMode::SoilImage).with_demo_fallback(false);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let pending = workflow.begin_submission(&endpoints()).unwrap();
        workflow.complete_submission(pending.ticket, Err(Error::Http(500)));

        assert!(workflow.outcome().is_none());
        assert_eq!(workflow.error(), Some("Failed to analyze soil. Please try again."));
    }

    #[test]
    fn test_plant_failure_leaves_result_empty() {
        let mut workflow = Workflow::new(InputMode::PlantImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let pending = workflow.begin_submission(&endpoints()).unwrap();
        workflow.complete_submission(pending.ticket, Err(Error::Http(502)));

        assert!(workflow.outcome().is_none());
        assert_eq!(workflow.error(), Some("Error connecting to backend!"));
        assert_eq!(workflow.mode().failure_presentation(), FailurePresentation::Alert);
    }

    #[test]
    fn test_plant_raw_result_and_treatment() {
        let mut workflow = Workflow::new(InputMode::PlantImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let pending = workflow.begin_submission(&endpoints()).unwrap();
        match &pending.request {
            SubmitRequest::Multipart { url, field, .. } => {
                assert_eq!(url, "http://plant.local/predict");
                assert_eq!(*field, "file");
            }
            other => panic!("unexpected request: {:?}", other),
        }

        let body = json!({"disease": "Leaf rust", "treatment": {"treatment": ["Apply sulfur"]}});
        workflow.complete_submission(pending.ticket, Ok(body.into()));
        assert_eq!(
            workflow.raw_text().as_deref(),
            Some(r#"{"disease":"Leaf rust","treatment":{"treatment":["Apply sulfur"]}}"#)
        );
        assert_eq!(workflow.treatment().unwrap().treatment, vec!["Apply sulfur"]);
        assert!(workflow.dashboard().is_none());
    }

    #[test]
    fn test_missing_image_messages() {
        let mut plant = Workflow::new(InputMode::PlantImage);
        let err = plant.begin_submission(&endpoints()).unwrap_err();
        assert_eq!(err.to_string(), "Please upload an image first!");
        assert!(!plant.is_loading());

        let mut soil = Workflow::new(InputMode::SoilImage);
        soil.begin_submission(&endpoints()).unwrap_err();
        assert_eq!(soil.error(), Some("Please select an image first"));
    }

    #[test]
    fn test_busy_while_in_flight() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let pending = workflow.begin_submission(&endpoints()).unwrap();

        assert!(matches!(workflow.begin_submission(&endpoints()), Err(Error::Busy)));

        workflow.complete_submission(pending.ticket, Ok(json!({"analysis": {}}).into()));
        assert!(workflow.begin_submission(&endpoints()).is_ok());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let stale = workflow.begin_submission(&endpoints()).unwrap();

        workflow.reset();
        assert!(!workflow.is_loading());
        workflow.select_image(CaptureSource::Camera, jpeg()).unwrap();

        let body = json!({"analysis": {"soil_type": "Sandy"}});
        assert!(!workflow.complete_submission(stale.ticket, Ok(body.into())));
        assert!(workflow.outcome().is_none());
    }

    #[test]
    fn test_readings_request() {
        let mut workflow = Workflow::new(InputMode::SoilReadings);
        filled_readings(&mut workflow);

        let pending = workflow.begin_submission(&endpoints()).unwrap();
        assert_eq!(
            pending.request,
            SubmitRequest::Json {
                url: "http://readings.local/predict_soil".to_string(),
                body: json!({
                    "nitrogen": "40",
                    "phosphorus": "12",
                    "potassium": "30",
                    "ph": "6.5",
                    "moisture": "21"
                }),
            }
        );

        workflow.complete_submission(pending.ticket, Ok(json!({"health": "good"}).into()));
        assert_eq!(workflow.raw_text().as_deref(), Some(r#"{"health":"good"}"#));
        assert!(workflow.treatment().is_none());
    }

    #[test]
    fn test_readings_incomplete() {
        let mut workflow = Workflow::new(InputMode::SoilReadings);
        workflow.set_reading(ReadingField::Nitrogen, "40");
        workflow.set_reading(ReadingField::Moisture, "21");

        let err = workflow.begin_submission(&endpoints()).unwrap_err();
        assert!(matches!(err, Error::IncompleteReadings(ref m) if m == "phosphorus, potassium, ph"));
        assert!(!workflow.is_loading());
        assert_eq!(workflow.error(), Some("Please fill in all fields"));
    }

    #[test]
    fn test_raw_text_keeps_key_order_and_number_spelling() {
        let mut workflow = Workflow::new(InputMode::PlantImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let pending = workflow.begin_submission(&endpoints()).unwrap();

        let wire = r#"{"prediction":"Tomato___Late_blight","confidence":0.970,"rank":1.0}"#;
        workflow.complete_submission(pending.ticket, ResponseBody::parse(wire));

        assert_eq!(workflow.raw_text().as_deref(), Some(wire));
        assert_eq!(workflow.outcome().and_then(Outcome::raw).unwrap()["rank"], 1.0);
    }

    #[test]
    fn test_camera_capture_preview() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow
            .select_captured(jpeg(), "data:image/jpeg;base64,/9j/".to_string())
            .unwrap();
        assert_eq!(workflow.preview(), Some("data:image/jpeg;base64,/9j/"));
        assert_eq!(workflow.capture().source(), Some(CaptureSource::Camera));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut workflow = Workflow::new(InputMode::SoilImage);
        workflow.select_image(CaptureSource::FilePicker, jpeg()).unwrap();
        let pending = workflow.begin_submission(&endpoints()).unwrap();
        workflow.complete_submission(pending.ticket, Err(Error::Http(500)));

        workflow.reset();
        assert!(workflow.image().is_none());
        assert!(workflow.preview().is_none());
        assert!(workflow.outcome().is_none());
        assert!(workflow.error().is_none());
    }
}
