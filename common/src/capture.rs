//! 画像の取得とプレビュー
//!
//! ファイル選択・ドラッグ&ドロップ・カメラ撮影のいずれか1つから画像を受け取り、
//! MIMEタイプを検証してプレビュー用のData URLを生成する。

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

/// 画像の取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    FilePicker,
    DragDrop,
    Camera,
}

impl CaptureSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureSource::FilePicker => "file-picker",
            CaptureSource::DragDrop => "drag-drop",
            CaptureSource::Camera => "camera",
        }
    }

    /// 不正なファイルだった場合のメッセージ
    pub fn invalid_message(&self) -> &'static str {
        match self {
            CaptureSource::DragDrop => "Please drop a valid image file",
            CaptureSource::FilePicker | CaptureSource::Camera => "Please select a valid image file",
        }
    }
}

/// 送信対象の画像データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    pub file_name: String,
    /// 申告されたMIMEタイプ（例: "image/jpeg"）
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageArtifact {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// MIMEタイプが "image/" で始まるか
    pub fn is_image(&self) -> bool {
        is_image_media_type(&self.mime_type)
    }

    /// プレビュー用 Data URL
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// Data URL から画像を復元（canvas.toDataURL の結果など）
    pub fn from_data_url(file_name: impl Into<String>, data_url: &str) -> Result<Self> {
        let payload = extract_base64_from_data_url(data_url)
            .ok_or_else(|| Error::InvalidImage("Malformed data URL".to_string()))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| Error::InvalidImage(format!("Malformed data URL: {}", e)))?;
        Ok(Self::new(file_name, extract_mime_type_from_data_url(data_url), bytes))
    }
}

/// MIMEタイプが画像かどうか
pub fn is_image_media_type(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// Data URLからBase64データ部分を抽出
///
/// "data:image/jpeg;base64,/9j/4AAQ..." → "/9j/4AAQ..."
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出（抽出失敗時は "image/jpeg"）
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("image/jpeg")
}

/// 選択中の画像とプレビュー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureState {
    image: Option<ImageArtifact>,
    preview: Option<String>,
    source: Option<CaptureSource>,
}

impl CaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画像を受け入れる
    ///
    /// 不正な場合は状態を変えずにエラーを返す。
    pub fn accept(&mut self, source: CaptureSource, artifact: ImageArtifact) -> Result<()> {
        if !artifact.is_image() {
            return Err(Error::InvalidImage(source.invalid_message().to_string()));
        }
        self.preview = Some(artifact.to_data_url());
        self.image = Some(artifact);
        self.source = Some(source);
        Ok(())
    }

    /// 既に生成済みのプレビューと一緒に受け入れる（canvas の Data URL など）
    pub fn accept_with_preview(
        &mut self,
        source: CaptureSource,
        artifact: ImageArtifact,
        preview: String,
    ) -> Result<()> {
        self.accept(source, artifact)?;
        self.preview = Some(preview);
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn image(&self) -> Option<&ImageArtifact> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn source(&self) -> Option<CaptureSource> {
        self.source
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
