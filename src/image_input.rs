//! 画像ファイルの読み込み
//!
//! MIMEタイプはファイル内容から判定し、判定できなければ拡張子を使う。
//! どちらでも判定できない場合は "application/octet-stream" とし、
//! ワークフロー側で不正な画像として扱われる。

use crate::error::{AgriCareError, Result};
use agricare_common::{CaptureSource, ImageArtifact};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// カメラ撮影と同じJPEG品質
pub const COMPRESS_QUALITY: u8 = 80;

const UNKNOWN_MIME: &str = "application/octet-stream";

/// ファイルを読み込んで送信用の画像にする
pub fn load_image(path: &Path) -> Result<ImageArtifact> {
    if !path.is_file() {
        return Err(AgriCareError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());

    let mime_type = detect_mime_type(path, &bytes);
    tracing::debug!(file = %file_name, mime = mime_type, size = bytes.len(), "image loaded");

    Ok(ImageArtifact::new(file_name, mime_type, bytes))
}

/// 内容 → 拡張子 の順でMIMEタイプを判定
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME)
}

/// 送信前の準備（画像でなければ選択時と同じエラー、画像なら必要に応じて再圧縮）
pub fn prepare_upload(artifact: ImageArtifact, compress: bool) -> Result<ImageArtifact> {
    if !artifact.is_image() {
        let message = CaptureSource::FilePicker.invalid_message().to_string();
        return Err(agricare_common::Error::InvalidImage(message).into());
    }
    if compress {
        return compress_to_jpeg(&artifact, COMPRESS_QUALITY);
    }
    Ok(artifact)
}

/// JPEGに再エンコード（透過はRGBに落とす）
pub fn compress_to_jpeg(artifact: &ImageArtifact, quality: u8) -> Result<ImageArtifact> {
    let img = image::load_from_memory(&artifact.bytes)
        .map_err(|e| AgriCareError::ImageLoad(format!("{}: {}", artifact.file_name, e)))?;
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| AgriCareError::ImageLoad(format!("JPEGエンコード失敗: {}", e)))?;

    let stem = Path::new(&artifact.file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());

    tracing::debug!(
        before = artifact.bytes.len(),
        after = buf.len(),
        width = rgb.width(),
        height = rgb.height(),
        "image recompressed"
    );

    Ok(ImageArtifact::new(format!("{}.jpg", stem), "image/jpeg", buf))
}
