//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use agricare::error::AgriCareError;
use agricare::image_input;
use agricare_common::{CaptureSource, InputMode, Workflow};
use std::path::Path;
use tempfile::tempdir;

/// 存在しない画像を読み込んだ場合
#[test]
fn test_load_nonexistent_image() {
    let result = image_input::load_image(Path::new("/nonexistent/path/leaf.jpg"));
    assert!(matches!(result, Err(AgriCareError::FileNotFound(_))));
}

/// ディレクトリを画像として渡した場合
#[test]
fn test_load_directory_as_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = image_input::load_image(dir.path());
    assert!(matches!(result, Err(AgriCareError::FileNotFound(_))));
}

/// 画像でないファイルはワークフローで拒否される
#[test]
fn test_text_file_rejected_by_workflow() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let artifact = image_input::load_image(&path).expect("読み込み失敗");
    assert_eq!(artifact.mime_type, "application/octet-stream");

    let mut workflow = Workflow::new(InputMode::SoilImage);
    let err: AgriCareError = workflow
        .select_image(CaptureSource::FilePicker, artifact)
        .unwrap_err()
        .into();
    assert_eq!(format!("{}", err), "Please select a valid image file");
    assert!(workflow.image().is_none());
}

/// AgriCareErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AgriCareError::Config("テスト設定エラー".to_string()),
        AgriCareError::FileNotFound("leaf.jpg".to_string()),
        AgriCareError::ImageLoad("壊れた画像".to_string()),
        AgriCareError::Submission("Error connecting to backend!".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = AgriCareError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AgriCareError = io_err.into();

    assert!(matches!(err, AgriCareError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AgriCareError = json_err.into();

    assert!(matches!(err, AgriCareError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = agricare_common::Error::Http(503);
    let err: AgriCareError = common_err.into();

    assert!(matches!(err, AgriCareError::Common(_)));
}

/// エラーチェーン（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let common_err = agricare_common::Error::Camera("Unable to access camera. Please check permissions.".to_string());
    let err: AgriCareError = common_err.into();

    // 透過的エラーなのでメッセージがそのまま表示される
    assert_eq!(format!("{}", err), "Unable to access camera. Please check permissions.");
}
