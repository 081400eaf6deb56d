//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Display文字列はそのまま画面のエラーバナーに表示される
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// image/ 以外のファイルが選択・ドロップされた
    #[error("{0}")]
    InvalidImage(String),

    /// 入力モードが受け付けない取得元
    #[error("Unsupported capture source: {0}")]
    UnsupportedSource(String),

    /// 画像未選択のまま送信しようとした
    #[error("{0}")]
    MissingImage(String),

    /// フォーム入力が不足している（未入力の項目名を保持）
    #[error("Please fill in all fields")]
    IncompleteReadings(String),

    /// 送信中の再送信
    #[error("A submission is already in progress")]
    Busy,

    #[error("{0}")]
    Camera(String),

    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    /// レスポンスに期待する構造がない
    #[error("Unexpected response payload: {0}")]
    Payload(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
