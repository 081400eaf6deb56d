//! 推論サービスへの送信（reqwest）
//!
//! 1回のPOSTでJSONを受け取るだけで、再送はしない。

use crate::error::Result;
use agricare_common::{Error, ResponseBody, SubmitRequest};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct InferenceClient {
    http: reqwest::Client,
}

impl InferenceClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// リクエストを送信してレスポンス本文を返す
    ///
    /// 通信失敗・非2xx・不正なJSONはすべて共通エラーとして返し、
    /// ワークフローの失敗処理に渡せるようにする。
    pub async fn send(&self, request: &SubmitRequest) -> agricare_common::Result<ResponseBody> {
        let builder = match request {
            SubmitRequest::Multipart { url, field, artifact } => {
                let part = Part::bytes(artifact.bytes.clone())
                    .file_name(artifact.file_name.clone())
                    .mime_str(&artifact.mime_type)
                    .map_err(|e| Error::Transport(e.to_string()))?;
                let form = Form::new().part(*field, part);
                tracing::info!(url = %url, field = *field, file = %artifact.file_name, "multipart upload");
                self.http.post(url).multipart(form)
            }
            SubmitRequest::Json { url, body } => {
                tracing::info!(url = %url, "json submit");
                self.http.post(url).json(body)
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "inference service returned error status");
            return Err(Error::Http(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        ResponseBody::parse(&text)
    }
}
