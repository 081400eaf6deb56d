//! fetch による送信
//!
//! multipart は FormData、数値フォームは JSON 文字列を本文にする。
//! 2xx 以外は `Error::Http`、本文がJSONでなければ `Error::Json`。

use agricare_common::{Error, ImageArtifact, ResponseBody, Result, SubmitRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

use crate::error::transport;

/// 画像をBlobに変換
pub fn to_blob(artifact: &ImageArtifact) -> Result<Blob> {
    let bytes = js_sys::Uint8Array::from(artifact.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&artifact.mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(transport)
}

fn build_request(request: &SubmitRequest) -> Result<Request> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    match request {
        SubmitRequest::Multipart { url, field, artifact } => {
            let form = FormData::new().map_err(transport)?;
            let blob = to_blob(artifact)?;
            form.append_with_blob_and_filename(field, &blob, &artifact.file_name)
                .map_err(transport)?;
            // Content-Type はブラウザが boundary 付きで付与する
            opts.set_body(&form);
            Request::new_with_str_and_init(url, &opts).map_err(transport)
        }
        SubmitRequest::Json { url, body } => {
            opts.set_body(&JsValue::from_str(&body.to_string()));
            let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(transport)?;
            Ok(request)
        }
    }
}

/// 送信してJSON本文を返す
pub async fn send(request: &SubmitRequest) -> Result<ResponseBody> {
    let web_request = build_request(request)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is unavailable".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&web_request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        return Err(Error::Http(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| Error::Payload("response body is not text".to_string()))?;

    ResponseBody::parse(&text)
}
