//! ブラウザ上のテスト（wasm-pack test --headless --firefox）

#![cfg(target_arch = "wasm32")]

use agricare_common::{Error, ImageArtifact, SubmitRequest};
use agricare_web::api::inference::{send, to_blob};
use agricare_web::config::AppConfig;
use agricare_web::error::{describe, transport};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_blob_keeps_bytes_and_type() {
    let artifact = ImageArtifact::new("soil.png", "image/png", vec![0x89, b'P', b'N', b'G']);
    let blob = to_blob(&artifact).unwrap();
    assert_eq!(blob.size(), 4.0);
    assert_eq!(blob.type_(), "image/png");
}

#[wasm_bindgen_test]
fn test_describe_js_values() {
    assert_eq!(describe(&JsValue::from_str("denied")), "denied");

    let err: JsValue = js_sys::Error::new("NotAllowedError").into();
    assert_eq!(describe(&err), "NotAllowedError");
}

#[wasm_bindgen_test]
fn test_transport_error_message() {
    let err = transport(JsValue::from_str("Failed to fetch"));
    assert!(matches!(err, Error::Transport(ref m) if m == "Failed to fetch"));
}

#[wasm_bindgen_test]
fn test_default_config_uses_localhost() {
    let config = AppConfig::from_lookup(|_| None);
    assert_eq!(config.endpoints.soil_image_url, "http://localhost:5000");
    assert!(config.demo_fallback);
}

#[wasm_bindgen_test]
async fn test_unreachable_service_is_transport_error() {
    let request = SubmitRequest::Json {
        url: "http://127.0.0.1:9/predict_soil".to_string(),
        body: serde_json::json!({"nitrogen": "1"}),
    };
    let result = send(&request).await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
