//! JsValue からの変換

use agricare_common::Error;
use wasm_bindgen::JsValue;

/// JS例外の表示文字列
pub fn describe(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// fetch 周りの失敗
pub fn transport(value: JsValue) -> Error {
    Error::Transport(describe(&value))
}
