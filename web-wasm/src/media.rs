//! カメラ取得とフレーム撮影
//!
//! `getUserMedia` で背面カメラを要求し、撮影時は canvas 経由で JPEG にする。

use agricare_common::camera::{CAPTURE_FILE_NAME, CAPTURE_JPEG_QUALITY};
use agricare_common::{CameraStream, Error, ImageArtifact, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use crate::error::describe;

/// ブラウザのメディアストリーム
#[derive(Debug, Clone)]
pub struct WebStream {
    stream: MediaStream,
}

impl WebStream {
    pub fn new(stream: MediaStream) -> Self {
        Self { stream }
    }

    pub fn media_stream(&self) -> &MediaStream {
        &self.stream
    }
}

impl CameraStream for WebStream {
    fn stop_all_tracks(&mut self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

/// 背面カメラ (`facingMode: environment`) の制約
fn rear_camera_constraints() -> std::result::Result<MediaStreamConstraints, JsValue> {
    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &"facingMode".into(), &"environment".into())?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints.set_audio(&JsValue::FALSE);
    Ok(constraints)
}

/// カメラストリームを要求する
///
/// 拒否・デバイスなしはどちらも `Err`。詳細はコンソールに出す。
pub async fn request_rear_camera() -> Result<WebStream> {
    let result = async {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
        let devices = window.navigator().media_devices()?;
        let promise = devices.get_user_media_with_constraints(&rear_camera_constraints()?)?;
        let stream: MediaStream = JsFuture::from(promise).await?.dyn_into()?;
        Ok::<_, JsValue>(WebStream::new(stream))
    }
    .await;

    result.map_err(|e| Error::Camera(describe(&e)))
}

/// video要素にストリームを接続して再生する
pub fn attach(video: &HtmlVideoElement, stream: &WebStream) {
    video.set_src_object(Some(stream.media_stream()));
    if let Ok(promise) = video.play() {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                gloo::console::warn!(format!("video.play() failed: {}", describe(&e)));
            }
        });
    }
}

pub fn detach(video: &HtmlVideoElement) {
    video.set_src_object(None);
}

/// 現在のフレームを JPEG Data URL にする
pub fn grab_frame_data_url(video: &HtmlVideoElement) -> Result<String> {
    let camera_error = |e: JsValue| Error::Camera(describe(&e));

    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return Err(Error::Camera("Camera frame is not ready yet".to_string()));
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Camera("document is unavailable".to_string()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(camera_error)?
        .dyn_into()
        .map_err(|_| Error::Camera("canvas element expected".to_string()))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(camera_error)?
        .ok_or_else(|| Error::Camera("2d context is unavailable".to_string()))?
        .dyn_into()
        .map_err(|_| Error::Camera("2d context expected".to_string()))?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(camera_error)?;

    canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(CAPTURE_JPEG_QUALITY))
        .map_err(camera_error)
}

/// フレームを撮影画像にする（プレビュー用 Data URL 付き）
pub fn capture_frame(video: &HtmlVideoElement) -> Result<(ImageArtifact, String)> {
    let data_url = grab_frame_data_url(video)?;
    let artifact = ImageArtifact::from_data_url(CAPTURE_FILE_NAME, &data_url)?;
    Ok((artifact, data_url))
}
