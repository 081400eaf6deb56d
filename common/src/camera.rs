//! カメラセッションのライフサイクル
//!
//! idle → requesting → active → idle
//!
//! ストリームはセッションが排他的に所有し、停止・撮影・破棄のどの経路でも
//! `stop` で全トラックを解放する。

use crate::capture::ImageArtifact;
use crate::error::{Error, Result};

/// カメラにアクセスできなかったときのメッセージ
pub const CAMERA_DENIED_MESSAGE: &str = "Unable to access camera. Please check permissions.";

/// 撮影画像のファイル名
pub const CAPTURE_FILE_NAME: &str = "soil-sample.jpg";

/// 撮影画像のJPEG品質
pub const CAPTURE_JPEG_QUALITY: f64 = 0.8;

/// プラットフォームのメディアストリーム
pub trait CameraStream {
    /// 全トラックを停止する
    fn stop_all_tracks(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Idle,
    Requesting,
    Active,
}

impl CameraState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraState::Idle => "idle",
            CameraState::Requesting => "requesting",
            CameraState::Active => "active",
        }
    }
}

/// カメラセッション
#[derive(Debug)]
pub struct CameraSession<S: CameraStream> {
    state: CameraState,
    stream: Option<S>,
}

impl<S: CameraStream> Default for CameraSession<S> {
    fn default() -> Self {
        Self {
            state: CameraState::Idle,
            stream: None,
        }
    }
}

impl<S: CameraStream> CameraSession<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == CameraState::Active
    }

    pub fn stream(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    /// ストリーム要求を開始する
    ///
    /// idle以外では何もせず false を返す。
    pub fn begin_request(&mut self) -> bool {
        if self.state != CameraState::Idle {
            return false;
        }
        self.state = CameraState::Requesting;
        true
    }

    /// 要求したストリームを受け取る
    ///
    /// 要求中に停止されていた場合はストリームを即座に解放して false を返す。
    pub fn activate(&mut self, mut stream: S) -> bool {
        if self.state != CameraState::Requesting {
            stream.stop_all_tracks();
            return false;
        }
        self.stream = Some(stream);
        self.state = CameraState::Active;
        true
    }

    /// 要求が拒否された・デバイスがない
    pub fn fail(&mut self) -> Error {
        self.stop();
        Error::Camera(CAMERA_DENIED_MESSAGE.to_string())
    }

    /// 現在のフレームを静止画にして停止する
    ///
    /// `grab` が失敗した場合はカメラを開いたままにする。
    pub fn capture<F>(&mut self, grab: F) -> Result<ImageArtifact>
    where
        F: FnOnce(&S) -> Result<ImageArtifact>,
    {
        let stream = match (&self.state, &self.stream) {
            (CameraState::Active, Some(stream)) => stream,
            _ => return Err(Error::Camera("Camera is not active".to_string())),
        };
        let artifact = grab(stream)?;
        self.stop();
        Ok(artifact)
    }

    /// 全トラックを解放してidleに戻る（冪等）
    pub fn stop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop_all_tracks();
        }
        self.state = CameraState::Idle;
    }
}

impl<S: CameraStream> Drop for CameraSession<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// 停止回数を数えるだけのストリーム
    struct FakeStream {
        stops: Rc<Cell<u32>>,
    }

    impl CameraStream for FakeStream {
        fn stop_all_tracks(&mut self) {
            self.stops.set(self.stops.get() + 1);
        }
    }

    fn fake() -> (FakeStream, Rc<Cell<u32>>) {
        let stops = Rc::new(Cell::new(0));
        (FakeStream { stops: stops.clone() }, stops)
    }

    fn frame(_: &FakeStream) -> Result<ImageArtifact> {
        Ok(ImageArtifact::new(CAPTURE_FILE_NAME, "image/jpeg", vec![0xFF, 0xD8]))
    }

    #[test]
    fn test_start_and_stop() {
        let (stream, stops) = fake();
        let mut session = CameraSession::new();

        assert!(session.begin_request());
        assert_eq!(session.state(), CameraState::Requesting);
        assert!(session.activate(stream));
        assert!(session.is_active());
        assert!(session.stream().is_some());

        session.stop();
        assert_eq!(session.state(), CameraState::Idle);
        assert!(session.stream().is_none());
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut session: CameraSession<FakeStream> = CameraSession::new();
        session.stop();
        session.stop();
        assert_eq!(session.state(), CameraState::Idle);

        let (stream, stops) = fake();
        session.begin_request();
        session.activate(stream);
        session.stop();
        session.stop();
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn test_denied_returns_to_idle() {
        let mut session: CameraSession<FakeStream> = CameraSession::new();
        session.begin_request();

        let err = session.fail();
        assert_eq!(err.to_string(), CAMERA_DENIED_MESSAGE);
        assert_eq!(session.state(), CameraState::Idle);
        assert!(session.stream().is_none());
    }

    #[test]
    fn test_request_only_from_idle() {
        let (stream, _) = fake();
        let mut session = CameraSession::new();
        assert!(session.begin_request());
        assert!(!session.begin_request());
        session.activate(stream);
        assert!(!session.begin_request());
    }

    #[test]
    fn test_late_stream_is_released() {
        let (stream, stops) = fake();
        let mut session = CameraSession::new();
        session.begin_request();
        // 許可ダイアログ表示中に閉じられた
        session.stop();

        assert!(!session.activate(stream));
        assert_eq!(stops.get(), 1);
        assert_eq!(session.state(), CameraState::Idle);
        assert!(session.stream().is_none());
    }

    #[test]
    fn test_capture_stops_camera() {
        let (stream, stops) = fake();
        let mut session = CameraSession::new();
        session.begin_request();
        session.activate(stream);

        let artifact = session.capture(frame).unwrap();
        assert_eq!(artifact.file_name, CAPTURE_FILE_NAME);
        assert_eq!(session.state(), CameraState::Idle);
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn test_capture_failure_keeps_camera_open() {
        let (stream, stops) = fake();
        let mut session = CameraSession::new();
        session.begin_request();
        session.activate(stream);

        let result = session.capture(|_| Err(Error::Camera("no frame".to_string())));
        assert!(result.is_err());
        assert!(session.is_active());
        assert_eq!(stops.get(), 0);
    }

    #[test]
    fn test_capture_requires_active() {
        let mut session: CameraSession<FakeStream> = CameraSession::new();
        assert!(session.capture(frame).is_err());
    }

    #[test]
    fn test_drop_releases_stream() {
        let (stream, stops) = fake();
        {
            let mut session = CameraSession::new();
            session.begin_request();
            session.activate(stream);
        }
        assert_eq!(stops.get(), 1);
    }
}
