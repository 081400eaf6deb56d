//! カメラパネル
//!
//! ストリームは `CameraSession` が所有し、閉じる・撮影・アンマウントの
//! どの経路でも全トラックを停止する。

use agricare_common::{CameraSession, CameraState, CameraStream, ImageArtifact};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::error_banner::ErrorBanner;
use crate::media::{self, WebStream};

#[component]
pub fn CameraPanel<F>(on_capture: F) -> impl IntoView
where
    F: Fn(ImageArtifact, String) + 'static + Clone,
{
    let session = StoredValue::new_local(CameraSession::<WebStream>::new());
    let state = RwSignal::new(CameraState::Idle);
    let camera_error = RwSignal::new(None::<String>);
    let video_ref = NodeRef::<html::Video>::new();

    on_cleanup(move || {
        session.try_update_value(|s| s.stop());
    });

    let open_camera = move |_| {
        if !session.try_update_value(|s| s.begin_request()).unwrap_or(false) {
            return;
        }
        camera_error.set(None);
        state.set(CameraState::Requesting);

        spawn_local(async move {
            match media::request_rear_camera().await {
                Ok(stream) => {
                    let handle = stream.clone();
                    match session.try_update_value(|s| s.activate(stream)) {
                        Some(true) => {
                            if let Some(video) = video_ref.get_untracked() {
                                media::attach(&video, &handle);
                            }
                            state.set(CameraState::Active);
                        }
                        Some(false) => {}
                        // ページが破棄済み
                        None => {
                            let mut orphan = handle;
                            orphan.stop_all_tracks();
                        }
                    }
                }
                Err(e) => {
                    gloo::console::error!(format!("Error accessing camera: {}", e));
                    let failed = session.try_update_value(|s| {
                        (s.state() == CameraState::Requesting).then(|| s.fail())
                    });
                    if let Some(Some(err)) = failed {
                        camera_error.try_set(Some(err.to_string()));
                        state.try_set(CameraState::Idle);
                    }
                }
            }
        });
    };

    let close_camera = move |_| {
        session.update_value(|s| s.stop());
        if let Some(video) = video_ref.get_untracked() {
            media::detach(&video);
        }
        state.set(CameraState::Idle);
    };

    let capture = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };

        let mut preview = None;
        let result = session.try_update_value(|s| {
            s.capture(|_| {
                let (artifact, data_url) = media::capture_frame(&video)?;
                preview = Some(data_url);
                Ok(artifact)
            })
        });

        match result {
            Some(Ok(artifact)) => {
                media::detach(&video);
                state.set(CameraState::Idle);
                let preview = preview.unwrap_or_else(|| artifact.to_data_url());
                on_capture(artifact, preview);
            }
            Some(Err(e)) => {
                gloo::console::warn!(format!("Capture failed: {}", e));
                camera_error.set(Some(e.to_string()));
            }
            None => {}
        }
    };

    view! {
        <div class="camera-section">
            <p class="camera-hint">"Or use your camera:"</p>

            <Show when=move || state.get() == CameraState::Idle>
                <button class="camera-button" on:click=open_camera>
                    "📷 Open Camera"
                </button>
            </Show>

            <Show when=move || state.get() == CameraState::Requesting>
                <p class="text-muted">"Waiting for camera permission..."</p>
            </Show>

            <div
                class="camera-preview"
                style:display=move || if state.get() == CameraState::Active { "block" } else { "none" }
            >
                <video node_ref=video_ref class="camera-video" autoplay=true playsinline=true muted=true />
                <div class="camera-actions">
                    <button class="camera-button" on:click=capture>
                        "📸 Capture Sample"
                    </button>
                    <button class="camera-button close" on:click=close_camera>
                        "❌ Close Camera"
                    </button>
                </div>
            </div>

            <ErrorBanner message=camera_error />
        </div>
    }
}
