//! アップロードエリアコンポーネント
//!
//! ファイル選択と（モードが許せば）ドラッグ&ドロップで1枚受け取る。

use agricare_common::{CaptureSource, ImageArtifact, InputMode};
use gloo::file::futures::read_as_bytes;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, Event, HtmlInputElement};

#[component]
pub fn UploadArea<F>(mode: InputMode, on_image: F) -> impl IntoView
where
    F: Fn(CaptureSource, ImageArtifact) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();
    let drag_drop = mode.supports_drag_drop();

    let handle_file = move |source: CaptureSource, file: web_sys::File| {
        let on_image = on_image.clone();
        spawn_local(async move {
            let file = gloo::file::File::from(file);
            match read_as_bytes(&file).await {
                Ok(bytes) => on_image(source, ImageArtifact::new(file.name(), file.raw_mime_type(), bytes)),
                Err(e) => gloo::console::error!(format!("Failed to read {}: {}", file.name(), e)),
            }
        });
    };

    let on_change = {
        let handle_file = handle_file.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(CaptureSource::FilePicker, file);
            }
            // 同じファイルを選び直しても change が発火するように
            input.set_value("");
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if !drag_drop {
            return;
        }

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(CaptureSource::DragDrop, file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if drag_drop {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let (icon, text, subtext) = match mode {
        InputMode::SoilImage => (
            "🌍",
            "Click to upload soil sample or drag and drop",
            "Take a clear photo of your soil sample for best results",
        ),
        _ => ("🌿", "Click to choose a leaf photo", "Supported formats: JPEG, PNG"),
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">{icon}</div>
            <div class="upload-text">{text}</div>
            <div class="upload-subtext">{subtext}</div>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                class="file-input"
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
