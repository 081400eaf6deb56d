//! 入力モードごとのワークフローページ
//!
//! 状態は `Workflow` に集約し、送信は `Ticket` で世代を照合してから反映する。

use agricare_common::{
    CaptureSource, Error, FailurePresentation, ImageArtifact, InputMode, Outcome, Workflow,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::inference;
use crate::components::{
    camera_panel::CameraPanel,
    error_banner::ErrorBanner,
    loading::Loading,
    raw_result::{RawResult, TreatmentAdvice},
    readings_form::ReadingsForm,
    soil_dashboard::SoilDashboard,
    upload_area::UploadArea,
};
use crate::config::AppConfig;

#[component]
pub fn PlantPage() -> impl IntoView {
    view! { <WorkflowPage mode=InputMode::PlantImage /> }
}

#[component]
pub fn SoilImagePage() -> impl IntoView {
    view! { <WorkflowPage mode=InputMode::SoilImage /> }
}

#[component]
pub fn SoilReadingsPage() -> impl IntoView {
    view! { <WorkflowPage mode=InputMode::SoilReadings /> }
}

/// ページ上の文言
struct PageText {
    subtitle: Option<&'static str>,
    submit: &'static str,
    loading: &'static str,
}

fn page_text(mode: InputMode) -> PageText {
    match mode {
        InputMode::PlantImage => PageText {
            subtitle: None,
            submit: "🔍 Predict",
            loading: "Analyzing your plant...",
        },
        InputMode::SoilImage => PageText {
            subtitle: Some(
                "Upload a photo of your soil sample to get detailed health analysis and improvement recommendations",
            ),
            submit: "🔬 Analyze Soil Health",
            loading: "Analyzing your soil sample...",
        },
        InputMode::SoilReadings => PageText {
            subtitle: None,
            submit: "🌱 Predict Soil Health",
            loading: "Predicting soil health...",
        },
    }
}

/// 送信ボタンを出すか
///
/// 植物モードは常に出し、画像なしで押されたら案内を alert する。
/// 土壌画像モードはプレビューがあり結果が未表示のときだけ。
fn submit_visible(mode: InputMode, has_preview: bool, has_outcome: bool, loading: bool) -> bool {
    match mode {
        InputMode::PlantImage => !loading,
        _ => has_preview && !has_outcome && !loading,
    }
}

#[component]
pub fn WorkflowPage(mode: InputMode) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let workflow = RwSignal::new(Workflow::new(mode).with_demo_fallback(config.demo_fallback));
    let endpoints = StoredValue::new(config.endpoints);
    let text = page_text(mode);

    // バナー表示のモードは Workflow の error をそのまま描画する
    let report = move |message: String| {
        if mode.failure_presentation() == FailurePresentation::Alert {
            gloo::dialogs::alert(&message);
        }
    };

    let on_image = move |source: CaptureSource, artifact: ImageArtifact| {
        if let Some(Err(e)) = workflow.try_update(|w| w.select_image(source, artifact)) {
            gloo::console::warn!(format!("Rejected {} input: {}", source.as_str(), e));
            report(e.to_string());
        }
    };

    let on_capture = move |artifact: ImageArtifact, preview: String| {
        if let Some(Err(e)) = workflow.try_update(|w| w.select_captured(artifact, preview)) {
            report(e.to_string());
        }
    };

    let submit = move || {
        let pending = match workflow.try_update(|w| w.begin_submission(&endpoints.get_value())) {
            Some(Ok(pending)) => pending,
            Some(Err(Error::Busy)) | None => return,
            Some(Err(e)) => {
                report(e.to_string());
                return;
            }
        };

        spawn_local(async move {
            let response = inference::send(&pending.request).await;
            if let Err(e) = &response {
                gloo::console::error!(format!("Request to {} failed: {}", pending.request.url(), e));
            }

            let applied = workflow
                .try_update(|w| w.complete_submission(pending.ticket, response))
                .unwrap_or(false);
            if !applied {
                return;
            }
            if let Some(message) = workflow.with_untracked(|w| w.error().map(str::to_string)) {
                report(message);
            }
        });
    };

    let reset = move |_| workflow.update(Workflow::reset);

    let preview = move || workflow.with(|w| w.preview().map(str::to_string));
    let has_outcome = move || workflow.with(|w| w.outcome().is_some());
    let is_loading = move || workflow.with(Workflow::is_loading);
    let banner = Signal::derive(move || {
        (mode.failure_presentation() == FailurePresentation::Banner)
            .then(|| workflow.with(|w| w.error().map(str::to_string)))
            .flatten()
    });

    // 土壌画像モードは画像選択後に入力欄を隠す
    let show_inputs = move || mode == InputMode::PlantImage || preview().is_none();

    view! {
        <div class=format!("workflow-page {}", mode.as_str())>
            <div class="section-header">
                <h2>{mode.title()}</h2>
                {text.subtitle.map(|s| view! { <p>{s}</p> })}
            </div>

            {mode
                .is_image_mode()
                .then(move || {
                    view! {
                        <section class="upload-section">
                            <Show when=show_inputs>
                                <UploadArea mode=mode on_image=on_image />
                                {mode.supports_camera().then(|| view! { <CameraPanel on_capture=on_capture /> })}
                            </Show>

                            {move || preview().map(|src| view! {
                                <img src=src alt="preview" class="preview-image" />
                            })}

                            <Show when=move || submit_visible(mode, preview().is_some(), has_outcome(), is_loading())>
                                <button class="analyze-button" on:click=move |_| submit()>
                                    {text.submit}
                                </button>
                            </Show>

                            <Show when=move || mode == InputMode::SoilImage && preview().is_some()>
                                <button class="reset-button" on:click=reset>
                                    "🔄 New Analysis"
                                </button>
                            </Show>
                        </section>
                    }
                })}

            {(mode == InputMode::SoilReadings).then(move || view! {
                <ReadingsForm workflow=workflow submit_label=text.submit on_submit=submit />
            })}

            <Show when=is_loading>
                <Loading message=text.loading />
            </Show>

            <ErrorBanner message=banner />

            {move || {
                workflow.with(|w| {
                    let fallback = w.outcome().is_some_and(Outcome::is_fallback);
                    w.dashboard().map(|view_model| view! {
                        <SoilDashboard view_model=view_model fallback=fallback />
                    })
                })
            }}

            {move || workflow.with(|w| w.raw_text()).map(|raw| view! { <RawResult text=raw /> })}

            {move || workflow.with(|w| w.treatment()).map(|treatment| view! {
                <TreatmentAdvice treatment=treatment />
            })}
        </div>
    }
}
