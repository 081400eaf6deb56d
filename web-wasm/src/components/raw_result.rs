//! 生JSON結果と治療アドバイス

use agricare_common::treatment::TREATMENT_DISCLAIMER;
use agricare_common::Treatment;
use leptos::prelude::*;

#[component]
pub fn RawResult(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="raw-result">
            <h3>"Result:"</h3>
            <p class="raw-json">{text}</p>
        </div>
    }
}

fn list_card(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="treatment-card">
                <h3>{title}</h3>
                <ul class="treatment-list">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            </div>
        }
    })
}

#[component]
pub fn TreatmentAdvice(treatment: Treatment) -> impl IntoView {
    let about = treatment.about().map(str::to_string);
    let symptoms = treatment.common_symptoms().map(str::to_string);

    view! {
        <div class="treatment-section">
            <h2>"Treatment Recommendations"</h2>

            {about.map(|description| {
                view! {
                    <div class="treatment-about">
                        <h3>"About This Disease"</h3>
                        <p>{description}</p>
                        {symptoms.map(|s| view! {
                            <p class="treatment-symptoms">
                                <strong>"Common symptoms:"</strong>
                                " "
                                {s}
                            </p>
                        })}
                    </div>
                }
            })}

            <div class="treatment-grid">
                {list_card("🏥 Treatment Steps", treatment.treatment)}
                {list_card("🛡️ Prevention Tips", treatment.prevention)}
            </div>

            <div class="treatment-note">
                <h4>"⚠️ Important Note"</h4>
                <p>{TREATMENT_DISCLAIMER}</p>
            </div>
        </div>
    }
}
