//! 土壌数値フォーム

use agricare_common::{ReadingField, Workflow};
use leptos::prelude::*;
use web_sys::SubmitEvent;

#[component]
pub fn ReadingsForm<F>(
    workflow: RwSignal<Workflow>,
    submit_label: &'static str,
    on_submit: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit();
    };

    view! {
        <form class="readings-form" on:submit=submit>
            {ReadingField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <input
                            type="number"
                            step="any"
                            inputmode="decimal"
                            name=field.name()
                            placeholder=field.placeholder()
                            class="reading-input"
                            required=true
                            prop:value=move || workflow.with(|w| w.readings().get(field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                workflow.update(|w| w.set_reading(field, value));
                            }
                        />
                    }
                })
                .collect_view()}
            <button
                type="submit"
                class="predict-button readings"
                disabled=move || workflow.with(Workflow::is_loading)
            >
                {submit_label}
            </button>
        </form>
    }
}
