//! エラーバナー

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error">
                <strong>"Error:"</strong>
                " "
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
