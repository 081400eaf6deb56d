//! トップページ

use agricare_common::InputMode;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="landing">
            <h1>"Welcome to AgriCare AI 🌱"</h1>
            <p>"Diagnose plant diseases and check the health of your soil."</p>

            <div class="landing-actions">
                {InputMode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <div class=format!("landing-button {}", mode.as_str())>
                                <A href=mode.route()>{mode.title()}</A>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
