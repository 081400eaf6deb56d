//! ヘッダーコンポーネント

use agricare_common::InputMode;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <A href="/">
                <h1>"AgriCare AI 🌱"</h1>
            </A>
            <nav class="nav-links">
                {InputMode::ALL
                    .into_iter()
                    .map(|mode| view! { <A href=mode.route()>{mode.title()}</A> })
                    .collect_view()}
            </nav>
        </header>
    }
}
