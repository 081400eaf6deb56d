//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::config::AppConfig;
use crate::pages::{
    landing::Landing,
    workflow::{PlantPage, SoilImagePage, SoilReadingsPage},
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_build_env());

    view! {
        <Router>
            <div class="container">
                <Header />
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="text-muted">"Page not found"</p> }>
                        <Route path=path!("/") view=Landing />
                        <Route path=path!("/plant") view=PlantPage />
                        <Route path=path!("/soil") view=SoilReadingsPage />
                        <Route path=path!("/soil/image") view=SoilImagePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
