//! 土壌診断ダッシュボード

use agricare_common::DashboardView;
use leptos::prelude::*;

#[component]
pub fn SoilDashboard(view_model: DashboardView, #[prop(default = false)] fallback: bool) -> impl IntoView {
    let color = view_model.band.color();
    let score_width = view_model.score_width_css();

    view! {
        <section class="results-section">
            <Show when=move || fallback>
                <p class="demo-notice">"Showing demo analysis (the analysis service could not be reached)"</p>
            </Show>

            <div class="result-header">
                <h2 class="soil-type">{view_model.title}</h2>
                <div class="health-rating" style:color=color>{view_model.rating}</div>
                <div class="health-score">{view_model.score}</div>
                <div class="health-bar">
                    <div
                        class=format!("health-fill band-{}", view_model.band.as_str())
                        style:width=score_width
                        style:background=color
                    ></div>
                </div>
            </div>

            <div class="analysis-grid">
                <div class="analysis-card">
                    <h3>"📊 Soil Properties"</h3>
                    <div class="property-list">
                        {view_model
                            .properties
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="property-item">
                                        <span class="property-label">{format!("{}:", label)}</span>
                                        <span class="property-value">{value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="analysis-card">
                    <h3>"🎨 Color Analysis"</h3>
                    <div class="color-metrics">
                        {view_model
                            .color_metrics
                            .into_iter()
                            .map(|metric| {
                                view! {
                                    <div class="metric">
                                        <span>{metric.label}</span>
                                        <div class="metric-bar">
                                            <div style:width=format!("{}%", metric.width_percent)></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="recommendations-section">
                <h2>"💡 Improvement Recommendations"</h2>
                <div class="recommendation-grid">
                    {view_model
                        .recommendations
                        .into_iter()
                        .map(|section| {
                            view! {
                                <div class="recommendation-card">
                                    <h3>{section.heading()}</h3>
                                    <ul class="recommendation-list">
                                        {section.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
