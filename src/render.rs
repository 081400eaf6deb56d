//! ターミナル表示

use agricare_common::dashboard::{DashboardView, MetricBar};
use agricare_common::treatment::{Treatment, TREATMENT_DISCLAIMER};

const BAR_CELLS: usize = 30;

/// 幅(%)からテキストバーを作る
pub fn text_bar(width_percent: f64) -> String {
    let filled = ((width_percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

fn metric_line(metric: &MetricBar) -> String {
    format!("  {:<22} {}", metric.label, text_bar(metric.width_percent))
}

/// 土壌ダッシュボード
pub fn dashboard(view: &DashboardView) -> String {
    let mut lines = vec![
        view.title.clone(),
        format!("{} ({})", view.rating, view.band.as_str()),
        view.score.clone(),
        format!("{} {}", text_bar(view.score_width_percent), view.score_width_css()),
        String::new(),
        "📊 Soil Properties".to_string(),
    ];

    for (label, value) in &view.properties {
        lines.push(format!("  {}: {}", label, value));
    }

    lines.push(String::new());
    lines.push("🎨 Color Analysis".to_string());
    lines.extend(view.color_metrics.iter().map(metric_line));

    if !view.recommendations.is_empty() {
        lines.push(String::new());
        lines.push("💡 Improvement Recommendations".to_string());
        for section in &view.recommendations {
            lines.push(section.heading());
            lines.extend(section.items.iter().map(|item| format!("  - {}", item)));
        }
    }

    lines.join("\n")
}

/// 生JSONの結果
pub fn raw_result(text: &str) -> String {
    format!("Result:\n{}", text)
}

/// 植物の治療アドバイス
pub fn treatment(treatment: &Treatment) -> String {
    let mut lines = vec!["Treatment Recommendations".to_string()];

    if let Some(about) = treatment.about() {
        lines.push(String::new());
        lines.push("About This Disease".to_string());
        lines.push(format!("  {}", about));
        if let Some(symptoms) = treatment.common_symptoms() {
            lines.push(format!("  Common symptoms: {}", symptoms));
        }
    }

    for (heading, items) in [
        ("🏥 Treatment Steps", &treatment.treatment),
        ("🛡️ Prevention Tips", &treatment.prevention),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(heading.to_string());
        lines.extend(items.iter().map(|item| format!("  - {}", item)));
    }

    lines.push(String::new());
    lines.push(format!("⚠️ {}", TREATMENT_DISCLAIMER));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agricare_common::demo_analysis;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0.0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(text_bar(50.0).chars().filter(|c| *c == '█').count(), 15);
        assert_eq!(text_bar(150.0).chars().filter(|c| *c == '░').count(), 0);
    }

    #[test]
    fn test_dashboard_render() {
        let view = DashboardView::from_analysis(&demo_analysis());
        let text = dashboard(&view);

        assert!(text.starts_with("Loamy Soil\n"));
        assert!(text.contains("Health Rating: Good (light-green)"));
        assert!(text.contains("Score: 75/100"));
        assert!(text.contains("75%"));
        assert!(text.contains("  Drainage: Good"));
        assert!(text.contains("Hue: 25.0°"));
        assert!(text.contains("⚡ Immediate Actions"));
        assert!(text.contains("  - Apply compost tea monthly"));
    }

    #[test]
    fn test_treatment_render_skips_empty_sections() {
        let advice = Treatment {
            description: Some("Fungal infection".to_string()),
            prevention: vec!["Water at the base".to_string()],
            ..Default::default()
        };
        let text = treatment(&advice);

        assert!(text.contains("About This Disease"));
        assert!(!text.contains("Common symptoms"));
        assert!(!text.contains("Treatment Steps"));
        assert!(text.contains("  - Water at the base"));
        assert!(text.contains("for guidance only"));
    }
}
