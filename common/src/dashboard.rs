//! 土壌解析ダッシュボードの表示モデル
//!
//! SoilAnalysis をフロントエンド非依存の表示用データに変換する。
//! Leptosコンポーネントとターミナル表示の両方がこれを描画する。

use crate::types::SoilAnalysis;

/// 健康スコアの色帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Green,
    LightGreen,
    Amber,
    Orange,
    Red,
}

impl HealthBand {
    /// スコアから色帯を決定（境界値は上位の帯に含む）
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthBand::Green
        } else if score >= 65.0 {
            HealthBand::LightGreen
        } else if score >= 50.0 {
            HealthBand::Amber
        } else if score >= 35.0 {
            HealthBand::Orange
        } else {
            HealthBand::Red
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            HealthBand::Green => "#4CAF50",
            HealthBand::LightGreen => "#8BC34A",
            HealthBand::Amber => "#FFC107",
            HealthBand::Orange => "#FF9800",
            HealthBand::Red => "#F44336",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthBand::Green => "green",
            HealthBand::LightGreen => "light-green",
            HealthBand::Amber => "amber",
            HealthBand::Orange => "orange",
            HealthBand::Red => "red",
        }
    }
}

/// 0-100 に収めたバー幅
pub fn bar_width(value: f64, scale: f64) -> f64 {
    if scale <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value * 100.0 / scale).clamp(0.0, 100.0)
}

/// 色指標バー
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBar {
    /// "Hue: 25.0°" のような表示文字列
    pub label: String,
    /// バー幅（%）
    pub width_percent: f64,
}

/// 改善提案の1カテゴリ
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSection {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: Vec<String>,
}

impl RecommendationSection {
    pub fn heading(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

/// ダッシュボード全体
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// "Clay Soil"
    pub title: String,
    /// "Health Rating: Good"
    pub rating: String,
    /// "Score: 42/100"
    pub score: String,
    pub score_width_percent: f64,
    pub band: HealthBand,
    /// (ラベル, 値)
    pub properties: Vec<(&'static str, String)>,
    pub color_metrics: Vec<MetricBar>,
    /// 空でないカテゴリのみ
    pub recommendations: Vec<RecommendationSection>,
}

impl DashboardView {
    pub fn from_analysis(analysis: &SoilAnalysis) -> Self {
        let color = &analysis.color_analysis;
        let recs = &analysis.recommendations;

        let sections = [
            ("⚡", "Immediate Actions", &recs.immediate_actions),
            ("📈", "Long-term Improvements", &recs.long_term_improvements),
            ("🧪", "Fertilizer Suggestions", &recs.fertilizer_suggestions),
            ("🌿", "Planting Recommendations", &recs.planting_recommendations),
        ];

        Self {
            title: format!("{} Soil", analysis.soil_type),
            rating: format!("Health Rating: {}", analysis.health_rating),
            score: format!("Score: {}/100", analysis.health_score),
            score_width_percent: bar_width(analysis.health_score, 100.0),
            band: HealthBand::from_score(analysis.health_score),
            properties: vec![
                ("Soil Type", analysis.soil_type.clone()),
                ("Texture", analysis.texture.clone()),
                ("Organic Matter", analysis.organic_matter.clone()),
                ("Drainage", analysis.drainage.clone()),
            ],
            color_metrics: vec![
                MetricBar {
                    label: format!("Hue: {:.1}°", color.hue),
                    width_percent: bar_width(color.hue, 360.0),
                },
                MetricBar {
                    label: format!("Saturation: {:.1}%", color.saturation),
                    width_percent: bar_width(color.saturation, 255.0),
                },
                MetricBar {
                    label: format!("Brightness: {:.1}%", color.brightness),
                    width_percent: bar_width(color.brightness, 255.0),
                },
            ],
            recommendations: sections
                .into_iter()
                .filter(|(_, _, items)| !items.is_empty())
                .map(|(icon, title, items)| RecommendationSection {
                    icon,
                    title,
                    items: items.clone(),
                })
                .collect(),
        }
    }

    /// CSS の width 値（"42%"）
    pub fn score_width_css(&self) -> String {
        format!("{}%", self.score_width_percent)
    }
}
