//! Embeddable HTML charts for the report

use crate::error::{InterviewCoachError, Result};
use crate::interview::RoundEvaluation;
use askama::Template;
use std::collections::HashMap;

/// Askama template for the per-round score bar chart
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{ title }}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            color: #333;
            max-width: 700px;
            margin: 0 auto;
            padding: 20px;
        }
        .chart h2 {
            text-align: center;
            color: #2c3e50;
        }
        .bar-row {
            display: flex;
            align-items: center;
            margin: 12px 0;
        }
        .bar-label {
            width: 140px;
            font-weight: bold;
        }
        .bar-track {
            flex: 1;
            background: #f0f0f0;
            border-radius: 4px;
            height: 28px;
        }
        .bar-fill {
            height: 100%;
            border-radius: 4px;
        }
        .bar-value {
            width: 60px;
            text-align: right;
            font-weight: bold;
        }
        .axis-note {
            text-align: center;
            color: #888;
            font-size: 0.9em;
        }
    </style>
</head>
<body>
    <div class="chart">
        <h2>{{ title }}</h2>
        {% for bar in bars %}
        <div class="bar-row">
            <span class="bar-label">{{ bar.label }}</span>
            <div class="bar-track">
                <div class="bar-fill" style="width: {{ bar.width_pct }}%; background: {{ bar.color }};"></div>
            </div>
            <span class="bar-value">{{ bar.score }}</span>
        </div>
        {% endfor %}
        <p class="axis-note">Average Score (0 to 10)</p>
    </div>
</body>
</html>"#, ext = "html")]
struct ScoreChartTemplate {
    title: String,
    bars: Vec<ChartBar>,
}

struct ChartBar {
    label: String,
    color: String,
    score: String,
    width_pct: String,
}

impl ChartBar {
    fn new(label: &str, color: &str, score: f64) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            score: format!("{:.2}", score),
            width_pct: format!("{:.1}", (score * 10.0).clamp(0.0, 100.0)),
        }
    }
}

/// Render the named chart set. Empty when no round ran.
pub fn render_charts(
    hr: Option<&RoundEvaluation>,
    technical: Option<&RoundEvaluation>,
) -> Result<HashMap<String, String>> {
    let mut charts = HashMap::new();
    let mut bars = Vec::new();

    if let Some(evaluation) = hr {
        bars.push(ChartBar::new("HR Round", "#FF6B6B", evaluation.average_score));
    }
    if let Some(evaluation) = technical {
        bars.push(ChartBar::new(
            "Technical Round",
            "#4ECDC4",
            evaluation.average_score,
        ));
    }

    if bars.is_empty() {
        return Ok(charts);
    }

    let template = ScoreChartTemplate {
        title: "Interview Round Scores".to_string(),
        bars,
    };
    let html = template.render().map_err(|e| {
        InterviewCoachError::ReportWrite(format!("Failed to render score chart: {}", e))
    })?;

    charts.insert("score_comparison".to_string(), html);
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::PerformanceLevel;

    fn round(average: f64) -> RoundEvaluation {
        RoundEvaluation {
            evaluations: Vec::new(),
            average_score: average,
            total_questions: 0,
            overall_feedback: String::new(),
            performance_level: PerformanceLevel::from_score(average),
        }
    }

    #[test]
    fn test_no_rounds_no_charts() {
        let charts = render_charts(None, None).unwrap();
        assert!(charts.is_empty());
    }

    #[test]
    fn test_score_comparison_contains_round_bars() {
        let hr = round(7.0);
        let technical = round(5.25);
        let charts = render_charts(Some(&hr), Some(&technical)).unwrap();

        let html = charts.get("score_comparison").unwrap();
        assert!(html.contains("Interview Round Scores"));
        assert!(html.contains("HR Round"));
        assert!(html.contains("Technical Round"));
        assert!(html.contains("#FF6B6B"));
        assert!(html.contains("width: 70.0%"));
        assert!(html.contains("5.25"));
    }
}
