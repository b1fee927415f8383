//! Chart specification builder
//!
//! Produces declarative chart data, labels and captions; rasterization is
//! an external collaborator's job. Kinds cycle bar → pie → line over the
//! requested count, and the y-axis vocabulary follows the topic profile.

use crate::rng::PaperRng;
use fauxpaper_domain::{ChartKind, ChartSpec, Domain, TopicProfile};

/// Fixed participant-group labels for bar charts (a random 3-5 are kept)
const BAR_GROUP_LABELS: &[&str] = &[
    "Control Group",
    "Test Group A",
    "Test Group B",
    "Believers",
    "Skeptics",
];

/// Fixed sentiment categories for pie charts
const PIE_SENTIMENT_LABELS: &[&str] = &[
    "Strongly Agree",
    "Agree",
    "Neutral",
    "Disagree",
    "Strongly Disagree",
];

/// Weekly steps on line charts
const LINE_WEEKS: usize = 8;

/// Y-axis label options per domain
fn y_label_options(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Biochemistry => &["Concentration (μM)", "Enzyme Activity (%)", "Binding Affinity"],
        Domain::Physics => &["Energy (J)", "Force (N)", "Frequency (Hz)"],
        Domain::Nutrition => &["Caloric Intake (kcal)", "Nutrient Level (%)", "Satisfaction Score"],
        Domain::Psychology => &["Response Score", "Cognitive Load (%)", "Behavioral Index"],
        Domain::Technology => &["Processing Time (ms)", "Efficiency (%)", "User Engagement"],
        Domain::Economics => &["Value ($)", "ROI (%)", "Market Share (%)"],
        Domain::General => &["Agreement Level (%)", "Effect Size", "Response Rate (%)"],
    }
}

/// Build `chart_count` chart specifications for a classified claim
pub fn build_charts(
    rng: &mut PaperRng,
    profile: &TopicProfile,
    chart_count: u32,
) -> Vec<ChartSpec> {
    let y_labels = y_label_options(profile.domain);

    (0..chart_count as usize)
        .map(|index| match ChartKind::for_index(index) {
            ChartKind::Bar => bar_chart(rng, y_labels, index),
            ChartKind::Pie => pie_chart(rng, index),
            ChartKind::Line => line_chart(rng, y_labels, index),
        })
        .collect()
}

fn bar_chart(rng: &mut PaperRng, y_labels: &'static [&'static str], index: usize) -> ChartSpec {
    let label_count = rng.int(3..=5) as usize;
    let labels: Vec<String> = BAR_GROUP_LABELS[..label_count]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let data: Vec<f64> = labels.iter().map(|_| rng.int(20..=80) as f64).collect();
    let y_label = (*rng.pick(y_labels)).to_string();

    ChartSpec {
        kind: ChartKind::Bar,
        title: format!("Figure {}: Correlation Analysis", index + 1),
        x_label: Some("Participant Groups".to_string()),
        y_label: Some(y_label),
        labels,
        data,
        caption: format!(
            "Figure {}. Simulated data for parody purposes. Error bars represent \
             fictional confidence intervals.",
            index + 1
        ),
    }
}

fn pie_chart(rng: &mut PaperRng, index: usize) -> ChartSpec {
    let labels: Vec<String> = PIE_SENTIMENT_LABELS.iter().map(|s| s.to_string()).collect();
    let raw: Vec<u32> = labels.iter().map(|_| rng.int(10..=40)).collect();

    // Mandatory renormalization: shares sum to exactly 100.0 at one decimal.
    // The last slice absorbs the rounding residue.
    let total: u32 = raw.iter().sum();
    let mut data: Vec<f64> = raw
        .iter()
        .take(raw.len() - 1)
        .map(|&v| (v as f64 / total as f64 * 1000.0).round() / 10.0)
        .collect();
    let allocated: f64 = data.iter().sum();
    data.push(((100.0 - allocated) * 10.0).round() / 10.0);

    ChartSpec {
        kind: ChartKind::Pie,
        title: format!("Figure {}: Response Distribution", index + 1),
        x_label: None,
        y_label: None,
        labels,
        data,
        caption: format!(
            "Figure {}. Distribution of fictional responses. All data is simulated.",
            index + 1
        ),
    }
}

fn line_chart(rng: &mut PaperRng, y_labels: &'static [&'static str], index: usize) -> ChartSpec {
    let labels: Vec<String> = (1..=LINE_WEEKS).map(|week| format!("Week {}", week)).collect();
    // Rising baseline plus a per-step random increment
    let data: Vec<f64> = (0..LINE_WEEKS)
        .map(|step| (rng.int(30..=50) + step as u32 * rng.int(3..=7)) as f64)
        .collect();
    let y_label = (*rng.pick(y_labels)).to_string();

    ChartSpec {
        kind: ChartKind::Line,
        title: format!("Figure {}: Trend Over Time", index + 1),
        x_label: Some("Time Period".to_string()),
        y_label: Some(y_label),
        labels,
        data,
        caption: format!(
            "Figure {}. Temporal trend in fabricated data. Pattern is entirely coincidental.",
            index + 1
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> PaperRng {
        PaperRng::locked("chart builder checks")
    }

    fn general() -> TopicProfile {
        Domain::General.profile()
    }

    #[test]
    fn test_kinds_cycle_over_count() {
        let mut rng = rng();
        let charts = build_charts(&mut rng, &general(), 7);
        let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Bar,
                ChartKind::Pie,
                ChartKind::Line,
                ChartKind::Bar,
                ChartKind::Pie,
                ChartKind::Line,
                ChartKind::Bar,
            ]
        );
    }

    #[test]
    fn test_pie_sums_to_exactly_one_hundred() {
        let mut rng = rng();
        for _ in 0..50 {
            let spec = pie_chart(&mut rng, 1);
            let sum: f64 = spec.data.iter().sum();
            assert!((sum - 100.0).abs() < 0.1, "pie sum was {}", sum);
            assert_eq!(spec.labels.len(), 5);
            assert_eq!(spec.data.len(), 5);
        }
    }

    #[test]
    fn test_pie_has_no_axis_labels() {
        let mut rng = rng();
        let spec = pie_chart(&mut rng, 0);
        assert!(spec.x_label.is_none());
        assert!(spec.y_label.is_none());
    }

    #[test]
    fn test_bar_labels_and_data_co_indexed() {
        let mut rng = rng();
        for _ in 0..50 {
            let spec = bar_chart(&mut rng, y_label_options(Domain::General), 0);
            assert!((3..=5).contains(&spec.labels.len()));
            assert_eq!(spec.labels.len(), spec.data.len());
            for v in &spec.data {
                assert!((20.0..=80.0).contains(v), "bar value {}", v);
            }
        }
    }

    #[test]
    fn test_line_has_eight_weekly_steps() {
        let mut rng = rng();
        let spec = line_chart(&mut rng, y_label_options(Domain::General), 2);
        assert_eq!(spec.labels.len(), 8);
        assert_eq!(spec.labels[0], "Week 1");
        assert_eq!(spec.labels[7], "Week 8");
        for (step, v) in spec.data.iter().enumerate() {
            let lo = 30.0 + step as f64 * 3.0;
            let hi = 50.0 + step as f64 * 7.0;
            assert!((lo..=hi).contains(v), "step {} value {}", step, v);
        }
    }

    #[test]
    fn test_y_labels_follow_domain() {
        let mut rng = rng();
        let profile = Domain::Physics.profile();
        let charts = build_charts(&mut rng, &profile, 1);
        let y = charts[0].y_label.as_deref().unwrap();
        assert!(y_label_options(Domain::Physics).contains(&y));
    }

    #[test]
    fn test_captions_number_figures_from_one() {
        let mut rng = rng();
        let charts = build_charts(&mut rng, &general(), 3);
        assert!(charts[0].title.starts_with("Figure 1:"));
        assert!(charts[2].caption.starts_with("Figure 3."));
    }
}
