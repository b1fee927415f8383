//! Paper module - the immutable generated artifact

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short human-readable paper code, e.g. `FXP-7Q2ZD`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaperId(String);

impl PaperId {
    /// Prefix for all paper codes
    pub const PREFIX: &'static str = "FXP";

    /// Build a paper id from its 5-character suffix
    pub fn from_suffix(suffix: &str) -> Self {
        PaperId(format!("{}-{}", Self::PREFIX, suffix))
    }

    /// Reconstruct a paper id from its stored form
    pub fn from_string(s: impl Into<String>) -> Self {
        PaperId(s.into())
    }

    /// Get the full code as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chart kind, cycled `[bar, pie, line]` over the requested chart count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Grouped comparison bars
    Bar,

    /// Sentiment distribution summing to 100%
    Pie,

    /// Weekly trend line
    Line,
}

impl ChartKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
        }
    }

    /// Kind for the chart at `index`, cycling bar → pie → line
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => ChartKind::Bar,
            1 => ChartKind::Pie,
            _ => ChartKind::Line,
        }
    }
}

/// Declarative chart description - pure data, decoupled from rendering
///
/// `labels` and `data` are co-indexed; axis labels are absent for pie
/// charts. Rasterization is an external collaborator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart kind
    pub kind: ChartKind,

    /// Figure title, e.g. "Figure 2: Response Distribution"
    pub title: String,

    /// X-axis label (bar and line only)
    pub x_label: Option<String>,

    /// Y-axis label (bar and line only)
    pub y_label: Option<String>,

    /// Category labels, co-indexed with `data`
    pub labels: Vec<String>,

    /// Numeric series, co-indexed with `labels`
    pub data: Vec<f64>,

    /// Figure caption
    pub caption: String,
}

/// The four long-form sections, present only for short/full papers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongFormSections {
    /// Introduction prose
    pub introduction: String,

    /// Methods prose (sample size, locations, duration, ethics certificate)
    pub methods: String,

    /// Results prose (percentages, p-value, effect size)
    pub results: String,

    /// Discussion prose
    pub discussion: String,
}

/// A complete fabricated research paper
///
/// Immutable once produced; owned by the caller after return. All
/// list-valued fields serialize as ordered arrays, and the long-form
/// sections serialize as a nullable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPaper {
    /// Short human-readable code
    pub id: PaperId,

    /// Paper title
    pub title: String,

    /// Ordered fictional author names, "Surname, F. M." form
    pub authors: Vec<String>,

    /// Ordered fictional institutions
    pub affiliations: Vec<String>,

    /// Abstract text (always carries a fictional/parody disclaimer)
    pub abstract_text: String,

    /// Long-form sections, present iff length tier is short or full
    pub sections: Option<LongFormSections>,

    /// Limitations and parody disclaimer block
    pub limitations: String,

    /// Ordered fabricated reference strings
    pub references: Vec<String>,

    /// Ordered chart specifications
    pub charts: Vec<ChartSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_id_format() {
        let id = PaperId::from_suffix("A1B2C");
        assert_eq!(id.as_str(), "FXP-A1B2C");
        assert_eq!(id.to_string(), "FXP-A1B2C");
    }

    #[test]
    fn test_chart_kind_cycle() {
        assert_eq!(ChartKind::for_index(0), ChartKind::Bar);
        assert_eq!(ChartKind::for_index(1), ChartKind::Pie);
        assert_eq!(ChartKind::for_index(2), ChartKind::Line);
        assert_eq!(ChartKind::for_index(3), ChartKind::Bar);
        assert_eq!(ChartKind::for_index(7), ChartKind::Pie);
    }

    #[test]
    fn test_chart_spec_serde_round_trip() {
        let spec = ChartSpec {
            kind: ChartKind::Pie,
            title: "Figure 1: Response Distribution".to_string(),
            x_label: None,
            y_label: None,
            labels: vec!["Agree".to_string(), "Disagree".to_string()],
            data: vec![60.0, 40.0],
            caption: "Figure 1. Simulated.".to_string(),
        };

        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"kind\":\"pie\""));
        let back: ChartSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_sections_serialize_as_nullable() {
        let paper = GeneratedPaper {
            id: PaperId::from_suffix("00000"),
            title: "t".to_string(),
            authors: vec![],
            affiliations: vec![],
            abstract_text: "a".to_string(),
            sections: None,
            limitations: "l".to_string(),
            references: vec![],
            charts: vec![],
        };

        let json = serde_json::to_value(&paper).unwrap();
        assert!(json["sections"].is_null());
    }
}
