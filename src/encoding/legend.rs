use crate::{
    core::constants::{LEGEND_GRADES_KM, LEGEND_SAMPLE_OFFSET_KM},
    encoding::{
        depth::{Color, DepthScale},
        popup::escape_html,
    },
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One legend entry: a depth range and its swatch color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendRow {
    pub lower: f64,
    /// `None` for the open-ended deepest band
    pub upper: Option<f64>,
    pub color: Color,
    pub label: String,
}

/// Depth legend, ordered shallow to deep (top to bottom when drawn)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub rows: Vec<LegendRow>,
}

impl Legend {
    /// Builds the rows from the legend grades. Each row's color is sampled
    /// just above its lower bound so it is unambiguous under either boundary
    /// policy.
    pub fn build(scale: &DepthScale) -> Self {
        let rows = LEGEND_GRADES_KM
            .iter()
            .enumerate()
            .map(|(i, &lower)| {
                let upper = LEGEND_GRADES_KM.get(i + 1).copied();
                let label = match upper {
                    Some(upper) => format!("{}–{}", lower, upper),
                    None => format!("{}+", lower),
                };
                LegendRow {
                    lower,
                    upper,
                    color: scale.classify(lower + LEGEND_SAMPLE_OFFSET_KM),
                    label,
                }
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `info legend` markup: one swatch per row, bounded rows suffixed with
    /// `unit` and separated by line breaks.
    pub fn to_html(&self, unit: &str) -> String {
        let unit = escape_html(unit);
        let mut html = String::from("<div class=\"info legend\">");
        for row in &self.rows {
            let _ = write!(html, "<i style=\"background:{}\"></i> ", row.color);
            match row.upper {
                Some(upper) => {
                    let _ = write!(html, "{}&ndash;{}{}<br>", row.lower, upper, unit);
                }
                None => {
                    let _ = write!(html, "{}+", row.lower);
                }
            }
        }
        html.push_str("</div>");
        html
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::build(&DepthScale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::depth::BoundaryPolicy;

    #[test]
    fn test_labels() {
        let legend = Legend::default();
        let labels: Vec<_> = legend.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["0–20", "20–50", "50–100", "100–200", "200–500", "500+"]
        );
    }

    #[test]
    fn test_colors_identical_under_both_policies() {
        let strict = Legend::build(&DepthScale::new(BoundaryPolicy::StrictGreater));
        let inclusive = Legend::build(&DepthScale::new(BoundaryPolicy::GreaterOrEqual));
        assert_eq!(strict, inclusive);

        let scale = DepthScale::default();
        let colors: Vec<_> = strict.rows.iter().map(|r| r.color).collect();
        assert_eq!(colors, scale.colors());
    }

    #[test]
    fn test_html_markup() {
        let html = Legend::default().to_html("km");
        assert!(html.starts_with(
            "<div class=\"info legend\"><i style=\"background:#FEB24C\"></i> 0&ndash;20km<br>"
        ));
        assert!(html.ends_with("<i style=\"background:#800026\"></i> 500+</div>"));
        assert_eq!(html.matches("<i ").count(), 6);
    }
}
