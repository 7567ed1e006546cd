use serde::{Deserialize, Serialize};

use crate::domain::a006_assistance_type::DistributionRow;
use crate::shared::quarter::Quarter;
use crate::shared::serde_ext::flexible_i64;

/// `/v1/statistics` entry; the array is positional, index 0 = Q1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterStat {
    #[serde(default, skip_deserializing)]
    pub quarter: String,
    #[serde(deserialize_with = "flexible_i64", default)]
    pub registered: i64,
    #[serde(deserialize_with = "flexible_i64", default)]
    pub assisted: i64,
}

/// Always four bars, missing quarters are zero.
pub fn quarter_chart(data: &[QuarterStat]) -> Vec<QuarterStat> {
    Quarter::all()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let src = data.get(i);
            QuarterStat {
                quarter: q.code().to_string(),
                registered: src.map(|s| s.registered).unwrap_or_default(),
                assisted: src.map(|s| s.assisted).unwrap_or_default(),
            }
        })
        .collect()
}

/// Highest bar value, floored at 1 so bar heights never divide by zero.
pub fn chart_max(stats: &[QuarterStat]) -> i64 {
    stats
        .iter()
        .map(|s| s.registered.max(s.assisted))
        .max()
        .unwrap_or_default()
        .max(1)
}

/// Share of one assistance type in the distribution breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub name: String,
    pub value: i64,
    pub percent: f64,
}

impl DistributionSlice {
    pub fn from_rows(rows: &[DistributionRow]) -> Vec<DistributionSlice> {
        let total: i64 = rows.iter().map(|r| r.count.max(0)).sum();
        rows.iter()
            .map(|r| DistributionSlice {
                name: r.r#type.clone(),
                value: r.count,
                percent: if total > 0 {
                    r.count.max(0) as f64 * 100.0 / total as f64
                } else {
                    0.0
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quarter_chart_pads_to_four() {
        let data: Vec<QuarterStat> =
            serde_json::from_value(json!([{"registered": 5, "assisted": "2"}, {"registered": 7}])).unwrap();
        let chart = quarter_chart(&data);
        assert_eq!(chart.len(), 4);
        assert_eq!(chart[0].quarter, "Q1");
        assert_eq!(chart[0].assisted, 2);
        assert_eq!(chart[1].registered, 7);
        assert_eq!(chart[3].registered, 0);
        assert_eq!(chart_max(&chart), 7);
        assert_eq!(chart_max(&quarter_chart(&[])), 1);
    }

    #[test]
    fn test_distribution_percentages() {
        let rows: Vec<DistributionRow> = serde_json::from_value(json!([
            {"type": "Wheelchair", "count": 3},
            {"type": "Cash", "count": "1"}
        ]))
        .unwrap();
        let slices = DistributionSlice::from_rows(&rows);
        assert_eq!(slices[0].name, "Wheelchair");
        assert_eq!(slices[0].percent, 75.0);
        assert_eq!(slices[1].percent, 25.0);
        assert!(DistributionSlice::from_rows(&[]).is_empty());
    }
}
