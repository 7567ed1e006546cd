use serde::{Deserialize, Serialize};

use crate::shared::serde_ext::flexible_i64;

/// Period the totals were computed for, e.g. `{quarter: "Q3", year: 2025}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentPeriod {
    #[serde(default)]
    pub quarter: String,
    #[serde(deserialize_with = "flexible_i64", default)]
    pub year: i64,
}

/// Response of `/v1/pwd-records/total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardTotals {
    #[serde(deserialize_with = "flexible_i64", default)]
    pub total_pwd: i64,
    #[serde(deserialize_with = "flexible_i64", default)]
    pub current_quarter_additions: i64,
    #[serde(deserialize_with = "flexible_i64", default)]
    pub total_assessed_beneficiaries: i64,
    #[serde(default)]
    pub current_period: CurrentPeriod,
}

/// One metric tile of the dashboard home.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: i64,
    pub description: String,
}

impl DashboardTotals {
    pub fn cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard {
                title: "Total PWDs",
                value: self.total_pwd,
                description: format!(
                    "As of {} {}",
                    self.current_period.quarter, self.current_period.year
                ),
            },
            MetricCard {
                title: "Quarterly Additions",
                value: self.current_quarter_additions,
                description: "New PWDs this quarter".to_string(),
            },
            MetricCard {
                title: "Assessed Beneficiaries",
                value: self.total_assessed_beneficiaries,
                description: "Beneficiaries assessed for support".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cards_from_totals() {
        let totals: DashboardTotals = serde_json::from_value(json!({
            "total_pwd": "120",
            "current_quarter_additions": 14,
            "total_assessed_beneficiaries": 33,
            "current_period": {"quarter": "Q3", "year": "2025"}
        }))
        .unwrap();
        let cards = totals.cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].value, 120);
        assert_eq!(cards[0].description, "As of Q3 2025");
        assert_eq!(cards[2].title, "Assessed Beneficiaries");
    }
}
