//! Downloadable reports of the Reports page.
//!
//! Each report fetches one endpoint and turns its `data` payload into a
//! [`ReportDocument`]: a title plus one or more tables.

use serde_json::Value;

use crate::shared::serde_ext::{display_field, first_i64};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    QuarterlyRegistration,
    AssistanceDistribution,
    CommunityBeneficiary,
    DemographicsSummary,
    AnnualRegistration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub heading: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportSection {
    fn table(heading: Option<&str>, columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            heading: heading.map(str::to_string),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub file_stem: String,
    pub sections: Vec<ReportSection>,
}

impl ReportDocument {
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.rows.is_empty())
    }
}

fn array_rows(data: &Value, keys: &[&str]) -> Vec<Vec<String>> {
    data.as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| keys.iter().map(|k| display_field(item, k)).collect())
                .collect()
        })
        .unwrap_or_default()
}

impl ReportKind {
    pub fn all() -> [ReportKind; 5] {
        [
            ReportKind::QuarterlyRegistration,
            ReportKind::AssistanceDistribution,
            ReportKind::CommunityBeneficiary,
            ReportKind::DemographicsSummary,
            ReportKind::AnnualRegistration,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::QuarterlyRegistration => "Quarterly Registration Report",
            ReportKind::AssistanceDistribution => "Assistance Distribution Report",
            ReportKind::CommunityBeneficiary => "Community-based Beneficiary Report",
            ReportKind::DemographicsSummary => "Demographics Summary",
            ReportKind::AnnualRegistration => "Annual Registration Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::QuarterlyRegistration => {
                "PWD registrations by quarter with demographic breakdown"
            }
            ReportKind::AssistanceDistribution => {
                "Analysis of assistance provided and assessment statuses"
            }
            ReportKind::CommunityBeneficiary => "PWD distribution and assistance by community",
            ReportKind::DemographicsSummary => "Age, occupation, and disability type analysis",
            ReportKind::AnnualRegistration => {
                "PWD registrations for the year with demographic breakdown"
            }
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ReportKind::QuarterlyRegistration => "/v1/quarterly-statistics/report",
            ReportKind::AssistanceDistribution => "/v1/assistance-types/report",
            ReportKind::CommunityBeneficiary => "/v1/communities/report",
            ReportKind::DemographicsSummary => "/v1/pwd-records/demographics",
            ReportKind::AnnualRegistration => "/v1/statistics/current-year",
        }
    }

    /// Lower-cased title with underscores, always ending in `_report`.
    pub fn file_stem(&self) -> String {
        let stem = self
            .title()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        if stem.ends_with("_report") {
            stem
        } else {
            format!("{}_report", stem)
        }
    }

    /// Builds the printable document from the envelope's `data`.
    pub fn build(&self, data: &Value) -> ReportDocument {
        let sections = match self {
            ReportKind::QuarterlyRegistration => vec![ReportSection::table(
                None,
                &["Quarter", "Total Registered", "Total Assessed", "Pending"],
                array_rows(
                    data,
                    &["quarter", "total_registered_pwd", "total_assessed", "pending"],
                ),
            )],
            ReportKind::AssistanceDistribution => vec![ReportSection::table(
                None,
                &["Assistance Type", "Total Usage"],
                array_rows(data, &["assistance_type_name", "total_usage"]),
            )],
            ReportKind::CommunityBeneficiary => vec![ReportSection::table(
                None,
                &["Community", "Beneficiary Count"],
                array_rows(data, &["community_name", "beneficiary_count"]),
            )],
            ReportKind::DemographicsSummary => {
                let part = |key: &str| data.get(key).cloned().unwrap_or(Value::Null);
                vec![
                    ReportSection::table(
                        Some("A. Age Group Analysis"),
                        &["Age Group", "Count"],
                        array_rows(&part("age_groups"), &["age_group", "count"]),
                    ),
                    ReportSection::table(
                        Some("B. Gender Analysis"),
                        &["Gender", "Count"],
                        array_rows(&part("genders"), &["gender", "count"]),
                    ),
                    ReportSection::table(
                        Some("C. Disability Type Analysis"),
                        &["Disability Type", "Count"],
                        array_rows(&part("disability_types"), &["disability_type", "count"]),
                    ),
                ]
            }
            ReportKind::AnnualRegistration => {
                let metric = |label: &str, keys: &[&str]| {
                    vec![label.to_string(), first_i64(data, keys).to_string()]
                };
                vec![ReportSection::table(
                    None,
                    &["Metric", "Value"],
                    vec![
                        metric(
                            "Total Registrations (Current Year)",
                            &["total_registrations", "totalRegistrations", "total_registered"],
                        ),
                        metric(
                            "Total Assisted (Current Year)",
                            &["total_assisted", "totalAssisted", "total_assisted_pwd"],
                        ),
                        metric(
                            "Pending Assistance Requests",
                            &[
                                "pending_requests",
                                "pendingAssistanceRequests",
                                "pending_requests_count",
                            ],
                        ),
                    ],
                )]
            }
        };
        let title = match self {
            ReportKind::DemographicsSummary => "Demographics Summary Report".to_string(),
            other => other.title().to_string(),
        };
        ReportDocument {
            title,
            file_stem: self.file_stem(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_stems() {
        assert_eq!(
            ReportKind::QuarterlyRegistration.file_stem(),
            "quarterly_registration_report"
        );
        assert_eq!(
            ReportKind::DemographicsSummary.file_stem(),
            "demographics_summary_report"
        );
        assert_eq!(
            ReportKind::CommunityBeneficiary.file_stem(),
            "community-based_beneficiary_report"
        );
    }

    #[test]
    fn test_quarterly_columns() {
        let doc = ReportKind::QuarterlyRegistration.build(&json!([
            {"quarter": "Q1", "total_registered_pwd": 10, "total_assessed": 4, "pending": "6"}
        ]));
        let s = &doc.sections[0];
        assert_eq!(s.columns, vec!["Quarter", "Total Registered", "Total Assessed", "Pending"]);
        assert_eq!(s.rows, vec![vec!["Q1", "10", "4", "6"]]);
    }

    #[test]
    fn test_demographics_has_three_sections() {
        let doc = ReportKind::DemographicsSummary.build(&json!({
            "age_groups": [{"age_group": "0-17", "count": 3}],
            "genders": [{"gender": "Female", "count": 5}]
        }));
        assert_eq!(doc.title, "Demographics Summary Report");
        assert_eq!(doc.sections.len(), 3);
        assert_eq!(doc.sections[1].rows[0], vec!["Female", "5"]);
        assert!(doc.sections[2].rows.is_empty());
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_annual_report_fallback_keys() {
        let doc = ReportKind::AnnualRegistration.build(&json!({
            "totalRegistrations": 40,
            "total_assisted_pwd": "12"
        }));
        let rows = &doc.sections[0].rows;
        assert_eq!(rows[0], vec!["Total Registrations (Current Year)", "40"]);
        assert_eq!(rows[1][1], "12");
        assert_eq!(rows[2][1], "0");
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        let doc = ReportKind::CommunityBeneficiary.build(&Value::Null);
        assert!(doc.is_empty());
    }
}
