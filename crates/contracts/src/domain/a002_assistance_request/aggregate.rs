use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::a001_pwd_record::DocumentRef;
use crate::shared::serde_ext::{flexible_i64, option_flexible_f64, option_flexible_i64};

// ============================================================================
// Status
// ============================================================================

/// Flat set of labels; any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistanceStatus {
    #[default]
    Pending,
    Review,
    ReadyToAccess,
    Assessed,
    Declined,
}

impl AssistanceStatus {
    pub fn all() -> [AssistanceStatus; 5] {
        [
            AssistanceStatus::Pending,
            AssistanceStatus::Review,
            AssistanceStatus::ReadyToAccess,
            AssistanceStatus::Assessed,
            AssistanceStatus::Declined,
        ]
    }

    /// Statuses offered on the edit page.
    pub fn editable() -> [AssistanceStatus; 4] {
        [
            AssistanceStatus::Review,
            AssistanceStatus::ReadyToAccess,
            AssistanceStatus::Assessed,
            AssistanceStatus::Declined,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            AssistanceStatus::Pending => "pending",
            AssistanceStatus::Review => "review",
            AssistanceStatus::ReadyToAccess => "ready_to_access",
            AssistanceStatus::Assessed => "assessed",
            AssistanceStatus::Declined => "declined",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "review" => AssistanceStatus::Review,
            "ready_to_access" => AssistanceStatus::ReadyToAccess,
            "assessed" => AssistanceStatus::Assessed,
            "declined" => AssistanceStatus::Declined,
            _ => AssistanceStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssistanceStatus::Pending => "Pending",
            AssistanceStatus::Review => "Review",
            AssistanceStatus::ReadyToAccess => "Ready to Access",
            AssistanceStatus::Assessed => "Assessed",
            AssistanceStatus::Declined => "Declined",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            AssistanceStatus::Pending => "warning",
            AssistanceStatus::Review => "info",
            AssistanceStatus::ReadyToAccess => "accent",
            AssistanceStatus::Assessed => "success",
            AssistanceStatus::Declined => "error",
        }
    }
}

fn lenient_status<'de, D>(deserializer: D) -> Result<AssistanceStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(AssistanceStatus::from_code(raw.as_deref().unwrap_or_default()))
}

fn documents<'de, D>(deserializer: D) -> Result<Vec<DocumentRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DocumentRef>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistanceRequest {
    #[serde(deserialize_with = "flexible_i64")]
    pub request_id: i64,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub assistance_type_id: Option<i64>,
    #[serde(alias = "assistance_type")]
    pub assistance_type_name: Option<String>,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub beneficiary_id: Option<i64>,
    pub beneficiary_name: Option<String>,
    #[serde(deserialize_with = "lenient_status")]
    pub status: AssistanceStatus,
    #[serde(deserialize_with = "option_flexible_f64")]
    pub amount_value_cost: Option<f64>,
    pub description: Option<String>,
    pub admin_review_notes: Option<String>,
    #[serde(deserialize_with = "documents")]
    pub supporting_documents: Vec<DocumentRef>,
    #[serde(alias = "request_date")]
    pub created_at: Option<String>,
}

impl AssistanceRequest {
    pub fn type_name(&self) -> &str {
        self.assistance_type_name.as_deref().unwrap_or("N/A")
    }

    pub fn beneficiary(&self) -> &str {
        self.beneficiary_name.as_deref().unwrap_or("N/A")
    }

    pub fn amount_display(&self) -> String {
        match self.amount_value_cost {
            Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
            Some(v) => format!("{:.2}", v),
            None => String::new(),
        }
    }

    /// Request belongs to the given PWD: by id when the API sends one,
    /// otherwise by beneficiary name.
    pub fn is_for(&self, pwd_id: i64, full_name: &str) -> bool {
        match self.beneficiary_id {
            Some(id) => id == pwd_id,
            None => self
                .beneficiary_name
                .as_deref()
                .is_some_and(|n| !n.is_empty() && n.eq_ignore_ascii_case(full_name)),
        }
    }
}

/// Tracking-list search over assistance type and beneficiary name.
pub fn matches_search(request: &AssistanceRequest, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    [&request.assistance_type_name, &request.beneficiary_name]
        .into_iter()
        .flatten()
        .any(|v| v.to_lowercase().contains(&q))
}

/// `PATCH /v1/assistance-requests/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateDto {
    pub status: AssistanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl StatusUpdateDto {
    /// Details page: status with the reviewer's note.
    pub fn with_note(status: AssistanceStatus, note: &str, user_id: i64) -> Self {
        Self {
            status,
            admin_notes: Some(note.trim().to_string()),
            user_id: Some(user_id),
        }
    }

    /// Edit page: one-click status change.
    pub fn status_only(status: AssistanceStatus) -> Self {
        Self {
            status,
            admin_notes: None,
            user_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_codes() {
        for s in AssistanceStatus::all() {
            assert_eq!(AssistanceStatus::from_code(s.code()), s);
        }
        assert_eq!(AssistanceStatus::from_code(""), AssistanceStatus::Pending);
        assert!(!AssistanceStatus::editable().contains(&AssistanceStatus::Pending));
    }

    #[test]
    fn test_request_parsing_defaults() {
        let r: AssistanceRequest = serde_json::from_value(json!({
            "request_id": "31",
            "assistance_type_name": "Wheelchair",
            "beneficiary_name": "Kwesi Appiah",
            "status": null,
            "amount_value_cost": "1500",
            "supporting_documents": ["uploads/a.png"]
        }))
        .unwrap();
        assert_eq!(r.request_id, 31);
        assert_eq!(r.status, AssistanceStatus::Pending);
        assert_eq!(r.amount_display(), "1500");
        assert_eq!(r.supporting_documents[0].name, "a.png");
    }

    #[test]
    fn test_search_type_or_beneficiary() {
        let r = AssistanceRequest {
            assistance_type_name: Some("Hearing Aid".into()),
            beneficiary_name: Some("Esi Nyarko".into()),
            ..Default::default()
        };
        assert!(matches_search(&r, "hearing"));
        assert!(matches_search(&r, "NYARKO"));
        assert!(matches_search(&r, ""));
        assert!(!matches_search(&r, "wheelchair"));
    }

    #[test]
    fn test_status_bodies() {
        let body = serde_json::to_value(StatusUpdateDto::with_note(
            AssistanceStatus::ReadyToAccess,
            " approved by panel ",
            4,
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({"status": "ready_to_access", "admin_notes": "approved by panel", "user_id": 4})
        );
        let body = serde_json::to_value(StatusUpdateDto::status_only(AssistanceStatus::Declined)).unwrap();
        assert_eq!(body, json!({"status": "declined"}));
    }

    #[test]
    fn test_is_for_beneficiary() {
        let by_id = AssistanceRequest { beneficiary_id: Some(8), ..Default::default() };
        assert!(by_id.is_for(8, "x"));
        assert!(!by_id.is_for(9, "x"));
        let by_name = AssistanceRequest { beneficiary_name: Some("Ama Serwaa".into()), ..Default::default() };
        assert!(by_name.is_for(1, "ama serwaa"));
    }
}
