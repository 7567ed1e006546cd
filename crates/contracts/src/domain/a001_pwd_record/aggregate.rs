use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::quarter::display_code;
use crate::shared::serde_ext::{flexible_i64, option_flexible_i64};

// ============================================================================
// Registration status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Declined,
}

impl RegistrationStatus {
    pub fn all() -> [RegistrationStatus; 3] {
        [
            RegistrationStatus::Pending,
            RegistrationStatus::Approved,
            RegistrationStatus::Declined,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Approved => "approved",
            RegistrationStatus::Declined => "declined",
        }
    }

    /// Unknown or missing values read as pending.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "approved" => RegistrationStatus::Approved,
            "declined" => RegistrationStatus::Declined,
            _ => RegistrationStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Approved => "Approved",
            RegistrationStatus::Declined => "Declined",
        }
    }

    /// Badge modifier used by the list and details pages.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "warning",
            RegistrationStatus::Approved => "success",
            RegistrationStatus::Declined => "error",
        }
    }
}

// ============================================================================
// Documents
// ============================================================================

/// An uploaded file. The API sends either a bare path or `{name, url}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRef {
    pub name: String,
    pub path: String,
}

impl<'de> Deserialize<'de> for DocumentRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Path(String),
            Object {
                #[serde(default)]
                name: Option<String>,
                #[serde(default, alias = "file_path", alias = "path")]
                url: Option<String>,
            },
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Path(path) => DocumentRef::from_path(path),
            Wire::Object { name, url } => {
                let path = url.unwrap_or_default();
                match name.filter(|n| !n.is_empty()) {
                    Some(name) => DocumentRef { name, path },
                    None => DocumentRef::from_path(path),
                }
            }
        })
    }
}

impl DocumentRef {
    /// Name is the last path segment; Windows separators are normalised.
    pub fn from_path(path: String) -> Self {
        let path = path.replace('\\', "/");
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self { name, path }
    }
}

fn documents<'de, D>(deserializer: D) -> Result<Vec<DocumentRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DocumentRef>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Record
// ============================================================================

/// A PWD record as returned by `/v1/pwd-records` and `/v1/pwd-records/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PwdRecord {
    #[serde(deserialize_with = "flexible_i64")]
    pub pwd_id: i64,
    pub full_name: String,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub gender_id: Option<i64>,
    pub gender_name: Option<String>,
    #[serde(alias = "dob")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub age: Option<i64>,
    pub gh_card_number: Option<String>,
    pub nhis_number: Option<String>,
    pub contact: Option<String>,
    pub occupation: Option<String>,
    pub quarter: Option<String>,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub community_id: Option<i64>,
    pub community_name: Option<String>,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub disability_category_id: Option<i64>,
    pub disability_category: Option<String>,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub disability_type_id: Option<i64>,
    pub disability_type: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_occupation: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_relationship: Option<String>,
    pub education_level: Option<String>,
    pub school_name: Option<String>,
    #[serde(deserialize_with = "option_flexible_i64")]
    pub assistance_type_needed_id: Option<i64>,
    pub support_needs: Option<String>,
    pub profile_image: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "documents", deserialize_with = "documents")]
    pub supporting_documents: Vec<DocumentRef>,
    pub created_at: Option<String>,
}

impl PwdRecord {
    pub fn status(&self) -> RegistrationStatus {
        RegistrationStatus::from_code(self.status.as_deref().unwrap_or_default())
    }

    /// "Quarter N", or empty when the record has none.
    pub fn quarter_label(&self) -> String {
        self.quarter.as_deref().map(display_code).unwrap_or_default()
    }

    /// Date part of `created_at` ("2025-04-02 10:11:12" -> "2025-04-02").
    pub fn registration_date(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(|c| c.split([' ', 'T']).next())
            .unwrap_or_default()
            .to_string()
    }

    pub fn has_guardian(&self) -> bool {
        self.guardian_name.as_deref().is_some_and(|g| !g.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_list_row() {
        let rec: PwdRecord = serde_json::from_value(json!({
            "pwd_id": "17",
            "full_name": "Akosua Mensah",
            "gender_name": "Female",
            "quarter": "Q2",
            "community_name": "Ashaiman",
            "disability_type": "Low vision",
            "created_at": "2025-05-03 09:12:44",
            "status": "approved",
            "profile_image": null
        }))
        .unwrap();
        assert_eq!(rec.pwd_id, 17);
        assert_eq!(rec.quarter_label(), "Quarter 2");
        assert_eq!(rec.registration_date(), "2025-05-03");
        assert_eq!(rec.status(), RegistrationStatus::Approved);
        assert!(rec.supporting_documents.is_empty());
    }

    #[test]
    fn test_missing_status_is_pending() {
        let rec: PwdRecord = serde_json::from_value(json!({"pwd_id": 1})).unwrap();
        assert_eq!(rec.status(), RegistrationStatus::Pending);
        assert_eq!(RegistrationStatus::from_code("weird"), RegistrationStatus::Pending);
    }

    #[test]
    fn test_dob_alias_and_documents_shapes() {
        let rec: PwdRecord = serde_json::from_value(json!({
            "pwd_id": 2,
            "dob": "2010-01-09",
            "documents": [
                "uploads\\docs\\card.pdf",
                {"name": "Medical report", "url": "uploads/docs/med.pdf"}
            ]
        }))
        .unwrap();
        assert_eq!(rec.date_of_birth.as_deref(), Some("2010-01-09"));
        assert_eq!(rec.supporting_documents[0].name, "card.pdf");
        assert_eq!(rec.supporting_documents[0].path, "uploads/docs/card.pdf");
        assert_eq!(rec.supporting_documents[1].name, "Medical report");
    }

    #[test]
    fn test_null_documents() {
        let rec: PwdRecord =
            serde_json::from_value(json!({"pwd_id": 2, "supporting_documents": null})).unwrap();
        assert!(rec.supporting_documents.is_empty());
    }
}
