//! Reference-data plumbing shared by a003..a007 and the Settings screen.

use serde_json::{json, Value};

use crate::shared::api::ApiError;

/// HTTP verb used to update a reference row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Put,
    Patch,
}

/// Normalised settings-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceItem {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
}

/// Implemented by every lookup aggregate so the settings table and the form
/// selects can treat them alike.
pub trait ReferenceRow {
    fn id(&self) -> i64;
    fn name(&self) -> &str;

    fn category_id(&self) -> Option<i64> {
        None
    }

    fn to_item(&self) -> ReferenceItem {
        ReferenceItem {
            id: self.id(),
            name: self.name().to_string(),
            category_id: self.category_id(),
        }
    }
}

/// One Settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Communities,
    Category,
    Type,
    Assistance,
    Gender,
}

impl ReferenceKind {
    pub fn all() -> [ReferenceKind; 5] {
        [
            ReferenceKind::Communities,
            ReferenceKind::Category,
            ReferenceKind::Type,
            ReferenceKind::Assistance,
            ReferenceKind::Gender,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ReferenceKind::Communities => "communities",
            ReferenceKind::Category => "category",
            ReferenceKind::Type => "type",
            ReferenceKind::Assistance => "assistance",
            ReferenceKind::Gender => "gender",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::Communities => "Communities",
            ReferenceKind::Category => "Disability Category",
            ReferenceKind::Type => "Disability Type",
            ReferenceKind::Assistance => "Assistance Type",
            ReferenceKind::Gender => "Gender",
        }
    }

    /// Gender is a fixed lookup.
    pub fn is_editable(&self) -> bool {
        !matches!(self, ReferenceKind::Gender)
    }

    pub fn needs_category(&self) -> bool {
        matches!(self, ReferenceKind::Type)
    }

    fn category(category_id: Option<i64>) -> Result<i64, ApiError> {
        category_id.ok_or_else(|| ApiError::validation("Please select a disability category first."))
    }

    fn read_only(&self) -> ApiError {
        ApiError::validation(format!("{} values cannot be changed", self.label()))
    }

    /// `None` for the static gender list.
    pub fn list_path(&self, category_id: Option<i64>) -> Result<Option<String>, ApiError> {
        Ok(match self {
            ReferenceKind::Communities => Some("/v1/communities".to_string()),
            ReferenceKind::Category => Some("/v1/disability-categories".to_string()),
            ReferenceKind::Type => Some(format!(
                "/v1/disability-categories/{}/types",
                Self::category(category_id)?
            )),
            ReferenceKind::Assistance => Some("/v1/assistance-types".to_string()),
            ReferenceKind::Gender => None,
        })
    }

    pub fn create_path(&self) -> Result<&'static str, ApiError> {
        match self {
            ReferenceKind::Communities => Ok("/v1/communities"),
            ReferenceKind::Category => Ok("/v1/disability-categories"),
            ReferenceKind::Type => Ok("/v1/disability-types"),
            ReferenceKind::Assistance => Ok("/v1/assistance-types"),
            ReferenceKind::Gender => Err(self.read_only()),
        }
    }

    fn clean_name(name: &str) -> Result<String, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Name is required"));
        }
        Ok(name.to_string())
    }

    pub fn create_body(&self, name: &str, category_id: Option<i64>) -> Result<Value, ApiError> {
        let name = Self::clean_name(name)?;
        match self {
            ReferenceKind::Communities => Ok(json!({ "community_name": name })),
            ReferenceKind::Category => Ok(json!({ "category_name": name })),
            ReferenceKind::Type => Ok(json!({
                "category_id": Self::category(category_id)?,
                "type_name": name,
            })),
            ReferenceKind::Assistance => Ok(json!({ "assistance_type_name": name })),
            ReferenceKind::Gender => Err(self.read_only()),
        }
    }

    pub fn update_method(&self) -> UpdateMethod {
        match self {
            ReferenceKind::Type => UpdateMethod::Patch,
            _ => UpdateMethod::Put,
        }
    }

    pub fn update_path(&self, id: i64) -> Result<String, ApiError> {
        match self {
            ReferenceKind::Communities => Ok(format!("/v1/communities/{}", id)),
            ReferenceKind::Category => Ok(format!("/v1/disability-categories/{}", id)),
            ReferenceKind::Type => Ok(format!("/v1/disability-types/{}", id)),
            ReferenceKind::Assistance => Ok(format!("/v1/assistance-types/{}", id)),
            ReferenceKind::Gender => Err(self.read_only()),
        }
    }

    /// Same shape as the create body; types may also move to another category.
    pub fn update_body(&self, name: &str, category_id: Option<i64>) -> Result<Value, ApiError> {
        match self {
            ReferenceKind::Type => {
                let mut body = json!({ "type_name": Self::clean_name(name)? });
                if let Some(cat) = category_id {
                    body["category_id"] = json!(cat);
                }
                Ok(body)
            }
            _ => self.create_body(name, None),
        }
    }

    /// Types are deleted through their parent category.
    pub fn delete_path(&self, id: i64, category_id: Option<i64>) -> Result<String, ApiError> {
        match self {
            ReferenceKind::Communities => Ok(format!("/v1/communities/{}", id)),
            ReferenceKind::Category => Ok(format!("/v1/disability-categories/{}", id)),
            ReferenceKind::Type => Ok(format!(
                "/v1/disability-categories/{}/types/{}",
                Self::category(category_id)?,
                id
            )),
            ReferenceKind::Assistance => Ok(format!("/v1/assistance-types/{}", id)),
            ReferenceKind::Gender => Err(self.read_only()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bodies() {
        assert_eq!(
            ReferenceKind::Communities.create_body(" Nima ", None).unwrap(),
            json!({"community_name": "Nima"})
        );
        assert_eq!(
            ReferenceKind::Type.create_body("Deaf", Some(3)).unwrap(),
            json!({"category_id": 3, "type_name": "Deaf"})
        );
        assert_eq!(
            ReferenceKind::Assistance.create_body("Cash grant", None).unwrap(),
            json!({"assistance_type_name": "Cash grant"})
        );
        assert!(ReferenceKind::Category.create_body("  ", None).is_err());
    }

    #[test]
    fn test_type_requires_category() {
        assert!(ReferenceKind::Type.create_body("Deaf", None).is_err());
        assert!(ReferenceKind::Type.list_path(None).is_err());
        assert_eq!(
            ReferenceKind::Type.list_path(Some(2)).unwrap().as_deref(),
            Some("/v1/disability-categories/2/types")
        );
    }

    #[test]
    fn test_update_routes() {
        assert_eq!(ReferenceKind::Type.update_method(), UpdateMethod::Patch);
        assert_eq!(ReferenceKind::Category.update_method(), UpdateMethod::Put);
        assert_eq!(ReferenceKind::Type.update_path(7).unwrap(), "/v1/disability-types/7");
        assert_eq!(
            ReferenceKind::Type.update_body("Blind", None).unwrap(),
            json!({"type_name": "Blind"})
        );
        assert_eq!(
            ReferenceKind::Category.update_body("Visual", None).unwrap(),
            json!({"category_name": "Visual"})
        );
    }

    #[test]
    fn test_delete_paths() {
        assert_eq!(
            ReferenceKind::Type.delete_path(5, Some(1)).unwrap(),
            "/v1/disability-categories/1/types/5"
        );
        assert_eq!(
            ReferenceKind::Communities.delete_path(5, None).unwrap(),
            "/v1/communities/5"
        );
    }

    #[test]
    fn test_gender_is_read_only() {
        let g = ReferenceKind::Gender;
        assert!(!g.is_editable());
        assert_eq!(g.list_path(None).unwrap(), None);
        assert!(g.create_path().is_err());
        assert!(g.delete_path(1, None).is_err());
    }
}
