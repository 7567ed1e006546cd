use serde::{Deserialize, Serialize};

use crate::domain::a001_pwd_record::PwdRecord;
use crate::shared::api::ApiError;

/// `POST /v1/assistance-requests`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAssistanceRequestDto {
    pub assistance_type_id: i64,
    pub beneficiary_id: i64,
    pub amount_value_cost: f64,
    pub description: String,
    pub user_id: i64,
}

/// Read-only beneficiary details shown once a PWD is picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeneficiarySnapshot {
    pub gender: String,
    pub contact: String,
    pub quarter: String,
    pub disability_category: String,
    pub disability_type: String,
}

impl BeneficiarySnapshot {
    pub fn from_record(record: &PwdRecord) -> Self {
        Self {
            gender: record.gender_name.clone().unwrap_or_default(),
            contact: record.contact.clone().unwrap_or_default(),
            quarter: record.quarter_label(),
            disability_category: record.disability_category.clone().unwrap_or_default(),
            disability_type: record.disability_type.clone().unwrap_or_default(),
        }
    }
}

/// Log Assistance form, raw input values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogAssistanceForm {
    pub assistance_type_id: String,
    pub beneficiary_id: String,
    pub amount: String,
    pub description: String,
}

impl LogAssistanceForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.assistance_type_id.trim().is_empty()
            || self.beneficiary_id.trim().is_empty()
            || self.amount.trim().is_empty()
            || self.description.trim().is_empty()
        {
            return Err(ApiError::validation("Please fill all required fields."));
        }
        match self.amount.trim().parse::<f64>() {
            Ok(v) if v > 0.0 && v.is_finite() => Ok(()),
            _ => Err(ApiError::validation("Amount must be a positive number")),
        }
    }

    pub fn to_dto(&self, user_id: i64) -> Result<CreateAssistanceRequestDto, ApiError> {
        self.validate()?;
        let parse_id = |raw: &str, what: &str| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| ApiError::validation(format!("Select a valid {}", what)))
        };
        Ok(CreateAssistanceRequestDto {
            assistance_type_id: parse_id(&self.assistance_type_id, "assistance type")?,
            beneficiary_id: parse_id(&self.beneficiary_id, "beneficiary")?,
            amount_value_cost: self.amount.trim().parse::<f64>().unwrap_or_default(),
            description: self.description.trim().to_string(),
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> LogAssistanceForm {
        LogAssistanceForm {
            assistance_type_id: "2".into(),
            beneficiary_id: "15".into(),
            amount: "250.5".into(),
            description: "Mobility support".into(),
        }
    }

    #[test]
    fn test_payload_keys() {
        let dto = form().to_dto(3).unwrap();
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({
                "assistance_type_id": 2,
                "beneficiary_id": 15,
                "amount_value_cost": 250.5,
                "description": "Mobility support",
                "user_id": 3
            })
        );
    }

    #[test]
    fn test_every_field_required() {
        let mut f = form();
        f.description = " ".into();
        assert_eq!(
            f.validate().unwrap_err().to_string(),
            "Please fill all required fields."
        );
        let mut f = form();
        f.amount = "-4".into();
        assert!(f.validate().is_err());
        f.amount = "abc".into();
        assert!(f.to_dto(1).is_err());
    }

    #[test]
    fn test_snapshot_from_record() {
        let rec = PwdRecord {
            gender_name: Some("Male".into()),
            contact: Some("0550000000".into()),
            quarter: Some("Q4".into()),
            disability_category: Some("Physical".into()),
            disability_type: Some("Amputee".into()),
            ..Default::default()
        };
        let snap = BeneficiarySnapshot::from_record(&rec);
        assert_eq!(snap.quarter, "Quarter 4");
        assert_eq!(snap.disability_type, "Amputee");
        assert_eq!(BeneficiarySnapshot::default().gender, "");
    }
}
