use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::aggregate::PwdRecord;
use crate::shared::age::{age_on, dob_from_age, format_date, is_minor, parse_age, parse_date};
use crate::shared::api::ApiError;
use crate::shared::quarter::Quarter;

pub const EDUCATION_LEVELS: [&str; 5] = ["Primary", "JHS", "SHS", "Tertiary", "None"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Register / edit PWD form. Every field holds the raw input value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PwdRecordForm {
    pub quarter: String,
    pub year: String,
    pub gender_id: String,
    pub full_name: String,
    pub occupation: String,
    pub contact: String,
    pub dob: String,
    pub age: String,
    pub disability_category_id: String,
    pub disability_type_id: String,
    pub gh_card_number: String,
    pub nhis_number: String,
    pub community_id: String,
    pub guardian_name: String,
    pub guardian_occupation: String,
    pub guardian_phone: String,
    pub guardian_relationship: String,
    pub education_level: String,
    pub school_name: String,
    pub assistance_type_needed_id: String,
    pub support_needs: String,
    pub status: String,
}

fn opt_string(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_id(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl PwdRecordForm {
    /// Edit form pre-filled from a fetched record.
    pub fn from_record(record: &PwdRecord) -> Self {
        let dob = record
            .date_of_birth
            .as_deref()
            .and_then(parse_date)
            .map(format_date)
            .unwrap_or_default();
        Self {
            quarter: opt_string(&record.quarter),
            year: opt_id(record.year),
            gender_id: opt_id(record.gender_id),
            full_name: record.full_name.clone(),
            occupation: opt_string(&record.occupation),
            contact: opt_string(&record.contact),
            dob,
            age: opt_id(record.age),
            disability_category_id: opt_id(record.disability_category_id),
            disability_type_id: opt_id(record.disability_type_id),
            gh_card_number: opt_string(&record.gh_card_number),
            nhis_number: opt_string(&record.nhis_number),
            community_id: opt_id(record.community_id),
            guardian_name: opt_string(&record.guardian_name),
            guardian_occupation: opt_string(&record.guardian_occupation),
            guardian_phone: opt_string(&record.guardian_phone),
            guardian_relationship: opt_string(&record.guardian_relationship),
            education_level: opt_string(&record.education_level),
            school_name: opt_string(&record.school_name),
            assistance_type_needed_id: opt_id(record.assistance_type_needed_id),
            support_needs: opt_string(&record.support_needs),
            status: record.status().code().to_string(),
        }
    }

    /// Picking a birth date fills in the age.
    pub fn set_dob(&mut self, value: &str, today: NaiveDate) {
        self.dob = value.to_string();
        if let Some(dob) = parse_date(value) {
            self.age = age_on(dob, today).max(0).to_string();
        }
    }

    /// Typing an age back-computes the birth date.
    pub fn set_age(&mut self, value: &str, today: NaiveDate) {
        self.age = value.to_string();
        if let Some(dob) = parse_age(value).and_then(|age| dob_from_age(age, today)) {
            self.dob = format_date(dob);
        }
    }

    /// Changing the category invalidates the chosen type.
    pub fn set_category(&mut self, value: &str) {
        if self.disability_category_id != value {
            self.disability_category_id = value.to_string();
            self.disability_type_id.clear();
        }
    }

    pub fn age_value(&self) -> Option<i32> {
        parse_age(&self.age).map(|a| a as i32)
    }

    /// Guardian and education fields apply to registrants under 18.
    pub fn is_minor(&self) -> bool {
        self.age_value().is_some_and(is_minor)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        let required = [
            (&self.full_name, "Full name"),
            (&self.gender_id, "Gender"),
            (&self.dob, "Date of birth"),
            (&self.community_id, "Community"),
            (&self.disability_category_id, "Disability category"),
            (&self.contact, "Contact"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(ApiError::validation(format!("{} is required", label)));
            }
        }
        if parse_date(&self.dob).is_none() {
            return Err(ApiError::validation("Date of birth is not a valid date"));
        }
        if self.is_minor() {
            let guardian = [
                (&self.guardian_name, "Guardian name"),
                (&self.guardian_phone, "Guardian phone"),
                (&self.guardian_relationship, "Guardian relationship"),
                (&self.education_level, "Education level"),
            ];
            for (value, label) in guardian {
                if value.trim().is_empty() {
                    return Err(ApiError::validation(format!(
                        "{} is required for applicants under 18",
                        label
                    )));
                }
            }
        }
        Ok(())
    }

    /// Text parts of the multipart body, in wire order. Files are appended by
    /// the caller as `profile_image` and `supporting_documents[]`.
    pub fn multipart_fields(
        &self,
        user_id: i64,
        today: NaiveDate,
        mode: FormMode,
    ) -> Vec<(&'static str, String)> {
        let quarter = Quarter::from_code(&self.quarter)
            .unwrap_or_else(|| Quarter::current(today))
            .code()
            .to_string();
        let year = if self.year.trim().is_empty() {
            today.year().to_string()
        } else {
            self.year.trim().to_string()
        };

        let mut fields = vec![
            ("quarter", quarter),
            ("year", year),
            ("gender_id", self.gender_id.clone()),
            ("full_name", self.full_name.trim().to_string()),
            ("occupation", self.occupation.clone()),
            ("contact", self.contact.clone()),
            ("dob", self.dob.clone()),
            ("age", self.age.clone()),
            ("disability_category_id", self.disability_category_id.clone()),
            ("disability_type_id", self.disability_type_id.clone()),
            ("gh_card_number", self.gh_card_number.clone()),
            ("nhis_number", self.nhis_number.clone()),
            ("community_id", self.community_id.clone()),
            ("guardian_name", self.guardian_name.clone()),
            ("guardian_occupation", self.guardian_occupation.clone()),
            ("guardian_phone", self.guardian_phone.clone()),
            ("guardian_relationship", self.guardian_relationship.clone()),
            ("education_level", self.education_level.clone()),
            ("school_name", self.school_name.clone()),
            ("assistance_type_needed_id", self.assistance_type_needed_id.clone()),
            ("support_needs", self.support_needs.clone()),
            ("user_id", user_id.to_string()),
        ];
        if mode == FormMode::Edit {
            let status = if self.status.is_empty() {
                "pending".to_string()
            } else {
                self.status.clone()
            };
            fields.push(("status", status));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    fn filled() -> PwdRecordForm {
        PwdRecordForm {
            full_name: "Yaw Boateng".into(),
            gender_id: "1".into(),
            contact: "0244000000".into(),
            community_id: "3".into(),
            disability_category_id: "2".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dob_fills_age() {
        let mut f = PwdRecordForm::default();
        f.set_dob("2000-08-21", today());
        assert_eq!(f.age, "24");
        f.set_dob("2000-08-20", today());
        assert_eq!(f.age, "25");
    }

    #[test]
    fn test_age_fills_dob() {
        let mut f = PwdRecordForm::default();
        f.set_age("12", today());
        assert_eq!(f.dob, "2013-08-20");
        assert!(f.is_minor());
        f.set_age("", today());
        assert_eq!(f.dob, "2013-08-20");
        assert!(!f.is_minor());
    }

    #[test]
    fn test_out_of_range_age_keeps_dob() {
        let mut f = PwdRecordForm::default();
        f.set_age("40", today());
        assert_eq!(f.dob, "1985-08-20");
        f.set_age("2147483648", today());
        assert_eq!(f.dob, "1985-08-20");
        assert_eq!(f.age_value(), None);
        f.set_age("300000", today());
        assert_eq!(f.dob, "1985-08-20");
        assert!(!f.is_minor());
    }

    #[test]
    fn test_category_change_clears_type() {
        let mut f = filled();
        f.disability_type_id = "9".into();
        f.set_category("2");
        assert_eq!(f.disability_type_id, "9");
        f.set_category("4");
        assert!(f.disability_type_id.is_empty());
    }

    #[test]
    fn test_adult_validation() {
        let mut f = filled();
        assert!(f.validate().is_err());
        f.set_dob("1980-01-01", today());
        assert!(f.validate().is_ok());
        f.full_name = "  ".into();
        assert_eq!(f.validate().unwrap_err().to_string(), "Full name is required");
    }

    #[test]
    fn test_minor_requires_guardian() {
        let mut f = filled();
        f.set_age("10", today());
        let err = f.validate().unwrap_err().to_string();
        assert!(err.starts_with("Guardian name"));
        f.guardian_name = "Efua".into();
        f.guardian_phone = "0200000000".into();
        f.guardian_relationship = "Mother".into();
        assert!(f.validate().is_err());
        f.education_level = "Primary".into();
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_multipart_field_order_and_defaults() {
        let mut f = filled();
        f.set_dob("1990-02-01", today());
        let fields = f.multipart_fields(7, today(), FormMode::Create);
        let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "quarter", "year", "gender_id", "full_name", "occupation", "contact", "dob",
                "age", "disability_category_id", "disability_type_id", "gh_card_number",
                "nhis_number", "community_id", "guardian_name", "guardian_occupation",
                "guardian_phone", "guardian_relationship", "education_level", "school_name",
                "assistance_type_needed_id", "support_needs", "user_id",
            ]
        );
        assert_eq!(fields[0].1, "Q3");
        assert_eq!(fields[1].1, "2025");
        assert_eq!(fields[6].1, "1990-02-01");
        assert_eq!(fields[7].1, "35");
        assert_eq!(fields[21].1, "7");
    }

    #[test]
    fn test_edit_mode_appends_status() {
        let mut f = filled();
        f.quarter = "Q1".into();
        f.status = "approved".into();
        let fields = f.multipart_fields(1, today(), FormMode::Edit);
        assert_eq!(fields[0].1, "Q1");
        assert_eq!(fields.last().unwrap(), &("status", "approved".to_string()));
    }

    #[test]
    fn test_from_record_prefills() {
        let rec = PwdRecord {
            pwd_id: 5,
            full_name: "Ama".into(),
            date_of_birth: Some("2011-03-04 00:00:00".into()),
            age: Some(14),
            community_id: Some(2),
            status: Some("declined".into()),
            ..Default::default()
        };
        let f = PwdRecordForm::from_record(&rec);
        assert_eq!(f.dob, "2011-03-04");
        assert_eq!(f.age, "14");
        assert_eq!(f.community_id, "2");
        assert_eq!(f.status, "declined");
        assert!(f.is_minor());
    }
}
