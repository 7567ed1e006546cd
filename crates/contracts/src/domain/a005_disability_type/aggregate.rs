use serde::{Deserialize, Serialize};

use crate::domain::common::ReferenceRow;
use crate::shared::serde_ext::{flexible_i64, option_flexible_i64};

/// Listed per category: `/v1/disability-categories/{id}/types`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisabilityType {
    #[serde(deserialize_with = "flexible_i64", default, alias = "id")]
    pub type_id: i64,
    #[serde(default)]
    pub type_name: String,
    #[serde(deserialize_with = "option_flexible_i64", default)]
    pub category_id: Option<i64>,
}

impl ReferenceRow for DisabilityType {
    fn id(&self) -> i64 {
        self.type_id
    }

    fn name(&self) -> &str {
        &self.type_name
    }

    fn category_id(&self) -> Option<i64> {
        self.category_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_keeps_category() {
        let t: DisabilityType =
            serde_json::from_value(json!({"type_id": 9, "type_name": "Deaf", "category_id": "2"})).unwrap();
        let item = t.to_item();
        assert_eq!(item.category_id, Some(2));
        assert_eq!(item.name, "Deaf");
    }
}
