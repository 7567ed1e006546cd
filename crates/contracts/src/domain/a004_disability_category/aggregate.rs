use serde::{Deserialize, Serialize};

use crate::domain::common::ReferenceRow;
use crate::shared::serde_ext::flexible_i64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisabilityCategory {
    #[serde(deserialize_with = "flexible_i64", default, alias = "id")]
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
}

impl ReferenceRow for DisabilityCategory {
    fn id(&self) -> i64 {
        self.category_id
    }

    fn name(&self) -> &str {
        &self.category_name
    }
}
