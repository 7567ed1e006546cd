use serde::{Deserialize, Serialize};

use crate::domain::common::ReferenceRow;
use crate::shared::serde_ext::flexible_i64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistanceType {
    #[serde(deserialize_with = "flexible_i64", default, alias = "id")]
    pub assistance_type_id: i64,
    #[serde(default)]
    pub assistance_type_name: String,
}

impl ReferenceRow for AssistanceType {
    fn id(&self) -> i64 {
        self.assistance_type_id
    }

    fn name(&self) -> &str {
        &self.assistance_type_name
    }
}

/// `/v1/assistance-types/distribution` row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    #[serde(default, alias = "assistance_type_name")]
    pub r#type: String,
    #[serde(deserialize_with = "flexible_i64", default)]
    pub count: i64,
}
