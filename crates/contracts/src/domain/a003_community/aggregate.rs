use serde::{Deserialize, Serialize};

use crate::domain::common::ReferenceRow;
use crate::shared::serde_ext::flexible_i64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Community {
    #[serde(deserialize_with = "flexible_i64", default, alias = "id")]
    pub community_id: i64,
    #[serde(default)]
    pub community_name: String,
}

impl ReferenceRow for Community {
    fn id(&self) -> i64 {
        self.community_id
    }

    fn name(&self) -> &str {
        &self.community_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_plain_id_key() {
        let c: Community = serde_json::from_value(json!({"id": "4", "community_name": "Nima"})).unwrap();
        assert_eq!(c.to_item().id, 4);
        assert_eq!(c.to_item().name, "Nima");
    }
}
