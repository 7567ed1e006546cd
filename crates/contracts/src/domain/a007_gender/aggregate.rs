use crate::domain::common::ReferenceRow;

/// Fixed lookup; the API has no gender endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gender {
    pub gender_id: i64,
    pub name: &'static str,
}

impl Gender {
    pub const MALE: Gender = Gender { gender_id: 1, name: "Male" };
    pub const FEMALE: Gender = Gender { gender_id: 2, name: "Female" };

    pub fn all() -> [Gender; 2] {
        [Gender::MALE, Gender::FEMALE]
    }

    pub fn by_id(id: i64) -> Option<Gender> {
        Gender::all().into_iter().find(|g| g.gender_id == id)
    }
}

impl ReferenceRow for Gender {
    fn id(&self) -> i64 {
        self.gender_id
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        assert_eq!(Gender::by_id(2).map(|g| g.name), Some("Female"));
        assert_eq!(Gender::by_id(3), None);
        assert_eq!(Gender::all().len(), 2);
    }
}
