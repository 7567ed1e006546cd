use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Registration quarter of the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub fn all() -> [Quarter; 4] {
        [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4]
    }

    pub fn number(&self) -> u32 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "Q1" => Some(Quarter::Q1),
            "Q2" => Some(Quarter::Q2),
            "Q3" => Some(Quarter::Q3),
            "Q4" => Some(Quarter::Q4),
            _ => None,
        }
    }

    /// Quarter containing `today`: ceil(month / 3).
    pub fn current(today: NaiveDate) -> Self {
        match (today.month() + 2) / 3 {
            1 => Quarter::Q1,
            2 => Quarter::Q2,
            3 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    pub fn label(&self) -> String {
        format!("Quarter {}", self.number())
    }

    pub fn label_with_year(&self, year: i32) -> String {
        format!("Quarter {}, {}", self.number(), year)
    }
}

/// "Q3" -> "Quarter 3"; anything unrecognised is shown as-is.
pub fn display_code(code: &str) -> String {
    Quarter::from_code(code)
        .map(|q| q.label())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, 1).unwrap()
    }

    #[test]
    fn test_current_quarter_boundaries() {
        assert_eq!(Quarter::current(d(1)), Quarter::Q1);
        assert_eq!(Quarter::current(d(3)), Quarter::Q1);
        assert_eq!(Quarter::current(d(4)), Quarter::Q2);
        assert_eq!(Quarter::current(d(9)), Quarter::Q3);
        assert_eq!(Quarter::current(d(10)), Quarter::Q4);
        assert_eq!(Quarter::current(d(12)), Quarter::Q4);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Quarter::Q2.label_with_year(2025), "Quarter 2, 2025");
        assert_eq!(display_code("q4"), "Quarter 4");
        assert_eq!(display_code(""), "");
    }
}
