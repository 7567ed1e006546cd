use std::collections::BTreeSet;

use super::aggregate::PwdRecord;

/// Filter bar of the PWD records list. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PwdListFilter {
    pub search: String,
    pub quarter: String,
    pub community: String,
}

impl PwdListFilter {
    /// Search is a case-insensitive substring of the name or Ghana Card
    /// number; quarter and community must match exactly.
    pub fn matches(&self, record: &PwdRecord) -> bool {
        let search = self.search.trim().to_lowercase();
        let search_ok = search.is_empty()
            || record.full_name.to_lowercase().contains(&search)
            || record
                .gh_card_number
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&search));
        let quarter_ok =
            self.quarter.is_empty() || record.quarter.as_deref() == Some(self.quarter.as_str());
        let community_ok = self.community.is_empty()
            || record.community_name.as_deref() == Some(self.community.as_str());
        search_ok && quarter_ok && community_ok
    }

    pub fn apply<'a>(&self, records: &'a [PwdRecord]) -> Vec<&'a PwdRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.quarter.is_empty() && self.community.is_empty()
    }
}

/// Quarter codes present in the current page, sorted.
pub fn distinct_quarters(records: &[PwdRecord]) -> Vec<String> {
    distinct(records.iter().filter_map(|r| r.quarter.clone()))
}

pub fn distinct_communities(records: &[PwdRecord]) -> Vec<String> {
    distinct(records.iter().filter_map(|r| r.community_name.clone()))
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    values
        .filter(|v| !v.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, card: &str, quarter: &str, community: &str) -> PwdRecord {
        PwdRecord {
            full_name: name.into(),
            gh_card_number: Some(card.into()),
            quarter: Some(quarter.into()),
            community_name: Some(community.into()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<PwdRecord> {
        vec![
            rec("Kofi Annan", "GHA-111", "Q1", "Tema"),
            rec("Abena Owusu", "GHA-222", "Q2", "Tema"),
            rec("Kojo Asante", "GHA-333", "Q2", "Madina"),
        ]
    }

    #[test]
    fn test_search_name_or_card() {
        let data = sample();
        let f = PwdListFilter { search: "KO".into(), ..Default::default() };
        assert_eq!(f.apply(&data).len(), 2);
        let f = PwdListFilter { search: "gha-222".into(), ..Default::default() };
        assert_eq!(f.apply(&data)[0].full_name, "Abena Owusu");
    }

    #[test]
    fn test_quarter_and_community_are_exact() {
        let data = sample();
        let f = PwdListFilter {
            quarter: "Q2".into(),
            community: "Tema".into(),
            ..Default::default()
        };
        let hits = f.apply(&data);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name, "Abena Owusu");
        assert!(!PwdListFilter::default().apply(&data).is_empty());
    }

    #[test]
    fn test_distinct_options() {
        let data = sample();
        assert_eq!(distinct_quarters(&data), vec!["Q1", "Q2"]);
        assert_eq!(distinct_communities(&data), vec!["Madina", "Tema"]);
    }
}
