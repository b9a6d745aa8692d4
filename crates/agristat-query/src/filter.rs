use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use agristat_core::{Dataset, Domain, Record};

/// Set-membership predicate over one record dimension.
///
/// Membership in an empty set is always false, so an empty selection
/// matches nothing rather than disabling the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Years(BTreeSet<u16>),
    Quarters(BTreeSet<u8>),
    Crops(BTreeSet<String>),
}

impl Predicate {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Years(allowed) => allowed.contains(&record.year),
            Predicate::Quarters(allowed) => allowed.contains(&record.quarter),
            Predicate::Crops(allowed) => allowed.contains(&record.crop),
        }
    }
}

/// Conjunction of one predicate per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub years: BTreeSet<u16>,
    pub quarters: BTreeSet<u8>,
    pub crops: BTreeSet<String>,
}

impl FilterSpec {
    pub fn new(
        years: impl IntoIterator<Item = u16>,
        quarters: impl IntoIterator<Item = u8>,
        crops: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            years: years.into_iter().collect(),
            quarters: quarters.into_iter().collect(),
            crops: crops.into_iter().collect(),
        }
    }

    /// Select every value of every dimension, the dashboard default.
    pub fn all(domain: &Domain) -> Self {
        Self::new(
            domain.years.iter().copied(),
            domain.quarters.iter().copied(),
            domain.crops.iter().cloned(),
        )
    }

    pub fn predicates(&self) -> [Predicate; 3] {
        [
            Predicate::Years(self.years.clone()),
            Predicate::Quarters(self.quarters.clone()),
            Predicate::Crops(self.crops.clone()),
        ]
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.years.contains(&record.year)
            && self.quarters.contains(&record.quarter)
            && self.crops.contains(&record.crop)
    }

    /// Keep the records matching all three predicates, preserving their
    /// relative order.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        dataset
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterSpec, Predicate};
    use agristat_core::{Record, round2};
    use std::collections::BTreeSet;

    fn record(year: u16, crop: &str) -> Record {
        Record {
            year,
            quarter: 1,
            crop: crop.to_string(),
            production: 1000,
            area: 250,
            yield_rate: round2(1000.0 / 250.0),
            farmers: 80,
        }
    }

    #[test]
    fn empty_set_matches_nothing() {
        let predicate = Predicate::Years(BTreeSet::new());
        assert!(!predicate.matches(&record(2022, "Maize")));
    }

    #[test]
    fn spec_is_a_conjunction() {
        let spec = FilterSpec::new([2022], [1], ["Maize".to_string()]);
        assert!(spec.matches(&record(2022, "Maize")));
        assert!(!spec.matches(&record(2023, "Maize")));
        assert!(!spec.matches(&record(2022, "Rice")));
    }

    #[test]
    fn predicates_agree_with_matches() {
        let spec = FilterSpec::new([2022, 2023], [1], ["Maize".to_string()]);
        let record = record(2023, "Maize");
        let all_match = spec.predicates().iter().all(|p| p.matches(&record));
        assert_eq!(all_match, spec.matches(&record));
    }
}
