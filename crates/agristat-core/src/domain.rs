use serde::{Deserialize, Serialize};

/// The three categorical axes a dataset is generated over.
///
/// Axis order is significant: datasets are laid out year-major, then
/// quarter, then crop, so two domains with the same members in a different
/// order produce differently ordered datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub years: Vec<u16>,
    pub quarters: Vec<u8>,
    pub crops: Vec<String>,
}

impl Domain {
    /// Number of (year, quarter, crop) combinations this domain spans.
    pub fn combination_count(&self) -> usize {
        self.years.len() * self.quarters.len() * self.crops.len()
    }

    /// Iterate combinations in dataset order: year outer, quarter middle,
    /// crop inner.
    pub fn combinations(&self) -> impl Iterator<Item = (u16, u8, &str)> + '_ {
        self.years.iter().flat_map(move |&year| {
            self.quarters.iter().flat_map(move |&quarter| {
                self.crops
                    .iter()
                    .map(move |crop| (year, quarter, crop.as_str()))
            })
        })
    }

    pub fn contains(&self, year: u16, quarter: u8, crop: &str) -> bool {
        self.years.contains(&year)
            && self.quarters.contains(&quarter)
            && self.crops.iter().any(|c| c == crop)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            years: vec![2022, 2023, 2024, 2025],
            quarters: vec![1, 2, 3, 4],
            crops: ["Maize", "Rice", "Groundnut", "Millet", "Cassava"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Domain;

    #[test]
    fn default_domain_spans_eighty_combinations() {
        let domain = Domain::default();
        assert_eq!(domain.combination_count(), 80);
        assert_eq!(domain.combinations().count(), 80);
    }

    #[test]
    fn combinations_are_year_major() {
        let domain = Domain {
            years: vec![2022, 2023],
            quarters: vec![1, 2],
            crops: vec!["Maize".to_string()],
        };
        let keys: Vec<_> = domain.combinations().collect();
        assert_eq!(
            keys,
            vec![
                (2022, 1, "Maize"),
                (2022, 2, "Maize"),
                (2023, 1, "Maize"),
                (2023, 2, "Maize"),
            ]
        );
    }
}
