use serde::{Deserialize, Serialize};

/// One synthetic observation of agricultural metrics for a given year,
/// quarter, and crop.
///
/// Field names serialize under the canonical CSV header
/// `Year,Quarter,Crop,Production,Area,Yield,Farmers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Year")]
    pub year: u16,
    /// Quarter of the year, 1 through 4.
    #[serde(rename = "Quarter")]
    pub quarter: u8,
    #[serde(rename = "Crop")]
    pub crop: String,
    /// Production in tons.
    #[serde(rename = "Production")]
    pub production: u32,
    /// Cultivated area in hectares.
    #[serde(rename = "Area")]
    pub area: u32,
    /// Derived metric: production / area in tons per hectare, rounded to
    /// two decimal places. Invariant: `yield_rate == round2(production / area)`.
    #[serde(rename = "Yield")]
    pub yield_rate: f64,
    /// Number of farmers involved.
    #[serde(rename = "Farmers")]
    pub farmers: u32,
}

impl Record {
    /// Key identifying the (year, quarter, crop) combination this record
    /// observes.
    pub fn key(&self) -> (u16, u8, &str) {
        (self.year, self.quarter, self.crop.as_str())
    }
}

/// Round a value to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_truncates_to_two_decimals() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.678), 2.68);
        assert_eq!(round2(10.0), 10.0);
    }
}
