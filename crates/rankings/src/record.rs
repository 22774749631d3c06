use serde::{Deserialize, Serialize};

/// One country's GDP ranking entry.
///
/// Immutable once fetched; the full set is replaced wholesale, never patched.
/// The wire form is camelCase, matching the model's response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub rank: u32,
    pub country_name: String,
    /// ISO 3166-1 alpha-3 code, the join key against boundary features.
    pub iso_code: String,
    /// Nominal GDP in trillions of USD.
    pub gdp_trillions: f64,
    /// Annual growth rate, percent, signed.
    pub growth_rate: f64,
    pub description: String,
}

impl CountryRecord {
    /// `$4.59T` style figure for panel display.
    pub fn gdp_label(&self) -> String {
        format!("${}T", self.gdp_trillions)
    }

    /// `+2.7%` / `-0.3%` style figure for panel display.
    pub fn growth_label(&self) -> String {
        if self.growth_rate > 0.0 {
            format!("+{}%", self.growth_rate)
        } else {
            format!("{}%", self.growth_rate)
        }
    }
}
