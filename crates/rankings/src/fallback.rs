use crate::record::CountryRecord;

/// Fixed dataset substituted whenever the live fetch fails for any reason.
/// The render/interaction core only ever sees a valid array.
pub fn fallback_rankings() -> Vec<CountryRecord> {
    let raw: [(u32, &str, &str, f64, f64, &str); 5] = [
        (
            1,
            "United States",
            "USA",
            28.78,
            2.7,
            "The world's largest economy driven by services and technology.",
        ),
        (
            2,
            "China",
            "CHN",
            18.53,
            4.6,
            "Manufacturing powerhouse transitioning to high-tech industries.",
        ),
        (
            3,
            "Germany",
            "DEU",
            4.59,
            0.2,
            "Europe's largest economy, known for automotive and engineering.",
        ),
        (
            4,
            "Japan",
            "JPN",
            4.11,
            0.9,
            "Advanced technological economy with a strong export sector.",
        ),
        (
            5,
            "India",
            "IND",
            3.94,
            6.8,
            "Fastest growing major economy driven by domestic consumption.",
        ),
    ];

    raw.into_iter()
        .map(
            |(rank, country_name, iso_code, gdp_trillions, growth_rate, description)| {
                CountryRecord {
                    rank,
                    country_name: country_name.to_string(),
                    iso_code: iso_code.to_string(),
                    gdp_trillions,
                    growth_rate,
                    description: description.to_string(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::fallback_rankings;

    #[test]
    fn fallback_is_ranked_and_valid() {
        let records = fallback_rankings();
        assert_eq!(records.len(), 5);
        for (idx, record) in records.iter().enumerate() {
            assert_eq!(record.rank as usize, idx + 1);
            assert_eq!(record.iso_code.len(), 3);
            assert!(record.gdp_trillions > 0.0);
        }
        assert_eq!(records[0].iso_code, "USA");
        assert_eq!(records[0].gdp_trillions, 28.78);
    }

    #[test]
    fn fallback_survives_strict_validation() {
        let text = serde_json::to_string(&fallback_rankings()).expect("serialize");
        let parsed = crate::request::parse_rankings(&text).expect("validate");
        assert_eq!(parsed, fallback_rankings());
    }
}
