use serde_json::{Value, json};

use crate::record::CountryRecord;

/// Model queried for the one-shot rankings request.
pub const MODEL: &str = "gemini-2.5-flash";

/// The single prompt sent to the model.
pub const PROMPT: &str = "Generate a comprehensive dataset of the top 30 countries by estimated \
nominal GDP for the year 2024. Provide the rank, country name, ISO Alpha-3 code, GDP in \
Trillions of USD, estimated growth rate percentage, and a very brief 1-sentence economic summary.";

#[derive(Debug, thiserror::Error)]
pub enum RankingsError {
    #[error("malformed rankings payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model response contained no text part")]
    MissingText,
    #[error("model returned an empty rankings array")]
    Empty,
    #[error("invalid record {code:?}: {reason}")]
    InvalidRecord { code: String, reason: &'static str },
    #[cfg(not(target_arch = "wasm32"))]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Strict response schema: an array of ranking objects, all fields required.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "rank": { "type": "INTEGER" },
                "countryName": { "type": "STRING" },
                "isoCode": {
                    "type": "STRING",
                    "description": "ISO 3166-1 alpha-3 code (e.g., USA, CHN, JPN)"
                },
                "gdpTrillions": {
                    "type": "NUMBER",
                    "description": "Nominal GDP in Trillions USD"
                },
                "growthRate": {
                    "type": "NUMBER",
                    "description": "Annual growth rate percentage"
                },
                "description": {
                    "type": "STRING",
                    "description": "Short economic summary"
                }
            },
            "required": [
                "rank", "countryName", "isoCode", "gdpTrillions", "growthRate", "description"
            ]
        }
    })
}

/// Full generateContent request body: prompt plus JSON-constrained output.
pub fn request_body() -> Value {
    json!({
        "contents": [{ "parts": [{ "text": PROMPT }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        }
    })
}

/// Pulls the first text part out of a generateContent response envelope.
pub fn extract_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Parses and validates the model's JSON array of ranking records.
pub fn parse_rankings(text: &str) -> Result<Vec<CountryRecord>, RankingsError> {
    let records: Vec<CountryRecord> = serde_json::from_str(text)?;
    if records.is_empty() {
        return Err(RankingsError::Empty);
    }

    let mut seen_ranks = std::collections::HashSet::new();
    for record in &records {
        if record.rank == 0 {
            return Err(invalid(record, "rank must be positive"));
        }
        if !seen_ranks.insert(record.rank) {
            return Err(invalid(record, "duplicate rank"));
        }
        if record.iso_code.len() != 3 || !record.iso_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid(record, "iso code must be three letters"));
        }
        if !record.gdp_trillions.is_finite() || record.gdp_trillions < 0.0 {
            return Err(invalid(record, "GDP must be non-negative"));
        }
        if !record.growth_rate.is_finite() {
            return Err(invalid(record, "growth rate must be finite"));
        }
    }
    Ok(records)
}

fn invalid(record: &CountryRecord, reason: &'static str) -> RankingsError {
    RankingsError::InvalidRecord {
        code: record.iso_code.clone(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::{RankingsError, extract_text, parse_rankings, request_body};
    use serde_json::json;

    fn entry(rank: u32, code: &str, gdp: f64) -> serde_json::Value {
        json!({
            "rank": rank,
            "countryName": code,
            "isoCode": code,
            "gdpTrillions": gdp,
            "growthRate": 1.0,
            "description": "x"
        })
    }

    #[test]
    fn request_body_constrains_output_to_json() {
        let body = request_body();
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
        let required = &body["generationConfig"]["responseSchema"]["items"]["required"];
        assert_eq!(required.as_array().unwrap().len(), 6);
    }

    #[test]
    fn extracts_first_text_part() {
        let envelope = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "[1, 2, 3]" }] }
            }]
        });
        assert_eq!(extract_text(&envelope), Some("[1, 2, 3]"));
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
    }

    #[test]
    fn parses_valid_rankings() {
        let text = json!([entry(1, "USA", 28.78), entry(2, "CHN", 18.53)]).to_string();
        let records = parse_rankings(&text).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].iso_code, "USA");
    }

    #[test]
    fn rejects_empty_arrays() {
        assert!(matches!(parse_rankings("[]"), Err(RankingsError::Empty)));
    }

    #[test]
    fn rejects_bad_records() {
        let zero_rank = json!([entry(0, "USA", 1.0)]).to_string();
        assert!(matches!(
            parse_rankings(&zero_rank),
            Err(RankingsError::InvalidRecord { reason: "rank must be positive", .. })
        ));

        let dup_rank = json!([entry(1, "USA", 1.0), entry(1, "CHN", 2.0)]).to_string();
        assert!(matches!(
            parse_rankings(&dup_rank),
            Err(RankingsError::InvalidRecord { reason: "duplicate rank", .. })
        ));

        let bad_code = json!([entry(1, "US", 1.0)]).to_string();
        assert!(matches!(
            parse_rankings(&bad_code),
            Err(RankingsError::InvalidRecord { reason: "iso code must be three letters", .. })
        ));

        let negative_gdp = json!([entry(1, "USA", -1.0)]).to_string();
        assert!(matches!(
            parse_rankings(&negative_gdp),
            Err(RankingsError::InvalidRecord { reason: "GDP must be non-negative", .. })
        ));
    }

    #[test]
    fn rejects_non_array_payloads() {
        assert!(matches!(
            parse_rankings(r#"{"rank": 1}"#),
            Err(RankingsError::Parse(_))
        ));
    }
}
