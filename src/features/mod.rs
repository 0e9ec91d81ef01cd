use crate::{model::StandardScaler, Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Incoming customer attributes, as received on the wire. The numeric fields
/// stay as raw JSON values so the handler can echo them back untouched; the
/// encoder coerces them. `customer_id` is opaque and only ever echoed.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: Value,
    pub gender: String,
    pub age: Value,
    pub annual_income: Value,
    pub spending_score: Value,
}

/// Encodes a customer record into the fixed-order feature vector
/// `[gender, age, annual_income, spending_score]`, scaled when a fitted
/// scaler is available. Pure: no side effects, no state.
pub fn encode(record: &CustomerRecord, scaler: Option<&StandardScaler>) -> Result<Vec<f64>> {
    let raw = vec![
        encode_gender(&record.gender)?,
        coerce_numeric("age", &record.age)?,
        coerce_numeric("annual_income", &record.annual_income)?,
        coerce_numeric("spending_score", &record.spending_score)?,
    ];
    match scaler {
        Some(scaler) => scaler.transform(&raw),
        None => Ok(raw),
    }
}

/// Maps gender text to its trained encoding: female/f -> 0, male/m -> 1,
/// case-insensitive. Anything else is rejected rather than guessed.
pub fn encode_gender(raw: &str) -> Result<f64> {
    match raw.trim().to_lowercase().as_str() {
        "female" | "f" => Ok(0.0),
        "male" | "m" => Ok(1.0),
        other => Err(Error::invalid_input(format!(
            "unrecognized gender value '{other}', expected male/m or female/f"
        ))),
    }
}

fn coerce_numeric(field: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::invalid_input(format!("field '{field}' is not numeric")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(gender: &str, age: Value, income: Value, score: Value) -> CustomerRecord {
        CustomerRecord {
            customer_id: json!("C-1"),
            gender: gender.to_string(),
            age,
            annual_income: income,
            spending_score: score,
        }
    }

    #[test]
    fn encodes_in_fixed_order_without_scaler() {
        let record = record("F", json!(25), json!(50), json!(80));
        let features = encode(&record, None).unwrap();
        assert_eq!(features, vec![0.0, 25.0, 50.0, 80.0]);
    }

    #[test]
    fn applies_scaler_when_present() {
        let scaler = StandardScaler {
            mean: vec![0.0, 25.0, 50.0, 80.0],
            scale: vec![1.0, 5.0, 10.0, 20.0],
        };
        let record = record("M", json!(30), json!(60), json!(100));
        let features = encode(&record, Some(&scaler)).unwrap();
        assert_eq!(features, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn coerces_numeric_strings() {
        let record = record("female", json!("25"), json!(" 50.5 "), json!(80.0));
        let features = encode(&record, None).unwrap();
        assert_eq!(features, vec![0.0, 25.0, 50.5, 80.0]);
    }

    #[test]
    fn rejects_non_numeric_field_by_name() {
        let record = record("f", json!(25), json!("lots"), json!(80));
        let err = encode(&record, None).unwrap_err();
        assert!(err.to_string().contains("annual_income"));
    }

    #[test]
    fn rejects_unrecognized_gender() {
        let err = encode_gender("unknown").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn gender_encoding_is_case_insensitive() {
        for (raw, expected) in [
            ("male", 1.0),
            ("M", 1.0),
            ("Female", 0.0),
            ("f", 0.0),
            ("  FEMALE  ", 0.0),
        ] {
            assert_eq!(encode_gender(raw).unwrap(), expected, "input {raw:?}");
        }
    }
}
