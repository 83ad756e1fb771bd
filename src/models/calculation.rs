use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::ErrorResponse;
use crate::utils::number::serialize_number;

/// Request body for a calculation
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CalculationRequest {
    #[serde(serialize_with = "serialize_number")]
    #[schema(example = 10)]
    pub a: f64,
    #[serde(serialize_with = "serialize_number")]
    #[schema(example = 5)]
    pub b: f64,
    /// One of `add`, `subtract`, `multiply`, `divide`
    #[schema(example = "add")]
    pub operation: String,
}

impl CalculationRequest {
    /// Decode the first JSON value in `body`.
    ///
    /// Field names match case-insensitively, `null` fields keep their zero value,
    /// a top-level `null` is an empty request, and anything after the value is ignored.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value = match serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
        {
            Some(value) => value?,
            None => return Err(serde_json::Error::custom("empty request body")),
        };

        let fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(serde_json::Error::custom(format!(
                    "expected an object, found {other}"
                )))
            }
        };

        let fields = fields
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        serde_json::from_value(Value::Object(fields))
    }
}

/// Response for a calculation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
    pub operation: String,
    #[serde(serialize_with = "serialize_number")]
    pub a: f64,
    #[serde(serialize_with = "serialize_number")]
    pub b: f64,
    /// Only present when the calculation failed, `result` is then 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// RFC3339 UTC
    pub timestamp: String,
}

/// Body of a 400 from `/calculate`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CalculationFailure {
    /// The operation ran and failed, e.g. division by zero
    Calculation(CalculationResponse),
    /// Malformed JSON or an unsupported operation
    Rejected(ErrorResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_request() {
        let req = CalculationRequest::from_body(br#"{"a":10,"b":5,"operation":"add"}"#).unwrap();
        assert_eq!(req.a, 10.0);
        assert_eq!(req.b, 5.0);
        assert_eq!(req.operation, "add");
    }

    #[test]
    fn field_names_are_case_insensitive() {
        let req = CalculationRequest::from_body(br#"{"A":10,"B":5,"Operation":"add"}"#).unwrap();
        assert_eq!(req.a, 10.0);
        assert_eq!(req.b, 5.0);
        assert_eq!(req.operation, "add");
    }

    #[test]
    fn trailing_data_is_ignored() {
        let req =
            CalculationRequest::from_body(br#"{"a":1,"b":2,"operation":"add"} trailing"#).unwrap();
        assert_eq!(req.operation, "add");
    }

    #[test]
    fn null_decodes_to_empty_request() {
        let req = CalculationRequest::from_body(b"null").unwrap();
        assert_eq!(req.a, 0.0);
        assert_eq!(req.operation, "");

        let req = CalculationRequest::from_body(br#"{"a":null,"b":2,"operation":"add"}"#).unwrap();
        assert_eq!(req.a, 0.0);
        assert_eq!(req.b, 2.0);
    }

    #[test]
    fn rejects_malformed_bodies() {
        let bodies: [&[u8]; 6] = [b"", b"   ", b"{not json", br#"{"a":"ten"}"#, b"[1,2]", b"42"];
        for body in bodies {
            assert!(
                CalculationRequest::from_body(body).is_err(),
                "{}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn failure_body_distinguishes_variants() {
        let rejected: CalculationFailure =
            serde_json::from_str(r#"{"error":"Invalid JSON format"}"#).unwrap();
        assert!(matches!(rejected, CalculationFailure::Rejected(_)));

        let failed: CalculationFailure = serde_json::from_str(
            r#"{"result":0,"operation":"divide","a":5,"b":0,"error":"division by zero","timestamp":"2026-10-18T09:30:00Z"}"#,
        )
        .unwrap();
        assert!(matches!(failed, CalculationFailure::Calculation(_)));
    }
}
