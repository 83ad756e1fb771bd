use serde::Serializer;

// Every integer up to 2^53 is exactly representable as an f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize whole numbers without a fractional part, `15` rather than `15.0`.
/// Non-finite values fall through to `serialize_f64`, which JSON writes as `null`.
pub fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
