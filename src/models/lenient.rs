//! Forgiving deserializers for hand-entered fields.
//!
//! Daily entries and compensation settings are typed in by staff on a phone,
//! so a field may arrive as a number, a numeric string, `null`, or garbage.
//! None of these may block a payroll run: anything that is not a finite
//! number reads as zero, and an unrecognised setting falls back to its
//! default.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use tracing::warn;

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Reads a whole-unit count. Fractions are truncated toward zero.
///
/// The sign is preserved; clamping to non-negative happens in the engine so
/// that an upstream negative is still visible in the audit trace.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Int(n) => n,
        Loose::Float(f) => float_to_count(f),
        Loose::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .unwrap_or_else(|_| s.parse::<f64>().map(float_to_count).unwrap_or(0))
        }
        Loose::Other(_) => 0,
    })
}

/// Reads a monetary amount.
pub(crate) fn money<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Int(n) => Decimal::from(n),
        Loose::Float(f) if f.is_finite() => Decimal::try_from(f).unwrap_or(Decimal::ZERO),
        Loose::Float(_) => Decimal::ZERO,
        Loose::Text(s) => {
            let s = s.trim();
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .unwrap_or(Decimal::ZERO)
        }
        Loose::Other(_) => Decimal::ZERO,
    })
}

/// Reads a free-text field. Numbers are rendered as text; `null` and
/// structured values read as an empty string, which callers then reject with
/// their own error.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Int(n) => n.to_string(),
        Loose::Float(f) => f.to_string(),
        Loose::Text(s) => s,
        Loose::Other(_) => String::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrDefault<T> {
    Known(T),
    Unknown(IgnoredAny),
}

/// Reads a setting, falling back to `T::default()` when the value is not one
/// `T` recognises.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match OrDefault::<T>::deserialize(deserializer)? {
        OrDefault::Known(value) => value,
        OrDefault::Unknown(_) => {
            warn!(
                setting = std::any::type_name::<T>(),
                "unrecognised setting value, using default"
            );
            T::default()
        }
    })
}

fn float_to_count(f: f64) -> i64 {
    if f.is_finite() {
        // `as` saturates at the i64 bounds
        f.trunc() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "count")]
        cups: i64,
        #[serde(default, deserialize_with = "money")]
        amount: Decimal,
    }

    fn fields(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_plain_numbers() {
        let p = fields(r#"{"cups": 42, "amount": 1500}"#);
        assert_eq!(p.cups, 42);
        assert_eq!(p.amount, Decimal::from(1500));
    }

    #[test]
    fn test_numeric_strings() {
        let p = fields(r#"{"cups": " 17 ", "amount": "2500.50"}"#);
        assert_eq!(p.cups, 17);
        assert_eq!(p.amount, Decimal::from_str("2500.50").unwrap());
    }

    #[test]
    fn test_fractional_count_truncates() {
        assert_eq!(fields(r#"{"cups": 12.9}"#).cups, 12);
        assert_eq!(fields(r#"{"cups": "7.5"}"#).cups, 7);
    }

    #[test]
    fn test_garbage_reads_as_zero() {
        let p = fields(r#"{"cups": "banyak", "amount": "Rp 5.000"}"#);
        assert_eq!(p.cups, 0);
        assert_eq!(p.amount, Decimal::ZERO);
    }

    #[test]
    fn test_null_bool_and_objects_read_as_zero() {
        let p = fields(r#"{"cups": null, "amount": {"value": 3}}"#);
        assert_eq!(p.cups, 0);
        assert_eq!(p.amount, Decimal::ZERO);

        let p = fields(r#"{"cups": true, "amount": [1, 2]}"#);
        assert_eq!(p.cups, 0);
        assert_eq!(p.amount, Decimal::ZERO);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let p = fields("{}");
        assert_eq!(p.cups, 0);
        assert_eq!(p.amount, Decimal::ZERO);
    }

    #[test]
    fn test_negative_sign_is_preserved() {
        let p = fields(r#"{"cups": -5, "amount": "-1000"}"#);
        assert_eq!(p.cups, -5);
        assert_eq!(p.amount, Decimal::from(-1000));
    }

    #[test]
    fn test_scientific_notation_string() {
        let p = fields(r#"{"amount": "1e3"}"#);
        assert_eq!(p.amount, Decimal::from(1000));
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum Mode {
        #[default]
        Strict,
        Relaxed,
    }

    #[derive(Debug, Deserialize)]
    struct Settings {
        #[serde(default, deserialize_with = "text")]
        label: String,
        #[serde(default, deserialize_with = "or_default")]
        mode: Mode,
    }

    fn settings(json: &str) -> Settings {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_accepts_strings_and_numbers() {
        assert_eq!(settings(r#"{"label": "2024-01-07"}"#).label, "2024-01-07");
        assert_eq!(settings(r#"{"label": 20240107}"#).label, "20240107");
        assert_eq!(settings(r#"{"label": 1.5}"#).label, "1.5");
    }

    #[test]
    fn test_text_null_and_objects_read_as_empty() {
        assert_eq!(settings(r#"{"label": null}"#).label, "");
        assert_eq!(settings(r#"{"label": {"day": 7}}"#).label, "");
        assert_eq!(settings("{}").label, "");
    }

    #[test]
    fn test_known_setting_is_kept() {
        assert_eq!(settings(r#"{"mode": "relaxed"}"#).mode, Mode::Relaxed);
        assert_eq!(settings(r#"{"mode": "strict"}"#).mode, Mode::Strict);
    }

    #[test]
    fn test_unrecognised_setting_falls_back_to_default() {
        assert_eq!(settings(r#"{"mode": "relaxd"}"#).mode, Mode::Strict);
        assert_eq!(settings(r#"{"mode": null}"#).mode, Mode::Strict);
        assert_eq!(settings(r#"{"mode": 3}"#).mode, Mode::Strict);
        assert_eq!(settings("{}").mode, Mode::Strict);
    }
}
