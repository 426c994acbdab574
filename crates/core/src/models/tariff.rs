//! Court tariffs and the pricing request record.
//!
//! Tariff amounts arrive from several backend producers with inconsistent
//! typing: JSON numbers, numeric strings, and numeric strings with a comma
//! decimal separator have all been observed. [`parse_amount`] is the single
//! tolerant reader for all of them; the serde helpers below route every
//! amount field through it so malformed values decode as absent rather than
//! failing the whole record.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::time::NightWindow;

/// Reads an amount from a JSON number or numeric string.
///
/// Strings may use a comma decimal separator (`"1500,50"`); when both `.`
/// and `,` are present the dots are taken as thousands separators and
/// dropped. Non-finite and non-numeric values yield `None`.
pub fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            let normalized = if raw.contains(',') && raw.contains('.') {
                raw.replace('.', "").replace(',', ".")
            } else {
                raw.replace(',', ".")
            };
            normalized.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Serde helper: decode an optional amount field tolerantly.
pub(crate) fn amount_field<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_amount))
}

/// A court's configured hourly prices. All fields are optional; a court with
/// none of them resolves to a price of zero unless the caller supplies a
/// fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourtTariff {
    #[serde(default, deserialize_with = "amount_field")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "amount_field")]
    pub day_price: Option<f64>,

    #[serde(default, deserialize_with = "amount_field")]
    pub night_price: Option<f64>,
}

impl CourtTariff {
    /// True when no price field is configured at all.
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.day_price.is_none() && self.night_price.is_none()
    }
}

/// An explicit hourly price ("tarifa") that bypasses all day/night logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateOverride {
    #[serde(default, deserialize_with = "amount_field")]
    pub price: Option<f64>,
}

/// Inputs to one pricing computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingRequest {
    #[serde(default)]
    pub tariff: CourtTariff,

    #[serde(default)]
    pub night_window: Option<NightWindow>,

    /// Raw start time as received upstream; normalized at use.
    #[serde(default)]
    pub start_time: Option<String>,

    /// Whole hours booked. Absent or zero means the hourly rate is returned
    /// unmultiplied.
    #[serde(default)]
    pub duration_hours: Option<u32>,

    /// Caller-supplied total that bypasses rate and duration logic entirely.
    #[serde(default, deserialize_with = "amount_field")]
    pub explicit_amount: Option<f64>,

    #[serde(default)]
    pub rate_override: Option<RateOverride>,

    /// Per-hour price used only when the tariff has no fields at all.
    #[serde(default, deserialize_with = "amount_field")]
    pub fallback_hourly: Option<f64>,
}

/// Display classification of a reservation's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Day,
    Night,
    Unknown,
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RateType::Day => "day",
            RateType::Night => "night",
            RateType::Unknown => "unknown",
        };
        f.write_str(label)
    }
}
