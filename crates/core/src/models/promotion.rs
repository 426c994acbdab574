use serde::{Deserialize, Serialize};

use super::tariff::amount_field;

/// How a promotion's value is applied to a base amount.
///
/// Unknown kinds decode as [`DiscountKind::Other`] and yield no discount,
/// so new backend kinds never break existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percentage,
    Fixed,
    #[serde(other)]
    Other,
}

/// An active promotional discount.
///
/// `court_ids` and the window bounds are restrictions: an absent field
/// matches everything. The engine evaluates applicability and picks the
/// promotion yielding the largest discount; fetching and activation-date
/// filtering are upstream concerns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    pub kind: DiscountKind,

    /// Percentage points for `percentage`, currency units for `fixed`.
    /// Decoded tolerantly: numeric strings with comma decimal separators
    /// normalize like every other amount field.
    #[serde(default, deserialize_with = "amount_field")]
    pub value: Option<f64>,

    /// Courts this promotion is limited to; absent means all courts.
    #[serde(default)]
    pub court_ids: Option<Vec<String>>,

    /// Time-of-day window the reservation must start in; both bounds must be
    /// present for the restriction to apply. The window may wrap midnight.
    #[serde(default)]
    pub window_start: Option<String>,

    #[serde(default)]
    pub window_end: Option<String>,
}

impl Promotion {
    /// Discount this promotion yields on `base`.
    ///
    /// Never exceeds the base amount. An unknown kind, a non-positive or
    /// non-finite value, or a non-positive base yields zero.
    pub fn discount_amount(&self, base: f64) -> f64 {
        let value = self.value.unwrap_or(0.0);
        if base <= 0.0 || value <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        match self.kind {
            DiscountKind::Percentage => (base * value / 100.0).min(base),
            DiscountKind::Fixed => value.min(base),
            DiscountKind::Other => 0.0,
        }
    }
}
