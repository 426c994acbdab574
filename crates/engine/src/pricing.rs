//! # Pricing Resolver
//!
//! Pure functions that decide which hourly tariff applies to a booking and
//! what the total amount due is:
//!
//! 1. An explicit rate override ("tarifa") short-circuits everything.
//! 2. Otherwise the start time is classified against the club's night
//!    window and the matching tariff field is taken, cross-falling back to
//!    the other period's price and then to the generic price. Many courts
//!    only configure one of the two tariffs, and the absent one must not
//!    silently become free.
//! 3. A missing tariff resolves to zero unless the caller supplied a
//!    fallback hourly price.
//!
//! Amounts are plain decimal numbers; currency rounding and formatting are
//! presentation concerns of the caller.

use courtside_core::models::{
    promotion::Promotion,
    tariff::{CourtTariff, PricingRequest, RateOverride, RateType},
    time::{NightWindow, TimeOfDay},
};
use serde_json::Value;
use tracing::trace;

use crate::night_window::extract_night_window;

/// Whether `time` falls in the window `[start, end)`.
///
/// All three arguments are loose time strings; any that fails to normalize
/// makes the answer `false`. Equal bounds mean a full-day window, and
/// `start > end` means the window wraps past midnight.
pub fn is_time_in_range(time: &str, start: &str, end: &str) -> bool {
    let (Some(time), Some(start), Some(end)) = (
        TimeOfDay::parse(time),
        TimeOfDay::parse(start),
        TimeOfDay::parse(end),
    ) else {
        return false;
    };
    NightWindow { start, end }.contains(time)
}

/// Resolves the hourly price for a booking.
///
/// Priority: explicit override, then the tariff field matching the start
/// time's day/night classification with cross-fallback, then the generic
/// price, then zero. An unparseable or absent start time classifies as day.
pub fn select_hourly_price(
    tariff: &CourtTariff,
    night_window: Option<&NightWindow>,
    start_time: Option<&str>,
    rate_override: Option<&RateOverride>,
) -> f64 {
    if let Some(price) = rate_override
        .and_then(|o| o.price)
        .filter(|p| p.is_finite())
    {
        return price;
    }

    let start = start_time.and_then(TimeOfDay::parse);
    let is_night = match (night_window, start) {
        (Some(window), Some(start)) => window.contains(start),
        _ => false,
    };

    let candidates = if is_night {
        [tariff.night_price, tariff.day_price, tariff.price]
    } else {
        [tariff.day_price, tariff.night_price, tariff.price]
    };
    candidates.into_iter().flatten().next().unwrap_or(0.0)
}

/// Computes the total base amount for a reservation.
///
/// An explicit total bypasses rate and duration logic entirely. Otherwise
/// the resolved hourly price is multiplied by the duration when one is
/// given; the caller's fallback hourly price substitutes only when the court
/// has no tariff fields at all and no override applies.
pub fn calculate_base_amount(request: &PricingRequest) -> f64 {
    if let Some(amount) = request.explicit_amount.filter(|a| a.is_finite()) {
        return amount;
    }

    let hourly = select_hourly_price(
        &request.tariff,
        request.night_window.as_ref(),
        request.start_time.as_deref(),
        request.rate_override.as_ref(),
    );

    let has_override = request
        .rate_override
        .as_ref()
        .and_then(|o| o.price)
        .is_some_and(f64::is_finite);
    let hourly = if !has_override && request.tariff.is_empty() {
        request.fallback_hourly.unwrap_or(hourly)
    } else {
        hourly
    };

    match request.duration_hours {
        Some(hours) if hours > 0 => hourly * f64::from(hours),
        _ => hourly,
    }
}

/// Classifies a start time against a club record for display.
///
/// `Unknown` when the club has no resolvable night window or the start time
/// fails to normalize.
pub fn determine_rate_type(start_time: Option<&str>, club: &Value) -> RateType {
    let Some(window) = extract_night_window(club) else {
        return RateType::Unknown;
    };
    let Some(start) = start_time.and_then(TimeOfDay::parse) else {
        return RateType::Unknown;
    };
    if window.contains(start) {
        RateType::Night
    } else {
        RateType::Day
    }
}

/// Whether a promotion's restrictions match a reservation.
///
/// An absent court list matches every court. The time restriction applies
/// only when both window bounds are present; it uses the same half-open,
/// wrap-aware semantics as the night window.
fn promotion_applies(promotion: &Promotion, court_id: &str, start_time: Option<&str>) -> bool {
    if let Some(courts) = &promotion.court_ids {
        if !courts.iter().any(|c| c == court_id) {
            return false;
        }
    }
    match (&promotion.window_start, &promotion.window_end) {
        (Some(start), Some(end)) => match start_time {
            Some(time) => is_time_in_range(time, start, end),
            None => false,
        },
        _ => true,
    }
}

/// Largest discount any applicable promotion yields on `base`.
///
/// When several promotions match, the one with the largest discount amount
/// wins, regardless of definition order.
pub fn best_discount(
    promotions: &[Promotion],
    court_id: &str,
    start_time: Option<&str>,
    base: f64,
) -> f64 {
    let discount = promotions
        .iter()
        .filter(|p| promotion_applies(p, court_id, start_time))
        .map(|p| p.discount_amount(base))
        .fold(0.0, f64::max);
    trace!(court_id, base, discount, "selected best promotion discount");
    discount
}

/// Base amount minus the best applicable discount.
pub fn apply_best_discount(
    promotions: &[Promotion],
    court_id: &str,
    start_time: Option<&str>,
    base: f64,
) -> f64 {
    base - best_discount(promotions, court_id, start_time, base)
}
