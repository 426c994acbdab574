use courtside_core::models::{
    promotion::{DiscountKind, Promotion},
    tariff::{CourtTariff, PricingRequest, RateOverride, RateType},
    time::{NightWindow, TimeOfDay},
};
use courtside_engine::night_window::extract_night_window;
use courtside_engine::pricing::{
    apply_best_discount, best_discount, calculate_base_amount, determine_rate_type,
    is_time_in_range, select_hourly_price,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn window(start: &str, end: &str) -> NightWindow {
    NightWindow {
        start: TimeOfDay::parse(start).expect("valid window start"),
        end: TimeOfDay::parse(end).expect("valid window end"),
    }
}

fn promotion(kind: DiscountKind, value: f64) -> Promotion {
    Promotion {
        id: None,
        name: None,
        kind,
        value: Some(value),
        court_ids: None,
        window_start: None,
        window_end: None,
    }
}

// --- time normalization -------------------------------------------------

#[rstest]
#[case("9", "09:00:00")]
#[case("9:5", "09:05:00")]
#[case("09:30", "09:30:00")]
#[case("23:59:59", "23:59:59")]
#[case("0:0:0", "00:00:00")]
#[case(" 22:00 ", "22:00:00")]
fn test_normalize_valid_times(#[case] raw: &str, #[case] expected: &str) {
    let time = TimeOfDay::parse(raw).expect("should normalize");
    assert_eq!(time.to_string(), expected);
}

#[rstest]
#[case("")]
#[case("24:00")]
#[case("12:60")]
#[case("12:00:60")]
#[case("12:00:00:00")]
#[case("12:")]
#[case(":30")]
#[case("ab:cd")]
#[case("12h30")]
#[case("120:00")]
#[case("1 2:00")]
fn test_normalize_rejects_malformed_times(#[case] raw: &str) {
    assert_eq!(TimeOfDay::parse(raw), None);
}

#[test]
fn test_round_trip_is_stable() {
    let first = TimeOfDay::parse("7:5:3").unwrap().to_string();
    let second = TimeOfDay::parse(&first).unwrap().to_string();
    assert_eq!(first, second);
    assert_eq!(second, "07:05:03");
}

// --- range checks -------------------------------------------------------

#[rstest]
#[case("00:00:00")]
#[case("12:00:00")]
#[case("23:59:59")]
fn test_equal_bounds_cover_full_day(#[case] time: &str) {
    assert!(is_time_in_range(time, "10:00:00", "10:00:00"));
}

#[rstest]
#[case("23:00:00", true)]
#[case("02:00:00", true)]
#[case("22:00:00", true)] // start boundary is inside
#[case("06:00:00", false)] // end boundary is outside
#[case("10:00:00", false)]
#[case("05:59:59", true)]
fn test_wraparound_window(#[case] time: &str, #[case] expected: bool) {
    assert_eq!(is_time_in_range(time, "22:00:00", "06:00:00"), expected);
}

#[rstest]
#[case("09:00:00", true)]
#[case("08:00:00", true)]
#[case("17:00:00", false)]
#[case("18:00:00", false)]
fn test_non_wrapping_window(#[case] time: &str, #[case] expected: bool) {
    assert_eq!(is_time_in_range(time, "08:00:00", "17:00:00"), expected);
}

#[test]
fn test_unparseable_inputs_are_never_in_range() {
    assert!(!is_time_in_range("not a time", "08:00:00", "17:00:00"));
    assert!(!is_time_in_range("09:00:00", "junk", "17:00:00"));
    assert!(!is_time_in_range("09:00:00", "08:00:00", "25:00"));
}

// --- night window extraction --------------------------------------------

#[test]
fn test_extract_from_flat_snake_case_fields() {
    let club = json!({
        "hora_inicio_nocturna": "22:00",
        "hora_fin_nocturna": "6:00",
    });
    let window = extract_night_window(&club).expect("window should resolve");
    assert_eq!(window.start.to_string(), "22:00:00");
    assert_eq!(window.end.to_string(), "06:00:00");
}

#[test]
fn test_extract_from_camel_case_fields() {
    let club = json!({
        "horaInicioNocturna": "21:30",
        "horaFinNocturna": "7:00",
    });
    let window = extract_night_window(&club).expect("window should resolve");
    assert_eq!(window.start.to_string(), "21:30:00");
}

#[test]
fn test_extract_from_nested_configuration_object() {
    let club = json!({
        "configuracion_nocturna": { "hora_inicio": "20:00", "hora_fin": "23:59" },
    });
    let window = extract_night_window(&club).expect("window should resolve");
    assert_eq!(window.start.to_string(), "20:00:00");
    assert_eq!(window.end.to_string(), "23:59:00");
}

#[test]
fn test_extract_from_nested_configuration_array() {
    let club = json!({
        "configuracion_nocturna": [{ "desde": "22:00", "hasta": "6:00" }],
    });
    let window = extract_night_window(&club).expect("window should resolve");
    assert_eq!(window.start.to_string(), "22:00:00");
    assert_eq!(window.end.to_string(), "06:00:00");
}

#[test]
fn test_flat_fields_win_over_nested_configuration() {
    let club = json!({
        "hora_inicio_nocturna": "22:00",
        "hora_fin_nocturna": "6:00",
        "configuracion_nocturna": { "hora_inicio": "18:00", "hora_fin": "23:00" },
    });
    let window = extract_night_window(&club).expect("window should resolve");
    assert_eq!(window.start.to_string(), "22:00:00");
    assert_eq!(window.end.to_string(), "06:00:00");
}

#[test]
fn test_empty_strings_fall_through_to_next_alias() {
    let club = json!({
        "hora_inicio_nocturna": "  ",
        "horaInicioNocturna": "22:00",
        "hora_fin_nocturna": "6:00",
    });
    let window = extract_night_window(&club).expect("window should resolve");
    assert_eq!(window.start.to_string(), "22:00:00");
}

#[test]
fn test_no_window_when_either_side_missing_or_invalid() {
    assert_eq!(extract_night_window(&json!({})), None);
    assert_eq!(
        extract_night_window(&json!({ "hora_inicio_nocturna": "22:00" })),
        None
    );
    assert_eq!(
        extract_night_window(&json!({
            "hora_inicio_nocturna": "22:00",
            "hora_fin_nocturna": "26:00",
        })),
        None
    );
    assert_eq!(
        extract_night_window(&json!({
            "hora_inicio_nocturna": 22,
            "hora_fin_nocturna": "6:00",
        })),
        None
    );
}

// --- hourly price selection ---------------------------------------------

#[test]
fn test_override_short_circuits_everything() {
    let tariff = CourtTariff {
        price: Some(1000.0),
        day_price: Some(1500.0),
        night_price: Some(2100.0),
    };
    let rate_override = RateOverride {
        price: Some(999.0),
    };

    let price = select_hourly_price(
        &tariff,
        Some(&window("22:00", "6:00")),
        Some("23:00:00"),
        Some(&rate_override),
    );
    assert_eq!(price, 999.0);
}

#[test]
fn test_night_time_prefers_night_price() {
    let tariff = CourtTariff {
        price: Some(1000.0),
        day_price: Some(1500.0),
        night_price: Some(2100.0),
    };
    let night = window("22:00", "6:00");

    assert_eq!(
        select_hourly_price(&tariff, Some(&night), Some("23:00:00"), None),
        2100.0
    );
    assert_eq!(
        select_hourly_price(&tariff, Some(&night), Some("10:00:00"), None),
        1500.0
    );
}

#[test]
fn test_cross_fallback_between_day_and_night() {
    let day_only = CourtTariff {
        price: None,
        day_price: Some(2000.0),
        night_price: None,
    };
    let night_only = CourtTariff {
        price: None,
        day_price: None,
        night_price: Some(2500.0),
    };
    let night = window("22:00", "6:00");

    // A court with only a day price must not become free at night.
    assert_eq!(
        select_hourly_price(&day_only, Some(&night), Some("23:00:00"), None),
        2000.0
    );
    assert_eq!(
        select_hourly_price(&night_only, Some(&night), Some("10:00:00"), None),
        2500.0
    );
}

#[test]
fn test_generic_price_is_last_resort() {
    let tariff = CourtTariff {
        price: Some(1800.0),
        day_price: None,
        night_price: None,
    };
    assert_eq!(
        select_hourly_price(&tariff, Some(&window("22:00", "6:00")), Some("23:00:00"), None),
        1800.0
    );
    assert_eq!(
        select_hourly_price(&CourtTariff::default(), None, Some("10:00:00"), None),
        0.0
    );
}

#[test]
fn test_unparseable_start_time_classifies_as_day() {
    let tariff = CourtTariff {
        price: None,
        day_price: Some(1500.0),
        night_price: Some(2100.0),
    };
    assert_eq!(
        select_hourly_price(&tariff, Some(&window("22:00", "6:00")), Some("late"), None),
        1500.0
    );
    assert_eq!(
        select_hourly_price(&tariff, Some(&window("22:00", "6:00")), None, None),
        1500.0
    );
}

// --- base amount --------------------------------------------------------

#[test]
fn test_night_booking_amount() {
    let request = PricingRequest {
        tariff: CourtTariff {
            price: None,
            day_price: Some(1500.0),
            night_price: Some(2100.0),
        },
        night_window: Some(window("22:00", "6:00")),
        start_time: Some("23:00:00".to_string()),
        duration_hours: Some(2),
        ..Default::default()
    };

    assert_eq!(calculate_base_amount(&request), 4200.0);
}

#[test]
fn test_explicit_amount_bypasses_everything() {
    let request = PricingRequest {
        tariff: CourtTariff {
            price: Some(1000.0),
            ..Default::default()
        },
        start_time: Some("10:00:00".to_string()),
        duration_hours: Some(3),
        explicit_amount: Some(5000.0),
        ..Default::default()
    };

    assert_eq!(calculate_base_amount(&request), 5000.0);
}

#[test]
fn test_missing_duration_returns_hourly_unmultiplied() {
    let request = PricingRequest {
        tariff: CourtTariff {
            price: Some(1200.0),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(calculate_base_amount(&request), 1200.0);

    let zero_duration = PricingRequest {
        duration_hours: Some(0),
        ..request
    };
    assert_eq!(calculate_base_amount(&zero_duration), 1200.0);
}

#[test]
fn test_fallback_hourly_used_only_when_tariff_is_bare() {
    let bare = PricingRequest {
        duration_hours: Some(2),
        fallback_hourly: Some(800.0),
        ..Default::default()
    };
    assert_eq!(calculate_base_amount(&bare), 1600.0);

    // A configured tariff beats the fallback, even at zero duration.
    let configured = PricingRequest {
        tariff: CourtTariff {
            price: Some(1000.0),
            ..Default::default()
        },
        duration_hours: Some(2),
        fallback_hourly: Some(800.0),
        ..Default::default()
    };
    assert_eq!(calculate_base_amount(&configured), 2000.0);

    // An override beats the fallback too.
    let overridden = PricingRequest {
        rate_override: Some(RateOverride {
            price: Some(950.0),
        }),
        duration_hours: Some(2),
        fallback_hourly: Some(800.0),
        ..Default::default()
    };
    assert_eq!(calculate_base_amount(&overridden), 1900.0);
}

#[test]
fn test_bare_tariff_without_fallback_is_zero() {
    let request = PricingRequest {
        duration_hours: Some(4),
        ..Default::default()
    };
    assert_eq!(calculate_base_amount(&request), 0.0);
}

// --- rate type ----------------------------------------------------------

#[test]
fn test_rate_type_classification() {
    let club = json!({
        "hora_inicio_nocturna": "22:00",
        "hora_fin_nocturna": "6:00",
    });

    assert_eq!(determine_rate_type(Some("23:00:00"), &club), RateType::Night);
    assert_eq!(determine_rate_type(Some("02:00:00"), &club), RateType::Night);
    assert_eq!(determine_rate_type(Some("10:00:00"), &club), RateType::Day);
    assert_eq!(determine_rate_type(Some("junk"), &club), RateType::Unknown);
    assert_eq!(determine_rate_type(None, &club), RateType::Unknown);
}

#[test]
fn test_rate_type_unknown_without_window() {
    let club = json!({ "nombre": "Club Centro" });
    assert_eq!(
        determine_rate_type(Some("23:00:00"), &club),
        RateType::Unknown
    );
}

// --- promotions ---------------------------------------------------------

#[test]
fn test_largest_discount_wins() {
    let promotions = vec![
        promotion(DiscountKind::Fixed, 300.0),
        promotion(DiscountKind::Percentage, 25.0), // 500 on a base of 2000
    ];

    assert_eq!(best_discount(&promotions, "court-1", Some("10:00:00"), 2000.0), 500.0);
    assert_eq!(
        apply_best_discount(&promotions, "court-1", Some("10:00:00"), 2000.0),
        1500.0
    );
}

#[test]
fn test_promotion_court_restriction() {
    let mut restricted = promotion(DiscountKind::Fixed, 400.0);
    restricted.court_ids = Some(vec!["court-2".to_string()]);
    let promotions = vec![restricted, promotion(DiscountKind::Fixed, 100.0)];

    assert_eq!(best_discount(&promotions, "court-2", None, 2000.0), 400.0);
    assert_eq!(best_discount(&promotions, "court-1", None, 2000.0), 100.0);
}

#[test]
fn test_promotion_time_window_restriction() {
    let mut night_promo = promotion(DiscountKind::Percentage, 50.0);
    night_promo.window_start = Some("22:00".to_string());
    night_promo.window_end = Some("6:00".to_string());
    let promotions = vec![night_promo];

    assert_eq!(best_discount(&promotions, "court-1", Some("23:00:00"), 2000.0), 1000.0);
    assert_eq!(best_discount(&promotions, "court-1", Some("10:00:00"), 2000.0), 0.0);
    assert_eq!(best_discount(&promotions, "court-1", None, 2000.0), 0.0);
}

#[test]
fn test_no_applicable_promotions_leaves_base_intact() {
    assert_eq!(apply_best_discount(&[], "court-1", Some("10:00:00"), 2000.0), 2000.0);

    let worthless = vec![promotion(DiscountKind::Other, 50.0)];
    assert_eq!(
        apply_best_discount(&worthless, "court-1", Some("10:00:00"), 2000.0),
        2000.0
    );
}
