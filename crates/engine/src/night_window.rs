//! Night-window extraction from club records.
//!
//! Club records have accumulated several spellings of the night-window
//! configuration over the years: flat snake_case fields, flat camelCase
//! fields, and a nested `configuracion_nocturna` object that some producers
//! wrap in a single-element array. Rather than chained fallback expressions,
//! each side of the window has one ordered alias table so the priority order
//! stays auditable and testable on its own. Flat fields always win over the
//! nested configuration object, matching what the upstream producers wrote
//! first historically.

use courtside_core::models::time::{NightWindow, TimeOfDay};
use serde_json::Value;
use tracing::debug;

/// Alias paths for the window's start time, highest priority first.
const NIGHT_START_ALIASES: &[&[&str]] = &[
    &["hora_inicio_nocturna"],
    &["hora_inicio_nocturno"],
    &["horaInicioNocturna"],
    &["inicio_nocturno"],
    &["configuracion_nocturna", "hora_inicio"],
    &["configuracion_nocturna", "inicio"],
    &["configuracion_nocturna", "desde"],
];

/// Alias paths for the window's end time, highest priority first.
const NIGHT_END_ALIASES: &[&[&str]] = &[
    &["hora_fin_nocturna"],
    &["hora_fin_nocturno"],
    &["horaFinNocturna"],
    &["fin_nocturno"],
    &["configuracion_nocturna", "hora_fin"],
    &["configuracion_nocturna", "fin"],
    &["configuracion_nocturna", "hasta"],
];

/// Follows one alias path into the club record, unwrapping single-element
/// arrays along the way. Yields only non-empty string values.
fn lookup_alias<'a>(club: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = club;
    for key in path {
        if let Some(items) = current.as_array() {
            current = items.first()?;
        }
        current = current.get(*key)?;
    }
    current.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// First alias on the table whose value is a non-empty string.
fn first_alias<'a>(club: &'a Value, aliases: &[&[&str]]) -> Option<&'a str> {
    aliases.iter().find_map(|path| lookup_alias(club, path))
}

/// Resolves a club record's configured night window, if it has one.
///
/// Each side takes the first alias carrying a non-empty string; the window
/// exists only if both sides then normalize to valid times. A club without a
/// resolvable window has every time classified as day.
pub fn extract_night_window(club: &Value) -> Option<NightWindow> {
    let start_raw = first_alias(club, NIGHT_START_ALIASES)?;
    let end_raw = first_alias(club, NIGHT_END_ALIASES)?;

    let start = TimeOfDay::parse(start_raw)?;
    let end = TimeOfDay::parse(end_raw)?;

    debug!(%start, %end, "resolved club night window");
    Some(NightWindow { start, end })
}
