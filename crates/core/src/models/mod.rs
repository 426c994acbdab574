/// Agenda grid types: slots, segments, columns
pub mod agenda;
/// Promotional discount records
pub mod promotion;
/// Reservation records as fetched from the backend
pub mod reservation;
/// Court tariff and pricing request records
pub mod tariff;
/// Wall-clock time values and the night window
pub mod time;
