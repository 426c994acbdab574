use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One booked reservation as fetched from the backend.
///
/// The engine only interprets the court id and the start/end times; the
/// times are kept as raw strings because upstream data can be malformed and
/// a reservation with unparseable times must simply be invisible to the
/// agenda grid rather than reject the whole payload. Everything else
/// (contact name, status, any extra fields) is opaque display data passed
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub court_id: String,

    #[serde(default)]
    pub start_time: Option<String>,

    #[serde(default)]
    pub end_time: Option<String>,

    #[serde(default)]
    pub contact_name: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reservation {
    /// Convenience constructor for the fields the engine reads.
    pub fn new(court_id: impl Into<String>, start_time: &str, end_time: &str) -> Self {
        Self {
            court_id: court_id.into(),
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
            contact_name: None,
            status: None,
            extra: Map::new(),
        }
    }
}
