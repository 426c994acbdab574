//! Types describing the day-agenda grid.
//!
//! The grid is a shared vertical axis of [`TimeSlot`]s plus one
//! [`CourtColumn`] per court. Each column holds exactly one [`GridSegment`]
//! per slot, so columns from the same agenda always align row for row.

use serde::{Deserialize, Serialize};

use super::reservation::Reservation;

/// Minutes in a full day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// One discretized row of the agenda: `[start_minute, end_minute)` with a
/// preformatted `HH:MM` label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_minute: u32,
    pub end_minute: u32,
    pub label: String,
}

/// One cell of a court's column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridSegment {
    /// No reservation touches this slot.
    Empty,
    /// Continuation of a reservation that started in an earlier row; renders
    /// as zero height since the originating segment's span covers it.
    Spacer,
    /// Start of a reservation occupying `span` consecutive slots.
    Reservation { reservation: Reservation, span: u32 },
}

impl GridSegment {
    pub fn is_spacer(&self) -> bool {
        matches!(self, GridSegment::Spacer)
    }

    /// Consecutive slots this cell occupies (zero for spacers).
    pub fn span(&self) -> u32 {
        match self {
            GridSegment::Empty => 1,
            GridSegment::Spacer => 0,
            GridSegment::Reservation { span, .. } => *span,
        }
    }
}

/// One court's ordered cells, aligned to the shared slot axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtColumn {
    pub court_id: String,
    pub segments: Vec<GridSegment>,
}

/// The complete renderable agenda for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAgenda {
    pub slots: Vec<TimeSlot>,
    pub columns: Vec<CourtColumn>,
}

/// Tunables for agenda construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaOptions {
    /// Size of one grid row in minutes.
    pub slot_minutes: u32,

    /// Earliest minute the grid shows even when no reservation needs it.
    pub day_start_minute: u32,

    /// Latest minute the grid shows even when no reservation needs it.
    pub day_end_minute: u32,
}

impl Default for AgendaOptions {
    fn default() -> Self {
        Self {
            slot_minutes: 60,
            day_start_minute: 8 * 60, // 08:00
            day_end_minute: 23 * 60,  // 23:00
        }
    }
}
