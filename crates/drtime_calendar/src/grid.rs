// --- File: crates/drtime_calendar/src/grid.rs ---
//! Month grid computation.

use crate::availability::AvailabilitySet;
use crate::date::CalendarDate;
use serde::Serialize;

/// Six rows of seven days.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellClass {
    /// Belongs to the previous or next month.
    OtherMonth,
    /// In the displayed month but in the past or without slots.
    Unavailable,
    /// In the displayed month, not in the past, with at least one slot.
    Available,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellDescriptor {
    pub date: CalendarDate,
    /// Day-of-month text shown in the cell.
    pub day_label: String,
    pub classification: CellClass,
    /// Only available cells react to clicks.
    pub interactive: bool,
    /// Marks the currently selected date.
    pub selected: bool,
}

/// Everything the page needs to draw one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub label: String,
    pub cells: Vec<CellDescriptor>,
}

/// Classifies one day relative to the displayed month.
///
/// The month check comes first: a past day of an adjacent month is
/// `OtherMonth`, never `Unavailable`.
pub fn classify(
    date: &CalendarDate,
    view_month: &CalendarDate,
    availability: &AvailabilitySet,
    today: &CalendarDate,
) -> CellClass {
    if !date.same_month(view_month) {
        CellClass::OtherMonth
    } else if date < today {
        CellClass::Unavailable
    } else if availability.is_available(date) {
        CellClass::Available
    } else {
        CellClass::Unavailable
    }
}

/// Sunday on or before the 1st of the month of `view_month`.
pub fn grid_start(view_month: &CalendarDate) -> CalendarDate {
    let first = view_month.first_of_month();
    let back = first.weekday().num_days_from_sunday();
    first.add_days(-i64::from(back))
}

/// The 42 cells shown for the month of `view_month` (its day is ignored).
pub fn compute_month_grid(
    view_month: &CalendarDate,
    availability: &AvailabilitySet,
    today: &CalendarDate,
) -> Vec<CellDescriptor> {
    let start = grid_start(view_month);
    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start.add_days(offset);
            let classification = classify(&date, view_month, availability, today);
            CellDescriptor {
                date,
                day_label: date.day().to_string(),
                classification,
                interactive: classification == CellClass::Available,
                selected: false,
            }
        })
        .collect()
}
