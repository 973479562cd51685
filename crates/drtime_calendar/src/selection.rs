// --- File: crates/drtime_calendar/src/selection.rs ---
//! Date and slot selection.

use crate::availability::{list_slots_for, AvailabilitySet};
use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::grid::{classify, CellClass};
use serde::Serialize;
use tracing::{debug, warn};

pub const NO_DATE_SELECTED_MESSAGE: &str = "Please select a date first";
pub const NO_SLOTS_MESSAGE: &str = "No available times for this date";

/// The user's current pick. A slot only ever refers to the selected date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected_date: Option<CalendarDate>,
    selected_slot: Option<String>,
}

impl SelectionState {
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected_date
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    /// Selects `date` if its cell in the displayed month is available.
    ///
    /// Replaces any earlier date and always clears the slot.
    pub fn select_date(
        &mut self,
        date: CalendarDate,
        view_month: &CalendarDate,
        availability: &AvailabilitySet,
        today: &CalendarDate,
    ) -> Result<SelectionState, CalendarError> {
        if classify(&date, view_month, availability, today) != CellClass::Available {
            warn!("Rejected selection of non-available date {}", date);
            return Err(CalendarError::DateNotSelectable(date));
        }
        if let Some(previous) = self.selected_date.replace(date) {
            debug!("Selection moved from {} to {}", previous, date);
        }
        self.selected_slot = None;
        Ok(self.clone())
    }

    /// Selects `label` among the slots of the selected date.
    pub fn select_slot(
        &mut self,
        label: &str,
        availability: &AvailabilitySet,
    ) -> Result<SelectionState, CalendarError> {
        let date = self
            .selected_date
            .ok_or(CalendarError::InvalidSelectionState)?;
        if !availability.offers_slot(&date, label) {
            warn!("Rejected slot {:?} not offered on {}", label, date);
            return Err(CalendarError::SlotNotAvailable(label.to_string()));
        }
        self.selected_slot = Some(label.to_string());
        debug!("Selected slot {} on {}", label, date);
        Ok(self.clone())
    }

    pub fn clear(&mut self) {
        self.selected_date = None;
        self.selected_slot = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotButton {
    pub label: String,
    pub selected: bool,
}

/// What the slot panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotListView {
    NoDateSelected { message: String },
    NoSlots { message: String },
    Slots { slots: Vec<SlotButton> },
}

pub fn slot_list_view(selection: &SelectionState, availability: &AvailabilitySet) -> SlotListView {
    let Some(date) = selection.selected_date() else {
        return SlotListView::NoDateSelected {
            message: NO_DATE_SELECTED_MESSAGE.to_string(),
        };
    };
    let slots = list_slots_for(&date, availability);
    if slots.is_empty() {
        return SlotListView::NoSlots {
            message: NO_SLOTS_MESSAGE.to_string(),
        };
    }
    SlotListView::Slots {
        slots: slots
            .into_iter()
            .map(|label| SlotButton {
                selected: selection.selected_slot() == Some(label.as_str()),
                label,
            })
            .collect(),
    }
}
