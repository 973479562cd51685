// --- File: crates/drtime_calendar/src/availability.rs ---
//! Sample availability: which slots are bookable on which day.

use crate::date::CalendarDate;
use crate::error::CalendarError;
use drtime_config::CalendarConfig;
use ring::rand::{SecureRandom, SystemRandom};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Uniform random numbers for slot sampling.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> Result<f64, CalendarError>;
}

/// Non-deterministic source backed by the operating system generator.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn next_unit(&mut self) -> Result<f64, CalendarError> {
        let mut bytes = [0u8; 8];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| CalendarError::RandomSource("system generator unavailable".to_string()))?;
        Ok(unit_from_bits(u64::from_le_bytes(bytes)))
    }
}

/// Deterministic SplitMix64 stream; equal seeds give equal availability.
#[derive(Debug, Clone)]
pub struct SeededRandomSource {
    state: u64,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SeededRandomSource {
    fn next_unit(&mut self) -> Result<f64, CalendarError> {
        Ok(unit_from_bits(self.next_u64()))
    }
}

// top 53 bits fill an f64 mantissa exactly
fn unit_from_bits(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

/// Bookable slot labels per day.
///
/// A day mapped to an empty list is treated exactly like a day that is not
/// in the map at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AvailabilitySet {
    days: BTreeMap<CalendarDate, Vec<String>>,
}

impl AvailabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the slots of one day, replacing any earlier entry.
    pub fn insert(&mut self, date: CalendarDate, slots: Vec<String>) {
        self.days.insert(date, slots);
    }

    /// Slots for `date` in catalog order; empty when the day has none.
    pub fn slots_for(&self, date: &CalendarDate) -> &[String] {
        self.days.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when `date` has at least one slot.
    pub fn is_available(&self, date: &CalendarDate) -> bool {
        !self.slots_for(date).is_empty()
    }

    pub fn offers_slot(&self, date: &CalendarDate, label: &str) -> bool {
        self.slots_for(date).iter().any(|slot| slot == label)
    }

    /// Days that were considered, including those left without slots.
    pub fn dates(&self) -> impl Iterator<Item = &CalendarDate> {
        self.days.keys()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(CalendarDate, Vec<String>)> for AvailabilitySet {
    fn from_iter<I: IntoIterator<Item = (CalendarDate, Vec<String>)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// Keeps each catalog label independently with `keep_probability`,
/// preserving catalog order.
pub fn generate_slots_for_day(
    catalog: &[String],
    keep_probability: f64,
    rng: &mut dyn RandomSource,
) -> Result<Vec<String>, CalendarError> {
    let mut slots = Vec::with_capacity(catalog.len());
    for label in catalog {
        if rng.next_unit()? < keep_probability {
            slots.push(label.clone());
        }
    }
    Ok(slots)
}

/// Builds availability for the `window_days` days after `today`.
///
/// Today itself is excluded, as are Saturdays and Sundays.
pub fn generate_availability(
    window_days: u32,
    today: CalendarDate,
    catalog: &[String],
    keep_probability: f64,
    rng: &mut dyn RandomSource,
) -> Result<AvailabilitySet, CalendarError> {
    let mut availability = AvailabilitySet::new();
    for offset in 1..=i64::from(window_days) {
        let date = today.add_days(offset);
        if date.is_weekend() {
            continue;
        }
        let slots = generate_slots_for_day(catalog, keep_probability, rng)?;
        debug!("Availability for {}: {:?}", date, slots);
        availability.insert(date, slots);
    }
    debug!(
        "Generated availability for {} days after {} ({} weekdays)",
        window_days,
        today,
        availability.len()
    );
    Ok(availability)
}

/// [`generate_availability`] driven by the `[calendar]` config section.
pub fn generate_from_config(
    config: &CalendarConfig,
    today: CalendarDate,
    rng: &mut dyn RandomSource,
) -> Result<AvailabilitySet, CalendarError> {
    generate_availability(
        config.availability_window_days,
        today,
        &config.slot_catalog,
        config.slot_keep_probability,
        rng,
    )
}

/// Catalog-ordered slots for `date`, empty when the day has none.
pub fn list_slots_for(date: &CalendarDate, availability: &AvailabilitySet) -> Vec<String> {
    availability.slots_for(date).to_vec()
}
