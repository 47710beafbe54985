use crate::errors::{AppError, AppResult};
use crate::model::Event;
use std::collections::BTreeSet;

/// One sub-column of a day, measured in sub-column units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSlot {
    pub label: String,
    pub x_units: u32,
    pub width_units: u32,
    pub overflow: bool,
}

/// Column layout of a single day: real columns in label order, then the
/// overflow slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    slots: Vec<ColumnSlot>,
}

impl ColumnAssignment {
    fn from_widths(widths: Vec<(String, u32, bool)>) -> Self {
        let mut x = 0;
        let slots = widths
            .into_iter()
            .map(|(label, width_units, overflow)| {
                let slot = ColumnSlot {
                    label,
                    x_units: x,
                    width_units,
                    overflow,
                };
                x += width_units;
                slot
            })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[ColumnSlot] {
        &self.slots
    }

    pub fn width_of(&self, label: &str) -> Option<u32> {
        self.slots
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.width_units)
    }

    pub fn overflow(&self) -> Option<&ColumnSlot> {
        self.slots.iter().find(|s| s.overflow)
    }

    pub fn real_slots(&self) -> impl Iterator<Item = &ColumnSlot> {
        self.slots.iter().filter(|s| !s.overflow)
    }

    pub fn total_units(&self) -> u32 {
        self.slots.iter().map(|s| s.width_units).sum()
    }
}

/// Decides which column labels get a slot on a day and how wide each is.
#[derive(Debug, Clone)]
pub struct ColumnAllocator {
    budget: u32,
    overflow_label: String,
}

impl ColumnAllocator {
    pub fn new(budget: u32, overflow_label: impl Into<String>) -> Self {
        Self {
            budget,
            overflow_label: overflow_label.into(),
        }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Distinct labels of all events shown on a day, sorted, with the
    /// overflow label (if present) moved to the end.
    pub fn columns_for_day<'a>(&self, events: impl IntoIterator<Item = &'a Event>) -> Vec<String> {
        let set: BTreeSet<&str> = events
            .into_iter()
            .flat_map(|e| e.columns.iter().map(String::as_str))
            .collect();

        let has_overflow = set.contains(self.overflow_label.as_str());
        let mut cols: Vec<String> = set
            .into_iter()
            .filter(|c| *c != self.overflow_label)
            .map(str::to_string)
            .collect();
        if has_overflow {
            cols.push(self.overflow_label.clone());
        }
        cols
    }

    /// Assign widths in sub-column units.
    ///
    /// One unit is reserved for the overflow slot; the rest is split evenly
    /// over the real labels in sorted order. The first `available % n`
    /// labels receive `a + (available % n) / n` units, which equals `a`.
    /// Without real labels the overflow slot takes the whole budget.
    pub fn assign(&self, labels: &[String]) -> AppResult<ColumnAssignment> {
        let mut real: Vec<&String> = labels
            .iter()
            .filter(|l| **l != self.overflow_label)
            .collect();
        real.sort();
        real.dedup();

        if real.is_empty() {
            return Ok(ColumnAssignment::from_widths(vec![(
                self.overflow_label.clone(),
                self.budget,
                true,
            )]));
        }

        let available = self.budget.saturating_sub(1);
        let n = real.len() as u32;
        if n > available {
            return Err(AppError::Configuration(format!(
                "too many columns: {n} ({}) but only {available} fit next to '{}'",
                real.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", "),
                self.overflow_label
            )));
        }

        let (a, b) = (available / n, available % n);
        let mut widths: Vec<(String, u32, bool)> = real
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let w = if (i as u32) < b { a + b / n } else { a };
                (label.clone(), w, false)
            })
            .collect();
        widths.push((self.overflow_label.clone(), 1, true));

        Ok(ColumnAssignment::from_widths(widths))
    }
}
