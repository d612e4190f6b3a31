//! Display slots — the named output targets simulators write into.
//!
//! The board is built once from the set of slots the host actually renders.
//! Writes to a slot that was never registered are dropped: a missing target
//! short-circuits that single update and nothing else.

use std::collections::BTreeMap;

use serde::Serialize;

/// Rendered state of one slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotState {
    pub text: String,
    /// Visual category (`decision-badge go`, `risk-alert active`, `accent`).
    pub class: Option<String>,
    /// Proportional fill width in percent.
    pub fill_pct: Option<f64>,
    /// Gradient band stops in percent (start, end).
    pub band: Option<(f64, f64)>,
}

/// Registry of display slots keyed by logical name.
#[derive(Debug, Clone, Default)]
pub struct DisplayBoard {
    slots: BTreeMap<String, SlotState>,
}

impl DisplayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with every named slot registered and blank.
    pub fn with_slots<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = names
            .into_iter()
            .map(|n| (n.into(), SlotState::default()))
            .collect();
        Self { slots }
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.slots.entry(name.into()).or_default();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SlotState> {
        self.slots.get(name)
    }

    /// Slot text, empty when the slot is missing or never written.
    pub fn text(&self, name: &str) -> &str {
        self.slots.get(name).map(|s| s.text.as_str()).unwrap_or("")
    }

    /// Returns false when the slot is not registered.
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> bool {
        self.with_slot(name, |slot| slot.text = text.into())
    }

    pub fn set_class(&mut self, name: &str, class: impl Into<String>) -> bool {
        self.with_slot(name, |slot| slot.class = Some(class.into()))
    }

    pub fn clear_class(&mut self, name: &str) -> bool {
        self.with_slot(name, |slot| slot.class = None)
    }

    pub fn set_fill(&mut self, name: &str, pct: f64) -> bool {
        self.with_slot(name, |slot| slot.fill_pct = Some(pct))
    }

    pub fn set_band(&mut self, name: &str, start: f64, end: f64) -> bool {
        self.with_slot(name, |slot| slot.band = Some((start, end)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotState)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn with_slot(&mut self, name: &str, f: impl FnOnce(&mut SlotState)) -> bool {
        match self.slots.get_mut(name) {
            Some(slot) => {
                f(slot);
                true
            }
            None => {
                tracing::trace!(slot = name, "display slot not registered, skipping write");
                false
            }
        }
    }
}
