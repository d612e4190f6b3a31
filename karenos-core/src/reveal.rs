//! Reveal-on-scroll — elements fade in once their top enters the viewport.
//!
//! Monotonic: a revealed element never hides again, whatever the scroll does.

use std::collections::{BTreeMap, HashMap};

/// Where elements currently sit, in the host's length unit (px, rows, ...).
pub trait ElementGeometry {
    /// Top edge relative to the viewport top, or `None` if not laid out.
    fn top(&self, id: &str) -> Option<f64>;
}

impl ElementGeometry for HashMap<String, f64> {
    fn top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl ElementGeometry for BTreeMap<String, f64> {
    fn top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

/// True when `top` is above `viewport_height - offset`.
pub fn in_view(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

#[derive(Debug, Clone)]
pub struct RevealObserver {
    offset: f64,
    targets: BTreeMap<String, bool>,
}

impl RevealObserver {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            targets: BTreeMap::new(),
        }
    }

    /// Track an element. `visible` marks elements that start revealed.
    pub fn register(&mut self, id: impl Into<String>, visible: bool) {
        self.targets.entry(id.into()).or_insert(visible);
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.targets.get(id).copied().unwrap_or(false)
    }

    /// Tracked and not yet revealed. Untracked elements are never hidden.
    pub fn is_hidden(&self, id: &str) -> bool {
        self.targets.get(id) == Some(&false)
    }

    /// Reveal every hidden element now in view. Returns the newly revealed ids.
    pub fn observe(&mut self, geometry: &dyn ElementGeometry, viewport_height: f64) -> Vec<String> {
        let mut revealed = Vec::new();
        for (id, visible) in self.targets.iter_mut() {
            if *visible {
                continue;
            }
            let Some(top) = geometry.top(id) else {
                continue;
            };
            if in_view(top, viewport_height, self.offset) {
                *visible = true;
                revealed.push(id.clone());
            }
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn reveals_within_threshold() {
        let mut obs = RevealObserver::new(80.0);
        obs.register("hero", false);
        obs.register("timeline", false);
        let g = geometry(&[("hero", 100.0), ("timeline", 700.0)]);
        let newly = obs.observe(&g, 800.0);
        assert_eq!(newly, vec!["hero".to_string()]);
        assert!(!obs.is_revealed("timeline"));
        // 719 < 800 - 80
        let g = geometry(&[("hero", -500.0), ("timeline", 719.0)]);
        assert_eq!(obs.observe(&g, 800.0), vec!["timeline".to_string()]);
        assert!(!obs.is_hidden("hero"));
        assert!(!obs.is_hidden("timeline"));
    }

    #[test]
    fn never_rehides() {
        let mut obs = RevealObserver::new(80.0);
        obs.register("card", false);
        obs.observe(&geometry(&[("card", 0.0)]), 800.0);
        let newly = obs.observe(&geometry(&[("card", 5000.0)]), 800.0);
        assert!(newly.is_empty());
        assert!(obs.is_revealed("card"));
    }

    #[test]
    fn initially_visible_and_unlaid_elements() {
        let mut obs = RevealObserver::new(80.0);
        obs.register("metric-card", true);
        obs.register("ghost", false);
        assert!(obs.is_revealed("metric-card"));
        assert!(obs.observe(&geometry(&[]), 800.0).is_empty());
        assert!(!obs.is_revealed("ghost"));
        assert!(!obs.is_revealed("unknown"));
        assert!(obs.is_hidden("ghost"));
        assert!(!obs.is_hidden("unknown"));
        assert!(!obs.is_hidden("metric-card"));
    }
}
