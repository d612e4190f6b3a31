//! Exclusive expansion — accordion groups where at most one panel is open.
//!
//! One `ExclusiveGroup` per group (timeline, skills, modules). Activating a
//! panel collapses every expanded sibling, then toggles the panel itself. The
//! transition is computed and applied in one call, so no caller can observe
//! two expanded panels in the same group.

use serde::{Deserialize, Serialize};

use crate::engines::ModuleId;

/// The three independent exclusivity groups on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Timeline,
    Skills,
    Modules,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [GroupKind::Timeline, GroupKind::Skills, GroupKind::Modules];

    pub fn label(self) -> &'static str {
        match self {
            GroupKind::Timeline => "Timeline",
            GroupKind::Skills => "Skills",
            GroupKind::Modules => "Modules",
        }
    }
}

/// Collapsed or expanded view of a panel, as the host should render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    /// Header reports expanded (`aria-expanded`).
    pub header_expanded: bool,
    pub body_hidden: bool,
    /// Skill cards swap a short preview for the detail body.
    pub preview_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub id: String,
    pub expanded: bool,
    /// Simulator to recompute when this panel opens.
    pub hook: Option<ModuleId>,
}

impl PanelState {
    pub fn view(&self) -> PanelView {
        PanelView {
            header_expanded: self.expanded,
            body_hidden: !self.expanded,
            preview_hidden: self.expanded,
        }
    }
}

/// What one activation changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Panels that went from expanded to collapsed (siblings and/or the target).
    pub collapsed: Vec<String>,
    pub expanded: Option<String>,
    /// Hook to run exactly once, present only when a panel opened.
    pub hook: Option<ModuleId>,
}

#[derive(Debug, Clone)]
pub struct ExclusiveGroup {
    kind: GroupKind,
    panels: Vec<PanelState>,
}

impl ExclusiveGroup {
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            panels: Vec::new(),
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Register a collapsed panel. Duplicate ids are ignored.
    pub fn add_panel(&mut self, id: impl Into<String>, hook: Option<ModuleId>) {
        let id = id.into();
        if self.panels.iter().any(|p| p.id == id) {
            tracing::debug!(group = ?self.kind, %id, "duplicate panel id ignored");
            return;
        }
        self.panels.push(PanelState {
            id,
            expanded: false,
            hook,
        });
    }

    /// Activate a panel. Unknown ids are a no-op and return `None`.
    pub fn activate(&mut self, id: &str) -> Option<Transition> {
        let target = self.panels.iter().position(|p| p.id == id)?;
        let was_expanded = self.panels[target].expanded;
        let mut transition = Transition::default();

        for (i, panel) in self.panels.iter_mut().enumerate() {
            if i != target && panel.expanded {
                panel.expanded = false;
                transition.collapsed.push(panel.id.clone());
            }
        }

        let panel = &mut self.panels[target];
        if was_expanded {
            panel.expanded = false;
            transition.collapsed.push(panel.id.clone());
        } else {
            panel.expanded = true;
            transition.expanded = Some(panel.id.clone());
            transition.hook = panel.hook;
        }

        tracing::trace!(group = ?self.kind, ?transition, "panel activated");
        Some(transition)
    }

    pub fn expanded(&self) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.expanded)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.panel(id).map(|p| p.expanded).unwrap_or(false)
    }

    pub fn panel(&self, id: &str) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn panels(&self) -> &[PanelState] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Group invariant: at most one expanded panel.
    pub fn expanded_count(&self) -> usize {
        self.panels.iter().filter(|p| p.expanded).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> ExclusiveGroup {
        let mut g = ExclusiveGroup::new(GroupKind::Timeline);
        g.add_panel("a", None);
        g.add_panel("b", None);
        g.add_panel("c", None);
        g
    }

    #[test]
    fn activating_b_collapses_a() {
        let mut g = group();
        g.activate("a");
        let t = g.activate("b").unwrap();
        assert_eq!(t.collapsed, vec!["a".to_string()]);
        assert_eq!(t.expanded.as_deref(), Some("b"));
        assert!(!g.is_expanded("a"));
        assert!(g.is_expanded("b"));
        assert_eq!(g.expanded_count(), 1);
    }

    #[test]
    fn reactivating_collapses_group() {
        let mut g = group();
        g.activate("b");
        let t = g.activate("b").unwrap();
        assert_eq!(t.collapsed, vec!["b".to_string()]);
        assert!(t.expanded.is_none());
        assert_eq!(g.expanded_count(), 0);
        assert!(g.expanded().is_none());
    }

    #[test]
    fn unknown_panel_is_noop() {
        let mut g = group();
        g.activate("a");
        assert!(g.activate("zzz").is_none());
        assert!(g.is_expanded("a"));
    }

    #[test]
    fn hook_fires_only_on_expand() {
        let mut g = ExclusiveGroup::new(GroupKind::Modules);
        g.add_panel("revenue", Some(ModuleId::Revenue));
        g.add_panel("risk", Some(ModuleId::Risk));
        assert_eq!(g.activate("revenue").unwrap().hook, Some(ModuleId::Revenue));
        assert_eq!(g.activate("revenue").unwrap().hook, None);
        let t = g.activate("risk").unwrap();
        assert_eq!(t.hook, Some(ModuleId::Risk));
        assert!(t.collapsed.is_empty());
    }

    #[test]
    fn view_reflects_state() {
        let mut g = group();
        g.activate("c");
        let open = g.panel("c").unwrap().view();
        assert!(open.header_expanded && !open.body_hidden && open.preview_hidden);
        let closed = g.panel("a").unwrap().view();
        assert!(!closed.header_expanded && closed.body_hidden && !closed.preview_hidden);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut g = group();
        g.add_panel("a", Some(ModuleId::Risk));
        assert_eq!(g.len(), 3);
        assert_eq!(g.panel("a").unwrap().hook, None);
    }
}
