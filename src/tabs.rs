use std::rc::Rc;

use yew::Reducible;

/// Panel id for a tab: `chart` shows `#chart-tab`.
pub fn panel_id(tab_id: &str) -> String {
    format!("{}-tab", tab_id)
}

/// Tabs and panels of one highlight visual. Activation never reaches outside the group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabGroup {
    tabs: Vec<String>,
    panels: Vec<String>,
    active_tab: Option<String>,
    active_panel: Option<String>,
}

impl TabGroup {
    pub fn new<T, P>(tabs: T, panels: P) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            panels: panels.into_iter().map(Into::into).collect(),
            active_tab: None,
            active_panel: None,
        }
    }

    /// Starts the group on `tab_id`, as the page markup does.
    pub fn with_active(mut self, tab_id: &str) -> Self {
        self.activate(tab_id);
        self
    }

    pub fn is_tab_active(&self, tab_id: &str) -> bool {
        self.active_tab.as_deref() == Some(tab_id)
    }

    pub fn is_panel_active(&self, panel_id: &str) -> bool {
        self.active_panel.as_deref() == Some(panel_id)
    }

    pub fn activate(&mut self, tab_id: &str) {
        if !self.tabs.iter().any(|t| t == tab_id) {
            return;
        }

        self.active_tab = Some(tab_id.to_string());
        let target = panel_id(tab_id);
        self.active_panel = self.panels.iter().find(|p| **p == target).cloned();
    }
}

impl Reducible for TabGroup {
    type Action = String;

    fn reduce(self: Rc<Self>, tab_id: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.activate(&tab_id);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_and_table() -> TabGroup {
        TabGroup::new(["chart", "table"], ["chart-tab", "table-tab"]).with_active("table")
    }

    #[test]
    fn activating_chart_leaves_only_chart_active() {
        let group = Rc::new(chart_and_table()).reduce("chart".to_string());

        assert!(group.is_tab_active("chart"));
        assert!(group.is_panel_active("chart-tab"));
        assert!(!group.is_tab_active("table"));
        assert!(!group.is_panel_active("table-tab"));
    }

    #[test]
    fn missing_panel_still_moves_tab() {
        let mut group = TabGroup::new(["chart", "table"], ["chart-tab"]).with_active("chart");
        group.activate("table");

        assert!(group.is_tab_active("table"));
        assert!(!group.is_panel_active("chart-tab"));
        assert!(!group.is_panel_active("table-tab"));
    }

    #[test]
    fn unknown_tab_is_ignored() {
        let group = Rc::new(chart_and_table());
        let same = group.clone().reduce("pie".to_string());
        assert!(Rc::ptr_eq(&group, &same));
        assert!(same.is_tab_active("table"));
    }

    #[test]
    fn groups_are_independent() {
        let mut first = chart_and_table();
        let second = TabGroup::new(["income", "expenses"], ["income-tab", "expenses-tab"]).with_active("income");
        first.activate("chart");
        assert!(second.is_tab_active("income"));
        assert!(second.is_panel_active("income-tab"));
    }

    #[test]
    fn panel_id_convention() {
        assert_eq!(panel_id("chart"), "chart-tab");
    }
}
