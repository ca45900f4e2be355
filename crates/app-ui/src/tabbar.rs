//! Route↔tab mapping and the custom tab bar model
//!
//! The tab bar renderer is a pure function of (items, active tab, press
//! handler); everything it needs lives in [`TabBarModel`]. The
//! translation between the navigator's focused route and the bar's
//! active tab goes through [`TabMapping`], an explicitly constructed
//! bijection built per role at composition time, so route-name churn
//! never leaks into presentation code and role-specific tab sets need no
//! shared global table.

use app_state::Role;
use serde::{Deserialize, Serialize};

use crate::navigation::{NavError, NavigationTarget, Result, Route, Scope};

/// Semantic tab identity, independent of route names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    /// Dashboard
    Home,
    /// Patient roster (caregiver)
    Patients,
    /// Alerts inbox (caregiver)
    Alerts,
    /// Medication reminders (patient)
    Reminders,
    /// Settings
    Settings,
}

impl TabId {
    /// Icon name the renderer resolves to an asset
    pub fn icon(&self) -> &'static str {
        match self {
            TabId::Home => "home",
            TabId::Patients => "users",
            TabId::Alerts => "bell",
            TabId::Reminders => "clock",
            TabId::Settings => "gear",
        }
    }

    /// Label under the icon
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Home => "Home",
            TabId::Patients => "Patients",
            TabId::Alerts => "Alerts",
            TabId::Reminders => "Reminders",
            TabId::Settings => "Settings",
        }
    }
}

/// Bijection between tab-bearing routes and tab identifiers
///
/// Validated at construction and never mutated: every tab binds exactly
/// one route and every bound route belongs to exactly one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabMapping {
    entries: Vec<(TabId, Route)>,
}

impl TabMapping {
    /// Build a mapping, verifying the bijection invariant
    ///
    /// Fails with [`NavError::TabMapping`] when a tab or a route appears
    /// twice, or when a route is not tab-bearing.
    pub fn new(entries: Vec<(TabId, Route)>) -> Result<Self> {
        for (index, (tab, route)) in entries.iter().enumerate() {
            if route.scope() != Scope::Tabs {
                return Err(NavError::TabMapping { tab: *tab });
            }
            let duplicate = entries[..index]
                .iter()
                .any(|(t, r)| t == tab || r.name() == route.name());
            if duplicate {
                return Err(NavError::TabMapping { tab: *tab });
            }
        }
        Ok(Self { entries })
    }

    /// The mapping for a role's tab set
    pub fn for_role(role: Role) -> Self {
        let entries = match role {
            Role::Patient => vec![
                (TabId::Home, Route::Home),
                (TabId::Reminders, Route::Reminders),
                (TabId::Settings, Route::Settings),
            ],
            Role::Caregiver => vec![
                (TabId::Home, Route::Home),
                (TabId::Patients, Route::Patients),
                (TabId::Alerts, Route::Alerts),
                (TabId::Settings, Route::Settings),
            ],
        };
        Self::new(entries).expect("role tab sets are bijective")
    }

    /// Tabs in display order
    pub fn tabs(&self) -> Vec<TabId> {
        self.entries.iter().map(|(tab, _)| *tab).collect()
    }

    /// The tab shown when the focused route has no entry
    ///
    /// First tab in display order; with the shipped role sets this is
    /// always [`TabId::Home`].
    pub fn default_tab(&self) -> TabId {
        self.entries
            .first()
            .map(|(tab, _)| *tab)
            .expect("a mapping is never empty")
    }

    /// Exact lookup of the tab bound to a route, if any
    pub fn tab_of(&self, route: &Route) -> Option<TabId> {
        self.entries
            .iter()
            .find(|(_, r)| r.name() == route.name())
            .map(|(tab, _)| *tab)
    }

    /// Active tab for the focused route
    ///
    /// Total by design: a focused route without an entry (which the
    /// bijection invariant rules out in a correctly composed shell)
    /// falls back to [`TabMapping::default_tab`] so the bar always
    /// renders.
    pub fn active_tab(&self, focused: &Route) -> TabId {
        self.tab_of(focused).unwrap_or_else(|| self.default_tab())
    }

    /// The unique route bound to a tab
    ///
    /// An unbound tab means the mapping was built inconsistently; that
    /// is a construction bug surfaced as [`NavError::TabMapping`].
    pub fn route_for(&self, tab: TabId) -> Result<Route> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tab)
            .map(|(_, route)| route.clone())
            .ok_or(NavError::TabMapping { tab })
    }

    /// Translate a tab press into a navigation target (no parameters)
    pub fn press(&self, tab: TabId) -> Result<NavigationTarget> {
        Ok(NavigationTarget::to(self.route_for(tab)?))
    }
}

/// One renderable tab-bar item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    /// Which tab this item selects
    pub tab: TabId,
    /// Icon asset name
    pub icon: String,
    /// Label under the icon
    pub label: String,
    /// Whether this item is highlighted as active
    pub active: bool,
}

/// Pure render model for the custom tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarModel {
    /// Items in display order
    pub items: Vec<TabItem>,
    /// The currently active tab
    pub active: TabId,
}

impl TabBarModel {
    /// Snapshot the bar for the current focused route
    pub fn new(mapping: &TabMapping, focused: &Route) -> Self {
        let active = mapping.active_tab(focused);
        Self {
            items: mapping
                .tabs()
                .into_iter()
                .map(|tab| TabItem {
                    tab,
                    icon: tab.icon().to_string(),
                    label: tab.label().to_string(),
                    active: tab == active,
                })
                .collect(),
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_is_left_inverse_of_the_binding() {
        for role in [Role::Patient, Role::Caregiver] {
            let mapping = TabMapping::for_role(role);
            for tab in mapping.tabs() {
                let route = mapping.route_for(tab).unwrap();
                assert_eq!(mapping.active_tab(&route), tab);
                assert_eq!(mapping.press(tab).unwrap().route, route);
            }
        }
    }

    #[test]
    fn per_role_tab_sets() {
        let patient = TabMapping::for_role(Role::Patient);
        assert_eq!(
            patient.tabs(),
            vec![TabId::Home, TabId::Reminders, TabId::Settings]
        );

        let caregiver = TabMapping::for_role(Role::Caregiver);
        assert_eq!(
            caregiver.tabs(),
            vec![TabId::Home, TabId::Patients, TabId::Alerts, TabId::Settings]
        );
    }

    #[test]
    fn unmapped_focused_route_falls_back_to_default() {
        let mapping = TabMapping::for_role(Role::Patient);
        assert_eq!(mapping.active_tab(&Route::SignIn), TabId::Home);
        assert_eq!(mapping.default_tab(), TabId::Home);
    }

    #[test]
    fn unbound_tab_is_a_mapping_error() {
        let mapping = TabMapping::for_role(Role::Patient);
        let err = mapping.route_for(TabId::Alerts).unwrap_err();
        assert_eq!(err, NavError::TabMapping { tab: TabId::Alerts });
    }

    #[test]
    fn construction_rejects_duplicate_tab() {
        let err = TabMapping::new(vec![
            (TabId::Home, Route::Home),
            (TabId::Home, Route::Settings),
        ])
        .unwrap_err();
        assert_eq!(err, NavError::TabMapping { tab: TabId::Home });
    }

    #[test]
    fn construction_rejects_duplicate_route() {
        let err = TabMapping::new(vec![
            (TabId::Home, Route::Home),
            (TabId::Settings, Route::Home),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            NavError::TabMapping {
                tab: TabId::Settings
            }
        );
    }

    #[test]
    fn construction_rejects_non_tab_route() {
        let err = TabMapping::new(vec![(TabId::Home, Route::SignIn)]).unwrap_err();
        assert_eq!(err, NavError::TabMapping { tab: TabId::Home });
    }

    #[test]
    fn tab_bar_model_marks_exactly_one_active() {
        let mapping = TabMapping::for_role(Role::Caregiver);
        let model = TabBarModel::new(&mapping, &Route::Alerts);
        assert_eq!(model.active, TabId::Alerts);
        assert_eq!(model.items.iter().filter(|i| i.active).count(), 1);
        assert_eq!(model.items.len(), 4);
        assert_eq!(model.items[2].icon, "bell");
    }

    #[test]
    fn tab_bar_model_serializes() {
        let mapping = TabMapping::for_role(Role::Patient);
        let model = TabBarModel::new(&mapping, &Route::Home);
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"active\":\"home\""));
        assert!(json.contains("\"label\":\"Reminders\""));
    }
}
