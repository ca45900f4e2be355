//! Navigation core for CareCompass
//!
//! Typed routes, the per-role route table with runtime parameter-shape
//! checking at the host boundary, and the stack navigator whose nested
//! tab scope keeps its own selection state.

use app_state::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::tabbar::{TabId, TabMapping};

// =============================================================================
// Routes
// =============================================================================

/// All navigable screens in the shell
///
/// Parameters live inside the variant, so a typed target always carries
/// a well-shaped bundle; malformed targets are unrepresentable on this
/// path. The string-keyed [`RouteTable`] covers the dynamic boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params", rename_all = "kebab-case")]
pub enum Route {
    /// Sign-in screen; the fixed initial route of the root stack
    SignIn,
    /// Consent gate shown once after sign-in
    Consent {
        /// Role of the freshly signed-in user
        role: Role,
    },
    /// The nested tab navigator; one stack entry regardless of tab churn
    Main {
        /// Role deciding which tab set is composed
        role: Role,
    },

    // Tab roots
    /// Dashboard tab (both roles)
    Home,
    /// Patient roster tab (caregiver)
    Patients,
    /// Alerts tab (caregiver)
    Alerts,
    /// Medication reminders tab (patient)
    Reminders,
    /// Settings tab (both roles)
    Settings,

    // Detail screens pushed above the tab navigator
    /// One patient's record (caregiver)
    PatientDetail {
        /// Identifier of the patient being viewed
        patient_id: String,
    },
    /// One alert's detail (caregiver)
    AlertDetail {
        /// Identifier of the alert being viewed
        alert_id: String,
    },
    /// One reminder's detail (patient)
    ReminderDetail {
        /// Identifier of the reminder being viewed
        reminder_id: String,
    },
}

impl Route {
    /// Route name as known to the host runtime
    pub fn name(&self) -> &'static str {
        match self {
            Route::SignIn => "sign-in",
            Route::Consent { .. } => "consent",
            Route::Main { .. } => "main",
            Route::Home => "home",
            Route::Patients => "patients",
            Route::Alerts => "alerts",
            Route::Reminders => "reminders",
            Route::Settings => "settings",
            Route::PatientDetail { .. } => "patient-detail",
            Route::AlertDetail { .. } => "alert-detail",
            Route::ReminderDetail { .. } => "reminder-detail",
        }
    }

    /// Which navigation scope the route lives in
    pub fn scope(&self) -> Scope {
        match self {
            Route::Home | Route::Patients | Route::Alerts | Route::Reminders | Route::Settings => {
                Scope::Tabs
            }
            _ => Scope::RootStack,
        }
    }
}

/// Navigation scope a route name resolves in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The root stack (push/pop semantics)
    RootStack,
    /// The nested tab scope (switch semantics)
    Tabs,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::RootStack => write!(f, "root-stack"),
            Scope::Tabs => write!(f, "tabs"),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Navigation and mapping errors
///
/// All three variants are programming or construction errors: a
/// correctly wired table never produces them at runtime. They are typed
/// rather than panicking so tests and development builds can observe
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The name is absent from the scope's route table
    #[error("unknown route `{name}` in {scope} scope")]
    UnknownRoute {
        /// Scope the lookup ran in
        scope: Scope,
        /// The unresolved name
        name: String,
    },
    /// The supplied parameter bundle does not satisfy the declared shape
    #[error("parameters for `{name}` do not satisfy the `{expected}` shape")]
    InvalidParameterShape {
        /// Route whose shape was violated
        name: String,
        /// The shape the descriptor declares
        expected: ParamShape,
    },
    /// No route is bound to the tab; the bijection was built inconsistently
    #[error("no route bound to tab `{tab:?}`")]
    TabMapping {
        /// The unbound tab
        tab: TabId,
    },
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;

// =============================================================================
// Route table
// =============================================================================

/// Parameter bundle supplied by the host runtime
pub type RouteParams = HashMap<String, String>;

/// Declared parameter shape of a route, exhaustively enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamShape {
    /// No parameters accepted
    None,
    /// Exactly one `role` parameter (`patient` / `caregiver`)
    Role,
    /// Exactly one non-empty `id` parameter
    EntityId,
}

impl fmt::Display for ParamShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamShape::None => write!(f, "none"),
            ParamShape::Role => write!(f, "role"),
            ParamShape::EntityId => write!(f, "entity-id"),
        }
    }
}

/// Static presentation options carried by every route
///
/// A closed record: the renderer gets exactly these fields and nothing
/// else, and unrecognized keys are rejected when options arrive over the
/// dynamic boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScreenOptions {
    /// Whether the host shows a header bar for this screen
    pub header_shown: bool,
    /// Static header title, when the header is shown
    pub title: Option<String>,
}

impl ScreenOptions {
    /// Header shown with a static title
    pub fn titled(title: &str) -> Self {
        Self {
            header_shown: true,
            title: Some(title.to_string()),
        }
    }

    /// No header at all
    pub fn headerless() -> Self {
        Self {
            header_shown: false,
            title: None,
        }
    }
}

/// One screen's entry in the route table
#[derive(Debug)]
pub struct RouteDescriptor {
    /// Unique name within its scope
    pub name: &'static str,
    /// Scope the name resolves in
    pub scope: Scope,
    /// Declared parameter shape
    pub shape: ParamShape,
    /// Static presentation options
    pub options: ScreenOptions,
    build: fn(&RouteParams) -> Option<Route>,
}

/// A (route, parameters) pair ready to hand to the navigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    /// The fully typed destination
    pub route: Route,
}

impl NavigationTarget {
    /// Target for an already-typed route
    pub fn to(route: Route) -> Self {
        Self { route }
    }
}

/// Closed set of valid route names per scope, built per role
///
/// Every navigable name resolves to exactly one descriptor in exactly
/// one scope; the table is constructed once at composition time and
/// never mutated.
pub struct RouteTable {
    role: Role,
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Build the table for a role
    ///
    /// Both roles share the root-stack screens; the tab scope and the
    /// detail screens differ per role.
    pub fn for_role(role: Role) -> Self {
        let mut table = Self {
            role,
            routes: Vec::new(),
        };

        table.add(
            "sign-in",
            Scope::RootStack,
            ParamShape::None,
            ScreenOptions::headerless(),
            |_| Some(Route::SignIn),
        );
        table.add(
            "consent",
            Scope::RootStack,
            ParamShape::Role,
            ScreenOptions::titled("Before You Continue"),
            |params| {
                Some(Route::Consent {
                    role: Role::parse(params.get("role")?)?,
                })
            },
        );
        table.add(
            "main",
            Scope::RootStack,
            ParamShape::Role,
            ScreenOptions::headerless(),
            |params| {
                Some(Route::Main {
                    role: Role::parse(params.get("role")?)?,
                })
            },
        );

        table.add(
            "home",
            Scope::Tabs,
            ParamShape::None,
            ScreenOptions::titled("Home"),
            |_| Some(Route::Home),
        );
        table.add(
            "settings",
            Scope::Tabs,
            ParamShape::None,
            ScreenOptions::titled("Settings"),
            |_| Some(Route::Settings),
        );

        match role {
            Role::Patient => {
                table.add(
                    "reminders",
                    Scope::Tabs,
                    ParamShape::None,
                    ScreenOptions::titled("Reminders"),
                    |_| Some(Route::Reminders),
                );
                table.add(
                    "reminder-detail",
                    Scope::RootStack,
                    ParamShape::EntityId,
                    ScreenOptions::titled("Reminder"),
                    |params| {
                        Some(Route::ReminderDetail {
                            reminder_id: params.get("id")?.clone(),
                        })
                    },
                );
            }
            Role::Caregiver => {
                table.add(
                    "patients",
                    Scope::Tabs,
                    ParamShape::None,
                    ScreenOptions::titled("Patients"),
                    |_| Some(Route::Patients),
                );
                table.add(
                    "alerts",
                    Scope::Tabs,
                    ParamShape::None,
                    ScreenOptions::titled("Alerts"),
                    |_| Some(Route::Alerts),
                );
                table.add(
                    "patient-detail",
                    Scope::RootStack,
                    ParamShape::EntityId,
                    ScreenOptions::titled("Patient"),
                    |params| {
                        Some(Route::PatientDetail {
                            patient_id: params.get("id")?.clone(),
                        })
                    },
                );
                table.add(
                    "alert-detail",
                    Scope::RootStack,
                    ParamShape::EntityId,
                    ScreenOptions::titled("Alert"),
                    |params| {
                        Some(Route::AlertDetail {
                            alert_id: params.get("id")?.clone(),
                        })
                    },
                );
            }
        }

        table
    }

    fn add(
        &mut self,
        name: &'static str,
        scope: Scope,
        shape: ParamShape,
        options: ScreenOptions,
        build: fn(&RouteParams) -> Option<Route>,
    ) {
        // A name must resolve in exactly one scope.
        debug_assert!(
            self.routes.iter().all(|r| r.name != name),
            "duplicate route name `{name}`"
        );
        self.routes.push(RouteDescriptor {
            name,
            scope,
            shape,
            options,
            build,
        });
    }

    /// Role this table was built for
    pub fn role(&self) -> Role {
        self.role
    }

    /// All registered descriptors
    pub fn descriptors(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Look up a descriptor by scope and name
    pub fn resolve(&self, scope: Scope, name: &str) -> Result<&RouteDescriptor> {
        self.routes
            .iter()
            .find(|r| r.scope == scope && r.name == name)
            .ok_or_else(|| NavError::UnknownRoute {
                scope,
                name: name.to_string(),
            })
    }

    /// Build a validated target from host-supplied parameters
    ///
    /// Fails with [`NavError::InvalidParameterShape`] when the bundle
    /// does not satisfy the descriptor's declared shape, including when
    /// it carries unrecognized keys.
    pub fn target(&self, scope: Scope, name: &str, params: &RouteParams) -> Result<NavigationTarget> {
        let descriptor = self.resolve(scope, name)?;

        let shape_ok = match descriptor.shape {
            ParamShape::None => params.is_empty(),
            ParamShape::Role => {
                params.len() == 1
                    && params
                        .get("role")
                        .is_some_and(|value| Role::parse(value).is_some())
            }
            ParamShape::EntityId => {
                params.len() == 1 && params.get("id").is_some_and(|value| !value.is_empty())
            }
        };
        if !shape_ok {
            return Err(NavError::InvalidParameterShape {
                name: name.to_string(),
                expected: descriptor.shape,
            });
        }

        let route = (descriptor.build)(params).ok_or_else(|| NavError::InvalidParameterShape {
            name: name.to_string(),
            expected: descriptor.shape,
        })?;
        Ok(NavigationTarget::to(route))
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// A root-stack entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route at this position
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Stack navigator nesting the role-scoped tab navigator
///
/// The stack is a last-in-first-out sequence of targets seeded with the
/// fixed initial route ([`Route::SignIn`]). Entering [`Route::Main`]
/// pushes a single entry and constructs the role's tab mapping; the tab
/// selection inside it is independent state that tab switches mutate
/// without touching the stack.
pub struct Navigator {
    stack: Vec<StackEntry>,
    active_tab: TabId,
    mapping: Option<TabMapping>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Navigator at the fixed initial route (sign-in)
    pub fn new() -> Self {
        Self {
            stack: vec![StackEntry::new(Route::SignIn)],
            active_tab: TabId::Home,
            mapping: None,
        }
    }

    /// The route on top of the root stack
    pub fn current_route(&self) -> &Route {
        &self
            .stack
            .last()
            .expect("stack is seeded with the initial route and never drains")
            .route
    }

    /// The route the user is actually looking at
    ///
    /// When the top of the stack is the tab navigator, this is the
    /// active tab's root route rather than [`Route::Main`] itself.
    pub fn focused_route(&self) -> Route {
        if let Route::Main { .. } = self.current_route() {
            if let Some(mapping) = &self.mapping {
                if let Ok(route) = mapping.route_for(self.active_tab) {
                    return route;
                }
            }
        }
        self.current_route().clone()
    }

    /// Currently selected tab (meaningful once inside the tab scope)
    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// The role's tab mapping, once [`Route::Main`] has been entered
    pub fn mapping(&self) -> Option<&TabMapping> {
        self.mapping.as_ref()
    }

    /// Push (stack scope) or switch (tab scope) to the target
    ///
    /// Navigating to a tab-scope route before the tab navigator is
    /// mounted, or to a tab root outside the current role's set, is a
    /// wiring bug and fails with [`NavError::UnknownRoute`].
    pub fn navigate(&mut self, target: NavigationTarget) -> Result<()> {
        let route = target.route;
        match route.scope() {
            Scope::RootStack => {
                if let Route::Main { role } = route {
                    let mapping = TabMapping::for_role(role);
                    self.active_tab = mapping.default_tab();
                    self.mapping = Some(mapping);
                }
                tracing::debug!(route = route.name(), depth = self.stack.len() + 1, "push");
                self.stack.push(StackEntry::new(route));
                Ok(())
            }
            Scope::Tabs => {
                let mapping = self.mapping.as_ref().ok_or_else(|| NavError::UnknownRoute {
                    scope: Scope::Tabs,
                    name: route.name().to_string(),
                })?;
                let tab = mapping
                    .tab_of(&route)
                    .ok_or_else(|| NavError::UnknownRoute {
                        scope: Scope::Tabs,
                        name: route.name().to_string(),
                    })?;
                tracing::debug!(tab = ?tab, "switch tab");
                self.active_tab = tab;
                Ok(())
            }
        }
    }

    /// Pop the most recent stack entry
    ///
    /// At the root this is a no-op returning `false`, never an error;
    /// the policy is deliberate and consistent every time.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let popped = self.stack.pop().expect("len checked above");
        if matches!(popped.route, Route::Main { .. }) {
            // The tab selection belongs to the popped entry. If another
            // Main entry is now on top, remount its role's tab scope at
            // the default tab; otherwise the tab scope is gone.
            let top_role = match self.current_route() {
                Route::Main { role } => Some(*role),
                _ => None,
            };
            match top_role {
                Some(role) => {
                    let mapping = TabMapping::for_role(role);
                    self.active_tab = mapping.default_tab();
                    self.mapping = Some(mapping);
                }
                None => {
                    self.mapping = None;
                    self.active_tab = TabId::Home;
                }
            }
        }
        tracing::debug!(route = popped.route.name(), depth = self.stack.len(), "pop");
        true
    }

    /// Whether a pop would change anything
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Current stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// All stack entries, bottom to top
    pub fn entries(&self) -> &[StackEntry] {
        &self.stack
    }
}

// =============================================================================
// Tests
// =============================================================================
