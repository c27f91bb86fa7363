use serde::{Deserialize, Serialize};

use super::page_meta::{PageMeta, Robots};

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const APPOINTMENTS_PATH: &str = "/appointments";
pub const CALENDAR_PATH: &str = "/calendar";
pub const PATIENTS_PATH: &str = "/patients";
pub const REPORTS_PATH: &str = "/reports";
pub const SIGN_IN_PATH: &str = "/sign-in";

// ---------------------------------------------------------------------------
// Per-group metadata
// ---------------------------------------------------------------------------

pub const DASHBOARD_METADATA: PageMeta =
    PageMeta::new("Dashboard", "Overview of today's clinic activity");
pub const APPOINTMENTS_METADATA: PageMeta =
    PageMeta::new("Appointments", "Schedule and manage patient appointments");
pub const CALENDAR_METADATA: PageMeta =
    PageMeta::new("Calendar", "Clinic calendar and practitioner availability");
pub const PATIENTS_METADATA: PageMeta =
    PageMeta::new("Patients", "Patient records and contact details");
pub const REPORTS_METADATA: PageMeta =
    PageMeta::new("Reports", "Clinic activity and revenue reports");
pub const AUTH_METADATA: PageMeta =
    PageMeta::new("Sign in", "Sign in to the clinic management system").with_robots(Robots::NONE);

/// A set of routes sharing one layout and one metadata declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteGroup {
    Dashboard,
    Appointments,
    Calendar,
    Patients,
    Reports,
    Auth,
}

impl RouteGroup {
    pub fn all() -> [RouteGroup; 6] {
        [
            RouteGroup::Dashboard,
            RouteGroup::Appointments,
            RouteGroup::Calendar,
            RouteGroup::Patients,
            RouteGroup::Reports,
            RouteGroup::Auth,
        ]
    }

    /// Groups shown in the dashboard sidebar, in display order.
    pub fn navigation() -> [RouteGroup; 5] {
        [
            RouteGroup::Dashboard,
            RouteGroup::Appointments,
            RouteGroup::Calendar,
            RouteGroup::Patients,
            RouteGroup::Reports,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            RouteGroup::Dashboard => DASHBOARD_PATH,
            RouteGroup::Appointments => APPOINTMENTS_PATH,
            RouteGroup::Calendar => CALENDAR_PATH,
            RouteGroup::Patients => PATIENTS_PATH,
            RouteGroup::Reports => REPORTS_PATH,
            RouteGroup::Auth => SIGN_IN_PATH,
        }
    }

    pub fn metadata(&self) -> PageMeta {
        match self {
            RouteGroup::Dashboard => DASHBOARD_METADATA,
            RouteGroup::Appointments => APPOINTMENTS_METADATA,
            RouteGroup::Calendar => CALENDAR_METADATA,
            RouteGroup::Patients => PATIENTS_METADATA,
            RouteGroup::Reports => REPORTS_METADATA,
            RouteGroup::Auth => AUTH_METADATA,
        }
    }

    pub fn label(&self) -> &'static str {
        self.metadata().title
    }

    /// Icon name understood by the frontend icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            RouteGroup::Dashboard => "layout-dashboard",
            RouteGroup::Appointments => "clipboard",
            RouteGroup::Calendar => "calendar",
            RouteGroup::Patients => "users",
            RouteGroup::Reports => "bar-chart",
            RouteGroup::Auth => "log-in",
        }
    }

    /// Maps a URL path to its route group.
    ///
    /// Query string and fragment are ignored. A prefix only matches on a
    /// segment boundary, so `/patients/42` belongs to `Patients` while
    /// `/patientsx` belongs to nothing.
    pub fn resolve(path: &str) -> Option<RouteGroup> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        Self::all().into_iter().find(|group| {
            path.strip_prefix(group.path())
                .map(|rest| rest.is_empty() || rest.starts_with('/'))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_and_nested() {
        assert_eq!(RouteGroup::resolve("/dashboard"), Some(RouteGroup::Dashboard));
        assert_eq!(RouteGroup::resolve("/patients/42"), Some(RouteGroup::Patients));
        assert_eq!(
            RouteGroup::resolve("/appointments/?tab=past"),
            Some(RouteGroup::Appointments)
        );
        assert_eq!(RouteGroup::resolve("/sign-in#top"), Some(RouteGroup::Auth));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(RouteGroup::resolve("/"), None);
        assert_eq!(RouteGroup::resolve(""), None);
        assert_eq!(RouteGroup::resolve("/patientsx"), None);
        assert_eq!(RouteGroup::resolve("/billing"), None);
    }

    #[test]
    fn test_every_group_resolves_its_own_path() {
        for group in RouteGroup::all() {
            assert_eq!(RouteGroup::resolve(group.path()), Some(group));
        }
    }

    #[test]
    fn test_navigation_excludes_auth() {
        let nav = RouteGroup::navigation();
        assert!(!nav.contains(&RouteGroup::Auth));
        assert_eq!(nav.len(), RouteGroup::all().len() - 1);
    }

    #[test]
    fn test_only_auth_is_hidden_from_crawlers() {
        for group in RouteGroup::all() {
            assert_eq!(
                group.metadata().robots.is_some(),
                group == RouteGroup::Auth,
                "{:?}",
                group
            );
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&RouteGroup::Appointments).unwrap();
        assert_eq!(json, "\"appointments\"");
        let group: RouteGroup = serde_json::from_str("\"auth\"").unwrap();
        assert_eq!(group, RouteGroup::Auth);
    }
}
