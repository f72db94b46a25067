//! Route authorization. Two fixed tables exist, one for anonymous visitors
//! and one for signed-in users, and the session alone decides which one is
//! consulted. Protected views are absent from the public table, so they cannot
//! be produced while anonymous. Unmatched paths redirect home in both tables.

mod matcher;

use crate::{
    api::types::UserProfile,
    session::{Session, SessionStore},
};
use matcher::match_pattern;
use std::fmt;
use tracing::debug;

pub const HOME_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewKind {
    Home,
    Login,
    Signup,
    CompanyList,
    JobList,
    CompanyDetail,
    Profile,
}

#[derive(Clone, Copy, Debug)]
struct RouteEntry {
    pattern: &'static str,
    view: ViewKind,
}

const PUBLIC_ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: "/",
        view: ViewKind::Home,
    },
    RouteEntry {
        pattern: "/login",
        view: ViewKind::Login,
    },
    RouteEntry {
        pattern: "/signup",
        view: ViewKind::Signup,
    },
];

const PROTECTED_ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: "/",
        view: ViewKind::Home,
    },
    RouteEntry {
        pattern: "/companies",
        view: ViewKind::CompanyList,
    },
    RouteEntry {
        pattern: "/jobs",
        view: ViewKind::JobList,
    },
    RouteEntry {
        pattern: "/companies/:name",
        view: ViewKind::CompanyDetail,
    },
    RouteEntry {
        pattern: "/profile",
        view: ViewKind::Profile,
    },
];

/// A screen the router can render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Signup,
    CompanyList,
    JobList,
    CompanyDetail { name: String },
    /// The profile form, seeded from the signed-in user.
    Profile(UserProfile),
}

impl fmt::Display for View {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(formatter, "home"),
            Self::Login => write!(formatter, "login"),
            Self::Signup => write!(formatter, "signup"),
            Self::CompanyList => write!(formatter, "company list"),
            Self::JobList => write!(formatter, "job list"),
            Self::CompanyDetail { name } => write!(formatter, "company detail ({name})"),
            Self::Profile(user) => write!(formatter, "profile ({})", user.username),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    Redirect(&'static str),
}

/// The table selected for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTable<'a> {
    Public,
    Protected(&'a UserProfile),
}

impl<'a> RouteTable<'a> {
    /// Anonymous sessions get the public table, signed-in ones the protected table.
    #[must_use]
    pub fn select(session: &'a Session) -> Self {
        match session.current_user() {
            Some(user) => Self::Protected(user),
            None => Self::Public,
        }
    }

    fn entries(self) -> &'static [RouteEntry] {
        match self {
            Self::Public => PUBLIC_ROUTES,
            Self::Protected(_) => PROTECTED_ROUTES,
        }
    }

    /// Path patterns reachable through this table.
    #[must_use]
    pub fn patterns(self) -> Vec<&'static str> {
        self.entries().iter().map(|entry| entry.pattern).collect()
    }

    /// Resolves `path` against this table; first match wins.
    #[must_use]
    pub fn resolve(self, path: &str) -> Resolution {
        for entry in self.entries() {
            if let Some(param) = match_pattern(entry.pattern, path) {
                return Resolution::Render(self.build(entry.view, param));
            }
        }
        Resolution::Redirect(HOME_PATH)
    }

    fn build(self, kind: ViewKind, param: Option<String>) -> View {
        match (kind, self) {
            (ViewKind::Home, _) => View::Home,
            (ViewKind::Login, _) => View::Login,
            (ViewKind::Signup, _) => View::Signup,
            (ViewKind::CompanyList, _) => View::CompanyList,
            (ViewKind::JobList, _) => View::JobList,
            (ViewKind::CompanyDetail, _) => View::CompanyDetail {
                name: param.unwrap_or_default(),
            },
            (ViewKind::Profile, Self::Protected(user)) => View::Profile(user.clone()),
            // The public table has no profile entry.
            (ViewKind::Profile, Self::Public) => View::Home,
        }
    }
}

/// Decides which view a path renders for the current session. Re-evaluated on
/// every call; holds no state of its own beyond the session handle.
#[derive(Clone, Debug)]
pub struct RouteAuthorizer {
    session: SessionStore,
}

impl RouteAuthorizer {
    #[must_use]
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        let session = self.session.snapshot();
        let resolution = RouteTable::select(&session).resolve(path);
        debug!(
            path,
            authenticated = session.is_authenticated(),
            resolution = ?resolution,
            "route resolved"
        );
        resolution
    }

    /// Resolves `path` and follows a redirect to the view that ends up rendered.
    #[must_use]
    pub fn navigate(&self, path: &str) -> View {
        let session = self.session.snapshot();
        let table = RouteTable::select(&session);
        match table.resolve(path) {
            Resolution::Render(view) => view,
            Resolution::Redirect(target) => match table.resolve(target) {
                Resolution::Render(view) => view,
                Resolution::Redirect(_) => View::Home,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::alice;
    use secrecy::SecretString;

    fn signed_in() -> SessionStore {
        let store = SessionStore::new();
        store.set_session(SecretString::from("abc".to_string()), alice());
        store
    }

    #[test]
    fn anonymous_reaches_public_routes_only() {
        let routes = RouteAuthorizer::new(SessionStore::new());
        assert_eq!(routes.resolve("/"), Resolution::Render(View::Home));
        assert_eq!(routes.resolve("/login"), Resolution::Render(View::Login));
        assert_eq!(routes.resolve("/signup"), Resolution::Render(View::Signup));
        for path in ["/companies", "/jobs", "/companies/acme", "/profile", "/nope"] {
            assert_eq!(routes.resolve(path), Resolution::Redirect(HOME_PATH), "{path}");
        }
    }

    #[test]
    fn anonymous_companies_navigates_home() {
        let routes = RouteAuthorizer::new(SessionStore::new());
        assert_eq!(routes.navigate("/companies"), View::Home);
    }

    #[test]
    fn signed_in_reaches_protected_routes() {
        let routes = RouteAuthorizer::new(signed_in());
        assert_eq!(routes.navigate("/companies"), View::CompanyList);
        assert_eq!(routes.navigate("/jobs"), View::JobList);
        assert_eq!(
            routes.navigate("/companies/anderson-arias"),
            View::CompanyDetail {
                name: "anderson-arias".to_string()
            }
        );
        assert_eq!(routes.navigate("/profile"), View::Profile(alice()));
        assert_eq!(routes.navigate("/"), View::Home);
    }

    #[test]
    fn signed_in_login_and_signup_redirect_home() {
        let routes = RouteAuthorizer::new(signed_in());
        assert_eq!(routes.resolve("/login"), Resolution::Redirect(HOME_PATH));
        assert_eq!(routes.resolve("/signup"), Resolution::Redirect(HOME_PATH));
        assert_eq!(routes.navigate("/login"), View::Home);
    }

    #[test]
    fn decision_follows_session_changes() {
        let store = SessionStore::new();
        let routes = RouteAuthorizer::new(store.clone());
        assert_eq!(routes.navigate("/profile"), View::Home);

        store.set_session(SecretString::from("abc".to_string()), alice());
        assert_eq!(routes.navigate("/profile"), View::Profile(alice()));

        store.clear_session();
        assert_eq!(routes.navigate("/profile"), View::Home);
    }

    #[test]
    fn tables_are_disjoint_apart_from_home() {
        let user = alice();
        let public = RouteTable::Public.patterns();
        let protected = RouteTable::Protected(&user).patterns();
        let shared: Vec<&str> = public
            .into_iter()
            .filter(|pattern| protected.contains(pattern))
            .collect();
        assert_eq!(shared, vec![HOME_PATH]);
    }

    #[test]
    fn view_display_names() {
        assert_eq!(View::CompanyList.to_string(), "company list");
        assert_eq!(
            View::CompanyDetail {
                name: "acme".to_string()
            }
            .to_string(),
            "company detail (acme)"
        );
        assert_eq!(View::Profile(alice()).to_string(), "profile (alice)");
    }
}
