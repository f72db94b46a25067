use crate::{
    auth::AuthFlow,
    routes::{Resolution, RouteAuthorizer},
};

/// Describes where `path` leads for the current session.
#[must_use]
pub fn describe(auth: &AuthFlow, path: &str) -> String {
    let routes = RouteAuthorizer::new(auth.session().clone());
    match routes.resolve(path) {
        Resolution::Render(view) => format!("{path} -> {view}"),
        Resolution::Redirect(target) => {
            format!("{path} -> redirect {target} -> {}", routes.navigate(target))
        }
    }
}
